/// Events emitted by the sidebar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SidebarEvent {
    /// Flip between open and closed.
    Toggle,
    /// A navigation item was clicked.
    Navigate { path: &'static str },
    /// The pointer entered a navigation item.
    ItemEntered { path: &'static str },
    /// The pointer left a navigation item.
    ItemLeft { path: &'static str },
    /// A navigation item is being held down.
    ItemPressed { path: &'static str },
}
