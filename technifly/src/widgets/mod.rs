pub(crate) mod sidebar;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) sidebar: sidebar::SidebarWidget,
}
