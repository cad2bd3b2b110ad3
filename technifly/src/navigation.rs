/// Routing collaborator invoked when a sidebar item is pressed.
///
/// The sidebar never routes on its own; it hands the target path to whatever
/// navigator the host injected.
pub(crate) trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigator that only traces the intended destination.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TraceNavigator;

impl Navigator for TraceNavigator {
    fn navigate(&self, path: &str) {
        log::info!("going to \"{path}\"");
    }
}
