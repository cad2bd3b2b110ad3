use std::time::Instant;

use iced::Task;

use super::event::SidebarEvent;
use super::state::SidebarState;
use crate::navigation::Navigator;

/// Read-only context for sidebar reduction.
pub(crate) struct SidebarCtx<'a> {
    /// Collaborator that receives navigation requests.
    pub(crate) navigator: &'a dyn Navigator,
    /// Instant the event is handled at.
    pub(crate) now: Instant,
}

/// Reduce a sidebar event into state updates.
pub(super) fn reduce(
    state: &mut SidebarState,
    event: SidebarEvent,
    ctx: &SidebarCtx<'_>,
) -> Task<SidebarEvent> {
    match event {
        SidebarEvent::Toggle => {
            state.toggle(ctx.now);
            Task::none()
        },
        SidebarEvent::Navigate { path } => {
            state.release_item();
            ctx.navigator.navigate(path);
            Task::none()
        },
        SidebarEvent::ItemEntered { path } => {
            state.enter_item(path);
            Task::none()
        },
        SidebarEvent::ItemLeft { path } => {
            state.leave_item(path);
            Task::none()
        },
        SidebarEvent::ItemPressed { path } => {
            state.press_item(path);
            Task::none()
        },
    }
}
