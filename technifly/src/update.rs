use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(event) => routers::sidebar::route(app, event),
        AppEvent::Frame(at) => {
            app.frame_at = at;
            Task::none()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::update;
    use crate::app::{App, AppEvent};
    use crate::settings::AppSettings;
    use crate::widgets::sidebar::SidebarEvent;

    #[test]
    fn given_toggle_then_late_frame_when_updated_then_sidebar_settles_closed() {
        let (mut app, _task) = App::new(AppSettings::default());

        let _toggle = update(&mut app, AppEvent::Sidebar(SidebarEvent::Toggle));
        assert!(app.widgets.sidebar.is_animating(app.frame_at));

        let later = app.frame_at + std::time::Duration::from_secs(1);
        let _frame = update(&mut app, AppEvent::Frame(later));

        assert_eq!(app.frame_at, later);
        assert!(!app.widgets.sidebar.is_animating(app.frame_at));
        assert!(!app.widgets.sidebar.is_opened());
        assert_eq!(app.widgets.sidebar.vm(app.frame_at).layout.width, 80.0);
    }

    #[test]
    fn given_frame_event_when_updated_then_sidebar_state_is_untouched() {
        let (mut app, _task) = App::new(AppSettings::default());
        let at = Instant::now();

        let _frame = update(&mut app, AppEvent::Frame(at));

        assert!(app.widgets.sidebar.is_opened());
        assert_eq!(app.frame_at, at);
    }
}
