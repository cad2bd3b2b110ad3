use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::sidebar::{SidebarCtx, SidebarEvent};

/// Route a sidebar event into the widget reducer.
pub(crate) fn route(app: &mut App, event: SidebarEvent) -> Task<AppEvent> {
    route_at(app, event, Instant::now())
}

fn route_at(
    app: &mut App,
    event: SidebarEvent,
    now: Instant,
) -> Task<AppEvent> {
    app.frame_at = now;

    let ctx = SidebarCtx {
        navigator: app.navigator.as_ref(),
        now,
    };

    let task = app.widgets.sidebar.reduce(event, &ctx);

    if event == SidebarEvent::Toggle {
        let phase = if app.widgets.sidebar.is_opened() {
            "opened"
        } else {
            "closed"
        };
        log::debug!("sidebar {phase}");
    }

    task.map(AppEvent::Sidebar)
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::route_at;
    use crate::app::App;
    use crate::navigation::testing::RecordingNavigator;
    use crate::settings::AppSettings;
    use crate::widgets::sidebar::SidebarEvent;

    fn app_with_recorder() -> (App, RecordingNavigator) {
        let navigator = RecordingNavigator::default();
        let app = App::with_navigator(
            AppSettings::default(),
            Box::new(navigator.clone()),
        );
        (app, navigator)
    }

    #[test]
    fn given_navigate_event_when_routed_then_injected_navigator_receives_path()
    {
        let (mut app, navigator) = app_with_recorder();
        let now = Instant::now();
        let before = app.widgets.sidebar.vm(now);

        let _task =
            route_at(&mut app, SidebarEvent::Navigate { path: "/costs" }, now);

        assert_eq!(navigator.calls(), vec![String::from("/costs")]);
        assert_eq!(app.widgets.sidebar.vm(now), before);
    }

    #[test]
    fn given_toggle_event_when_routed_then_frame_clock_starts_transition() {
        let (mut app, navigator) = app_with_recorder();
        let now = Instant::now();

        let _task = route_at(&mut app, SidebarEvent::Toggle, now);

        assert_eq!(app.frame_at, now);
        assert!(!app.widgets.sidebar.is_opened());
        assert!(app.widgets.sidebar.is_animating(app.frame_at));
        assert!(navigator.calls().is_empty());
    }
}
