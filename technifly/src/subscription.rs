use iced::{Subscription, window};

use super::{App, AppEvent};

/// Request animation frames only while the sidebar transition runs.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    if app.widgets.sidebar.is_animating(app.frame_at) {
        window::frames().map(AppEvent::Frame)
    } else {
        Subscription::none()
    }
}
