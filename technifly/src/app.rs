#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};

use crate::navigation::{Navigator, TraceNavigator};
use crate::settings::AppSettings;
use crate::theme::ThemeRole;
use crate::widgets::Widgets;
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Redraw tick while a transition runs
    Frame(Instant),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) navigator: Box<dyn Navigator>,
    pub(crate) widgets: Widgets,
    /// Instant the current frame is rendered for.
    pub(crate) frame_at: Instant,
}

impl App {
    /// Initialize the application with the trace-only navigator.
    pub(crate) fn new(settings: AppSettings) -> (Self, Task<AppEvent>) {
        let app = Self::with_navigator(settings, Box::new(TraceNavigator));
        (app, Task::none())
    }

    /// Build the application around an injected navigation collaborator.
    pub(crate) fn with_navigator(
        settings: AppSettings,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let sidebar = SidebarWidget::new(settings.color_mode())
            .with_overrides(settings.theme_overrides());

        let theme = sidebar.theme();
        log::info!("sidebar mounted in {} mode", theme.mode().as_str());
        for role in ThemeRole::ALL {
            log::debug!(
                "{} ({}) = {:?}",
                role.key(),
                theme.variable(role),
                theme.color(role)
            );
        }

        Self {
            navigator,
            widgets: Widgets { sidebar },
            frame_at: Instant::now(),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Technifly")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(self.widgets.sidebar.theme())
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
