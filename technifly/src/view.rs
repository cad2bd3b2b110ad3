use iced::widget::{Space, container, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::sidebar::view::{self as sidebar_view, SidebarViewProps};

const PAGE_PADDING: f32 = 12.0;

/// Compose the sidebar next to the (empty) content area.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let sidebar = &app.widgets.sidebar;
    let theme = ThemeProps::new(sidebar.theme());

    let panel = sidebar_view::view(SidebarViewProps {
        vm: sidebar.vm(app.frame_at),
        theme,
    })
    .map(AppEvent::Sidebar);

    let content = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill);

    container(row![panel, content].height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .style(style::page_style(theme))
        .into()
}
