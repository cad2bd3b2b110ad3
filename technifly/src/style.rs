use iced::widget::{button, container};
use iced::{Border, Color};

use crate::theme::{SidebarColors, ThemeProps};
use crate::widgets::sidebar::ItemStatus;

const PANEL_RADIUS: f32 = 15.0;
const NAV_ITEM_RADIUS: f32 = 10.0;

/// Scale the alpha channel of `color` by `opacity`.
pub(crate) fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

pub(crate) fn page_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let background = theme.theme.page_background();
    move |_theme: &iced::Theme| container::Style {
        background: Some(background.into()),
        ..Default::default()
    }
}

pub(crate) fn sidebar_panel_style(
    colors: SidebarColors,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_theme: &iced::Theme| container::Style {
        background: Some(colors.sidebar_background.into()),
        text_color: Some(colors.text_color),
        border: Border {
            radius: PANEL_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Round toggle button with a fixed background.
pub(crate) fn toggle_style(
    background: Color,
    size: f32,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_theme, _status| button::Style {
        background: Some(background.into()),
        border: Border {
            radius: (size / 2.0).into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Navigation item: transparent at rest, hover and pressed colors from the
/// theme. `label_opacity` fades the inherited label color only.
pub(crate) fn nav_item_style(
    colors: SidebarColors,
    status: ItemStatus,
    label_opacity: f32,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let (background, text_color) = nav_item_colors(&colors, status);

    move |_theme: &iced::Theme| container::Style {
        background: background.map(Into::into),
        text_color: Some(with_opacity(text_color, label_opacity)),
        border: Border {
            radius: NAV_ITEM_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Background and foreground color of a navigation item for `status`.
/// Icon and label share the foreground color.
pub(crate) fn nav_item_colors(
    colors: &SidebarColors,
    status: ItemStatus,
) -> (Option<Color>, Color) {
    match status {
        ItemStatus::Hovered => {
            (Some(colors.hover_background), colors.hover_text_color)
        },
        ItemStatus::Pressed => {
            (Some(colors.active_background), colors.active_text_color)
        },
        ItemStatus::Rest => (None, colors.text_color),
    }
}
