use iced::widget::{
    Column, Space, button, column, container, mouse_area, row, stack, svg,
    text,
};
use iced::{Element, Font, Length, Padding, Theme, alignment, font, mouse};

use super::event::SidebarEvent;
use super::model::{
    ItemStatus, LOGO_SIZE, RouteEntry, SIDEBAR_TITLE, SidebarLayout,
    SidebarViewModel, bottom_routes, primary_routes,
};
use crate::icons;
use crate::style;
use crate::theme::{SidebarColors, ThemeProps};

const HEADER_PADDING: f32 = 16.0;
const TITLE_SIZE: f32 = 19.2;
const TOGGLE_SIZE: f32 = 20.0;
const TOGGLE_PADDING: f32 = 1.0;
const TOGGLE_ICON_SIZE: f32 = 12.0;
const NAV_ITEM_MARGIN_Y: f32 = 8.0;
const NAV_ITEM_MARGIN_X: f32 = 20.0;
const NAV_ITEM_PADDING: f32 = 10.0;
const NAV_ITEM_HEIGHT: f32 = 24.0;
const NAV_ICON_SIZE: f32 = 18.0;
const NAV_LABEL_SPACING: f32 = 8.0;
const NAV_LABEL_SIZE: f32 = 15.0;

/// Props for the sidebar view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarViewProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar panel with its overhanging toggle control.
pub(crate) fn view(
    props: SidebarViewProps<'_>,
) -> Element<'_, SidebarEvent, Theme, iced::Renderer> {
    let colors = *props.theme.theme.colors();
    let layout = props.vm.layout;

    let content = column![
        header(&colors, &layout),
        vertical_gap(),
        nav_section(primary_routes(), &colors, &props.vm),
        vertical_gap(),
        nav_section(bottom_routes(), &colors, &props.vm),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let panel = container(content)
        .width(Length::Fixed(layout.width))
        .height(Length::Fill)
        .clip(true)
        .style(style::sidebar_panel_style(colors));

    // The gutter reserves room for the part of the toggle hanging past the
    // panel edge.
    let gutter = container(Space::new())
        .width(Length::Fixed(layout.toggle_overhang))
        .height(Length::Fill);
    let base = row![panel, gutter].height(Length::Fill);

    let toggle_layer = container(toggle(props, &layout))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(Padding {
            top: HEADER_PADDING + (LOGO_SIZE - TOGGLE_SIZE) / 2.0,
            ..Padding::ZERO
        });

    stack![base, toggle_layer].height(Length::Fill).into()
}

fn header<'a>(
    colors: &SidebarColors,
    layout: &SidebarLayout,
) -> Element<'a, SidebarEvent, Theme, iced::Renderer> {
    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE));

    let logo_margin = container(Space::new())
        .width(Length::Fixed(layout.logo_margin))
        .height(Length::Fixed(LOGO_SIZE));

    let title = text(SIDEBAR_TITLE)
        .size(TITLE_SIZE)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        })
        .wrapping(text::Wrapping::None)
        .color(style::with_opacity(colors.logo_color, layout.label_opacity));

    let content = row![logo, logo_margin, title]
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(LOGO_SIZE));

    container(content)
        .width(Length::Fill)
        .padding(HEADER_PADDING)
        .clip(true)
        .into()
}

fn toggle<'a>(
    props: SidebarViewProps<'a>,
    layout: &SidebarLayout,
) -> Element<'a, SidebarEvent, Theme, iced::Renderer> {
    let theme = props.theme.theme;
    let icon_color = theme.colors().text_color;
    let background = theme.color(layout.toggle_background);

    let icon_bytes = if props.vm.phase.is_open() {
        icons::TOGGLE_COLLAPSE
    } else {
        icons::TOGGLE_EXPAND
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icon_bytes))
        .width(Length::Fixed(TOGGLE_ICON_SIZE))
        .height(Length::Fixed(TOGGLE_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(SidebarEvent::Toggle)
        .padding(TOGGLE_PADDING)
        .width(Length::Fixed(TOGGLE_SIZE))
        .height(Length::Fixed(TOGGLE_SIZE))
        .style(style::toggle_style(background, TOGGLE_SIZE))
        .into()
}

fn nav_section<'a>(
    routes: &'static [RouteEntry],
    colors: &SidebarColors,
    vm: &SidebarViewModel,
) -> Element<'a, SidebarEvent, Theme, iced::Renderer> {
    Column::with_children(
        routes.iter().map(|route| nav_item(route, colors, vm)),
    )
    .width(Length::Fill)
    .into()
}

fn nav_item<'a>(
    route: &'static RouteEntry,
    colors: &SidebarColors,
    vm: &SidebarViewModel,
) -> Element<'a, SidebarEvent, Theme, iced::Renderer> {
    let status = vm.item_status(route.path);
    let (_, foreground) = style::nav_item_colors(colors, status);

    // Icons take the item color but stay fully visible through the label
    // fade.
    let icon = svg::Svg::new(svg::Handle::from_memory(route.icon.svg()))
        .width(Length::Fixed(NAV_ICON_SIZE))
        .height(Length::Fixed(NAV_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(foreground),
        });

    // No explicit color: the label inherits the faded item text color.
    let label = text(route.title)
        .size(NAV_LABEL_SIZE)
        .wrapping(text::Wrapping::None);

    let content = row![icon, label]
        .spacing(NAV_LABEL_SPACING)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(NAV_ITEM_HEIGHT));

    let item = container(content)
        .padding(NAV_ITEM_PADDING)
        .width(Length::Fill)
        .clip(true)
        .style(style::nav_item_style(
            *colors,
            status,
            vm.layout.label_opacity,
        ));

    let path = route.path;
    let mut interactive = mouse_area(item)
        .on_enter(SidebarEvent::ItemEntered { path })
        .on_exit(SidebarEvent::ItemLeft { path })
        .on_press(SidebarEvent::ItemPressed { path })
        .interaction(mouse::Interaction::Pointer);
    // A click is a press and release on the same item.
    if status == ItemStatus::Pressed {
        interactive = interactive.on_release(SidebarEvent::Navigate { path });
    }

    container(interactive)
        .width(Length::Fill)
        .padding([NAV_ITEM_MARGIN_Y, NAV_ITEM_MARGIN_X])
        .into()
}

fn vertical_gap<'a>() -> Element<'a, SidebarEvent, Theme, iced::Renderer> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
