use std::time::Duration;

use crate::icons;
use crate::theme::ThemeRole;

/// Sidebar width while opened.
pub(crate) const SIDEBAR_OPENED_WIDTH: f32 = 250.0;
/// Sidebar width while closed.
pub(crate) const SIDEBAR_CLOSED_WIDTH: f32 = 80.0;
/// Duration of the open/close transition.
pub(crate) const SIDEBAR_TRANSITION: Duration = Duration::from_millis(300);
/// Edge length of the header logo.
pub(crate) const LOGO_SIZE: f32 = 40.0;
/// Title rendered next to the logo.
pub(crate) const SIDEBAR_TITLE: &str = "Technifly";

const LOGO_MARGIN_OPENED: f32 = 8.0;
const LOGO_MARGIN_CLOSED: f32 = 0.0;
const TOGGLE_OVERHANG_OPENED: f32 = 10.0;
const TOGGLE_OVERHANG_CLOSED: f32 = 30.0;

/// Icons available to route entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteIcon {
    House,
    ChartLine,
    ChartColumn,
    Wallet,
    ChartPie,
    Envelope,
    Sliders,
    PhoneVolume,
}

impl RouteIcon {
    pub(crate) fn svg(self) -> &'static [u8] {
        match self {
            RouteIcon::House => icons::ROUTE_HOUSE,
            RouteIcon::ChartLine => icons::ROUTE_CHART_LINE,
            RouteIcon::ChartColumn => icons::ROUTE_CHART_COLUMN,
            RouteIcon::Wallet => icons::ROUTE_WALLET,
            RouteIcon::ChartPie => icons::ROUTE_CHART_PIE,
            RouteIcon::Envelope => icons::ROUTE_ENVELOPE,
            RouteIcon::Sliders => icons::ROUTE_SLIDERS,
            RouteIcon::PhoneVolume => icons::ROUTE_PHONE_VOLUME,
        }
    }
}

/// Static descriptor of a navigable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RouteEntry {
    pub(crate) title: &'static str,
    pub(crate) icon: RouteIcon,
    pub(crate) path: &'static str,
}

const fn route(
    title: &'static str,
    icon: RouteIcon,
    path: &'static str,
) -> RouteEntry {
    RouteEntry { title, icon, path }
}

const PRIMARY_ROUTES: [RouteEntry; 6] = [
    route("Home", RouteIcon::House, "/"),
    route("Sales", RouteIcon::ChartLine, "/sales"),
    route("Costs", RouteIcon::ChartColumn, "/costs"),
    route("Payments", RouteIcon::Wallet, "/payments"),
    route("Finances", RouteIcon::ChartPie, "/finances"),
    route("Messages", RouteIcon::Envelope, "/messages"),
];

const BOTTOM_ROUTES: [RouteEntry; 2] = [
    route("Settings", RouteIcon::Sliders, "/settings"),
    route("Support", RouteIcon::PhoneVolume, "/support"),
];

/// Routes of the upper navigation section, in render order.
pub(crate) fn primary_routes() -> &'static [RouteEntry] {
    &PRIMARY_ROUTES
}

/// Routes of the bottom navigation section, in render order.
pub(crate) fn bottom_routes() -> &'static [RouteEntry] {
    &BOTTOM_ROUTES
}

/// Open/closed mode of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SidebarPhase {
    #[default]
    Open,
    Closed,
}

impl SidebarPhase {
    pub(crate) fn toggled(self) -> Self {
        match self {
            SidebarPhase::Open => SidebarPhase::Closed,
            SidebarPhase::Closed => SidebarPhase::Open,
        }
    }

    pub(crate) fn is_open(self) -> bool {
        self == SidebarPhase::Open
    }
}

/// Geometry and visibility values the view renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarLayout {
    pub(crate) width: f32,
    pub(crate) label_opacity: f32,
    pub(crate) logo_margin: f32,
    pub(crate) toggle_overhang: f32,
    pub(crate) toggle_background: ThemeRole,
}

impl SidebarLayout {
    /// Layout once the transition into `phase` has finished.
    pub(crate) fn settled(phase: SidebarPhase) -> Self {
        match phase {
            SidebarPhase::Open => Self {
                width: SIDEBAR_OPENED_WIDTH,
                label_opacity: 1.0,
                logo_margin: LOGO_MARGIN_OPENED,
                toggle_overhang: TOGGLE_OVERHANG_OPENED,
                toggle_background: ThemeRole::ActiveButtonBackground,
            },
            SidebarPhase::Closed => Self {
                width: SIDEBAR_CLOSED_WIDTH,
                label_opacity: 0.0,
                logo_margin: LOGO_MARGIN_CLOSED,
                toggle_overhang: TOGGLE_OVERHANG_CLOSED,
                toggle_background: ThemeRole::ButtonBackground,
            },
        }
    }

    /// Layout `progress` of the way (0..=1) from the opposite phase into
    /// `phase`. Colors switch immediately; geometry eases.
    pub(crate) fn at(phase: SidebarPhase, progress: f32) -> Self {
        let target = Self::settled(phase);
        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            return target;
        }

        let origin = Self::settled(phase.toggled());
        let t = ease(progress);

        Self {
            width: lerp(origin.width, target.width, t),
            label_opacity: lerp(origin.label_opacity, target.label_opacity, t),
            logo_margin: lerp(origin.logo_margin, target.logo_margin, t),
            toggle_overhang: lerp(
                origin.toggle_overhang,
                target.toggle_overhang,
                t,
            ),
            ..target
        }
    }
}

/// Pointer interaction state of a navigation item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemStatus {
    Rest,
    Hovered,
    Pressed,
}

/// Read-only projection of sidebar state for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarViewModel {
    pub(crate) phase: SidebarPhase,
    pub(crate) layout: SidebarLayout,
    pub(crate) hovered_item: Option<&'static str>,
    pub(crate) pressed_item: Option<&'static str>,
}

impl SidebarViewModel {
    /// Interaction status of the item routing to `path`.
    pub(crate) fn item_status(&self, path: &str) -> ItemStatus {
        if self.pressed_item == Some(path) {
            ItemStatus::Pressed
        } else if self.hovered_item == Some(path) {
            ItemStatus::Hovered
        } else {
            ItemStatus::Rest
        }
    }
}

// Smoothstep. Symmetric: ease(1 - t) == 1 - ease(t).
fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
