mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use event::SidebarEvent;
use iced::Task;
pub(crate) use model::ItemStatus;
use model::{SidebarLayout, SidebarViewModel};
pub(crate) use reducer::SidebarCtx;
use state::SidebarState;

use crate::theme::{ColorMode, SidebarTheme, ThemeOverride};

/// Collapsible navigation sidebar owning its open/closed state.
pub(crate) struct SidebarWidget {
    theme: SidebarTheme,
    state: SidebarState,
}

impl SidebarWidget {
    /// Mount a sidebar with the built-in palette for `mode`. Starts open.
    pub(crate) fn new(mode: ColorMode) -> Self {
        Self {
            theme: SidebarTheme::for_mode(mode),
            state: SidebarState::default(),
        }
    }

    /// Replace palette entries of the mounted mode.
    pub(crate) fn with_overrides(
        mut self,
        overrides: &[ThemeOverride],
    ) -> Self {
        self.theme = self.theme.with_overrides(overrides);
        self
    }

    /// Reduce an event into state updates.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarEvent,
        ctx: &SidebarCtx<'_>,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer at `now`.
    pub(crate) fn vm(&self, now: Instant) -> SidebarViewModel {
        let phase = self.state.phase();

        SidebarViewModel {
            phase,
            layout: SidebarLayout::at(phase, self.state.progress(now)),
            hovered_item: self.state.hovered_item(),
            pressed_item: self.state.pressed_item(),
        }
    }

    pub(crate) fn theme(&self) -> &SidebarTheme {
        &self.theme
    }

    pub(crate) fn is_opened(&self) -> bool {
        self.state.phase().is_open()
    }

    /// Return whether the width transition is still running at `now`.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::SidebarWidget;
    use crate::theme::{ColorMode, SidebarColors, ThemeOverride, ThemeRole};

    #[test]
    fn given_overrides_for_both_modes_when_mounted_then_only_own_mode_applies()
    {
        let magenta = Color::from_rgb8(0xFF, 0x00, 0xFF);
        let overrides = [
            ThemeOverride {
                role: ThemeRole::LogoColor,
                mode: ColorMode::Dark,
                color: magenta,
            },
            ThemeOverride {
                role: ThemeRole::TextColor,
                mode: ColorMode::Light,
                color: magenta,
            },
        ];

        let widget =
            SidebarWidget::new(ColorMode::Dark).with_overrides(&overrides);
        let colors = widget.theme().colors();

        assert_eq!(colors.logo_color, magenta);
        assert_eq!(colors.text_color, SidebarColors::dark().text_color);
        assert!(widget.is_opened());
    }
}
