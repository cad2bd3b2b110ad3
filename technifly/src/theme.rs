use iced::theme::Palette;
use iced::{Color, Theme};

/// Color mode requested by the host. `"dark"` selects dark, anything else
/// falls back to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub(crate) const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];

    /// Parse a raw color-mode string.
    pub(crate) fn from_input(value: &str) -> Self {
        if value == "dark" {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Semantic color roles consumed by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThemeRole {
    SidebarBackground,
    HoverBackground,
    ActiveBackground,
    TextColor,
    HoverTextColor,
    ActiveTextColor,
    LogoColor,
    ButtonBackground,
    ActiveButtonBackground,
}

impl ThemeRole {
    pub(crate) const ALL: [ThemeRole; 9] = [
        ThemeRole::SidebarBackground,
        ThemeRole::HoverBackground,
        ThemeRole::ActiveBackground,
        ThemeRole::TextColor,
        ThemeRole::HoverTextColor,
        ThemeRole::ActiveTextColor,
        ThemeRole::LogoColor,
        ThemeRole::ButtonBackground,
        ThemeRole::ActiveButtonBackground,
    ];

    /// Stable key of the role, shared by both modes.
    pub(crate) fn key(self) -> &'static str {
        match self {
            ThemeRole::SidebarBackground => "sidebarBackground",
            ThemeRole::HoverBackground => "hoverBackground",
            ThemeRole::ActiveBackground => "activeBackground",
            ThemeRole::TextColor => "textColor",
            ThemeRole::HoverTextColor => "hoverTextColor",
            ThemeRole::ActiveTextColor => "activeTextColor",
            ThemeRole::LogoColor => "logoColor",
            ThemeRole::ButtonBackground => "buttonBackground",
            ThemeRole::ActiveButtonBackground => "activeButtonBackground",
        }
    }

    /// Variable name addressing this role for `mode`, e.g.
    /// `--color-text-dark-hover`.
    pub(crate) fn variable(self, mode: ColorMode) -> String {
        let (group, variant) = match self {
            ThemeRole::SidebarBackground => ("sidebar-background", "default"),
            ThemeRole::HoverBackground => ("sidebar-background", "hover"),
            ThemeRole::ActiveBackground => ("sidebar-background", "active"),
            ThemeRole::TextColor => ("text", "default"),
            ThemeRole::HoverTextColor => ("text", "hover"),
            ThemeRole::ActiveTextColor => ("text", "active"),
            ThemeRole::LogoColor => ("text-logo", "default"),
            ThemeRole::ButtonBackground => ("button-background", "default"),
            ThemeRole::ActiveButtonBackground => {
                ("button-background", "active")
            },
        };

        format!("--color-{group}-{}-{variant}", mode.as_str())
    }

    /// Resolve a variable name back to its role and mode.
    pub(crate) fn from_variable(name: &str) -> Option<(ThemeRole, ColorMode)> {
        ColorMode::ALL.into_iter().find_map(|mode| {
            ThemeRole::ALL
                .into_iter()
                .find(|role| role.variable(mode) == name)
                .map(|role| (role, mode))
        })
    }
}

/// Resolved color for every [`ThemeRole`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarColors {
    pub(crate) sidebar_background: Color,
    pub(crate) hover_background: Color,
    pub(crate) active_background: Color,
    pub(crate) text_color: Color,
    pub(crate) hover_text_color: Color,
    pub(crate) active_text_color: Color,
    pub(crate) logo_color: Color,
    pub(crate) button_background: Color,
    pub(crate) active_button_background: Color,
}

impl SidebarColors {
    pub(crate) fn light() -> Self {
        Self {
            sidebar_background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            hover_background: Color::from_rgb8(0xEE, 0xF3, 0xFA),
            active_background: Color::from_rgb8(0xDC, 0xE8, 0xF7),
            text_color: Color::from_rgb8(0x5F, 0x6B, 0x7A),
            hover_text_color: Color::from_rgb8(0x1F, 0x2A, 0x37),
            active_text_color: Color::from_rgb8(0x0F, 0x11, 0x15),
            logo_color: Color::from_rgb8(0x1F, 0x2A, 0x37),
            button_background: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            active_button_background: Color::from_rgb8(0x4F, 0xA6, 0xED),
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            sidebar_background: Color::from_rgb8(0x16, 0x18, 0x22),
            hover_background: Color::from_rgb8(0x23, 0x25, 0x30),
            active_background: Color::from_rgb8(0x2F, 0x63, 0x8F),
            text_color: Color::from_rgb8(0xC0, 0xC5, 0xCE),
            hover_text_color: Color::from_rgb8(0xEC, 0xEF, 0xF4),
            active_text_color: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            logo_color: Color::from_rgb8(0xEC, 0xEF, 0xF4),
            button_background: Color::from_rgb8(0x4F, 0x56, 0x66),
            active_button_background: Color::from_rgb8(0x4F, 0xA6, 0xED),
        }
    }

    pub(crate) fn role(&self, role: ThemeRole) -> Color {
        match role {
            ThemeRole::SidebarBackground => self.sidebar_background,
            ThemeRole::HoverBackground => self.hover_background,
            ThemeRole::ActiveBackground => self.active_background,
            ThemeRole::TextColor => self.text_color,
            ThemeRole::HoverTextColor => self.hover_text_color,
            ThemeRole::ActiveTextColor => self.active_text_color,
            ThemeRole::LogoColor => self.logo_color,
            ThemeRole::ButtonBackground => self.button_background,
            ThemeRole::ActiveButtonBackground => self.active_button_background,
        }
    }

    fn set_role(&mut self, role: ThemeRole, color: Color) {
        let slot = match role {
            ThemeRole::SidebarBackground => &mut self.sidebar_background,
            ThemeRole::HoverBackground => &mut self.hover_background,
            ThemeRole::ActiveBackground => &mut self.active_background,
            ThemeRole::TextColor => &mut self.text_color,
            ThemeRole::HoverTextColor => &mut self.hover_text_color,
            ThemeRole::ActiveTextColor => &mut self.active_text_color,
            ThemeRole::LogoColor => &mut self.logo_color,
            ThemeRole::ButtonBackground => &mut self.button_background,
            ThemeRole::ActiveButtonBackground => {
                &mut self.active_button_background
            },
        };
        *slot = color;
    }
}

/// A single variable override supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThemeOverride {
    pub(crate) role: ThemeRole,
    pub(crate) mode: ColorMode,
    pub(crate) color: Color,
}

/// Immutable sidebar theme: a mode plus its palette.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SidebarTheme {
    mode: ColorMode,
    colors: SidebarColors,
}

impl SidebarTheme {
    /// Look up the built-in palette for `mode`.
    pub(crate) fn for_mode(mode: ColorMode) -> Self {
        let colors = match mode {
            ColorMode::Light => SidebarColors::light(),
            ColorMode::Dark => SidebarColors::dark(),
        };

        Self { mode, colors }
    }

    /// Apply host overrides that target this theme's mode.
    pub(crate) fn with_overrides(
        mut self,
        overrides: &[ThemeOverride],
    ) -> Self {
        for entry in overrides.iter().filter(|entry| entry.mode == self.mode) {
            self.colors.set_role(entry.role, entry.color);
        }
        self
    }

    pub(crate) fn mode(&self) -> ColorMode {
        self.mode
    }

    pub(crate) fn colors(&self) -> &SidebarColors {
        &self.colors
    }

    pub(crate) fn color(&self, role: ThemeRole) -> Color {
        self.colors.role(role)
    }

    /// Variable name of `role` in this theme's mode.
    pub(crate) fn variable(&self, role: ThemeRole) -> String {
        role.variable(self.mode)
    }

    /// Background of the surface the sidebar is mounted on.
    pub(crate) fn page_background(&self) -> Color {
        match self.mode {
            ColorMode::Light => Color::from_rgb8(0xF3, 0xF4, 0xF6),
            ColorMode::Dark => Color::from_rgb8(0x0F, 0x11, 0x15),
        }
    }
}

impl From<&SidebarTheme> for Theme {
    fn from(value: &SidebarTheme) -> Self {
        let colors = value.colors();
        let palette = Palette {
            background: value.page_background(),
            text: colors.text_color,
            primary: colors.active_button_background,
            success: Color::from_rgb8(0x98, 0xC3, 0x79),
            danger: Color::from_rgb8(0xE0, 0x6C, 0x75),
            warning: Color::from_rgb8(0xE5, 0xC0, 0x7B),
        };

        Theme::custom(format!("technifly-{}", value.mode.as_str()), palette)
    }
}

/// Theme props passed through App -> Widget -> View.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a SidebarTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a SidebarTheme) -> Self {
        Self { theme }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |index: usize| {
        u8::from_str_radix(hex.get(index..index + 2)?, 16).ok()
    };

    match hex.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(channel(6)?) / 255.0,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{
        ColorMode, SidebarColors, SidebarTheme, ThemeOverride, ThemeRole,
        parse_hex_color,
    };

    #[test]
    fn given_dark_input_when_selecting_theme_then_dark_palette_is_used() {
        let theme = SidebarTheme::for_mode(ColorMode::from_input("dark"));

        assert_eq!(theme.mode(), ColorMode::Dark);
        assert_eq!(theme.colors(), &SidebarColors::dark());
        assert_eq!(
            theme.variable(ThemeRole::SidebarBackground),
            "--color-sidebar-background-dark-default"
        );
        assert_eq!(
            theme.variable(ThemeRole::TextColor),
            "--color-text-dark-default"
        );
    }

    #[test]
    fn given_any_other_input_when_selecting_theme_then_light_palette_is_used()
    {
        for input in ["light", "", "Dark", "DARK", "blue", " dark"] {
            let theme = SidebarTheme::for_mode(ColorMode::from_input(input));

            assert_eq!(theme.mode(), ColorMode::Light, "input {input:?}");
            assert_eq!(theme.colors(), &SidebarColors::light());
            assert_eq!(
                theme.variable(ThemeRole::SidebarBackground),
                "--color-sidebar-background-light-default"
            );
        }
    }

    #[test]
    fn given_every_role_when_building_variables_then_names_match_stylesheet_contract()
     {
        let expected = [
            "--color-sidebar-background-light-default",
            "--color-sidebar-background-light-hover",
            "--color-sidebar-background-light-active",
            "--color-text-light-default",
            "--color-text-light-hover",
            "--color-text-light-active",
            "--color-text-logo-light-default",
            "--color-button-background-light-default",
            "--color-button-background-light-active",
        ];

        let actual: Vec<String> = ThemeRole::ALL
            .iter()
            .map(|role| role.variable(ColorMode::Light))
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn given_variable_name_when_resolving_then_role_and_mode_round_trip() {
        assert_eq!(
            ThemeRole::from_variable("--color-button-background-dark-active"),
            Some((ThemeRole::ActiveButtonBackground, ColorMode::Dark))
        );
        assert_eq!(
            ThemeRole::from_variable("--color-text-logo-light-default"),
            Some((ThemeRole::LogoColor, ColorMode::Light))
        );
        assert_eq!(ThemeRole::from_variable("--color-unknown"), None);
    }

    #[test]
    fn given_overrides_for_both_modes_when_applied_then_only_active_mode_changes()
     {
        let red = Color::from_rgb8(0xFF, 0x00, 0x00);
        let overrides = [
            ThemeOverride {
                role: ThemeRole::TextColor,
                mode: ColorMode::Dark,
                color: red,
            },
            ThemeOverride {
                role: ThemeRole::LogoColor,
                mode: ColorMode::Light,
                color: red,
            },
        ];

        let theme =
            SidebarTheme::for_mode(ColorMode::Dark).with_overrides(&overrides);

        assert_eq!(theme.color(ThemeRole::TextColor), red);
        assert_eq!(
            theme.color(ThemeRole::LogoColor),
            SidebarColors::dark().logo_color
        );
        assert_eq!(
            theme.color(ThemeRole::SidebarBackground),
            SidebarColors::dark().sidebar_background
        );
    }

    #[test]
    fn given_hex_strings_when_parsing_then_only_well_formed_values_are_accepted()
     {
        assert_eq!(
            parse_hex_color("#4FA6ED"),
            Some(Color::from_rgb8(0x4F, 0xA6, 0xED))
        );
        assert_eq!(
            parse_hex_color("#00000000").map(|color| color.a),
            Some(0.0)
        );
        assert_eq!(parse_hex_color("4FA6ED"), None);
        assert_eq!(parse_hex_color("#4FA6E"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }
}
