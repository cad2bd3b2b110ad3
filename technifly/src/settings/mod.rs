mod errors;
mod storage;

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use errors::SettingsError;

use crate::theme::{ColorMode, ThemeOverride};

const COLOR_ENV: &str = "TECHNIFLY_COLOR";
const THEME_FILE_ENV: &str = "TECHNIFLY_THEME_FILE";
const DEFAULT_COLOR: &str = "light";

/// Raw launch options. Command-line values win over the environment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "technifly",
    about = "Technifly dashboard shell",
    long_about = None,
    version
)]
pub(crate) struct LaunchOptions {
    /// Sidebar color mode: "dark", anything else selects light
    #[arg(
        long = "color",
        env = COLOR_ENV,
        value_name = "MODE",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub(crate) color: Option<String>,
    /// JSON file overriding palette variables
    #[arg(long = "theme-file", env = THEME_FILE_ENV, value_name = "PATH")]
    pub(crate) theme_file: Option<PathBuf>,
}

/// Resolved settings handed to the application at boot.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct AppSettings {
    color_mode: ColorMode,
    theme_overrides: Vec<ThemeOverride>,
}

impl AppSettings {
    /// Resolve settings from parsed launch options.
    pub(crate) fn from_options(
        options: LaunchOptions,
    ) -> Result<Self, SettingsError> {
        let color = match options.color {
            Some(color) => color,
            None => {
                log::info!("no color mode supplied, using {DEFAULT_COLOR}");
                String::from(DEFAULT_COLOR)
            },
        };

        let theme_overrides = match options.theme_file {
            Some(path) => storage::load_theme_overrides(&path)?,
            None => Vec::new(),
        };

        Ok(Self {
            color_mode: ColorMode::from_input(&color),
            theme_overrides,
        })
    }

    pub(crate) fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub(crate) fn theme_overrides(&self) -> &[ThemeOverride] {
        &self.theme_overrides
    }
}
