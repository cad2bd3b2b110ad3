use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::SettingsError;
use crate::theme::{ThemeOverride, ThemeRole, parse_hex_color};

/// On-disk shape of the theme overrides file: variable name to hex color.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct ThemeFile {
    variables: BTreeMap<String, String>,
}

/// Load theme overrides from `path`. A missing file yields no overrides.
pub(crate) fn load_theme_overrides(
    path: &Path,
) -> Result<Vec<ThemeOverride>, SettingsError> {
    log::info!("loading theme overrides from {}", path.display());
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("theme file {} not found", path.display());
            return Ok(Vec::new());
        },
        Err(err) => return Err(err.into()),
    };

    parse_theme_overrides(&data)
}

/// Parse the JSON body of a theme overrides file.
pub(crate) fn parse_theme_overrides(
    data: &str,
) -> Result<Vec<ThemeOverride>, SettingsError> {
    let file: ThemeFile = serde_json::from_str(data)?;
    let mut overrides = Vec::with_capacity(file.variables.len());

    for (variable, value) in file.variables {
        let Some((role, mode)) = ThemeRole::from_variable(&variable) else {
            log::warn!("ignoring unknown theme variable {variable}");
            continue;
        };
        let Some(color) = parse_hex_color(&value) else {
            return Err(SettingsError::InvalidColor { variable, value });
        };

        overrides.push(ThemeOverride { role, mode, color });
    }

    Ok(overrides)
}
