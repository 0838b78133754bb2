use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{Settings, settings_path};

/// Print the effective settings as TOML.
pub(crate) fn run_config_show(settings: &Settings, path: Option<&Path>) -> Result<(), CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };

    log::info!(
        "# Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );
    log::info!("");
    log::info!("{}", settings.to_toml()?.trim_end());
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(path: Option<&Path>) {
    let path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);
    log::info!("{}", path.display());
}
