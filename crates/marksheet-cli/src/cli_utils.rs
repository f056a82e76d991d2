//! Common CLI utility functions shared across commands.

use std::io::IsTerminal;
use std::path::Path;

use marksheet_core::DisplayConfig;
use tracing::{debug, warn};

/// Load the display config, falling back to defaults when the file is
/// missing or invalid. Color is turned off for `--no-color` and when stdout
/// is not a terminal.
pub fn load_config(path: &Path, no_color: bool) -> DisplayConfig {
    let config = if path.exists() {
        match DisplayConfig::load(path) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load config {:?}: {}, using defaults", path, e);
                DisplayConfig::default()
            }
        }
    } else {
        debug!("No config at {:?}, using defaults", path);
        DisplayConfig::default()
    };

    let color = config.color && !no_color && std::io::stdout().is_terminal();
    config.with_color(color)
}
