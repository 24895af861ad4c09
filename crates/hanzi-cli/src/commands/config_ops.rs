use std::fs;

use hanzi_core::settings::{self, settings};

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: candidates.page_size={}, dictionary.path={}, panel.initial_mode={:?}",
        s.candidates.page_size,
        s.dictionary.path.display(),
        s.panel.initial_mode
    );
}

/// Install a custom settings file before anything reads `settings()`.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error loading settings: {}");
    tracing::debug!(page_size = settings().candidates.page_size, "custom settings loaded");
}
