use std::{fs, path::Path};

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub success_message: String,
    pub log_filter: Option<String>,
    pub echo_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            success_message: report_core::DEFAULT_SUCCESS_MESSAGE.into(),
            log_filter: None,
            echo_events: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    success_message: Option<String>,
    log_filter: Option<String>,
    echo_events: Option<bool>,
}

/// Defaults, then `path` (if it exists and parses), then environment.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        apply_file_settings(&mut settings, &raw);
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.success_message {
        settings.success_message = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = Some(v);
    }
    if let Some(v) = file_cfg.echo_events {
        settings.echo_events = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["REPORT_SUCCESS_MESSAGE", "APP__SUCCESS_MESSAGE"] {
        if let Some(v) = lookup(key).filter(|v| !v.trim().is_empty()) {
            settings.success_message = v;
        }
    }

    for key in ["REPORT_LOG_FILTER", "APP__LOG_FILTER"] {
        if let Some(v) = lookup(key).filter(|v| !v.trim().is_empty()) {
            settings.log_filter = Some(v);
        }
    }

    if let Some(v) = lookup("APP__ECHO_EVENTS") {
        if let Ok(parsed) = v.trim().parse::<bool>() {
            settings.echo_events = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
