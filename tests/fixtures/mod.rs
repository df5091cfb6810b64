//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// A minimal valid bundle for `focus`.
pub fn bundle_json(focus: &str, subline: &str) -> Value {
    json!({
        "focus": focus,
        "hero": {
            "subline": subline,
            "primary_cta": {
                "label": "Book a call",
                "href": "",
                "action": "schedule"
            }
        },
        "bullets": ["First bullet", "Second bullet"],
        "capabilities": [
            {
                "title": "Launch fast",
                "summary": "A fixture capability.",
                "icon": "rocket",
                "badges": ["Fixture"]
            }
        ],
        "outcomes": [
            {
                "value": "2",
                "unit": "x",
                "timeframe": "per quarter",
                "description": "Fixture outcome"
            }
        ],
        "modules": ["fixture-module"],
        "seo": {
            "title": "Fixture",
            "description": "Fixture description"
        }
    })
}

/// Writes `<focus>.json` into `dir`.
pub fn write_bundle(dir: &Path, focus: &str, bundle: &Value) {
    fs::create_dir_all(dir).expect("Failed to create content dir");
    fs::write(
        dir.join(format!("{focus}.json")),
        serde_json::to_string_pretty(bundle).expect("Failed to serialize bundle"),
    )
    .expect("Failed to write bundle");
}

/// Writes a `config.toml` into `config_dir`.
pub fn write_config(config_dir: &Path, toml: &str) {
    fs::create_dir_all(config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.toml"), toml).expect("Failed to write config");
}
