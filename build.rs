//! Build script for Lumen Site.
//!
//! The focus content bundles under `content/focus/` are compiled into the
//! binary. This script checks them first so a broken bundle fails the build
//! instead of the first request.

use std::fs;
use std::path::Path;

const FOCUS_KEYS: &[&str] = &["crm", "tee-sheet", "ai-ml", "web", "all-solutions"];

fn main() {
    println!("cargo:rerun-if-changed=content/focus");
    println!("cargo:rerun-if-changed=assets");

    let content_dir = Path::new("content/focus");
    if !content_dir.exists() {
        println!("cargo:warning=content/focus not found, skipping bundle check");
        return;
    }

    let entries = fs::read_dir(content_dir).expect("Failed to read content/focus");
    for entry in entries {
        let path = entry.expect("Failed to read content/focus entry").path();
        if path.extension().is_some_and(|ext| ext == "json") {
            println!("cargo:rerun-if-changed={}", path.display());
            check_bundle(&path);
        }
    }
}

fn check_bundle(path: &Path) {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .expect("Bundle file name must be UTF-8");

    assert!(
        FOCUS_KEYS.contains(&stem),
        "{}: '{stem}' is not a focus key",
        path.display()
    );

    let text = fs::read_to_string(path).expect("Failed to read content bundle");
    let bundle: serde_json::Value = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("{}: invalid JSON: {e}", path.display()));

    let focus = bundle.get("focus").and_then(|v| v.as_str());
    assert_eq!(
        focus,
        Some(stem),
        "{}: focus field must match the file name",
        path.display()
    );

    let subline = bundle
        .pointer("/hero/subline")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    assert!(
        !subline.trim().is_empty(),
        "{}: hero.subline must not be empty",
        path.display()
    );
}
