//! Static content bundles keyed by focus.
//!
//! Each bundle is a JSON document (`content/focus/<key>.json`) validated when
//! the [`ContentLibrary`] is built: a bundle whose declared focus differs from
//! its key, or that lacks a hero subline, is a hard error. Keys without a
//! bundle simply resolve to nothing.

pub mod error;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::focus::FocusKey;

pub use error::ContentError;

/// Bundles compiled into the binary.
const EMBEDDED_BUNDLES: &[(FocusKey, &str)] = &[
    (FocusKey::Crm, include_str!("../../content/focus/crm.json")),
    (FocusKey::TeeSheet, include_str!("../../content/focus/tee-sheet.json")),
    (FocusKey::AiMl, include_str!("../../content/focus/ai-ml.json")),
];

/// Lowercase kebab-case identifier.
static MODULE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("module id pattern is valid")
});

/// Marketing copy rendered for one focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusContent {
    /// Focus this bundle belongs to; must equal its lookup key
    pub focus: FocusKey,
    /// Hero copy and calls to action
    pub hero: Hero,
    /// Short highlight lines
    pub bullets: Vec<String>,
    /// Capability tiles
    pub capabilities: Vec<CapabilityTile>,
    /// Outcome metrics
    pub outcomes: Vec<Outcome>,
    /// Identifiers of the product modules this focus covers
    pub modules: Vec<String>,
    /// Page metadata
    pub seo: Seo,
}

/// Hero band copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// One-sentence pitch under the page heading
    #[serde(default)]
    pub subline: String,
    /// Main call to action
    pub primary_cta: Cta,
    /// Optional secondary call to action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<Cta>,
}

/// What a call to action does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaAction {
    /// Plain navigation
    #[default]
    Link,
    /// Opens the scheduling widget at `href`
    Schedule,
}

/// Call-to-action descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    /// Button text
    pub label: String,
    /// Target URL or site path
    pub href: String,
    /// Click behavior
    #[serde(default)]
    pub action: CtaAction,
}

/// One capability tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityTile {
    /// Tile heading
    pub title: String,
    /// One or two sentence summary
    pub summary: String,
    /// Icon name, resolved by [`crate::render::Icon::from_name`]
    pub icon: String,
    /// Small labels shown under the summary
    #[serde(default)]
    pub badges: Vec<String>,
}

/// One outcome metric, e.g. "32 % in the first quarter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Headline number
    pub value: String,
    /// Unit shown after the number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Period the metric was measured over
    pub timeframe: String,
    /// What improved
    pub description: String,
}

/// Page metadata for a focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
}

impl FocusContent {
    /// Parses and validates a bundle stored under `expected`.
    pub fn parse(expected: FocusKey, json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json).map_err(|source| ContentError::Parse {
            focus: expected,
            source,
        })?;
        content.validate(expected)?;
        Ok(content)
    }

    /// Checks the bundle's integrity against its lookup key.
    pub fn validate(&self, expected: FocusKey) -> Result<(), ContentError> {
        if self.focus != expected {
            return Err(ContentError::FocusMismatch {
                expected,
                found: self.focus,
            });
        }

        let required = [
            ("hero.subline", &self.hero.subline),
            ("hero.primary_cta.label", &self.hero.primary_cta.label),
            ("seo.title", &self.seo.title),
            ("seo.description", &self.seo.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::MissingField {
                    focus: expected,
                    field,
                });
            }
        }

        if let Some(module) = self.modules.iter().find(|m| !MODULE_ID_REGEX.is_match(m)) {
            return Err(ContentError::InvalidModule {
                focus: expected,
                module: module.clone(),
            });
        }

        Ok(())
    }
}

/// All loaded bundles, keyed by focus.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    bundles: BTreeMap<FocusKey, FocusContent>,
}

impl ContentLibrary {
    /// Loads the bundles compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let mut bundles = BTreeMap::new();
        for (key, json) in EMBEDDED_BUNDLES {
            bundles.insert(*key, FocusContent::parse(*key, json)?);
        }
        debug!(count = bundles.len(), "loaded embedded content bundles");
        Ok(Self { bundles })
    }

    /// Loads `<key>.json` for every focus key from `dir`.
    ///
    /// A missing file means that focus has no bundle; any other problem is an
    /// error.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        let mut bundles = BTreeMap::new();

        for key in FocusKey::ALL {
            let path = dir.join(format!("{key}.json"));
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => return Err(ContentError::Io { path, source }),
            };
            bundles.insert(key, FocusContent::parse(key, &json)?);
        }

        debug!(count = bundles.len(), dir = %dir.display(), "loaded content bundles");
        Ok(Self { bundles })
    }

    /// Builds a library from already-validated bundles.
    pub fn from_bundles(
        bundles: impl IntoIterator<Item = FocusContent>,
    ) -> Result<Self, ContentError> {
        let mut map = BTreeMap::new();
        for bundle in bundles {
            bundle.validate(bundle.focus)?;
            map.insert(bundle.focus, bundle);
        }
        Ok(Self { bundles: map })
    }

    /// Content for the current focus.
    ///
    /// `None` for no focus and for a focus without a bundle; callers render
    /// nothing in both cases.
    #[must_use]
    pub fn resolve(&self, focus: Option<FocusKey>) -> Option<&FocusContent> {
        self.bundles.get(&focus?)
    }

    /// Focus keys that have a bundle.
    pub fn keys(&self) -> impl Iterator<Item = FocusKey> + '_ {
        self.bundles.keys().copied()
    }

    /// Number of bundles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Whether no bundles are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn minimal_json(focus: &str, subline: &str) -> String {
        format!(
            r#"{{
                "focus": "{focus}",
                "hero": {{
                    "subline": "{subline}",
                    "primary_cta": {{ "label": "Start", "href": "/contact" }}
                }},
                "bullets": [],
                "capabilities": [],
                "outcomes": [],
                "modules": ["core"],
                "seo": {{ "title": "T", "description": "D" }}
            }}"#
        )
    }

    #[test]
    fn test_embedded_library_loads() {
        let library = ContentLibrary::embedded().expect("embedded bundles are valid");
        assert_eq!(library.len(), 3);
        assert_eq!(
            library.keys().collect::<Vec<_>>(),
            vec![FocusKey::Crm, FocusKey::TeeSheet, FocusKey::AiMl]
        );
    }

    #[test]
    fn test_resolve() {
        let library = ContentLibrary::embedded().unwrap();

        assert!(library.resolve(None).is_none());
        assert!(library.resolve(Some(FocusKey::Web)).is_none());
        assert!(library.resolve(Some(FocusKey::AllSolutions)).is_none());

        let crm = library.resolve(Some(FocusKey::Crm)).unwrap();
        assert_eq!(crm.focus, FocusKey::Crm);
        assert!(!crm.capabilities.is_empty());
        assert_eq!(crm.hero.primary_cta.action, CtaAction::Schedule);
    }

    #[test]
    fn test_parse_rejects_focus_mismatch() {
        let err = FocusContent::parse(FocusKey::Crm, &minimal_json("ai-ml", "x")).unwrap_err();
        assert!(matches!(
            err,
            ContentError::FocusMismatch {
                expected: FocusKey::Crm,
                found: FocusKey::AiMl
            }
        ));
    }

    #[test]
    fn test_parse_rejects_blank_subline() {
        let err = FocusContent::parse(FocusKey::Crm, &minimal_json("crm", "  ")).unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingField {
                field: "hero.subline",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_missing_subline() {
        let json = minimal_json("crm", "x").replace(r#""subline": "x","#, "");
        let err = FocusContent::parse(FocusKey::Crm, &json).unwrap_err();
        assert!(matches!(err, ContentError::MissingField { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_module_identifier() {
        let json = minimal_json("crm", "x").replace(r#"["core"]"#, r#"["Lead Capture"]"#);
        let err = FocusContent::parse(FocusKey::Crm, &json).unwrap_err();
        assert!(err.to_string().contains("Lead Capture"));
    }

    #[test]
    fn test_module_identifier_pattern() {
        for ok in ["core", "lead-capture", "tee-sheet-2"] {
            assert!(MODULE_ID_REGEX.is_match(ok), "{ok}");
        }
        for bad in ["", "Core", "lead_capture", "-core", "core-", "lead--capture"] {
            assert!(!MODULE_ID_REGEX.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_focus_value() {
        let err = FocusContent::parse(FocusKey::Crm, &minimal_json("blockchain", "x")).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn test_from_dir_skips_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("web.json"), minimal_json("web", "Sites")).unwrap();

        let library = ContentLibrary::from_dir(temp_dir.path()).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(
            library.resolve(Some(FocusKey::Web)).unwrap().hero.subline,
            "Sites"
        );
        assert!(library.resolve(Some(FocusKey::Crm)).is_none());
    }

    #[test]
    fn test_from_dir_fails_loudly_on_bad_bundle() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("crm.json"), minimal_json("web", "x")).unwrap();

        assert!(ContentLibrary::from_dir(temp_dir.path()).is_err());
    }

    #[test]
    fn test_bundle_serializes_without_empty_optionals() {
        let bundle = FocusContent::parse(FocusKey::Web, &minimal_json("web", "x")).unwrap();
        let value = serde_json::to_value(&bundle).unwrap();
        assert!(value["hero"].get("secondary_cta").is_none());
        assert_eq!(value["hero"]["primary_cta"]["action"], "link");
    }
}
