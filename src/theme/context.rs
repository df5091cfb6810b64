//! Active color scheme state and route synchronization.

use tracing::debug;

use super::resolver::resolve_scheme_key;
use super::scheme::{ColorScheme, SchemeKey};

/// Session-scoped holder of the active color scheme.
///
/// Reads are always defined: a fresh context holds [`SchemeKey::Default`].
/// [`ColorSchemeContext::set_scheme`] is the only mutator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSchemeContext {
    key: SchemeKey,
}

impl ColorSchemeContext {
    /// Creates a context holding the default scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that starts on the given scheme.
    #[must_use]
    pub const fn with_scheme(key: SchemeKey) -> Self {
        Self { key }
    }

    /// Key of the active scheme.
    #[must_use]
    pub const fn scheme_key(&self) -> SchemeKey {
        self.key
    }

    /// Colors of the active scheme.
    #[must_use]
    pub fn scheme(&self) -> &'static ColorScheme {
        self.key.scheme()
    }

    /// Switches the active scheme.
    ///
    /// Returns `true` when the active key actually changed, so setting the
    /// same key twice is observably a no-op.
    pub fn set_scheme(&mut self, key: SchemeKey) -> bool {
        if self.key == key {
            return false;
        }
        debug!(from = %self.key, to = %key, "switching color scheme");
        self.key = key;
        true
    }
}

/// Keeps a [`ColorSchemeContext`] in step with navigation.
///
/// On every navigation the route-derived key is applied, unless an explicit
/// override is set, in which case the override is applied instead. Changing
/// the override re-applies immediately against the last seen route.
#[derive(Debug, Clone, Default)]
pub struct RouteThemeSync {
    override_key: Option<SchemeKey>,
    current_path: String,
}

impl RouteThemeSync {
    /// Creates a sync with no override and no route seen yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sync whose override always wins over the route.
    #[must_use]
    pub fn with_override(key: Option<SchemeKey>) -> Self {
        Self {
            override_key: key,
            current_path: String::new(),
        }
    }

    /// The override key, if any.
    #[must_use]
    pub const fn override_key(&self) -> Option<SchemeKey> {
        self.override_key
    }

    /// Last path passed to [`RouteThemeSync::navigate`].
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Key this sync wants applied for the current route.
    #[must_use]
    pub fn effective_key(&self) -> SchemeKey {
        self.override_key
            .unwrap_or_else(|| resolve_scheme_key(&self.current_path))
    }

    /// Records a navigation and applies the resulting key.
    pub fn navigate(&mut self, path: &str, ctx: &mut ColorSchemeContext) -> SchemeKey {
        path.clone_into(&mut self.current_path);
        self.apply(ctx)
    }

    /// Replaces the override and re-applies against the current route.
    pub fn set_override(
        &mut self,
        key: Option<SchemeKey>,
        ctx: &mut ColorSchemeContext,
    ) -> SchemeKey {
        self.override_key = key;
        self.apply(ctx)
    }

    fn apply(&self, ctx: &mut ColorSchemeContext) -> SchemeKey {
        let key = self.effective_key();
        ctx.set_scheme(key);
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_default() {
        let ctx = ColorSchemeContext::new();
        assert_eq!(ctx.scheme_key(), SchemeKey::Default);
        assert_eq!(ctx.scheme().primary.to_hex(), "#3B82F6");
    }

    #[test]
    fn test_set_scheme_reports_changes_only() {
        let mut ctx = ColorSchemeContext::new();
        assert!(ctx.set_scheme(SchemeKey::Marketing));
        assert!(!ctx.set_scheme(SchemeKey::Marketing));
        assert_eq!(ctx.scheme_key(), SchemeKey::Marketing);
    }

    #[test]
    fn test_navigation_updates_scheme() {
        let mut ctx = ColorSchemeContext::new();
        let mut sync = RouteThemeSync::new();

        assert_eq!(sync.navigate("/", &mut ctx), SchemeKey::Default);
        assert_eq!(ctx.scheme().primary.to_hex(), "#3B82F6");

        assert_eq!(sync.navigate("/ai-automation", &mut ctx), SchemeKey::Automation);
        assert_eq!(ctx.scheme().primary.to_hex(), "#A855F7");
        assert_eq!(sync.current_path(), "/ai-automation");
    }

    #[test]
    fn test_override_wins_over_route() {
        let mut ctx = ColorSchemeContext::new();
        let mut sync = RouteThemeSync::with_override(Some(SchemeKey::Brand));

        sync.navigate("/ai-automation", &mut ctx);
        assert_eq!(ctx.scheme_key(), SchemeKey::Brand);

        sync.navigate("/crm", &mut ctx);
        assert_eq!(ctx.scheme_key(), SchemeKey::Brand);
    }

    #[test]
    fn test_changing_override_reapplies() {
        let mut ctx = ColorSchemeContext::new();
        let mut sync = RouteThemeSync::new();
        sync.navigate("/crm", &mut ctx);
        assert_eq!(ctx.scheme_key(), SchemeKey::Software);

        sync.set_override(Some(SchemeKey::Marketing), &mut ctx);
        assert_eq!(ctx.scheme_key(), SchemeKey::Marketing);

        // Dropping the override falls back to the route
        sync.set_override(None, &mut ctx);
        assert_eq!(ctx.scheme_key(), SchemeKey::Software);
    }
}
