//! In-memory focus state with write-through persistence.

use tracing::debug;

use super::key::FocusKey;
use super::storage::{FocusStorage, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Constructed, storage not consulted yet
    Pending,
    /// Hydrated, or an explicit transition already happened
    Settled,
}

/// The visitor's current focus for one session.
///
/// Initialization is two-phase: [`FocusContext::new`] starts with no focus,
/// then [`FocusContext::hydrate`] adopts the persisted value exactly once.
/// [`FocusContext::hydrated`] does both, so consumers never observe the
/// pre-hydration state. After hydration the in-memory value is the source of
/// truth; later storage changes are not observed.
#[derive(Debug, Clone)]
pub struct FocusContext<S> {
    focus: Option<FocusKey>,
    storage: FocusStorage<S>,
    phase: Phase,
}

impl<S: KeyValueStore> FocusContext<S> {
    /// Creates an unhydrated context with no focus.
    #[must_use]
    pub const fn new(storage: FocusStorage<S>) -> Self {
        Self {
            focus: None,
            storage,
            phase: Phase::Pending,
        }
    }

    /// Creates a context and hydrates it from storage.
    #[must_use]
    pub fn hydrated(storage: FocusStorage<S>) -> Self {
        let mut ctx = Self::new(storage);
        ctx.hydrate();
        ctx
    }

    /// Adopts the persisted focus, once.
    ///
    /// Later calls, and calls after an explicit [`FocusContext::set_focus`] or
    /// [`FocusContext::clear_focus`], leave the state untouched.
    pub fn hydrate(&mut self) -> Option<FocusKey> {
        if self.phase == Phase::Settled {
            return self.focus;
        }
        self.phase = Phase::Settled;

        if let Some(key) = self.storage.load() {
            debug!(focus = %key, "hydrated focus from storage");
            self.focus = Some(key);
        }
        self.focus
    }

    /// Whether storage has been consulted (or made irrelevant).
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// The current focus.
    #[must_use]
    pub const fn focus(&self) -> Option<FocusKey> {
        self.focus
    }

    /// Selects a focus and writes it through to storage.
    pub fn set_focus(&mut self, key: FocusKey) {
        self.phase = Phase::Settled;
        self.focus = Some(key);
        self.storage.save(key);
    }

    /// Drops the focus and clears storage.
    pub fn clear_focus(&mut self) {
        self.phase = Phase::Settled;
        self.focus = None;
        self.storage.clear();
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &FocusStorage<S> {
        &self.storage
    }

    /// Consumes the context and returns its storage.
    #[must_use]
    pub fn into_storage(self) -> FocusStorage<S> {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::FOCUS_STORAGE_KEY;
    use crate::focus::MemoryStore;

    fn seeded(value: &str) -> FocusStorage<MemoryStore> {
        FocusStorage::new(MemoryStore::new().with_entry(FOCUS_STORAGE_KEY, value))
    }

    #[test]
    fn test_fresh_storage_hydrates_to_none() {
        let ctx = FocusContext::hydrated(FocusStorage::new(MemoryStore::new()));
        assert!(ctx.is_hydrated());
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn test_hydrate_adopts_persisted_focus() {
        let mut ctx = FocusContext::new(seeded("crm"));
        assert_eq!(ctx.focus(), None);
        assert!(!ctx.is_hydrated());

        assert_eq!(ctx.hydrate(), Some(FocusKey::Crm));
        assert_eq!(ctx.focus(), Some(FocusKey::Crm));
    }

    #[test]
    fn test_hydrate_ignores_invalid_value() {
        let ctx = FocusContext::hydrated(seeded("nonsense"));
        assert_eq!(ctx.focus(), None);
    }

    #[test]
    fn test_hydrate_never_overwrites_explicit_choice() {
        let mut ctx = FocusContext::new(seeded("crm"));
        ctx.set_focus(FocusKey::AiMl);
        assert_eq!(ctx.hydrate(), Some(FocusKey::AiMl));

        let mut ctx = FocusContext::new(seeded("crm"));
        ctx.clear_focus();
        assert_eq!(ctx.hydrate(), None);
    }

    #[test]
    fn test_hydrate_is_one_shot() {
        let mut ctx = FocusContext::hydrated(seeded("web"));
        assert_eq!(ctx.focus(), Some(FocusKey::Web));

        ctx.set_focus(FocusKey::Crm);
        ctx.hydrate();
        assert_eq!(ctx.focus(), Some(FocusKey::Crm));

        let storage = ctx.into_storage();
        assert_eq!(storage.load(), Some(FocusKey::Crm));
    }

    #[test]
    fn test_set_and_clear_write_through() {
        let mut ctx = FocusContext::hydrated(FocusStorage::new(MemoryStore::new()));

        ctx.set_focus(FocusKey::TeeSheet);
        ctx.set_focus(FocusKey::AiMl);
        assert_eq!(ctx.focus(), Some(FocusKey::AiMl));
        assert_eq!(ctx.storage().load(), Some(FocusKey::AiMl));

        ctx.clear_focus();
        assert_eq!(ctx.focus(), None);
        assert_eq!(ctx.storage().load(), None);
    }

    #[test]
    fn test_detached_context_still_tracks_memory() {
        let mut ctx = FocusContext::hydrated(FocusStorage::<MemoryStore>::detached());
        ctx.set_focus(FocusKey::Crm);
        assert_eq!(ctx.focus(), Some(FocusKey::Crm));
        assert_eq!(ctx.storage().load(), None);
    }
}
