//! Focus personalization.
//!
//! A visitor picks a [`FocusKey`]; [`FocusContext`] keeps it for the session
//! and writes it through [`FocusStorage`] to whichever [`KeyValueStore`] the
//! surface provides (a cookie on the web, a JSON file for the CLI).

pub mod context;
pub mod cookie;
pub mod key;
pub mod storage;

pub use context::FocusContext;
pub use cookie::CookieStore;
pub use key::{FocusKey, UnknownFocusKey};
pub use storage::{FileStore, FocusStorage, KeyValueStore, MemoryStore};
