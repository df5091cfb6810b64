//! Browser cookie as the durable focus store.
//!
//! A [`CookieStore`] is built from the request's `Cookie` header and collects
//! the `Set-Cookie` values a handler must send back. Storage keys map to
//! cookie names by replacing `.` with `_`.

use anyhow::Result;
use std::collections::BTreeMap;

use super::storage::KeyValueStore;

/// One year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Request cookies in, `Set-Cookie` header values out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieStore {
    cookies: BTreeMap<String, String>,
    pending: Vec<String>,
}

impl CookieStore {
    /// Creates an empty store (no cookies on the request).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `Cookie` request header (`a=1; b=2`).
    ///
    /// Malformed pairs are skipped; the first occurrence of a name wins.
    #[must_use]
    pub fn from_header(header: Option<&str>) -> Self {
        let mut cookies = BTreeMap::new();

        for pair in header.unwrap_or_default().split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"');
            cookies
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }

        Self {
            cookies,
            pending: Vec::new(),
        }
    }

    /// Cookie name used for a storage key.
    #[must_use]
    pub fn cookie_name(key: &str) -> String {
        key.replace('.', "_")
    }

    /// `Set-Cookie` values produced by writes so far, in order.
    #[must_use]
    pub fn set_cookie_headers(&self) -> &[String] {
        &self.pending
    }
}

/// Cookie values are restricted to RFC 6265 `cookie-octet`s.
fn is_cookie_value(value: &str) -> bool {
    value
        .bytes()
        .all(|b| matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E))
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cookies.get(&Self::cookie_name(key)).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !is_cookie_value(value) {
            anyhow::bail!("value for '{key}' contains characters not allowed in a cookie");
        }

        let name = Self::cookie_name(key);
        self.pending.push(format!(
            "{name}={value}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ));
        self.cookies.insert(name, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let name = Self::cookie_name(key);
        self.pending
            .push(format!("{name}=; Path=/; Max-Age=0; SameSite=Lax"));
        self.cookies.remove(&name);
        Ok(())
    }
}
