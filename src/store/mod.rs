//! Client-local key/value persistence
//!
//! Backends:
//! - `CookieStore`: `document.cookie` on the web (any `CookieSource`)
//! - `MemoryStore`: in-memory jar with a manual clock
//! - `NullStore`: storage disabled, nothing persists
//!
//! None of the operations fail. A backend that cannot reach its facility
//! drops writes and reads back absent.

pub mod cookie;
pub mod memory;

pub use cookie::{CookieSource, CookieStore, find_cookie, format_http_date};
pub use memory::MemoryStore;

use crate::consts::DAY_MS;

/// Lifetime of a stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiry {
    /// Lives until the browsing session ends or the store is cleared
    #[default]
    Session,
    /// Expires this many days from now (negative means already expired)
    Days(i64),
}

impl Expiry {
    /// Day count as written by callers; zero means session-scoped
    pub fn days(days: i64) -> Self {
        if days == 0 {
            Expiry::Session
        } else {
            Expiry::Days(days)
        }
    }

    /// Absolute expiration time (ms since epoch), `None` for session entries
    pub fn expires_at(&self, now_ms: f64) -> Option<f64> {
        match *self {
            Expiry::Session | Expiry::Days(0) => None,
            Expiry::Days(days) => Some(now_ms + days as f64 * DAY_MS),
        }
    }
}

/// Named string values with an expiration
pub trait Store {
    /// Value stored under exactly `name`, if any
    fn read(&self, name: &str) -> Option<String>;

    /// Store `value` under `name`, replacing any previous value
    fn write(&mut self, name: &str, value: &str, expiry: Expiry);

    /// Expire every entry
    fn clear_all(&mut self);
}

/// Storage facility that is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl Store for NullStore {
    fn read(&self, _name: &str) -> Option<String> {
        None
    }

    fn write(&mut self, name: &str, _value: &str, _expiry: Expiry) {
        log::debug!("Storage disabled, dropping write to {}", name);
    }

    fn clear_all(&mut self) {}
}
