//! `document.cookie` backend
//!
//! The raw cookie string looks like `a=1; b=2`. Writes are directives of the
//! form `name=value; expires=<HTTP-date>; path=/`; clearing re-issues every
//! name with an expiry at the epoch.

use chrono::DateTime;

use super::{Expiry, Store};

/// Expiry used to delete a cookie
const EPOCH_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// RFC 7231 IMF-fixdate, as produced by `Date.prototype.toUTCString`
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Something that exposes a cookie string (the page document, or a test fake)
pub trait CookieSource {
    /// Raw cookie string, `None` when cookie access is unavailable
    fn cookie(&self) -> Option<String>;

    /// Apply one cookie directive; failures are swallowed
    fn set_cookie(&self, directive: &str);

    /// Current time (ms since epoch)
    fn now_ms(&self) -> f64;
}

/// Store backed by a cookie string
#[derive(Debug, Clone)]
pub struct CookieStore<D> {
    source: D,
}

impl<D: CookieSource> CookieStore<D> {
    pub fn new(source: D) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &D {
        &self.source
    }
}

impl<D: CookieSource> Store for CookieStore<D> {
    fn read(&self, name: &str) -> Option<String> {
        let raw = self.source.cookie()?;
        find_cookie(&raw, name).map(str::to_string)
    }

    fn write(&mut self, name: &str, value: &str, expiry: Expiry) {
        let expires = expiry
            .expires_at(self.source.now_ms())
            .and_then(format_http_date);
        self.source
            .set_cookie(&set_directive(name, value, expires.as_deref()));
    }

    fn clear_all(&mut self) {
        let Some(raw) = self.source.cookie() else {
            return;
        };
        for name in cookie_names(&raw) {
            self.source
                .set_cookie(&set_directive(name, "", Some(EPOCH_DATE)));
        }
    }
}

/// Look up `name` in a raw cookie string (exact, case-sensitive)
pub fn find_cookie<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|pair| {
        pair.trim_start()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

/// Names of every cookie in a raw cookie string
pub fn cookie_names(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';')
        .map(|pair| pair.split_once('=').map_or(pair, |(name, _)| name).trim())
        .filter(|name| !name.is_empty())
}

/// Build a `document.cookie` assignment
pub fn set_directive(name: &str, value: &str, expires: Option<&str>) -> String {
    match expires {
        Some(date) => format!("{}={}; expires={}; path=/", name, value, date),
        None => format!("{}={}; path=/", name, value),
    }
}

/// Format a timestamp as an HTTP-date (`Thu, 01 Jan 1970 00:00:00 GMT`)
///
/// `None` when the timestamp is outside chrono's range; the write then falls
/// back to a session cookie.
pub fn format_http_date(ms: f64) -> Option<String> {
    DateTime::from_timestamp_millis(ms.floor() as i64)
        .map(|date| date.format(HTTP_DATE_FORMAT).to_string())
}

/// The page's own cookie jar
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserCookies {
    document: Option<web_sys::HtmlDocument>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserCookies {
    /// Cookies of the current window's document (disabled if there is none)
    pub fn from_window() -> Self {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        if document.is_none() {
            log::debug!("No HTML document, cookies disabled");
        }
        Self { document }
    }
}

#[cfg(target_arch = "wasm32")]
impl CookieSource for BrowserCookies {
    fn cookie(&self) -> Option<String> {
        self.document.as_ref()?.cookie().ok()
    }

    fn set_cookie(&self, directive: &str) {
        if let Some(document) = &self.document {
            if document.set_cookie(directive).is_err() {
                log::debug!("Cookie write rejected");
            }
        }
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
