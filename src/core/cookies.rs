//! # Cookie Harvesting
//!
//! Turns a raw `Cookie`-header style string (`a=1; b=2`) into descriptors the
//! backend can replay against the target site.
//!
//! The raw string comes from a [`CookieStore`], read fresh on every transfer.
//! Descriptors always carry the configured scope, whatever the cookie's real
//! origin was.
//!
//! ```text
//! "a=1; b=2"  →  [{name:"a", value:"1", domain, path}, {name:"b", value:"2", domain, path}]
//! ```

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::Serialize;

/// Default domain stamped onto every descriptor.
pub const DEFAULT_COOKIE_DOMAIN: &str = ".wellfound.com";
pub const DEFAULT_COOKIE_PATH: &str = "/";

/// A single cookie as sent to `/set-cookies`.
///
/// `value` is `None` for a segment with no `=`; it is then left out of the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub domain: String,
    pub path: String,
}

/// Domain and path applied to every harvested cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieScope {
    pub domain: String,
    pub path: String,
}

impl Default for CookieScope {
    fn default() -> Self {
        Self {
            domain: DEFAULT_COOKIE_DOMAIN.to_string(),
            path: DEFAULT_COOKIE_PATH.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum CookieStoreError {
    Io { path: PathBuf, source: std::io::Error },
    /// The variable exists but is not valid unicode.
    Env { var: String },
}

impl fmt::Display for CookieStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieStoreError::Io { path, source } => {
                write!(f, "failed to read cookies from {}: {source}", path.display())
            }
            CookieStoreError::Env { var } => write!(f, "{var} is not valid unicode"),
        }
    }
}

impl std::error::Error for CookieStoreError {}

/// Source of the ambient cookie string.
pub trait CookieStore: Send + Sync {
    /// Returns the raw cookie string, e.g. `"a=1; b=2"`. Empty when there are none.
    fn read(&self) -> Result<String, CookieStoreError>;
}

/// Fixed cookie string, handy for tests and for inline configuration.
pub struct StaticCookieStore(pub String);

impl CookieStore for StaticCookieStore {
    fn read(&self) -> Result<String, CookieStoreError> {
        Ok(self.0.clone())
    }
}

/// Reads an environment variable on every call. Unset means no cookies.
pub struct EnvCookieStore {
    pub var: String,
}

impl CookieStore for EnvCookieStore {
    fn read(&self) -> Result<String, CookieStoreError> {
        match std::env::var(&self.var) {
            Ok(raw) => Ok(raw),
            Err(std::env::VarError::NotPresent) => Ok(String::new()),
            Err(std::env::VarError::NotUnicode(_)) => Err(CookieStoreError::Env {
                var: self.var.clone(),
            }),
        }
    }
}

/// Reads a file (for example a cookie header copied from devtools) on every call.
pub struct FileCookieStore {
    pub path: PathBuf,
}

impl CookieStore for FileCookieStore {
    fn read(&self) -> Result<String, CookieStoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CookieStoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(raw.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Splits a raw cookie string into descriptors.
///
/// Segments are split on `;` and trimmed, then split on `=`: the first piece
/// is the name and the second (if any) the value, so `a=b=c` yields value `b`.
/// A blank string yields no descriptors; any other segment is kept as is,
/// including empty ones left by a trailing `;`.
pub fn parse_cookie_string(raw: &str, scope: &CookieScope) -> Vec<CookieDescriptor> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(';')
        .map(|segment| {
            let mut parts = segment.trim().split('=');
            let name = parts.next().unwrap_or_default().to_string();
            let value = parts.next().map(str::to_string);
            CookieDescriptor {
                name,
                value,
                domain: scope.domain.clone(),
                path: scope.path.clone(),
            }
        })
        .collect()
}

/// Reads the store and parses its contents.
pub fn harvest(
    store: &dyn CookieStore,
    scope: &CookieScope,
) -> Result<Vec<CookieDescriptor>, CookieStoreError> {
    let raw = store.read()?;
    let cookies = parse_cookie_string(&raw, scope);
    debug!("Harvested {} cookies for {}", cookies.len(), scope.domain);
    Ok(cookies)
}
