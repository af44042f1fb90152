//! Admin token pair kept in client storage
//!
//! The session is two loose string entries: an opaque token and its expiry
//! as epoch milliseconds. Nothing here validates the token itself; that is
//! the server's job.

use crate::config::StorageKeys;
use crate::store::KeyValueStore;
use crate::{Error, Result};
use std::num::IntErrorKind;
use tracing::{info, warn};

/// Parsed form of the stored expiry entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    Absent,
    At(i64),
    /// Present but without a leading integer
    Malformed(String),
}

impl Expiry {
    /// Reads the leading integer the way `parseInt` does: leading whitespace,
    /// an optional sign, an optional `0x` prefix, then as many digits as
    /// there are. Trailing text is ignored and overflow saturates.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Absent,
            Some(raw) if raw.is_empty() => Self::Absent,
            Some(raw) => {
                parse_int_prefix(raw).map_or_else(|| Self::Malformed(raw.to_string()), Self::At)
            }
        }
    }
}

fn parse_int_prefix(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    match i64::from_str_radix(&signed, radix) {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Token or expiry not stored
    Missing,
    /// `now <= expiry`
    Active { remaining_ms: i64 },
    /// Past its expiry, or the expiry is unreadable
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub expiry: Expiry,
}

impl StoredSession {
    pub fn status(&self, now: i64) -> SessionStatus {
        match (&self.token, &self.expiry) {
            (None, _) | (_, Expiry::Absent) => SessionStatus::Missing,
            (Some(_), Expiry::Malformed(_)) => SessionStatus::Expired,
            (Some(_), Expiry::At(at)) if now > *at => SessionStatus::Expired,
            (Some(_), Expiry::At(at)) => SessionStatus::Active {
                remaining_ms: at - now,
            },
        }
    }

    /// Token stored and expiry strictly in the future
    pub fn is_live(&self, now: i64) -> bool {
        self.token.is_some() && matches!(self.expiry, Expiry::At(at) if now < at)
    }
}

fn read_entry<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            warn!(key, error = %err, "Failed to read session entry, treating as absent");
            None
        }
    }
}

/// Read the stored session. Read failures count as absent entries.
pub fn read<S: KeyValueStore + ?Sized>(store: &S, keys: &StorageKeys) -> StoredSession {
    let token = read_entry(store, &keys.token_key);
    let expiry = read_entry(store, &keys.expiry_key);
    StoredSession {
        token,
        expiry: Expiry::parse(expiry.as_deref()),
    }
}

/// Store `token` valid for `ttl_ms` from `now`. Returns the stored expiry.
pub fn start<S: KeyValueStore + ?Sized>(
    store: &S,
    keys: &StorageKeys,
    token: &str,
    now: i64,
    ttl_ms: i64,
) -> Result<i64> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::EmptyToken);
    }

    let expires_at = now.saturating_add(ttl_ms);
    store.set(&keys.token_key, token)?;
    store.set(&keys.expiry_key, &expires_at.to_string())?;
    info!(expires_at, "Admin session stored");
    Ok(expires_at)
}

/// Remove both entries. Both removals are attempted; the first error wins.
pub fn clear<S: KeyValueStore + ?Sized>(store: &S, keys: &StorageKeys) -> Result<()> {
    let token = store.remove(&keys.token_key);
    let expiry = store.remove(&keys.expiry_key);
    token.and(expiry)
}
