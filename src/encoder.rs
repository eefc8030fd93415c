//! Stylesheet references
//!
//! Compiled CSS is handed to the widget as a `data:` URI. A millisecond
//! timestamp fragment is appended so a loader that caches by URL refetches
//! after every edit.

use std::sync::atomic::{AtomicI64, Ordering};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

const PREFIX: &str = "data:text/css;base64,";

static LAST_TIMESTAMP: AtomicI64 = AtomicI64::new(0);

/// Errors that can occur when decoding a stylesheet reference
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("not a base64 CSS data URI")]
    NotADataUri,
    #[error("missing or invalid timestamp fragment")]
    InvalidTimestamp,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A stylesheet reference split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStylesheet {
    pub css: String,
    pub timestamp_ms: i64,
}

/// Encode CSS as a data URI stamped with the current time
///
/// Successive calls always carry distinct, increasing timestamps.
pub fn encode(css: &str) -> String {
    encode_at(css, next_timestamp())
}

/// Encode CSS as a data URI with an explicit timestamp
pub fn encode_at(css: &str, timestamp_ms: i64) -> String {
    format!("{PREFIX}{}#{timestamp_ms}", STANDARD.encode(css.as_bytes()))
}

/// Split a reference produced by [`encode`] back into CSS and timestamp
pub fn decode(reference: &str) -> Result<DecodedStylesheet, EncodeError> {
    let rest = reference
        .strip_prefix(PREFIX)
        .ok_or(EncodeError::NotADataUri)?;
    let (payload, fragment) = rest.rsplit_once('#').ok_or(EncodeError::InvalidTimestamp)?;
    let timestamp_ms = fragment
        .parse::<i64>()
        .map_err(|_| EncodeError::InvalidTimestamp)?;

    let bytes = STANDARD.decode(payload)?;
    Ok(DecodedStylesheet {
        css: String::from_utf8(bytes)?,
        timestamp_ms,
    })
}

/// Wall-clock milliseconds, bumped past the previous value when the clock
/// has not advanced
fn next_timestamp() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_TIMESTAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_TIMESTAMP.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}
