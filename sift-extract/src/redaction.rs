//! PII redaction: emails, phone numbers, and SSNs are replaced with
//! placeholders before any scanning sees the text.
//!
//! Redaction runs ahead of normalization, so raw contact details can never
//! reach vocabulary matching, window inference, or anything derived from
//! them. Patterns are ordered most specific first.

use regex::Regex;
use std::sync::LazyLock;

static RE_EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").ok());

static RE_SSN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").ok());

/// US-format phone numbers, optionally with a country prefix.
static RE_PHONE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").ok()
});

/// Replace every email, SSN, and phone number with a placeholder.
///
/// Text without PII is returned unchanged.
pub fn redact(text: &str) -> String {
    let mut redacted = text.to_string();
    for (re, placeholder) in [
        (&RE_EMAIL, "[EMAIL]"),
        (&RE_SSN, "[SSN]"),
        (&RE_PHONE, "[PHONE]"),
    ] {
        if let Some(re) = re.as_ref() {
            if re.is_match(&redacted) {
                redacted = re.replace_all(&redacted, placeholder).into_owned();
            }
        }
    }
    redacted
}
