//! # Email Address Newtype
//!
//! An email-shaped string: `local@domain` with exactly one `@`, no
//! whitespace, and a domain that contains a dot with characters on both
//! sides of it. [`EMAIL_PATTERN`] is the only definition of the shape;
//! the schema layer checks email fields through [`EmailAddress::parse`].

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::EmformError;

/// Shape of an email address. `\s` is Unicode white space, the same
/// class `char::is_whitespace` tests.
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// A validated, email-shaped address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and wrap an email address.
    ///
    /// # Errors
    ///
    /// Returns [`EmformError::InvalidEmail`] naming the failed part of the
    /// shape check.
    pub fn parse(value: impl Into<String>) -> Result<Self, EmformError> {
        let value = value.into();
        if email_regex().is_match(&value) {
            return Ok(Self(value));
        }
        let reason = rejection_reason(&value);
        Err(EmformError::InvalidEmail { value, reason })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which part of the shape `value` misses. Only called after the pattern
/// rejected `value`.
fn rejection_reason(value: &str) -> &'static str {
    if value.chars().any(char::is_whitespace) {
        return "contains whitespace";
    }
    let Some((local, domain)) = value.split_once('@') else {
        return "missing '@'";
    };
    if local.is_empty() {
        return "empty local part";
    }
    if domain.contains('@') {
        return "more than one '@'";
    }
    if domain.is_empty() {
        return "empty domain";
    }
    "domain is not of the form name.tld"
}

impl TryFrom<String> for EmailAddress {
    type Error = EmformError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        let email = EmailAddress::parse("jo@x.com").unwrap();
        assert_eq!(email.as_str(), "jo@x.com");
    }

    #[test]
    fn test_accepts_subdomains_and_plus() {
        assert!(EmailAddress::parse("first.last+tag@mail.example.co.uk").is_ok());
    }

    #[test]
    fn test_rejects_missing_at() {
        let err = EmailAddress::parse("jo.x.com").unwrap_err();
        assert!(err.to_string().contains("missing '@'"));
    }

    #[test]
    fn test_rejects_two_ats() {
        assert!(EmailAddress::parse("jo@x@y.com").is_err());
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(EmailAddress::parse("@x.com").is_err());
    }

    #[test]
    fn test_rejects_domain_without_inner_dot() {
        assert!(EmailAddress::parse("jo@localhost").is_err());
        assert!(EmailAddress::parse("jo@.com").is_err());
        assert!(EmailAddress::parse("jo@com.").is_err());
    }

    #[test]
    fn test_accepts_domain_with_trailing_dot_after_inner_dot() {
        // `[^@\s]+\.[^@\s]+` matches "a.b." through the first dot.
        assert!(EmailAddress::parse("jo@a.b.").is_ok());
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(EmailAddress::parse("jo @x.com").is_err());
        assert!(EmailAddress::parse("").is_err());
    }

    proptest::proptest! {
        #[test]
        fn test_without_at_always_rejected(s in "[^@]*") {
            proptest::prop_assert!(EmailAddress::parse(s).is_err());
        }

        #[test]
        fn test_simple_shape_always_accepted(
            local in "[a-z0-9._%+-]{1,16}",
            host in "[a-z0-9-]{1,16}",
            tld in "[a-z]{2,6}",
        ) {
            let address = format!("{local}@{host}.{tld}");
            proptest::prop_assert!(EmailAddress::parse(address).is_ok());
        }
    }

    #[test]
    fn test_unicode_whitespace_rejected() {
        let err = EmailAddress::parse("a@b.c\u{85}").unwrap_err();
        assert!(err.to_string().contains("contains whitespace"));
        assert!(EmailAddress::parse("a\u{2003}b@c.io").is_err());
    }

    #[test]
    fn test_byte_order_mark_is_not_whitespace() {
        assert!(EmailAddress::parse("a@b.c\u{feff}").is_ok());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<EmailAddress>("\"nope\"").is_err());
        let ok: EmailAddress = serde_json::from_str("\"a@b.io\"").unwrap();
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"a@b.io\"");
    }
}
