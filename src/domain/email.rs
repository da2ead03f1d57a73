use std::fmt;

use crate::domain::DomainError;

/// Validated email address. Construction is the single validation point;
/// everything downstream trusts a constructed `Email`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if is_plausible_address(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidEmail(value))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Syntactic plausibility only: one '@', non-empty local part, and a domain
// with an interior dot. Deliverability is not this type's problem.
fn is_plausible_address(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(pos) => pos > 0 && pos < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_addresses() {
        for value in ["a@x.com", "first.last@mail.example.org", "x+tag@y.co"] {
            let email = Email::new(value).unwrap();
            assert_eq!(email.value(), value);
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in [
            "",
            "no-at-sign",
            "@x.com",
            "a@",
            "a@nodot",
            "a@.com",
            "a@x.",
            "a b@x.com",
            "a@x@y.com",
        ] {
            assert!(
                matches!(Email::new(value), Err(DomainError::InvalidEmail(_))),
                "expected rejection for {value:?}"
            );
        }
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Email::new("a@x.com").unwrap(), Email::new("a@x.com").unwrap());
        assert_ne!(Email::new("a@x.com").unwrap(), Email::new("b@x.com").unwrap());
    }
}
