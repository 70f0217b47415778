//! Credential value object

use super::error::DomainError;

/// An opaque API key used to authenticate one outbound completion call
///
/// Never mutated once created. `Debug` and `Display` are redacted so a key
/// cannot leak through logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    secret: String,
}

impl Credential {
    pub fn try_new(secret: impl Into<String>) -> Result<Self, DomainError> {
        let secret = secret.into();
        let trimmed = secret.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self {
            secret: trimmed.to_string(),
        })
    }

    /// The raw key, for building the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.secret
    }

    /// Short non-secret hint (last four characters) for diagnostics
    pub fn hint(&self) -> String {
        let chars: Vec<char> = self.secret.chars().collect();
        let start = chars.len().saturating_sub(4);
        format!("...{}", chars[start..].iter().collect::<String>())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential({})", self.hint())
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hint())
    }
}
