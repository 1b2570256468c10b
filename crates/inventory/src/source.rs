//! Inventory sources: physical or virtual locations holding stock.

use serde::{Deserialize, Serialize};

use stockpool_core::{DomainError, DomainResult, ValueObject};

/// Identifier of an inventory source (location).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceCode(String);

impl SourceCode {
    /// Create a source code, rejecting blank input.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("source code cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SourceCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A source as assigned to a stock.
///
/// `priority` orders sources within one stock, lower number = higher
/// priority. Disabled sources never contribute to salability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub code: SourceCode,
    pub enabled: bool,
    pub priority: u32,
}

impl Source {
    pub fn new(code: SourceCode, enabled: bool, priority: u32) -> Self {
        Self {
            code,
            enabled,
            priority,
        }
    }
}

impl ValueObject for Source {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_code_rejects_blank_input() {
        assert!(SourceCode::new("").is_err());
        assert!(SourceCode::new(" \t").is_err());
    }

    #[test]
    fn source_code_preserves_value() {
        let code = SourceCode::new("warehouse-east").unwrap();
        assert_eq!(code.as_str(), "warehouse-east");
    }
}
