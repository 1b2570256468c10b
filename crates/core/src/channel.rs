//! Sales channels: the outward-facing groupings a stock serves.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Kind of sales channel. Websites are the built-in kind; the type is
/// open for custom channel integrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelType(String);

impl ChannelType {
    pub const WEBSITE: &'static str = "website";

    /// The storefront website channel type.
    pub fn website() -> Self {
        Self(Self::WEBSITE.to_string())
    }

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("channel type cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A (type, code) pair, e.g. (website, "base"); resolves to at most
/// one stock.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesChannel {
    channel_type: ChannelType,
    code: String,
}

impl SalesChannel {
    pub fn new(channel_type: ChannelType, code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("channel code cannot be empty"));
        }
        Ok(Self { channel_type, code })
    }

    /// Website channel for the given store code.
    pub fn website(code: impl Into<String>) -> DomainResult<Self> {
        Self::new(ChannelType::website(), code)
    }

    pub fn channel_type(&self) -> &ChannelType {
        &self.channel_type
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl ValueObject for SalesChannel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_channel_uses_website_type() {
        let channel = SalesChannel::website("base").unwrap();
        assert_eq!(channel.channel_type().as_str(), ChannelType::WEBSITE);
        assert_eq!(channel.code(), "base");
    }

    #[test]
    fn blank_code_is_rejected() {
        assert!(SalesChannel::website("  ").is_err());
        assert!(ChannelType::new("").is_err());
    }

    #[test]
    fn channels_compare_by_value() {
        let a = SalesChannel::website("base").unwrap();
        let b = SalesChannel::website("base").unwrap();
        assert_eq!(a, b);
    }
}
