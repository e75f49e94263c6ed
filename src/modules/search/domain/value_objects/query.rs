use crate::shared::errors::AppError;
use serde::Serialize;
use std::fmt;

/// Canonical search query: trimmed and never empty.
///
/// No case folding or fuzzy rewriting happens here; the text is sent to the
/// catalog exactly as the user produced it, minus surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// Normalize raw input, returning `None` for empty or whitespace-only text
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Query {
    type Error = AppError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw).ok_or_else(|| {
            AppError::ValidationError("Search query cannot be empty".to_string())
        })
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which input path produced a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOrigin {
    Text,
    Voice,
    Image,
    QuickAccess,
}

impl QueryOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOrigin::Text => "text",
            QueryOrigin::Voice => "voice",
            QueryOrigin::Image => "image",
            QueryOrigin::QuickAccess => "quick access",
        }
    }
}

impl fmt::Display for QueryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
