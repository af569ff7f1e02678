use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// What kind of entity a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    #[default]
    Post,
    Comment,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Post => "post",
            TargetKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("post") {
            Ok(TargetKind::Post)
        } else if trimmed.eq_ignore_ascii_case("comment") {
            Ok(TargetKind::Comment)
        } else {
            Err(ParseError::UnknownTargetKind(trimmed.to_string()))
        }
    }
}

/// Opaque identifier of the reported entity. Numeric and textual ids are
/// both accepted and kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetId {
    Number(i64),
    Text(String),
}

impl TargetId {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyTargetId);
        }
        // Non-canonical spellings such as "007" or "+5" stay textual.
        Ok(match trimmed.parse::<i64>() {
            Ok(n) if n.to_string() == trimmed => TargetId::Number(n),
            _ => TargetId::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Number(n) => write!(f, "{n}"),
            TargetId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TargetId {
    fn from(value: i64) -> Self {
        TargetId::Number(value)
    }
}

impl From<&str> for TargetId {
    fn from(value: &str) -> Self {
        TargetId::Text(value.to_string())
    }
}

impl From<String> for TargetId {
    fn from(value: String) -> Self {
        TargetId::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Spam,
    Harassment,
    Misinformation,
    Illegal,
    Other,
}

impl ReportReason {
    pub const ALL: [ReportReason; 5] = [
        ReportReason::Spam,
        ReportReason::Harassment,
        ReportReason::Misinformation,
        ReportReason::Illegal,
        ReportReason::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportReason::Spam => "spam",
            ReportReason::Harassment => "harassment",
            ReportReason::Misinformation => "misinformation",
            ReportReason::Illegal => "illegal",
            ReportReason::Other => "other",
        }
    }
}

impl FromStr for ReportReason {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownReason(trimmed.to_string()))
    }
}

/// Typed shape of what the report form collects. Submission itself takes
/// any JSON value; this is only a convenience for building one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportForm {
    pub reason: ReportReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ReportForm {
    pub fn new(reason: ReportReason) -> Self {
        Self {
            reason,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.detail = (!detail.trim().is_empty()).then_some(detail);
        self
    }

    pub fn into_payload(self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
