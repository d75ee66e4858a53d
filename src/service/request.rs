//! Wire types for the summarization endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse length knob selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    Short,
    #[default]
    Medium,
    Detailed,
}

/// Min/max summary length sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_length: u32,
    pub max_length: u32,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [Self::Short, Self::Medium, Self::Detailed];

    pub fn length_bounds(self) -> LengthBounds {
        let (min_length, max_length) = match self {
            Self::Short => (20, 60),
            Self::Medium => (30, 100),
            Self::Detailed => (80, 200),
        };
        LengthBounds {
            min_length,
            max_length,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Detailed => "detailed",
        }
    }

    /// Label shown in the style selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Detailed => "Detailed",
        }
    }

    /// Next style in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Short => Self::Medium,
            Self::Medium => Self::Detailed,
            Self::Detailed => Self::Short,
        }
    }

    /// Previous style in selector order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Short => Self::Detailed,
            Self::Medium => Self::Short,
            Self::Detailed => Self::Medium,
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown summary style '{0}' (expected short, medium or detailed)")]
pub struct ParseStyleError(pub String);

impl FromStr for SummaryStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "detailed" => Ok(Self::Detailed),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

/// Body of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub max_length: u32,
    pub min_length: u32,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>, style: SummaryStyle) -> Self {
        let bounds = style.length_bounds();
        Self {
            text: text.into(),
            max_length: bounds.max_length,
            min_length: bounds.min_length,
        }
    }
}

/// Expected reply. `summary` is required; anything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn length_bounds_follow_style_table() {
        let table = [
            (SummaryStyle::Short, 20, 60),
            (SummaryStyle::Medium, 30, 100),
            (SummaryStyle::Detailed, 80, 200),
        ];
        for (style, min, max) in table {
            let bounds = style.length_bounds();
            assert_eq!(bounds.min_length, min, "min for {}", style);
            assert_eq!(bounds.max_length, max, "max for {}", style);
        }
    }

    #[test]
    fn medium_is_default() {
        assert_eq!(SummaryStyle::default(), SummaryStyle::Medium);
    }

    #[test]
    fn parse_accepts_only_known_styles() {
        assert_eq!("short".parse::<SummaryStyle>(), Ok(SummaryStyle::Short));
        assert_eq!("detailed".parse::<SummaryStyle>(), Ok(SummaryStyle::Detailed));
        assert!("long".parse::<SummaryStyle>().is_err());
        assert!("Short".parse::<SummaryStyle>().is_err());
        assert!("".parse::<SummaryStyle>().is_err());
    }

    #[test]
    fn next_and_prev_cycle_through_all_styles() {
        for style in SummaryStyle::ALL {
            assert_eq!(style.next().prev(), style);
        }
        assert_eq!(SummaryStyle::Detailed.next(), SummaryStyle::Short);
        assert_eq!(SummaryStyle::Short.prev(), SummaryStyle::Detailed);
    }

    #[test]
    fn request_serializes_to_endpoint_shape() {
        let request = SummarizeRequest::new("some text", SummaryStyle::Short);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"text": "some text", "max_length": 60, "min_length": 20})
        );
    }

    #[test]
    fn response_requires_summary_string() {
        let ok: SummarizeResponse =
            serde_json::from_str(r#"{"summary": "S", "extra": 1}"#).unwrap();
        assert_eq!(ok.summary, "S");

        assert!(serde_json::from_str::<SummarizeResponse>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<SummarizeResponse>(r#"{"summary": null}"#).is_err());
        assert!(serde_json::from_str::<SummarizeResponse>(r#"{"summary": 42}"#).is_err());
    }

    #[test]
    fn style_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: SummaryStyle,
        }
        let w: Wrapper = toml::from_str(r#"style = "detailed""#).unwrap();
        assert_eq!(w.style, SummaryStyle::Detailed);
        assert!(toml::from_str::<Wrapper>(r#"style = "huge""#).is_err());
    }
}
