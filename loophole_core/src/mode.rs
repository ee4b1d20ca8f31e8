//! Explanation modes.
//!
//! A mode selects the report template and how many key sentences the ranker
//! is asked for. The derivation of key sentences, ambiguities and bullets is
//! identical across modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Balanced reading with obligations, caveats and watchpoints.
    #[default]
    Neutral,
    /// Two key points and what to watch.
    Simple,
    /// Market-participant framing with practical impacts.
    Trader,
    /// Compliance, operational and enforcement risk framing.
    Risks,
}

impl Mode {
    pub const ALL: [Self; 4] = [Self::Neutral, Self::Simple, Self::Trader, Self::Risks];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Simple => "simple",
            Self::Trader => "trader",
            Self::Risks => "risks",
        }
    }

    /// Number of top-ranked sentences the report asks for.
    #[must_use]
    pub const fn key_sentence_budget(&self) -> usize {
        match self {
            Self::Simple => 2,
            Self::Neutral | Self::Trader | Self::Risks => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "simple" => Ok(Self::Simple),
            "trader" => Ok(Self::Trader),
            "risks" => Ok(Self::Risks),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_per_mode() {
        assert_eq!(Mode::Simple.key_sentence_budget(), 2);
        assert_eq!(Mode::Neutral.key_sentence_budget(), 3);
        assert_eq!(Mode::Trader.key_sentence_budget(), 3);
        assert_eq!(Mode::Risks.key_sentence_budget(), 3);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert_eq!(" Trader ".parse::<Mode>(), Ok(Mode::Trader));
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "bullish".parse::<Mode>();
        assert!(matches!(&err, Err(ParseModeError(name)) if name == "bullish"));
        assert!(err.is_err_and(|e| e.to_string().contains("neutral, simple, trader, risks")));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Mode::Risks).expect("mode should serialize");
        assert_eq!(json, "\"risks\"");
        let mode: Mode = serde_json::from_str("\"simple\"").expect("valid mode should parse");
        assert_eq!(mode, Mode::Simple);
    }
}
