//! Severity definitions

use super::error::LoggerError;
use colored::Color;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ranked logging level.
///
/// Ranks are fixed: `Off = 0 < Error = 1 < Warn = 2 < Info = 3 < Debug = 4`.
/// A higher rank means a more verbose logger. `Off` is only meaningful as a
/// filter threshold and is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Off = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl Severity {
    /// Every severity in rank order.
    pub const ALL: [Severity; 5] = [
        Severity::Off,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Off => "OFF",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Display color for this severity, `None` for `Off`
    pub const fn color(self) -> Option<Color> {
        match self {
            Severity::Off => None,
            Severity::Error => Some(Color::Red),
            Severity::Warn => Some(Color::Yellow),
            Severity::Info => Some(Color::Green),
            Severity::Debug => Some(Color::Blue),
        }
    }

    /// Whether a logger filtering at `self` lets a `requested` line through.
    ///
    /// `Off` is never admitted as a requested level, so a threshold of `Off`
    /// suppresses everything, including `Error`.
    #[inline]
    pub fn admits(self, requested: Severity) -> bool {
        requested != Severity::Off && self.rank() >= requested.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Deserializes through `FromStr`, accepting the same names and aliases
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OFF" | "NONE" => Ok(Severity::Off),
            "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_ranks() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
        assert!(Severity::Off < Severity::Error);
        assert!(Severity::Warn < Severity::Debug);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Severity::Off.to_string(), "OFF");
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Debug.to_string(), "DEBUG");
        assert_eq!(format!("{:<5}", Severity::Info), "INFO ");
    }

    #[test]
    fn test_off_admits_nothing() {
        for requested in Severity::ALL {
            assert!(!Severity::Off.admits(requested));
        }
    }

    #[test]
    fn test_admits_by_rank() {
        assert!(Severity::Warn.admits(Severity::Error));
        assert!(Severity::Warn.admits(Severity::Warn));
        assert!(!Severity::Warn.admits(Severity::Info));
        assert!(!Severity::Info.admits(Severity::Debug));
        assert!(Severity::Debug.admits(Severity::Debug));
        assert!(!Severity::Debug.admits(Severity::Off));
    }

    #[test]
    fn test_colors() {
        assert_eq!(Severity::Off.color(), None);
        assert_eq!(Severity::Error.color(), Some(Color::Red));
        assert_eq!(Severity::Debug.color(), Some(Color::Blue));
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!(" Debug ".parse::<Severity>().unwrap(), Severity::Debug);
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    }

    #[test]
    fn test_serde_matches_parse() {
        let level: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, Severity::Warn);
        let level: Severity = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(level, Severity::Off);
        assert_eq!(serde_json::to_string(&Severity::Debug).unwrap(), "\"DEBUG\"");

        let err = serde_json::from_str::<Severity>("\"loud\"").unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
