//! Line layout templates
//!
//! A [`LogFormat`] is a closed set of recipes that order the `LEVEL`, `NAME`
//! and `TIME` tokens in front of the message:
//!
//! ```text
//! None           Some Message
//! Level          [INFO ] Some Message
//! LevelNameTime  [INFO ] [SERVER] [15:05:03] Some Message
//! TimeName       [15:05:03] [SERVER] Some Message
//! ```
//!
//! Formats are tags, not caller-supplied format strings, so rendering is total
//! and a message can never be interpreted as layout.

use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// strftime layout of the `TIME` token
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Fixed display width of the `LEVEL` token
pub const LEVEL_WIDTH: usize = 5;

/// A prefix token rendered as `[<value>]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Level,
    Name,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LogFormat {
    /// `Some Message`
    None,
    /// `[INFO ] Some Message`
    Level,
    /// `[SERVER] Some Message`
    Name,
    /// `[15:05:03] Some Message`
    Time,
    /// `[INFO ] [SERVER] Some Message`
    #[default]
    LevelName,
    /// `[INFO ] [15:05:03] Some Message`
    LevelTime,
    /// `[SERVER] [15:05:03] Some Message`
    NameTime,
    /// `[INFO ] [SERVER] [15:05:03] Some Message`
    LevelNameTime,
    /// `[SERVER] [INFO ] Some Message`
    NameLevel,
    /// `[INFO ] [15:05:03] [SERVER] Some Message`
    LevelTimeName,
    /// `[15:05:03] [INFO ] Some Message`
    TimeLevel,
    /// `[15:05:03] [SERVER] Some Message`
    TimeName,
}

impl LogFormat {
    pub const ALL: [LogFormat; 12] = [
        LogFormat::None,
        LogFormat::Level,
        LogFormat::Name,
        LogFormat::Time,
        LogFormat::LevelName,
        LogFormat::LevelTime,
        LogFormat::NameTime,
        LogFormat::LevelNameTime,
        LogFormat::NameLevel,
        LogFormat::LevelTimeName,
        LogFormat::TimeLevel,
        LogFormat::TimeName,
    ];

    /// Prefix tokens in render order
    pub const fn tokens(self) -> &'static [Token] {
        use Token::*;
        match self {
            LogFormat::None => &[],
            LogFormat::Level => &[Level],
            LogFormat::Name => &[Name],
            LogFormat::Time => &[Time],
            LogFormat::LevelName => &[Level, Name],
            LogFormat::LevelTime => &[Level, Time],
            LogFormat::NameTime => &[Name, Time],
            LogFormat::LevelNameTime => &[Level, Name, Time],
            LogFormat::NameLevel => &[Name, Level],
            LogFormat::LevelTimeName => &[Level, Time, Name],
            LogFormat::TimeLevel => &[Time, Level],
            LogFormat::TimeName => &[Time, Name],
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            LogFormat::None => "None",
            LogFormat::Level => "Level",
            LogFormat::Name => "Name",
            LogFormat::Time => "Time",
            LogFormat::LevelName => "LevelName",
            LogFormat::LevelTime => "LevelTime",
            LogFormat::NameTime => "NameTime",
            LogFormat::LevelNameTime => "LevelNameTime",
            LogFormat::NameLevel => "NameLevel",
            LogFormat::LevelTimeName => "LevelTimeName",
            LogFormat::TimeLevel => "TimeLevel",
            LogFormat::TimeName => "TimeName",
        }
    }

    /// Look up a format by tag name, case-insensitively.
    ///
    /// Unknown tags resolve to [`LogFormat::None`].
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(tag))
            .unwrap_or(LogFormat::None)
    }

    pub fn uses_time(self) -> bool {
        self.tokens().contains(&Token::Time)
    }

    /// Render a line from its parts. Pure: equal inputs give equal output.
    pub fn render(
        self,
        level: Severity,
        name: &str,
        message: impl fmt::Display,
        time: &DateTime<Local>,
    ) -> String {
        self.render_parts(level, name, message, Some(time))
    }

    /// Like [`render`](Self::render), but only reads `clock` when the layout
    /// has a `TIME` token
    pub fn render_with(
        self,
        level: Severity,
        name: &str,
        message: impl fmt::Display,
        clock: impl FnOnce() -> DateTime<Local>,
    ) -> String {
        let time = self.uses_time().then(clock);
        self.render_parts(level, name, message, time.as_ref())
    }

    fn render_parts(
        self,
        level: Severity,
        name: &str,
        message: impl fmt::Display,
        time: Option<&DateTime<Local>>,
    ) -> String {
        let mut line = String::new();
        for token in self.tokens() {
            // Writing into a String cannot fail
            let _ = match (token, time) {
                (Token::Level, _) => {
                    write!(line, "[{:<width$.width$}] ", level, width = LEVEL_WIDTH)
                }
                (Token::Name, _) => write!(line, "[{}] ", name),
                (Token::Time, Some(time)) => write!(line, "[{}] ", time.format(TIME_FORMAT)),
                (Token::Time, None) => Ok(()),
            };
        }
        let _ = write!(line, "{}", message);
        line
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Deserializes through [`LogFormat::from_tag`], so unknown tags become `None`
impl<'de> Deserialize<'de> for LogFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl FromStr for LogFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}
