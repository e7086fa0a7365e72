use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two alternating countdown modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Working,
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Working => "Work Time",
            Phase::Break => "Break Time",
        }
    }
}

/// A fixed (work, break) duration pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Short,
    Medium,
    Long,
}

impl Preset {
    /// Every preset, in selector order.
    pub const ALL: [Preset; 3] = [Preset::Short, Preset::Medium, Preset::Long];

    /// Work duration in minutes.
    pub fn work_min(self) -> u32 {
        match self {
            Preset::Short => 25,
            Preset::Medium => 60,
            Preset::Long => 120,
        }
    }

    /// Break duration in minutes.
    pub fn break_min(self) -> u32 {
        match self {
            Preset::Short => 5,
            Preset::Medium => 10,
            Preset::Long => 15,
        }
    }

    pub fn work_secs(self) -> u32 {
        self.work_min() * 60
    }

    pub fn break_secs(self) -> u32 {
        self.break_min() * 60
    }

    /// Duration of `phase` under this preset, in seconds.
    pub fn duration_secs(self, phase: Phase) -> u32 {
        match phase {
            Phase::Working => self.work_secs(),
            Phase::Break => self.break_secs(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Short => "short",
            Preset::Medium => "medium",
            Preset::Long => "long",
        }
    }

    /// Selector label, e.g. "25m / 5m".
    pub fn label(self) -> String {
        format!("{}m / {}m", self.work_min(), self.break_min())
    }

    /// Next preset in selector order, wrapping around.
    pub fn next(self) -> Preset {
        match self {
            Preset::Short => Preset::Medium,
            Preset::Medium => Preset::Long,
            Preset::Long => Preset::Short,
        }
    }

    pub fn previous(self) -> Preset {
        match self {
            Preset::Short => Preset::Long,
            Preset::Medium => Preset::Short,
            Preset::Long => Preset::Medium,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown preset '{0}' (expected short, medium or long)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Preset::Short),
            "medium" => Ok(Preset::Medium),
            "long" => Ok(Preset::Long),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_durations() {
        assert_eq!(Preset::Short.work_secs(), 1500);
        assert_eq!(Preset::Short.break_secs(), 300);
        assert_eq!(Preset::Medium.work_secs(), 3600);
        assert_eq!(Preset::Medium.break_secs(), 600);
        assert_eq!(Preset::Long.work_secs(), 7200);
        assert_eq!(Preset::Long.break_secs(), 900);
    }

    #[test]
    fn duration_by_phase() {
        assert_eq!(Preset::Medium.duration_secs(Phase::Working), 3600);
        assert_eq!(Preset::Medium.duration_secs(Phase::Break), 600);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Long".parse::<Preset>(), Ok(Preset::Long));
        assert_eq!(" short ".parse::<Preset>(), Ok(Preset::Short));
        assert_eq!(
            "huge".parse::<Preset>().unwrap_err().to_string(),
            "unknown preset 'huge' (expected short, medium or long)"
        );
    }

    #[test]
    fn next_and_previous_wrap() {
        for preset in Preset::ALL {
            assert_eq!(preset.next().previous(), preset);
        }
        assert_eq!(Preset::Long.next(), Preset::Short);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Preset::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Phase::Break).unwrap(), "\"break\"");
    }
}
