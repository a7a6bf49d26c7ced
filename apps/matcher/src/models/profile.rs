use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest completed (or required) degree. Ordinal: None < Bachelor < Master < Phd.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    None,
    Bachelor,
    Master,
    Phd,
}

impl EducationLevel {
    pub fn ordinal(self) -> u8 {
        match self {
            EducationLevel::None => 0,
            EducationLevel::Bachelor => 1,
            EducationLevel::Master => 2,
            EducationLevel::Phd => 3,
        }
    }

    pub fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(EducationLevel::None),
            1 => Some(EducationLevel::Bachelor),
            2 => Some(EducationLevel::Master),
            3 => Some(EducationLevel::Phd),
            _ => None,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::None => "none",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Phd => "phd",
        };
        f.write_str(label)
    }
}

/// A dated role found in free text, e.g. "Jan 2020 - Present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub start: String,
    pub end: String,
    /// Up to 200 characters either side of the date range.
    pub context: String,
    /// None when either endpoint could not be read as a date.
    pub span_years: Option<f64>,
}

/// Structured view of a résumé or a job description.
///
/// For a job description the fields are requirements: `skills` are required
/// skills, `experience_years` the required years, `education_level` the
/// minimum degree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub text: String,
    pub skills: BTreeSet<String>,
    pub experience_years: f64,
    pub education_level: EducationLevel,
    pub experience_entries: Vec<ExperienceEntry>,
    pub degrees: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_levels_are_ordered() {
        assert!(EducationLevel::None < EducationLevel::Bachelor);
        assert!(EducationLevel::Bachelor < EducationLevel::Master);
        assert!(EducationLevel::Master < EducationLevel::Phd);
    }

    #[test]
    fn test_ordinal_roundtrip_bounds() {
        assert_eq!(EducationLevel::from_ordinal(2), Some(EducationLevel::Master));
        assert_eq!(EducationLevel::Phd.ordinal(), 3);
        assert_eq!(EducationLevel::from_ordinal(4), None);
    }

    #[test]
    fn test_education_level_serde_snake_case() {
        let json = serde_json::to_string(&EducationLevel::Phd).unwrap();
        assert_eq!(json, r#""phd""#);
        let level: EducationLevel = serde_json::from_str(r#""bachelor""#).unwrap();
        assert_eq!(level, EducationLevel::Bachelor);
    }

    #[test]
    fn test_default_profile_is_empty() {
        let profile = ExtractedProfile::default();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, 0.0);
        assert_eq!(profile.education_level, EducationLevel::None);
    }
}
