pub mod breakdown;
pub mod profile;

pub use breakdown::{Domain, KeywordMatch, MatchBreakdown};
pub use profile::{EducationLevel, ExperienceEntry, ExtractedProfile};
