//! Profile parsing: turns a résumé PDF or a job description into an `ExtractedProfile`.

use tracing::info;

use crate::errors::ExtractionError;
use crate::extraction::attributes::AttributeExtractor;
use crate::extraction::pdf::PdfTextExtractor;
use crate::models::ExtractedProfile;

#[derive(Debug, Clone)]
pub struct ProfileParser {
    pdf: PdfTextExtractor,
    attributes: AttributeExtractor,
}

impl ProfileParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pdf: PdfTextExtractor::new(),
            attributes: AttributeExtractor::new()?,
        })
    }

    pub fn attributes(&self) -> &AttributeExtractor {
        &self.attributes
    }

    /// Candidate profile from PDF bytes. Any extraction error is terminal for this document.
    pub fn parse_resume(&self, bytes: &[u8]) -> Result<ExtractedProfile, ExtractionError> {
        let text = self.pdf.extract(bytes)?;
        self.parse_resume_text(&text)
    }

    /// Candidate profile from already-extracted text.
    pub fn parse_resume_text(&self, text: &str) -> Result<ExtractedProfile, ExtractionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::NoText);
        }

        let a = &self.attributes;
        let profile = ExtractedProfile {
            text: text.to_string(),
            skills: a.extract_skills(text),
            experience_years: a.extract_experience_years(text),
            education_level: a.extract_education(text),
            experience_entries: a.extract_experience_entries(text),
            degrees: a.extract_degrees(text),
        };

        info!(
            "Parsed resume: {} chars, {} skills, {} years, education={}",
            profile.text.len(),
            profile.skills.len(),
            profile.experience_years,
            profile.education_level
        );
        Ok(profile)
    }

    /// Requirement profile from a job description. Never fails: an empty
    /// description yields an empty profile, which scores through the documented fallbacks.
    pub fn parse_job(&self, description: &str) -> ExtractedProfile {
        let a = &self.attributes;
        ExtractedProfile {
            text: description.to_string(),
            skills: a.extract_skills(description),
            experience_years: a.extract_experience_years(description),
            education_level: a.extract_education(description),
            experience_entries: Vec::new(),
            degrees: a.extract_degrees(description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationLevel;

    const RESUME: &str = r#"
        Jane Doe — Backend Engineer
        6 years of experience building Rust and Python services on AWS with Docker.
        Acme Cloud, Senior Engineer, 2019 - Present.
        M.Sc. in Computer Science; B.Tech in Electronics.
    "#;

    const JOB: &str = r#"
        Senior Backend Engineer
        Requirements: 5+ years experience, Rust, Kubernetes, PostgreSQL.
        Bachelor's degree in CS or equivalent.
    "#;

    #[test]
    fn test_resume_text_profile() {
        let parser = ProfileParser::new().unwrap();
        let profile = parser.parse_resume_text(RESUME).unwrap();
        for skill in ["rust", "python", "aws", "docker"] {
            assert!(profile.skills.contains(skill), "Missing {skill}");
        }
        assert_eq!(profile.experience_years, 6.0);
        assert_eq!(profile.education_level, EducationLevel::Master);
        assert_eq!(profile.experience_entries.len(), 1);
        assert!(profile.degrees.contains("m.sc"));
        assert!(profile.degrees.contains("b.tech"));
    }

    #[test]
    fn test_blank_resume_text_is_no_text() {
        let parser = ProfileParser::new().unwrap();
        assert_eq!(
            parser.parse_resume_text("   \n ").unwrap_err(),
            ExtractionError::NoText
        );
    }

    #[test]
    fn test_resume_bytes_must_be_pdf() {
        let parser = ProfileParser::new().unwrap();
        assert_eq!(
            parser.parse_resume(RESUME.as_bytes()).unwrap_err(),
            ExtractionError::NotPdf
        );
    }

    #[test]
    fn test_job_requirements() {
        let parser = ProfileParser::new().unwrap();
        let job = parser.parse_job(JOB);
        for skill in ["rust", "kubernetes", "postgresql"] {
            assert!(job.skills.contains(skill), "Missing {skill}");
        }
        assert_eq!(job.experience_years, 5.0);
        assert_eq!(job.education_level, EducationLevel::Bachelor);
        assert!(job.experience_entries.is_empty());
    }

    #[test]
    fn test_empty_job_is_empty_profile() {
        let parser = ProfileParser::new().unwrap();
        let job = parser.parse_job("");
        assert!(job.skills.is_empty());
        assert_eq!(job.experience_years, 0.0);
        assert_eq!(job.education_level, EducationLevel::None);
    }
}
