//! Skill and degree vocabularies used by the attribute extractor.

use crate::models::EducationLevel;

/// Known skills grouped by category. Terms are lowercase.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "go", "rust", "scala",
            "kotlin", "swift", "php", "ruby", "r", "matlab", "perl",
        ],
    ),
    (
        "web",
        &[
            "react", "angular", "vue", "node.js", "express", "django", "flask", "fastapi",
            "spring", "asp.net", "html", "css", "sass", "webpack", "next.js",
        ],
    ),
    (
        "database",
        &[
            "sql", "mysql", "postgresql", "mongodb", "redis", "cassandra", "dynamodb", "oracle",
            "sqlite", "elasticsearch",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
            "ci/cd", "devops",
        ],
    ),
    (
        "data",
        &[
            "machine learning", "deep learning", "ai", "data science", "tensorflow", "pytorch",
            "pandas", "numpy", "scikit-learn", "spark", "hadoop", "kafka",
        ],
    ),
    (
        "tools",
        &[
            "git", "jira", "confluence", "linux", "bash", "powershell", "vim", "vscode",
            "intellij",
        ],
    ),
];

/// Degree keywords by level, highest level first. The first level that matches wins.
pub const DEGREE_LEVELS: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "ph.d", "doctorate", "doctoral"]),
    (
        EducationLevel::Master,
        &["master", "masters", "mba", "m.s", "m.tech", "m.e", "m.sc"],
    ),
    (
        EducationLevel::Bachelor,
        &["bachelor", "bachelors", "b.s", "b.tech", "b.e", "b.sc", "undergraduate"],
    ),
];

/// All skill terms, flattened in category order.
pub fn all_skills() -> Vec<&'static str> {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, skills)| skills.iter().copied())
        .collect()
}
