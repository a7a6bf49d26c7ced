//! Curated keyword vocabularies and normalization tables.
//!
//! Vocabulary terms are lowercase. Dashes in matched text are turned into
//! spaces, so synonym entries spell dashed terms with a space.

/// Soft skills and office keywords for roles outside engineering and product/marketing.
pub const GENERAL_KEYWORDS: &[&str] = &[
    "communication",
    "communicate",
    "leadership",
    "lead",
    "teamwork",
    "collaboration",
    "collaborate",
    "problem solving",
    "troubleshooting",
    "customer service",
    "customer support",
    "microsoft office",
    "microsoft excel",
    "excel",
    "powerpoint",
    "project management",
    "time management",
    "organize",
    "detail oriented",
    "detail-oriented",
    "analytical",
    "analysis",
    "research",
    "writing",
    "presentation",
    "budget",
    "scheduling",
    "training",
    "sales",
    "negotiation",
    "strategy",
    "strategic",
    "planning",
    "reporting",
    "data entry",
    "bilingual",
    "spanish",
    "manage",
    "operations",
    "compliance",
    "documentation",
    "multitasking",
    "mentor",
    "coordinate",
];

/// Core engineering keywords; weighted 5x against nice-to-haves.
pub const SWE_ESSENTIALS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "js",
    "typescript",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "scala",
    "kotlin",
    "swift",
    "sql",
    "react",
    "angular",
    "vue",
    "node.js",
    "nodejs",
    "django",
    "flask",
    "spring",
    "aws",
    "amazon web services",
    "azure",
    "gcp",
    "google cloud",
    "docker",
    "kubernetes",
    "k8s",
    "linux",
    "git",
    "rest",
    "restful",
    "graphql",
    "html",
    "css",
    "postgresql",
    "postgres",
    "mysql",
    "mongodb",
    "redis",
    "machine learning",
    "ml",
    "artificial intelligence",
    "tensorflow",
    "pytorch",
    "spark",
    "kafka",
    "microservices",
    "distributed systems",
    "data structures",
    "algorithms",
    "object oriented",
    "object-oriented",
    "oop",
    "api",
    "terraform",
    "ci/cd",
    "continuous integration",
    "continuous delivery",
    "software engineer",
    "backend",
    "frontend",
    "front end",
    "front-end",
    "back end",
    "back-end",
    "full stack",
    "full-stack",
];

/// Engineering keywords that help but are not essential.
pub const SWE_NICE_TO_HAVES: &[&str] = &[
    "agile",
    "scrum",
    "jira",
    "testing",
    "unit test",
    "tdd",
    "debugging",
    "jenkins",
    "ansible",
    "elasticsearch",
    "hadoop",
    "nosql",
    "dynamodb",
    "cassandra",
    "webpack",
    "redux",
    "next.js",
    "express",
    "fastapi",
    "pandas",
    "numpy",
    "scikit-learn",
    "sklearn",
    "deep learning",
    "nlp",
    "natural language processing",
    "computer vision",
    "design patterns",
    "code review",
    "mentor",
    "communication",
    "collaboration",
    "leadership",
    "problem solving",
    "troubleshooting",
    "security",
    "performance",
    "scalability",
    "cloud",
    "devops",
    "bash",
    "shell",
    "unix",
    "networking",
    "concurrency",
    "multithreading",
    "engineering",
];

/// Product management and marketing keywords.
pub const PM_MARKETING_KEYWORDS: &[&str] = &[
    "product management",
    "product manager",
    "product owner",
    "product roadmap",
    "roadmap",
    "user research",
    "market research",
    "a/b testing",
    "split testing",
    "analytics",
    "google analytics",
    "seo",
    "search engine optimization",
    "sem",
    "ppc",
    "content marketing",
    "email marketing",
    "social media",
    "campaign",
    "brand",
    "branding",
    "copywriting",
    "crm",
    "salesforce",
    "hubspot",
    "kpi",
    "okr",
    "stakeholder",
    "go-to-market",
    "launch",
    "pricing",
    "positioning",
    "segmentation",
    "competitive analysis",
    "agile",
    "scrum",
    "jira",
    "sql",
    "excel",
    "microsoft excel",
    "tableau",
    "strategy",
    "strategic",
    "communication",
    "leadership",
    "collaboration",
    "cross-functional",
    "prioritization",
    "user experience",
    "ux",
    "wireframe",
    "figma",
    "customer journey",
    "conversion",
    "retention",
    "growth",
    "budget",
];

/// Interchangeable terms. Groups must be pairwise disjoint for folding to stay idempotent.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &["javascript", "js"],
    &["node.js", "nodejs"],
    &["postgresql", "postgres"],
    &["kubernetes", "k8s"],
    &["machine learning", "ml"],
    &["aws", "amazon web services"],
    &["gcp", "google cloud"],
    &["ci/cd", "continuous integration", "continuous delivery"],
    &["rest", "restful"],
    &["object oriented", "oop"],
    &["frontend", "front end"],
    &["backend", "back end"],
    &["scikit learn", "sklearn"],
    &["nlp", "natural language processing"],
    &["product manager", "product owner"],
    &["a/b testing", "split testing"],
    &["seo", "search engine optimization"],
    &["ux", "user experience"],
    &["excel", "microsoft excel"],
    &["customer service", "customer support"],
    &["problem solving", "troubleshooting"],
    &["collaboration", "teamwork"],
];

/// Word stems folded together after synonym folding, in priority order.
pub const WORD_PREFIXES: &[&str] = &[
    "communicat",
    "strateg",
    "project manage",
    "product manage",
    "engineer",
    "collaborat",
    "machine learning",
];
