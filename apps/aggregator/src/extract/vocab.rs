//! Static vocabularies driving title and skill extraction. These lists are
//! curation, not code: expanding them changes recall, nothing else.

/// Base technical-skills vocabulary. Matched with word boundaries; symbol-heavy
/// names that defeat boundary matching are also covered by [`CRITICAL_SKILLS`].
pub const TECH_SKILLS: &[&str] = &[
    "python", "java", "javascript", "js", "typescript", "ts", "c++", "c#", "ruby", "php",
    "swift", "kotlin", "go", "rust", "scala", "dart", "perl", "r", "matlab", "sql",
    "nosql", "mongodb", "postgresql", "mysql", "oracle", "sql server", "cassandra", "redis",
    "elasticsearch", "dynamodb", "firebase", "aws", "azure", "gcp", "google cloud", "docker",
    "kubernetes", "k8s", "jenkins", "gitlab", "github", "bitbucket", "terraform", "ansible",
    "puppet", "chef", "react", "angular", "vue", "nextjs", "nodejs", "express", "django",
    "flask", "spring", "laravel", "rails", "asp.net", "html", "css", "sass", "less",
    "bootstrap", "tailwind", "jquery", "redux", "graphql", "rest", "soap", "oauth", "jwt",
    "machine learning", "ml", "artificial intelligence", "ai", "deep learning", "dl",
    "natural language processing", "nlp", "computer vision", "cv", "data science", "big data",
    "hadoop", "spark", "kafka", "tableau", "power bi", "looker", "qlik", "excel", "vba",
    "linux", "unix", "windows", "macos", "ios", "android", "flutter", "react native",
    "xamarin", "cordova", "unity", "unreal", "blender", "maya", "photoshop", "illustrator",
    "figma", "sketch", "adobe xd", "ui", "ux", "agile", "scrum", "kanban", "jira",
    "confluence", "trello", "slack", "teams", "zoom", "git", "svn", "mercurial", "cicd",
    "devops", "sre", "security", "penetration testing", "pen testing", "ethical hacking",
    "cybersecurity", "blockchain", "ethereum", "solidity", "smart contracts", "crypto",
    "cryptocurrency", "nft", "web3", "serverless", "microservices", "soa", "apigateway",
    "tensorflow", "pytorch", "opencv", "pandas", "numpy", "scikit-learn", "keras",
    "snowflake", "databricks", "prometheus", "grafana", "datadog", "splunk",
];

/// Phrases that mark surrounding text as a skill context. A vocabulary or
/// entity match within ±75 characters of one of these earns extra confidence.
pub const SKILL_INDICATORS: &[&str] = &[
    "experience", "skill", "knowledge", "proficiency", "familiar", "working with",
    "expertise", "proficient", "competent", "trained in", "certified", "background in",
    "understanding of", "ability to use", "ability to work with", "hands-on", "exposure to",
];

/// Generic nouns that are never skills on their own and disqualify entity
/// candidates that contain them.
pub const GENERIC_TERMS: &[&str] = &[
    "software", "programming", "language", "framework", "library", "platform", "tool",
    "environment", "development", "engineer", "engineering", "solution", "system", "quality",
    "knowledge", "experience", "proficiency", "familiar", "ability", "skill", "expertise",
    "proficient", "competent", "trained", "certified", "background", "understanding",
    "hands-on", "exposure", "working", "with", "using", "utilize", "implementation",
    "developing", "designing", "building", "creating", "writing", "coding", "implementing",
    "supporting", "maintaining", "troubleshooting", "debugging", "testing", "deploying",
    "managing", "leading", "directing", "coordinating", "organizing",
];

/// Entity spans that name org structure rather than technology.
pub const ENTITY_DENYLIST: &[&str] = &[
    "company", "organization", "team", "staff", "employee", "employer",
];

/// Known false positives that survive the other filters: scrape sources,
/// legal suffixes, and non-technical posting boilerplate.
pub const FALSE_POSITIVES: &[&str] = &[
    "linkedin", "glassdoor", "indeed", "inc", "llc", "intern", "internship",
    "communication", "communications", "benefits", "equal opportunity",
];

/// High-value skills force-matched by plain substring search. Boundary-based
/// regex matching is unreliable for names ending in symbols, so these are
/// checked directly and admitted at top confidence.
pub const CRITICAL_SKILLS: &[&str] = &[
    "c++", "c#", ".net", "asp.net", "node.js", "vue.js", "react.js", "typescript",
    "javascript", "python", "java", "golang", "ruby", "tensorflow", "pytorch", "opencv",
    "docker", "kubernetes", "aws", "azure", "gcp", "sql", "nosql", "mongodb", "postgresql",
];

/// Spelling variants of the symbol-heavy critical skills.
pub const CRITICAL_VARIANTS: &[(&str, &[&str])] = &[
    ("c++", &["c plus plus", "cplusplus", "c-plus-plus"]),
    ("c#", &["c sharp", "csharp", "c-sharp"]),
    ("node.js", &["node js", "nodejs"]),
    ("vue.js", &["vue js", "vuejs"]),
    ("react.js", &["react js", "reactjs"]),
];

/// Abbreviation and variant spellings mapped to canonical skill names.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("k8s", "kubernetes"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("dl", "deep learning"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("react.js", "react"),
    ("reactjs", "react"),
    ("vue.js", "vue"),
    ("node.js", "nodejs"),
    ("golang", "go"),
    ("dotnet", ".net"),
    ("postgres", "postgresql"),
    ("aws cloud", "aws"),
    ("amazon web services", "aws"),
    ("microsoft azure", "azure"),
    ("google cloud platform", "gcp"),
    ("c plus plus", "c++"),
    ("cplusplus", "c++"),
    ("c-plus-plus", "c++"),
    ("c sharp", "c#"),
    ("csharp", "c#"),
    ("c-sharp", "c#"),
    ("objective c", "objective-c"),
];

/// Words marking a short phrase from a skills section as technical.
pub const TECH_MARKERS: &[&str] = &["framework", "language", "stack", "api", "sdk", "library"];

/// Stopwords left lowercase during title-casing of fallback role names.
pub const TITLE_STOPWORDS: &[&str] = &["and", "or", "the", "in", "on", "at", "for"];

/// Parenthetical suffixes kept during title standardization; everything else
/// in parentheses is stripped.
pub const DEPARTMENT_WHITELIST: &[&str] = &["orion", "starlink", "components"];
