//! Icon lookup for languages, apps and stat cells.
//!
//! Names come from free text, so each lookup is a closed enum with an
//! explicit `Other` arm instead of a string-keyed table.

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Icon used for any name the tables do not know
pub const FALLBACK_ICON: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/devicon/devicon-original.svg";

fn devicon(slug: &str) -> String {
    format!("{DEVICON}/{slug}/{slug}-original.svg")
}

/// Programming languages with a known icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageIcon {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Go,
    Rust,
    Cpp,
    CSharp,
    Ruby,
    Php,
    Swift,
    Kotlin,
    Other,
}

impl LanguageIcon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "JavaScript" => Self::JavaScript,
            "TypeScript" => Self::TypeScript,
            "Python" => Self::Python,
            "Java" => Self::Java,
            "Go" => Self::Go,
            "Rust" => Self::Rust,
            "C++" => Self::Cpp,
            "C#" => Self::CSharp,
            "Ruby" => Self::Ruby,
            "PHP" => Self::Php,
            "Swift" => Self::Swift,
            "Kotlin" => Self::Kotlin,
            _ => Self::Other,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Self::JavaScript => devicon("javascript"),
            Self::TypeScript => devicon("typescript"),
            Self::Python => devicon("python"),
            Self::Java => devicon("java"),
            Self::Go => devicon("go"),
            Self::Rust => devicon("rust"),
            Self::Cpp => devicon("cplusplus"),
            Self::CSharp => devicon("csharp"),
            Self::Ruby => devicon("ruby"),
            Self::Php => devicon("php"),
            Self::Swift => devicon("swift"),
            Self::Kotlin => devicon("kotlin"),
            Self::Other => FALLBACK_ICON.to_string(),
        }
    }
}

/// Everyday developer apps with a known icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppIcon {
    VsCode,
    Slack,
    GitHub,
    GitLab,
    Jira,
    Notion,
    Figma,
    Discord,
    Teams,
    Terminal,
    Docker,
    Postman,
    Other,
}

impl AppIcon {
    pub fn from_name(name: &str) -> Self {
        match name {
            "VS Code" => Self::VsCode,
            "Slack" => Self::Slack,
            "GitHub" => Self::GitHub,
            "GitLab" => Self::GitLab,
            "Jira" => Self::Jira,
            "Notion" => Self::Notion,
            "Figma" => Self::Figma,
            "Discord" => Self::Discord,
            "Teams" => Self::Teams,
            "Terminal" => Self::Terminal,
            "Docker" => Self::Docker,
            "Postman" => Self::Postman,
            _ => Self::Other,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Self::VsCode => devicon("vscode"),
            Self::Slack => devicon("slack"),
            Self::GitHub => devicon("github"),
            Self::GitLab => devicon("gitlab"),
            Self::Jira => devicon("jira"),
            Self::Notion => devicon("notion"),
            Self::Figma => devicon("figma"),
            Self::Discord => devicon("discord"),
            Self::Teams => "https://www.svgrepo.com/show/373952/teams.svg".to_string(),
            Self::Terminal => devicon("bash"),
            Self::Docker => devicon("docker"),
            Self::Postman => devicon("postman"),
            Self::Other => FALLBACK_ICON.to_string(),
        }
    }
}

/// Glyph drawn next to each stat label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatGlyph {
    Code,
    Commit,
    Coffee,
    Clock,
    Bug,
    Rocket,
    Video,
    Bot,
}

impl StatGlyph {
    /// Text glyph; renders without an icon font
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Commit => "-o-",
            Self::Coffee => "☕",
            Self::Clock => "⏱",
            Self::Bug => "🐛",
            Self::Rocket => "🚀",
            Self::Video => "🎥",
            Self::Bot => "🤖",
        }
    }
}
