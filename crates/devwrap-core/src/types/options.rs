//! Choices offered by the form front ends.

pub const IDE_OPTIONS: &[&str] = &[
    "VS Code",
    "IntelliJ IDEA",
    "WebStorm",
    "PyCharm",
    "Vim",
    "Neovim",
    "Sublime Text",
    "Atom",
    "Eclipse",
    "Xcode",
    "Android Studio",
];

pub const LANGUAGE_OPTIONS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "Go",
    "Rust",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
];

pub const APP_OPTIONS: &[&str] = &[
    "VS Code", "Slack", "GitHub", "GitLab", "Jira", "Notion", "Figma", "Discord", "Teams",
    "Terminal", "Docker", "Postman",
];

pub const ROLE_OPTIONS: &[&str] = &[
    "Jr. SDE",
    "SDE",
    "Sr. SDE",
    "Staff Engineer",
    "Principal Engineer",
    "Tech Lead",
    "Engineering Manager",
    "Intern",
    "Freelancer",
    "Founder",
];

pub const BUDDY_OPTIONS: &[&str] = &["Copilot", "ChatGPT", "Claude", "Gemini", "Stack Overflow", "None"];
