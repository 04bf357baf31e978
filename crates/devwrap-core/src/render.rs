//! Card renderer: `WrapProfile -> CardView`.
//!
//! The view is plain data. The desktop app turns it into elements, the
//! exporter turns it into SVG; neither re-derives any presentation rule.

use std::time::Duration;

use crate::counter::CounterAnimation;
use crate::icons::{AppIcon, LanguageIcon, StatGlyph};
use crate::theme::{lookup, resolve_background, ThemeConfig};
use crate::types::{month_name, Personality, WrapProfile};

/// Headline above the wordmark
pub const CARD_TITLE: &str = "SOFTWARE ENGINEER";
/// Wordmark next to the year
pub const CARD_WORDMARK: &str = "WRAP";
/// Shown under the wordmark for yearly wraps
pub const YEARLY_TAGLINE: &str = "Code, Coffee, and Deploys";
/// Icons shown per strip
pub const STRIP_LIMIT: usize = 3;

/// Line under the wordmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodLabel {
    /// Full month name, e.g. `"March"`
    Month(&'static str),
    Tagline(&'static str),
}

impl PeriodLabel {
    pub fn text(&self) -> &'static str {
        match self {
            PeriodLabel::Month(name) | PeriodLabel::Tagline(name) => name,
        }
    }
}

/// Card header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHeader {
    pub title: &'static str,
    pub wordmark: &'static str,
    pub year: i32,
    pub period: PeriodLabel,
}

/// Value part of a stat cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    /// Animated count
    Count { target: u64, suffix: &'static str },
    /// Plain text (the programmer buddy)
    Text(String),
}

impl StatValue {
    /// Text of the settled (final) frame
    pub fn final_text(&self) -> String {
        match self {
            StatValue::Count { target, suffix } => {
                CounterAnimation::new(*target).with_suffix(*suffix).final_text()
            }
            StatValue::Text(text) => text.clone(),
        }
    }

    /// Animation for count cells
    pub fn animation(&self, duration: Duration) -> Option<CounterAnimation> {
        match self {
            StatValue::Count { target, suffix } => Some(
                CounterAnimation::new(*target)
                    .with_duration(duration)
                    .with_suffix(*suffix),
            ),
            StatValue::Text(_) => None,
        }
    }
}

/// One cell of the stat grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub glyph: StatGlyph,
    pub label: &'static str,
    pub value: StatValue,
}

/// A named icon in the apps or languages strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconItem {
    pub name: String,
    pub icon_url: String,
}

/// Row of icons with a caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStrip {
    pub caption: &'static str,
    pub items: Vec<IconItem>,
}

/// Card footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFooter {
    pub developer_name: String,
    pub role: String,
    pub company: String,
    pub theme_name: &'static str,
    pub personality: Personality,
}

/// Everything needed to draw one wrap card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub personality: Personality,
    pub theme: &'static ThemeConfig,
    pub background: String,
    pub header: CardHeader,
    pub stats: Vec<StatCell>,
    pub apps: IconStrip,
    pub languages: IconStrip,
    pub footer: CardFooter,
}

/// Build the card for `profile`. Pure and idempotent.
pub fn render(profile: &WrapProfile) -> CardView {
    let theme = lookup(profile.personality);

    let period = match profile.effective_month().and_then(month_name) {
        Some(name) => PeriodLabel::Month(name),
        None => PeriodLabel::Tagline(YEARLY_TAGLINE),
    };

    let count = |glyph: StatGlyph, label: &'static str, target: u64, suffix: &'static str| StatCell {
        glyph,
        label,
        value: StatValue::Count { target, suffix },
    };

    let stats = vec![
        count(StatGlyph::Code, "LINES OF CODE", profile.lines_of_code, ""),
        count(StatGlyph::Commit, "COMMITS", profile.commits, ""),
        count(StatGlyph::Coffee, "COFFEES CONSUMED", profile.coffees_consumed, "+"),
        count(StatGlyph::Clock, "HOURS CODED", profile.hours_coded, ""),
        count(StatGlyph::Bug, "BUGS FIXED", profile.bugs_fixed, "+"),
        count(StatGlyph::Rocket, "PROJECTS SHIPPED", profile.projects_shipped, ""),
        count(StatGlyph::Video, "HOURS IN MEETINGS", profile.hours_in_meetings, ""),
        StatCell {
            glyph: StatGlyph::Bot,
            label: "PROGRAMMER BUDDY",
            value: StatValue::Text(profile.programmer_buddy.clone()),
        },
    ];

    let apps = IconStrip {
        caption: "MOST USED APPS",
        items: profile
            .most_used_apps
            .iter()
            .take(STRIP_LIMIT)
            .map(|name| IconItem {
                name: name.to_string(),
                icon_url: AppIcon::from_name(name).url(),
            })
            .collect(),
    };

    let languages = IconStrip {
        caption: "MOST USED LANGUAGES",
        items: profile
            .most_used_languages
            .iter()
            .take(STRIP_LIMIT)
            .map(|name| IconItem {
                name: name.to_string(),
                icon_url: LanguageIcon::from_name(name).url(),
            })
            .collect(),
    };

    CardView {
        personality: profile.personality,
        theme,
        background: resolve_background(profile).to_string(),
        header: CardHeader {
            title: CARD_TITLE,
            wordmark: CARD_WORDMARK,
            year: profile.year,
            period,
        },
        stats,
        apps,
        languages,
        footer: CardFooter {
            developer_name: profile.developer_name.clone(),
            role: profile.role.clone(),
            company: profile.company_name.clone(),
            theme_name: theme.name,
            personality: profile.personality,
        },
    }
}

impl CardView {
    /// Every remote or inline image the card references, background first
    pub fn resource_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.background.as_str()];
        urls.extend(self.apps.items.iter().map(|i| i.icon_url.as_str()));
        urls.extend(self.languages.items.iter().map(|i| i.icon_url.as_str()));
        urls.sort_unstable();
        urls.dedup();
        urls
    }

    /// Stat cell by label
    pub fn stat(&self, label: &str) -> Option<&StatCell> {
        self.stats.iter().find(|c| c.label == label)
    }
}
