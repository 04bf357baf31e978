//! Wrap Profile - everything a card needs.
//!
//! Serialized as camelCase JSON so stored sessions stay readable and any
//! missing key falls back to its default.

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};

use super::period::{deserialize_month, PeriodSelection, PeriodType};
use super::personality::Personality;
use super::selection::Selection;

/// The complete set of fields a wrap card is rendered from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WrapProfile {
    pub period_type: PeriodType,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_month")]
    pub month: Option<u8>,

    #[serde(deserialize_with = "deserialize_count")]
    pub lines_of_code: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub commits: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub coffees_consumed: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub hours_coded: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub bugs_fixed: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub projects_shipped: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub hours_in_meetings: u64,
    pub programmer_buddy: String,

    #[serde(rename = "mostUsedIDE")]
    pub most_used_ide: String,
    pub most_used_languages: Selection,
    pub most_used_apps: Selection,

    pub role: String,
    pub company_name: String,
    pub developer_name: String,

    pub personality: Personality,

    /// Selected template URL
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_non_empty")]
    pub background_image: Option<String>,
    /// User-uploaded image as a data URI
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_non_empty")]
    pub custom_bg_image: Option<String>,
}

impl Default for WrapProfile {
    fn default() -> Self {
        Self {
            period_type: PeriodType::Yearly,
            year: chrono::Local::now().year(),
            month: None,
            lines_of_code: 30000,
            commits: 100,
            coffees_consumed: 400,
            hours_coded: 1000,
            bugs_fixed: 150,
            projects_shipped: 7,
            hours_in_meetings: 40,
            programmer_buddy: "Copilot".to_string(),
            most_used_ide: "VS Code".to_string(),
            most_used_languages: Selection::from_names(["JavaScript", "Python", "TypeScript"]),
            most_used_apps: Selection::from_names(["VS Code", "Slack", "GitHub"]),
            role: "Sr. SDE".to_string(),
            company_name: "TechCorp".to_string(),
            developer_name: String::new(),
            personality: Personality::default(),
            background_image: None,
            custom_bg_image: None,
        }
    }
}

impl WrapProfile {
    /// Defaults with the period fields taken from a landing-step selection
    pub fn with_period(period: PeriodSelection) -> Self {
        let mut profile = Self::default();
        profile.apply_period(period);
        profile
    }

    /// Overwrite period type, year and month
    pub fn apply_period(&mut self, period: PeriodSelection) {
        self.period_type = period.period_type;
        self.year = period.year;
        self.month = match period.period_type {
            PeriodType::Monthly => period.month,
            PeriodType::Yearly => None,
        };
    }

    /// Month, only when the profile is monthly
    pub fn effective_month(&self) -> Option<u8> {
        match self.period_type {
            PeriodType::Monthly => self.month,
            PeriodType::Yearly => None,
        }
    }

    /// Human period label: `"March 2024"` or `"2024"`
    pub fn period_label(&self) -> String {
        match self.effective_month().and_then(super::month_name) {
            Some(name) => format!("{} {}", name, self.year),
            None => self.year.to_string(),
        }
    }

    /// File-name period: `"2024-03"` or `"2024"`
    pub fn period_slug(&self) -> String {
        match self.effective_month() {
            Some(month) => format!("{}-{:02}", self.year, month),
            None => self.year.to_string(),
        }
    }
}

/// Coerce free-form numeric input to a non-negative count.
///
/// Negative, empty and non-numeric input yields 0; fractions are truncated.
pub fn parse_count(input: &str) -> u64 {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return n;
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        _ => 0,
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| parse_count(&f.to_string())))
            .unwrap_or(0),
        serde_json::Value::String(s) => parse_count(&s),
        _ => 0,
    })
}

/// Blank background references (empty or whitespace only) mean "none"
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(non_blank)
}
