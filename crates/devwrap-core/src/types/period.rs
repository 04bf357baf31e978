//! Wrap periods: a whole year or a single month.

use chrono::{Datelike, Month};
use serde::{Deserialize, Deserializer, Serialize};

/// Timeframe the statistics describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Yearly,
    Monthly,
}

/// Lightweight period choice written by the landing step.
///
/// Stored under its own session key so the form can pick it up without a
/// full profile existing yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSelection {
    pub period_type: PeriodType,
    pub year: i32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_month"
    )]
    pub month: Option<u8>,
}

impl PeriodSelection {
    /// Whole-year period
    pub fn yearly(year: i32) -> Self {
        Self {
            period_type: PeriodType::Yearly,
            year,
            month: None,
        }
    }

    /// Single-month period. Months outside 1..=12 are dropped.
    pub fn monthly(year: i32, month: u8) -> Self {
        Self {
            period_type: PeriodType::Monthly,
            year,
            month: valid_month(month),
        }
    }
}

impl Default for PeriodSelection {
    fn default() -> Self {
        Self::yearly(chrono::Local::now().year())
    }
}

/// Full English month name for 1..=12
pub fn month_name(month: u8) -> Option<&'static str> {
    Month::try_from(month).ok().map(|m| m.name())
}

pub(crate) fn valid_month(month: u8) -> Option<u8> {
    (1..=12).contains(&month).then_some(month)
}

/// Accepts a number, a numeric string or null; anything outside 1..=12 is
/// treated as "no month".
pub(crate) fn deserialize_month<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let month = match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(month
        .and_then(|m| u8::try_from(m).ok())
        .and_then(valid_month))
}
