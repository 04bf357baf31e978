//! Form state store: the in-progress profile and its edit events.

use crate::error::StorageError;
use crate::storage::SessionStore;
use crate::types::{
    non_blank, parse_count, PeriodSelection, PeriodType, Personality, WrapProfile,
};

/// The seven numeric stats a user types in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    LinesOfCode,
    Commits,
    CoffeesConsumed,
    HoursCoded,
    BugsFixed,
    ProjectsShipped,
    HoursInMeetings,
}

impl StatField {
    pub const ALL: [StatField; 7] = [
        StatField::LinesOfCode,
        StatField::Commits,
        StatField::CoffeesConsumed,
        StatField::HoursCoded,
        StatField::BugsFixed,
        StatField::ProjectsShipped,
        StatField::HoursInMeetings,
    ];

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            StatField::LinesOfCode => "Lines of Code",
            StatField::Commits => "Commits",
            StatField::CoffeesConsumed => "Coffees Consumed",
            StatField::HoursCoded => "Hours Coded",
            StatField::BugsFixed => "Bugs Fixed",
            StatField::ProjectsShipped => "Projects Shipped",
            StatField::HoursInMeetings => "Hours in Meetings",
        }
    }

    pub fn get(&self, profile: &WrapProfile) -> u64 {
        match self {
            StatField::LinesOfCode => profile.lines_of_code,
            StatField::Commits => profile.commits,
            StatField::CoffeesConsumed => profile.coffees_consumed,
            StatField::HoursCoded => profile.hours_coded,
            StatField::BugsFixed => profile.bugs_fixed,
            StatField::ProjectsShipped => profile.projects_shipped,
            StatField::HoursInMeetings => profile.hours_in_meetings,
        }
    }

    fn slot<'a>(&self, profile: &'a mut WrapProfile) -> &'a mut u64 {
        match self {
            StatField::LinesOfCode => &mut profile.lines_of_code,
            StatField::Commits => &mut profile.commits,
            StatField::CoffeesConsumed => &mut profile.coffees_consumed,
            StatField::HoursCoded => &mut profile.hours_coded,
            StatField::BugsFixed => &mut profile.bugs_fixed,
            StatField::ProjectsShipped => &mut profile.projects_shipped,
            StatField::HoursInMeetings => &mut profile.hours_in_meetings,
        }
    }
}

/// A single discrete edit coming from the form
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    PeriodType(PeriodType),
    Year(i32),
    Month(Option<u8>),
    /// Raw text from a numeric input; coerced to a non-negative count
    Stat(StatField, String),
    Buddy(String),
    Ide(String),
    Role(String),
    Company(String),
    DeveloperName(String),
    /// Switching personality also drops the selected template
    Personality(Personality),
    Template(Option<String>),
    CustomImage(Option<String>),
    /// "Use default": drop both template and custom image
    ClearBackground,
}

/// Result of toggling a multi-select entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection already holds the maximum; nothing changed
    Full,
}

/// Holds and mutates one [`WrapProfile`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore {
    profile: WrapProfile,
}

impl FormStore {
    pub fn new(profile: WrapProfile) -> Self {
        Self { profile }
    }

    /// Initial form state.
    ///
    /// Prefers a previously submitted profile (user came back to edit), then
    /// the landing step's period merged into defaults, then plain defaults.
    /// Unreadable stored data is skipped silently.
    pub fn load(store: &(impl SessionStore + ?Sized)) -> Self {
        if let Some(profile) = store.load_profile() {
            tracing::debug!("Form resumed from stored profile");
            return Self::new(profile);
        }
        match store.load_period() {
            Some(period) => {
                tracing::debug!(?period, "Form seeded from period selection");
                Self::new(WrapProfile::with_period(period))
            }
            None => Self::default(),
        }
    }

    pub fn profile(&self) -> &WrapProfile {
        &self.profile
    }

    pub fn into_profile(self) -> WrapProfile {
        self.profile
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        let p = &mut self.profile;
        match update {
            FieldUpdate::PeriodType(period_type) => p.period_type = period_type,
            FieldUpdate::Year(year) => p.year = year,
            FieldUpdate::Month(month) => p.month = month.filter(|m| (1..=12).contains(m)),
            FieldUpdate::Stat(field, text) => *field.slot(p) = parse_count(&text),
            FieldUpdate::Buddy(buddy) => p.programmer_buddy = buddy,
            FieldUpdate::Ide(ide) => p.most_used_ide = ide,
            FieldUpdate::Role(role) => p.role = role,
            FieldUpdate::Company(company) => p.company_name = company,
            FieldUpdate::DeveloperName(name) => p.developer_name = name,
            FieldUpdate::Personality(personality) => {
                p.personality = personality;
                p.background_image = None;
            }
            FieldUpdate::Template(url) => p.background_image = non_blank(url),
            FieldUpdate::CustomImage(uri) => p.custom_bg_image = non_blank(uri),
            FieldUpdate::ClearBackground => {
                p.background_image = None;
                p.custom_bg_image = None;
            }
        }
    }

    /// Shorthand for [`FieldUpdate::Stat`]
    pub fn set_stat(&mut self, field: StatField, text: &str) {
        self.apply(FieldUpdate::Stat(field, text.to_string()));
    }

    /// Replace the period fields wholesale
    pub fn set_period(&mut self, period: PeriodSelection) {
        self.profile.apply_period(period);
    }

    pub fn toggle_language(&mut self, name: &str) -> ToggleOutcome {
        toggle(&mut self.profile.most_used_languages, name)
    }

    pub fn toggle_app(&mut self, name: &str) -> ToggleOutcome {
        toggle(&mut self.profile.most_used_apps, name)
    }

    /// Persist the profile for the results view
    pub fn submit(&self, store: &(impl SessionStore + ?Sized)) -> Result<(), StorageError> {
        store.save_profile(&self.profile)?;
        tracing::info!(
            personality = %self.profile.personality,
            period = %self.profile.period_slug(),
            "Wrap submitted"
        );
        Ok(())
    }
}

fn toggle(selection: &mut crate::types::Selection, name: &str) -> ToggleOutcome {
    if selection.remove(name) {
        ToggleOutcome::Removed
    } else if selection.insert(name.to_string()) {
        ToggleOutcome::Added
    } else {
        ToggleOutcome::Full
    }
}
