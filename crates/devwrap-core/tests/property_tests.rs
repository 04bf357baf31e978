//! Property-based tests for the wrap model, counter and theme registry
//!
//! Uses proptest to check the invariants every front end relies on.

use std::time::Duration;

use devwrap_core::theme::resolve_background;
use devwrap_core::{
    export, format_compact, lookup, parse_count, render, CardBounds, CounterAnimation,
    ExportOptions, FieldUpdate, FormStore, MemorySessionStore, OfflineFetcher, PeriodSelection,
    PeriodType, Personality, Selection, SessionStore, ToggleOutcome, WrapProfile,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn personality_strategy() -> impl Strategy<Value = Personality> {
    prop::sample::select(Personality::ALL.to_vec())
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .&'-]{0,40}").expect("valid regex")
}

/// Free text as pasted: may carry C0 controls, DEL and non-ASCII
fn raw_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z \\x00-\\x1f\\x7f\u{e9}\u{1f680}]{0,20}").expect("valid regex")
}

/// Mostly everyday counts, with the saturation edge kept in play
fn count_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![
        6 => 0u64..10_000_000,
        1 => Just(u64::MAX),
        1 => any::<u64>(),
    ]
}

/// Blank background references, empty or whitespace only
fn blank_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[ \\t\\n]{0,4}").expect("valid regex"))
}

fn url_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::string::string_regex("https://[a-z]{1,12}\\.com/[a-z0-9]{1,12}\\.png")
            .expect("valid regex"),
    )
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z+#]{1,10}").expect("valid regex"),
        0..8,
    )
}

prop_compose! {
    fn profile_strategy()(
        monthly in any::<bool>(),
        year in 1990i32..2100,
        month in prop::option::of(1u8..=12),
        counts in prop::array::uniform7(count_strategy()),
        texts in prop::array::uniform5(text_strategy()),
        languages in names_strategy(),
        apps in names_strategy(),
        personality in personality_strategy(),
        template in url_strategy(),
        custom in url_strategy(),
    ) -> WrapProfile {
        let [buddy, ide, role, company, name] = texts;
        WrapProfile {
            period_type: if monthly { PeriodType::Monthly } else { PeriodType::Yearly },
            year,
            month,
            lines_of_code: counts[0],
            commits: counts[1],
            coffees_consumed: counts[2],
            hours_coded: counts[3],
            bugs_fixed: counts[4],
            projects_shipped: counts[5],
            hours_in_meetings: counts[6],
            programmer_buddy: buddy,
            most_used_ide: ide,
            most_used_languages: Selection::from_names(languages),
            most_used_apps: Selection::from_names(apps),
            role,
            company_name: company,
            developer_name: name,
            personality,
            background_image: template,
            custom_bg_image: custom,
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Displayed values never decrease and never exceed the target
    #[test]
    fn counter_is_monotonic_and_bounded(
        target in 0u64..100_000_000,
        duration_ms in 1u64..5_000,
        mut samples in prop::collection::vec(0u64..6_000, 1..50),
    ) {
        let anim = CounterAnimation::new(target).with_duration(Duration::from_millis(duration_ms));
        samples.sort_unstable();

        let mut last = 0;
        for ms in samples {
            let value = anim.value_at(Duration::from_millis(ms));
            prop_assert!(value >= last);
            prop_assert!(value <= target);
            last = value;
        }
    }

    /// Once the duration has elapsed the counter shows exactly the target
    #[test]
    fn counter_final_value_is_exact(target in 0u64..100_000_000, extra_ms in 0u64..10_000) {
        let anim = CounterAnimation::new(target);
        let elapsed = anim.duration() + Duration::from_millis(extra_ms);
        prop_assert_eq!(anim.value_at(elapsed), target);
        prop_assert_eq!(anim.text_at(elapsed), format_compact(target));
    }

    /// Compact format is a plain integer below 1000 and ends in k above
    #[test]
    fn format_shape(value in count_strategy()) {
        let text = format_compact(value);
        if value < 1000 {
            prop_assert_eq!(text, value.to_string());
        } else {
            prop_assert!(text.ends_with('k'));
            prop_assert_eq!(text.contains('.'), value < 10_000);
        }
    }

    /// Any numeric text coerces to a count that formats, huge values saturate
    #[test]
    fn parse_count_saturates(digits in "[1-9][0-9]{20,40}", exponent in 20u32..300) {
        prop_assert_eq!(parse_count(&digits), u64::MAX);
        prop_assert_eq!(parse_count(&format!("1e{exponent}")), u64::MAX);
        prop_assert_eq!(format_compact(parse_count(&digits)), format!("{}k", u64::MAX / 1000));
    }

    /// Counting up to any target, including u64::MAX, stays bounded
    #[test]
    fn counter_handles_any_target(target in count_strategy(), permille in 0u64..=1000) {
        let anim = CounterAnimation::new(target).with_suffix("+");
        let elapsed = anim.duration() * permille as u32 / 1000;
        prop_assert!(anim.value_at(elapsed) <= target);
        prop_assert!(anim.text_at(elapsed).ends_with('+'));
        prop_assert_eq!(anim.value_at(anim.duration()), target);
    }

    /// No toggle sequence pushes a selection past four entries
    #[test]
    fn multi_select_never_exceeds_cap(toggles in prop::collection::vec(0usize..12, 0..60)) {
        let mut form = FormStore::default();
        for index in toggles {
            let name = devwrap_core::LANGUAGE_OPTIONS[index % devwrap_core::LANGUAGE_OPTIONS.len()];
            let was_full = form.profile().most_used_languages.is_full();
            let had = form.profile().most_used_languages.contains(name);
            let outcome = form.toggle_language(name);

            prop_assert!(form.profile().most_used_languages.len() <= Selection::MAX);
            if was_full && !had {
                prop_assert_eq!(outcome, ToggleOutcome::Full);
            }
        }
    }

    /// A saved profile loads back identical
    #[test]
    fn session_round_trip(profile in profile_strategy()) {
        let store = MemorySessionStore::new();
        store.save_profile(&profile).unwrap();
        prop_assert_eq!(store.load_profile(), Some(profile));
    }

    /// Blank template and upload references clear the background, and the
    /// form saves and loads back unchanged
    #[test]
    fn blank_background_form_round_trip(
        template in blank_strategy(),
        custom in blank_strategy(),
        personality in personality_strategy(),
    ) {
        let store = MemorySessionStore::new();
        let mut form = FormStore::default();
        form.apply(FieldUpdate::Personality(personality));
        form.apply(FieldUpdate::Template(template));
        form.apply(FieldUpdate::CustomImage(custom));
        prop_assert_eq!(&form.profile().background_image, &None);
        prop_assert_eq!(&form.profile().custom_bg_image, &None);

        form.submit(&store).unwrap();
        let loaded_profile = store.load_profile();
        prop_assert_eq!(loaded_profile.as_ref(), Some(form.profile()));
        let reloaded_form = FormStore::load(&store);
        prop_assert_eq!(reloaded_form.profile(), form.profile());
        prop_assert_eq!(
            resolve_background(form.profile()),
            lookup(personality).default_bg_image
        );
    }

    /// A saved period loads back identical
    #[test]
    fn period_round_trip(year in 1990i32..2100, month in 1u8..=12, monthly in any::<bool>()) {
        let period = if monthly {
            PeriodSelection::monthly(year, month)
        } else {
            PeriodSelection::yearly(year)
        };
        let store = MemorySessionStore::new();
        store.save_period(&period).unwrap();
        prop_assert_eq!(store.load_period(), Some(period));
    }

    /// Custom upload, then template, then the theme default
    #[test]
    fn background_precedence(profile in profile_strategy()) {
        let expected = match (&profile.custom_bg_image, &profile.background_image) {
            (Some(custom), _) => custom.clone(),
            (None, Some(template)) => template.clone(),
            (None, None) => lookup(profile.personality).default_bg_image.to_string(),
        };
        prop_assert_eq!(resolve_background(&profile), expected.as_str());
    }

    /// Every personality resolves to a theme with real colors
    #[test]
    fn theme_lookup_is_total(personality in personality_strategy()) {
        let theme = lookup(personality);
        prop_assert!(!theme.primary_color.is_empty());
        prop_assert!(!theme.default_bg_image.is_empty());
        prop_assert!(theme.gradient().starts_with("linear-gradient("));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Whatever lands in the free text fields, the card still exports
    #[test]
    fn export_survives_raw_text(
        texts in prop::array::uniform4(raw_text_strategy()),
        count in count_strategy(),
        personality in personality_strategy(),
    ) {
        let [name, role, company, buddy] = texts;
        let profile = WrapProfile {
            developer_name: name,
            role,
            company_name: company,
            programmer_buddy: buddy,
            lines_of_code: count,
            personality,
            ..Default::default()
        };
        let card = render(&profile);
        let options = ExportOptions { offline: true, ..Default::default() };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let image = runtime
            .block_on(export(&card, CardBounds::from_width(90.0), &OfflineFetcher, &options));
        prop_assert!(image.is_ok(), "export failed: {:?}", image.err());
    }
}
