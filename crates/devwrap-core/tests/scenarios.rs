//! End-to-end scenarios: landing -> form -> card -> PNG
//!
//! These run the same sequence the front ends do, with an offline fetcher
//! so no network is touched.

use devwrap_core::storage::{PERIOD_KEY, PROFILE_KEY};
use devwrap_core::{
    export, export_filename, render, CardBounds, ExportError, ExportOptions, FieldUpdate,
    FileSessionStore, FormStore, MemorySessionStore, OfflineFetcher, PeriodLabel,
    PeriodSelection, Personality, ResourceError, SessionStore, StatField, StatValue,
};

fn offline() -> ExportOptions {
    ExportOptions {
        offline: true,
        ..Default::default()
    }
}

// ============================================================================
// Card Scenarios
// ============================================================================

/// Hacker theme, 25000 lines of code: the card settles on "25k" in hacker green
#[tokio::test]
async fn test_hacker_card_end_to_end() {
    let store = MemorySessionStore::new();
    store.save_period(&PeriodSelection::yearly(2024)).unwrap();

    let mut form = FormStore::load(&store);
    form.apply(FieldUpdate::Personality(Personality::Hacker));
    form.set_stat(StatField::LinesOfCode, "25000");
    form.submit(&store).unwrap();

    let profile = store.load_profile().unwrap();
    let card = render(&profile);

    let loc = card.stat("LINES OF CODE").unwrap();
    assert_eq!(loc.value.final_text(), "25k");
    assert_eq!(card.theme.primary_color, "hsl(120, 100%, 40%)");
    assert_eq!(card.header.period, PeriodLabel::Tagline("Code, Coffee, and Deploys"));

    let image = export(&card, CardBounds::DESIGN, &OfflineFetcher, &offline())
        .await
        .unwrap();
    assert_eq!((image.width(), image.height()), (1080, 1920));
    assert_eq!(&image.png()[1..4], b"PNG");
    assert!(image
        .warnings()
        .iter()
        .all(|w| matches!(w, ResourceError::Offline(_))));
    assert_eq!(
        export_filename(&profile),
        "software-engineer-wrap-2024-hacker.png"
    );
}

/// Monthly March 2024, space theme
#[tokio::test]
async fn test_monthly_space_scenario() {
    let store = MemorySessionStore::new();
    store.save_period(&PeriodSelection::monthly(2024, 3)).unwrap();

    let mut form = FormStore::load(&store);
    form.apply(FieldUpdate::Personality(Personality::Space));
    form.submit(&store).unwrap();

    let profile = store.load_profile().unwrap();
    let card = render(&profile);
    assert_eq!(card.header.period, PeriodLabel::Month("March"));
    assert_eq!(
        export_filename(&profile),
        "software-engineer-wrap-2024-03-space.png"
    );

    let image = export(&card, CardBounds::from_width(270.0), &OfflineFetcher, &offline())
        .await
        .unwrap();
    assert_eq!((image.width(), image.height()), (540, 960));
}

/// Export fails cleanly when the card has no size
#[tokio::test]
async fn test_missing_card_is_an_export_error() {
    let card = render(&Default::default());
    let err = export(&card, CardBounds::new(0.0, 0.0), &OfflineFetcher, &offline())
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::EmptyBounds { .. }));
}

/// Pasted text with control characters and a saturated count still exports
#[tokio::test]
async fn test_control_characters_and_huge_counts_export() {
    let mut form = FormStore::default();
    form.apply(FieldUpdate::DeveloperName("Ada\u{1}".into()));
    form.apply(FieldUpdate::Role("SDE\u{b}II".into()));
    form.apply(FieldUpdate::Company("Init\u{1f}ech\u{7f}".into()));
    form.apply(FieldUpdate::Buddy("Rubber\u{0}Duck".into()));
    form.set_stat(StatField::LinesOfCode, "1e30");
    form.set_stat(StatField::CoffeesConsumed, &u64::MAX.to_string());

    let card = render(form.profile());
    assert_eq!(
        card.stat("LINES OF CODE").unwrap().value.final_text(),
        format!("{}k", u64::MAX / 1000)
    );

    let image = export(&card, CardBounds::DESIGN, &OfflineFetcher, &offline())
        .await
        .unwrap();
    assert_eq!(&image.png()[1..4], b"PNG");
}

/// Coffees and bugs keep the plus suffix through compaction
#[test]
fn test_plus_suffix_cells() {
    let mut form = FormStore::default();
    form.set_stat(StatField::CoffeesConsumed, "1500");
    form.set_stat(StatField::BugsFixed, "12");
    let card = render(form.profile());

    assert_eq!(card.stat("COFFEES CONSUMED").unwrap().value.final_text(), "1.5k+");
    assert_eq!(card.stat("BUGS FIXED").unwrap().value.final_text(), "12+");
    assert!(matches!(
        card.stat("HOURS CODED").unwrap().value,
        StatValue::Count { suffix: "", .. }
    ));
}

// ============================================================================
// Session Scenarios
// ============================================================================

/// Corrupt session data is ignored and defaults are used
#[test]
fn test_corrupt_session_falls_back_to_defaults() {
    let store = MemorySessionStore::new();
    store.set(PROFILE_KEY, "{not json").unwrap();
    store.set(PERIOD_KEY, "[]").unwrap();

    assert!(store.try_load_profile().is_err());
    assert!(store.load_profile().is_none());

    let form = FormStore::load(&store);
    assert_eq!(form.profile(), FormStore::default().profile());
}

/// Non-numeric counts from an older session coerce to zero
#[test]
fn test_loose_numbers_are_coerced() {
    let store = MemorySessionStore::new();
    store
        .set(
            PROFILE_KEY,
            r#"{"linesOfCode":"abc","commits":"42","month":"3","periodType":"monthly","year":2024}"#,
        )
        .unwrap();

    let profile = store.load_profile().unwrap();
    assert_eq!(profile.lines_of_code, 0);
    assert_eq!(profile.commits, 42);
    assert_eq!(profile.period_label(), "March 2024");
}

/// File-backed sessions survive across store instances
#[test]
fn test_file_session_spans_instances() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let store = FileSessionStore::new(tmp.path()).unwrap();
        let mut form = FormStore::load(&store);
        form.apply(FieldUpdate::Company("Initech".into()));
        form.submit(&store).unwrap();
    }

    let store = FileSessionStore::new(tmp.path()).unwrap();
    assert_eq!(FormStore::load(&store).profile().company_name, "Initech");

    store.clear().unwrap();
    assert!(store.load_profile().is_none());
}
