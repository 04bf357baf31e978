//! Landing page - pick the period the wrap covers.
//!
//! A previously chosen period is preselected so "back" keeps the choice.

use chrono::Datelike;
use devwrap_core::{month_name, Notice, PeriodSelection, PeriodType, SessionStore};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{push_notice, use_session, use_toasts};

/// Years offered in the picker, newest first
const YEAR_SPAN: i32 = 10;

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let session = use_session();
    let mut toasts = use_toasts();

    let today = chrono::Local::now();
    let current_year = today.year();
    let current_month = today.month() as u8;
    let initial = use_hook({
        let session = session.clone();
        move || session.load_period().unwrap_or_default()
    });

    let mut period_type = use_signal(|| initial.period_type);
    let mut year = use_signal(|| initial.year);
    let mut month = use_signal(|| initial.month.unwrap_or(current_month));

    let start = move |_| {
        let selection = match period_type() {
            PeriodType::Yearly => PeriodSelection::yearly(year()),
            PeriodType::Monthly => PeriodSelection::monthly(year(), month()),
        };
        match session.save_period(&selection) {
            Ok(()) => {
                tracing::info!(?selection, "Period selected");
                navigator.push(Route::Create {});
            }
            Err(e) => {
                tracing::error!("Failed to save period: {}", e);
                push_notice(
                    &mut toasts,
                    Notice::destructive("Something went wrong", e.to_string()),
                );
            }
        }
    };

    let is_monthly = period_type() == PeriodType::Monthly;

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                p { class: "eyebrow", "SOFTWARE ENGINEER" }
                h1 { class: "page-title", "WRAP" }
                p { class: "tagline", "Your year in code, coffee and deploys. One card to share." }
            }

            section { class: "period-picker",
                div { class: "segmented",
                    button {
                        class: if !is_monthly { "segment active" } else { "segment" },
                        onclick: move |_| period_type.set(PeriodType::Yearly),
                        "Yearly"
                    }
                    button {
                        class: if is_monthly { "segment active" } else { "segment" },
                        onclick: move |_| period_type.set(PeriodType::Monthly),
                        "Monthly"
                    }
                }

                div { class: "field-row",
                    label { class: "field-label", "Year" }
                    select {
                        class: "field-input",
                        value: "{year}",
                        onchange: move |evt| {
                            if let Ok(value) = evt.value().parse() {
                                year.set(value);
                            }
                        },
                        for y in (current_year - YEAR_SPAN + 1..=current_year).rev() {
                            option { value: "{y}", selected: y == year(), "{y}" }
                        }
                    }
                }

                if is_monthly {
                    div { class: "field-row",
                        label { class: "field-label", "Month" }
                        select {
                            class: "field-input",
                            value: "{month}",
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse() {
                                    month.set(value);
                                }
                            },
                            for m in 1u8..=12 {
                                option {
                                    value: "{m}",
                                    selected: m == month(),
                                    "{month_name(m).unwrap_or_default()}"
                                }
                            }
                        }
                    }
                }

                button { class: "btn-primary", onclick: start, "Create my wrap" }
            }
        }
    }
}
