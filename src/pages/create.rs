//! Create page - the stats form.
//!
//! Edits go through [`FormStore`]; nothing is persisted until submit.

use devwrap_core::{
    FieldUpdate, FormStore, Notice, StatField, ToggleOutcome, APP_OPTIONS, BUDDY_OPTIONS,
    IDE_OPTIONS, LANGUAGE_OPTIONS, ROLE_OPTIONS,
};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{BackgroundSelector, ChipGroup, PersonalitySelector};
use crate::context::{push_notice, use_session, use_toasts};

#[component]
pub fn Create() -> Element {
    let navigator = use_navigator();
    let session = use_session();
    let mut toasts = use_toasts();

    let mut form = use_signal({
        let session = session.clone();
        move || FormStore::load(session.as_ref())
    });

    let mut update = move |change: FieldUpdate| form.write().apply(change);

    let mut toggle = move |name: String, languages: bool| {
        let outcome = if languages {
            form.write().toggle_language(&name)
        } else {
            form.write().toggle_app(&name)
        };
        if outcome == ToggleOutcome::Full {
            let what = if languages { "languages" } else { "apps" };
            push_notice(
                &mut toasts,
                Notice::info("Limit reached", format!("You can pick up to 4 {what}.")),
            );
        }
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().submit(session.as_ref()) {
            Ok(()) => {
                navigator.push(Route::Wrap {});
            }
            Err(e) => {
                tracing::error!("Failed to save wrap: {}", e);
                push_notice(
                    &mut toasts,
                    Notice::destructive("Something went wrong", e.to_string()),
                );
            }
        }
    };

    let profile = form.read().profile().clone();

    rsx! {
        main { class: "create",
            header { class: "page-header",
                button {
                    class: "btn-ghost",
                    onclick: move |_| { navigator.push(Route::Landing {}); },
                    "Back"
                }
                h1 { class: "page-title", "Your {profile.period_label()}" }
            }

            form { class: "wrap-form", onsubmit: submit,
                section { class: "form-section",
                    h2 { class: "section-header", "About you" }
                    div { class: "field-row",
                        label { class: "field-label", "Name" }
                        input {
                            class: "field-input",
                            r#type: "text",
                            placeholder: "Your name",
                            value: "{profile.developer_name}",
                            oninput: move |evt| update(FieldUpdate::DeveloperName(evt.value())),
                        }
                    }
                    div { class: "field-row",
                        label { class: "field-label", "Role" }
                        select {
                            class: "field-input",
                            onchange: move |evt| update(FieldUpdate::Role(evt.value())),
                            for role in ROLE_OPTIONS.iter() {
                                option { value: "{role}", selected: profile.role == *role, "{role}" }
                            }
                        }
                    }
                    div { class: "field-row",
                        label { class: "field-label", "Company" }
                        input {
                            class: "field-input",
                            r#type: "text",
                            value: "{profile.company_name}",
                            oninput: move |evt| update(FieldUpdate::Company(evt.value())),
                        }
                    }
                }

                section { class: "form-section",
                    h2 { class: "section-header", "Stats" }
                    div { class: "stat-inputs",
                        for field in StatField::ALL {
                            div { key: "{field.label()}", class: "field-row",
                                label { class: "field-label", "{field.label()}" }
                                input {
                                    class: "field-input",
                                    r#type: "number",
                                    min: "0",
                                    value: "{field.get(&profile)}",
                                    oninput: move |evt| update(FieldUpdate::Stat(field, evt.value())),
                                }
                            }
                        }
                    }
                    div { class: "field-row",
                        label { class: "field-label", "Programmer buddy" }
                        select {
                            class: "field-input",
                            onchange: move |evt| update(FieldUpdate::Buddy(evt.value())),
                            for buddy in BUDDY_OPTIONS.iter() {
                                option {
                                    value: "{buddy}",
                                    selected: profile.programmer_buddy == *buddy,
                                    "{buddy}"
                                }
                            }
                        }
                    }
                    div { class: "field-row",
                        label { class: "field-label", "Most used IDE" }
                        select {
                            class: "field-input",
                            onchange: move |evt| update(FieldUpdate::Ide(evt.value())),
                            for ide in IDE_OPTIONS.iter() {
                                option { value: "{ide}", selected: profile.most_used_ide == *ide, "{ide}" }
                            }
                        }
                    }
                }

                section { class: "form-section",
                    h2 { class: "section-header", "Languages" }
                    ChipGroup {
                        options: LANGUAGE_OPTIONS,
                        selected: profile.most_used_languages.as_slice().to_vec(),
                        on_toggle: move |name| toggle(name, true),
                    }
                    h2 { class: "section-header", "Apps" }
                    ChipGroup {
                        options: APP_OPTIONS,
                        selected: profile.most_used_apps.as_slice().to_vec(),
                        on_toggle: move |name| toggle(name, false),
                    }
                }

                section { class: "form-section",
                    h2 { class: "section-header", "Personality" }
                    PersonalitySelector {
                        selected: profile.personality,
                        on_select: move |p| update(FieldUpdate::Personality(p)),
                    }
                }

                section { class: "form-section",
                    h2 { class: "section-header", "Background" }
                    BackgroundSelector {
                        personality: profile.personality,
                        template: profile.background_image.clone(),
                        custom: profile.custom_bg_image.clone(),
                        on_change: move |change| update(change),
                    }
                }

                button { class: "btn-primary", r#type: "submit", "Generate my wrap" }
            }
        }
    }
}
