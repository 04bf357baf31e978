use dioxus::prelude::*;

/// Toggleable chips for a multi-select list
#[component]
pub fn ChipGroup(
    options: &'static [&'static str],
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "chip-group",
            for name in options.iter().copied() {
                button {
                    key: "{name}",
                    r#type: "button",
                    class: if selected.iter().any(|s| s == name) { "chip active" } else { "chip" },
                    onclick: move |_| on_toggle.call(name.to_string()),
                    "{name}"
                }
            }
        }
    }
}
