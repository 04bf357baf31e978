use devwrap_core::{lookup, Personality};
use dioxus::prelude::*;

/// Grid of theme swatches; one is always selected
#[component]
pub fn PersonalitySelector(selected: Personality, on_select: EventHandler<Personality>) -> Element {
    rsx! {
        div { class: "personality-grid",
            for personality in Personality::ALL {
                PersonalityOption {
                    key: "{personality.key()}",
                    personality,
                    active: personality == selected,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn PersonalityOption(
    personality: Personality,
    active: bool,
    on_select: EventHandler<Personality>,
) -> Element {
    let theme = lookup(personality);
    let gradient = theme.gradient();
    let border = if active {
        format!("border-color: {};", theme.primary_color)
    } else {
        String::new()
    };

    rsx! {
        button {
            r#type: "button",
            class: if active { "personality-option active" } else { "personality-option" },
            style: "{border}",
            onclick: move |_| on_select.call(personality),
            div { class: "personality-swatch", style: "background: {gradient};" }
            span { class: "personality-name", "{theme.name}" }
            span { class: "personality-desc", "{personality.description()}" }
            span { class: "personality-colors", style: "color: {theme.primary_color};", "{personality.colors()}" }
        }
    }
}
