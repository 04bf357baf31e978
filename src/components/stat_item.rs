use std::time::Duration;

use devwrap_core::{StatCell, StatValue};
use dioxus::prelude::*;

use super::AnimatedCounter;

/// One cell of the card's stat grid: glyph, label and value
#[component]
pub fn StatItem(
    cell: StatCell,
    accent: String,
    duration: Duration,
    frame_interval: Duration,
) -> Element {
    let value = match cell.value.animation(duration) {
        Some(animation) => rsx! {
            AnimatedCounter { animation, frame_interval, class: "stat-value" }
        },
        None => {
            let text = match &cell.value {
                StatValue::Text(text) => text.clone(),
                count => count.final_text(),
            };
            rsx! { span { class: "stat-value stat-text", "{text}" } }
        }
    };

    rsx! {
        div { class: "stat-item",
            div { class: "stat-label",
                span { class: "stat-glyph", style: "color: {accent};", "{cell.glyph.symbol()}" }
                span { "{cell.label}" }
            }
            {value}
        }
    }
}
