//! Wrap Card Component
//!
//! Draws a [`CardView`] as HTML. The exporter draws the same view as SVG,
//! so layout rules live in the renderer, not here.

use std::rc::Rc;
use std::time::Duration;

use devwrap_core::{CardView, IconStrip, PeriodLabel};
use dioxus::prelude::*;

use super::StatItem;

#[component]
pub fn WrapCard(
    card: CardView,
    duration: Duration,
    frame_interval: Duration,
    /// Receives the card's root node, used to measure it for export
    on_mounted: EventHandler<Rc<MountedData>>,
) -> Element {
    let theme = card.theme;
    let gradient = theme.gradient();
    let background = card.background.clone();

    let (period_class, period_style) = match card.header.period {
        PeriodLabel::Month(_) => ("card-month", format!("color: {};", theme.secondary_color)),
        PeriodLabel::Tagline(_) => ("card-tagline", String::new()),
    };
    let period_text = match card.header.period {
        PeriodLabel::Month(name) => name.to_uppercase(),
        PeriodLabel::Tagline(text) => text.to_string(),
    };

    rsx! {
        div {
            class: "wrap-card",
            style: "background: {gradient};",
            onmounted: move |evt: MountedEvent| on_mounted.call(evt.data()),

            div { class: "card-bg", style: "background-image: url('{background}');" }
            div { class: "card-overlay", style: "background: {theme.bg_overlay};" }

            div { class: "card-content",
                header { class: "card-header",
                    p { class: "card-title", "{card.header.title}" }
                    h1 { class: "card-wordmark",
                        "{card.header.wordmark} "
                        span { style: "color: {theme.primary_color};", "{card.header.year}" }
                    }
                    p { class: "{period_class}", style: "{period_style}", "{period_text}" }
                }

                div { class: "stat-grid",
                    for cell in card.stats.iter().cloned() {
                        StatItem {
                            key: "{cell.label}",
                            cell,
                            accent: theme.primary_color.to_string(),
                            duration,
                            frame_interval,
                        }
                    }
                }

                Strip { strip: card.apps.clone() }
                Strip { strip: card.languages.clone() }

                footer { class: "card-footer",
                    div {
                        if !card.footer.developer_name.is_empty() {
                            p { class: "footer-name", "{card.footer.developer_name}" }
                        }
                        p { class: "footer-role", "{card.footer.role}" }
                        p { class: "footer-company", "at {card.footer.company}" }
                    }
                    div { class: "footer-theme",
                        p { class: "footer-caption", "PERSONALITY" }
                        p { style: "color: {theme.primary_color};", "{card.footer.theme_name.to_uppercase()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Strip(strip: IconStrip) -> Element {
    rsx! {
        div { class: "icon-strip",
            p { class: "strip-caption", "{strip.caption}" }
            div { class: "strip-icons",
                for item in strip.items.iter() {
                    img {
                        key: "{item.name}",
                        class: "strip-icon",
                        src: "{item.icon_url}",
                        alt: "{item.name}",
                        title: "{item.name}",
                    }
                }
            }
        }
    }
}
