//! SVG layout of the wrap card.
//!
//! Everything is laid out in design units (540×960) and mapped onto the
//! measured bounds through `viewBox`, so the export matches the on-screen
//! card at any size.

use std::fmt::Write;

use super::resources::Embedded;
use super::{CardBounds, DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::render::{CardView, IconItem, IconStrip, PeriodLabel, StatCell, StatValue};

const FONT: &str = "Inter, Segoe UI, sans-serif";
const MONO: &str = "JetBrains Mono, Fira Code, monospace";
const TEXT: &str = "#fafafa";
const MUTED: &str = "hsl(0, 0%, 60%)";

const GRID_TOP: f64 = 215.0;
const ROW_HEIGHT: f64 = 108.0;
const COLUMNS: [f64; 2] = [135.0, 405.0];
const ICON_SIZE: f64 = 40.0;
const ICON_GAP: f64 = 14.0;

/// Escape text for element content and attribute values.
///
/// Control characters XML 1.0 does not allow are dropped.
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() && c < '\u{20}' => {}
            '\u{fffe}' | '\u{ffff}' => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Lay `card` out as a standalone SVG document.
///
/// Images are looked up in `embedded`; anything missing is simply not drawn.
pub fn card_svg(card: &CardView, bounds: CardBounds, embedded: &Embedded) -> String {
    let theme = card.theme;
    let primary = theme.primary_color;
    let mut svg = String::with_capacity(16 * 1024);

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{:.2}' height='{:.2}' viewBox='0 0 {} {}' preserveAspectRatio='xMidYMid meet'>",
        bounds.width, bounds.height, DESIGN_WIDTH, DESIGN_HEIGHT
    );

    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(svg, "    <linearGradient id='bg' x1='0' y1='0' x2='0' y2='1'>");
    for stop in &theme.gradient_stops {
        let _ = writeln!(
            svg,
            "      <stop offset='{}%' stop-color='{}'/>",
            stop.offset, stop.color
        );
    }
    let _ = writeln!(svg, "    </linearGradient>");
    let _ = writeln!(
        svg,
        "    <radialGradient id='glow' cx='0.5' cy='0.5' r='0.5'><stop offset='0' stop-color='{primary}' stop-opacity='0.08'/><stop offset='1' stop-color='{primary}' stop-opacity='0'/></radialGradient>"
    );
    let _ = writeln!(
        svg,
        "    <clipPath id='card'><rect width='{DESIGN_WIDTH}' height='{DESIGN_HEIGHT}' rx='16'/></clipPath>"
    );
    let _ = writeln!(svg, "  </defs>");

    let _ = writeln!(svg, "  <g clip-path='url(#card)'>");
    let _ = writeln!(
        svg,
        "    <rect width='{DESIGN_WIDTH}' height='{DESIGN_HEIGHT}' fill='url(#bg)'/>"
    );
    if let Some(uri) = embedded.get(&card.background) {
        let _ = writeln!(
            svg,
            "    <image href='{}' width='{DESIGN_WIDTH}' height='{DESIGN_HEIGHT}' preserveAspectRatio='xMidYMid slice'/>",
            escape(uri)
        );
    }
    let _ = writeln!(
        svg,
        "    <rect width='{DESIGN_WIDTH}' height='{DESIGN_HEIGHT}' fill='{}'/>",
        theme.bg_overlay
    );
    let _ = writeln!(
        svg,
        "    <ellipse cx='270' cy='480' rx='240' ry='240' fill='url(#glow)'/>"
    );

    write_header(&mut svg, card);
    for (index, cell) in card.stats.iter().enumerate() {
        let x = COLUMNS[index % 2];
        let y = GRID_TOP + ROW_HEIGHT * (index / 2) as f64;
        write_stat(&mut svg, cell, x, y, primary);
    }
    write_strip(&mut svg, &card.apps, 675.0, embedded);
    write_strip(&mut svg, &card.languages, 765.0, embedded);
    write_footer(&mut svg, card);

    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

fn write_header(svg: &mut String, card: &CardView) {
    let header = &card.header;
    let theme = card.theme;

    let _ = writeln!(
        svg,
        "    <text x='270' y='70' text-anchor='middle' font-family='{FONT}' font-size='20' font-weight='700' letter-spacing='4' fill='{TEXT}'>{}</text>",
        escape(header.title)
    );
    let _ = writeln!(
        svg,
        "    <text x='270' y='122' text-anchor='middle' font-family='{FONT}' font-size='44' font-weight='900' fill='{}'>{} <tspan font-size='22' fill='{TEXT}'>{}</tspan></text>",
        theme.primary_color,
        escape(header.wordmark),
        header.year
    );

    match header.period {
        PeriodLabel::Month(name) => {
            let _ = writeln!(
                svg,
                "    <text x='270' y='172' text-anchor='middle' font-family='{FONT}' font-size='36' font-weight='800' letter-spacing='3' fill='{}'>{}</text>",
                theme.secondary_color,
                escape(&name.to_uppercase())
            );
        }
        PeriodLabel::Tagline(text) => {
            let _ = writeln!(
                svg,
                "    <text x='270' y='156' text-anchor='middle' font-family='{FONT}' font-size='14' font-style='italic' fill='{}' fill-opacity='0.7'>{}</text>",
                theme.primary_color,
                escape(text)
            );
        }
    }
}

fn write_stat(svg: &mut String, cell: &StatCell, x: f64, y: f64, primary: &str) {
    let _ = writeln!(
        svg,
        "    <text x='{x}' y='{y}' text-anchor='middle' font-family='{FONT}' font-size='11' font-weight='600' letter-spacing='2' fill='{TEXT}' fill-opacity='0.8'>{} {}</text>",
        escape(cell.glyph.symbol()),
        escape(cell.label)
    );

    // Exports always show the settled value
    let (size, family) = match cell.value {
        StatValue::Count { .. } => (44, MONO),
        StatValue::Text(_) => (30, FONT),
    };
    let _ = writeln!(
        svg,
        "    <text x='{x}' y='{}' text-anchor='middle' font-family='{family}' font-size='{size}' font-weight='800' fill='{primary}'>{}</text>",
        y + 54.0,
        escape(&cell.value.final_text())
    );
}

fn write_strip(svg: &mut String, strip: &IconStrip, y: f64, embedded: &Embedded) {
    let _ = writeln!(
        svg,
        "    <text x='270' y='{y}' text-anchor='middle' font-family='{FONT}' font-size='11' font-weight='600' letter-spacing='2' fill='{MUTED}'>{}</text>",
        escape(strip.caption)
    );

    let count = strip.items.len() as f64;
    let row_width = count * ICON_SIZE + (count - 1.0).max(0.0) * ICON_GAP;
    let mut x = (DESIGN_WIDTH - row_width) / 2.0;
    for item in &strip.items {
        write_icon(svg, item, x, y + 14.0, embedded);
        x += ICON_SIZE + ICON_GAP;
    }
}

fn write_icon(svg: &mut String, item: &IconItem, x: f64, y: f64, embedded: &Embedded) {
    let Some(uri) = embedded.get(&item.icon_url) else {
        return;
    };
    let _ = writeln!(
        svg,
        "    <image href='{}' x='{x}' y='{y}' width='{ICON_SIZE}' height='{ICON_SIZE}'><title>{}</title></image>",
        escape(uri),
        escape(&item.name)
    );
}

fn write_footer(svg: &mut String, card: &CardView) {
    let footer = &card.footer;
    let primary = card.theme.primary_color;

    let _ = writeln!(
        svg,
        "    <line x1='24' y1='860' x2='516' y2='860' stroke='{primary}' stroke-opacity='0.2'/>"
    );

    let mut y = 884.0;
    if !footer.developer_name.is_empty() {
        let _ = writeln!(
            svg,
            "    <text x='24' y='{y}' font-family='{FONT}' font-size='15' font-weight='700' fill='{TEXT}'>{}</text>",
            escape(&footer.developer_name)
        );
        y += 20.0;
    }
    let _ = writeln!(
        svg,
        "    <text x='24' y='{y}' font-family='{FONT}' font-size='13' font-weight='600' fill='{TEXT}'>{}</text>",
        escape(&footer.role)
    );
    let _ = writeln!(
        svg,
        "    <text x='24' y='{}' font-family='{FONT}' font-size='12' fill='{MUTED}'>at {}</text>",
        y + 18.0,
        escape(&footer.company)
    );

    let _ = writeln!(
        svg,
        "    <text x='516' y='888' text-anchor='end' font-family='{FONT}' font-size='10' letter-spacing='2' fill='{primary}' fill-opacity='0.8'>PERSONALITY</text>"
    );
    let _ = writeln!(
        svg,
        "    <text x='516' y='908' text-anchor='end' font-family='{FONT}' font-size='15' font-weight='800' fill='{primary}'>{}</text>",
        escape(&footer.theme_name.to_uppercase())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::types::{PeriodSelection, Personality, WrapProfile};

    fn svg_for(profile: &WrapProfile) -> String {
        card_svg(&render(profile), CardBounds::DESIGN, &Embedded::new())
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <\"x\">"), "R&amp;D &lt;&quot;x&quot;&gt;");
    }

    #[test]
    fn test_escape_drops_xml_illegal_controls() {
        assert_eq!(escape("A\u{1}d\u{8}a\u{b}\u{c}\u{1f}"), "Ada");
        assert_eq!(escape("tab\tnew\nline\r"), "tab\tnew\nline\r");
        assert_eq!(escape("x\u{ffff}y"), "xy");
    }

    #[test]
    fn test_settled_values_and_theme_colors() {
        let mut profile = WrapProfile::default();
        profile.personality = Personality::Hacker;
        profile.lines_of_code = 25_000;
        let svg = svg_for(&profile);

        assert!(svg.contains(">25k<"));
        assert!(svg.contains("hsl(120, 100%, 40%)"));
        assert!(svg.contains(">400+<"));
        assert!(svg.contains(">Copilot<"));
    }

    #[test]
    fn test_monthly_label() {
        let svg = svg_for(&WrapProfile::with_period(PeriodSelection::monthly(2024, 3)));
        assert!(svg.contains(">MARCH<"));
        assert!(!svg.contains("Code, Coffee, and Deploys"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut profile = WrapProfile::default();
        profile.company_name = "AT&T <Labs>".into();
        let svg = svg_for(&profile);
        assert!(svg.contains("at AT&amp;T &lt;Labs&gt;"));
    }

    #[test]
    fn test_missing_images_are_skipped() {
        let svg = svg_for(&WrapProfile::default());
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn test_viewbox_maps_to_bounds() {
        let card = render(&WrapProfile::default());
        let svg = card_svg(&card, CardBounds::new(270.0, 480.0), &Embedded::new());
        assert!(svg.contains("width='270.00' height='480.00' viewBox='0 0 540 960'"));
    }
}
