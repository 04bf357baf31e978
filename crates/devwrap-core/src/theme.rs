//! Theme registry: one immutable [`ThemeConfig`] per [`Personality`].
//!
//! Lookup is an exhaustive match, so adding a personality without a theme is
//! a compile error rather than a runtime miss.

use crate::types::{Personality, WrapProfile};

/// One gradient stop: CSS color and offset percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
    pub color: &'static str,
    pub offset: u8,
}

/// Colors, gradient and default background of a personality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    /// Top-to-bottom card gradient
    pub gradient_stops: [GradientStop; 3],
    pub bg_overlay: &'static str,
    pub default_bg_image: &'static str,
}

impl ThemeConfig {
    /// CSS `linear-gradient(...)` for the card background
    pub fn gradient(&self) -> String {
        let stops: Vec<String> = self
            .gradient_stops
            .iter()
            .map(|s| format!("{} {}%", s.color, s.offset))
            .collect();
        format!("linear-gradient(180deg, {})", stops.join(", "))
    }
}

const fn stop(color: &'static str, offset: u8) -> GradientStop {
    GradientStop { color, offset }
}

static BATMAN: ThemeConfig = ThemeConfig {
    name: "Batman",
    primary_color: "hsl(142, 70%, 45%)",
    secondary_color: "hsl(142, 60%, 35%)",
    gradient_stops: [
        stop("hsl(220, 20%, 4%)", 0),
        stop("hsl(220, 30%, 8%)", 50),
        stop("hsl(142, 20%, 6%)", 100),
    ],
    bg_overlay: "rgba(0, 0, 0, 0.7)",
    default_bg_image: "https://i.pinimg.com/1200x/f5/5e/36/f55e36bec20fcfbc0fc8aefd2feb6818.jpg",
};

static IRONMAN: ThemeConfig = ThemeConfig {
    name: "Iron Man",
    primary_color: "hsl(15, 90%, 55%)",
    secondary_color: "hsl(45, 100%, 50%)",
    gradient_stops: [
        stop("hsl(15, 30%, 6%)", 0),
        stop("hsl(30, 40%, 8%)", 50),
        stop("hsl(45, 30%, 6%)", 100),
    ],
    bg_overlay: "rgba(20, 5, 0, 0.75)",
    default_bg_image: "https://i.pinimg.com/1200x/51/34/2f/51342f33d033fafe53972b82faad87f2.jpg",
};

static CYBERPUNK: ThemeConfig = ThemeConfig {
    name: "Cyberpunk",
    primary_color: "hsl(280, 100%, 65%)",
    secondary_color: "hsl(195, 100%, 50%)",
    gradient_stops: [
        stop("hsl(260, 30%, 5%)", 0),
        stop("hsl(280, 40%, 8%)", 50),
        stop("hsl(195, 30%, 6%)", 100),
    ],
    bg_overlay: "rgba(20, 0, 30, 0.7)",
    default_bg_image: "https://i.pinimg.com/1200x/85/04/2e/85042eed7f1e3e1449b00a3549588a78.jpg",
};

static MINIMALIST: ThemeConfig = ThemeConfig {
    name: "Minimalist",
    primary_color: "hsl(0, 0%, 90%)",
    secondary_color: "hsl(0, 0%, 70%)",
    gradient_stops: [
        stop("hsl(0, 0%, 5%)", 0),
        stop("hsl(0, 0%, 10%)", 50),
        stop("hsl(0, 0%, 5%)", 100),
    ],
    bg_overlay: "rgba(0, 0, 0, 0.85)",
    default_bg_image: "https://i.pinimg.com/1200x/59/88/71/598871b7e69cf05d08c8cd19291428a6.jpg",
};

static HACKER: ThemeConfig = ThemeConfig {
    name: "Hacker",
    primary_color: "hsl(120, 100%, 40%)",
    secondary_color: "hsl(120, 80%, 30%)",
    gradient_stops: [
        stop("hsl(120, 50%, 2%)", 0),
        stop("hsl(120, 40%, 4%)", 50),
        stop("hsl(120, 30%, 3%)", 100),
    ],
    bg_overlay: "rgba(0, 10, 0, 0.8)",
    default_bg_image: "https://i.pinimg.com/736x/fc/d1/44/fcd1441160775d3ea60466caa7137385.jpg",
};

static SPACE: ThemeConfig = ThemeConfig {
    name: "Space",
    primary_color: "hsl(220, 100%, 65%)",
    secondary_color: "hsl(260, 80%, 55%)",
    gradient_stops: [
        stop("hsl(240, 50%, 4%)", 0),
        stop("hsl(260, 40%, 8%)", 50),
        stop("hsl(220, 50%, 6%)", 100),
    ],
    bg_overlay: "rgba(0, 0, 20, 0.7)",
    default_bg_image: "https://i.pinimg.com/1200x/d4/4f/e4/d44fe48c5820fbfb9eaab94f75989cb2.jpg",
};

static ANIME: ThemeConfig = ThemeConfig {
    name: "Anime",
    primary_color: "hsl(330, 100%, 65%)",
    secondary_color: "hsl(280, 100%, 60%)",
    gradient_stops: [
        stop("hsl(320, 40%, 5%)", 0),
        stop("hsl(280, 35%, 8%)", 50),
        stop("hsl(330, 40%, 6%)", 100),
    ],
    bg_overlay: "rgba(20, 0, 15, 0.7)",
    default_bg_image: "https://i.pinimg.com/736x/3b/35/03/3b350343a7acecfa64d34cf2bb9c8abf.jpg",
};

/// Theme for a personality. Total: every key has an entry.
pub fn lookup(personality: Personality) -> &'static ThemeConfig {
    match personality {
        Personality::Batman => &BATMAN,
        Personality::Ironman => &IRONMAN,
        Personality::Cyberpunk => &CYBERPUNK,
        Personality::Minimalist => &MINIMALIST,
        Personality::Hacker => &HACKER,
        Personality::Space => &SPACE,
        Personality::Anime => &ANIME,
    }
}

/// Pre-made background offered for one or more personalities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub personalities: &'static [Personality],
}

const fn template(
    id: &'static str,
    name: &'static str,
    url: &'static str,
    personalities: &'static [Personality],
) -> BackgroundTemplate {
    BackgroundTemplate {
        id,
        name,
        url,
        personalities,
    }
}

pub static BACKGROUND_TEMPLATES: [BackgroundTemplate; 14] = [
    template("batman-silhouette", "Dark Knight", "https://images.unsplash.com/photo-1534809027769-b00d750a6bac?w=800&q=80", &[Personality::Batman]),
    template("batman-city", "Gotham City", "https://images.unsplash.com/photo-1519501025264-65ba15a82390?w=800&q=80", &[Personality::Batman]),
    template("iron-tech", "Tech Lab", "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800&q=80", &[Personality::Ironman]),
    template("iron-fire", "Fire & Gold", "https://images.unsplash.com/photo-1557682250-33bd709cbe85?w=800&q=80", &[Personality::Ironman]),
    template("cyber-neon", "Neon City", "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=800&q=80", &[Personality::Cyberpunk]),
    template("cyber-grid", "Digital Grid", "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80", &[Personality::Cyberpunk]),
    template("minimal-abstract", "Abstract", "https://images.unsplash.com/photo-1553095066-5014bc7b7f2d?w=800&q=80", &[Personality::Minimalist]),
    template("minimal-clean", "Clean Lines", "https://images.unsplash.com/photo-1557682224-5b8590cd9ec5?w=800&q=80", &[Personality::Minimalist]),
    template("hacker-matrix", "Matrix", "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=800&q=80", &[Personality::Hacker]),
    template("hacker-code", "Code Stream", "https://images.unsplash.com/photo-1544256718-3bcf237f3974?w=800&q=80", &[Personality::Hacker]),
    template("space-galaxy", "Galaxy", "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=800&q=80", &[Personality::Space]),
    template("space-nebula", "Nebula", "https://images.unsplash.com/photo-1465101162946-4377e57745c3?w=800&q=80", &[Personality::Space]),
    template("anime-sunset", "Sunset", "https://images.unsplash.com/photo-1578632767115-351597cf2477?w=800&q=80", &[Personality::Anime]),
    template("anime-sakura", "Sakura", "https://images.unsplash.com/photo-1522383225653-ed111181a951?w=800&q=80", &[Personality::Anime]),
];

/// Templates offered for a personality, in display order
pub fn templates_for(personality: Personality) -> impl Iterator<Item = &'static BackgroundTemplate> {
    BACKGROUND_TEMPLATES
        .iter()
        .filter(move |t| t.personalities.contains(&personality))
}

pub fn template_by_id(id: &str) -> Option<&'static BackgroundTemplate> {
    BACKGROUND_TEMPLATES.iter().find(|t| t.id == id)
}

/// Background the card is drawn with.
///
/// Custom upload beats the selected template, which beats the theme default.
pub fn resolve_background(profile: &WrapProfile) -> &str {
    profile
        .custom_bg_image
        .as_deref()
        .or(profile.background_image.as_deref())
        .unwrap_or(lookup(profile.personality).default_bg_image)
}
