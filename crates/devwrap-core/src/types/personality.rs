//! Personality - the closed set of visual themes a wrap can wear.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WrapError;

/// A named visual style (palette, gradient, default background).
///
/// Serialized as its lowercase key (`"hacker"`), which is also the suffix of
/// the exported file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Batman,
    Ironman,
    Cyberpunk,
    Minimalist,
    Hacker,
    Space,
    Anime,
}

impl Personality {
    /// Every personality, in selector order
    pub const ALL: [Personality; 7] = [
        Personality::Batman,
        Personality::Ironman,
        Personality::Cyberpunk,
        Personality::Minimalist,
        Personality::Hacker,
        Personality::Space,
        Personality::Anime,
    ];

    /// Stable key used in storage and file names
    pub fn key(&self) -> &'static str {
        match self {
            Personality::Batman => "batman",
            Personality::Ironman => "ironman",
            Personality::Cyberpunk => "cyberpunk",
            Personality::Minimalist => "minimalist",
            Personality::Hacker => "hacker",
            Personality::Space => "space",
            Personality::Anime => "anime",
        }
    }

    /// One-line mood shown under the name in the selector
    pub fn description(&self) -> &'static str {
        match self {
            Personality::Batman => "Dark & mysterious",
            Personality::Ironman => "Bold & futuristic",
            Personality::Cyberpunk => "Glitch aesthetic",
            Personality::Minimalist => "Clean elegance",
            Personality::Hacker => "Matrix terminal",
            Personality::Space => "Cosmic explorer",
            Personality::Anime => "Kawaii vibes",
        }
    }

    /// Human description of the palette
    pub fn colors(&self) -> &'static str {
        match self {
            Personality::Batman => "Neon Green",
            Personality::Ironman => "Red & Gold",
            Personality::Cyberpunk => "Purple & Cyan",
            Personality::Minimalist => "White & Grey",
            Personality::Hacker => "Matrix Green",
            Personality::Space => "Blue & Purple",
            Personality::Anime => "Pink & Purple",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Personality {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Personality::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| WrapError::InvalidInput(format!("unknown personality '{}'", s)))
    }
}
