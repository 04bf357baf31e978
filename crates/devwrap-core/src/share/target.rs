use std::fmt;
use std::str::FromStr;

use url::Url;

use super::SharePayload;
use crate::error::WrapError;

/// How a network accepts a wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareKind {
    /// Prefilled intent URL with caption and link
    Link,
    /// No posting API; the image is pasted or uploaded by hand
    Image,
}

/// A network offered in the share popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    Twitter,
    LinkedIn,
    Facebook,
    WhatsApp,
    Reddit,
    Instagram,
    TikTok,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 7] = [
        ShareTarget::Twitter,
        ShareTarget::LinkedIn,
        ShareTarget::Facebook,
        ShareTarget::WhatsApp,
        ShareTarget::Reddit,
        ShareTarget::Instagram,
        ShareTarget::TikTok,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::Facebook => "facebook",
            Self::WhatsApp => "whatsapp",
            Self::Reddit => "reddit",
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Twitter => "X (Twitter)",
            Self::LinkedIn => "LinkedIn",
            Self::Facebook => "Facebook",
            Self::WhatsApp => "WhatsApp",
            Self::Reddit => "Reddit",
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
        }
    }

    pub fn kind(&self) -> ShareKind {
        match self {
            Self::Instagram | Self::TikTok => ShareKind::Image,
            _ => ShareKind::Link,
        }
    }

    /// Site opened after the image is copied or saved
    pub fn site_url(&self) -> &'static str {
        match self {
            Self::Twitter => "https://x.com/",
            Self::LinkedIn => "https://www.linkedin.com/feed/",
            Self::Facebook => "https://www.facebook.com/",
            Self::WhatsApp => "https://web.whatsapp.com/",
            Self::Reddit => "https://www.reddit.com/submit",
            Self::Instagram => "https://www.instagram.com/",
            Self::TikTok => "https://www.tiktok.com/upload",
        }
    }

    /// Prefilled share URL. `None` for image networks.
    pub fn intent_url(&self, payload: &SharePayload) -> Option<Url> {
        let text = payload.text.as_str();
        let link = payload.url.as_deref();

        let (base, params): (&str, Vec<(&str, String)>) = match (self, link) {
            (Self::Twitter, _) => {
                let mut params = vec![("text", text.to_string())];
                params.extend(link.map(|u| ("url", u.to_string())));
                ("https://twitter.com/intent/tweet", params)
            }
            (Self::LinkedIn, Some(u)) => (
                "https://www.linkedin.com/sharing/share-offsite/",
                vec![("url", u.to_string())],
            ),
            (Self::LinkedIn, None) => (
                "https://www.linkedin.com/feed/",
                vec![("shareActive", "true".into()), ("text", text.to_string())],
            ),
            (Self::Facebook, _) => {
                let mut params: Vec<(&str, String)> =
                    link.map(|u| ("u", u.to_string())).into_iter().collect();
                params.push(("quote", text.to_string()));
                ("https://www.facebook.com/sharer/sharer.php", params)
            }
            (Self::WhatsApp, _) => ("https://wa.me/", vec![("text", payload.full_text())]),
            (Self::Reddit, _) => {
                let mut params = vec![("title", payload.title.clone())];
                match link {
                    Some(u) => params.push(("url", u.to_string())),
                    None => params.push(("text", text.to_string())),
                }
                ("https://www.reddit.com/submit", params)
            }
            (Self::Instagram | Self::TikTok, _) => return None,
        };

        Url::parse_with_params(base, &params).ok()
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShareTarget {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "x" {
            return Ok(Self::Twitter);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.key() == wanted)
            .ok_or_else(|| WrapError::InvalidInput(format!("Unknown share target: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(url: Option<&str>) -> SharePayload {
        SharePayload {
            title: "My Software Engineer Wrap 2024".into(),
            text: "Check out my 2024 coding stats!".into(),
            url: url.map(str::to_string),
        }
    }

    fn query(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ShareTarget::Instagram.kind(), ShareKind::Image);
        assert_eq!(ShareTarget::TikTok.kind(), ShareKind::Image);
        assert_eq!(ShareTarget::Reddit.kind(), ShareKind::Link);
    }

    #[test]
    fn test_twitter_intent_is_encoded() {
        let url = ShareTarget::Twitter
            .intent_url(&payload(Some("https://example.com/wrap")))
            .unwrap();
        assert!(url.as_str().starts_with("https://twitter.com/intent/tweet?"));
        assert_eq!(query(&url, "text").unwrap(), "Check out my 2024 coding stats!");
        assert_eq!(query(&url, "url").unwrap(), "https://example.com/wrap");
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_linkedin_without_link_uses_feed_text() {
        let url = ShareTarget::LinkedIn.intent_url(&payload(None)).unwrap();
        assert_eq!(url.path(), "/feed/");
        assert!(query(&url, "text").is_some());
    }

    #[test]
    fn test_whatsapp_appends_link_to_text() {
        let url = ShareTarget::WhatsApp
            .intent_url(&payload(Some("https://example.com")))
            .unwrap();
        assert_eq!(
            query(&url, "text").unwrap(),
            "Check out my 2024 coding stats! https://example.com"
        );
    }

    #[test]
    fn test_image_networks_have_no_intent() {
        assert!(ShareTarget::Instagram.intent_url(&payload(None)).is_none());
        assert!(ShareTarget::TikTok.intent_url(&payload(None)).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!("X".parse::<ShareTarget>().unwrap(), ShareTarget::Twitter);
        assert_eq!("tiktok".parse::<ShareTarget>().unwrap(), ShareTarget::TikTok);
        assert!("myspace".parse::<ShareTarget>().is_err());
    }
}
