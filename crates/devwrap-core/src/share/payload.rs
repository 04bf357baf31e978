use crate::types::WrapProfile;

/// Caption attached to a share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    /// Page to link back to, when one is configured
    pub url: Option<String>,
}

impl SharePayload {
    /// Caption for `profile`; `<period>` is `March 2024` or `2024`.
    ///
    /// Counts are the raw stored numbers, not the compact card format.
    pub fn for_profile(profile: &WrapProfile, page_url: Option<&str>) -> Self {
        let period = profile.period_label();
        Self {
            title: format!("My Software Engineer Wrap {}", period),
            text: format!(
                "Check out my {} coding stats! {} lines of code, {} commits, and {} coffees consumed!",
                period, profile.lines_of_code, profile.commits, profile.coffees_consumed
            ),
            url: page_url.map(str::to_string),
        }
    }

    /// Text followed by the link, for targets with a single text field
    pub fn full_text(&self) -> String {
        match &self.url {
            Some(url) => format!("{} {}", self.text, url),
            None => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PeriodSelection;

    #[test]
    fn test_monthly_caption() {
        let mut profile = WrapProfile::with_period(PeriodSelection::monthly(2024, 3));
        profile.lines_of_code = 25_000;
        profile.commits = 120;
        profile.coffees_consumed = 90;

        let payload = SharePayload::for_profile(&profile, None);
        assert_eq!(payload.title, "My Software Engineer Wrap March 2024");
        assert_eq!(
            payload.text,
            "Check out my March 2024 coding stats! 25000 lines of code, 120 commits, and 90 coffees consumed!"
        );
        assert_eq!(payload.full_text(), payload.text);
    }

    #[test]
    fn test_link_is_appended() {
        let mut profile = WrapProfile::default();
        profile.year = 2023;
        let payload = SharePayload::for_profile(&profile, Some("https://example.com"));
        assert_eq!(payload.title, "My Software Engineer Wrap 2023");
        assert!(payload.full_text().ends_with(" https://example.com"));
    }
}
