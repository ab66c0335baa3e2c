use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const DEFAULT_PROFILE: &str = "profile.json";

static GLOBAL_PROFILE: LazyLock<Result<Profile, ContentError>> =
    LazyLock::new(|| Profile::load(DEFAULT_PROFILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("Invalid content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub splash_text: String,
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub tagline: String,
    pub portrait: String,
    pub personal_info: Vec<InfoItem>,
    pub remote_available: bool,
    /// Number of `personal_info` rows shown before the Remote row; all of them if unset.
    #[serde(default)]
    pub remote_after: Option<usize>,
    #[serde(default)]
    pub resume: Option<String>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
    pub works: Vec<Work>,
    pub contact: Contact,
    pub socials: Vec<Social>,
    pub welcome: Welcome,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoItem {
    pub label: String,
    pub value: String,
}

/// One row of the personal info grid.
#[derive(Debug, Clone, Copy)]
pub enum InfoRow<'a> {
    Item(&'a InfoItem),
    Remote(bool),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub date: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    pub percent: u8,
}

impl Skill {
    /// CSS width of the filled part of the bar, e.g. `96%`.
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub image: String,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub pitch: String,
    pub email: String,
    pub phone: String,
    pub display_phone: String,
    pub location: String,
    /// Third-party form relay the contact and newsletter forms post to.
    pub endpoint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Facebook,
    Instagram,
    LinkedIn,
    YouTube,
}

impl SocialKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::YouTube => "YouTube",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Facebook => "extra-facebook",
            Self::Instagram => "extra-instagram",
            Self::LinkedIn => "extra-linkedin",
            Self::YouTube => "extra-youtube",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Social {
    pub kind: SocialKind,
    pub href: String,
    #[serde(default)]
    pub show_in_menu: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Welcome {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub bio: String,
    pub copyright_holder: String,
    pub copyright_since: i32,
}

impl Profile {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
        let text = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let profile: Profile =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.first_name.trim().is_empty() {
            return Err(ContentError::Invalid("first name is empty".to_string()));
        }
        if let Some(skill) = self.skills.iter().find(|s| s.percent > 100) {
            return Err(ContentError::Invalid(format!(
                "skill '{}' is above 100% ({})",
                skill.label, skill.percent
            )));
        }
        if let Some(at) = self.remote_after {
            if at > self.personal_info.len() {
                return Err(ContentError::Invalid(format!(
                    "remote_after ({at}) is past the {} personal info rows",
                    self.personal_info.len()
                )));
            }
        }
        if !self.contact.endpoint.starts_with("https://") {
            return Err(ContentError::Invalid(format!(
                "contact endpoint must be https: {}",
                self.contact.endpoint
            )));
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Personal info rows in display order, with the Remote row slotted in.
    pub fn info_rows(&self) -> Vec<InfoRow<'_>> {
        let at = self
            .remote_after
            .unwrap_or(self.personal_info.len())
            .min(self.personal_info.len());
        let (before, after) = self.personal_info.split_at(at);
        before
            .iter()
            .map(InfoRow::Item)
            .chain(std::iter::once(InfoRow::Remote(self.remote_available)))
            .chain(after.iter().map(InfoRow::Item))
            .collect()
    }

    pub fn menu_socials(&self) -> impl Iterator<Item = &Social> {
        self.socials.iter().filter(|s| s.show_in_menu)
    }
}

/// The site's profile, loaded from the embedded content folder on first use.
pub fn profile() -> Result<&'static Profile, ContentError> {
    GLOBAL_PROFILE.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_json() -> String {
        let file = ContentAssets::get(DEFAULT_PROFILE).expect("profile should be embedded");
        String::from_utf8(file.data.into()).expect("profile should be utf-8")
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = profile().expect("embedded profile should be valid");
        assert_eq!(profile.full_name(), "Sagor Ahmed");
        assert_eq!(profile.personal_info.len(), 11);
        assert_eq!(profile.experience.len(), 4);
        assert_eq!(profile.skills.len(), 6);
        assert_eq!(profile.works.len(), 6);
        assert!(profile.remote_available);
        assert_eq!(
            profile.contact.endpoint,
            "https://formsubmit.co/bdsagordm@gmail.com"
        );
    }

    #[test]
    fn test_menu_socials_subset() {
        let profile = profile().unwrap();
        let kinds = profile.menu_socials().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![SocialKind::Facebook, SocialKind::LinkedIn, SocialKind::YouTube]
        );
        assert_eq!(profile.socials.len(), 4);
    }

    #[test]
    fn test_skill_width() {
        let skill = Skill {
            label: "Video SEO".to_string(),
            percent: 97,
        };
        assert_eq!(skill.width(), "97%");
    }

    #[test]
    fn test_missing_file() {
        let err = Profile::load("nope.json").unwrap_err();
        assert_eq!(err, ContentError::Missing("nope.json".to_string()));
    }

    #[test]
    fn test_malformed_json() {
        let err = Profile::from_json("{ \"first_name\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_rejects_skill_over_100() {
        let text = embedded_json().replace("\"percent\": 96", "\"percent\": 196");
        let err = Profile::from_json(&text).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(msg) if msg.contains("SEO Specialist")));
    }

    #[test]
    fn test_rejects_plain_http_endpoint() {
        let text = embedded_json().replace("https://formsubmit.co", "http://formsubmit.co");
        assert!(matches!(
            Profile::from_json(&text),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_empty_first_name() {
        let text = embedded_json().replace("\"first_name\": \"Sagor\"", "\"first_name\": \"  \"");
        let err = Profile::from_json(&text).unwrap_err();
        assert_eq!(err, ContentError::Invalid("first name is empty".to_string()));
    }

    #[test]
    fn test_remote_row_placement() {
        let profile = profile().unwrap();
        let labels = profile
            .info_rows()
            .into_iter()
            .map(|row| match row {
                InfoRow::Item(item) => item.label.as_str(),
                InfoRow::Remote(_) => "Remote",
            })
            .collect::<Vec<_>>();
        assert_eq!(labels.len(), 12);
        assert_eq!(&labels[9..], ["Language", "Remote", "Hobbies"]);

        let mut moved = profile.clone();
        moved.remote_after = Some(0);
        assert!(matches!(moved.info_rows()[0], InfoRow::Remote(true)));

        moved.remote_after = None;
        assert!(matches!(moved.info_rows().last(), Some(InfoRow::Remote(true))));
    }

    #[test]
    fn test_rejects_remote_after_out_of_range() {
        let text = embedded_json().replace("\"remote_after\": 10", "\"remote_after\": 12");
        assert!(matches!(
            Profile::from_json(&text),
            Err(ContentError::Invalid(msg)) if msg.contains("remote_after")
        ));
    }

    #[test]
    fn test_resume_is_optional() {
        let text = embedded_json().replace(
            "\"resume\": \"/assets/SagorAhmedResume.pdf\",",
            "",
        );
        let profile = Profile::from_json(&text).expect("resume should be optional");
        assert!(profile.resume.is_none());
    }
}
