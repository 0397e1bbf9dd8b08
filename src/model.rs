use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for fields the listing page did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Platforms searched during social enrichment, each bound to the domain the
/// classifier matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Tiktok,
    Facebook,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::Twitter,
        Platform::Tiktok,
        Platform::Facebook,
        Platform::Youtube,
    ];

    pub fn domain(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram.com",
            Platform::Twitter => "twitter.com",
            Platform::Tiktok => "tiktok.com",
            Platform::Facebook => "facebook.com",
            Platform::Youtube => "youtube.com",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the member listing, plus confirmed social links.
///
/// Field order here is the serialization order of the JSON file. `socials`
/// maps a platform to its confirmed profile URL; `None` records an explicit
/// operator skip and is re-queried on the next run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub faction: Option<String>,
    pub district: String,
    pub email: String,
    pub roles: Vec<String>,
    pub profile_url: String,
    pub image_url: String,
    #[serde(default)]
    pub socials: BTreeMap<Platform, Option<String>>,
}

impl MemberRecord {
    /// True when a confirmed (non-skip) link is already stored for `platform`.
    pub fn has_social(&self, platform: Platform) -> bool {
        matches!(self.socials.get(&platform), Some(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Platform::Tiktok).unwrap();
        assert_eq!(json, "\"tiktok\"");
    }

    #[test]
    fn skip_entry_is_not_a_confirmed_social() {
        let mut m = MemberRecord {
            id: "1".into(),
            name: "X".into(),
            faction: None,
            district: NOT_AVAILABLE.into(),
            email: NOT_AVAILABLE.into(),
            roles: vec![],
            profile_url: NOT_AVAILABLE.into(),
            image_url: NOT_AVAILABLE.into(),
            socials: BTreeMap::new(),
        };
        m.socials.insert(Platform::Instagram, None);
        assert!(!m.has_social(Platform::Instagram));
        m.socials
            .insert(Platform::Instagram, Some("https://instagram.com/x".into()));
        assert!(m.has_social(Platform::Instagram));
    }
}
