//! `video` and `video.*` payloads.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::basic::{Dimension, OneOrMany, Timestamp};

/// The bare media descriptor used by plain `video` objects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct VideoBase {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

/// An actor profile URL, or the role played by the preceding actor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Actor {
    Profile(String),
    Role(ActorRole),
}

/// `{ "role": ... }` annotation. Other keys are rejected, not dropped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ActorRole {
    pub role: String,
}

impl Actor {
    pub fn role(role: impl Into<String>) -> Self {
        Actor::Role(ActorRole { role: role.into() })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Movie {
    #[serde(flatten)]
    pub base: VideoBase,

    pub actor: OneOrMany<Actor>,
    pub director: OneOrMany<String>,
    pub writer: OneOrMany<String>,

    /// Length in seconds.
    pub duration: NonZeroU32,

    pub release_date: Timestamp,
    pub tag: OneOrMany<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Episode {
    #[serde(flatten)]
    pub base: VideoBase,

    pub actor: OneOrMany<Actor>,
    pub director: OneOrMany<String>,
    pub writer: OneOrMany<String>,
    pub duration: NonZeroU32,
    pub release_date: Timestamp,
    pub tag: OneOrMany<String>,

    /// The `video.tv_show` this episode belongs to.
    pub series: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_annotation_parses() {
        let actors: OneOrMany<Actor> =
            serde_json::from_value(json!(["http://neo", { "role": "Neo" }])).unwrap();
        assert_eq!(
            actors,
            OneOrMany::Many(vec![Actor::Profile("http://neo".into()), Actor::role("Neo")])
        );
    }

    #[test]
    fn role_with_extra_keys_is_rejected() {
        let result =
            serde_json::from_value::<Actor>(json!({ "role": "Neo", "billing": "lead" }));
        assert!(result.is_err());
    }

    #[test]
    fn base_dimensions_accept_text() {
        let base: VideoBase =
            serde_json::from_value(json!({ "url": "http://v", "width": "1920", "height": 1080 }))
                .unwrap();
        assert_eq!(base.width, Some(Dimension::Text("1920".into())));
        assert_eq!(base.height, Some(Dimension::Pixels(1080)));
    }
}
