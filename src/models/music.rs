//! `music.*` payloads.
//!
//! Song lists and album lists mix plain URLs with `disc`/`track` annotations.
//! An annotation sits right after the URL it describes and flattens to a
//! sibling path such as `music:album:disc`.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use super::basic::Timestamp;

/// An entry in a song or album list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Reference {
    Url(String),
    Position(TrackPosition),
}

/// Where the preceding song sits on its album.
///
/// Either number may be given alone or together; unknown keys are rejected.
/// Output order is always `disc` then `track`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct TrackPosition {
    /// Disc number within the album, defaults to 1 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disc: Option<u32>,

    /// Track number relative to the disc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<u32>,
}

impl Reference {
    pub fn url(url: impl Into<String>) -> Self {
        Reference::Url(url.into())
    }

    pub fn disc(disc: u32) -> Self {
        Reference::Position(TrackPosition {
            disc: Some(disc),
            track: None,
        })
    }

    pub fn track(track: u32) -> Self {
        Reference::Position(TrackPosition {
            disc: None,
            track: Some(track),
        })
    }

    pub fn disc_track(disc: u32, track: u32) -> Self {
        Reference::Position(TrackPosition {
            disc: Some(disc),
            track: Some(track),
        })
    }
}

/// A single URL or an annotated list of references.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum References {
    One(String),
    Many(Vec<Reference>),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Song {
    /// Length in seconds.
    pub duration: NonZeroU32,
    pub album: References,
    pub musician: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Album {
    pub song: References,
    pub musician: String,
    pub release_date: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Playlist {
    pub song: References,
    pub creator: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RadioStation {
    pub creator: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn annotated_album_list_keeps_entry_order() {
        let refs: References = serde_json::from_value(json!([
            "http://album/1",
            { "disc": 1 },
            { "track": 4 },
            "http://album/2",
        ]))
        .unwrap();
        assert_eq!(
            refs,
            References::Many(vec![
                Reference::url("http://album/1"),
                Reference::disc(1),
                Reference::track(4),
                Reference::url("http://album/2"),
            ])
        );
    }

    #[test]
    fn song_duration_must_be_positive() {
        let err = serde_json::from_value::<Song>(json!({
            "duration": 0,
            "album": "http://album",
            "musician": "http://artist",
        }));
        assert!(err.is_err());
    }

    #[test]
    fn combined_disc_and_track_keeps_both_numbers() {
        let entry: Reference = serde_json::from_value(json!({ "disc": 2, "track": 7 })).unwrap();
        assert_eq!(entry, Reference::disc_track(2, 7));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({ "disc": 2, "track": 7 })
        );
    }

    #[test]
    fn annotation_with_unknown_key_is_rejected() {
        let result = serde_json::from_value::<Reference>(json!({ "disc": 1, "side": "B" }));
        assert!(result.is_err());
    }

    #[test]
    fn plain_url_list_parses() {
        let refs: References =
            serde_json::from_value(json!(["http://song/1", "http://song/2"])).unwrap();
        assert_eq!(
            refs,
            References::Many(vec![Reference::url("http://song/1"), Reference::url("http://song/2")])
        );
    }
}
