//! Fields shared by every object type, plus the image and audio shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A field that holds either one value or an ordered list of them.
///
/// Both forms flatten to the same property path, once per element.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        OneOrMany::One(value)
    }
}

/// Either a bare URL or a structured object describing it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum UrlOr<T> {
    Url(String),
    Detailed(T),
}

impl<T> From<&str> for UrlOr<T> {
    fn from(url: &str) -> Self {
        UrlOr::Url(url.to_string())
    }
}

/// A pixel dimension, given either as a number or as text (`"1200"`).
///
/// Text is passed through unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Text(String),
}

impl From<u32> for Dimension {
    fn from(pixels: u32) -> Self {
        Dimension::Pixels(pixels)
    }
}

/// An Open Graph datetime: a full RFC 3339 timestamp or a bare date.
///
/// Timestamps are emitted in UTC (`2024-05-01T12:00:00Z`), dates as
/// `2024-05-01`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum Timestamp {
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp::DateTime(at)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp::Date(date)
    }
}

/// `og:image` with its structured attributes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Image {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,

    /// MIME type, e.g. `image/png`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    /// Description of what is in the image (not a caption).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// `og:audio` with its structured attributes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Audio {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// A locale entry. Alternates flatten to `og:locale:alternate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Locale {
    Primary(String),
    Alternate { alternate: String },
}

/// The three mandatory fields every object carries, plus the optional extras.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Basic {
    pub title: String,
    pub image: UrlOr<Image>,
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<UrlOr<Audio>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Word before the title in a sentence ("a", "an", "the", "auto" or "").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub determiner: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<OneOrMany<Locale>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl Basic {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<UrlOr<Image>>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            url: url.into(),
            audio: None,
            description: None,
            determiner: None,
            locale: None,
            site_name: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn with_audio(mut self, audio: impl Into<UrlOr<Audio>>) -> Self {
        self.audio = Some(audio.into());
        self
    }

    pub fn with_locale(mut self, locale: OneOrMany<Locale>) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl From<Image> for UrlOr<Image> {
    fn from(image: Image) -> Self {
        UrlOr::Detailed(image)
    }
}

impl From<Audio> for UrlOr<Audio> {
    fn from(audio: Audio) -> Self {
        UrlOr::Detailed(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_accepts_url_or_object() {
        let bare: UrlOr<Image> = serde_json::from_value(json!("http://i")).unwrap();
        assert_eq!(bare, UrlOr::Url("http://i".into()));

        let detailed: UrlOr<Image> =
            serde_json::from_value(json!({ "url": "http://i", "type": "image/png", "width": 400 }))
                .unwrap();
        let UrlOr::Detailed(image) = detailed else {
            panic!("expected structured image");
        };
        assert_eq!(image.mime_type.as_deref(), Some("image/png"));
        assert_eq!(image.width, Some(Dimension::Pixels(400)));
    }

    #[test]
    fn dimensions_accept_text_form() {
        let image: Image =
            serde_json::from_value(json!({ "url": "http://i", "width": "1200", "height": 630 }))
                .unwrap();
        assert_eq!(image.width, Some(Dimension::Text("1200".into())));
        assert_eq!(image.height, Some(Dimension::Pixels(630)));

        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(value, json!({ "url": "http://i", "width": "1200", "height": 630 }));
    }

    #[test]
    fn timestamps_accept_full_datetime_or_bare_date() {
        let full: Timestamp = serde_json::from_value(json!("2024-05-01T12:00:00+02:00")).unwrap();
        assert_eq!(serde_json::to_value(full).unwrap(), json!("2024-05-01T10:00:00Z"));

        let date: Timestamp = serde_json::from_value(json!("2024-05-01")).unwrap();
        assert_eq!(
            date,
            Timestamp::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert_eq!(serde_json::to_value(date).unwrap(), json!("2024-05-01"));

        assert!(serde_json::from_value::<Timestamp>(json!("yesterday")).is_err());
    }

    #[test]
    fn locale_alternates_deserialize() {
        let locale: OneOrMany<Locale> =
            serde_json::from_value(json!(["en_US", { "alternate": "fr_FR" }])).unwrap();
        assert_eq!(
            locale,
            OneOrMany::Many(vec![
                Locale::Primary("en_US".into()),
                Locale::Alternate {
                    alternate: "fr_FR".into()
                },
            ])
        );
    }

    #[test]
    fn optional_fields_are_not_serialized() {
        let basic = Basic::new("T", "http://i", "http://u");
        let value = serde_json::to_value(&basic).unwrap();
        assert_eq!(
            value,
            json!({ "title": "T", "image": "http://i", "url": "http://u" })
        );
    }
}
