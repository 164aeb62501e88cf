//! The root metadata object, discriminated by its `type` field.
//!
//! Each discriminator value selects exactly one payload shape. The payload
//! lives under a key named after the object family (`article`, `music`, ...),
//! next to the basic fields every object carries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    article::Article,
    basic::{Basic, UrlOr},
    book::Book,
    music::{Album, Playlist, RadioStation, Song},
    node::Node,
    product::Product,
    profile::Profile,
    video::{Episode, Movie, VideoBase},
};

/// Namespace the basic fields and `type` are emitted under.
pub const OG_NAMESPACE: &str = "og";

/// The closed set of object-type discriminators.
///
/// Serialized names match the `type` tags on [`Metadata`].
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "product")]
    Product,
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "profile")]
    Profile,
    #[serde(rename = "music.song")]
    MusicSong,
    #[serde(rename = "music.album")]
    MusicAlbum,
    #[serde(rename = "music.playlist")]
    MusicPlaylist,
    #[serde(rename = "music.radio_station")]
    MusicRadioStation,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "video.movie")]
    VideoMovie,
    #[serde(rename = "video.episode")]
    VideoEpisode,
}

impl ObjectType {
    pub const ALL: [ObjectType; 12] = [
        ObjectType::Website,
        ObjectType::Article,
        ObjectType::Product,
        ObjectType::Book,
        ObjectType::Profile,
        ObjectType::MusicSong,
        ObjectType::MusicAlbum,
        ObjectType::MusicPlaylist,
        ObjectType::MusicRadioStation,
        ObjectType::Video,
        ObjectType::VideoMovie,
        ObjectType::VideoEpisode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Website => "website",
            ObjectType::Article => "article",
            ObjectType::Product => "product",
            ObjectType::Book => "book",
            ObjectType::Profile => "profile",
            ObjectType::MusicSong => "music.song",
            ObjectType::MusicAlbum => "music.album",
            ObjectType::MusicPlaylist => "music.playlist",
            ObjectType::MusicRadioStation => "music.radio_station",
            ObjectType::Video => "video",
            ObjectType::VideoMovie => "video.movie",
            ObjectType::VideoEpisode => "video.episode",
        }
    }

    /// Key holding the variant-specific payload, `None` for websites.
    pub fn payload_key(&self) -> Option<&'static str> {
        match self {
            ObjectType::Website => None,
            ObjectType::Article => Some("article"),
            ObjectType::Product => Some("product"),
            ObjectType::Book => Some("book"),
            ObjectType::Profile => Some("profile"),
            ObjectType::MusicSong
            | ObjectType::MusicAlbum
            | ObjectType::MusicPlaylist
            | ObjectType::MusicRadioStation => Some("music"),
            ObjectType::Video | ObjectType::VideoMovie | ObjectType::VideoEpisode => Some("video"),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! detailed_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for UrlOr<$ty> {
                fn from(props: $ty) -> Self {
                    UrlOr::Detailed(props)
                }
            }
        )*
    };
}

detailed_from!(Song, Album, Playlist, RadioStation, VideoBase, Movie, Episode);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WebsiteObject {
    #[serde(flatten)]
    pub basic: Basic,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ArticleObject {
    #[serde(flatten)]
    pub basic: Basic,
    pub article: Article,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductObject {
    #[serde(flatten)]
    pub basic: Basic,
    pub product: Product,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookObject {
    #[serde(flatten)]
    pub basic: Basic,
    pub book: Book,
}

/// Older documents nest the profile payload under `book`; that key is
/// still read, but output always uses `profile`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProfileObject {
    #[serde(flatten)]
    pub basic: Basic,
    #[serde(alias = "book")]
    pub profile: Profile,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MusicObject<P> {
    #[serde(flatten)]
    pub basic: Basic,
    pub music: UrlOr<P>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VideoObject<P> {
    #[serde(flatten)]
    pub basic: Basic,
    pub video: UrlOr<P>,
}

/// A complete metadata object for one web resource.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Metadata {
    #[serde(rename = "website")]
    Website(WebsiteObject),
    #[serde(rename = "article")]
    Article(ArticleObject),
    #[serde(rename = "product")]
    Product(ProductObject),
    #[serde(rename = "book")]
    Book(BookObject),
    #[serde(rename = "profile")]
    Profile(ProfileObject),
    #[serde(rename = "music.song")]
    MusicSong(MusicObject<Song>),
    #[serde(rename = "music.album")]
    MusicAlbum(MusicObject<Album>),
    #[serde(rename = "music.playlist")]
    MusicPlaylist(MusicObject<Playlist>),
    #[serde(rename = "music.radio_station")]
    MusicRadioStation(MusicObject<RadioStation>),
    #[serde(rename = "video")]
    Video(VideoObject<VideoBase>),
    #[serde(rename = "video.movie")]
    VideoMovie(VideoObject<Movie>),
    #[serde(rename = "video.episode")]
    VideoEpisode(VideoObject<Episode>),
}

impl Metadata {
    pub fn website(basic: Basic) -> Self {
        Metadata::Website(WebsiteObject { basic })
    }

    pub fn article(basic: Basic, article: Article) -> Self {
        Metadata::Article(ArticleObject { basic, article })
    }

    pub fn product(basic: Basic, product: Product) -> Self {
        Metadata::Product(ProductObject { basic, product })
    }

    pub fn book(basic: Basic, book: Book) -> Self {
        Metadata::Book(BookObject { basic, book })
    }

    pub fn profile(basic: Basic, profile: Profile) -> Self {
        Metadata::Profile(ProfileObject { basic, profile })
    }

    pub fn song(basic: Basic, music: impl Into<UrlOr<Song>>) -> Self {
        Metadata::MusicSong(MusicObject {
            basic,
            music: music.into(),
        })
    }

    pub fn album(basic: Basic, music: impl Into<UrlOr<Album>>) -> Self {
        Metadata::MusicAlbum(MusicObject {
            basic,
            music: music.into(),
        })
    }

    pub fn playlist(basic: Basic, music: impl Into<UrlOr<Playlist>>) -> Self {
        Metadata::MusicPlaylist(MusicObject {
            basic,
            music: music.into(),
        })
    }

    pub fn radio_station(basic: Basic, music: impl Into<UrlOr<RadioStation>>) -> Self {
        Metadata::MusicRadioStation(MusicObject {
            basic,
            music: music.into(),
        })
    }

    pub fn video(basic: Basic, video: impl Into<UrlOr<VideoBase>>) -> Self {
        Metadata::Video(VideoObject {
            basic,
            video: video.into(),
        })
    }

    pub fn movie(basic: Basic, video: impl Into<UrlOr<Movie>>) -> Self {
        Metadata::VideoMovie(VideoObject {
            basic,
            video: video.into(),
        })
    }

    pub fn episode(basic: Basic, video: impl Into<UrlOr<Episode>>) -> Self {
        Metadata::VideoEpisode(VideoObject {
            basic,
            video: video.into(),
        })
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            Metadata::Website(_) => ObjectType::Website,
            Metadata::Article(_) => ObjectType::Article,
            Metadata::Product(_) => ObjectType::Product,
            Metadata::Book(_) => ObjectType::Book,
            Metadata::Profile(_) => ObjectType::Profile,
            Metadata::MusicSong(_) => ObjectType::MusicSong,
            Metadata::MusicAlbum(_) => ObjectType::MusicAlbum,
            Metadata::MusicPlaylist(_) => ObjectType::MusicPlaylist,
            Metadata::MusicRadioStation(_) => ObjectType::MusicRadioStation,
            Metadata::Video(_) => ObjectType::Video,
            Metadata::VideoMovie(_) => ObjectType::VideoMovie,
            Metadata::VideoEpisode(_) => ObjectType::VideoEpisode,
        }
    }

    pub fn basic(&self) -> &Basic {
        match self {
            Metadata::Website(o) => &o.basic,
            Metadata::Article(o) => &o.basic,
            Metadata::Product(o) => &o.basic,
            Metadata::Book(o) => &o.basic,
            Metadata::Profile(o) => &o.basic,
            Metadata::MusicSong(o) => &o.basic,
            Metadata::MusicAlbum(o) => &o.basic,
            Metadata::MusicPlaylist(o) => &o.basic,
            Metadata::MusicRadioStation(o) => &o.basic,
            Metadata::Video(o) => &o.basic,
            Metadata::VideoMovie(o) => &o.basic,
            Metadata::VideoEpisode(o) => &o.basic,
        }
    }

    /// Build the tree handed to the flattener.
    ///
    /// `type` and the basic fields are nested under [`OG_NAMESPACE`], in that
    /// order; the family payload follows at the root, so an article yields
    /// `og:type`, `og:title`, ..., `article:published_time`, ...
    pub fn to_node(&self) -> serde_json::Result<Node> {
        let payload_key = self.object_type().payload_key();
        let mut og = Vec::new();
        let mut payload = Vec::new();

        if let Node::Mapping(entries) = Node::from(serde_json::to_value(self)?) {
            for (key, node) in entries {
                if Some(key.as_str()) == payload_key {
                    payload.push((key, node));
                } else {
                    og.push((key, node));
                }
            }
        }

        let mut root = Vec::with_capacity(1 + payload.len());
        root.push((OG_NAMESPACE.to_string(), Node::Mapping(og)));
        root.extend(payload);
        Ok(Node::Mapping(root))
    }
}
