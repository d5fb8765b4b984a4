use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Image size variants
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    Poster(PosterSize),   // Film poster (2:3 aspect ratio)
    Profile(ProfileSize), // Person portrait
}

impl ImageSize {
    // Default size constructors for convenience
    /// Default poster size (500px)
    pub const fn poster() -> Self {
        Self::Poster(PosterSize::W500)
    }

    /// Large poster size (780px) for detail views
    pub const fn poster_large() -> Self {
        Self::Poster(PosterSize::W780)
    }

    /// Default profile size (185px)
    pub const fn profile() -> Self {
        Self::Profile(ProfileSize::W185)
    }

    /// CDN size token for this bucket (e.g. "w500")
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Poster(s) => s.as_str(),
            ImageSize::Profile(s) => s.as_str(),
        }
    }

    /// Get the width hint for this size
    pub const fn width(&self) -> Option<u16> {
        match self {
            ImageSize::Poster(s) => s.width(),
            ImageSize::Profile(s) => s.width(),
        }
    }
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSize::Poster(s) => write!(f, "Poster (size: {s})"),
            ImageSize::Profile(s) => write!(f, "Profile (size: {s})"),
        }
    }
}

/// Poster image sizes (2:3 aspect ratio), width-bucketed as served by the
/// upstream image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default, Serialize, Deserialize)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    /// All fixed-width poster sizes for UI enumeration (excluding Original)
    pub const ALL: [PosterSize; 6] = [
        Self::W92,
        Self::W154,
        Self::W185,
        Self::W342,
        Self::W500,
        Self::W780,
    ];

    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W92 => Some(92),
            Self::W154 => Some(154),
            Self::W185 => Some(185),
            Self::W342 => Some(342),
            Self::W500 => Some(500),
            Self::W780 => Some(780),
            Self::Original => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W92 => "w92",
            Self::W154 => "w154",
            Self::W185 => "w185",
            Self::W342 => "w342",
            Self::W500 => "w500",
            Self::W780 => "w780",
            Self::Original => "original",
        }
    }

    /// Parse from the CDN token representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "w92" => Some(Self::W92),
            "w154" => Some(Self::W154),
            "w185" => Some(Self::W185),
            "w342" => Some(Self::W342),
            "w500" => Some(Self::W500),
            "w780" => Some(Self::W780),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

impl Display for PosterSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "Original"),
            other => write!(f, "{}px", other.width().unwrap_or(0)),
        }
    }
}

/// Profile/portrait image sizes
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default, Serialize, Deserialize)]
pub enum ProfileSize {
    W45,
    #[default]
    W185,
    H632,
    Original,
}

impl ProfileSize {
    pub const ALL: [ProfileSize; 3] = [Self::W45, Self::W185, Self::H632];

    pub const fn width(&self) -> Option<u16> {
        match self {
            Self::W45 => Some(45),
            Self::W185 => Some(185),
            Self::H632 | Self::Original => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::W45 => "w45",
            Self::W185 => "w185",
            Self::H632 => "h632",
            Self::Original => "original",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "w45" => Some(Self::W45),
            "w185" => Some(Self::W185),
            "h632" => Some(Self::H632),
            "original" => Some(Self::Original),
            _ => None,
        }
    }
}

impl Display for ProfileSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::W45 => write!(f, "45px"),
            Self::W185 => write!(f, "185px"),
            Self::H632 => write!(f, "632px tall"),
            Self::Original => write!(f, "Original"),
        }
    }
}
