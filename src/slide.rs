//! Slide records and per-slide display parameters

use std::fmt;

use iced::widget::image::{self, Image};
use iced::{ContentFit, Fill, Length};
use serde::{Deserialize, Serialize};

/// Height used when neither the slide nor the carousel specifies one
pub const DEFAULT_IMAGE_HEIGHT: f32 = 500.0;

/// Height of a slide image
///
/// Deserializes from a number of pixels or from one of `"500"`, `"500px"`,
/// `"fill"` and `"shrink"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHeight", into = "RawHeight")]
pub enum ImageHeight {
    Pixels(f32),
    Fill,
    Shrink,
}

impl Default for ImageHeight {
    fn default() -> Self {
        Self::Pixels(DEFAULT_IMAGE_HEIGHT)
    }
}

impl ImageHeight {
    pub fn length(self) -> Length {
        match self {
            Self::Pixels(px) => Length::Fixed(px),
            Self::Fill => Length::Fill,
            Self::Shrink => Length::Shrink,
        }
    }

    /// Height to reserve when there is no image to measure
    pub fn placeholder_length(self) -> Length {
        match self {
            Self::Shrink => Length::Fixed(DEFAULT_IMAGE_HEIGHT),
            other => other.length(),
        }
    }
}

impl From<f32> for ImageHeight {
    fn from(px: f32) -> Self {
        Self::Pixels(px)
    }
}

impl std::str::FromStr for ImageHeight {
    type Err = HeightParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "fill" => return Ok(Self::Fill),
            "shrink" => return Ok(Self::Shrink),
            _ => {}
        }

        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        match number.parse::<f32>() {
            Ok(px) if px.is_finite() && px >= 0.0 => Ok(Self::Pixels(px)),
            _ => Err(HeightParseError(s.to_string())),
        }
    }
}

impl fmt::Display for ImageHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{}px", px),
            Self::Fill => f.write_str("fill"),
            Self::Shrink => f.write_str("shrink"),
        }
    }
}

/// Unrecognized image height
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightParseError(pub String);

impl fmt::Display for HeightParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid image height `{}` (expected pixels, \"fill\" or \"shrink\")",
            self.0
        )
    }
}

impl std::error::Error for HeightParseError {}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawHeight {
    Pixels(f32),
    Text(String),
}

impl TryFrom<RawHeight> for ImageHeight {
    type Error = HeightParseError;

    fn try_from(raw: RawHeight) -> Result<Self, Self::Error> {
        match raw {
            RawHeight::Pixels(px) if px.is_finite() && px >= 0.0 => Ok(Self::Pixels(px)),
            RawHeight::Pixels(px) => Err(HeightParseError(px.to_string())),
            RawHeight::Text(text) => text.parse(),
        }
    }
}

impl From<ImageHeight> for RawHeight {
    fn from(height: ImageHeight) -> Self {
        match height {
            ImageHeight::Pixels(px) => RawHeight::Pixels(px),
            other => RawHeight::Text(other.to_string()),
        }
    }
}

/// Builds the image widget for a slide
#[derive(Clone, Copy)]
pub struct ImageRenderer(pub fn(image::Handle, ImageHeight) -> Image<image::Handle>);

impl ImageRenderer {
    pub fn render(self, handle: image::Handle, height: ImageHeight) -> Image<image::Handle> {
        (self.0)(handle, height)
    }
}

impl Default for ImageRenderer {
    fn default() -> Self {
        Self(cover_image)
    }
}

impl PartialEq for ImageRenderer {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

impl fmt::Debug for ImageRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageRenderer({:p})", self.0 as *const ())
    }
}

/// Full-width image cropped to the requested height
pub fn cover_image(handle: image::Handle, height: ImageHeight) -> Image<image::Handle> {
    iced::widget::image(handle)
        .width(Fill)
        .height(height.length())
        .content_fit(ContentFit::Cover)
}

/// One slide of a carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Local path or `http(s)` URL of the image
    #[serde(alias = "img_url")]
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(skip)]
    pub image_renderer: Option<ImageRenderer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<ImageHeight>,
}

impl SlideRecord {
    pub fn new(image_url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            description: description.into(),
            attribution: None,
            image_renderer: None,
            image_height: None,
        }
    }

    pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn image_renderer(mut self, renderer: ImageRenderer) -> Self {
        self.image_renderer = Some(renderer);
        self
    }

    pub fn image_height(mut self, height: impl Into<ImageHeight>) -> Self {
        self.image_height = Some(height.into());
        self
    }

    /// Renderer and height for this slide, each falling back to the default on its own
    pub fn display_params(
        &self,
        default_renderer: ImageRenderer,
        default_height: ImageHeight,
    ) -> (ImageRenderer, ImageHeight) {
        (
            self.image_renderer.unwrap_or(default_renderer),
            self.image_height.unwrap_or(default_height),
        )
    }

    /// Whether the image has to be downloaded before it can be shown
    pub fn is_remote(&self) -> bool {
        is_remote_url(&self.image_url)
    }
}

pub fn is_remote_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
