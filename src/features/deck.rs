//! Slide decks
//!
//! A deck is a titled, ordered list of slides stored as JSON:
//!
//! ```json
//! {
//!   "title": "Pizza tour",
//!   "default_image_height": 400,
//!   "slides": [
//!     { "image_url": "https://example.com/slide1.png", "description": "Slide 1" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::slide::{ImageHeight, SlideRecord};

/// An ordered set of slides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: Option<String>,
    /// Overrides the configured default height for this deck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image_height: Option<ImageHeight>,
    pub slides: Vec<SlideRecord>,
}

impl Deck {
    /// Built-in deck shown when no deck file is configured
    pub fn sample() -> Self {
        Self {
            title: Some("Sample deck".to_string()),
            default_image_height: None,
            slides: vec![
                SlideRecord::new("https://example.com/slide1.png", "Slide 1")
                    .attribution("Uno Pizzeria"),
                SlideRecord::new("https://example.com/slide2.png", "Slide 2")
                    .attribution("Dos Equis"),
                SlideRecord::new("https://example.com/slide3.png", "Slide 3")
                    .attribution("Three Amigos"),
            ],
        }
    }

    /// Load a deck from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|e| DeckError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, DeckError> {
        serde_json::from_str(content).map_err(|e| DeckError::Parse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Image URLs that need downloading, without duplicates
    pub fn remote_urls(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = Vec::new();
        for slide in self.slides.iter().filter(|slide| slide.is_remote()) {
            if !urls.contains(&slide.image_url.as_str()) {
                urls.push(&slide.image_url);
            }
        }
        urls
    }
}

/// Errors that can occur while loading a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Io(e) => write!(f, "IO error: {}", e),
            DeckError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for DeckError {}
