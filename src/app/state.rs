//! Application state definitions

use carousel::features::{Deck, ImageCache, Settings};
use carousel::slide::ImageHeight;
use carousel::ui::IndexController;
use carousel::ui::widgets::Carousel;

use super::message::Message;

/// Name of the index the carousel navigates
pub const SLIDE_INDEX: &str = "slide_index";

/// Main application state
pub struct App {
    pub settings: Settings,
    pub deck: Deck,
    /// Why the configured deck could not be opened
    pub deck_error: Option<String>,
    pub carousel: IndexController<Carousel, Message>,
    /// Slide index, when the application owns it
    pub slide_index: usize,
    /// Downloaded copies of remote slide images
    pub images: ImageCache,
    pub frame_clicks: usize,
}

impl App {
    /// Build the state for a deck, without starting any background work
    pub fn from_parts(settings: Settings, deck: Deck) -> Self {
        let carousel = if settings.carousel.controlled {
            IndexController::external(
                SLIDE_INDEX,
                Carousel::default(),
                0,
                Message::SlideIndexIncrement,
                Message::SlideIndexDecrement,
            )
        } else {
            IndexController::internal(SLIDE_INDEX, Carousel::default(), Message::Carousel)
        };

        Self {
            settings,
            deck,
            deck_error: None,
            carousel,
            slide_index: 0,
            images: ImageCache::default(),
            frame_clicks: 0,
        }
    }

    /// Image height for slides without their own: deck first, then settings
    pub fn default_image_height(&self) -> ImageHeight {
        self.deck
            .default_image_height
            .unwrap_or(self.settings.carousel.default_image_height)
    }
}
