//! Application messages

use std::path::PathBuf;

use carousel::ui::IndexUpdate;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Carousel ============
    /// Index update for a carousel that owns its index
    Carousel(IndexUpdate),
    /// Next slide requested while the application owns the index (bound)
    SlideIndexIncrement(usize),
    /// Previous slide requested while the application owns the index (bound)
    SlideIndexDecrement(usize),
    /// Click on the carousel frame outside the navigation buttons
    FrameClicked,

    // ============ Images ============
    /// Remote slide image downloaded (url, local path)
    ImageLoaded(String, PathBuf),
    /// Remote slide image failed to download (url, error)
    ImageFailed(String, String),

    // ============ Settings ============
    /// Switch between dark and light mode
    ToggleDarkMode,
    /// Save settings
    SaveSettings,
}
