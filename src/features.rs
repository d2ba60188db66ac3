//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod deck;
pub mod images;
pub mod settings;

pub use deck::{Deck, DeckError};
pub use images::ImageCache;
pub use settings::{Settings, SettingsError};
