//! Demo application: one deck in a carousel

mod message;
mod state;
mod update;
mod view;

use std::path::PathBuf;

use carousel::features::{Deck, Settings, images};
use carousel::slide::ImageHeight;
use iced::{Task, Theme};
use tracing::{error, info, warn};

pub use message::Message;
pub use state::App;

/// Command-line overrides for the saved settings
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(version, about = "Browse a deck of images in a carousel")]
pub struct Args {
    /// Deck file (JSON) to open
    #[arg(long)]
    pub deck: Option<PathBuf>,
    /// Let the application own the slide index instead of the carousel
    #[arg(long)]
    pub controlled: bool,
    /// Default image height, e.g. 500, 320px, fill
    #[arg(long)]
    pub image_height: Option<ImageHeight>,
}

impl App {
    /// Create new application instance
    pub fn new(args: Args) -> (Self, Task<Message>) {
        // 1. Settings, with command-line overrides
        let mut settings = Settings::load();
        if let Some(deck) = args.deck {
            settings.carousel.deck = Some(deck);
        }
        if args.controlled {
            settings.carousel.controlled = true;
        }
        if let Some(height) = args.image_height {
            settings.carousel.default_image_height = height;
        }

        // 2. Deck
        let (deck, deck_error) = match &settings.carousel.deck {
            Some(path) => match Deck::load_from_file(path) {
                Ok(deck) => {
                    info!("Loaded deck {:?} ({} slides)", path, deck.len());
                    (deck, None)
                }
                Err(e) => {
                    error!("Failed to load deck {:?}: {}", path, e);
                    (Deck::sample(), Some(e.to_string()))
                }
            },
            None => (Deck::sample(), None),
        };

        let mut app = Self::from_parts(settings, deck);
        app.deck_error = deck_error;
        info!(
            "Carousel index is owned {}",
            if app.carousel.is_external() {
                "by the application"
            } else {
                "by the carousel"
            }
        );

        // 3. Download remote slide images
        let task = app.fetch_images();
        (app, task)
    }

    /// Start downloads for remote images not cached yet
    pub fn fetch_images(&self) -> Task<Message> {
        let client = match images::client() {
            Ok(client) => client,
            Err(e) => {
                warn!("No HTTP client, remote slides stay blank: {}", e);
                return Task::none();
            }
        };
        let dir = self.settings.image_cache_dir();

        Task::batch(
            self.deck
                .remote_urls()
                .into_iter()
                .filter(|url| !self.images.contains(url))
                .map(|url| {
                    let url = url.to_string();
                    Task::perform(
                        images::fetch(client.clone(), url.clone(), dir.clone()),
                        move |result| match result {
                            Ok(path) => Message::ImageLoaded(url.clone(), path),
                            Err(e) => Message::ImageFailed(url.clone(), format!("{:#}", e)),
                        },
                    )
                }),
        )
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the deck name
    pub fn title(&self) -> String {
        match &self.deck.title {
            Some(title) => format!("Carousel - {}", title),
            None => "Carousel".to_string(),
        }
    }
}
