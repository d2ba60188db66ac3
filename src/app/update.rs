//! Message update handlers

use carousel::ui::IndexUpdate;
use iced::Task;
use tracing::{debug, error, info, warn};

use super::{App, Message};

impl App {
    /// Handle messages by delegating to the carousel and settings handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_carousel(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        Task::none()
    }

    fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Carousel(update) => {
                if let Err(e) = self.carousel.update(*update) {
                    error!("Carousel update failed: {}", e);
                }
                Some(Task::none())
            }
            Message::SlideIndexIncrement(bound) => {
                self.move_slide(IndexUpdate::Increment(*bound));
                Some(Task::none())
            }
            Message::SlideIndexDecrement(bound) => {
                self.move_slide(IndexUpdate::Decrement(*bound));
                Some(Task::none())
            }
            Message::FrameClicked => {
                self.frame_clicks += 1;
                debug!("Carousel frame clicked ({} times)", self.frame_clicks);
                Some(Task::none())
            }
            Message::ImageLoaded(url, path) => {
                debug!("Slide image ready: {} -> {:?}", url, path);
                self.images.insert(url.clone(), path.clone());
                Some(Task::none())
            }
            Message::ImageFailed(url, e) => {
                warn!("Failed to download slide image {}: {}", url, e);
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Move the application-owned slide index and hand it back to the carousel
    fn move_slide(&mut self, update: IndexUpdate) {
        self.slide_index = update.apply(self.slide_index);
        if let Err(e) = self.carousel.supply(self.slide_index) {
            error!("Carousel rejected slide index: {}", e);
        }
    }

    fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.settings.display.dark_mode = !self.settings.display.dark_mode;
                Some(Task::done(Message::SaveSettings))
            }
            Message::SaveSettings => {
                match self.settings.save() {
                    Ok(()) => info!("Settings saved"),
                    Err(e) => error!("Failed to save settings: {}", e),
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
