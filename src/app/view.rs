//! Application view rendering

use carousel::ui::theme;
use carousel::ui::widgets::{Attributes, CarouselProps};
use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let props = CarouselProps::new(&self.deck.slides)
            .default_image_height(self.default_image_height())
            .images(&self.images)
            .attributes(
                Attributes::new()
                    .width(Fill)
                    .padding(16.0)
                    .on_press(Message::FrameClicked),
            );

        let content = column![
            self.header(),
            self.carousel.view(props),
            self.toolbar()
        ]
        .spacing(16)
        .padding(24)
        .max_width(960);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .style(theme::main_content)
            .into()
    }

    fn header(&self) -> Element<'_, Message> {
        let title = text(self.deck.title.as_deref().unwrap_or("Untitled deck"))
            .size(22)
            .font(theme::BOLD);

        let position = if self.deck.is_empty() {
            "No slides".to_string()
        } else {
            format!("{} / {}", self.carousel.index() + 1, self.deck.len())
        };

        let mut header = column![
            row![
                title,
                Space::new().width(Fill),
                text(position).size(14).style(theme::secondary_text),
            ]
            .align_y(Alignment::Center)
        ]
        .spacing(4);

        if let Some(e) = &self.deck_error {
            header = header.push(
                text(format!("Could not open deck, showing the sample: {}", e))
                    .size(12)
                    .style(theme::secondary_text),
            );
        }

        header.into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let owner = if self.carousel.is_external() {
            "Index owned by the application"
        } else {
            "Index owned by the carousel"
        };
        let mode = if self.settings.display.dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        };

        row![
            text(owner).size(12).style(theme::secondary_text),
            Space::new().width(Fill),
            button(text(mode).size(12))
                .padding([6, 12])
                .style(theme::carousel_nav_button)
                .on_press(Message::ToggleDarkMode),
        ]
        .align_y(Alignment::Center)
        .into()
    }
}
