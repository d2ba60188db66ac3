//! Slide view widget
//!
//! Renders one slide: the image on top, a caption with the bold description and
//! the optional attribution below. No state, no side effects.

use std::path::Path;

use iced::widget::{Space, column, container, image, row, text};
use iced::{Element, Fill, Padding};

use crate::slide::{ImageHeight, ImageRenderer, SlideRecord, is_remote_url};
use crate::ui::theme;
use crate::ui::widgets::Attributes;

const CAPTION_SIZE: f32 = 15.0;
const CAPTION_PADDING: f32 = 12.0;

/// A single slide, ready to be turned into an [`Element`]
#[derive(Debug, Clone)]
pub struct SlideView<'a, Message> {
    pub image_url: &'a str,
    pub description: &'a str,
    pub attribution: Option<&'a str>,
    pub image: ImageRenderer,
    pub image_height: ImageHeight,
    /// Downloaded copy of a remote image
    pub local_image: Option<&'a Path>,
    pub attributes: Attributes<Message>,
}

impl<'a, Message> SlideView<'a, Message> {
    pub fn new(image_url: &'a str, description: &'a str) -> Self {
        Self {
            image_url,
            description,
            attribution: None,
            image: ImageRenderer::default(),
            image_height: ImageHeight::default(),
            local_image: None,
            attributes: Attributes::default(),
        }
    }

    /// Slide for `record`, with its own renderer and height winning over the defaults
    pub fn from_record(
        record: &'a SlideRecord,
        default_image: ImageRenderer,
        default_image_height: ImageHeight,
    ) -> Self {
        let (image, image_height) = record.display_params(default_image, default_image_height);
        Self {
            attribution: record.attribution.as_deref(),
            image,
            image_height,
            ..Self::new(&record.image_url, &record.description)
        }
    }

    pub fn attribution(mut self, attribution: &'a str) -> Self {
        self.attribution = Some(attribution);
        self
    }

    pub fn image(mut self, renderer: ImageRenderer) -> Self {
        self.image = renderer;
        self
    }

    pub fn image_height(mut self, height: ImageHeight) -> Self {
        self.image_height = height;
        self
    }

    pub fn local_image(mut self, path: Option<&'a Path>) -> Self {
        self.local_image = path;
        self
    }

    pub fn attributes(mut self, attributes: Attributes<Message>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Image handle to draw, if the image is available
    ///
    /// Remote images only resolve once a local copy exists.
    pub fn handle(&self) -> Option<image::Handle> {
        match self.local_image {
            Some(path) => Some(image::Handle::from_path(path)),
            None if is_remote_url(self.image_url) || self.image_url.is_empty() => None,
            None => Some(image::Handle::from_path(self.image_url)),
        }
    }
}

impl<'a, Message: Clone + 'a> From<SlideView<'a, Message>> for Element<'a, Message> {
    fn from(slide: SlideView<'a, Message>) -> Self {
        let picture: Element<'a, Message> = match slide.handle() {
            Some(handle) => slide.image.render(handle, slide.image_height).into(),
            None => container(Space::new().width(Fill))
                .width(Fill)
                .height(slide.image_height.placeholder_length())
                .style(theme::slide_blank)
                .into(),
        };

        let mut caption_line = row![text(slide.description).size(CAPTION_SIZE).font(theme::BOLD)]
            .spacing(6);
        if let Some(attribution) = slide.attribution {
            caption_line = caption_line.push(
                text(attribution)
                    .size(CAPTION_SIZE)
                    .style(theme::secondary_text),
            );
        }
        let caption = container(caption_line)
            .width(Fill)
            .padding(Padding::new(CAPTION_PADDING));

        slide
            .attributes
            .apply(column![picture, caption], theme::slide_figure)
    }
}
