//! Carousel widget
//!
//! Shows one slide at a time with Prev/Next buttons. The carousel does not care
//! who owns the current index: it renders from a [`Binding`] and is meant to be
//! wrapped in an [`IndexController`](crate::ui::IndexController).
//!
//! Navigation always passes the number of slides as the bound, read when the
//! button is pressed. Keeping the index below `slides.len()` is the caller's job
//! in externally owned mode; an index past the end renders a blank slide area.

use iced::widget::{Space, column, container, row};
use iced::{Alignment, Element, Fill, Padding};

use crate::features::ImageCache;
use crate::slide::{ImageHeight, ImageRenderer, SlideRecord};
use crate::ui::index_controller::{Binding, IndexedView};
use crate::ui::theme;
use crate::ui::widgets::{Attributes, ButtonAttributes, NavAction, NavButton, SlideView};

const CONTROLS_SPACING: f32 = 12.0;

/// Everything the carousel renders from, apart from the index
#[derive(Debug)]
pub struct CarouselProps<'a, Message> {
    pub slides: &'a [SlideRecord],
    /// Renderer for slides that do not bring their own
    pub default_image: ImageRenderer,
    /// Height for slides that do not bring their own
    pub default_image_height: ImageHeight,
    /// Local copies of remote images
    pub images: Option<&'a ImageCache>,
    /// Forwarded to the root element
    pub attributes: Attributes<Message>,
    /// Forwarded to the Prev button
    pub prev_attributes: ButtonAttributes,
    /// Forwarded to the Next button
    pub next_attributes: ButtonAttributes,
}

impl<'a, Message> CarouselProps<'a, Message> {
    pub fn new(slides: &'a [SlideRecord]) -> Self {
        Self {
            slides,
            default_image: ImageRenderer::default(),
            default_image_height: ImageHeight::default(),
            images: None,
            attributes: Attributes::default(),
            prev_attributes: ButtonAttributes::default(),
            next_attributes: ButtonAttributes::default(),
        }
    }

    pub fn default_image(mut self, renderer: ImageRenderer) -> Self {
        self.default_image = renderer;
        self
    }

    pub fn default_image_height(mut self, height: ImageHeight) -> Self {
        self.default_image_height = height;
        self
    }

    pub fn images(mut self, images: &'a ImageCache) -> Self {
        self.images = Some(images);
        self
    }

    pub fn attributes(mut self, attributes: Attributes<Message>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn prev_attributes(mut self, attributes: ButtonAttributes) -> Self {
        self.prev_attributes = attributes;
        self
    }

    pub fn next_attributes(mut self, attributes: ButtonAttributes) -> Self {
        self.next_attributes = attributes;
        self
    }

    /// Same attributes on both navigation buttons
    pub fn button_attributes(self, attributes: ButtonAttributes) -> Self {
        self.prev_attributes(attributes).next_attributes(attributes)
    }
}

/// The carousel's view tree before it becomes an [`Element`]
#[derive(Debug)]
pub struct CarouselLayout<'a, Message> {
    pub attributes: Attributes<Message>,
    /// `None` when the index does not point at a slide
    pub slide: Option<SlideView<'a, Message>>,
    /// Height reserved when there is no slide to show
    pub blank_height: ImageHeight,
    pub prev: NavButton<'a, Message>,
    pub next: NavButton<'a, Message>,
}

impl<'a, Message> CarouselLayout<'a, Message> {
    pub fn button(&self, action: NavAction) -> &NavButton<'a, Message> {
        match action {
            NavAction::Prev => &self.prev,
            NavAction::Next => &self.next,
        }
    }
}

/// Slide carousel with Prev/Next navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    pub prev_label: &'static str,
    pub next_label: &'static str,
}

impl Default for Carousel {
    fn default() -> Self {
        Self {
            prev_label: "Prev",
            next_label: "Next",
        }
    }
}

impl Carousel {
    /// Build the view tree for the slide at `binding.index()`
    pub fn layout<'a, Message: 'a>(
        &self,
        props: CarouselProps<'a, Message>,
        binding: Binding<Message>,
    ) -> CarouselLayout<'a, Message> {
        let slides = props.slides;
        let images = props.images;

        let slide = slides.get(binding.index()).map(|record| {
            SlideView::from_record(record, props.default_image, props.default_image_height)
                .local_image(images.and_then(|cache| cache.get(&record.image_url)))
        });

        let prev = {
            let binding = binding.clone();
            NavButton::new(NavAction::Prev, self.prev_label, move || {
                binding.decrement(slides.len())
            })
            .attributes(props.prev_attributes)
        };
        let next = NavButton::new(NavAction::Next, self.next_label, move || {
            binding.increment(slides.len())
        })
        .attributes(props.next_attributes);

        CarouselLayout {
            attributes: props.attributes,
            slide,
            blank_height: props.default_image_height,
            prev,
            next,
        }
    }
}

impl<'a, Message: Clone + 'a> IndexedView<'a, Message> for Carousel {
    type Props = CarouselProps<'a, Message>;

    fn view(&self, props: Self::Props, binding: Binding<Message>) -> Element<'a, Message> {
        self.layout(props, binding).into()
    }
}

impl<'a, Message: Clone + 'a> From<CarouselLayout<'a, Message>> for Element<'a, Message> {
    fn from(layout: CarouselLayout<'a, Message>) -> Self {
        let slide: Element<'a, Message> = match layout.slide {
            Some(slide) => slide.into(),
            None => container(Space::new().width(Fill))
                .width(Fill)
                .height(layout.blank_height.placeholder_length())
                .style(theme::slide_blank)
                .into(),
        };

        let controls = row![
            Element::from(layout.prev),
            Space::new().width(Fill),
            Element::from(layout.next),
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(CONTROLS_SPACING));

        layout.attributes.apply(
            column![slide, controls].spacing(CONTROLS_SPACING),
            theme::carousel_frame,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::index_controller::{IndexController, IndexUpdate};
    use iced::Length;
    use iced::widget::image::{self, Image};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Index(IndexUpdate),
        Increment(usize),
        Decrement(usize),
        FrameClicked,
    }

    fn slides() -> Vec<SlideRecord> {
        vec![
            SlideRecord::new("https://example.com/slide1.png", "Slide 1").attribution("Uno Pizzeria"),
            SlideRecord::new("https://example.com/slide2.png", "Slide 2").attribution("Dos Equis"),
            SlideRecord::new("https://example.com/slide3.png", "Slide 3")
                .attribution("Three Amigos"),
        ]
    }

    fn test_image(handle: image::Handle, _height: ImageHeight) -> Image<image::Handle> {
        iced::widget::image(handle).width(Length::Fixed(1234.0))
    }

    fn uncontrolled() -> IndexController<Carousel, Msg> {
        IndexController::internal("slide_index", Carousel::default(), Msg::Index)
    }

    /// Press a button and deliver its message the way an application's update would
    fn press(controller: &mut IndexController<Carousel, Msg>, slides: &[SlideRecord], action: NavAction) {
        let msg = controller
            .inner()
            .layout(CarouselProps::new(slides), controller.binding())
            .button(action)
            .activate();
        if let Msg::Index(update) = msg {
            controller.update(update).unwrap();
        }
    }

    fn shown(controller: &IndexController<Carousel, Msg>, slides: &[SlideRecord]) -> Option<String> {
        controller
            .inner()
            .layout(CarouselProps::new(slides), controller.binding())
            .slide
            .map(|slide| slide.description.to_string())
    }

    #[test]
    fn test_starts_on_first_slide() {
        let slides = slides();
        let controller = uncontrolled();
        assert_eq!(controller.index(), 0);
        assert_eq!(shown(&controller, &slides).as_deref(), Some("Slide 1"));
    }

    #[test]
    fn test_buttons_are_labelled() {
        let slides = slides();
        let controller = uncontrolled();
        let layout = controller
            .inner()
            .layout(CarouselProps::new(&slides), controller.binding());
        assert_eq!(layout.prev.label, "Prev");
        assert_eq!(layout.prev.action, NavAction::Prev);
        assert_eq!(layout.next.label, "Next");
        assert_eq!(layout.next.action, NavAction::Next);
    }

    #[test]
    fn test_prev_from_first_wraps_to_last() {
        let slides = slides();
        let mut controller = uncontrolled();
        press(&mut controller, &slides, NavAction::Prev);
        assert_eq!(controller.index(), 2);
        assert_eq!(shown(&controller, &slides).as_deref(), Some("Slide 3"));
    }

    #[test]
    fn test_next_from_last_wraps_to_first() {
        let slides = slides();
        let mut controller = uncontrolled();
        press(&mut controller, &slides, NavAction::Prev);
        assert_eq!(controller.index(), 2);

        press(&mut controller, &slides, NavAction::Next);
        assert_eq!(controller.index(), 0);
        assert_eq!(shown(&controller, &slides).as_deref(), Some("Slide 1"));
    }

    #[test]
    fn test_internal_messages_carry_slide_count() {
        let slides = slides();
        let controller = uncontrolled();
        let layout = controller
            .inner()
            .layout(CarouselProps::new(&slides), controller.binding());
        assert_eq!(layout.prev.activate(), Msg::Index(IndexUpdate::Decrement(3)));
        assert_eq!(layout.next.activate(), Msg::Index(IndexUpdate::Increment(3)));
    }

    #[test]
    fn test_external_next_calls_owner_once() {
        let slides = slides();
        let increments = Arc::new(AtomicUsize::new(0));
        let decrements = Arc::new(AtomicUsize::new(0));
        let (inc, dec) = (Arc::clone(&increments), Arc::clone(&decrements));
        let controller: IndexController<Carousel, Msg> = IndexController::external(
            "slide_index",
            Carousel::default(),
            1,
            move |bound| {
                inc.fetch_add(1, Ordering::SeqCst);
                Msg::Increment(bound)
            },
            move |bound| {
                dec.fetch_add(1, Ordering::SeqCst);
                Msg::Decrement(bound)
            },
        );

        let layout = controller
            .inner()
            .layout(CarouselProps::new(&slides), controller.binding());
        assert_eq!(layout.slide.as_ref().map(|s| s.description), Some("Slide 2"));
        // Building the view must not call the owner
        assert_eq!(increments.load(Ordering::SeqCst), 0);

        assert_eq!(layout.next.activate(), Msg::Increment(slides.len()));
        assert_eq!(increments.load(Ordering::SeqCst), 1);
        assert_eq!(decrements.load(Ordering::SeqCst), 0);

        // Nothing moves until the owner supplies a new index
        assert_eq!(controller.index(), 1);
        assert_eq!(shown(&controller, &slides).as_deref(), Some("Slide 2"));
    }

    #[test]
    fn test_external_prev_passes_slide_count() {
        let slides = slides();
        let mut controller: IndexController<Carousel, Msg> = IndexController::external(
            "slide_index",
            Carousel::default(),
            0,
            Msg::Increment,
            Msg::Decrement,
        );
        let layout = controller
            .inner()
            .layout(CarouselProps::new(&slides), controller.binding());
        assert_eq!(layout.prev.activate(), Msg::Decrement(3));

        controller.supply(1).unwrap();
        assert_eq!(shown(&controller, &slides).as_deref(), Some("Slide 2"));
        controller.supply(0).unwrap();
        assert_eq!(shown(&controller, &slides).as_deref(), Some("Slide 1"));
    }

    #[test]
    fn test_bound_follows_current_slides() {
        let mut slides = slides();
        let controller = uncontrolled();
        slides.push(SlideRecord::new("d.png", "Slide 4"));

        let layout = controller
            .inner()
            .layout(CarouselProps::new(&slides), controller.binding());
        assert_eq!(layout.next.activate(), Msg::Index(IndexUpdate::Increment(4)));
    }

    #[test]
    fn test_same_layout_in_both_modes() {
        let slides = slides();
        let mut internal = uncontrolled();
        internal.update(IndexUpdate::Increment(3)).unwrap();
        let external: IndexController<Carousel, Msg> = IndexController::external(
            "slide_index",
            Carousel::default(),
            1,
            Msg::Increment,
            Msg::Decrement,
        );

        let a = internal
            .inner()
            .layout(CarouselProps::new(&slides), internal.binding());
        let b = external
            .inner()
            .layout(CarouselProps::new(&slides), external.binding());

        let (a_slide, b_slide) = (a.slide.unwrap(), b.slide.unwrap());
        assert_eq!(a_slide.image_url, b_slide.image_url);
        assert_eq!(a_slide.description, b_slide.description);
        assert_eq!(a_slide.attribution, b_slide.attribution);
        assert_eq!(a_slide.image, b_slide.image);
        assert_eq!(a_slide.image_height, b_slide.image_height);
        assert_eq!((a.prev.label, a.prev.action), (b.prev.label, b.prev.action));
        assert_eq!((a.next.label, a.next.action), (b.next.label, b.next.action));
    }

    #[test]
    fn test_default_height_applies_unless_overridden() {
        let mut slides = slides();
        let controller = uncontrolled();
        let height = |slides: &[SlideRecord]| {
            controller
                .inner()
                .layout(
                    CarouselProps::new(slides).default_image_height(ImageHeight::Pixels(500.0)),
                    controller.binding(),
                )
                .slide
                .map(|slide| slide.image_height)
        };

        assert_eq!(height(&slides), Some(ImageHeight::Pixels(500.0)));

        slides[0] = slides[0].clone().image_height(300.0);
        assert_eq!(height(&slides), Some(ImageHeight::Pixels(300.0)));
    }

    #[test]
    fn test_default_renderer_and_override() {
        let slides = slides();
        let controller = uncontrolled();

        let layout = controller.inner().layout(
            CarouselProps::new(&slides)
                .default_image(ImageRenderer(test_image))
                .default_image_height(ImageHeight::Pixels(1234.0)),
            controller.binding(),
        );
        let slide = layout.slide.unwrap();
        assert_eq!(slide.image, ImageRenderer(test_image));
        assert_eq!(slide.image_height, ImageHeight::Pixels(1234.0));

        let custom = vec![
            slides[0]
                .clone()
                .image_renderer(ImageRenderer(test_image))
                .image_height(1234.0),
        ];
        let layout = controller
            .inner()
            .layout(CarouselProps::new(&custom), controller.binding());
        let slide = layout.slide.unwrap();
        assert_eq!(slide.image, ImageRenderer(test_image));
        assert_eq!(slide.image_height, ImageHeight::Pixels(1234.0));
    }

    #[test]
    fn test_attributes_survive_rerenders() {
        let slides = slides();
        let mut controller = uncontrolled();
        let attributes = || {
            Attributes::new()
                .width(640)
                .padding(16.0)
                .style(theme::slide_figure)
                .on_press(Msg::FrameClicked)
        };

        let first = controller
            .inner()
            .layout(CarouselProps::new(&slides).attributes(attributes()), controller.binding());
        assert_eq!(first.attributes.width, Some(Length::Fixed(640.0)));
        assert_eq!(first.attributes.padding, Some(Padding::new(16.0)));
        assert_eq!(first.attributes.on_press, Some(Msg::FrameClicked));
        assert!(first.attributes.style.is_some());
        drop(first);

        // Unrelated changes: another slide and another default height
        controller.update(IndexUpdate::Increment(3)).unwrap();
        let second = controller.inner().layout(
            CarouselProps::new(&slides)
                .default_image_height(ImageHeight::Fill)
                .attributes(attributes()),
            controller.binding(),
        );
        assert_eq!(second.attributes.width, Some(Length::Fixed(640.0)));
        assert_eq!(second.attributes.padding, Some(Padding::new(16.0)));
        assert_eq!(second.attributes.on_press, Some(Msg::FrameClicked));
        assert!(second.attributes.style.is_some());
    }

    #[test]
    fn test_button_attributes_survive_rerenders() {
        let slides = slides();
        let mut controller = uncontrolled();
        let props = || {
            CarouselProps::new(&slides)
                .prev_attributes(ButtonAttributes::default().width(90).padding(4.0))
                .next_attributes(
                    ButtonAttributes::default()
                        .width(120)
                        .style(theme::carousel_nav_button),
                )
        };

        let first = controller
            .inner()
            .layout(props(), controller.binding());
        assert_eq!(first.prev.attributes.width, Some(Length::Fixed(90.0)));
        assert_eq!(first.prev.attributes.padding, Some(Padding::new(4.0)));
        assert!(first.prev.attributes.style.is_none());
        assert_eq!(first.next.attributes.width, Some(Length::Fixed(120.0)));
        assert!(first.next.attributes.style.is_some());
        drop(first);

        controller.update(IndexUpdate::Decrement(3)).unwrap();
        let second = controller
            .inner()
            .layout(props(), controller.binding());
        assert_eq!(second.slide.as_ref().map(|s| s.description), Some("Slide 3"));
        assert_eq!(second.prev.attributes.width, Some(Length::Fixed(90.0)));
        assert_eq!(second.next.attributes.width, Some(Length::Fixed(120.0)));

        let shared = controller.inner().layout(
            CarouselProps::new(&slides).button_attributes(ButtonAttributes::default().width(64)),
            controller.binding(),
        );
        assert_eq!(shared.prev.attributes.width, Some(Length::Fixed(64.0)));
        assert_eq!(shared.next.attributes.width, Some(Length::Fixed(64.0)));
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let slides: Vec<SlideRecord> = Vec::new();
        let mut controller = uncontrolled();

        assert!(shown(&controller, &slides).is_none());
        press(&mut controller, &slides, NavAction::Next);
        press(&mut controller, &slides, NavAction::Prev);
        assert_eq!(controller.index(), 0);
    }

    #[test]
    fn test_out_of_range_index_renders_blank() {
        let slides = slides();
        let controller: IndexController<Carousel, Msg> = IndexController::external(
            "slide_index",
            Carousel::default(),
            7,
            Msg::Increment,
            Msg::Decrement,
        );
        assert!(shown(&controller, &slides).is_none());
    }

    #[test]
    fn test_cached_image_is_used() {
        let slides = slides();
        let controller = uncontrolled();
        let mut images = ImageCache::default();
        images.insert(
            "https://example.com/slide1.png".to_string(),
            std::path::PathBuf::from("/tmp/slide_1.png"),
        );

        let layout = controller.inner().layout(
            CarouselProps::new(&slides).images(&images),
            controller.binding(),
        );
        let slide = layout.slide.unwrap();
        assert_eq!(slide.local_image, Some(std::path::Path::new("/tmp/slide_1.png")));
        assert!(slide.handle().is_some());
    }
}
