//! Image carousel for iced
//!
//! The carousel shows one slide at a time with Prev/Next navigation. Its current
//! index is managed by an [`IndexController`], which either owns the index or
//! forwards every change to the embedding application:
//!
//! ```no_run
//! use carousel::slide::SlideRecord;
//! use carousel::ui::widgets::{Carousel, CarouselProps};
//! use carousel::ui::{IndexController, IndexUpdate};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Carousel(IndexUpdate),
//! }
//!
//! let slides = vec![SlideRecord::new("slides/one.png", "One")];
//! let mut carousel = IndexController::internal("slide_index", Carousel::default(), Message::Carousel);
//!
//! // in `view`
//! let _element: iced::Element<'_, Message> = carousel.view(CarouselProps::new(&slides));
//!
//! // in `update`
//! carousel.update(IndexUpdate::Increment(slides.len())).unwrap();
//! ```

pub mod features;
pub mod slide;
pub mod ui;

pub use slide::{ImageHeight, ImageRenderer, SlideRecord};
pub use ui::widgets::{Carousel, CarouselProps};
pub use ui::{IndexController, IndexUpdate, Ownership};
