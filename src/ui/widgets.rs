//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets take a generic `Message` type
//! - **Inspectable**: Each widget is a plain struct that converts into an `Element`,
//!   so its props can be checked before rendering
//! - **Pass-through**: Root elements accept [`Attributes`] from the embedding application

mod attributes;
pub mod carousel;
pub mod nav_button;
pub mod slide_view;

pub use attributes::{Attributes, ButtonAttributes, ButtonStyle, ContainerStyle};
pub use carousel::{Carousel, CarouselLayout, CarouselProps};
pub use nav_button::{NavAction, NavButton};
pub use slide_view::SlideView;
