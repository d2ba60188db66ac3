//! UI module for the carousel
//!
//! # Architecture
//!
//! - **Index controller** (`index_controller`): generic wrapper that owns or borrows
//!   the current index of the view it wraps
//! - **Widgets** (`widgets`): the carousel and its slide and button parts
//! - **Theme** (`theme`): colors and style functions shared by the widgets

pub mod index_controller;
pub mod theme;
pub mod widgets;

pub use index_controller::{
    Binding, IndexController, IndexError, IndexState, IndexUpdate, IndexedView, Ownership,
};
