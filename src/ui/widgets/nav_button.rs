//! Navigation button widget
//!
//! A labelled button whose message is produced when it is pressed, not when the
//! view is built. Pass-through [`ButtonAttributes`] land on the iced `button`.

use std::fmt;

use iced::widget::{button, text};
use iced::{Element, Padding};

use crate::ui::theme;
use crate::ui::widgets::ButtonAttributes;

/// Which way a navigation button moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Prev,
    Next,
}

/// A clickable navigation control
pub struct NavButton<'a, Message> {
    pub action: NavAction,
    pub label: &'a str,
    pub attributes: ButtonAttributes,
    on_activate: Box<dyn Fn() -> Message + 'a>,
}

impl<'a, Message> NavButton<'a, Message> {
    pub fn new(action: NavAction, label: &'a str, on_activate: impl Fn() -> Message + 'a) -> Self {
        Self {
            action,
            label,
            attributes: ButtonAttributes::default(),
            on_activate: Box::new(on_activate),
        }
    }

    pub fn attributes(mut self, attributes: ButtonAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Produce the message a press would publish
    pub fn activate(&self) -> Message {
        (self.on_activate)()
    }
}

impl<Message> fmt::Debug for NavButton<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavButton")
            .field("action", &self.action)
            .field("label", &self.label)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl<'a, Message: Clone + 'a> From<NavButton<'a, Message>> for Element<'a, Message> {
    fn from(nav: NavButton<'a, Message>) -> Self {
        let attributes = nav.attributes;
        let mut control = button(text(nav.label).size(14))
            .padding(attributes.padding.unwrap_or(Padding::new(10.0).left(18.0).right(18.0)))
            .style(attributes.style.unwrap_or(theme::carousel_nav_button))
            .on_press_with(nav.on_activate);
        if let Some(width) = attributes.width {
            control = control.width(width);
        }
        control.into()
    }
}
