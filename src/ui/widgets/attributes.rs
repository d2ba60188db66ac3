//! Pass-through attributes
//!
//! Styling and event hooks an embedding application hands to a widget's root
//! element. Widgets apply them verbatim and never interpret them.

use iced::widget::{button, container, mouse_area};
use iced::{Element, Length, Padding, Theme};

/// Container style function
pub type ContainerStyle = fn(&Theme) -> container::Style;

/// Button style function
pub type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Attributes forwarded to a container root
#[derive(Debug, Clone)]
pub struct Attributes<Message> {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub padding: Option<Padding>,
    pub style: Option<ContainerStyle>,
    /// Click handler unrelated to any control inside the element
    pub on_press: Option<Message>,
}

impl<Message> Default for Attributes<Message> {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            padding: None,
            style: None,
            on_press: None,
        }
    }
}

impl<Message> Attributes<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn style(mut self, style: ContainerStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Wrap `content` in a container carrying these attributes
    ///
    /// `fallback_style` applies only when no style was passed through.
    pub fn apply<'a>(
        self,
        content: impl Into<Element<'a, Message>>,
        fallback_style: ContainerStyle,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'a,
    {
        let mut root = container(content).style(self.style.unwrap_or(fallback_style));
        if let Some(width) = self.width {
            root = root.width(width);
        }
        if let Some(height) = self.height {
            root = root.height(height);
        }
        if let Some(padding) = self.padding {
            root = root.padding(padding);
        }

        match self.on_press {
            Some(message) => mouse_area(root).on_press(message).into(),
            None => root.into(),
        }
    }
}

/// Attributes forwarded to a button
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonAttributes {
    pub width: Option<Length>,
    pub padding: Option<Padding>,
    pub style: Option<ButtonStyle>,
}

impl ButtonAttributes {
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }
}
