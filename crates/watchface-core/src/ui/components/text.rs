// src/ui/components/text.rs
//! Text component for displaying a single styled line

use crate::ui::core::Drawable;
use alloc::string::String;
use crate::ui::styling::Style;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text as EgText, TextStyleBuilder};

/// Text size variants
///
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &embedded_graphics::mono_font::ascii::FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }
}

/// Text component for displaying styled text
///
/// The line is vertically centred in its bounds and placed horizontally
/// according to its alignment. The text is kept as given; anything wider
/// than the bounds is clipped by the display, not by the component.
///
/// # Examples
/// ```ignore
/// let info = TextComponent::new(
///     Rectangle::new(Point::new(0, 218), Size::new(240, 30)),
///     "",
///     TextSize::Medium,
/// )
/// .with_alignment(Alignment::Center);
/// ```
pub struct TextComponent {
    bounds: Rectangle,
    text: String,
    size: TextSize,
    alignment: Alignment,
    style: Style,
    dirty: bool,
}

impl TextComponent {
    pub fn new(bounds: Rectangle, text: &str, size: TextSize) -> Self {
        Self {
            bounds,
            text: String::from(text),
            size,
            alignment: Alignment::Left,
            style: Style::default(),
            dirty: true,
        }
    }

    /// Set the text alignment (Left, Center, or Right).
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Update the displayed text.
    ///
    /// Marks the component dirty if the text changed.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.dirty = true;
        }
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pixel size of the current text in this component's font.
    pub fn text_size(&self) -> Size {
        let font = self.size.font();
        let chars = self.text.chars().count() as u32;
        let spacing = font.character_spacing * chars.saturating_sub(1);
        Size::new(
            font.character_size.width * chars + spacing,
            font.character_size.height,
        )
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    fn text_position(&self) -> Point {
        let y = self.bounds.center().y;
        match self.alignment {
            Alignment::Left => Point::new(
                self.bounds.top_left.x + self.style.padding.left as i32,
                y,
            ),
            Alignment::Center => Point::new(self.bounds.center().x, y),
            Alignment::Right => Point::new(
                self.bounds.top_left.x + self.bounds.size.width as i32
                    - self.style.padding.right as i32,
                y,
            ),
        }
    }
}

impl Drawable for TextComponent {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.style.background_color.is_some() {
            self.bounds
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }

        if self.text.is_empty() {
            return Ok(());
        }

        let text_color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.size.font(), text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Middle)
            .build();

        EgText::with_text_style(&self.text, self.text_position(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> TextComponent {
        TextComponent::new(
            Rectangle::new(Point::new(0, 0), Size::new(240, 30)),
            text,
            TextSize::Medium,
        )
    }

    #[test]
    fn set_text_marks_dirty_only_on_change() {
        let mut text = label("ready");
        text.mark_clean();

        text.set_text("ready");
        assert!(!text.is_dirty());

        text.set_text("installing");
        assert!(text.is_dirty());
        assert_eq!(text.text(), "installing");
    }

    #[test]
    fn long_text_is_kept_whole() {
        let long = "é".repeat(40);
        let mut text = label("");
        text.set_text(&long);
        assert_eq!(text.text(), long);
    }

    #[test]
    fn text_size_follows_font_metrics() {
        let text = label("abcd");
        assert_eq!(text.text_size(), Size::new(24, 10));
        assert_eq!(label("").text_size(), Size::new(0, 10));
    }

    #[test]
    fn centered_position_uses_bounds_center() {
        let text = label("x").with_alignment(Alignment::Center);
        assert_eq!(text.text_position(), text.bounds().center());
    }
}
