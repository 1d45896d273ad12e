// src/ui/components/button.rs
//! Button component with various styles and states

use crate::ui::core::{
    Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable,
};
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

/// Button state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonState {
    Normal,
    Pressed,
}

/// Button component with label and action
///
/// An interactive button that emits its [`Action`] when pressed. The look
/// comes either from a [`ButtonVariant`] resolved against the palette, or
/// from an explicit [`Style`] copied from a style provider.
///
/// # Touch Behavior
/// - Triggers action immediately on press
/// - Updates pressed state during drag, without triggering
///
/// # Examples
/// ```ignore
/// let button = Button::new(
///     Rectangle::new(Point::new(0, 128), Size::new(115, 40)),
///     "reload and test",
///     Action::ReloadAndTest,
/// )
/// .with_style(theme.button_style());
/// ```
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<32>,
    action: Action,
    state: ButtonState,
    variant: ButtonVariant,
    palette: ColorPalette,
    style: Option<Style>,
    border_radius: u32,
    dirty: bool,
}

impl Button {
    /// Create a new button with the specified bounds, label, and action.
    ///
    /// Labels longer than 32 bytes are cut at the last whole character.
    pub fn new(bounds: Rectangle, label: &str, action: Action) -> Self {
        let mut label_string = heapless::String::new();
        for c in label.chars() {
            if label_string.push(c).is_err() {
                break;
            }
        }

        Self {
            bounds,
            label: label_string,
            action,
            state: ButtonState::Normal,
            variant: ButtonVariant::Primary,
            palette: ColorPalette::default(),
            style: None,
            border_radius: 8,
            dirty: true,
        }
    }

    /// Set the button's visual variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self.dirty = true;
        self
    }

    /// Set the button's color palette.
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    /// Use an explicit style instead of the variant's.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self.dirty = true;
        self
    }

    /// Set the border radius for rounded corners.
    ///
    /// Default is 8 pixels.
    pub fn with_border_radius(mut self, radius: u32) -> Self {
        self.border_radius = radius;
        self.dirty = true;
        self
    }

    /// Return to the normal look after a click.
    pub fn release(&mut self) {
        if self.state == ButtonState::Pressed {
            self.state = ButtonState::Normal;
            self.dirty = true;
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, ButtonState::Pressed)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> Action {
        self.action
    }

    fn get_style(&self) -> Style {
        let base_style = self
            .style
            .unwrap_or_else(|| self.variant.to_style(&self.palette));

        match self.state {
            ButtonState::Normal => base_style,
            ButtonState::Pressed => {
                // Darken the background for pressed state
                let bg = base_style.background_color.unwrap_or(self.palette.primary);
                let darkened = Rgb565::new(
                    bg.r().saturating_sub(4),
                    bg.g().saturating_sub(8),
                    bg.b().saturating_sub(4),
                );
                base_style.with_background(darkened)
            }
        }
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = self.get_style();

        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let text_color = style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(&FONT_6X10, text_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(&self.label, self.bounds.center(), character_style, text_style)
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

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.state = ButtonState::Pressed;
                self.dirty = true;

                TouchResult::Action(self.action)
            }
            TouchEvent::Press(_) => {
                // A press elsewhere releases a button left pressed by an earlier click
                self.release();
                TouchResult::NotHandled
            }
            TouchEvent::Drag(point) => {
                let new_state = if self.contains_point(point) {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                };

                if self.state != new_state {
                    self.state = new_state;
                    self.dirty = true;
                }
                TouchResult::Handled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(
            Rectangle::new(Point::new(10, 10), Size::new(100, 40)),
            "default",
            Action::DefaultTheme,
        )
    }

    #[test]
    fn press_inside_emits_action() {
        let mut b = button();
        let result = b.handle_touch(TouchEvent::Press(TouchPoint::new(20, 20)));
        assert_eq!(result, TouchResult::Action(Action::DefaultTheme));
        assert!(b.is_pressed());
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut b = button();
        let result = b.handle_touch(TouchEvent::Press(TouchPoint::new(200, 200)));
        assert_eq!(result, TouchResult::NotHandled);
    }

    #[test]
    fn drag_never_emits_action() {
        let mut b = button();
        let result = b.handle_touch(TouchEvent::Drag(TouchPoint::new(20, 20)));
        assert_eq!(result, TouchResult::Handled);
        assert!(b.is_pressed());
    }

    #[test]
    fn release_clears_pressed_state() {
        let mut b = button();
        b.handle_touch(TouchEvent::Press(TouchPoint::new(20, 20)));
        b.mark_clean();

        b.release();
        assert!(!b.is_pressed());
        assert!(b.is_dirty());

        b.mark_clean();
        b.release();
        assert!(!b.is_dirty());
    }

    #[test]
    fn long_label_is_truncated() {
        let b = Button::new(
            Rectangle::zero(),
            "a label that is far too long for the button",
            Action::GoBack,
        );
        assert_eq!(b.label().len(), 32);
    }
}
