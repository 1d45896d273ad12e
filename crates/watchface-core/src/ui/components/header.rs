// src/ui/components/header.rs
//! Settings header: exit control plus tile title

use crate::ui::components::{Button, TextComponent, TextSize};
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ButtonVariant, ColorPalette};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Side length of the square exit control
pub const EXIT_ICON_SIZE: u32 = 32;

/// Header shown at the top of every settings tile.
///
/// The exit control sits at the left edge and emits [`Action::GoBack`] when
/// clicked; the title follows it. Only the exit control reacts to touch.
pub struct SettingsHeader {
    bounds: Rectangle,
    exit_button: Button,
    title: TextComponent,
}

impl SettingsHeader {
    pub fn new(bounds: Rectangle, title: &str, palette: ColorPalette) -> Self {
        let exit_bounds = Rectangle::new(
            bounds.top_left,
            Size::new(EXIT_ICON_SIZE, EXIT_ICON_SIZE.min(bounds.size.height)),
        );
        let exit_button = Button::new(exit_bounds, "<", Action::GoBack)
            .with_palette(palette)
            .with_variant(ButtonVariant::Outline)
            .with_border_radius(EXIT_ICON_SIZE / 2);

        let gap = EXIT_ICON_SIZE as i32 + 8;
        let title_bounds = Rectangle::new(
            bounds.top_left + Point::new(gap, 0),
            Size::new(
                bounds.size.width.saturating_sub(gap as u32),
                bounds.size.height,
            ),
        );
        let title = TextComponent::new(title_bounds, title, TextSize::Large);

        Self {
            bounds,
            exit_button,
            title,
        }
    }

    pub fn title(&self) -> &str {
        self.title.text()
    }

    pub fn exit_bounds(&self) -> Rectangle {
        self.exit_button.bounds()
    }

    /// Undo the pressed look left on the exit control by the last click.
    pub fn release(&mut self) {
        self.exit_button.release();
    }

    pub fn is_pressed(&self) -> bool {
        self.exit_button.is_pressed()
    }
}

impl Drawable for SettingsHeader {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.exit_button.draw(display)?;
        self.title.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.exit_button.is_dirty() || self.title.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.exit_button.mark_clean();
        self.title.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.exit_button.mark_dirty();
        self.title.mark_dirty();
    }
}

impl Touchable for SettingsHeader {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        self.exit_button.handle_touch(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> SettingsHeader {
        SettingsHeader::new(
            Rectangle::new(Point::new(10, 36), Size::new(220, 32)),
            "Watchface setup",
            ColorPalette::default(),
        )
    }

    #[test]
    fn exit_control_goes_back() {
        let mut h = header();
        let result = h.handle_touch(TouchEvent::Press(TouchPoint::new(20, 40)));
        assert_eq!(result, TouchResult::Action(Action::GoBack));
    }

    #[test]
    fn title_area_is_inert() {
        let mut h = header();
        let result = h.handle_touch(TouchEvent::Press(TouchPoint::new(150, 50)));
        assert_eq!(result, TouchResult::NotHandled);
        assert_eq!(h.title(), "Watchface setup");
    }
}
