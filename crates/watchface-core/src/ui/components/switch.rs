// src/ui/components/switch.rs
//! Labelled on/off switch

use crate::ui::components::{TextComponent, TextSize};
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ColorPalette, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};

/// Switch track size
const TRACK_WIDTH: u32 = 50;
const TRACK_HEIGHT: u32 = 26;

/// Inset of the knob inside the track
const KNOB_INSET: u32 = 3;

/// A container with a text label on the left and a switch on the right.
///
/// A press anywhere inside the container flips the switch and emits the
/// action built by `on_change` from the new state. Drags and presses
/// outside are ignored. [`LabeledSwitch::set_state`] changes the state
/// without emitting anything.
///
/// # Examples
/// ```ignore
/// let switch = LabeledSwitch::new(
///     bounds,
///     "enable watchface",
///     config.watchface_enable,
///     Action::SetWatchfaceEnabled,
/// );
/// ```
pub struct LabeledSwitch {
    bounds: Rectangle,
    label: TextComponent,
    state: bool,
    on_change: fn(bool) -> Action,
    style: Style,
    palette: ColorPalette,
    dirty: bool,
}

impl LabeledSwitch {
    pub fn new(bounds: Rectangle, label: &str, state: bool, on_change: fn(bool) -> Action) -> Self {
        let label_bounds = Rectangle::new(
            bounds.top_left,
            Size::new(
                bounds.size.width.saturating_sub(TRACK_WIDTH + 8),
                bounds.size.height,
            ),
        );

        Self {
            bounds,
            label: TextComponent::new(label_bounds, label, TextSize::Medium),
            state,
            on_change,
            style: Style::default(),
            palette: ColorPalette::default(),
            dirty: true,
        }
    }

    /// Container style (background behind label and switch)
    pub fn with_style(mut self, style: Style) -> Self {
        self.label = self.label.with_style(Style {
            background_color: None,
            ..style
        });
        self.style = style;
        self.dirty = true;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn set_state(&mut self, state: bool) {
        if self.state != state {
            self.state = state;
            self.dirty = true;
        }
    }

    pub fn label(&self) -> &str {
        self.label.text()
    }

    fn track_bounds(&self) -> Rectangle {
        let right = self.bounds.top_left.x + self.bounds.size.width as i32;
        let y = self.bounds.center().y - TRACK_HEIGHT as i32 / 2;
        Rectangle::new(
            Point::new(right - TRACK_WIDTH as i32 - 4, y),
            Size::new(TRACK_WIDTH, TRACK_HEIGHT),
        )
    }
}

impl Drawable for LabeledSwitch {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.style.background_color.is_some() {
            self.bounds
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }

        self.label.draw(display)?;

        let track = self.track_bounds();
        let track_color = if self.state {
            self.palette.primary
        } else {
            self.palette.surface
        };
        RoundedRectangle::with_equal_corners(
            track,
            Size::new(TRACK_HEIGHT / 2, TRACK_HEIGHT / 2),
        )
        .into_styled(PrimitiveStyle::with_fill(track_color))
        .draw(display)?;

        let diameter = TRACK_HEIGHT - 2 * KNOB_INSET;
        let (knob_x, knob_color) = if self.state {
            (
                track.top_left.x + (TRACK_WIDTH - KNOB_INSET - diameter) as i32,
                self.palette.text_primary,
            )
        } else {
            (
                track.top_left.x + KNOB_INSET as i32,
                self.palette.text_secondary,
            )
        };
        Circle::new(
            Point::new(knob_x, track.top_left.y + KNOB_INSET as i32),
            diameter,
        )
        .into_styled(PrimitiveStyle::with_fill(knob_color))
        .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.label.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.label.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for LabeledSwitch {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.state = !self.state;
                self.dirty = true;
                TouchResult::Action((self.on_change)(self.state))
            }
            _ => TouchResult::NotHandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(state: bool) -> LabeledSwitch {
        LabeledSwitch::new(
            Rectangle::new(Point::new(10, 78), Size::new(220, 40)),
            "enable watchface",
            state,
            Action::SetWatchfaceEnabled,
        )
    }

    #[test]
    fn press_flips_state_and_reports_new_value() {
        let mut s = switch(false);
        let result = s.handle_touch(TouchEvent::Press(TouchPoint::new(200, 90)));
        assert_eq!(
            result,
            TouchResult::Action(Action::SetWatchfaceEnabled(true))
        );
        assert!(s.state());

        let result = s.handle_touch(TouchEvent::Press(TouchPoint::new(20, 90)));
        assert_eq!(
            result,
            TouchResult::Action(Action::SetWatchfaceEnabled(false))
        );
        assert!(!s.state());
    }

    #[test]
    fn drag_does_not_toggle() {
        let mut s = switch(true);
        let result = s.handle_touch(TouchEvent::Drag(TouchPoint::new(200, 90)));
        assert_eq!(result, TouchResult::NotHandled);
        assert!(s.state());
    }

    #[test]
    fn set_state_is_silent_and_idempotent() {
        let mut s = switch(false);
        s.mark_clean();
        s.set_state(false);
        assert!(!s.is_dirty());
        s.set_state(true);
        assert!(s.is_dirty());
        assert!(s.state());
    }
}
