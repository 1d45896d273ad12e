// src/pages/setup_menu.rs
//! Setup menu tile, the parent screen of the individual settings tiles

use crate::pages::page::Page;
use crate::ui::align;
use crate::ui::core::STATUSBAR_HEIGHT;
use crate::ui::{
    Action, Button, Drawable, PageId, Style, TextComponent, TextSize, Theme, TouchEvent,
    TouchResult, Touchable,
};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

pub struct SetupMenuPage {
    bounds: Rectangle,
    style: Style,
    title: TextComponent,
    watchface_button: Button,
    dirty: bool,
}

impl SetupMenuPage {
    pub fn new(bounds: Rectangle, theme: &Theme) -> Self {
        let style = theme.setup_tile_style();
        let gap = theme.spacing.medium as i32;

        let title_bounds = align::in_top_left(
            Rectangle::new(Point::zero(), Size::new(bounds.size.width, 32)),
            bounds,
            Point::new(0, STATUSBAR_HEIGHT as i32 + gap),
        );
        let title = TextComponent::new(title_bounds, "Setup", TextSize::Large)
            .with_alignment(Alignment::Center);

        let button_bounds = align::out_bottom_mid(
            Rectangle::new(Point::zero(), Size::new(160, 48)),
            title_bounds,
            Point::new(0, gap),
        );
        let watchface_button = Button::new(
            button_bounds,
            "watchface",
            Action::NavigateToPage(PageId::WatchfaceSetup),
        )
        .with_style(theme.button_style());

        Self {
            bounds,
            style,
            title,
            watchface_button,
            dirty: true,
        }
    }
}

impl Page for SetupMenuPage {
    fn id(&self) -> PageId {
        PageId::SetupMenu
    }

    fn title(&self) -> &str {
        self.title.text()
    }

    fn on_activate(&mut self) {
        self.watchface_button.release();
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self.watchface_button.handle_touch(event) {
            TouchResult::Action(action) => Some(action),
            TouchResult::Handled | TouchResult::NotHandled => None,
        }
    }

    fn draw_page<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        Drawable::draw(self, display)
    }

    fn bounds(&self) -> Rectangle {
        Drawable::bounds(self)
    }

    fn is_dirty(&self) -> bool {
        Drawable::is_dirty(self)
    }

    fn mark_clean(&mut self) {
        Drawable::mark_clean(self)
    }

    fn mark_dirty(&mut self) {
        Drawable::mark_dirty(self)
    }
}

impl Drawable for SetupMenuPage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(self.style.to_primitive_style())
            .draw(display)?;

        self.title.draw(display)?;
        self.watchface_button.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.title.is_dirty() || self.watchface_button.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.watchface_button.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TouchPoint;

    #[test]
    fn watchface_entry_navigates_to_setup() {
        let screen = Rectangle::new(Point::zero(), Size::new(240, 240));
        let mut page = SetupMenuPage::new(screen, &Theme::default());

        let center = page.watchface_button.bounds().center();
        let action = page.handle_touch(TouchEvent::Press(TouchPoint::new(
            center.x as u16,
            center.y as u16,
        )));
        assert_eq!(action, Some(Action::NavigateToPage(PageId::WatchfaceSetup)));
    }

    #[test]
    fn returning_to_menu_releases_entry() {
        let screen = Rectangle::new(Point::zero(), Size::new(240, 240));
        let mut page = SetupMenuPage::new(screen, &Theme::default());

        let center = page.watchface_button.bounds().center();
        page.handle_touch(TouchEvent::Press(TouchPoint::new(
            center.x as u16,
            center.y as u16,
        )));
        assert!(page.watchface_button.is_pressed());

        page.on_activate();
        assert!(!page.watchface_button.is_pressed());
    }
}
