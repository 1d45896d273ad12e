// src/pages/watchface_setup.rs
//! Watchface setup tile
//!
//! Shows a header with an exit control, the "enable watchface" switch, a
//! button row (reload and test, install theme, default) and a status line
//! that the watchface subsystem writes progress and errors into.
//!
//! The page itself performs no work: every control resolves to an
//! [`Action`] that the composition root ([`SetupApp`](crate::app::SetupApp))
//! dispatches to the watchface subsystem and the config store.

use crate::pages::page::Page;
use crate::ui::align;
use crate::ui::core::STATUSBAR_HEIGHT;
use crate::ui::{
    Action, Button, Drawable, LabeledSwitch, PageId, SettingsHeader, Style, TextComponent,
    TextSize, Theme, TouchEvent, TouchResult, Touchable,
};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;

pub const TITLE: &str = "Watchface setup";
pub const ENABLE_LABEL: &str = "enable watchface";
pub const RELOAD_LABEL: &str = "reload and test";
pub const INSTALL_LABEL: &str = "install theme";
pub const DEFAULT_LABEL: &str = "default";

const HEADER_SIZE: Size = Size::new(220, 32);
const SWITCH_SIZE: Size = Size::new(220, 40);
const BUTTON_ROW_HEIGHT: u32 = 90;
const SMALL_BUTTON_SIZE: Size = Size::new(115, 40);
const TALL_BUTTON_SIZE: Size = Size::new(115, 90);
const INFO_HEIGHT: u32 = 30;

pub struct WatchfaceSetupPage {
    bounds: Rectangle,
    tile_style: Style,
    header: SettingsHeader,
    enable_switch: LabeledSwitch,
    button_row: Rectangle,
    reload_button: Button,
    install_button: Button,
    default_button: Button,
    info_row: Rectangle,
    info_label: TextComponent,
    dirty: bool,
}

impl WatchfaceSetupPage {
    /// Build the page into `bounds`, with the switch showing `enabled`.
    ///
    /// The tile and button styles are copied from `theme` at this point;
    /// later theme changes do not reach an already built page.
    pub fn new(bounds: Rectangle, theme: &Theme, enabled: bool) -> Self {
        let tile_style = theme.setup_tile_style();
        let button_style = theme.button_style();
        let gap = theme.spacing.medium as i32;

        let header_bounds = align::in_top_left(
            Rectangle::new(Point::zero(), HEADER_SIZE),
            bounds,
            Point::new(gap, STATUSBAR_HEIGHT as i32 + gap),
        );
        let header = SettingsHeader::new(header_bounds, TITLE, theme.palette);

        let switch_bounds = align::out_bottom_mid(
            Rectangle::new(Point::zero(), SWITCH_SIZE),
            header_bounds,
            Point::new(0, gap),
        );
        let enable_switch = LabeledSwitch::new(
            switch_bounds,
            ENABLE_LABEL,
            enabled,
            Action::SetWatchfaceEnabled,
        )
        .with_style(tile_style)
        .with_palette(theme.palette);

        let button_row = align::out_bottom_mid(
            Rectangle::new(Point::zero(), Size::new(bounds.size.width, BUTTON_ROW_HEIGHT)),
            switch_bounds,
            Point::new(0, gap),
        );

        let reload_button = Button::new(
            align::in_top_left(
                Rectangle::new(Point::zero(), SMALL_BUTTON_SIZE),
                button_row,
                Point::zero(),
            ),
            RELOAD_LABEL,
            Action::ReloadAndTest,
        )
        .with_style(button_style);

        let install_button = Button::new(
            align::in_bottom_left(
                Rectangle::new(Point::zero(), SMALL_BUTTON_SIZE),
                button_row,
                Point::zero(),
            ),
            INSTALL_LABEL,
            Action::InstallTheme,
        )
        .with_style(button_style);

        let default_button = Button::new(
            align::in_right_mid(
                Rectangle::new(Point::zero(), TALL_BUTTON_SIZE),
                button_row,
                Point::zero(),
            ),
            DEFAULT_LABEL,
            Action::DefaultTheme,
        )
        .with_style(button_style);

        let info_row = align::out_bottom_mid(
            Rectangle::new(Point::zero(), Size::new(bounds.size.width, INFO_HEIGHT)),
            button_row,
            Point::zero(),
        );
        let mut info_label = TextComponent::new(info_row, "", TextSize::Medium)
            .with_alignment(Alignment::Center)
            .with_style(tile_style);
        info_label.set_bounds(align::center(
            Rectangle::new(Point::zero(), info_label.text_size()),
            info_row,
            Point::zero(),
        ));

        Self {
            bounds,
            tile_style,
            header,
            enable_switch,
            button_row,
            reload_button,
            install_button,
            default_button,
            info_row,
            info_label,
            dirty: true,
        }
    }

    /// Current position of the enable switch
    pub fn switch_state(&self) -> bool {
        self.enable_switch.state()
    }

    /// Replace the status line text and centre it again in its row.
    pub fn set_info_label(&mut self, text: &str) {
        self.info_label.set_text(text);
        let text_area = Rectangle::new(Point::zero(), self.info_label.text_size());
        self.info_label
            .set_bounds(align::center(text_area, self.info_row, Point::zero()));
    }

    pub fn info_text(&self) -> &str {
        self.info_label.text()
    }

    pub fn header(&self) -> &SettingsHeader {
        &self.header
    }

    pub fn enable_switch(&self) -> &LabeledSwitch {
        &self.enable_switch
    }

    pub fn reload_button(&self) -> &Button {
        &self.reload_button
    }

    pub fn install_button(&self) -> &Button {
        &self.install_button
    }

    pub fn default_button(&self) -> &Button {
        &self.default_button
    }

    /// The row holding the status line
    pub fn info_bounds(&self) -> Rectangle {
        self.info_row
    }

    /// Area currently covered by the status text
    pub fn info_label_bounds(&self) -> Rectangle {
        self.info_label.bounds()
    }
}

impl Page for WatchfaceSetupPage {
    fn id(&self) -> PageId {
        PageId::WatchfaceSetup
    }

    fn title(&self) -> &str {
        TITLE
    }

    fn on_activate(&mut self) {
        self.header.release();
        self.reload_button.release();
        self.install_button.release();
        self.default_button.release();
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        // Every control sees the event so stale pressed states get released
        let results = [
            self.header.handle_touch(event),
            self.enable_switch.handle_touch(event),
            self.reload_button.handle_touch(event),
            self.install_button.handle_touch(event),
            self.default_button.handle_touch(event),
        ];

        results.into_iter().find_map(|result| match result {
            TouchResult::Action(action) => Some(action),
            TouchResult::Handled | TouchResult::NotHandled => None,
        })
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

impl Drawable for WatchfaceSetupPage {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(self.tile_style.to_primitive_style())
            .draw(display)?;

        self.header.draw(display)?;
        self.enable_switch.draw(display)?;

        self.button_row
            .into_styled(self.tile_style.to_primitive_style())
            .draw(display)?;
        self.reload_button.draw(display)?;
        self.install_button.draw(display)?;
        self.default_button.draw(display)?;

        self.info_row
            .into_styled(self.tile_style.to_primitive_style())
            .draw(display)?;
        self.info_label.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.header.is_dirty()
            || self.enable_switch.is_dirty()
            || self.reload_button.is_dirty()
            || self.install_button.is_dirty()
            || self.default_button.is_dirty()
            || self.info_label.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.header.mark_clean();
        self.enable_switch.mark_clean();
        self.reload_button.mark_clean();
        self.install_button.mark_clean();
        self.default_button.mark_clean();
        self.info_label.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TouchPoint;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(240, 240))
    }

    fn press_at(page: &mut WatchfaceSetupPage, area: Rectangle) -> Option<Action> {
        let c = area.center();
        page.handle_touch(TouchEvent::Press(TouchPoint::new(c.x as u16, c.y as u16)))
    }

    #[test]
    fn layout_matches_tile_geometry() {
        let page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);

        assert_eq!(
            Drawable::bounds(page.header()),
            Rectangle::new(Point::new(10, 36), HEADER_SIZE)
        );
        assert_eq!(
            page.enable_switch().bounds(),
            Rectangle::new(Point::new(10, 78), SWITCH_SIZE)
        );
        assert_eq!(
            page.reload_button().bounds(),
            Rectangle::new(Point::new(0, 128), SMALL_BUTTON_SIZE)
        );
        assert_eq!(
            page.install_button().bounds(),
            Rectangle::new(Point::new(0, 178), SMALL_BUTTON_SIZE)
        );
        assert_eq!(
            page.default_button().bounds(),
            Rectangle::new(Point::new(125, 128), TALL_BUTTON_SIZE)
        );
        assert_eq!(
            page.info_bounds(),
            Rectangle::new(Point::new(0, 218), Size::new(240, INFO_HEIGHT))
        );
    }

    #[test]
    fn switch_reflects_initial_state() {
        let on = WatchfaceSetupPage::new(screen(), &Theme::default(), true);
        let off = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        assert!(on.switch_state());
        assert!(!off.switch_state());
    }

    #[test]
    fn each_control_emits_its_action() {
        let mut page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);

        let reload = page.reload_button().bounds();
        let install = page.install_button().bounds();
        let default = page.default_button().bounds();
        let switch = page.enable_switch().bounds();
        let exit = page.header().exit_bounds();

        assert_eq!(press_at(&mut page, reload), Some(Action::ReloadAndTest));
        assert_eq!(press_at(&mut page, install), Some(Action::InstallTheme));
        assert_eq!(press_at(&mut page, default), Some(Action::DefaultTheme));
        assert_eq!(
            press_at(&mut page, switch),
            Some(Action::SetWatchfaceEnabled(true))
        );
        assert_eq!(press_at(&mut page, exit), Some(Action::GoBack));
    }

    #[test]
    fn drag_over_controls_emits_nothing() {
        let mut page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        let c = page.default_button().bounds().center();

        let action = page.handle_touch(TouchEvent::Drag(TouchPoint::new(c.x as u16, c.y as u16)));
        assert_eq!(action, None);
        assert!(!page.switch_state());
    }

    #[test]
    fn info_label_shows_literal_text() {
        let mut page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        assert_eq!(page.info_text(), "");

        Page::mark_clean(&mut page);
        page.set_info_label("decompress theme ...");
        assert_eq!(page.info_text(), "decompress theme ...");
        assert!(Page::is_dirty(&page));
    }

    #[test]
    fn long_info_text_is_shown_whole() {
        let mut page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        let text = "watchface.tar.gz not found on spiffs, download the theme archive first";
        assert!(text.len() > 64);

        page.set_info_label(text);
        assert_eq!(page.info_text(), text);
    }

    #[test]
    fn info_text_is_recentred_in_its_row() {
        let mut page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        let row = page.info_bounds();

        page.set_info_label("done");
        let label = page.info_label_bounds();
        assert_eq!(label.size, Size::new(24, 10));
        assert_eq!(label.center(), row.center());

        page.set_info_label("reload and test ok");
        let label = page.info_label_bounds();
        assert_eq!(label.size, Size::new(108, 10));
        assert_eq!(label.center(), row.center());
    }

    #[test]
    fn activation_releases_pressed_controls() {
        let mut page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        let exit = page.header().exit_bounds();

        assert_eq!(press_at(&mut page, exit), Some(Action::GoBack));
        assert!(page.header().is_pressed());

        page.on_activate();
        assert!(!page.header().is_pressed());
        assert!(Page::is_dirty(&page));
    }

    #[test]
    fn title_and_labels() {
        let page = WatchfaceSetupPage::new(screen(), &Theme::default(), false);
        assert_eq!(page.header().title(), TITLE);
        assert_eq!(page.enable_switch().label(), ENABLE_LABEL);
        assert_eq!(page.reload_button().label(), RELOAD_LABEL);
        assert_eq!(page.install_button().label(), INSTALL_LABEL);
        assert_eq!(page.default_button().label(), DEFAULT_LABEL);
    }
}
