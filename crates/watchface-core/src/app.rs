//! Composition root for the setup screens
//!
//! [`SetupApp`] owns the page manager, the theme, the watchface config and
//! the watchface subsystem. Pages only turn touches into [`Action`]s; this
//! is where those actions meet the collaborators they stand for.

use core::fmt::Debug;

use alloc::boxed::Box;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, error, info, warn};
use thiserror_no_std::Error;

use crate::config::{ConfigStorage, WatchfaceConfig, WatchfaceConfigStore};
use crate::pages::{Page, PageManager, PageWrapper, SetupMenuPage, WatchfaceSetupPage};
use crate::ui::{Action, PageId, Theme, TouchEvent};
use crate::watchface::{InfoSink, WatchfaceControl};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("Tile {0} has not been allocated")]
    UnknownTile(u32),
    #[error("No free tile left")]
    NoFreeTile,
}

/// Info sink that writes into the setup page's status line and redraws
/// the current page straight away, so progress shows while the caller is
/// still busy.
struct LiveInfoLabel<'a, D> {
    pages: &'a mut PageManager,
    display: &'a mut D,
}

impl<D> InfoSink for LiveInfoLabel<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    fn set_info_label(&mut self, text: &str) {
        set_info_and_refresh(self.pages, self.display, text);
    }
}

fn set_info_and_refresh<D>(pages: &mut PageManager, display: &mut D, text: &str)
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    let Some(page) = pages.watchface_setup_mut() else {
        warn!("Info text {:?} dropped, watchface setup not built", text);
        return;
    };
    debug!("Info label: {:?}", text);
    page.set_info_label(text);
    page.mark_dirty();

    if pages.current_page_id() == PageId::WatchfaceSetup
        && let Err(e) = pages.draw(display)
    {
        error!("Draw error: {:?}", e);
    }
}

/// The setup screens with their collaborators wired in.
///
/// ```ignore
/// let mut app = SetupApp::new(storage, watchface, screen);
/// let tile = app.add_tile()?;
/// app.watchface_setup_tile_setup(tile)?;
///
/// // host loop
/// app.handle_touch(TouchEvent::Press(point), &mut display);
/// app.draw_dirty(&mut display)?;
/// ```
pub struct SetupApp<S: ConfigStorage, W: WatchfaceControl> {
    pages: PageManager,
    theme: Theme,
    config: WatchfaceConfigStore<S>,
    watchface: W,
}

impl<S: ConfigStorage, W: WatchfaceControl> SetupApp<S, W> {
    /// Wire up the app and show the setup menu.
    pub fn new(storage: S, watchface: W, display_bounds: Rectangle) -> Self {
        Self::with_theme(storage, watchface, display_bounds, Theme::default())
    }

    pub fn with_theme(storage: S, watchface: W, display_bounds: Rectangle, theme: Theme) -> Self {
        let mut pages = PageManager::new(PageId::SetupMenu, display_bounds);
        match pages.add_tile().and_then(|tile| pages.tile_bounds(tile)) {
            Some(bounds) => pages.register_page(PageWrapper::SetupMenu(Box::new(
                SetupMenuPage::new(bounds, &theme),
            ))),
            None => error!("No tile for the setup menu"),
        }

        Self {
            pages,
            theme,
            config: WatchfaceConfigStore::new(storage),
            watchface,
        }
    }

    /// Allocate a tile for a setup screen.
    pub fn add_tile(&mut self) -> Result<u32, SetupError> {
        self.pages.add_tile().ok_or(SetupError::NoFreeTile)
    }

    /// Build the watchface setup screen into tile `tile_num`.
    ///
    /// Loads the config, builds the page with the switch set from it, pushes
    /// the anti-aliasing flag and the switch state to the watchface subsystem
    /// and saves the config back. Config storage failures are logged and
    /// otherwise ignored.
    pub fn watchface_setup_tile_setup(&mut self, tile_num: u32) -> Result<(), SetupError> {
        if let Err(e) = self.config.load() {
            warn!("Watchface config not loaded, using defaults: {}", e);
        }

        let bounds = self
            .pages
            .tile_bounds(tile_num)
            .ok_or(SetupError::UnknownTile(tile_num))?;

        let config = *self.config.config();
        let page = WatchfaceSetupPage::new(bounds, &self.theme, config.watchface_enable);
        let enabled = page.switch_state();
        self.pages
            .register_page(PageWrapper::WatchfaceSetup(Box::new(page)));
        info!("Watchface setup built on tile {}", tile_num);

        self.watchface.set_antialias(config.watchface_antialias);
        self.watchface.enable_tile_after_wakeup(enabled);

        self.save_config();
        Ok(())
    }

    /// Show `text` on the watchface setup status line and redraw at once.
    pub fn watchface_setup_set_info_label<D>(&mut self, text: &str, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
        D::Error: Debug,
    {
        set_info_and_refresh(&mut self.pages, display, text);
    }

    /// Route a touch to the current page and carry out the resulting action.
    ///
    /// `display` is used for immediate refreshes while a delegated operation
    /// reports progress. Returns the action that was carried out, if any.
    pub fn handle_touch<D>(&mut self, event: TouchEvent, display: &mut D) -> Option<Action>
    where
        D: DrawTarget<Color = Rgb565>,
        D::Error: Debug,
    {
        let action = self.pages.handle_touch(event)?;
        self.dispatch(action, display);
        Some(action)
    }

    /// Carry out `action`.
    pub fn dispatch<D>(&mut self, action: Action, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
        D::Error: Debug,
    {
        debug!("Dispatching {:?}", action);
        match action {
            Action::NavigateToPage(page_id) => {
                self.pages.navigate_to(page_id);
            }
            Action::GoBack => {
                if !self.pages.jump_back() {
                    debug!("Already at the first screen");
                }
            }
            Action::DefaultTheme => {
                info!("Restoring default watchface theme");
                let mut sink = LiveInfoLabel {
                    pages: &mut self.pages,
                    display,
                };
                self.watchface.default_theme(&mut sink);
            }
            Action::InstallTheme => {
                info!("Installing watchface theme");
                let mut sink = LiveInfoLabel {
                    pages: &mut self.pages,
                    display,
                };
                self.watchface.decompress_theme(&mut sink);
            }
            Action::ReloadAndTest => {
                info!("Reloading watchface");
                let mut sink = LiveInfoLabel {
                    pages: &mut self.pages,
                    display,
                };
                self.watchface.reload_and_test(&mut sink);
            }
            Action::SetWatchfaceEnabled(enabled) => {
                info!("Watchface after wakeup: {}", enabled);
                self.watchface.enable_tile_after_wakeup(enabled);
                self.config.config_mut().watchface_enable = enabled;
                self.save_config();
            }
        }
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            error!("Failed to save watchface config: {}", e);
        }
    }

    /// Advance the current page
    pub fn update(&mut self) {
        self.pages.update();
    }

    /// Redraw the current page if anything on it changed.
    pub fn draw_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        self.pages.draw_dirty(display)
    }

    /// Redraw the current page unconditionally.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.pages.draw(display)
    }

    /// Navigate directly to a page (host shortcuts, wakeup routing).
    pub fn navigate_to(&mut self, page_id: PageId) -> bool {
        self.pages.navigate_to(page_id)
    }

    pub fn current_page_id(&self) -> PageId {
        self.pages.current_page_id()
    }

    pub fn pages(&self) -> &PageManager {
        &self.pages
    }

    pub fn watchface_setup(&self) -> Option<&WatchfaceSetupPage> {
        self.pages.watchface_setup()
    }

    pub fn config(&self) -> &WatchfaceConfig {
        self.config.config()
    }

    pub fn config_store(&self) -> &WatchfaceConfigStore<S> {
        &self.config
    }

    pub fn watchface(&self) -> &W {
        &self.watchface
    }

    pub fn watchface_mut(&mut self) -> &mut W {
        &mut self.watchface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WATCHFACE_CONFIG_KEY;
    use crate::mocks::{MemoryStorage, MockDisplay, RecordingWatchface, WatchfaceCall};
    use crate::ui::{Drawable, TouchPoint};

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(240, 240))
    }

    fn stored(config: WatchfaceConfig) -> MemoryStorage {
        let mut store = WatchfaceConfigStore::new(MemoryStorage::new());
        *store.config_mut() = config;
        store.save().unwrap();
        store.storage().clone()
    }

    fn built_app(
        storage: MemoryStorage,
        watchface: RecordingWatchface,
    ) -> SetupApp<MemoryStorage, RecordingWatchface> {
        let mut app = SetupApp::new(storage, watchface, screen());
        let tile = app.add_tile().unwrap();
        app.watchface_setup_tile_setup(tile).unwrap();
        assert!(app.navigate_to(PageId::WatchfaceSetup));
        app.watchface_mut().clear();
        app
    }

    fn press(area: Rectangle) -> TouchEvent {
        let c = area.center();
        TouchEvent::Press(TouchPoint::new(c.x as u16, c.y as u16))
    }

    #[test]
    fn setup_applies_persisted_config() {
        let storage = stored(WatchfaceConfig {
            watchface_enable: true,
            watchface_antialias: false,
        });
        let writes_before = storage.writes();
        let mut app = SetupApp::new(storage, RecordingWatchface::new(), screen());
        let tile = app.add_tile().unwrap();
        app.watchface_setup_tile_setup(tile).unwrap();

        assert!(app.watchface_setup().unwrap().switch_state());
        assert_eq!(
            app.watchface().calls(),
            [
                WatchfaceCall::SetAntialias(false),
                WatchfaceCall::EnableTileAfterWakeup(true),
            ]
        );
        // The config is written back after building
        assert_eq!(app.config_store().storage().writes(), writes_before + 1);
    }

    #[test]
    fn setup_without_stored_config_uses_defaults_and_persists_them() {
        let mut app = SetupApp::new(MemoryStorage::new(), RecordingWatchface::new(), screen());
        let tile = app.add_tile().unwrap();
        app.watchface_setup_tile_setup(tile).unwrap();

        assert!(!app.watchface_setup().unwrap().switch_state());
        assert_eq!(
            app.watchface().calls(),
            [
                WatchfaceCall::SetAntialias(true),
                WatchfaceCall::EnableTileAfterWakeup(false),
            ]
        );
        assert!(
            app.config_store()
                .storage()
                .blob(WATCHFACE_CONFIG_KEY)
                .is_some()
        );
    }

    #[test]
    fn setup_on_unknown_tile_fails() {
        let mut app = SetupApp::new(MemoryStorage::new(), RecordingWatchface::new(), screen());
        assert_eq!(
            app.watchface_setup_tile_setup(7),
            Err(SetupError::UnknownTile(7))
        );
        assert!(app.watchface_setup().is_none());
        assert!(app.watchface().calls().is_empty());
        assert_eq!(app.config_store().storage().writes(), 0);
    }

    #[test]
    fn toggling_switch_updates_watchface_and_config() {
        let mut app = built_app(MemoryStorage::new(), RecordingWatchface::new());
        let mut display = MockDisplay::new();
        let switch = app.watchface_setup().unwrap().enable_switch().bounds();

        let action = app.handle_touch(press(switch), &mut display);
        assert_eq!(action, Some(Action::SetWatchfaceEnabled(true)));
        assert_eq!(
            app.watchface().calls(),
            [WatchfaceCall::EnableTileAfterWakeup(true)]
        );
        assert!(app.config().watchface_enable);

        let mut reloaded = WatchfaceConfigStore::new(app.config_store().storage().clone());
        reloaded.load().unwrap();
        assert!(reloaded.config().watchface_enable);

        app.handle_touch(press(switch), &mut display);
        assert!(!app.config().watchface_enable);
        assert!(!app.watchface_setup().unwrap().switch_state());
    }

    #[test]
    fn each_button_triggers_exactly_its_operation() {
        let cases = [
            (Action::ReloadAndTest, WatchfaceCall::ReloadAndTest),
            (Action::InstallTheme, WatchfaceCall::DecompressTheme),
            (Action::DefaultTheme, WatchfaceCall::DefaultTheme),
        ];

        for (expected_action, expected_call) in cases {
            let mut app = built_app(MemoryStorage::new(), RecordingWatchface::new());
            let mut display = MockDisplay::new();
            let page = app.watchface_setup().unwrap();
            let area = match expected_action {
                Action::ReloadAndTest => page.reload_button().bounds(),
                Action::InstallTheme => page.install_button().bounds(),
                _ => page.default_button().bounds(),
            };
            let config_before = *app.config();
            let writes_before = app.config_store().storage().writes();

            let action = app.handle_touch(press(area), &mut display);

            assert_eq!(action, Some(expected_action));
            assert_eq!(app.watchface().calls(), [expected_call]);
            assert_eq!(*app.config(), config_before);
            assert_eq!(app.config_store().storage().writes(), writes_before);
        }
    }

    #[test]
    fn back_control_returns_without_touching_config() {
        let mut app = built_app(MemoryStorage::new(), RecordingWatchface::new());
        let mut display = MockDisplay::new();
        let exit = app.watchface_setup().unwrap().header().exit_bounds();
        let config_before = *app.config();
        let writes_before = app.config_store().storage().writes();

        let action = app.handle_touch(press(exit), &mut display);

        assert_eq!(action, Some(Action::GoBack));
        assert_eq!(app.current_page_id(), PageId::SetupMenu);
        assert_eq!(*app.config(), config_before);
        assert_eq!(app.config_store().storage().writes(), writes_before);
        assert!(app.watchface().calls().is_empty());
    }

    #[test]
    fn info_label_shows_text_and_redraws_immediately() {
        let mut app = built_app(MemoryStorage::new(), RecordingWatchface::new());
        let mut display = MockDisplay::new();
        app.draw(&mut display).unwrap();
        display.reset();

        app.watchface_setup_set_info_label("decompress theme ...", &mut display);

        assert_eq!(
            app.watchface_setup().unwrap().info_text(),
            "decompress theme ..."
        );
        assert!(display.pixels_drawn() > 0);
        assert!(!app.pages().is_dirty());
    }

    #[test]
    fn info_label_keeps_long_text_whole() {
        let mut app = built_app(MemoryStorage::new(), RecordingWatchface::new());
        let mut display = MockDisplay::new();
        let text = "failed to open /spiffs/watchface.tar.gz, no theme archive installed...";
        assert_eq!(text.len(), 70);

        app.watchface_setup_set_info_label(text, &mut display);

        assert_eq!(app.watchface_setup().unwrap().info_text(), text);
    }

    #[test]
    fn theme_install_progress_reaches_the_label() {
        let watchface =
            RecordingWatchface::new().with_install_messages(&["unpacking", "theme installed"]);
        let mut app = built_app(MemoryStorage::new(), watchface);
        let mut display = MockDisplay::new();
        let install = app.watchface_setup().unwrap().install_button().bounds();

        app.handle_touch(press(install), &mut display);

        assert_eq!(app.watchface_setup().unwrap().info_text(), "theme installed");
        assert!(display.pixels_drawn() > 0);
    }

    #[test]
    fn failed_save_is_swallowed() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);
        let mut app = SetupApp::new(storage, RecordingWatchface::new(), screen());
        let tile = app.add_tile().unwrap();

        assert_eq!(app.watchface_setup_tile_setup(tile), Ok(()));
        assert!(app.navigate_to(PageId::WatchfaceSetup));

        let mut display = MockDisplay::new();
        let switch = app.watchface_setup().unwrap().enable_switch().bounds();
        app.handle_touch(press(switch), &mut display);
        assert!(app.config().watchface_enable);
    }

    #[test]
    fn rebuilding_setup_rereads_and_reapplies_config() {
        let storage = stored(WatchfaceConfig {
            watchface_enable: true,
            watchface_antialias: false,
        });
        let mut app = built_app(storage, RecordingWatchface::new());
        let mut display = MockDisplay::new();
        let switch = app.watchface_setup().unwrap().enable_switch().bounds();
        app.handle_touch(press(switch), &mut display);
        app.watchface_setup_set_info_label("theme installed", &mut display);
        app.watchface_mut().clear();
        let writes_before = app.config_store().storage().writes();

        assert_eq!(app.watchface_setup_tile_setup(1), Ok(()));

        let page = app.watchface_setup().unwrap();
        assert!(!page.switch_state());
        assert_eq!(page.info_text(), "");
        assert_eq!(app.current_page_id(), PageId::WatchfaceSetup);
        assert_eq!(
            app.watchface().calls(),
            [
                WatchfaceCall::SetAntialias(false),
                WatchfaceCall::EnableTileAfterWakeup(false),
            ]
        );
        assert_eq!(app.config_store().storage().writes(), writes_before + 1);
    }

    #[test]
    fn setup_menu_leads_to_watchface_setup() {
        let mut app = SetupApp::new(MemoryStorage::new(), RecordingWatchface::new(), screen());
        let tile = app.add_tile().unwrap();
        app.watchface_setup_tile_setup(tile).unwrap();
        let mut display = MockDisplay::new();

        assert_eq!(app.current_page_id(), PageId::SetupMenu);
        // Menu entry sits below the title, centred on the screen
        let action = app.handle_touch(
            TouchEvent::Press(TouchPoint::new(120, 110)),
            &mut display,
        );
        assert_eq!(action, Some(Action::NavigateToPage(PageId::WatchfaceSetup)));
        assert_eq!(app.current_page_id(), PageId::WatchfaceSetup);
    }
}
