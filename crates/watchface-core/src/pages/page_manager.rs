// src/pages/page_manager.rs
//! Page manager with tile provisioning, navigation and touch routing.

use crate::pages::page::{Page, PageWrapper};
use crate::pages::watchface_setup::WatchfaceSetupPage;
use crate::ui::core::{Action, PageId, TouchEvent};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{debug, warn};

/// Maximum number of tiles (and registered pages)
pub const MAX_TILES: usize = 8;

/// Depth of the back-navigation history
const NAVIGATION_DEPTH: usize = 8;

/// Manages tiles, page navigation, rendering, and touch routing.
///
/// Tiles are full-screen slots handed out by [`add_tile`](Self::add_tile);
/// a page is built into a tile's bounds and registered under its
/// [`PageId`]. Navigation keeps a bounded history so
/// [`jump_back`](Self::jump_back) returns to the previous screen.
pub struct PageManager {
    pages: Vec<PageWrapper, MAX_TILES>,
    tile_count: u32,
    current_page: PageId,
    navigation_stack: Vec<PageId, NAVIGATION_DEPTH>,
    display_bounds: Rectangle,
}

impl PageManager {
    pub fn new(initial_page: PageId, display_bounds: Rectangle) -> Self {
        Self {
            pages: Vec::new(),
            tile_count: 0,
            current_page: initial_page,
            navigation_stack: Vec::new(),
            display_bounds,
        }
    }

    /// Allocate a new tile, returning its number.
    pub fn add_tile(&mut self) -> Option<u32> {
        if self.tile_count as usize >= MAX_TILES {
            warn!("No free tile left (max {})", MAX_TILES);
            return None;
        }
        let tile_num = self.tile_count;
        self.tile_count += 1;
        debug!("Allocated tile {}", tile_num);
        Some(tile_num)
    }

    /// Bounds of an allocated tile, `None` if `tile_num` was never allocated.
    pub fn tile_bounds(&self, tile_num: u32) -> Option<Rectangle> {
        (tile_num < self.tile_count).then_some(self.display_bounds)
    }

    /// Register a page, replacing any page already registered under its id.
    pub fn register_page(&mut self, mut page: PageWrapper) {
        let id = page.id();
        if id == self.current_page {
            page.on_activate();
        }

        if let Some(existing) = self.pages.iter_mut().find(|p| p.id() == id) {
            debug!("Replacing page {:?}", id);
            *existing = page;
        } else if self.pages.push(page).is_err() {
            warn!("Page table full, dropping page {:?}", id);
        }
    }

    /// Navigate to a specific page.
    ///
    /// Returns `false` (and stays put) if no page is registered under `page_id`.
    pub fn navigate_to(&mut self, page_id: PageId) -> bool {
        if !self.pages.iter().any(|p| p.id() == page_id) {
            warn!("Cannot navigate to unregistered page {:?}", page_id);
            return false;
        }
        if page_id == self.current_page {
            return true;
        }

        if let Some(current) = self.get_current_page_mut() {
            current.on_deactivate();
        }

        if self.navigation_stack.is_full() {
            self.navigation_stack.remove(0);
        }
        self.navigation_stack.push(self.current_page).ok();
        self.current_page = page_id;

        if let Some(new_page) = self.get_current_page_mut() {
            new_page.on_activate();
        }
        true
    }

    /// Return to the previous page.
    ///
    /// Returns `false` if there is no history to go back to.
    pub fn jump_back(&mut self) -> bool {
        if let Some(prev_page) = self.navigation_stack.pop() {
            if let Some(current) = self.get_current_page_mut() {
                current.on_deactivate();
            }
            self.current_page = prev_page;
            if let Some(page) = self.get_current_page_mut() {
                page.on_activate();
            }
            true
        } else {
            false
        }
    }

    fn get_current_page_mut(&mut self) -> Option<&mut PageWrapper> {
        let current = self.current_page;
        self.pages.iter_mut().find(|p| p.id() == current)
    }

    fn get_current_page(&self) -> Option<&PageWrapper> {
        self.pages.iter().find(|p| p.id() == self.current_page)
    }

    pub fn page(&self, page_id: PageId) -> Option<&PageWrapper> {
        self.pages.iter().find(|p| p.id() == page_id)
    }

    pub fn page_mut(&mut self, page_id: PageId) -> Option<&mut PageWrapper> {
        self.pages.iter_mut().find(|p| p.id() == page_id)
    }

    /// The watchface setup page, if it has been built.
    pub fn watchface_setup(&self) -> Option<&WatchfaceSetupPage> {
        self.page(PageId::WatchfaceSetup)
            .and_then(PageWrapper::as_watchface_setup)
    }

    pub fn watchface_setup_mut(&mut self) -> Option<&mut WatchfaceSetupPage> {
        self.page_mut(PageId::WatchfaceSetup)
            .and_then(PageWrapper::as_watchface_setup_mut)
    }

    /// Handle touch events, returns action if any
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        debug!("Processing touch event: {:?}", event);
        if let Some(page) = self.get_current_page_mut() {
            let result = page.handle_touch(event);
            debug!("Touch result: {:?}", result);
            result
        } else {
            debug!("No current page to handle touch");
            None
        }
    }

    /// Update current page state
    pub fn update(&mut self) {
        if let Some(page) = self.get_current_page_mut() {
            page.update();
        }
    }

    /// Draw the current page (full redraw)
    pub fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        if let Some(page) = self.get_current_page_mut() {
            page.draw_page(display)?;
            page.mark_clean();
        }
        Ok(())
    }

    /// Draw the current page if it is dirty, returns whether anything was drawn
    pub fn draw_dirty<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        match self.get_current_page_mut() {
            Some(page) if page.is_dirty() => {
                page.draw_page(display)?;
                page.mark_clean();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Check if current page is dirty
    pub fn is_dirty(&self) -> bool {
        self.get_current_page().is_some_and(|page| page.is_dirty())
    }

    pub fn current_page_id(&self) -> PageId {
        self.current_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::SetupMenuPage;
    use crate::ui::Theme;
    use alloc::boxed::Box;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(240, 240))
    }

    fn manager_with_pages() -> PageManager {
        let theme = Theme::default();
        let mut manager = PageManager::new(PageId::SetupMenu, screen());
        manager.register_page(PageWrapper::SetupMenu(Box::new(SetupMenuPage::new(
            screen(),
            &theme,
        ))));
        manager.register_page(PageWrapper::WatchfaceSetup(Box::new(
            WatchfaceSetupPage::new(screen(), &theme, false),
        )));
        manager
    }

    #[test]
    fn tiles_are_numbered_in_order_and_bounded() {
        let mut manager = PageManager::new(PageId::SetupMenu, screen());
        assert_eq!(manager.tile_bounds(0), None);

        for expected in 0..MAX_TILES as u32 {
            assert_eq!(manager.add_tile(), Some(expected));
        }
        assert_eq!(manager.add_tile(), None);
        assert_eq!(manager.tile_bounds(3), Some(screen()));
        assert_eq!(manager.tile_bounds(MAX_TILES as u32), None);
    }

    #[test]
    fn navigate_and_jump_back() {
        let mut manager = manager_with_pages();

        assert!(manager.navigate_to(PageId::WatchfaceSetup));
        assert_eq!(manager.current_page_id(), PageId::WatchfaceSetup);

        assert!(manager.jump_back());
        assert_eq!(manager.current_page_id(), PageId::SetupMenu);

        assert!(!manager.jump_back());
        assert_eq!(manager.current_page_id(), PageId::SetupMenu);
    }

    #[test]
    fn navigating_to_unregistered_page_is_refused() {
        let mut manager = PageManager::new(PageId::SetupMenu, screen());
        assert!(!manager.navigate_to(PageId::WatchfaceSetup));
        assert_eq!(manager.current_page_id(), PageId::SetupMenu);
    }

    #[test]
    fn register_replaces_page_with_same_id() {
        let theme = Theme::default();
        let mut manager = manager_with_pages();
        manager.register_page(PageWrapper::WatchfaceSetup(Box::new(
            WatchfaceSetupPage::new(screen(), &theme, true),
        )));

        assert_eq!(manager.pages.len(), 2);
        assert!(manager.watchface_setup().unwrap().switch_state());
    }
}
