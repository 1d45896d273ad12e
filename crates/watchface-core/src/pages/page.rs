// src/pages/page.rs
//! Core page abstraction and type-erased wrapper for the UI page system.
//!
//! # Page Trait
//!
//! [`Page`] defines the lifecycle, rendering, and interaction contract for every
//! tile in the application. Implementors handle their own layout, touch input,
//! dirty tracking, and drawing.
//!
//! # PageWrapper
//!
//! [`PageWrapper`] is a concrete enum that delegates every [`Page`] method to
//! the inner page type, so the [`PageManager`](super::page_manager::PageManager)
//! can hold a heterogeneous `heapless::Vec` of pages without `dyn`.

use crate::ui::core::{Action, PageId, TouchEvent};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use alloc::boxed::Box;

use super::setup_menu::SetupMenuPage;
use super::watchface_setup::WatchfaceSetupPage;

// ---------------------------------------------------------------------------
// Page trait
// ---------------------------------------------------------------------------

/// Trait that all navigable UI pages must implement.
///
/// The [`PageManager`](super::page_manager::PageManager) calls these methods
/// in a well-defined order:
///
/// 1. **`on_activate`** — once, when the page becomes the active page.
/// 2. **`update`** — once per frame to advance internal state.
/// 3. **`handle_touch`** — when a touch event targets this page.
/// 4. **`draw_page`** — when `is_dirty()` is true, or on a forced refresh.
/// 5. **`on_deactivate`** — once, when navigating away from the page.
pub trait Page {
    /// Unique identifier used for navigation and lookup.
    fn id(&self) -> PageId;

    /// Human-readable title (may appear in headers or debug logs).
    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Called once when this page is no longer the active page.
    fn on_deactivate(&mut self) {}

    /// Process a touch event and optionally return an [`Action`].
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    /// Advance per-frame state (animations, timers, etc.).
    fn update(&mut self) {}

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Bounding rectangle of this page (its tile).
    fn bounds(&self) -> Rectangle;

    /// Whether the page has regions that need redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}

// ---------------------------------------------------------------------------
// Blanket impl: Box<T> where T: Page
// ---------------------------------------------------------------------------

impl<T: Page> Page for Box<T> {
    fn id(&self) -> PageId {
        (**self).id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn on_activate(&mut self) {
        (**self).on_activate()
    }

    fn on_deactivate(&mut self) {
        (**self).on_deactivate()
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        (**self).handle_touch(event)
    }

    fn update(&mut self) {
        (**self).update()
    }

    fn draw_page<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        (**self).draw_page(display)
    }

    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn is_dirty(&self) -> bool {
        (**self).is_dirty()
    }

    fn mark_clean(&mut self) {
        (**self).mark_clean()
    }

    fn mark_dirty(&mut self) {
        (**self).mark_dirty()
    }
}

// ---------------------------------------------------------------------------
// PageWrapper
// ---------------------------------------------------------------------------

/// Enum-based wrapper that stores one of the concrete page types.
///
/// Each variant boxes its page to keep the enum size uniform regardless of
/// the page's footprint. When adding a page, add a variant here and extend
/// the delegation in the [`Page`] impl below.
pub enum PageWrapper {
    SetupMenu(Box<SetupMenuPage>),
    WatchfaceSetup(Box<WatchfaceSetupPage>),
}

impl PageWrapper {
    pub fn as_watchface_setup_mut(&mut self) -> Option<&mut WatchfaceSetupPage> {
        match self {
            PageWrapper::WatchfaceSetup(page) => Some(&mut **page),
            _ => None,
        }
    }

    pub fn as_watchface_setup(&self) -> Option<&WatchfaceSetupPage> {
        match self {
            PageWrapper::WatchfaceSetup(page) => Some(&**page),
            _ => None,
        }
    }
}

impl Page for PageWrapper {
    fn id(&self) -> PageId {
        match self {
            PageWrapper::SetupMenu(page) => page.id(),
            PageWrapper::WatchfaceSetup(page) => page.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            PageWrapper::SetupMenu(page) => page.title(),
            PageWrapper::WatchfaceSetup(page) => page.title(),
        }
    }

    fn on_activate(&mut self) {
        match self {
            PageWrapper::SetupMenu(page) => page.on_activate(),
            PageWrapper::WatchfaceSetup(page) => page.on_activate(),
        }
    }

    fn on_deactivate(&mut self) {
        match self {
            PageWrapper::SetupMenu(page) => page.on_deactivate(),
            PageWrapper::WatchfaceSetup(page) => page.on_deactivate(),
        }
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self {
            PageWrapper::SetupMenu(page) => page.handle_touch(event),
            PageWrapper::WatchfaceSetup(page) => page.handle_touch(event),
        }
    }

    fn update(&mut self) {
        match self {
            PageWrapper::SetupMenu(page) => page.update(),
            PageWrapper::WatchfaceSetup(page) => page.update(),
        }
    }

    fn draw_page<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            PageWrapper::SetupMenu(page) => page.draw_page(display),
            PageWrapper::WatchfaceSetup(page) => page.draw_page(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            PageWrapper::SetupMenu(page) => Page::bounds(page),
            PageWrapper::WatchfaceSetup(page) => Page::bounds(page),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            PageWrapper::SetupMenu(page) => Page::is_dirty(page),
            PageWrapper::WatchfaceSetup(page) => Page::is_dirty(page),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            PageWrapper::SetupMenu(page) => Page::mark_clean(page),
            PageWrapper::WatchfaceSetup(page) => Page::mark_clean(page),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            PageWrapper::SetupMenu(page) => Page::mark_dirty(page),
            PageWrapper::WatchfaceSetup(page) => Page::mark_dirty(page),
        }
    }
}
