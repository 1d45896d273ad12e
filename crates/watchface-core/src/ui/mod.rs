// src/ui/mod.rs
//! Watch UI System - a small widget toolkit for the watch's settings tiles
//!
//! This module provides:
//! - Core traits for drawable and touchable elements
//! - LVGL-style relative alignment of widgets
//! - Styled components (buttons, labels, headers, switches)
//! - Dirty tracking so only changed pages are redrawn

pub mod align;
pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::{Button, LabeledSwitch, SettingsHeader, TextComponent, TextSize};
pub use core::{
    Action, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, Drawable, PageId,
    STATUSBAR_HEIGHT, TouchEvent, TouchPoint, TouchResult, Touchable,
};
pub use styling::{ButtonVariant, ColorPalette, Padding, Spacing, Style, Theme};
