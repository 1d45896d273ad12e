//! Styling system for UI elements
//!
//! - [`colors`] - Color constants and palette management
//! - [`layout`] - Spacing and padding
//! - [`style`] - Style configuration and button variants
//! - [`theme`] - Global theme and the per-tile style providers
//!
//! # Examples
//!
//! ```ignore
//! use ui::styling::*;
//!
//! let theme = Theme::default();
//! let tile_style = theme.setup_tile_style();
//! let button_style = theme.button_style();
//! ```

pub mod colors;
pub mod layout;
pub mod style;
pub mod theme;

pub use colors::{
    COLOR_ACCENT, COLOR_BUTTON, COLOR_SETUP_TILE, COLOR_STROKE, COLOR_SURFACE, ColorPalette,
    LIGHT_GRAY, WHITE,
};
pub use layout::{Padding, Spacing};
pub use style::{ButtonVariant, Style};
pub use theme::Theme;
