//! Color definitions and palette management
//!
//! Colors are RGB565, the native format of the watch's 16-bit panel.
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Setup tile background - near black with a blue tint
pub const COLOR_SETUP_TILE: Rgb565 = Rgb565::new(16 >> 3, 20 >> 2, 28 >> 3);

/// Container surface - slightly lighter than the tile
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(32 >> 3, 38 >> 2, 50 >> 3);

/// Button fill
pub const COLOR_BUTTON: Rgb565 = Rgb565::new(52 >> 3, 62 >> 2, 84 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(72 >> 3, 80 >> 2, 96 >> 3);

/// Accent for active switches and highlights
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(60 >> 3, 150 >> 2, 220 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text and inactive switch knobs
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

// ============================================================================
// Color Palette
// ============================================================================

/// A cohesive color palette for consistent UI theming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Accent color for active and key interactive elements
    pub primary: Rgb565,

    /// Button fill color
    pub secondary: Rgb565,

    /// Tile background color
    pub background: Rgb565,

    /// Surface color for containers and inactive switch tracks
    pub surface: Rgb565,

    /// Primary text color - high contrast
    pub text_primary: Rgb565,

    /// Secondary text color
    pub text_secondary: Rgb565,

    /// Border color for separators and outlines
    pub border: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// The watch's default dark palette
    pub fn dark() -> Self {
        Self {
            primary: COLOR_ACCENT,
            secondary: COLOR_BUTTON,
            background: COLOR_SETUP_TILE,
            surface: COLOR_SURFACE,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            border: COLOR_STROKE,
        }
    }
}
