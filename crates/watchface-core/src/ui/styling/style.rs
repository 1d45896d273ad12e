//! Style configuration for UI elements
//!
//! Provides the core `Style` struct and builder methods for defining the
//! visual appearance of UI components (colors, borders, padding).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

use super::colors::{ColorPalette, WHITE};
use super::layout::Padding;

// ============================================================================
// Style
// ============================================================================

/// Visual style configuration for a UI element
///
/// Styles are plain `Copy` values, so a page "copies" a provider's style by
/// storing it and may adjust its copy without touching the provider.
///
/// ```ignore
/// let card_style = Style::new()
///     .with_background(COLOR_SURFACE)
///     .with_border(COLOR_STROKE, 2)
///     .with_padding(Padding::all(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,

    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,

    /// Border color (if any)
    pub border_color: Option<Rgb565>,

    /// Border width in pixels (0 = no border)
    pub border_width: u32,

    /// Internal padding around content
    pub padding: Padding,
}

impl Default for Style {
    /// White text, no background or border
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
            padding: Padding::default(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color
    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the foreground (text) color
    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Sets the border color and width
    ///
    /// A width of 0 effectively disables the border.
    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Sets the padding around the element
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Converts this style to a `PrimitiveStyle` for embedded-graphics drawing
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }

        if let Some(border) = self.border_color
            && self.border_width > 0
        {
            builder = builder.stroke_color(border).stroke_width(self.border_width);
        }

        builder.build()
    }
}

// ============================================================================
// Button Variants
// ============================================================================

/// Predefined button style variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Accent-filled button for the most prominent action
    Primary,

    /// Standard settings button
    Secondary,

    /// Outlined button - subtle emphasis with border
    Outline,
}

impl ButtonVariant {
    /// Converts the variant to a concrete style based on a color palette
    pub fn to_style(&self, palette: &ColorPalette) -> Style {
        match self {
            ButtonVariant::Primary => Style::new()
                .with_background(palette.primary)
                .with_foreground(WHITE)
                .with_padding(Padding::symmetric(8, 16)),

            ButtonVariant::Secondary => Style::new()
                .with_background(palette.secondary)
                .with_foreground(WHITE)
                .with_padding(Padding::symmetric(8, 16)),

            ButtonVariant::Outline => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.border, 2)
                .with_padding(Padding::symmetric(8, 16)),
        }
    }
}
