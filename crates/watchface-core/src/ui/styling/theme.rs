//! Global theme management
//!
//! Combines color palette, spacing, and layout parameters into a unified
//! theme, and hands out the shared styles that settings tiles copy when
//! they are built.

use super::colors::ColorPalette;
use super::layout::{Padding, Spacing};
use super::style::{ButtonVariant, Style};

/// Global theme configuration
///
/// ```ignore
/// let theme = Theme::default();
/// let tile_style = theme.setup_tile_style();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: ColorPalette,

    /// Spacing scale for consistent layout
    pub spacing: Spacing,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            spacing: Spacing::default(),
        }
    }

    /// Style shared by every setup tile and the containers placed on it.
    pub fn setup_tile_style(&self) -> Style {
        Style::new()
            .with_background(self.palette.background)
            .with_foreground(self.palette.text_primary)
            .with_padding(Padding::all(self.spacing.small))
    }

    /// Style shared by the buttons on setup tiles.
    pub fn button_style(&self) -> Style {
        ButtonVariant::Secondary
            .to_style(&self.palette)
            .with_border(self.palette.border, 1)
    }
}
