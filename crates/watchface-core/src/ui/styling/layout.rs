//! Layout primitives for consistent spacing and dimensions

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing scale for consistent layout
///
/// ```ignore
/// let gap = Spacing::default().medium;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Small spacing (4px)
    pub small: u32,

    /// Medium spacing (10px) - gap between stacked setup widgets
    pub medium: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            small: 4,
            medium: 10,
        }
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Padding around an element (top, right, bottom, left)
///
/// ```ignore
/// let p = Padding::symmetric(12, 16);
/// assert_eq!(p.left + p.right, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Creates equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates symmetric padding (vertical and horizontal)
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}
