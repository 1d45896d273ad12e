// src/ui/align.rs
//! Relative placement of widget rectangles
//!
//! Settings tiles are laid out by anchoring each widget to a previously
//! placed one ("below the header", "at the container's right middle") and
//! nudging it by a pixel offset. These helpers wrap `embedded-layout`'s
//! alignment so page constructors read like the layout they produce.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_layout::align::{Align, horizontal, vertical};

/// Place `obj` inside `base`, sharing its top-left corner.
pub fn in_top_left(obj: Rectangle, base: Rectangle, offset: Point) -> Rectangle {
    obj.align_to(&base, horizontal::Left, vertical::Top)
        .translate(offset)
}

/// Place `obj` inside `base`, sharing its bottom-left corner.
pub fn in_bottom_left(obj: Rectangle, base: Rectangle, offset: Point) -> Rectangle {
    obj.align_to(&base, horizontal::Left, vertical::Bottom)
        .translate(offset)
}

/// Place `obj` inside `base` against its right edge, vertically centred.
pub fn in_right_mid(obj: Rectangle, base: Rectangle, offset: Point) -> Rectangle {
    obj.align_to(&base, horizontal::Right, vertical::Center)
        .translate(offset)
}

/// Centre `obj` inside `base`.
pub fn center(obj: Rectangle, base: Rectangle, offset: Point) -> Rectangle {
    obj.align_to(&base, horizontal::Center, vertical::Center)
        .translate(offset)
}

/// Place `obj` directly below `base`, horizontally centred on it.
pub fn out_bottom_mid(obj: Rectangle, base: Rectangle, offset: Point) -> Rectangle {
    obj.align_to(&base, horizontal::Center, vertical::TopToBottom)
        .translate(offset)
}
