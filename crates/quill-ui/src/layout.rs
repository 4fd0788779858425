//! Layout helpers.
//!
//! No measure pass: a container hands its body a cursor, the body places a
//! child at the cursor and reports the child's rect back with `advance`.
//! The container returns the rect that encloses everything placed.

use quill_engine::coords::{Inset, Rect, Vec2};

// ── stacks ────────────────────────────────────────────────────────────────

/// Cursor of a vertical stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VCursor {
    position: Vec2,
    size: Vec2,
    spacing: f32,
    children: usize,
}

impl VCursor {
    /// Where the next child goes.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves below `child` (plus spacing).
    pub fn advance(&mut self, child: Rect) {
        self.position.y += child.size.y + self.spacing;
        self.size.y += child.size.y + self.spacing;
        self.size.x = self.size.x.max(child.size.x);
        self.children += 1;
    }
}

/// Stacks children top to bottom starting at `position`.
pub fn v_stack(position: Vec2, spacing: f32, body: impl FnOnce(&mut VCursor)) -> Rect {
    let mut cursor = VCursor { position, size: Vec2::zero(), spacing, children: 0 };
    body(&mut cursor);
    if cursor.children > 0 {
        cursor.size.y -= spacing;
    }
    Rect::from_origin_size(position, cursor.size)
}

/// Cursor of a horizontal stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HCursor {
    position: Vec2,
    size: Vec2,
    spacing: f32,
    children: usize,
}

impl HCursor {
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves right of `child` (plus spacing).
    pub fn advance(&mut self, child: Rect) {
        self.position.x += child.size.x + self.spacing;
        self.size.x += child.size.x + self.spacing;
        self.size.y = self.size.y.max(child.size.y);
        self.children += 1;
    }
}

/// Stacks children left to right starting at `position`.
pub fn h_stack(position: Vec2, spacing: f32, body: impl FnOnce(&mut HCursor)) -> Rect {
    let mut cursor = HCursor { position, size: Vec2::zero(), spacing, children: 0 };
    body(&mut cursor);
    if cursor.children > 0 {
        cursor.size.x -= spacing;
    }
    Rect::from_origin_size(position, cursor.size)
}

// ── padding ───────────────────────────────────────────────────────────────

/// Grows `rect` by `inset` and runs `body` with the content rect inside the
/// padding. Returns the padded rect.
pub fn padding<R>(rect: Rect, inset: Inset, body: impl FnOnce(Rect) -> R) -> (R, Rect) {
    let outer = rect.inflate(inset);
    let out = body(outer.deflate(inset));
    (out, outer)
}

// ── alignment ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Offset of a `child`-long span inside a `parent`-long one.
    #[inline]
    fn offset(self, parent: f32, child: f32) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => parent * 0.5 - child * 0.5,
            Alignment::End => parent - child,
        }
    }
}

/// Places children horizontally inside a parent rect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HAlignCursor {
    parent: Rect,
    height: f32,
    alignment: Alignment,
}

impl HAlignCursor {
    /// Rect for a child of `size`, aligned on the x axis. The result height
    /// follows the last placed child.
    pub fn place(&mut self, size: Vec2) -> Rect {
        self.height = size.y;
        let x = self.alignment.offset(self.parent.size.x, size.x);
        Rect::from_origin_size(self.parent.origin + Vec2::new(x, 0.0), size)
    }
}

/// Aligns children on the x axis of `parent`.
///
/// Returns `parent` with its height replaced by the last placed child's.
pub fn h_align(parent: Rect, alignment: Alignment, body: impl FnOnce(&mut HAlignCursor)) -> Rect {
    let mut cursor = HAlignCursor { parent, height: parent.size.y, alignment };
    body(&mut cursor);
    Rect::from_origin_size(parent.origin, Vec2::new(parent.size.x, cursor.height))
}

/// Places children vertically inside a parent rect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VAlignCursor {
    parent: Rect,
    width: f32,
    alignment: Alignment,
}

impl VAlignCursor {
    pub fn place(&mut self, size: Vec2) -> Rect {
        self.width = size.x;
        let y = self.alignment.offset(self.parent.size.y, size.y);
        Rect::from_origin_size(self.parent.origin + Vec2::new(0.0, y), size)
    }
}

/// Aligns children on the y axis of `parent`.
///
/// Returns `parent` with its width replaced by the last placed child's.
pub fn v_align(parent: Rect, alignment: Alignment, body: impl FnOnce(&mut VAlignCursor)) -> Rect {
    let mut cursor = VAlignCursor { parent, width: parent.size.x, alignment };
    body(&mut cursor);
    Rect::from_origin_size(parent.origin, Vec2::new(cursor.width, parent.size.y))
}
