use super::{Inset, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Pointer containment with an outward `tolerance` on every edge.
    ///
    /// A point is inside when `|p - center| - half_size - tolerance < 0` on both
    /// axes, so with `tolerance = 1.0` a pointer sitting exactly on an edge (or
    /// up to one unit outside it) still hits.
    #[inline]
    pub fn hit_contains(self, p: Vec2, tolerance: f32) -> bool {
        let r = self.normalized();
        let half = r.size * 0.5;
        let d = (p - (r.origin + half)).abs() - half - Vec2::splat(tolerance);
        d.x.max(d.y) < 0.0
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Grows the size by `inset`; the origin stays put.
    #[inline]
    pub fn inflate(self, inset: Inset) -> Rect {
        Rect::from_origin_size(self.origin, inset.inflate_size(self.size))
    }

    /// Moves the origin by the top-left inset and shrinks the size by both sides.
    #[inline]
    pub fn deflate(self, inset: Inset) -> Rect {
        Rect::from_origin_size(self.origin + inset.top_left(), inset.deflate_size(self.size))
    }

    /// Returns the same rectangle shifted by `delta`.
    #[inline]
    pub fn translate(self, delta: Vec2) -> Rect {
        Rect::from_origin_size(self.origin + delta, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── hit_contains ──────────────────────────────────────────────────────

    #[test]
    fn hit_contains_interior() {
        assert!(r(10.0, 10.0, 20.0, 20.0).hit_contains(Vec2::new(15.0, 15.0), 1.0));
    }

    #[test]
    fn hit_contains_admits_exact_edges() {
        let rect = r(10.0, 10.0, 20.0, 20.0);
        assert!(rect.hit_contains(Vec2::new(10.0, 10.0), 1.0));
        assert!(rect.hit_contains(Vec2::new(30.0, 30.0), 1.0));
    }

    #[test]
    fn hit_contains_tolerance_is_exclusive() {
        let rect = r(10.0, 10.0, 20.0, 20.0);
        assert!(rect.hit_contains(Vec2::new(9.5, 20.0), 1.0));
        assert!(!rect.hit_contains(Vec2::new(9.0, 20.0), 1.0));
        assert!(!rect.hit_contains(Vec2::new(31.0, 20.0), 1.0));
    }

    #[test]
    fn hit_contains_zero_tolerance_rejects_edges() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).hit_contains(Vec2::new(0.0, 5.0), 0.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inflate_then_deflate_restores_size() {
        let inset = Inset::symmetric(4.0, 8.0);
        let outer = r(0.0, 0.0, 50.0, 20.0).inflate(inset);
        assert_eq!(outer, r(0.0, 0.0, 66.0, 28.0));
        assert_eq!(outer.deflate(inset), r(8.0, 4.0, 50.0, 20.0));
    }
}
