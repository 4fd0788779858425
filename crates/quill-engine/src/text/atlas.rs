use crate::error::EngineError;

/// Single-channel coverage atlas packed in shelves (rows).
///
/// Regions are never freed; a font's atlas only grows until it is full.
#[derive(Debug)]
pub struct GlyphAtlas {
    width: u32,
    height: u32,
    padding: u32,
    pixels: Vec<u8>,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    dirty: bool,
}

impl GlyphAtlas {
    pub fn new(width: u32, height: u32) -> Self {
        let padding = 1;
        Self {
            width,
            height,
            padding,
            pixels: vec![0; (width as usize) * (height as usize)],
            cursor_x: padding,
            cursor_y: padding,
            row_height: 0,
            dirty: false,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major coverage bytes, `width * height` long.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixels changed since the last [`mark_clean`](Self::mark_clean).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Reserves a `w x h` region and returns its top-left pixel.
    pub fn allocate(&mut self, w: u32, h: u32) -> Result<(u32, u32), EngineError> {
        let full = EngineError::AtlasFull {
            width: self.width,
            height: self.height,
            glyph_w: w,
            glyph_h: h,
        };
        if w + 2 * self.padding > self.width {
            return Err(full);
        }

        // Shelf state is only committed once the region fits.
        let (mut x, mut y, mut row_height) = (self.cursor_x, self.cursor_y, self.row_height);
        if x + w + self.padding > self.width {
            x = self.padding;
            y += row_height + self.padding;
            row_height = 0;
        }
        if y + h + self.padding > self.height {
            return Err(full);
        }

        self.cursor_x = x + w + self.padding;
        self.cursor_y = y;
        self.row_height = row_height.max(h);
        Ok((x, y))
    }

    /// Copies `coverage` (`w * h` bytes, row-major) to `(x, y)`.
    pub fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, coverage: &[u8]) {
        debug_assert_eq!(coverage.len(), (w * h) as usize);
        debug_assert!(x + w <= self.width && y + h <= self.height);
        for row in 0..h as usize {
            let src = &coverage[row * w as usize..(row + 1) * w as usize];
            let start = (y as usize + row) * self.width as usize + x as usize;
            self.pixels[start..start + w as usize].copy_from_slice(src);
        }
        self.dirty = true;
    }

    /// Normalized UV corners of a pixel region.
    #[inline]
    pub fn uv(&self, x: u32, y: u32, w: u32, h: u32) -> ([f32; 2], [f32; 2]) {
        let (aw, ah) = (self.width as f32, self.height as f32);
        (
            [x as f32 / aw, y as f32 / ah],
            [(x + w) as f32 / aw, (y + h) as f32 / ah],
        )
    }
}
