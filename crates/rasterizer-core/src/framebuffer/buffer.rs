use crate::paint::Argb;

/// Owned, fixed-size pixel store.
///
/// Invariant: `pixels.len() == width * height` for the whole lifetime. The
/// backing store is a boxed slice, so it cannot grow or shrink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Box<[Argb]>,
}

impl Framebuffer {
    /// Allocates a `width * height` buffer with every pixel set to `fill`.
    pub fn new(width: u32, height: u32, fill: Argb) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; len].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }

    /// Raw packed words, in storage order.
    #[inline]
    pub fn as_words(&self) -> &[u32] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn fill(&mut self, color: Argb) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Argb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes one pixel. Out-of-range coordinates are ignored and return `false`.
    pub fn set(&mut self, x: u32, y: u32, color: Argb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Row `y`, top row first.
    pub fn row(&self, y: u32) -> Option<&[Argb]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.pixels[start..start + w])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Argb]> + ExactSizeIterator + '_ {
        // `max(1)` keeps chunks_exact valid for a zero-width buffer (which has no pixels).
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_pixel() {
        let fb = Framebuffer::new(4, 3, Argb::SENTINEL);
        assert_eq!(fb.len(), 12);
        assert!(fb.pixels().iter().all(|&p| p == Argb::SENTINEL));
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut fb = Framebuffer::new(3, 2, Argb::BLACK);
        assert!(fb.set(2, 1, Argb::WHITE));
        assert_eq!(fb.get(2, 1), Some(Argb::WHITE));
        assert_eq!(fb.pixels()[5], Argb::WHITE);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut fb = Framebuffer::new(3, 2, Argb::BLACK);
        assert!(!fb.set(3, 0, Argb::WHITE));
        assert!(!fb.set(0, 2, Argb::WHITE));
        assert_eq!(fb.get(3, 0), None);
        assert!(fb.pixels().iter().all(|&p| p == Argb::BLACK));
    }

    #[test]
    fn fill_keeps_length() {
        let mut fb = Framebuffer::new(5, 5, Argb::BLACK);
        fb.fill(Argb::WHITE);
        assert_eq!(fb.len(), 25);
        assert!(fb.pixels().iter().all(|&p| p == Argb::WHITE));
    }

    #[test]
    fn rows_are_top_down() {
        let mut fb = Framebuffer::new(2, 3, Argb::BLACK);
        fb.set(0, 0, Argb::WHITE);
        let rows: Vec<_> = fb.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Argb::WHITE);
        assert_eq!(fb.row(0), Some(rows[0]));
        assert_eq!(fb.row(3), None);
    }

    #[test]
    fn words_view_matches_pixels() {
        let fb = Framebuffer::new(2, 1, Argb::new(1, 2, 3, 4));
        assert_eq!(fb.as_words(), &[0x0102_0304, 0x0102_0304]);
    }
}
