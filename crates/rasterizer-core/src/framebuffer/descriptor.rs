use bytemuck::{Pod, Zeroable};

/// Compression modes understood by the native bitmap primitive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum Compression {
    /// Uncompressed pixels (`BI_RGB`).
    None = 0,
}

/// How the framebuffer maps onto the native bitmap presentation primitive.
///
/// The field layout is the 40-byte bitmap-info header, so `as_bytes` can be
/// handed to a native presenter unchanged. Height is stored negated: the
/// primitive is bottom-up by convention, the framebuffer is top-down.
///
/// Computed once at surface creation; there are no setters.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Pod, Zeroable)]
pub struct PresentationDescriptor {
    header_size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bit_count: u16,
    compression: u32,
    size_image: u32,
    x_pels_per_meter: i32,
    y_pels_per_meter: i32,
    colors_used: u32,
    colors_important: u32,
}

impl PresentationDescriptor {
    pub const HEADER_SIZE: u32 = std::mem::size_of::<Self>() as u32;
    pub const BIT_COUNT: u16 = 32;

    /// Descriptor for a top-down `width x height` 32-bit framebuffer.
    ///
    /// Returns `None` for a zero dimension or one that does not fit the header.
    pub fn top_down(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let width = i32::try_from(width).ok()?;
        let height = i32::try_from(height).ok()?;

        Some(Self {
            header_size: Self::HEADER_SIZE,
            width,
            height: -height,
            planes: 1,
            bit_count: Self::BIT_COUNT,
            compression: Compression::None as u32,
            ..Self::zeroed()
        })
    }

    #[inline]
    pub fn header_size(&self) -> u32 {
        self.header_size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Row count, regardless of orientation.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Height as written in the header (negative for top-down).
    #[inline]
    pub fn stored_height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }

    #[inline]
    pub fn planes(&self) -> u16 {
        self.planes
    }

    #[inline]
    pub fn bit_count(&self) -> u16 {
        self.bit_count
    }

    pub fn compression(&self) -> Option<Compression> {
        match self.compression {
            0 => Some(Compression::None),
            _ => None,
        }
    }

    /// Same descriptor with bottom-up row order.
    #[cfg(test)]
    pub(crate) fn flipped(mut self) -> Self {
        self.height = -self.height;
        self
    }

    /// The raw header bytes, in native byte order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_forty_bytes() {
        assert_eq!(PresentationDescriptor::HEADER_SIZE, 40);
    }

    #[test]
    fn stored_height_is_negated() {
        for (w, h) in [(1, 1), (800, 600), (3, 1080)] {
            let d = PresentationDescriptor::top_down(w, h).unwrap();
            assert_eq!(d.stored_height(), -(h as i32));
            assert_eq!(d.height(), h);
            assert_eq!(d.width(), w);
            assert!(d.is_top_down());
        }
    }

    #[test]
    fn fixed_fields() {
        let d = PresentationDescriptor::top_down(800, 600).unwrap();
        assert_eq!(d.planes(), 1);
        assert_eq!(d.bit_count(), 32);
        assert_eq!(d.compression(), Some(Compression::None));
    }

    #[test]
    fn byte_layout_matches_bitmap_info_header() {
        let d = PresentationDescriptor::top_down(800, 600).unwrap();
        let bytes = d.as_bytes();
        assert_eq!(bytes.len(), 40);
        assert_eq!(&bytes[0..4], &40u32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &800i32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &(-600i32).to_ne_bytes());
        assert_eq!(&bytes[12..14], &1u16.to_ne_bytes());
        assert_eq!(&bytes[14..16], &32u16.to_ne_bytes());
        assert_eq!(&bytes[16..20], &0u32.to_ne_bytes());
        assert!(bytes[20..].iter().all(|&b| b == 0));
    }

    #[test]
    fn rejects_unrepresentable_sizes() {
        assert!(PresentationDescriptor::top_down(0, 10).is_none());
        assert!(PresentationDescriptor::top_down(10, 0).is_none());
        assert!(PresentationDescriptor::top_down(u32::MAX, 10).is_none());
    }
}
