use bytemuck::{Pod, Zeroable};

/// One packed framebuffer pixel.
///
/// Layout (most to least significant byte): alpha, red, green, blue.
/// `repr(transparent)` keeps a `[Argb]` castable to `[u32]` for presentation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Argb(pub u32);

impl Argb {
    /// Fill color of a framebuffer nothing has rendered into yet (opaque blue).
    pub const SENTINEL: Argb = Argb(0xFF00_00FF);

    pub const BLACK: Argb = Argb::opaque(0, 0, 0);
    pub const WHITE: Argb = Argb::opaque(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xFF, r, g, b)
    }

    #[inline]
    pub const fn from_u32(word: u32) -> Self {
        Self(word)
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// The pixel with its alpha byte cleared (`0x00RRGGBB`).
    #[inline]
    pub const fn without_alpha(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }
}

impl From<u32> for Argb {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}
