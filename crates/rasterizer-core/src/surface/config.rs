use super::CreationError;

/// Display surface configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceConfig {
    pub title: String,

    /// Client-area width in physical pixels; also the framebuffer width.
    pub width: u32,

    /// Client-area height in physical pixels; also the framebuffer height.
    pub height: u32,

    /// Lets the user resize the native window. The framebuffer stays fixed
    /// either way, so this is off unless a caller really wants it.
    pub resizable: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            title: "rasterizer".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

impl SurfaceConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Largest framebuffer accepted, in pixels (1 GiB of `Argb`).
    pub const MAX_PIXELS: u64 = 1 << 28;

    /// Checks that the size is non-zero, representable by the presenter and
    /// small enough to allocate.
    pub fn validate(&self) -> Result<(), CreationError> {
        let fits = |v: u32| v > 0 && i32::try_from(v).is_ok();
        let pixels = u64::from(self.width) * u64::from(self.height);
        if fits(self.width) && fits(self.height) && pixels <= Self::MAX_PIXELS {
            Ok(())
        } else {
            Err(CreationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}
