use thiserror::Error;

use super::{Framebuffer, PresentationDescriptor};
use crate::paint::Argb;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum BlitError {
    #[error("descriptor is {descriptor:?} but framebuffer is {framebuffer:?}")]
    DimensionMismatch {
        descriptor: (u32, u32),
        framebuffer: (u32, u32),
    },

    #[error("scanout buffer holds {actual} pixels, expected {expected}")]
    TargetSize { expected: usize, actual: usize },
}

/// Copies `source` into a native scanout buffer of the same size.
///
/// No scaling: source and destination are both `width x height`. Row order
/// follows the descriptor. The scanout format is `0x00RRGGBB`, so alpha is
/// dropped. `source` is only read.
pub fn blit(
    descriptor: &PresentationDescriptor,
    source: &Framebuffer,
    target: &mut [u32],
) -> Result<(), BlitError> {
    let dims = (descriptor.width(), descriptor.height());
    if dims != (source.width(), source.height()) {
        return Err(BlitError::DimensionMismatch {
            descriptor: dims,
            framebuffer: (source.width(), source.height()),
        });
    }
    if target.len() != source.len() {
        return Err(BlitError::TargetSize {
            expected: source.len(),
            actual: target.len(),
        });
    }

    let width = source.width() as usize;
    let dst_rows = target.chunks_exact_mut(width);

    if descriptor.is_top_down() {
        for (dst, src) in dst_rows.zip(source.rows()) {
            copy_row(dst, src);
        }
    } else {
        for (dst, src) in dst_rows.zip(source.rows().rev()) {
            copy_row(dst, src);
        }
    }

    log::trace!("blit {}x{}", dims.0, dims.1);
    Ok(())
}

#[inline]
fn copy_row(dst: &mut [u32], src: &[Argb]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.without_alpha();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped(width: u32, height: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(width, height, Argb::BLACK);
        for y in 0..height {
            for x in 0..width {
                fb.set(x, y, Argb::opaque(y as u8, x as u8, 0x7F));
            }
        }
        fb
    }

    #[test]
    fn top_down_copies_rows_in_order() {
        let fb = striped(4, 3);
        let desc = PresentationDescriptor::top_down(4, 3).unwrap();
        let mut target = vec![0u32; 12];

        blit(&desc, &fb, &mut target).unwrap();

        let expected: Vec<u32> = fb.pixels().iter().map(|p| p.without_alpha()).collect();
        assert_eq!(target, expected);
    }

    #[test]
    fn bottom_up_reverses_rows() {
        let fb = striped(2, 3);
        let desc = PresentationDescriptor::top_down(2, 3).unwrap().flipped();
        let mut target = vec![0u32; 6];

        blit(&desc, &fb, &mut target).unwrap();

        // First scanout row holds the last framebuffer row.
        assert_eq!(target[0], fb.get(0, 2).unwrap().without_alpha());
        assert_eq!(target[5], fb.get(1, 0).unwrap().without_alpha());
    }

    #[test]
    fn source_is_untouched() {
        let fb = striped(3, 3);
        let before = fb.clone();
        let desc = PresentationDescriptor::top_down(3, 3).unwrap();
        let mut target = vec![0u32; 9];

        blit(&desc, &fb, &mut target).unwrap();
        blit(&desc, &fb, &mut target).unwrap();

        assert_eq!(fb, before);
    }

    #[test]
    fn wrong_target_size_is_rejected() {
        let fb = striped(3, 3);
        let desc = PresentationDescriptor::top_down(3, 3).unwrap();
        let mut target = vec![0u32; 8];

        assert_eq!(
            blit(&desc, &fb, &mut target),
            Err(BlitError::TargetSize { expected: 9, actual: 8 })
        );
    }

    #[test]
    fn descriptor_mismatch_is_rejected() {
        let fb = striped(3, 3);
        let desc = PresentationDescriptor::top_down(4, 3).unwrap();
        let mut target = vec![0u32; 9];

        assert!(matches!(
            blit(&desc, &fb, &mut target),
            Err(BlitError::DimensionMismatch { .. })
        ));
    }
}
