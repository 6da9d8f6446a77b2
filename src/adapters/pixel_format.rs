//! Pixel format conversion for framebuffer presenters.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("RGB source length {0} is not a multiple of 3")]
    RaggedSource(usize),
    #[error("RGBA destination holds {actual} bytes, expected {expected}")]
    DestinationMismatch { expected: usize, actual: usize },
}

/// Copies packed RGB pixels into an RGBA frame, setting alpha to 255.
///
/// `dst` must hold exactly four bytes for every three in `src`.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = (src.len() / 3) * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::DestinationMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
