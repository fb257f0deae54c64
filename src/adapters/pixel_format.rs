//! Pixel format conversion for presentation adapters.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    PartialRgbPixel { len: usize },
    PixelCountMismatch { rgb_pixels: usize, rgba_pixels: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartialRgbPixel { len } => {
                write!(f, "rgb length {} is not a multiple of 3", len)
            }
            Self::PixelCountMismatch {
                rgb_pixels,
                rgba_pixels,
            } => write!(
                f,
                "rgb buffer holds {} pixels but rgba buffer holds {}",
                rgb_pixels, rgba_pixels
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into packed RGBA with opaque alpha.
///
/// Both buffers must describe the same number of pixels; nothing is written
/// otherwise.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialRgbPixel { len: src.len() });
    }

    let rgb_pixels = src.len() / 3;
    let rgba_pixels = dst.len() / 4;
    if dst.len() % 4 != 0 || rgb_pixels != rgba_pixels {
        return Err(PixelFormatError::PixelCountMismatch {
            rgb_pixels,
            rgba_pixels,
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let mut dst = vec![0; 16];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        assert_eq!(copy_rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_copy_rgb_to_rgba_rejects_partial_pixel() {
        let mut dst = vec![0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::PartialRgbPixel { len: 4 })
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_size_mismatch_leaves_dst_untouched() {
        let mut dst = vec![7; 4];

        let result = copy_rgb_to_rgba(&[10, 20, 30, 40, 50, 60], &mut dst);

        assert_eq!(
            result,
            Err(PixelFormatError::PixelCountMismatch {
                rgb_pixels: 2,
                rgba_pixels: 1
            })
        );
        assert_eq!(dst, vec![7; 4]);
    }
}
