/// Cairo image-surface bitmap.

use crate::core::error::{Error, Result};
use crate::platform::graphics::Bitmap;
use cairo::{Format, ImageSurface};
use std::io::{Read, Write};

/// A reference-counted ARGB32 raster. Clones share pixels.
#[derive(Debug, Clone)]
pub struct CairoBitmap {
    surface: ImageSurface,
}

impl CairoBitmap {
    /// Create a fully transparent bitmap.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        check_dimensions(width, height)?;
        let surface = ImageSurface::create(Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    /// Build a bitmap from straight (non-premultiplied) RGBA bytes.
    pub fn from_rgba(width: i32, height: i32, rgba: &[u8]) -> Result<Self> {
        check_dimensions(width, height)?;

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| Error::InvalidBitmap("image dimensions overflow".into()))?;
        if rgba.len() != expected {
            return Err(Error::InvalidBitmap(format!(
                "expected {} RGBA bytes for {}x{}, got {}",
                expected,
                width,
                height,
                rgba.len()
            )));
        }

        let stride = Format::ARgb32.stride_for_width(width as u32)? as usize;
        let mut buf = vec![0u8; stride * height as usize];
        for (i, chunk) in rgba.chunks_exact(4).enumerate() {
            let a = u32::from(chunk[3]);
            let r = (u32::from(chunk[0]) * a + 127) / 255;
            let g = (u32::from(chunk[1]) * a + 127) / 255;
            let b = (u32::from(chunk[2]) * a + 127) / 255;

            // Cairo stores premultiplied ARGB as native-endian words.
            let pixel = (a << 24) | (r << 16) | (g << 8) | b;
            let row = i / width as usize;
            let col = i % width as usize;
            let idx = row * stride + col * 4;
            buf[idx..idx + 4].copy_from_slice(&pixel.to_ne_bytes());
        }

        let surface =
            ImageSurface::create_for_data(buf, Format::ARgb32, width, height, stride as i32)?;
        Ok(Self { surface })
    }

    pub fn from_png<R: Read>(reader: &mut R) -> Result<Self> {
        match ImageSurface::create_from_png(reader) {
            Ok(surface) => Ok(Self { surface }),
            Err(e) => {
                log::warn!("Failed to decode PNG bitmap: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.surface.write_to_png(writer)?;
        Ok(())
    }

    /// Premultiplied ARGB value of one pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Result<u32> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds { x, y });
        }

        let opaque_mask = match self.surface.format() {
            Format::ARgb32 => 0,
            // The high byte of RGB24 pixels is unused.
            Format::Rgb24 => 0xFF00_0000,
            other => {
                return Err(Error::InvalidBitmap(format!(
                    "unsupported pixel format {:?}",
                    other
                )))
            }
        };

        let offset = y as usize * self.surface.stride() as usize + x as usize * 4;
        let mut value = 0u32;
        self.surface.with_data(|data| {
            value = u32::from_ne_bytes([
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ]);
        })?;
        Ok(value | opaque_mask)
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }
}

impl Bitmap for CairoBitmap {
    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<()> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidBitmap(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}
