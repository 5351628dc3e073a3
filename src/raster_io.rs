//! PNG raster loading and saving.
//!
//! The codec core only sees pixel grids; this module is the boundary to
//! on-disk image files. Input is normalized to 8-bit channels, palette
//! and grayscale images are expanded, and alpha is composited over white
//! before the pixels reach the codec.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use motif_codec::{Raster, Rgb};

use crate::error::RasterIoError;

/// Load a PNG file into a raster.
///
/// Missing files, non-PNG input, corrupt streams, and pixel layouts the
/// decoder cannot normalize all surface as
/// [`RasterIoError::UnreadableImage`].
pub fn load_png(path: &Path) -> Result<Raster, RasterIoError> {
    let unreadable = |detail: String| RasterIoError::UnreadableImage {
        path: path.to_path_buf(),
        detail,
    };

    let file = File::open(path).map_err(|e| unreadable(e.to_string()))?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(|e| unreadable(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| unreadable(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<Rgb> = match info.color_type {
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
            .collect(),
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| composite_over_white(p[0], p[1], p[2], p[3]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Rgb::new(v, v, v)).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| composite_over_white(p[0], p[0], p[0], p[1]))
            .collect(),
        other => return Err(unreadable(format!("unsupported color type {other:?}"))),
    };

    Ok(Raster::new(
        pixels,
        info.width as usize,
        info.height as usize,
    ))
}

/// Save a raster as an 8-bit RGB PNG.
///
/// Output I/O and encode failures surface as
/// [`RasterIoError::UnwritableDestination`].
pub fn save_png(raster: &Raster, path: &Path) -> Result<(), RasterIoError> {
    let unwritable = |detail: String| RasterIoError::UnwritableDestination {
        path: path.to_path_buf(),
        detail,
    };

    let file = File::create(path).map_err(|e| unwritable(e.to_string()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, raster.width() as u32, raster.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| unwritable(e.to_string()))?;
    png_writer
        .write_image_data(&raster.to_rgb_bytes())
        .map_err(|e| unwritable(e.to_string()))?;

    Ok(())
}

/// Alpha-composite a pixel against a white background.
fn composite_over_white(r: u8, g: u8, b: u8, a: u8) -> Rgb {
    if a == 255 {
        return Rgb::new(r, g, b);
    }
    if a == 0 {
        return Rgb::new(255, 255, 255);
    }
    let af = a as u16;
    let blend = |c: u8| ((c as u16 * af + 255 * (255 - af)) / 255) as u8;
    Rgb::new(blend(r), blend(g), blend(b))
}
