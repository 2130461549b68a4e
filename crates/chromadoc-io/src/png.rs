//! PNG image format support

use crate::{IoError, IoResult};
use chromadoc_core::{Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// 8-bit grayscale files load as 8-bpp images; 8-bit RGB and RGBA files
/// load as 32-bpp images (the alpha channel is dropped - the pipeline has
/// no transparency model).
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let pix_depth = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => PixelDepth::Bit8,
        (ColorType::Rgb, BitDepth::Eight) | (ColorType::Rgba, BitDepth::Eight) => {
            PixelDepth::Bit32
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let pix = Pix::new(width, height, pix_depth)?;
    let mut pix_mut = pix.try_into_mut().expect("freshly created pix");

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    match color_type {
        ColorType::Grayscale => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let val = data[row_start + x as usize];
                    pix_mut.set_pixel_unchecked(x, y, val as u32);
                }
            }
        }
        ColorType::Rgb => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 3);
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    pix_mut.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        ColorType::Rgba => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 4);
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    pix_mut.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        _ => unreachable!(),
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// 8-bpp images are written as 8-bit grayscale, 32-bpp images as 8-bit RGB.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, bytes_per_pixel) = match pix.depth() {
        PixelDepth::Bit8 => (ColorType::Grayscale, 1usize),
        PixelDepth::Bit32 => (ColorType::Rgb, 3usize),
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width as usize * bytes_per_pixel;
    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        match color_type {
            ColorType::Grayscale => {
                for x in 0..width {
                    data[row_start + x as usize] = pix.get_pixel_unchecked(x, y) as u8;
                }
            }
            ColorType::Rgb => {
                for x in 0..width {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    let idx = row_start + (x as usize * 3);
                    data[idx] = r;
                    data[idx + 1] = g;
                    data[idx + 2] = b;
                }
            }
            _ => unreachable!(),
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
