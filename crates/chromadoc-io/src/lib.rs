//! chromadoc-io - Image I/O
//!
//! PNG read/write for [`Pix`] images. PNG is the only raster format the
//! decomposition pipeline persists; layer and mask outputs are sRGB and
//! grayscale PNGs respectively.

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{read_png, write_png};

use chromadoc_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path
///
/// The format is determined by the file extension; only `.png` is
/// supported.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    check_png_extension(path)?;

    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write an image to a file path
///
/// The format is determined by the file extension; only `.png` is
/// supported.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    check_png_extension(path)?;

    let file = File::create(path)?;
    write_png(pix, BufWriter::new(file))
}

fn check_png_extension(path: &Path) -> IoResult<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => Ok(()),
        other => Err(IoError::UnsupportedFormat(format!(
            "expected a .png path, got {:?}",
            other.unwrap_or("<none>")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromadoc_core::PixelDepth;

    #[test]
    fn test_extension_check() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        let dir = std::env::temp_dir();
        assert!(write_image(&pix, dir.join("chromadoc-io-test.bmp")).is_err());
        assert!(read_image(dir.join("chromadoc-io-test.jpg")).is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let pix = Pix::new_with_value(
            3,
            3,
            PixelDepth::Bit32,
            chromadoc_core::color::compose_rgb(10, 20, 30),
        )
        .unwrap();

        let path = std::env::temp_dir().join("chromadoc-io-roundtrip.png");
        write_image(&pix, &path).unwrap();
        let decoded = read_image(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(decoded.equals(&pix));
    }
}
