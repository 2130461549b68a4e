//! Convolution kernels
//!
//! Defines kernel structures for image convolution and histogram smoothing.

use crate::{FilterError, FilterResult};

/// Derive a Gaussian sigma from an odd kernel size.
///
/// The conventional size-to-sigma rule used when a caller specifies only
/// the aperture: `sigma = 0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
pub fn sigma_for_size(size: u32) -> f64 {
    0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// A 2D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a slice of values
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        let size = (width * height) as usize;
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(
                "width and height must be > 0".to_string(),
            ));
        }
        if data.len() != size {
            return Err(FilterError::InvalidKernel(format!(
                "data length {} doesn't match dimensions {}x{}",
                data.len(),
                width,
                height
            )));
        }

        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Create a normalized 2D Gaussian kernel
    ///
    /// The size must be odd so the kernel has a well-defined center. A
    /// non-positive sigma is replaced by the size-derived default
    /// ([`sigma_for_size`]).
    pub fn gaussian(size: u32, sigma: f64) -> FilterResult<Self> {
        if size == 0 || size.is_multiple_of(2) {
            return Err(FilterError::InvalidKernel(
                "Gaussian kernel size must be odd and > 0 to have a well-defined center"
                    .to_string(),
            ));
        }

        let sigma = if sigma > 0.0 {
            sigma
        } else {
            sigma_for_size(size)
        };

        let half = (size / 2) as i64;
        let mut data = vec![0.0f64; (size * size) as usize];
        let mut sum = 0.0f64;

        let two_sigma_sq = 2.0 * sigma * sigma;

        for y in 0..size {
            for x in 0..size {
                let dx = (x as i64 - half) as f64;
                let dy = (y as i64 - half) as f64;
                let value = (-(dx * dx + dy * dy) / two_sigma_sq).exp();
                data[(y * size + x) as usize] = value;
                sum += value;
            }
        }

        // Normalize
        for v in &mut data {
            *v /= sum;
        }

        Ok(Kernel {
            width: size,
            height: size,
            cx: size / 2,
            cy: size / 2,
            data,
        })
    }

    /// Create a normalized 1D Gaussian kernel of odd length
    ///
    /// Used for smoothing histograms. A non-positive sigma is replaced by
    /// the size-derived default.
    pub fn gaussian_1d(size: u32, sigma: f64) -> FilterResult<Self> {
        if size == 0 || size.is_multiple_of(2) {
            return Err(FilterError::InvalidKernel(
                "Gaussian kernel size must be odd and > 0 to have a well-defined center"
                    .to_string(),
            ));
        }

        let sigma = if sigma > 0.0 {
            sigma
        } else {
            sigma_for_size(size)
        };

        let half = (size / 2) as i64;
        let mut data = vec![0.0f64; size as usize];
        let mut sum = 0.0f64;

        let two_sigma_sq = 2.0 * sigma * sigma;

        for x in 0..size {
            let dx = (x as i64 - half) as f64;
            let value = (-(dx * dx) / two_sigma_sq).exp();
            data[x as usize] = value;
            sum += value;
        }

        for v in &mut data {
            *v /= sum;
        }

        Ok(Kernel {
            width: size,
            height: 1,
            cx: size / 2,
            cy: 0,
            data,
        })
    }

    /// Get the kernel width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get a value at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Get the sum of all kernel values
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
