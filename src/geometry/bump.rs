//! Ribosome bump raster for the rough-ER surface.
//!
//! Tens of thousands of tiny geometric ribosomes would be wasted polygons;
//! instead a small off-screen raster of random light/dark dots fakes the
//! high-frequency surface detail, tiled across each sheet.

use rand::Rng;

/// Raster side length in texels.
pub const SIZE: usize = 256;
/// Number of dots splatted into the raster.
pub const DOT_COUNT: usize = 30_000;
/// Fraction of dots drawn light (the rest are dark).
pub const LIGHT_FRACTION: f64 = 0.8;
/// Tiling repeat of the raster across a sheet (u, v).
pub const TILING: (f32, f32) = (12.0, 4.0);

/// An owned RGBA8 raster. Released with the organelle that built it.
#[derive(Debug, Clone)]
pub struct BumpRaster {
    /// Texel data, row-major RGBA8.
    pub pixels: Vec<u8>,
    /// Side length in texels (square).
    pub size: usize,
}

impl BumpRaster {
    /// Texel at (x, y) as RGBA.
    #[must_use]
    pub fn texel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.size + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Generate the bump raster: mid-gray base with random light/dark dots.
#[must_use]
pub fn generate(rng: &mut impl Rng) -> BumpRaster {
    let mut pixels = vec![0u8; SIZE * SIZE * 4];
    // Mid-gray base reads as flat in a bump channel
    for px in pixels.chunks_exact_mut(4) {
        px.copy_from_slice(&[128, 128, 128, 255]);
    }
    for _ in 0..DOT_COUNT {
        let x = rng.random_range(0..SIZE);
        let y = rng.random_range(0..SIZE);
        let value: u8 = if rng.random_bool(LIGHT_FRACTION) {
            rng.random_range(170..=230)
        } else {
            rng.random_range(30..=90)
        };
        let i = (y * SIZE + x) * 4;
        pixels[i] = value;
        pixels[i + 1] = value;
        pixels[i + 2] = value;
    }
    BumpRaster { pixels, size: SIZE }
}
