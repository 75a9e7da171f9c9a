//! Offscreen alpha raster of the banner text, plus the sparse sampler that
//! turns glyph pixels into particle rest positions.

use glam::Vec2;

/// Alpha threshold above which a sampled pixel becomes a particle (0-255).
pub const ALPHA_THRESHOLD: u8 = 128;

/// One byte of alpha per device pixel, row-major.
///
/// The browser path fills this from canvas-2D `getImageData`; the native path
/// fills it from the baked stroke font. Either way sampling is identical and
/// deterministic.
#[derive(Debug, Clone)]
pub struct GlyphRaster {
    device_width: u32,
    device_height: u32,
    dpr: f32,
    alpha: Vec<u8>,
}

impl GlyphRaster {
    /// Wrap an alpha buffer. Returns `None` when the buffer length does not
    /// match the dimensions (a malformed hand-off from JS degrades to "no
    /// raster", never a panic).
    pub fn from_alpha(device_width: u32, device_height: u32, dpr: f32, alpha: Vec<u8>) -> Option<Self> {
        if alpha.len() != (device_width as usize) * (device_height as usize) {
            log::warn!(
                "glyph raster size mismatch: {}x{} vs {} bytes",
                device_width,
                device_height,
                alpha.len()
            );
            return None;
        }
        Some(Self {
            device_width,
            device_height,
            dpr: dpr.max(1.0),
            alpha,
        })
    }

    /// An all-transparent raster of the given size.
    pub fn blank(device_width: u32, device_height: u32, dpr: f32) -> Self {
        Self {
            device_width,
            device_height,
            dpr: dpr.max(1.0),
            alpha: vec![0; (device_width as usize) * (device_height as usize)],
        }
    }

    pub fn device_width(&self) -> u32 {
        self.device_width
    }

    pub fn device_height(&self) -> u32 {
        self.device_height
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Alpha at a device-pixel coordinate; 0 outside the raster.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.device_width || y >= self.device_height {
            return 0;
        }
        self.alpha[(y as usize) * (self.device_width as usize) + x as usize]
    }

    /// Stamp a filled disc of full alpha (used by the stroke rasterizer).
    pub(crate) fn stamp_disc(&mut self, center: Vec2, radius: f32) {
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil() as u32).min(self.device_width.saturating_sub(1));
        let y1 = ((center.y + radius).ceil() as u32).min(self.device_height.saturating_sub(1));
        if self.device_width == 0 || self.device_height == 0 {
            return;
        }
        let r2 = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.alpha[(y as usize) * (self.device_width as usize) + x as usize] = 255;
                }
            }
        }
    }

    /// Sampling stride in device pixels: coarser on high-dpr displays so the
    /// particle density stays visually consistent.
    pub fn stride(&self) -> u32 {
        ((2.0 * self.dpr).round() as u32).max(1)
    }

    /// Walk the raster at the fixed stride and collect the logical-pixel
    /// coordinate of every sampled pixel whose alpha exceeds `threshold`.
    ///
    /// Deterministic: the same raster always yields the same ordered set.
    /// An empty or zero-size raster yields an empty vec.
    pub fn sample(&self, threshold: u8) -> Vec<Vec2> {
        let mut coords = Vec::new();
        let step = self.stride();
        let mut y = 0;
        while y < self.device_height {
            let mut x = 0;
            while x < self.device_width {
                if self.alpha_at(x, y) > threshold {
                    coords.push(Vec2::new(x as f32 / self.dpr, y as f32 / self.dpr));
                }
                x += step;
            }
            y += step;
        }
        coords
    }
}
