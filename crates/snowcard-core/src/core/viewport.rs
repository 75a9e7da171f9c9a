/// Viewport metrics shared by every effect.
///
/// Logical pixels are CSS pixels; device pixels are logical × dpr. The banner
/// rasterizes at device resolution and maps sampled coordinates back to
/// logical pixels so particle positions stay resolution-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Logical (CSS) width in pixels.
    pub logical_width: f32,
    /// Logical (CSS) height in pixels.
    pub logical_height: f32,
    /// Device pixel ratio (>= 1 on real displays; clamped to 1 minimum).
    pub dpr: f32,
}

impl ViewportMetrics {
    pub fn new(logical_width: f32, logical_height: f32, dpr: f32) -> Self {
        Self {
            logical_width: logical_width.max(0.0),
            logical_height: logical_height.max(0.0),
            dpr: dpr.max(1.0),
        }
    }

    /// Device-pixel width of the backing raster.
    pub fn device_width(&self) -> u32 {
        (self.logical_width * self.dpr) as u32
    }

    /// Device-pixel height of the backing raster.
    pub fn device_height(&self) -> u32 {
        (self.logical_height * self.dpr) as u32
    }

    /// Whether the viewport has any drawable area.
    pub fn is_empty(&self) -> bool {
        self.device_width() == 0 || self.device_height() == 0
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}
