/// Axis-aligned rectangle in pixel space, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn square(x: u32, y: u32, side: u32) -> Self {
        Self {
            x,
            y,
            width: side,
            height: side,
        }
    }
}

/// Something cells can paint on.
///
/// Interpreting the style string is up to the surface.
pub trait DrawingSurface {
    fn set_fill_style(&mut self, style: &str);
    fn fill_rect(&mut self, rect: PixelRect);
}
