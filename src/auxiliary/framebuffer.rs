use std::str::FromStr;

use log::warn;
use palette::{Srgb, Srgba};

use crate::traits_and_structs::surface::{DrawingSurface, PixelRect};

pub type FillColor = Srgba<u8>;

/// Drawing surface over an RGBA8 frame such as the one handed out by `pixels`.
///
/// Fills are composited source-over in sRGB space, like a canvas.
pub struct FrameSurface<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    fill: FillColor,
}

impl<'a> FrameSurface<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        assert_eq!(frame.len(), 4 * width as usize * height as usize);
        Self {
            frame,
            width,
            height,
            fill: Srgba::new(0, 0, 0, 0xff),
        }
    }

    pub fn fill_style(&self) -> FillColor {
        self.fill
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<FillColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        let px = &self.frame[i..i + 4];
        Some(Srgba::new(px[0], px[1], px[2], px[3]))
    }
}

impl DrawingSurface for FrameSurface<'_> {
    /// Unknown styles are ignored, keeping the previous fill like a canvas does.
    fn set_fill_style(&mut self, style: &str) {
        match parse_color(style) {
            Some(color) => self.fill = color,
            None => warn!("ignoring unparseable fill style {:?}", style),
        }
    }

    fn fill_rect(&mut self, rect: PixelRect) {
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);
        if rect.x >= x_end || rect.y >= y_end || self.fill.alpha == 0 {
            return;
        }
        let fill = self.fill;
        let stride = 4 * self.width as usize;
        for y in rect.y..y_end {
            let row = y as usize * stride;
            let span = &mut self.frame[row + 4 * rect.x as usize..row + 4 * x_end as usize];
            for pix in span.chunks_exact_mut(4) {
                if fill.alpha == 0xff {
                    pix.copy_from_slice(&[fill.red, fill.green, fill.blue, fill.alpha]);
                } else {
                    source_over(fill, pix);
                }
            }
        }
    }
}

fn source_over(src: FillColor, dst: &mut [u8]) {
    let sa = src.alpha as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        dst.copy_from_slice(&[0; 4]);
        return;
    }
    for (d, s) in dst[..3].iter_mut().zip([src.red, src.green, src.blue]) {
        let c = (s as f32 * sa + *d as f32 * da * (1.0 - sa)) / out_a;
        *d = c.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, SVG color names and
/// `transparent`.
pub fn parse_color(style: &str) -> Option<FillColor> {
    let style = style.trim();
    if let Some(hex) = style.strip_prefix('#') {
        // palette slices by byte offset
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return Srgba::<u8>::from_str(hex)
            .or_else(|_| Srgb::<u8>::from_str(hex).map(|c| Srgba::new(c.red, c.green, c.blue, 0xff)))
            .ok();
    }
    let name = style.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Srgba::new(0, 0, 0, 0));
    }
    palette::named::from_str(&name).map(|c| Srgba::new(c.red, c.green, c.blue, 0xff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::cell::{GridCell, ALIVE_COLOR, DEAD_COLOR};
    use crate::traits_and_structs::context::GridContext;
    use crate::traits_and_structs::render_trait::Renderable;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> Option<FillColor> {
        Some(Srgba::new(r, g, b, a))
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#000000"), rgba(0, 0, 0, 0xff));
        assert_eq!(parse_color("#FFFFFF"), rgba(0xff, 0xff, 0xff, 0xff));
        assert_eq!(parse_color("#1a2b3c"), rgba(0x1a, 0x2b, 0x3c, 0xff));
        assert_eq!(parse_color("#1a2b3c80"), rgba(0x1a, 0x2b, 0x3c, 0x80));
        assert_eq!(parse_color("#f0a"), rgba(0xff, 0x00, 0xaa, 0xff));
        assert_eq!(parse_color("#f0a8"), rgba(0xff, 0x00, 0xaa, 0x88));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("Red"), rgba(0xff, 0, 0, 0xff));
        assert_eq!(parse_color(" grey "), rgba(0x80, 0x80, 0x80, 0xff));
        assert_eq!(parse_color("tomato"), rgba(0xff, 0x63, 0x47, 0xff));
        assert_eq!(parse_color("transparent"), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("#"), None);
        assert_eq!(parse_color("ff0000"), None);
        assert_eq!(parse_color("#ééé"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_bad_style_keeps_previous_fill() {
        let mut frame = vec![0; 4 * 2 * 2];
        let mut surface = FrameSurface::new(&mut frame, 2, 2);
        assert_eq!(Some(surface.fill_style()), rgba(0, 0, 0, 0xff));
        surface.set_fill_style("blue");
        surface.set_fill_style("nonsense");
        assert_eq!(Some(surface.fill_style()), rgba(0, 0, 0xff, 0xff));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut frame = vec![0; 4 * 4 * 4];
        let mut surface = FrameSurface::new(&mut frame, 4, 4);
        surface.set_fill_style("white");
        surface.fill_rect(PixelRect::square(2, 2, 10));
        surface.fill_rect(PixelRect::square(9, 9, 3));
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x >= 2 && y >= 2 { rgba(0xff, 0xff, 0xff, 0xff) } else { rgba(0, 0, 0, 0) };
                assert_eq!(surface.pixel(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_cells_paint_frame() {
        let ctx = GridContext::new(2, 2);
        let mut frame = vec![0; 4 * 4 * 4];
        let mut surface = FrameSurface::new(&mut frame, 4, 4);
        let alive = GridCell::explicit(1, 0, true, &ctx);
        let dead = GridCell::linear(2, false, DEAD_COLOR, &ctx);
        alive.render(&mut surface);
        dead.render(&mut surface);

        let black = parse_color(ALIVE_COLOR);
        let white = parse_color(DEAD_COLOR);
        assert_eq!(surface.pixel(2, 0), black);
        assert_eq!(surface.pixel(3, 1), black);
        assert_eq!(surface.pixel(0, 2), white);
        assert_eq!(surface.pixel(1, 3), white);
        assert_eq!(surface.pixel(0, 0), rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut frame = vec![0xff; 4 * 2];
        let mut surface = FrameSurface::new(&mut frame, 2, 1);
        surface.set_fill_style("#00000080");
        surface.fill_rect(PixelRect::square(0, 0, 1));
        assert_eq!(surface.pixel(0, 0), rgba(0x7f, 0x7f, 0x7f, 0xff));
        assert_eq!(surface.pixel(1, 0), rgba(0xff, 0xff, 0xff, 0xff));
    }

    #[test]
    fn test_transparent_fill_keeps_pixels() {
        let mut frame = vec![0x40; 4];
        let mut surface = FrameSurface::new(&mut frame, 1, 1);
        surface.set_fill_style("transparent");
        surface.fill_rect(PixelRect::square(0, 0, 1));
        assert_eq!(surface.pixel(0, 0), rgba(0x40, 0x40, 0x40, 0x40));
    }

    #[test]
    fn test_blend_onto_empty_pixel() {
        let mut frame = vec![0; 4];
        let mut surface = FrameSurface::new(&mut frame, 1, 1);
        surface.set_fill_style("#ff000080");
        surface.fill_rect(PixelRect::square(0, 0, 1));
        assert_eq!(surface.pixel(0, 0), rgba(0xff, 0, 0, 0x80));
    }

    #[test]
    #[should_panic]
    fn test_short_frame_rejected() {
        let mut frame = vec![0; 4 * 3];
        let _ = FrameSurface::new(&mut frame, 2, 2);
    }

    #[test]
    fn test_render_order_independent() {
        let ctx = GridContext::new(1, 3);
        let cells = [
            GridCell::linear(0, true, "red", &ctx),
            GridCell::linear(4, true, "#00ff00", &ctx),
            GridCell::explicit(2, 2, true, &ctx),
        ];

        let mut forward = vec![0; 4 * 9];
        let mut surface = FrameSurface::new(&mut forward, 3, 3);
        cells.iter().for_each(|c| c.render(&mut surface));

        let mut backward = vec![0; 4 * 9];
        let mut surface = FrameSurface::new(&mut backward, 3, 3);
        cells.iter().rev().for_each(|c| c.render(&mut surface));

        assert_eq!(forward, backward);
    }
}
