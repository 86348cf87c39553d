//! RGBA8 software surface.

use crate::font::TextFont;
use crate::surface::{Rect, Surface};
use poster_core::Rgb;

/// Row-major RGBA8 pixels. Pixel `(x, y)` covers `[x, x+1) x [y, y+1)` in
/// canvas units and is hit-tested at its center.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    /// Pixel columns/rows whose centers fall inside `[lo, hi)`, clipped to
    /// `[0, limit)`.
    fn span(lo: f64, hi: f64, limit: u32) -> std::ops::Range<u32> {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().min(f64::from(limit));
        if end <= start {
            return 0..0;
        }
        start as u32..end as u32
    }

    /// Source-over blend of `rgb` at `alpha` coverage. Out-of-bounds pixels
    /// are skipped.
    fn blend(&mut self, x: i64, y: i64, rgb: [u8; 3], alpha: u8) {
        if alpha == 0 || x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        let px = &mut self.data[i..i + 4];

        let sa = f32::from(alpha) / 255.0;
        let da = f32::from(px[3]) / 255.0;
        let out_a = sa + da * (1.0 - sa);
        for (dst, &src) in px[..3].iter_mut().zip(&rgb) {
            let mixed = f32::from(src) * sa + f32::from(*dst) * da * (1.0 - sa);
            *dst = (mixed / out_a).round() as u8;
        }
        px[3] = (out_a * 255.0).round() as u8;
    }

    fn fill_region(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, rgba: [u8; 4]) {
        let cols = Self::span(x0, x1, self.width);
        for y in Self::span(y0, y1, self.height) {
            for x in cols.clone() {
                self.put(x, y, rgba);
            }
        }
    }
}

impl Surface for PixelBuffer {
    type Metrics = TextFont;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn metrics(&self, font_size: u32) -> TextFont {
        TextFont::at_size(font_size)
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.fill_region(rect.x, rect.y, rect.right(), rect.bottom(), color.to_rgba());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb, line_width: f64) {
        let half = line_width / 2.0;
        let rgba = color.to_rgba();
        let (l, t, r, b) = (rect.x, rect.y, rect.right(), rect.bottom());

        // top, bottom, left, right bands
        self.fill_region(l - half, t - half, r + half, t + half, rgba);
        self.fill_region(l - half, b - half, r + half, b + half, rgba);
        self.fill_region(l - half, t - half, l + half, b + half, rgba);
        self.fill_region(r - half, t - half, r + half, b + half, rgba);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_size: u32, color: Rgb) {
        let font = TextFont::at_size(font_size);
        let (glyphs, width) = font.shape(text);
        let left = x - width / 2.0;
        let baseline = y + font.middle_offset();
        let [r, g, b, _] = color.to_rgba();
        tracing::trace!(font = %font.descriptor(), glyphs = glyphs.len(), "raster: fill text");

        for glyph in glyphs {
            let (m, coverage) = font.rasterize(glyph.ch);
            if m.width == 0 {
                continue;
            }
            // fontdue's ymin is the bitmap's bottom edge above the baseline
            let gx = (left + glyph.x + f64::from(m.xmin)).round() as i64;
            let gy = (baseline - f64::from(m.ymin) - m.height as f64).round() as i64;
            for (i, &alpha) in coverage.iter().enumerate() {
                let px = gx + (i % m.width) as i64;
                let py = gy + (i / m.width) as i64;
                self.blend(px, py, [r, g, b], alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_new_buffer_is_transparent() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.data().len(), 4 * 3 * 4);
        assert_eq!(buf.pixel(3, 2), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.fill_rect(Rect::new(-5.0, 8.0, 100.0, 100.0), RED);
        assert_eq!(buf.pixel(0, 8), Some([255, 0, 0, 255]));
        assert_eq!(buf.pixel(9, 9), Some([255, 0, 0, 255]));
        assert_eq!(buf.pixel(0, 7), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_stroke_on_canvas_edge_leaves_one_pixel_inside() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), RED, 2.0);

        for i in 0..10 {
            assert_eq!(buf.pixel(i, 0), Some([255, 0, 0, 255]));
            assert_eq!(buf.pixel(i, 9), Some([255, 0, 0, 255]));
            assert_eq!(buf.pixel(0, i), Some([255, 0, 0, 255]));
            assert_eq!(buf.pixel(9, i), Some([255, 0, 0, 255]));
        }
        assert_eq!(buf.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(8, 5), Some([0, 0, 0, 0]));
    }

    /// Columns holding any ink, i.e. any pixel that is no longer transparent.
    fn inked_columns(buf: &PixelBuffer) -> Vec<u32> {
        (0..buf.width())
            .filter(|&x| (0..buf.height()).any(|y| buf.pixel(x, y).is_some_and(|px| px[3] > 0)))
            .collect()
    }

    #[test]
    fn test_text_is_centered_on_anchor() {
        let mut buf = PixelBuffer::new(100, 100);
        buf.fill_text("H", 50.0, 50.0, 50, RED);

        let inked: Vec<(u32, u32)> = (0..100)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| buf.pixel(x, y).is_some_and(|px| px[3] > 0))
            .collect();
        assert!(!inked.is_empty());

        let min_x = inked.iter().map(|p| p.0).min().unwrap();
        let max_x = inked.iter().map(|p| p.0).max().unwrap();
        let min_y = inked.iter().map(|p| p.1).min().unwrap();
        let max_y = inked.iter().map(|p| p.1).max().unwrap();

        // 'H' is symmetric, so its ink box is centered on the anchor
        assert!((i64::from(min_x + max_x) - 100).abs() <= 4, "x span {min_x}..={max_x}");
        assert!(min_y >= 25 && max_y < 75, "y span {min_y}..={max_y}");
        assert!(min_y < 50 && max_y > 50);

        // Stems are fully covered
        assert!(buf.data().chunks(4).any(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn test_partial_coverage_blends_with_background() {
        let mut buf = PixelBuffer::new(100, 60);
        buf.fill_rect(Rect::new(0.0, 0.0, 100.0, 60.0), Rgb::WHITE);
        buf.fill_text("O", 50.0, 30.0, 40, Rgb::BLACK);

        let greys = buf
            .data()
            .chunks(4)
            .filter(|px| px[3] == 255 && px[0] > 0 && px[0] < 255 && px[0] == px[1] && px[1] == px[2])
            .count();
        assert!(greys > 0, "expected antialiased edge pixels");
    }

    #[test]
    fn test_newline_draws_as_a_gap() {
        let mut newline = PixelBuffer::new(120, 60);
        newline.fill_text("a\nb", 60.0, 30.0, 40, RED);
        let mut spaced = PixelBuffer::new(120, 60);
        spaced.fill_text("a b", 60.0, 30.0, 40, RED);

        assert_eq!(newline, spaced);

        // Ink forms exactly two runs of columns, one per letter
        let cols = inked_columns(&newline);
        let runs = 1 + cols.windows(2).filter(|w| w[1] != w[0] + 1).count();
        assert_eq!(runs, 2, "inked columns: {cols:?}");
    }

    #[test]
    fn test_text_off_the_edge_is_clipped() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.fill_text("WWWW", 0.0, 0.0, 40, RED);
        assert_eq!(buf.data().len(), 20 * 20 * 4);
        assert!(buf.data().chunks(4).any(|px| px[3] > 0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut buf = PixelBuffer::new(5, 5);
        buf.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), RED);
        buf.clear();
        assert!(buf.data().iter().all(|&b| b == 0));
    }
}
