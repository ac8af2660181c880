// File: crates/plane-render-skia/src/lib.rs
// Summary: Skia-backed canvas and headless raster pipelines (PNG, RGBA8).

use anyhow::Result;
use skia_safe as skia;

use plane_core::{Canvas, Color, PlaneSurface, Point, Rect, Segment, TextStyle};

/// [`Canvas`] implementation over a Skia canvas.
///
/// Color and stroke are tracked here and applied through a fresh paint per
/// call; clipping uses a save/restore pair so replacing or clearing the clip
/// restores the canvas to its pre-clip state.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    color: Color,
    stroke: f32,
    clip: Option<Rect>,
    clip_saved: bool,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self {
            canvas,
            color: Color::BLACK,
            stroke: 1.0,
            clip: None,
            clip_saved: false,
        }
    }

    fn paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia_color(self.color));
        paint.set_anti_alias(true);
        paint
    }

    fn stroke_paint(&self) -> skia::Paint {
        let mut paint = self.paint();
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.stroke.max(0.0));
        paint.set_stroke_cap(skia::paint::Cap::Butt);
        paint.set_stroke_join(skia::paint::Join::Bevel);
        paint
    }
}

impl Canvas for SkiaCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect) {
        let mut paint = self.paint();
        paint.set_style(skia::paint::Style::Fill);
        self.canvas.draw_rect(to_skia_rect(rect), &paint);
    }

    fn draw_line(&mut self, segment: Segment) {
        self.canvas.draw_line(
            (segment.start.x, segment.start.y),
            (segment.end.x, segment.end.y),
            &self.stroke_paint(),
        );
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let font = make_font(style);
        let mut paint = self.paint();
        paint.set_style(skia::paint::Style::Fill);
        self.canvas.draw_str(text, (at.x, at.y), &font, &paint);
    }

    fn text_size(&self, text: &str, style: &TextStyle) -> (f32, f32) {
        let font = make_font(style);
        let (advance, bounds) = font.measure_str(text, None);
        (advance, bounds.height())
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_stroke(&mut self, width: f32) {
        self.stroke = width;
    }

    fn stroke(&self) -> f32 {
        self.stroke
    }

    fn set_clip(&mut self, rect: Option<Rect>) {
        if self.clip_saved {
            self.canvas.restore();
            self.clip_saved = false;
        }
        if let Some(r) = rect {
            self.canvas.save();
            self.canvas.clip_rect(to_skia_rect(r), None, None);
            self.clip_saved = true;
        }
        self.clip = rect;
    }

    fn clip(&self) -> Option<Rect> {
        self.clip
    }
}

fn to_skia_color(color: Color) -> skia::Color {
    skia::Color::from_argb(255, color.r, color.g, color.b)
}

fn to_skia_rect(rect: Rect) -> skia::Rect {
    skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn make_font(style: &TextStyle) -> skia::Font {
    let weight = if style.bold {
        skia::font_style::Weight::BOLD
    } else {
        skia::font_style::Weight::NORMAL
    };
    let slant = if style.italic {
        skia::font_style::Slant::Italic
    } else {
        skia::font_style::Slant::Upright
    };
    let font_style = skia::FontStyle::new(weight, skia::font_style::Width::NORMAL, slant);
    let mgr = skia::FontMgr::default();
    match mgr.match_family_style(&style.family, font_style) {
        Some(typeface) => skia::Font::from_typeface(typeface, style.size),
        None => {
            let mut font = skia::Font::default();
            font.set_size(style.size);
            font
        }
    }
}

/// Render one frame of `surface` to an RGBA8 buffer.
/// Returns (pixels, width, height, stride).
pub fn render_to_rgba8(
    surface: &mut PlaneSurface,
    width: i32,
    height: i32,
) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut raster = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    {
        let mut canvas = SkiaCanvas::new(raster.canvas());
        surface.render(&mut canvas, width as f32, height as f32);
        canvas.set_clip(None);
    }

    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !raster.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, width, height, stride))
}

/// Render one frame of `surface` and return the encoded PNG bytes.
pub fn render_to_png_bytes(surface: &mut PlaneSurface, width: i32, height: i32) -> Result<Vec<u8>> {
    let mut raster = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    {
        let mut canvas = SkiaCanvas::new(raster.canvas());
        surface.render(&mut canvas, width as f32, height as f32);
        canvas.set_clip(None);
    }

    let image = raster.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render one frame of `surface` to a PNG at `output_png_path`.
pub fn render_to_png(
    surface: &mut PlaneSurface,
    width: i32,
    height: i32,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(surface, width, height)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
