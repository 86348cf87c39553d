use crate::surface::{Rect, Surface};
use layout::{CanvasSize, TextMeasure};
use poster_core::{EditorState, Rgb};

pub const BACKGROUND: Rgb = Rgb::from_hex(0xF8F9FA);
pub const BORDER: Rgb = Rgb::from_hex(0xE9ECEF);
pub const BORDER_WIDTH: f64 = 2.0;

/// One drawing instruction. A frame is a full list, starting with `Clear`.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb,
        line_width: f64,
    },
    /// Centered horizontally and vertically on `(x, y)`.
    Text {
        content: String,
        x: f64,
        y: f64,
        font_size: u32,
        color: Rgb,
    },
}

/// Builds the frame for `state`: clear, background, border, then one text
/// command per wrapped line.
pub fn display_list<M>(state: &EditorState, canvas: CanvasSize, measure: &M) -> Vec<PaintCommand>
where
    M: TextMeasure + ?Sized,
{
    let layout = layout::compute_layout(
        &state.text,
        state.font_size.get(),
        state.color,
        canvas,
        measure,
    );
    let full = Rect::new(0.0, 0.0, canvas.width, canvas.height);

    let mut commands = Vec::with_capacity(layout.len() + 3);
    commands.push(PaintCommand::Clear);
    commands.push(PaintCommand::FillRect {
        rect: full,
        color: BACKGROUND,
    });
    commands.push(PaintCommand::StrokeRect {
        rect: full,
        color: BORDER,
        line_width: BORDER_WIDTH,
    });
    commands.extend(layout.lines.into_iter().map(|line| PaintCommand::Text {
        content: line.content,
        x: layout.anchor_x,
        y: line.baseline_y,
        font_size: layout.font_size,
        color: layout.color,
    }));
    commands
}

/// Replays `commands` in order.
pub fn paint<S>(surface: &mut S, commands: &[PaintCommand])
where
    S: Surface + ?Sized,
{
    for cmd in commands {
        match cmd {
            PaintCommand::Clear => surface.clear(),
            PaintCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            PaintCommand::StrokeRect {
                rect,
                color,
                line_width,
            } => surface.stroke_rect(*rect, *color, *line_width),
            PaintCommand::Text {
                content,
                x,
                y,
                font_size,
                color,
            } => surface.fill_text(content, *x, *y, *font_size, *color),
        }
    }
}

/// Lays out `state` with the surface's own font metrics and paints it.
pub fn render<S>(surface: &mut S, state: &EditorState)
where
    S: Surface,
{
    let (width, height) = surface.size();
    let canvas = CanvasSize::new(f64::from(width), f64::from(height));
    let metrics = surface.metrics(state.font_size.get());
    let commands = display_list(state, canvas, &metrics);
    tracing::trace!(commands = commands.len(), "render: painting frame");
    paint(surface, &commands);
}
