use editor_state::PosterSession;
use fltk::prelude::*;
use io::ExportSink;
use poster_core::{EditorState, FontSize, Rgb};
use std::cell::RefCell;
use std::rc::Rc;

// ==========================================
// UTILS
// ==========================================
#[inline(always)]
fn fl_color(c: Rgb) -> fltk::enums::Color {
    fltk::enums::Color::from_rgb(c.r, c.g, c.b)
}

// ==========================================
// 1. WIDGETS
// ==========================================
/// Handles to every widget the controller touches. fltk widgets are cheap
/// reference-counted handles, so the whole set is cloned into callbacks.
#[derive(Clone)]
pub struct Widgets {
    pub text: fltk::input::MultilineInput,
    pub size: fltk::valuator::HorNiceSlider,
    pub size_label: fltk::frame::Frame,
    pub color: fltk::button::Button,
    pub color_label: fltk::frame::Frame,
    pub saved_label: fltk::frame::Frame,
    pub position_label: fltk::frame::Frame,
    pub undo: fltk::button::Button,
    pub redo: fltk::button::Button,
    pub download: fltk::button::Button,
    pub canvas: fltk::widget::Widget,
}

// ==========================================
// 2. MAIN COMPONENT API
// ==========================================
/// Undo, redo, download.
type ToolbarButtons = (fltk::button::Button, fltk::button::Button, fltk::button::Button);

pub struct PosterEditor {
    pub group: fltk::group::Group,
    pub widgets: Widgets,
    pub session: Rc<RefCell<PosterSession>>,
}

impl PosterEditor {
    pub const PANEL_W: i32 = 300;
    pub const TOOLBAR_H: i32 = 50;
    const PAD: i32 = 10;

    /// Window size that fits the panel, toolbar and full-size canvas.
    pub fn preferred_size() -> (i32, i32) {
        (
            Self::PAD * 3 + Self::PANEL_W + PosterSession::WIDTH as i32,
            Self::TOOLBAR_H + Self::PAD * 2 + PosterSession::HEIGHT as i32 + 30,
        )
    }

    pub fn new(x: i32, y: i32, session: Rc<RefCell<PosterSession>>) -> Self {
        let (w, h) = Self::preferred_size();
        let grp = fltk::group::Group::default().with_pos(x, y).with_size(w, h);

        let toolbar = Self::build_toolbar(x, y, w);
        let panel_y = y + Self::TOOLBAR_H + Self::PAD;

        let canvas = fltk::widget::Widget::default()
            .with_pos(x + Self::PAD * 2 + Self::PANEL_W, panel_y)
            .with_size(PosterSession::WIDTH as i32, PosterSession::HEIGHT as i32);
        let mut widgets = Self::build_panel(x + Self::PAD, panel_y, toolbar, canvas);

        grp.end();

        Renderer::wire(&mut widgets.canvas, session.clone());
        Controller::wire(&widgets, session.clone());
        PanelSync::apply(&mut widgets, &session.borrow());

        Self {
            group: grp,
            widgets,
            session,
        }
    }

    fn build_toolbar(
        x: i32,
        y: i32,
        w: i32,
    ) -> ToolbarButtons {
        let mut title = fltk::frame::Frame::default()
            .with_pos(x + Self::PAD, y)
            .with_size(200, Self::TOOLBAR_H)
            .with_label("CanvaLite");
        title.set_label_size(20);
        title.set_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);

        let right = x + w - Self::PAD;
        let btn_y = y + (Self::TOOLBAR_H - 30) / 2;

        let mut download = fltk::button::Button::default()
            .with_pos(right - 110, btn_y)
            .with_size(110, 30)
            .with_label("Download");
        download.set_shortcut(fltk::enums::Shortcut::Ctrl | 's');
        download.set_color(fltk::enums::Color::from_rgb(37, 99, 235));
        download.set_label_color(fltk::enums::Color::White);

        let mut redo = fltk::button::Button::default()
            .with_pos(right - 110 - 8 - 60, btn_y)
            .with_size(60, 30)
            .with_label("Redo");
        redo.set_shortcut(fltk::enums::Shortcut::Ctrl | 'y');
        redo.set_tooltip("Redo");

        let mut undo = fltk::button::Button::default()
            .with_pos(right - 110 - 8 - 60 - 8 - 60, btn_y)
            .with_size(60, 30)
            .with_label("Undo");
        undo.set_shortcut(fltk::enums::Shortcut::Ctrl | 'z');
        undo.set_tooltip("Undo");

        (undo, redo, download)
    }

    fn build_panel(
        x: i32,
        y: i32,
        (undo, redo, download): ToolbarButtons,
        canvas: fltk::widget::Widget,
    ) -> Widgets {
        let w = Self::PANEL_W;
        let label = |y: i32, text: &str| {
            let mut f = fltk::frame::Frame::default()
                .with_pos(x, y)
                .with_size(w, 20)
                .with_label(text);
            f.set_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
            f
        };

        let mut header = label(y, "Text Properties");
        header.set_label_size(16);

        label(y + 30, "Text Content");
        let mut text = fltk::input::MultilineInput::default()
            .with_pos(x, y + 52)
            .with_size(w, 72);
        text.set_trigger(fltk::enums::CallbackTrigger::Changed);
        text.set_tooltip("Enter your text here...");

        let size_label = label(y + 134, "Font Size");
        let mut size = fltk::valuator::HorNiceSlider::default()
            .with_pos(x, y + 156)
            .with_size(w, 20);
        size.set_bounds(f64::from(FontSize::MIN), f64::from(FontSize::MAX));
        size.set_step(1.0, 1);

        let mut min = label(y + 178, &format!("{}px", FontSize::MIN));
        min.set_label_size(11);
        let mut max = label(y + 178, &format!("{}px", FontSize::MAX));
        max.set_label_size(11);
        max.set_align(fltk::enums::Align::Right | fltk::enums::Align::Inside);

        label(y + 210, "Text Color");
        let mut color = fltk::button::Button::default()
            .with_pos(x, y + 232)
            .with_size(48, 28);
        color.set_frame(fltk::enums::FrameType::BorderBox);
        let mut color_label = fltk::frame::Frame::default()
            .with_pos(x + 56, y + 232)
            .with_size(w - 56, 28);
        color_label.set_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);

        label(y + 280, "History");
        let mut saved_label = label(y + 302, "");
        saved_label.set_label_size(12);
        let mut position_label = label(y + 322, "");
        position_label.set_label_size(12);

        Widgets {
            text,
            size,
            size_label,
            color,
            color_label,
            saved_label,
            position_label,
            undo,
            redo,
            download,
            canvas,
        }
    }
}

// ==========================================
// 3. PANEL SYNC
// ==========================================
struct PanelSync;

impl PanelSync {
    /// Pushes the session's state into every widget. Setting values
    /// programmatically does not fire fltk callbacks, so this never records
    /// history.
    fn apply(w: &mut Widgets, session: &PosterSession) {
        Self::apply_state(w, session.state());

        let summary = session.history_summary();
        w.saved_label.set_label(&summary.saved_label());
        w.position_label.set_label(&summary.position_label());

        if summary.can_undo {
            w.undo.activate();
        } else {
            w.undo.deactivate();
        }
        if summary.can_redo {
            w.redo.activate();
        } else {
            w.redo.deactivate();
        }
    }

    fn apply_state(w: &mut Widgets, state: &EditorState) {
        // Only overwrite the text while it differs, so typing keeps its caret
        if w.text.value() != state.text {
            w.text.set_value(&state.text);
        }

        w.size.set_value(state.font_size.as_f64());
        w.size_label.set_label(&format!("Font Size: {}", state.font_size));

        w.color.set_color(fl_color(state.color));
        w.color.redraw();
        w.color_label.set_label(&state.color.to_string());
    }
}

// ==========================================
// 4. RENDERER (View)
// ==========================================
struct Renderer;

impl Renderer {
    fn wire(canvas: &mut fltk::widget::Widget, session: Rc<RefCell<PosterSession>>) {
        canvas.draw({
            let session = session.clone();
            move |w| {
                // The frame is painted from the current state on every
                // redraw, so the preview can't lag behind an edit.
                let frame = session.borrow().rasterize();
                if let Err(e) = fltk::draw::draw_image(
                    frame.data(),
                    w.x(),
                    w.y(),
                    frame.width() as i32,
                    frame.height() as i32,
                    fltk::enums::ColorDepth::Rgba8,
                ) {
                    tracing::error!(error = ?e, "preview blit failed");
                }
            }
        });

        let mut c = canvas.clone();
        session
            .borrow_mut()
            .subscribe(move |_state: &EditorState| c.redraw());
    }
}

// ==========================================
// 5. CONTROLLER (Input & Events)
// ==========================================
struct Controller;

impl Controller {
    fn wire(widgets: &Widgets, session: Rc<RefCell<PosterSession>>) {
        let mut text = widgets.text.clone();
        text.set_callback({
            let session = session.clone();
            let mut w = widgets.clone();
            move |input| {
                session.borrow_mut().set_text(input.value());
                Self::refresh(&mut w, &session);
            }
        });

        let mut size = widgets.size.clone();
        size.set_callback({
            let session = session.clone();
            let mut w = widgets.clone();
            move |slider| {
                let px = slider.value().round() as u32;
                // Dragging fires for every motion; only real steps are edits
                if px == session.borrow().state().font_size.get() {
                    return;
                }
                session.borrow_mut().set_font_size(px);
                Self::refresh(&mut w, &session);
            }
        });

        let mut color = widgets.color.clone();
        color.set_callback({
            let session = session.clone();
            let mut w = widgets.clone();
            move |_| Self::on_color(&mut w, &session)
        });

        let mut undo = widgets.undo.clone();
        undo.set_callback({
            let session = session.clone();
            let mut w = widgets.clone();
            move |_| {
                if session.borrow_mut().undo() {
                    Self::refresh(&mut w, &session);
                }
            }
        });

        let mut redo = widgets.redo.clone();
        redo.set_callback({
            let session = session.clone();
            let mut w = widgets.clone();
            move |_| {
                if session.borrow_mut().redo() {
                    Self::refresh(&mut w, &session);
                }
            }
        });

        let mut download = widgets.download.clone();
        download.set_callback({
            let session = session.clone();
            move |_| Self::on_download(&session)
        });
    }

    fn on_color(w: &mut Widgets, session: &Rc<RefCell<PosterSession>>) {
        let Some((r, g, b)) =
            fltk::dialog::color_chooser("Text Color", fltk::dialog::ColorMode::Byte)
        else {
            return;
        };

        let hex = Rgb::new(r, g, b).to_string();
        let result = session.borrow_mut().set_color(&hex);
        match result {
            Ok(()) => Self::refresh(w, session),
            Err(e) => fltk::dialog::alert_default(&e.to_string()),
        }
    }

    fn on_download(session: &Rc<RefCell<PosterSession>>) {
        let Some(path) = fltk::dialog::file_chooser(
            "Save Poster",
            "*.png",
            io::DEFAULT_FILE_NAME,
            false,
        ) else {
            return;
        };

        let bytes = match session.borrow().export_image() {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                fltk::dialog::alert_default(&format!("Export failed: {e}"));
                return;
            }
        };

        if let Err(e) = io::FileSink::new(&path).save(&bytes) {
            tracing::error!(error = %e, "saving export failed");
            fltk::dialog::alert_default(&format!("Could not save poster: {e}"));
        }
    }

    // --- UI Refresh Helpers ---

    fn refresh(w: &mut Widgets, session: &Rc<RefCell<PosterSession>>) {
        PanelSync::apply(w, &session.borrow());
    }
}
