use layout::{CanvasSize, LineLayout};
use poster_core::{EditorState, FontSize, HistoryBuffer, Rgb};
use renderer::{PaintCommand, PixelBuffer, Surface};

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] poster_core::PosterError),
    #[error(transparent)]
    Render(#[from] renderer::RenderError),
}

type Listener = Box<dyn FnMut(&EditorState)>;

/// Saved/position readout for the history panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistorySummary {
    pub saved: usize,
    pub capacity: usize,
    pub position: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl HistorySummary {
    pub fn saved_label(&self) -> String {
        format!("States saved: {}/{}", self.saved, self.capacity)
    }

    pub fn position_label(&self) -> String {
        format!("Current position: {}", self.position)
    }
}

/// Holds the poster being edited for the lifetime of the editor.
///
/// Every setter snapshots the current state into history *before* applying
/// the change, then notifies subscribers. Layout is never cached: every
/// render recomputes it from the current state.
pub struct PosterSession {
    state: EditorState,
    history: HistoryBuffer,
    width: u32,
    height: u32,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for PosterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PosterSession")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for PosterSession {
    fn default() -> Self {
        Self::new(EditorState::default())
    }
}

impl PosterSession {
    pub const WIDTH: u32 = 600;
    pub const HEIGHT: u32 = 400;

    pub fn new(initial: EditorState) -> Self {
        Self {
            state: initial,
            history: HistoryBuffer::new(),
            width: Self::WIDTH,
            height: Self::HEIGHT,
            listeners: Vec::new(),
        }
    }

    /// Same session on a non-standard canvas. Used by tests and previews.
    pub fn with_canvas(initial: EditorState, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::new(initial)
        }
    }

    #[inline]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[inline]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(f64::from(self.width), f64::from(self.height))
    }

    /// Registers a callback run after every state change, including undo and
    /// redo. Callbacks must not reach back into the session.
    pub fn subscribe(&mut self, listener: impl FnMut(&EditorState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.apply(move |s| s.text = text);
    }

    /// Out-of-range sizes are clamped to `[12, 72]`.
    pub fn set_font_size(&mut self, px: u32) {
        let size = FontSize::new(px);
        if size.get() != px {
            tracing::warn!(requested = px, clamped = size.get(), "font size clamped");
        }
        self.apply(move |s| s.font_size = size);
    }

    /// # Errors
    ///
    /// - [`SessionError::Input`] if `hex` is not a hex color. Nothing is
    ///   recorded and the state is left untouched.
    pub fn set_color(&mut self, hex: &str) -> SessionResult<()> {
        let color = hex.parse::<Rgb>().inspect_err(|e| {
            tracing::warn!(error = %e, "color rejected");
        })?;
        self.apply(move |s| s.color = color);
        Ok(())
    }

    /// Restores the previous snapshot. Returns `false`, changing nothing,
    /// when there is no undo step.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Re-applies the snapshot after the cursor. Returns `false`, changing
    /// nothing, when there is no redo step.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn history_summary(&self) -> HistorySummary {
        HistorySummary {
            saved: self.history.len(),
            capacity: self.history.capacity(),
            position: self.history.position(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    /// Wrapped lines for the current state, measured with the font of the
    /// frames [`rasterize`](Self::rasterize) produces.
    pub fn layout(&self) -> LineLayout {
        self.layout_on(&self.frame())
    }

    /// Wrapped lines for the current state as `surface` would measure them.
    pub fn layout_on<S: Surface>(&self, surface: &S) -> LineLayout {
        let size = self.state.font_size.get();
        layout::compute_layout(
            &self.state.text,
            size,
            self.state.color,
            self.canvas(),
            &surface.metrics(size),
        )
    }

    /// Drawing instructions for the current state.
    pub fn display_list(&self) -> Vec<PaintCommand> {
        self.display_list_on(&self.frame())
    }

    pub fn display_list_on<S: Surface>(&self, surface: &S) -> Vec<PaintCommand> {
        let metrics = surface.metrics(self.state.font_size.get());
        renderer::display_list(&self.state, self.canvas(), &metrics)
    }

    /// Paints the current state onto an external target, laid out with that
    /// target's metrics.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        let commands = self.display_list_on(surface);
        renderer::paint::paint(surface, &commands);
    }

    /// A freshly painted frame of the current state.
    pub fn rasterize(&self) -> PixelBuffer {
        let mut frame = self.frame();
        self.render(&mut frame);
        frame
    }

    /// PNG bytes of the current poster.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Render`] if encoding fails.
    pub fn export_image(&self) -> SessionResult<Vec<u8>> {
        let bytes = renderer::encode_png(&self.rasterize())?;
        tracing::info!(bytes = bytes.len(), "poster exported");
        Ok(bytes)
    }

    fn frame(&self) -> PixelBuffer {
        PixelBuffer::new(self.width, self.height)
    }

    fn apply(&mut self, mutate: impl FnOnce(&mut EditorState)) {
        self.history.record_snapshot(&self.state);
        mutate(&mut self.state);
        self.notify();
    }

    fn restore(&mut self, snapshot: EditorState) {
        self.state = snapshot;
        self.notify();
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}
