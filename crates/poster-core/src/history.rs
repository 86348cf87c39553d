use crate::state::EditorState;

/// Fixed-size undo/redo buffer of pre-mutation snapshots.
///
/// Holds at most [`HistoryBuffer::CAPACITY`] entries. Every edit records the
/// state *before* the edit, and `cursor` marks the active entry:
///
/// - `cursor == len - 1`: nothing to redo.
/// - `cursor <= 0` (or `None`, i.e. -1): nothing to undo.
///
/// The two-entry cap is a product constraint. Do not grow it.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<EditorState>,
    cursor: Option<usize>,
}

impl HistoryBuffer {
    pub const CAPACITY: usize = 2;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::CAPACITY + 1),
            cursor: None,
        }
    }

    /// Records `current` as it was right before a mutation is applied.
    ///
    /// Any redo branch after the cursor is dropped first, then the snapshot is
    /// appended, the oldest entry is evicted if the buffer overflows, and the
    /// cursor moves to the newest entry.
    pub fn record_snapshot(&mut self, current: &EditorState) {
        if let Some(cursor) = self.cursor
            && cursor + 1 < self.entries.len()
        {
            let dropped = self.entries.len() - (cursor + 1);
            self.entries.truncate(cursor + 1);
            tracing::debug!(dropped, "history: redo branch discarded");
        }

        self.entries.push(current.clone());

        if self.entries.len() > Self::CAPACITY {
            self.entries.remove(0);
        }

        self.cursor = self.entries.len().checked_sub(1);
        tracing::debug!(
            len = self.entries.len(),
            position = self.position(),
            "history: snapshot recorded"
        );
    }

    /// Steps the cursor back and returns the snapshot to restore.
    ///
    /// Returns `None` without touching the buffer when `cursor <= 0`.
    pub fn undo(&mut self) -> Option<EditorState> {
        let cursor = self.cursor.filter(|&c| c > 0)?;
        let target = cursor - 1;
        self.cursor = Some(target);
        tracing::debug!(position = self.position(), "history: undo");
        Some(self.entries[target].clone())
    }

    /// Steps the cursor forward and returns the snapshot to restore.
    ///
    /// Returns `None` without touching the buffer when the cursor is already
    /// on the newest entry.
    pub fn redo(&mut self) -> Option<EditorState> {
        let cursor = self.cursor?;
        let target = cursor + 1;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = Some(target);
        tracing::debug!(position = self.position(), "history: redo");
        Some(self.entries[target].clone())
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// The cursor as a signed index, `-1` when the buffer is empty.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    /// One-based cursor position; `0` when empty.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[EditorState] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }
}
