//! Undo/redo history of viewer state.
//!
//! Two bounded stacks of labelled snapshots. Pushing past capacity evicts
//! the oldest entry. Snapshots hold the image by handle, so recording a
//! point is cheap regardless of raster size.

use crate::raster::Image;
use crate::viewport::Zoom;
use chrono::{DateTime, Utc};
use rasterview_core::constants::{COMMENT_MAX_LENGTH, DEFAULT_UNDO_CAPACITY};
use rasterview_core::HistoryError;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Everything needed to restore the viewer to an earlier point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerState {
    pub image: Option<Image>,
    pub file: Option<PathBuf>,
    pub modified: bool,
    pub zoom: Zoom,
}

/// A labelled snapshot on one of the stacks.
#[derive(Debug, Clone)]
pub struct UndoPoint<T> {
    pub state: T,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
    /// Increases with every point recorded by the same history.
    pub ordinal: u64,
}

impl<T> UndoPoint<T> {
    /// Comment cut to fit a menu label.
    pub fn short_comment(&self) -> String {
        shorten_comment(&self.comment)
    }
}

pub fn shorten_comment(comment: &str) -> String {
    if comment.chars().count() > COMMENT_MAX_LENGTH {
        let head: String = comment.chars().take(COMMENT_MAX_LENGTH).collect();
        format!("{}...", head)
    } else {
        comment.to_string()
    }
}

/// Linear undo/redo history.
#[derive(Debug, Clone)]
pub struct History<T> {
    undo: VecDeque<UndoPoint<T>>,
    redo: VecDeque<UndoPoint<T>>,
    capacity: usize,
    enabled: bool,
    next_ordinal: u64,
}

impl<T> History<T> {
    /// History keeping up to 10 points per stack.
    pub fn new() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            capacity: DEFAULT_UNDO_CAPACITY,
            enabled: true,
            next_ordinal: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, HistoryError> {
        let mut history = Self::new();
        history.set_capacity(capacity)?;
        Ok(history)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the per-stack limit. Only allowed before any point was recorded.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }
        if !self.undo.is_empty() || !self.redo.is_empty() {
            return Err(HistoryError::NotEmpty {
                undo: self.undo.len(),
                redo: self.redo.len(),
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// While disabled nothing is recorded and nothing can be undone.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn point(&mut self, state: T, comment: String) -> UndoPoint<T> {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        UndoPoint {
            state,
            comment,
            timestamp: Utc::now(),
            ordinal,
        }
    }

    fn push_bounded(stack: &mut VecDeque<UndoPoint<T>>, point: UndoPoint<T>, capacity: usize) {
        stack.push_back(point);
        while stack.len() > capacity {
            stack.pop_front();
        }
    }

    /// Records a new edit; the redo future is discarded.
    pub fn add_undo(&mut self, state: T, comment: impl Into<String>) -> bool {
        self.add_undo_keep_redo(state, comment, false)
    }

    /// Records an undo point. `keep_redo` is set while replaying a redo so
    /// the remaining redo entries survive.
    pub fn add_undo_keep_redo(
        &mut self,
        state: T,
        comment: impl Into<String>,
        keep_redo: bool,
    ) -> bool {
        if !self.enabled {
            return false;
        }
        let point = self.point(state, comment.into());
        Self::push_bounded(&mut self.undo, point, self.capacity);
        if !keep_redo {
            self.redo.clear();
        }
        true
    }

    /// Records the state about to be undone so it can be redone.
    pub fn add_redo(&mut self, state: T, comment: impl Into<String>) -> bool {
        if !self.enabled {
            return false;
        }
        let point = self.point(state, comment.into());
        Self::push_bounded(&mut self.redo, point, self.capacity);
        true
    }

    /// Pops the most recent undo point. Check [`History::can_undo`] first.
    pub fn undo(&mut self) -> Option<UndoPoint<T>> {
        self.undo.pop_back()
    }

    /// Pops the most recent redo point. Check [`History::can_redo`] first.
    pub fn redo(&mut self) -> Option<UndoPoint<T>> {
        self.redo.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        self.enabled && !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.enabled && !self.redo.is_empty()
    }

    pub fn peek_undo(&self) -> Option<&UndoPoint<T>> {
        self.undo.back()
    }

    pub fn peek_redo(&self) -> Option<&UndoPoint<T>> {
        self.redo.back()
    }

    /// Top undo comment, optionally shortened for a menu label.
    pub fn peek_undo_comment(&self, shorten: bool) -> Option<String> {
        self.peek_undo().map(|p| label(&p.comment, shorten))
    }

    pub fn peek_redo_comment(&self, shorten: bool) -> Option<String> {
        self.peek_redo().map(|p| label(&p.comment, shorten))
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo points, oldest first.
    pub fn undo_points(&self) -> impl Iterator<Item = &UndoPoint<T>> {
        self.undo.iter()
    }

    /// Redo points, oldest first.
    pub fn redo_points(&self) -> impl Iterator<Item = &UndoPoint<T>> {
        self.redo.iter()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn label(comment: &str, shorten: bool) -> String {
    if shorten {
        shorten_comment(comment)
    } else {
        comment.to_string()
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
