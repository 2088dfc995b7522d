//! Pointer-interaction state machine for the planner grid.
//!
//! Exactly one state holds at any time. Selection and resize sessions live
//! inside their variant, so "no session in progress" is only representable
//! as [`InteractionState::Idle`]. Block moves are the explicit
//! [`InteractionState::Dragging`] state driven by the same dispatch as the
//! other gestures.

use log::debug;

use crate::grid::{snap_to_quarter_hour, GridGeometry};
use crate::model::block::MIN_DURATION_HOURS;

/// In-progress drag-selection. End values may precede the start values
/// (backward drag in time or across columns); normalization happens once at
/// commit.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRange {
    pub start_day_index: usize,
    pub start_hour: f32,
    pub end_day_index: usize,
    pub end_hour: f32,
}

/// In-progress resize of an existing block. Every move recomputes an
/// absolute duration from this fixed origin, never a delta from the previous
/// move, so out-of-order pointer events cannot corrupt the result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub block_id: String,
    pub initial_pointer_y: f32,
    pub initial_duration: f32,
}

/// What the in-flight dragged id refers to; decides whether a drop becomes a
/// move or a backlog placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    Schedule,
    Backlog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub id: String,
    pub origin: DragOrigin,
}

/// A normalized selection ready for the creation dialog: inclusive day
/// range, snapped start hour, span of at least a quarter hour.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCreation {
    pub start_day_index: usize,
    pub end_day_index: usize,
    pub start_hour: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Selecting(SelectionRange),
    Resizing(ResizeSession),
    Dragging(DragSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn selection(&self) -> Option<&SelectionRange> {
        match self {
            InteractionState::Selecting(range) => Some(range),
            _ => None,
        }
    }

    pub fn resize_session(&self) -> Option<&ResizeSession> {
        match self {
            InteractionState::Resizing(session) => Some(session),
            _ => None,
        }
    }

    pub fn dragged(&self) -> Option<&DragSession> {
        match self {
            InteractionState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Pointer-down on empty grid background. Ignored unless idle; a press
    /// that lands on a block is excluded by the caller's hit test and starts
    /// a drag or resize instead.
    pub fn begin_selection(&mut self, day_index: usize, snapped_hour: f32) {
        if !self.is_idle() {
            debug!("begin_selection ignored: interaction already in progress");
            return;
        }
        *self = InteractionState::Selecting(SelectionRange {
            start_day_index: day_index,
            start_hour: snapped_hour,
            end_day_index: day_index,
            end_hour: snapped_hour + MIN_DURATION_HOURS,
        });
    }

    /// Pointer-move while selecting: only the end coordinate follows the
    /// pointer, so the ghost block can grow or shrink in either direction
    /// and across columns.
    pub fn update_selection(&mut self, day_index: usize, snapped_hour: f32) {
        if let InteractionState::Selecting(range) = self {
            range.end_day_index = day_index;
            range.end_hour = snapped_hour;
        }
    }

    /// Pointer-up while selecting: normalize and hand the range to the
    /// creation dialog. The store mutates only on dialog confirm.
    pub fn finish_selection(&mut self) -> Option<PendingCreation> {
        let InteractionState::Selecting(range) = std::mem::take(self) else {
            return None;
        };
        let (mut start_hour, mut end_hour) = (range.start_hour, range.end_hour);
        if end_hour < start_hour {
            std::mem::swap(&mut start_hour, &mut end_hour);
        }
        if end_hour - start_hour < MIN_DURATION_HOURS {
            end_hour = start_hour + MIN_DURATION_HOURS;
        }
        Some(PendingCreation {
            start_day_index: range.start_day_index.min(range.end_day_index),
            end_day_index: range.start_day_index.max(range.end_day_index),
            start_hour,
            duration: end_hour - start_hour,
        })
    }

    /// Pointer-down on a block's bottom-edge resize handle. The caller must
    /// consume the event so it is not also read as a drag or selection start.
    pub fn begin_resize(&mut self, block_id: impl Into<String>, pointer_y: f32, duration: f32) {
        if !self.is_idle() {
            debug!("begin_resize ignored: interaction already in progress");
            return;
        }
        *self = InteractionState::Resizing(ResizeSession {
            block_id: block_id.into(),
            initial_pointer_y: pointer_y,
            initial_duration: duration,
        });
    }

    /// New duration for the resized block given the current pointer
    /// position: snapped, never below the quarter-hour minimum. `None` when
    /// no resize is in progress.
    pub fn resize_duration(&self, pointer_y: f32, geometry: &GridGeometry) -> Option<f32> {
        let session = self.resize_session()?;
        let delta_hours = (pointer_y - session.initial_pointer_y) / geometry.pixels_per_hour;
        let new_duration = (session.initial_duration + delta_hours).max(MIN_DURATION_HOURS);
        Some(snap_to_quarter_hour(new_duration).max(MIN_DURATION_HOURS))
    }

    /// Drag-start on a block or backlog item; records the in-flight id.
    pub fn begin_drag(&mut self, id: impl Into<String>, origin: DragOrigin) {
        if !self.is_idle() {
            debug!("begin_drag ignored: interaction already in progress");
            return;
        }
        *self = InteractionState::Dragging(DragSession {
            id: id.into(),
            origin,
        });
    }

    /// Drop or release: take the in-flight drag session, returning to idle.
    pub fn take_drag(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            InteractionState::Dragging(session) => Some(session),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Unconditional return to idle; ends whatever session was live.
    pub fn reset(&mut self) {
        *self = InteractionState::Idle;
    }
}
