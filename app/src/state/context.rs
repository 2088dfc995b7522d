use library::interaction::{DragOrigin, InteractionState};

use crate::ui::dialogs::create_block::CreateBlockDialog;

/// Logical navigation targets the planner can request. The surrounding shell
/// owns routing; the planner never sees a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
}

/// Payload carried by egui's drag-and-drop while a block or backlog item is
/// in flight between panels.
#[derive(Debug, Clone)]
pub(crate) struct DragPayload {
    pub(crate) id: String,
    pub(crate) origin: DragOrigin,
}

/// Bundles the UI-side state passed to every panel function.
pub(crate) struct PlannerContext {
    pub(crate) interaction: InteractionState,
    pub(crate) create_dialog: CreateBlockDialog,
    pub(crate) sidebar_open: bool,
    pub(crate) pending_navigation: Option<Destination>,
    /// One-shot flag for the initial scroll to the current hour.
    pub(crate) scrolled_to_now: bool,
}

impl PlannerContext {
    pub(crate) fn new() -> Self {
        Self {
            interaction: InteractionState::Idle,
            create_dialog: CreateBlockDialog::default(),
            sidebar_open: false,
            pending_navigation: None,
            scrolled_to_now: false,
        }
    }
}
