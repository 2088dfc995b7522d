//! Authoritative in-memory collection of scheduled blocks and backlog items,
//! and the mutation operations the interaction layer invokes.
//!
//! Every operation is a single synchronous update; mutations targeting an id
//! that is no longer present are silent no-ops, since UI races such as a
//! rapid delete-then-drag are expected and harmless.

use log::{debug, warn};
use uuid::Uuid;

use crate::model::block::{
    BacklogItem, Category, TimeBlock, AD_HOC_SUBTITLE, MIN_DURATION_HOURS,
};
use crate::model::plan::{is_plan_task_id, Plan};

#[derive(Debug, Default, Clone)]
pub struct Schedule {
    blocks: Vec<TimeBlock>,
    backlog: Vec<BacklogItem>,
    plan: Option<Plan>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the week with pre-existing blocks (demo data, imported state).
    pub fn with_blocks(blocks: Vec<TimeBlock>) -> Self {
        Self {
            blocks,
            backlog: Vec::new(),
            plan: None,
        }
    }

    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    pub fn backlog(&self) -> &[BacklogItem] {
        &self.backlog
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn block(&self, id: &str) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Replace the active plan and rebuild the backlog from its tasks,
    /// excluding any task already placed on the grid as a block.
    pub fn load_plan(&mut self, plan: Plan) {
        self.backlog = plan
            .milestones
            .iter()
            .flat_map(|m| {
                m.tasks.iter().map(|t| BacklogItem {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    subtitle: m.title.clone(),
                    duration_minutes: t.duration_minutes,
                    milestone_id: m.id.clone(),
                })
            })
            .filter(|item| !self.blocks.iter().any(|b| b.id == item.id))
            .collect();
        debug!(
            "loaded plan '{}': {} backlog items",
            plan.goal_title,
            self.backlog.len()
        );
        self.plan = Some(plan);
    }

    /// Move an existing block to a new day/start. Duration is unchanged.
    pub fn move_block(&mut self, id: &str, day_index: usize, start_hour: f32) {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.day_index = day_index;
                block.start_hour = start_hour;
            }
            None => debug!("move_block: no block with id {id}"),
        }
    }

    /// Place a backlog item on the grid: it leaves the backlog and becomes a
    /// block with its duration converted from minutes to hours.
    pub fn schedule_backlog_item(&mut self, backlog_id: &str, day_index: usize, start_hour: f32) {
        let Some(pos) = self.backlog.iter().position(|item| item.id == backlog_id) else {
            debug!("schedule_backlog_item: no backlog item with id {backlog_id}");
            return;
        };
        let item = self.backlog.remove(pos);
        self.blocks.push(TimeBlock {
            id: item.id,
            title: item.title,
            subtitle: Some(item.subtitle),
            day_index,
            start_hour,
            duration: if item.duration_minutes > 0.0 {
                item.duration_minutes / 60.0
            } else {
                1.0
            },
            category: Category::DeepWork,
        });
    }

    /// Commit a drag-selection: one freshly-identified block per day in the
    /// inclusive range, all sharing title/category/start/duration.
    ///
    /// Returns the ids of the created blocks. A blank title creates nothing;
    /// the dialog enforces the precondition, this is the last line of defense.
    pub fn create_blocks(
        &mut self,
        title: &str,
        category: Category,
        duration: f32,
        start_day_index: usize,
        end_day_index: usize,
        start_hour: f32,
    ) -> Vec<String> {
        let title = title.trim();
        if title.is_empty() {
            warn!("create_blocks: refusing to create blocks with an empty title");
            return Vec::new();
        }
        let duration = duration.max(MIN_DURATION_HOURS);
        let mut ids = Vec::new();
        for day_index in start_day_index..=end_day_index.min(6) {
            let id = Uuid::new_v4().to_string();
            ids.push(id.clone());
            self.blocks.push(TimeBlock {
                id,
                title: title.to_string(),
                subtitle: Some(AD_HOC_SUBTITLE.to_string()),
                day_index,
                start_hour,
                duration,
                category,
            });
        }
        ids
    }

    /// Replace a block's duration, clamped to the quarter-hour minimum.
    pub fn resize_block(&mut self, id: &str, new_duration: f32) {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => block.duration = new_duration.max(MIN_DURATION_HOURS),
            None => debug!("resize_block: no block with id {id}"),
        }
    }

    /// Remove a block. Plan-derived blocks flow back into the backlog so the
    /// delete is reversible; ad-hoc blocks are simply gone.
    pub fn delete_block(&mut self, id: &str) {
        let Some(pos) = self.blocks.iter().position(|b| b.id == id) else {
            debug!("delete_block: no block with id {id}");
            return;
        };
        let block = self.blocks.remove(pos);
        if is_plan_task_id(&block.id) {
            if let Some(milestone) = self
                .plan
                .as_ref()
                .and_then(|plan| plan.milestone_for_task(&block.id))
            {
                self.backlog.push(BacklogItem {
                    id: block.id,
                    title: block.title,
                    subtitle: milestone.title.clone(),
                    duration_minutes: block.duration * 60.0,
                    milestone_id: milestone.id.clone(),
                });
            }
        }
    }
}
