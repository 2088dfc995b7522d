use std::sync::{Arc, RwLock};

use crate::model::block::Category;
use crate::model::plan::Plan;
use crate::model::schedule::Schedule;

/// Shared handle to the schedule for the UI layer. The render side reads
/// through [`Self::with_schedule`]; all mutation goes through the operation
/// proxies so the lock never leaks into panel code.
pub struct ScheduleService {
    schedule: Arc<RwLock<Schedule>>,
}

impl Clone for ScheduleService {
    fn clone(&self) -> Self {
        Self {
            schedule: self.schedule.clone(),
        }
    }
}

impl ScheduleService {
    pub fn new(schedule: Arc<RwLock<Schedule>>) -> Self {
        Self { schedule }
    }

    /// Access the schedule immutably via a closure.
    pub fn with_schedule<R>(&self, f: impl FnOnce(&Schedule) -> R) -> R {
        let guard = self
            .schedule
            .read()
            .expect("Failed to acquire schedule read lock");
        f(&guard)
    }

    /// Access the schedule mutably via a closure.
    pub fn with_schedule_mut<R>(&self, f: impl FnOnce(&mut Schedule) -> R) -> R {
        let mut guard = self
            .schedule
            .write()
            .expect("Failed to acquire schedule write lock");
        f(&mut guard)
    }

    // --- Schedule Operations ---

    pub fn load_plan(&self, plan: Plan) {
        self.with_schedule_mut(|s| s.load_plan(plan));
    }

    pub fn move_block(&self, id: &str, day_index: usize, start_hour: f32) {
        self.with_schedule_mut(|s| s.move_block(id, day_index, start_hour));
    }

    pub fn schedule_backlog_item(&self, backlog_id: &str, day_index: usize, start_hour: f32) {
        self.with_schedule_mut(|s| s.schedule_backlog_item(backlog_id, day_index, start_hour));
    }

    pub fn create_blocks(
        &self,
        title: &str,
        category: Category,
        duration: f32,
        start_day_index: usize,
        end_day_index: usize,
        start_hour: f32,
    ) -> Vec<String> {
        self.with_schedule_mut(|s| {
            s.create_blocks(
                title,
                category,
                duration,
                start_day_index,
                end_day_index,
                start_hour,
            )
        })
    }

    pub fn resize_block(&self, id: &str, new_duration: f32) {
        self.with_schedule_mut(|s| s.resize_block(id, new_duration));
    }

    pub fn delete_block(&self, id: &str) {
        self.with_schedule_mut(|s| s.delete_block(id));
    }
}
