//! Integration tests for the schedule store workflow.
//!
//! Verifies the full flow: load plan → place backlog items → move/resize →
//! delete-and-reinstate, plus the silent no-op policy for missing ids.

use std::collections::HashSet;

use library::model::block::{Category, TimeBlock, AD_HOC_SUBTITLE, MIN_DURATION_HOURS};
use library::model::plan::{Milestone, Plan, PlanTask};
use library::model::schedule::Schedule;

/// Helper: a two-milestone plan with four tasks.
fn make_plan() -> Plan {
    Plan {
        goal_title: "Become a senior engineer".to_string(),
        total_estimated_hours: 40.0,
        feasibility_score: 85.0,
        realism_assessment: "Ambitious but achievable.".to_string(),
        milestones: vec![
            Milestone {
                id: "m-1".to_string(),
                title: "Frontend mastery".to_string(),
                kpi: "Three components shipped".to_string(),
                estimated_hours: 20.0,
                tasks: vec![
                    PlanTask {
                        id: "t-1-1".to_string(),
                        title: "Rendering deep dive".to_string(),
                        description: String::new(),
                        duration_minutes: 240.0,
                    },
                    PlanTask {
                        id: "t-1-2".to_string(),
                        title: "Layout systems".to_string(),
                        description: String::new(),
                        duration_minutes: 180.0,
                    },
                ],
            },
            Milestone {
                id: "m-2".to_string(),
                title: "Backend scalability".to_string(),
                kpi: "1k RPS service deployed".to_string(),
                estimated_hours: 20.0,
                tasks: vec![
                    PlanTask {
                        id: "t-2-1".to_string(),
                        title: "Event loop internals".to_string(),
                        description: String::new(),
                        duration_minutes: 240.0,
                    },
                    PlanTask {
                        id: "t-2-2".to_string(),
                        title: "Schema design".to_string(),
                        description: String::new(),
                        duration_minutes: 360.0,
                    },
                ],
            },
        ],
    }
}

/// Helper: a block as if `t-1-1` had already been placed on the grid.
fn scheduled_plan_block() -> TimeBlock {
    TimeBlock {
        id: "t-1-1".to_string(),
        title: "Rendering deep dive".to_string(),
        subtitle: Some("Frontend mastery".to_string()),
        day_index: 0,
        start_hour: 9.0,
        duration: 4.0,
        category: Category::DeepWork,
    }
}

/// Plan-derived ids are partitioned between grid and backlog: never in both,
/// never in neither.
fn assert_partition(schedule: &Schedule, plan: &Plan) {
    let backlog_ids: HashSet<&str> = schedule.backlog().iter().map(|i| i.id.as_str()).collect();
    let block_ids: HashSet<&str> = schedule
        .blocks()
        .iter()
        .map(|b| b.id.as_str())
        .filter(|id| plan.task_ids().any(|t| t == *id))
        .collect();
    assert!(backlog_ids.is_disjoint(&block_ids));
    let union: HashSet<&str> = backlog_ids.union(&block_ids).copied().collect();
    let all: HashSet<&str> = plan.task_ids().collect();
    assert_eq!(union, all);
}

#[test]
fn load_plan_excludes_already_scheduled_tasks() {
    let plan = make_plan();
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);
    schedule.load_plan(plan.clone());

    assert_eq!(schedule.backlog().len(), 3);
    assert!(schedule.backlog().iter().all(|item| item.id != "t-1-1"));
    assert_partition(&schedule, &plan);
}

#[test]
fn scheduling_a_backlog_item_moves_it_onto_the_grid() {
    let plan = make_plan();
    let mut schedule = Schedule::new();
    schedule.load_plan(plan.clone());

    schedule.schedule_backlog_item("t-2-2", 3, 10.25);

    let block = schedule.block("t-2-2").expect("block should exist");
    assert_eq!(block.day_index, 3);
    assert_eq!(block.start_hour, 10.25);
    assert_eq!(block.duration, 6.0, "360 minutes becomes 6 hours");
    assert_eq!(block.category, Category::DeepWork);
    assert_eq!(block.subtitle.as_deref(), Some("Backend scalability"));
    assert_partition(&schedule, &plan);
}

#[test]
fn scheduling_an_unknown_backlog_id_is_a_no_op() {
    let mut schedule = Schedule::new();
    schedule.load_plan(make_plan());
    let before = schedule.blocks().to_vec();

    schedule.schedule_backlog_item("nonexistent", 0, 9.0);

    assert_eq!(schedule.blocks(), &before[..]);
    assert_eq!(schedule.backlog().len(), 4);
}

#[test]
fn move_block_changes_position_only() {
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);

    schedule.move_block("t-1-1", 5, 14.5);

    let block = schedule.block("t-1-1").unwrap();
    assert_eq!(block.day_index, 5);
    assert_eq!(block.start_hour, 14.5);
    assert_eq!(block.duration, 4.0, "duration must be unchanged by a move");
}

#[test]
fn move_block_with_missing_id_leaves_blocks_unchanged() {
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);
    let before = schedule.blocks().to_vec();

    schedule.move_block("nonexistent", 2, 10.0);

    assert_eq!(schedule.blocks(), &before[..]);
}

#[test]
fn resize_block_with_missing_id_leaves_blocks_unchanged() {
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);
    let before = schedule.blocks().to_vec();

    schedule.resize_block("nonexistent", 2.0);

    assert_eq!(schedule.blocks(), &before[..]);
}

#[test]
fn resize_never_drops_below_minimum_duration() {
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);

    for requested in [2.0, -8.0, 0.0, -0.1, 12.0, -100.0] {
        schedule.resize_block("t-1-1", requested);
        assert!(schedule.block("t-1-1").unwrap().duration >= MIN_DURATION_HOURS);
    }
    schedule.resize_block("t-1-1", 1.75);
    assert_eq!(schedule.block("t-1-1").unwrap().duration, 1.75);
}

#[test]
fn multi_day_creation_fans_out_one_block_per_day() {
    let mut schedule = Schedule::new();

    let ids = schedule.create_blocks("Focus", Category::DeepWork, 2.0, 1, 3, 9.0);

    assert_eq!(ids.len(), 3);
    assert_eq!(schedule.blocks().len(), 3);
    for (block, expected_day) in schedule.blocks().iter().zip(1usize..=3) {
        assert_eq!(block.day_index, expected_day);
        assert_eq!(block.start_hour, 9.0);
        assert_eq!(block.duration, 2.0);
        assert_eq!(block.title, "Focus");
        assert_eq!(block.subtitle.as_deref(), Some(AD_HOC_SUBTITLE));
    }
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 3, "every block gets a fresh id");
}

#[test]
fn creation_with_blank_title_is_not_performed() {
    let mut schedule = Schedule::new();

    let ids = schedule.create_blocks("   ", Category::Meeting, 1.0, 0, 0, 9.0);

    assert!(ids.is_empty());
    assert!(schedule.blocks().is_empty());
}

#[test]
fn deleting_a_plan_block_reinstates_it_into_the_backlog() {
    let plan = make_plan();
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);
    schedule.load_plan(plan.clone());

    schedule.delete_block("t-1-1");

    assert!(schedule.block("t-1-1").is_none());
    let item = schedule
        .backlog()
        .iter()
        .find(|i| i.id == "t-1-1")
        .expect("deleted plan block should return to the backlog");
    assert_eq!(item.duration_minutes, 240.0, "4 hours becomes 240 minutes");
    assert_eq!(item.subtitle, "Frontend mastery");
    assert_eq!(item.milestone_id, "m-1");
    assert_partition(&schedule, &plan);
}

#[test]
fn deleting_an_ad_hoc_block_is_permanent() {
    let mut schedule = Schedule::new();
    schedule.load_plan(make_plan());
    let ids = schedule.create_blocks("Gym", Category::Break, 1.0, 2, 2, 18.0);

    schedule.delete_block(&ids[0]);

    assert!(schedule.blocks().is_empty());
    assert_eq!(
        schedule.backlog().len(),
        4,
        "ad-hoc blocks never join the backlog"
    );
}

#[test]
fn delete_with_missing_id_is_a_no_op() {
    let mut schedule = Schedule::with_blocks(vec![scheduled_plan_block()]);
    let before = schedule.blocks().to_vec();

    schedule.delete_block("nonexistent");

    assert_eq!(schedule.blocks(), &before[..]);
}
