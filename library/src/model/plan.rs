//! Inbound plan contract: the goal/milestone/task structure supplied by the
//! surrounding product. The planner reads it to derive the backlog and to
//! reinstate deleted plan-derived blocks; it never mutates it.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Plan task ids follow this naming convention; block ids carrying it are
/// treated as plan-derived and flow back into the backlog on delete.
pub const PLAN_TASK_ID_PREFIX: &str = "t-";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kpi: String,
    #[serde(default)]
    pub estimated_hours: f32,
    pub tasks: Vec<PlanTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub goal_title: String,
    #[serde(default)]
    pub total_estimated_hours: f32,
    #[serde(default)]
    pub feasibility_score: f32,
    #[serde(default)]
    pub realism_assessment: String,
    pub milestones: Vec<Milestone>,
}

impl Plan {
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let plan: Plan = serde_json::from_str(json)?;
        if plan.milestones.is_empty() {
            return Err(PlannerError::Plan("plan has no milestones".to_string()));
        }
        Ok(plan)
    }

    /// The milestone containing `task_id`, if any.
    pub fn milestone_for_task(&self, task_id: &str) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|m| m.tasks.iter().any(|t| t.id == task_id))
    }

    /// All task ids across all milestones, in plan order.
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.milestones
            .iter()
            .flat_map(|m| m.tasks.iter().map(|t| t.id.as_str()))
    }
}

/// Whether a block id follows the plan-task naming convention.
pub fn is_plan_task_id(id: &str) -> bool {
    id.starts_with(PLAN_TASK_ID_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN_JSON: &str = r#"{
        "goalTitle": "Ship the prototype",
        "totalEstimatedHours": 40,
        "feasibilityScore": 80,
        "realismAssessment": "Tight but doable.",
        "milestones": [
            {
                "id": "m-1",
                "title": "Foundations",
                "kpi": "Demo runs end to end",
                "estimatedHours": 16,
                "tasks": [
                    { "id": "t-1-1", "title": "Sketch data model", "description": "", "durationMinutes": 120 },
                    { "id": "t-1-2", "title": "Wire up storage", "description": "", "durationMinutes": 240 }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_camel_case_plan_json() {
        let plan = Plan::from_json(PLAN_JSON).unwrap();
        assert_eq!(plan.goal_title, "Ship the prototype");
        assert_eq!(plan.milestones.len(), 1);
        assert_eq!(plan.milestones[0].tasks[1].duration_minutes, 240.0);
        assert_eq!(plan.task_ids().count(), 2);
    }

    #[test]
    fn rejects_plan_without_milestones() {
        let err = Plan::from_json(r#"{ "goalTitle": "x", "milestones": [] }"#).unwrap_err();
        assert!(matches!(err, PlannerError::Plan(_)));
    }

    #[test]
    fn finds_owning_milestone() {
        let plan = Plan::from_json(PLAN_JSON).unwrap();
        assert_eq!(plan.milestone_for_task("t-1-2").unwrap().id, "m-1");
        assert!(plan.milestone_for_task("t-9-9").is_none());
    }

    #[test]
    fn plan_task_id_convention() {
        assert!(is_plan_task_id("t-1-1"));
        assert!(!is_plan_task_id("3f8a2c"));
    }
}
