/// Goal transforms between the public shape and the goals service
use super::content::{display_content_type, with_display_type};
use crate::types::{
    AcceptedGoalStatus, Goal, GoalFor, GoalUpsertRequest, GoalUpsertResponse, GoalsGroup,
    PendingGoalStatus, RejectedGoalStatus, ResourceProgress, TrackStatus, UpstreamCommonGoal,
    UpstreamGoal, UpstreamGoalGroup, UpstreamGoalUpsert, UpstreamGoalUpsertResponse,
    UpstreamResourceProgress, UpstreamTrackStatus, UpstreamUserGoals, UserGoals,
};

/// Goal type of catalogue goals
pub const GOAL_TYPE_COMMON: &str = "common";

/// Message for a goals-service error code, if the code is a known one
pub fn goal_error_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "DUPLICATE_GOAL" => "Goal already exists",
        "GOAL_NOT_FOUND" => "Goal not found",
        "INVALID_GOAL_DURATION" => "Goal duration is not valid",
        "INVALID_GOAL_TYPE" => "Goal type is not valid",
        "EMPTY_GOAL_CONTENT" => "Goal has no content",
        "SHARED_GOAL_EDIT" => "Shared goals cannot be edited",
        _ => return None,
    };
    Some(message)
}

/// `me` for the caller's own goal types, `others` for everything else
pub fn goal_for(goal_type: &str) -> GoalFor {
    match goal_type {
        "user" | GOAL_TYPE_COMMON => GoalFor::Me,
        _ => GoalFor::Others,
    }
}

/// Whether a goal type is one of the shared kinds
pub fn is_shared(goal_type: &str) -> bool {
    matches!(goal_type, "common_shared" | "custom_shared")
}

/// Map a user or for-others goal.
///
/// Contents come from `content_data`, else `goal_content_details`, else
/// nothing; each one gets its display label.
pub fn to_goal_for_others(upstream: &UpstreamGoal) -> Goal {
    let contents = upstream
        .content_data
        .as_deref()
        .or(upstream.goal_content_details.as_deref())
        .unwrap_or_default()
        .iter()
        .map(with_display_type)
        .collect();

    Goal {
        content_ids: upstream.goal_content_id.clone(),
        content_progress: Some(
            upstream
                .resource_progress
                .iter()
                .map(to_resource_progress)
                .collect(),
        ),
        contents,
        created_for_others: None,
        created_for_self: None,
        description: upstream.goal_desc.clone(),
        duration: upstream.goal_duration,
        end_date: upstream.goal_end_date.clone(),
        goal_for: goal_for(&upstream.goal_type),
        id: upstream.goal_id.clone(),
        is_shared: is_shared(&upstream.goal_type),
        name: upstream.goal_title.clone(),
        progress: upstream.goal_progress,
        shared_by: upstream.shared_by.clone(),
        shared_on: upstream.shared_on.clone(),
        shared_with: upstream.recipient_list.clone(),
        start_date: upstream.goal_start_date.clone(),
        goal_type: upstream.goal_type.clone(),
        user: upstream.user.clone(),
    }
}

/// Map a catalogue goal; these are always the caller's own and unshared
pub fn to_common_goal(upstream: &UpstreamCommonGoal) -> Goal {
    Goal {
        content_ids: upstream.goal_content_id.clone(),
        content_progress: None,
        contents: upstream.resources.clone(),
        created_for_others: upstream.created_for_others.clone(),
        created_for_self: upstream.created_for_self.clone(),
        description: upstream.goal_description.clone(),
        duration: Some(0.0),
        end_date: None,
        goal_for: GoalFor::Me,
        id: upstream.id.clone(),
        is_shared: false,
        name: upstream.goal_title.clone(),
        progress: None,
        shared_by: None,
        shared_on: None,
        shared_with: None,
        start_date: None,
        goal_type: GOAL_TYPE_COMMON.to_string(),
        user: None,
    }
}

/// Common goal group with its goals mapped
pub fn to_goal_group(upstream: &UpstreamGoalGroup) -> GoalsGroup {
    GoalsGroup {
        goals: upstream.goals.iter().map(to_common_goal).collect(),
        id: upstream.group_id.clone(),
        name: upstream.group_name.clone(),
    }
}

/// Both halves of a caller's goal listing
pub fn to_user_goals(upstream: &UpstreamUserGoals) -> UserGoals {
    UserGoals {
        completed_goals: upstream.completed_goals.iter().map(to_goal_for_others).collect(),
        goals_in_progress: upstream.goals_in_progress.iter().map(to_goal_for_others).collect(),
    }
}

/// Upsert body for the goals service
pub fn to_upstream_upsert(request: &GoalUpsertRequest) -> UpstreamGoalUpsert {
    UpstreamGoalUpsert {
        goal_content_id: request.content_ids.clone(),
        goal_desc: request.description.clone(),
        goal_duration: request.duration,
        goal_id: request.id.clone(),
        goal_title: request.name.clone(),
        goal_type: request.goal_type.clone(),
    }
}

/// Report the first upstream error, translated when the code is known
pub fn to_upsert_response(upstream: &UpstreamGoalUpsertResponse) -> GoalUpsertResponse {
    let error = upstream.errors.first().map(|e| {
        goal_error_message(&e.code)
            .map(str::to_string)
            .unwrap_or_else(|| e.code.clone())
    });
    GoalUpsertResponse { error }
}

/// Public progress of one resource
pub fn to_resource_progress(upstream: &UpstreamResourceProgress) -> ResourceProgress {
    ResourceProgress {
        content_type: upstream.content_type.clone(),
        display_content_type: display_content_type(
            upstream.content_type.as_deref(),
            upstream.resource_type.as_deref(),
        ),
        duration: upstream.resource_duration,
        id: upstream.resource_id.clone(),
        mime_type: upstream.mime_type.clone(),
        name: upstream.resource_name.clone(),
        progress: upstream.resource_progress,
        time_left: upstream.time_left,
    }
}

/// Share tracking with statuses mapped
pub fn to_track_status(upstream: &UpstreamTrackStatus) -> TrackStatus {
    TrackStatus {
        accepted: upstream
            .accepted
            .iter()
            .map(|g| AcceptedGoalStatus {
                end_date: g.goal_end_date.clone(),
                last_updated_on: g.last_updated_on.clone(),
                progress: g.goal_progress.clone(),
                resource_progress_tracker: g.resource_progress_tracker.clone(),
                shared_with: g.shared_with.clone(),
                start_date: g.goal_start_date.clone(),
                status: g.status.clone(),
            })
            .collect(),
        pending: upstream
            .pending
            .iter()
            .map(|g| PendingGoalStatus {
                last_updated_on: g.last_updated_on.clone(),
                shared_with: g.shared_with.clone(),
                status: g.status.clone(),
            })
            .collect(),
        rejected: upstream
            .rejected
            .iter()
            .map(|g| RejectedGoalStatus {
                last_updated_on: g.last_updated_on.clone(),
                message: g.status_message.clone(),
                shared_with: g.shared_with.clone(),
                status: g.status.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentItem, UpstreamGoalError, UpstreamRejectedGoal};
    use proptest::prelude::*;
    use serde_json::json;

    fn goal_of_type(goal_type: &str) -> UpstreamGoal {
        UpstreamGoal {
            goal_type: goal_type.to_string(),
            ..UpstreamGoal::default()
        }
    }

    // =========================================================================
    // For-others goals
    // =========================================================================

    #[test]
    fn goal_for_and_sharing_by_type() {
        let cases = [
            ("user", GoalFor::Me, false),
            ("common", GoalFor::Me, false),
            ("common_shared", GoalFor::Others, true),
            ("custom_shared", GoalFor::Others, true),
            ("custom", GoalFor::Others, false),
        ];
        for (goal_type, expected_for, expected_shared) in cases {
            let goal = to_goal_for_others(&goal_of_type(goal_type));
            assert_eq!(goal.goal_for, expected_for, "{goal_type}");
            assert_eq!(goal.is_shared, expected_shared, "{goal_type}");
            assert_eq!(goal.goal_type, goal_type);
        }
    }

    #[test]
    fn contents_fall_back_through_upstream_fields() {
        let resource = ContentItem {
            content_type: Some("Resource".to_string()),
            resource_type: Some("Assessment".to_string()),
            ..ContentItem::with_identifier("r1")
        };
        let course = ContentItem {
            content_type: Some("Collection".to_string()),
            ..ContentItem::with_identifier("c1")
        };

        let mut upstream = goal_of_type("user");
        upstream.goal_content_details = Some(vec![course.clone()]);
        let goal = to_goal_for_others(&upstream);
        assert_eq!(goal.contents[0].identifier.as_deref(), Some("c1"));
        assert_eq!(goal.contents[0].display_content_type.as_deref(), Some("Module"));

        upstream.content_data = Some(vec![resource]);
        let goal = to_goal_for_others(&upstream);
        assert_eq!(goal.contents.len(), 1);
        assert_eq!(goal.contents[0].identifier.as_deref(), Some("r1"));
        assert_eq!(
            goal.contents[0].display_content_type.as_deref(),
            Some("Assessment")
        );

        assert!(to_goal_for_others(&goal_of_type("user")).contents.is_empty());
    }

    #[test]
    fn misspelt_progress_and_recipients_are_mapped() {
        let upstream: UpstreamGoal = serde_json::from_value(json!({
            "goal_id": "g1",
            "goal_title": "Learn Rust",
            "goal_type": "custom_shared",
            "goalProgess": 42.5,
            "recipient_list": ["u2", "u3"],
            "goal_content_id": null,
            "resource_progress": [
                { "content_type": "Resource", "resourceType": "Quiz", "resource_id": "r1", "time_left": 60 }
            ]
        }))
        .unwrap();

        let goal = to_goal_for_others(&upstream);
        assert_eq!(goal.progress, Some(42.5));
        assert_eq!(goal.shared_with, Some(json!(["u2", "u3"])));
        assert!(goal.content_ids.is_empty());

        let progress = goal.content_progress.unwrap();
        assert_eq!(progress[0].display_content_type.as_deref(), Some("Quiz"));
        assert_eq!(progress[0].time_left, Some(60.0));
    }

    // =========================================================================
    // Common goals
    // =========================================================================

    #[test]
    fn common_goal_is_own_and_unshared() {
        let group: UpstreamGoalGroup = serde_json::from_value(json!({
            "group_id": "grp",
            "group_name": "Starter",
            "goals": [{ "id": "cg1", "goalTitle": "Basics", "goalContentId": ["a"], "createdForSelf": true }]
        }))
        .unwrap();

        let out = to_goal_group(&group);
        assert_eq!(out.id.as_deref(), Some("grp"));
        let goal = &out.goals[0];
        assert_eq!(goal.goal_for, GoalFor::Me);
        assert!(!goal.is_shared);
        assert_eq!(goal.goal_type, "common");
        assert_eq!(goal.duration, Some(0.0));
        assert_eq!(goal.created_for_self, Some(json!(true)));
    }

    #[test]
    fn user_goals_split_by_completion() {
        let upstream = UpstreamUserGoals {
            goals_in_progress: vec![goal_of_type("user"), goal_of_type("custom")],
            completed_goals: vec![goal_of_type("common")],
        };
        let goals = to_user_goals(&upstream);
        assert_eq!(goals.goals_in_progress.len(), 2);
        assert_eq!(goals.completed_goals.len(), 1);
    }

    // =========================================================================
    // Upsert
    // =========================================================================

    #[test]
    fn upsert_request_uses_upstream_names() {
        let request: GoalUpsertRequest = serde_json::from_value(json!({
            "contentIds": ["c1"],
            "description": "weekly",
            "duration": 7,
            "name": "Week one",
            "type": "user"
        }))
        .unwrap();

        let out = serde_json::to_value(to_upstream_upsert(&request)).unwrap();
        assert_eq!(out["goal_content_id"], json!(["c1"]));
        assert_eq!(out["goal_title"], json!("Week one"));
        assert_eq!(out["goal_type"], json!("user"));
        assert_eq!(out["goal_id"], json!(null));
    }

    #[test]
    fn duplicate_goal_error_is_translated() {
        let upstream: UpstreamGoalUpsertResponse =
            serde_json::from_value(json!({ "errors": [{ "code": "DUPLICATE_GOAL" }] })).unwrap();
        assert_eq!(
            serde_json::to_value(to_upsert_response(&upstream)).unwrap(),
            json!({ "error": "Goal already exists" })
        );
    }

    #[test]
    fn unknown_code_passes_through_and_no_errors_means_no_error() {
        let upstream = UpstreamGoalUpsertResponse {
            errors: vec![
                UpstreamGoalError { code: "SOMETHING_ODD".to_string() },
                UpstreamGoalError { code: "DUPLICATE_GOAL".to_string() },
            ],
        };
        assert_eq!(to_upsert_response(&upstream).error.as_deref(), Some("SOMETHING_ODD"));

        let empty = to_upsert_response(&UpstreamGoalUpsertResponse::default());
        assert_eq!(serde_json::to_value(empty).unwrap(), json!({}));
    }

    #[test]
    fn track_status_renames_fields() {
        let upstream = UpstreamTrackStatus {
            rejected: vec![UpstreamRejectedGoal {
                status_message: Some("not now".to_string()),
                status: Some("rejected".to_string()),
                ..UpstreamRejectedGoal::default()
            }],
            ..UpstreamTrackStatus::default()
        };
        let status = to_track_status(&upstream);
        assert!(status.accepted.is_empty());
        assert_eq!(status.rejected[0].message.as_deref(), Some("not now"));
    }

    proptest! {
        #[test]
        fn shared_iff_shared_type(goal_type in "(user|common|custom|common_shared|custom_shared|[a-z_]{0,12})") {
            let goal = to_goal_for_others(&goal_of_type(&goal_type));
            let shared = goal_type == "common_shared" || goal_type == "custom_shared";
            prop_assert_eq!(goal.is_shared, shared);
        }

        #[test]
        fn first_error_decides(codes in proptest::collection::vec("[A-Z_]{1,16}", 1..5)) {
            let upstream = UpstreamGoalUpsertResponse {
                errors: codes.iter().map(|c| UpstreamGoalError { code: c.clone() }).collect(),
            };
            let expected = goal_error_message(&codes[0])
                .map(str::to_string)
                .unwrap_or_else(|| codes[0].clone());
            prop_assert_eq!(to_upsert_response(&upstream).error, Some(expected));
        }
    }
}
