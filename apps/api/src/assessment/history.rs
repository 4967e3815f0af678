use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::models::assessment::{AssessmentRow, CareerMatchRow};

#[derive(Debug, Serialize)]
pub struct AssessmentHistoryEntry {
    #[serde(flatten)]
    pub assessment: AssessmentRow,
    pub career_matches: Vec<CareerMatchRow>,
}

/// Attaches each saved match to its assessment, best score first.
///
/// Assessment order is preserved. Matches whose assessment is not in the
/// list are dropped.
pub fn group_history(
    assessments: Vec<AssessmentRow>,
    matches: Vec<CareerMatchRow>,
) -> Vec<AssessmentHistoryEntry> {
    let mut by_assessment: HashMap<Uuid, Vec<CareerMatchRow>> = HashMap::new();
    for m in matches {
        by_assessment.entry(m.assessment_id).or_default().push(m);
    }

    assessments
        .into_iter()
        .map(|assessment| {
            let mut career_matches = by_assessment.remove(&assessment.id).unwrap_or_default();
            career_matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
            AssessmentHistoryEntry {
                assessment,
                career_matches,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn assessment(user_id: Uuid) -> AssessmentRow {
        AssessmentRow {
            id: Uuid::new_v4(),
            user_id,
            interests: vec!["Arts & Creative".to_string()],
            skills: vec![],
            core_values: vec![],
            work_style: vec![],
            education: "High School".to_string(),
            experience: "No Experience".to_string(),
            personality: vec![],
            created_at: Utc::now(),
        }
    }

    fn saved_match(assessment: &AssessmentRow, title: &str, score: i32) -> CareerMatchRow {
        CareerMatchRow {
            id: Uuid::new_v4(),
            user_id: assessment.user_id,
            assessment_id: assessment.id,
            career_title: title.to_string(),
            match_score: score,
            career_data: json!({ "title": title }),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_attached_and_sorted() {
        let user = Uuid::new_v4();
        let newer = assessment(user);
        let older = assessment(user);
        let matches = vec![
            saved_match(&newer, "Graphic Designer", 55),
            saved_match(&older, "Nurse", 40),
            saved_match(&newer, "UX Designer", 80),
        ];

        let history = group_history(vec![newer.clone(), older.clone()], matches);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].assessment.id, newer.id);
        let titles: Vec<&str> = history[0]
            .career_matches
            .iter()
            .map(|m| m.career_title.as_str())
            .collect();
        assert_eq!(titles, vec!["UX Designer", "Graphic Designer"]);
        assert_eq!(history[1].career_matches.len(), 1);
    }

    #[test]
    fn test_assessment_without_matches_is_kept() {
        let only = assessment(Uuid::new_v4());
        let history = group_history(vec![only.clone()], vec![]);
        assert_eq!(history.len(), 1);
        assert!(history[0].career_matches.is_empty());
    }

    #[test]
    fn test_orphan_matches_dropped() {
        let listed = assessment(Uuid::new_v4());
        let unlisted = assessment(listed.user_id);
        let history = group_history(
            vec![listed.clone()],
            vec![saved_match(&unlisted, "Teacher", 90)],
        );
        assert!(history[0].career_matches.is_empty());
    }

    #[test]
    fn test_entry_serializes_flat() {
        let a = assessment(Uuid::new_v4());
        let entry = group_history(vec![a.clone()], vec![]).remove(0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], json!(a.id));
        assert!(json["career_matches"].as_array().unwrap().is_empty());
    }
}
