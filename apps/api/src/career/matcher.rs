//! Career matching: scores an assessment against every catalog career.
//!
//! Default: `WeightedMatcher`, a fixed linear blend of five component scores
//! over static keyword tables. Pure and deterministic.
//!
//! `AppState` holds an `Arc<dyn CareerMatcher>` so the scoring backend can be
//! swapped without touching handlers.

use serde::{Deserialize, Serialize};

use crate::career::catalog::{CareerProfile, CATALOG};
use crate::career::models::AssessmentResponse;
use crate::career::roadmap::RoadmapKey;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// A catalog career annotated with how well it fits one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerMatch {
    pub id: String,
    pub title: String,
    pub description: String,
    pub match_score: u32, // 0 – 100
    pub salary_range: String,
    pub growth: String,
    pub required_skills: Vec<String>,
    pub education: String,
    pub work_environment: String,
    pub key_tasks: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub related_careers: Vec<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "RoadmapKey::deserialize_lenient"
    )]
    pub roadmap_key: Option<RoadmapKey>,
}

impl CareerMatch {
    pub fn from_profile(profile: &CareerProfile, match_score: u32) -> Self {
        let owned =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            id: profile.id.to_string(),
            title: profile.title.to_string(),
            description: profile.description.to_string(),
            match_score,
            salary_range: profile.salary_range.to_string(),
            growth: profile.growth.to_string(),
            required_skills: owned(profile.required_skills),
            education: profile.education.to_string(),
            work_environment: profile.work_environment.to_string(),
            key_tasks: owned(profile.key_tasks),
            pros: owned(profile.pros),
            cons: owned(profile.cons),
            related_careers: owned(profile.related_careers),
            roadmap_key: Some(profile.roadmap),
        }
    }
}

/// Per-component scores for one career, each in 0.0 – 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub interest: f64,
    pub skill: f64,
    pub value: f64,
    pub work_style: f64,
    pub education: f64,
}

/// Component weights. The defaults sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub interest: f64,
    pub skill: f64,
    pub value: f64,
    pub work_style: f64,
    pub education: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            interest: 30.0,
            skill: 25.0,
            value: 20.0,
            work_style: 15.0,
            education: 10.0,
        }
    }
}

impl MatchWeights {
    fn total(&self) -> f64 {
        self.interest + self.skill + self.value + self.work_style + self.education
    }
}

impl ComponentScores {
    /// Weighted percentage, rounded to the nearest integer and clamped to 0 – 100.
    pub fn percentage(&self, weights: &MatchWeights) -> u32 {
        let total_weight = weights.total();
        if total_weight <= 0.0 {
            return 0;
        }
        let weighted = self.interest * weights.interest
            + self.skill * weights.skill
            + self.value * weights.value
            + self.work_style * weights.work_style
            + self.education * weights.education;
        ((weighted / total_weight) * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks every catalog career against an assessment.
///
/// Implementations must be total: any well-typed response yields one match per
/// catalog entry, sorted by descending score.
pub trait CareerMatcher: Send + Sync {
    fn rank(&self, response: &AssessmentResponse) -> Vec<CareerMatch>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatcher (default implementation)
// ────────────────────────────────────────────────────────────────────────────

/// Weighted keyword matcher.
///
/// Algorithm, per career:
/// 1. interest: share of selected interests whose keywords hit title/description
/// 2. skill: share of selected skills whose mapped keywords hit a required skill
/// 3. value: mean of per-value rules against salary/growth/environment/title
/// 4. work style: mean of per-style rules against the work environment
/// 5. education: 1.0 if the user's level meets the requirement, else
///    max(0.3, user/required)
///
/// Final score = round(Σ component × weight / Σ weights × 100).
pub struct WeightedMatcher {
    catalog: &'static [CareerProfile],
    weights: MatchWeights,
}

impl WeightedMatcher {
    pub fn new(catalog: &'static [CareerProfile], weights: MatchWeights) -> Self {
        Self { catalog, weights }
    }
}

impl Default for WeightedMatcher {
    fn default() -> Self {
        Self::new(CATALOG, MatchWeights::default())
    }
}

impl CareerMatcher for WeightedMatcher {
    fn rank(&self, response: &AssessmentResponse) -> Vec<CareerMatch> {
        let mut matches: Vec<CareerMatch> = self
            .catalog
            .iter()
            .map(|career| {
                let score = score_career(response, career).percentage(&self.weights);
                CareerMatch::from_profile(career, score)
            })
            .collect();

        // Stable: equal scores keep catalog declaration order.
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches
    }
}

/// Ranks the built-in catalog with default weights.
#[cfg_attr(not(test), allow(dead_code))]
pub fn compute_matches(response: &AssessmentResponse) -> Vec<CareerMatch> {
    WeightedMatcher::default().rank(response)
}

/// Computes all five component scores of one career.
pub fn score_career(response: &AssessmentResponse, career: &CareerProfile) -> ComponentScores {
    ComponentScores {
        interest: interest_score(&response.interests, career.title, career.description),
        skill: skill_score(&response.skills, career.required_skills),
        value: value_score(&response.values, career),
        work_style: work_style_score(&response.work_style, career.work_environment),
        education: education_score(&response.education, career.education),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static lookup tables
// ────────────────────────────────────────────────────────────────────────────

const INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Technology & Innovation",
        &["software", "engineer", "developer", "tech", "system", "programming"],
    ),
    (
        "Healthcare & Medicine",
        &["nurse", "medical", "patient", "health", "care", "clinical"],
    ),
    (
        "Education & Training",
        &["teacher", "education", "school", "student", "learning", "curriculum"],
    ),
    (
        "Arts & Creative",
        &["design", "creative", "visual", "art", "graphic", "aesthetic"],
    ),
    (
        "Business & Finance",
        &["financial", "analyst", "business", "market", "investment", "economic"],
    ),
    (
        "Science & Research",
        &["research", "data", "scientist", "analysis", "study", "investigation"],
    ),
    (
        "Engineering & Manufacturing",
        &["mechanical", "engineer", "design", "manufacturing", "technical", "systems"],
    ),
];

const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Problem Solving",
        &["problem solving", "analytical", "critical thinking", "troubleshooting"],
    ),
    ("Leadership", &["leadership", "management", "team", "coordination"]),
    (
        "Communication",
        &["communication", "presentation", "writing", "interpersonal"],
    ),
    ("Creativity", &["creativity", "design", "innovation", "artistic"]),
    (
        "Analytical Thinking",
        &["analytical", "statistics", "data", "research", "math"],
    ),
    (
        "Technical Skills",
        &["programming", "software", "cad", "technical", "engineering"],
    ),
];

/// Score for a value or work style without a rule.
const UNMAPPED_SCORE: f64 = 0.5;

/// Education floor when the user is below the requirement.
const EDUCATION_FLOOR: f64 = 0.3;

fn lookup<'a>(table: &'a [(&str, &'a [&'a str])], tag: &str) -> Option<&'a [&'a str]> {
    table.iter().find(|(key, _)| *key == tag).map(|(_, kws)| *kws)
}

fn share(matched: usize, selected: usize) -> f64 {
    (matched as f64 / selected.max(1) as f64).min(1.0)
}

fn mean(total: f64, selected: usize) -> f64 {
    (total / selected.max(1) as f64).min(1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Component scores
// ────────────────────────────────────────────────────────────────────────────

/// Interests without a keyword table count toward the denominator but never match.
pub fn interest_score(interests: &[String], title: &str, description: &str) -> f64 {
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    let matched = interests
        .iter()
        .filter_map(|interest| lookup(INTEREST_KEYWORDS, interest))
        .filter(|keywords| {
            keywords
                .iter()
                .any(|kw| title.contains(kw) || description.contains(kw))
        })
        .count();

    share(matched, interests.len())
}

/// Skills without a mapping fall back to their own lowercase text as the keyword.
pub fn skill_score(skills: &[String], required_skills: &[&str]) -> f64 {
    let required: Vec<String> = required_skills.iter().map(|s| s.to_lowercase()).collect();

    let matched = skills
        .iter()
        .filter(|skill| {
            let fallback = [skill.to_lowercase()];
            let keywords: Vec<&str> = match lookup(SKILL_KEYWORDS, skill) {
                Some(kws) => kws.to_vec(),
                None => fallback.iter().map(String::as_str).collect(),
            };
            required
                .iter()
                .any(|req| keywords.iter().any(|kw| req.contains(kw)))
        })
        .count();

    share(matched, skills.len())
}

fn value_rule(value: &str, career: &CareerProfile) -> f64 {
    let high_growth = career.growth.contains("High");
    match value {
        "High Salary" => {
            if career.salary_range.contains("100,000") {
                1.0
            } else {
                0.5
            }
        }
        "Job Security" => {
            if high_growth {
                1.0
            } else {
                0.7
            }
        }
        "Work-Life Balance" => {
            if career.work_environment.contains("Remote") {
                1.0
            } else {
                0.6
            }
        }
        "Growth Opportunities" => {
            if high_growth {
                1.0
            } else {
                0.5
            }
        }
        "Making a Difference" => {
            let title = career.title.to_lowercase();
            if ["teacher", "nurse", "social"].iter().any(|w| title.contains(w)) {
                1.0
            } else {
                0.3
            }
        }
        _ => UNMAPPED_SCORE,
    }
}

/// An empty selection sums to zero over a divisor of one.
pub fn value_score(values: &[String], career: &CareerProfile) -> f64 {
    let total: f64 = values.iter().map(|v| value_rule(v, career)).sum();
    mean(total, values.len())
}

fn work_style_rule(style: &str, environment: &str) -> f64 {
    let has = |needle: &str| if environment.contains(needle) { 1.0 } else { 0.0 };
    match style {
        "Remote Work" => has("Remote"),
        "Office Environment" => has("Office"),
        "Hybrid Model" => has("Hybrid"),
        "Team Collaboration" => 1.0,
        "Independent Work" => {
            if environment.contains("Remote") {
                1.0
            } else {
                0.5
            }
        }
        _ => UNMAPPED_SCORE,
    }
}

pub fn work_style_score(work_style: &[String], environment: &str) -> f64 {
    let total: f64 = work_style
        .iter()
        .map(|s| work_style_rule(s, environment))
        .sum();
    mean(total, work_style.len())
}

/// Ordinal rank of a questionnaire education answer. Unknown or empty ranks lowest.
fn user_education_rank(education: &str) -> u32 {
    match education {
        "High School" => 1,
        "Associate Degree" => 2,
        "Bachelor's Degree" => 3,
        "Master's Degree" => 4,
        "Doctoral Degree" => 5,
        _ => 1,
    }
}

/// Ordinal rank required by a free-text catalog education descriptor.
fn required_education_rank(descriptor: &str) -> u32 {
    if descriptor.contains("Master") {
        4
    } else if descriptor.contains("Bachelor") {
        3
    } else if descriptor.contains("Associate") {
        2
    } else {
        1
    }
}

pub fn education_score(user_education: &str, career_education: &str) -> f64 {
    let user = user_education_rank(user_education);
    let required = required_education_rank(career_education);
    if user >= required {
        1.0
    } else {
        (user as f64 / required as f64).max(EDUCATION_FLOOR)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::catalog::find_career;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn tech_response() -> AssessmentResponse {
        AssessmentResponse {
            interests: tags(&["Technology & Innovation"]),
            skills: tags(&["Technical Skills"]),
            values: tags(&["High Salary"]),
            work_style: tags(&["Remote Work"]),
            education: "Bachelor's Degree".to_string(),
            experience: "Entry Level (0-2 years)".to_string(),
            personality: vec![],
        }
    }

    fn position(matches: &[CareerMatch], title: &str) -> usize {
        matches
            .iter()
            .position(|m| m.title == title)
            .unwrap_or_else(|| panic!("{title} missing from matches"))
    }

    #[test]
    fn test_one_match_per_catalog_entry_in_range() {
        let matches = compute_matches(&tech_response());
        assert_eq!(matches.len(), CATALOG.len());
        assert!(matches.iter().all(|m| m.match_score <= 100));
    }

    #[test]
    fn test_tech_profile_ranks_engineering_above_teaching() {
        let matches = compute_matches(&tech_response());
        let teacher = position(&matches, "Elementary School Teacher");
        assert!(position(&matches, "Software Engineer") < teacher);
        assert!(position(&matches, "Data Scientist") < teacher);
    }

    #[test]
    fn test_software_engineer_score_for_tech_profile() {
        // 30 + 25 + 0.5*20 + 15 + 10 = 90
        let matches = compute_matches(&tech_response());
        assert_eq!(matches[0].title, "Software Engineer");
        assert_eq!(matches[0].match_score, 90);
    }

    #[test]
    fn test_sorted_descending() {
        let matches = compute_matches(&tech_response());
        assert!(matches
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_idempotent() {
        let response = tech_response();
        assert_eq!(compute_matches(&response), compute_matches(&response));
    }

    #[test]
    fn test_empty_response_is_finite_and_deterministic() {
        let empty = AssessmentResponse::default();
        for career in CATALOG {
            let scores = score_career(&empty, career);
            for s in [
                scores.interest,
                scores.skill,
                scores.value,
                scores.work_style,
                scores.education,
            ] {
                assert!(s.is_finite(), "{} produced {s}", career.title);
            }
        }
        let first = compute_matches(&empty);
        let second = compute_matches(&empty);
        let order = |m: &[CareerMatch]| m.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
        assert_eq!(order(&first), order(&second));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Empty input: only education contributes and every career asks for a
        // Bachelor's, so all score alike and keep declaration order.
        let matches = compute_matches(&AssessmentResponse::default());
        let tied: Vec<&str> = matches
            .iter()
            .filter(|m| m.match_score == matches[0].match_score)
            .map(|m| m.id.as_str())
            .collect();
        let catalog_order: Vec<&str> = CATALOG
            .iter()
            .map(|c| c.id)
            .filter(|id| tied.contains(id))
            .collect();
        assert_eq!(tied, catalog_order);
    }

    #[test]
    fn test_adding_matching_skill_never_lowers_skill_score() {
        let career = find_career("data-scientist").unwrap();
        let base = tags(&["Leadership"]);
        let before = skill_score(&base, career.required_skills);
        let mut extended = base.clone();
        extended.push("Analytical Thinking".to_string()); // maps to "statistics"
        let after = skill_score(&extended, career.required_skills);
        assert!(after >= before, "{after} < {before}");
    }

    #[test]
    fn test_unmapped_skill_falls_back_to_own_text() {
        let career = find_career("data-scientist").unwrap();
        assert_eq!(skill_score(&tags(&["SQL"]), career.required_skills), 1.0);
        assert_eq!(skill_score(&tags(&["Juggling"]), career.required_skills), 0.0);
    }

    #[test]
    fn test_unmapped_interest_counts_in_denominator() {
        let score = interest_score(
            &tags(&["Technology & Innovation", "Law & Justice"]),
            "Software Engineer",
            "",
        );
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_values_score_zero() {
        let career = find_career("software-engineer").unwrap();
        assert_eq!(value_score(&[], career), 0.0);
    }

    #[test]
    fn test_value_rules() {
        let nurse = find_career("nurse").unwrap();
        let engineer = find_career("mechanical-engineer").unwrap();
        assert_eq!(value_score(&tags(&["High Salary"]), nurse), 1.0);
        assert_eq!(value_score(&tags(&["Making a Difference"]), nurse), 1.0);
        assert_eq!(value_score(&tags(&["Job Security"]), engineer), 0.7);
        assert_eq!(value_score(&tags(&["Recognition"]), engineer), 0.5);
    }

    #[test]
    fn test_work_style_rules() {
        assert_eq!(work_style_score(&tags(&["Remote Work"]), "School"), 0.0);
        assert_eq!(work_style_score(&tags(&["Team Collaboration"]), "School"), 1.0);
        assert_eq!(work_style_score(&tags(&["Independent Work"]), "Office"), 0.5);
        // (1.0 + 0.0) / 2
        assert_eq!(
            work_style_score(&tags(&["Office Environment", "Hybrid Model"]), "Office"),
            0.5
        );
    }

    #[test]
    fn test_education_below_requirement_hits_floor() {
        let score = education_score("High School", "Master's in X");
        assert!((score - 0.3).abs() < f64::EPSILON);
        // contribution 0.3 × 10
        assert!((score * MatchWeights::default().education - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_education_partial_ratio() {
        // Associate (2) vs Bachelor (3)
        let score = education_score("Associate Degree", "Bachelor's in Design");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(education_score("Doctoral Degree", "Bachelor's"), 1.0);
        assert_eq!(education_score("", "No formal requirement"), 1.0);
    }

    #[test]
    fn test_bachelor_checked_before_associate() {
        // "Associate or Bachelor's" requires rank 3
        let nurse = find_career("nurse").unwrap();
        let score = education_score("Associate Degree", nurse.education);
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_full_and_zero() {
        let w = MatchWeights::default();
        let full = ComponentScores {
            interest: 1.0,
            skill: 1.0,
            value: 1.0,
            work_style: 1.0,
            education: 1.0,
        };
        assert_eq!(full.percentage(&w), 100);
        let zero = ComponentScores {
            interest: 0.0,
            skill: 0.0,
            value: 0.0,
            work_style: 0.0,
            education: 0.0,
        };
        assert_eq!(zero.percentage(&w), 0);
    }

    #[test]
    fn test_match_carries_roadmap_key() {
        let matches = compute_matches(&tech_response());
        let se = &matches[position(&matches, "Software Engineer")];
        assert_eq!(se.roadmap_key, Some(RoadmapKey::SoftwareEngineer));
    }
}
