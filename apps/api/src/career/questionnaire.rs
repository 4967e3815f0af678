//! The seven-step career questionnaire.
//!
//! `QuestionnaireWalk` tracks one pass through the steps. Submitted responses are
//! checked by replaying them through a fresh walk, so the server enforces the
//! same gating rules a client walk does.

use serde::Serialize;
use thiserror::Error;

use crate::career::models::AssessmentResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepId {
    Interests,
    Skills,
    Values,
    WorkStyle,
    Education,
    Experience,
    Personality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionStep {
    pub id: StepId,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[serde(rename = "type")]
    pub mode: SelectionMode,
    pub options: &'static [&'static str],
}

impl QuestionStep {
    fn offers(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}

pub static STEPS: [QuestionStep; 7] = [
    QuestionStep {
        id: StepId::Interests,
        title: "What interests you most?",
        subtitle: "Select all areas that excite you",
        mode: SelectionMode::Multiple,
        options: &[
            "Technology & Innovation",
            "Healthcare & Medicine",
            "Education & Training",
            "Arts & Creative",
            "Business & Finance",
            "Science & Research",
            "Social Impact & Community",
            "Engineering & Manufacturing",
            "Media & Communications",
            "Sports & Recreation",
            "Environment & Sustainability",
            "Law & Justice",
        ],
    },
    QuestionStep {
        id: StepId::Skills,
        title: "What are your strongest skills?",
        subtitle: "Choose your top abilities",
        mode: SelectionMode::Multiple,
        options: &[
            "Problem Solving",
            "Leadership",
            "Communication",
            "Creativity",
            "Analytical Thinking",
            "Teamwork",
            "Technical Skills",
            "Organization",
            "Adaptability",
            "Attention to Detail",
            "Strategic Planning",
            "Empathy",
        ],
    },
    QuestionStep {
        id: StepId::Values,
        title: "What matters most to you in a career?",
        subtitle: "Select your core values",
        mode: SelectionMode::Multiple,
        options: &[
            "Work-Life Balance",
            "High Salary",
            "Job Security",
            "Growth Opportunities",
            "Making a Difference",
            "Independence",
            "Recognition",
            "Flexibility",
            "Learning & Development",
            "Collaboration",
            "Innovation",
            "Stability",
        ],
    },
    QuestionStep {
        id: StepId::WorkStyle,
        title: "What work environment suits you?",
        subtitle: "Choose your preferred settings",
        mode: SelectionMode::Multiple,
        options: &[
            "Remote Work",
            "Office Environment",
            "Hybrid Model",
            "Fieldwork",
            "Team Collaboration",
            "Independent Work",
            "Client Interaction",
            "Research Setting",
            "Creative Studio",
            "Fast-Paced Environment",
            "Structured Routine",
            "Flexible Schedule",
        ],
    },
    QuestionStep {
        id: StepId::Education,
        title: "What is your education level?",
        subtitle: "Select your current or planned education",
        mode: SelectionMode::Single,
        options: &[
            "High School",
            "Associate Degree",
            "Bachelor's Degree",
            "Master's Degree",
            "Doctoral Degree",
            "Professional Certification",
            "Trade School",
            "Self-Taught",
        ],
    },
    QuestionStep {
        id: StepId::Experience,
        title: "What is your experience level?",
        subtitle: "Choose your professional background",
        mode: SelectionMode::Single,
        options: &[
            "No Experience",
            "Entry Level (0-2 years)",
            "Mid-Level (3-5 years)",
            "Senior Level (6-10 years)",
            "Expert Level (10+ years)",
            "Student/Recent Graduate",
        ],
    },
    QuestionStep {
        id: StepId::Personality,
        title: "How would you describe yourself?",
        subtitle: "Select traits that best describe you",
        mode: SelectionMode::Multiple,
        options: &[
            "Introverted",
            "Extroverted",
            "Detail-Oriented",
            "Big Picture Thinker",
            "Risk-Taker",
            "Cautious",
            "Spontaneous",
            "Planned",
            "Competitive",
            "Collaborative",
            "Innovative",
            "Traditional",
        ],
    },
];

#[derive(Debug, Error, PartialEq)]
pub enum WalkError {
    #[error("'{option}' is not an option for {step:?}")]
    UnknownOption { step: StepId, option: String },

    #[error("'{option}' is selected more than once for {step:?}")]
    DuplicateOption { step: StepId, option: String },

    #[error("{0:?} needs an answer before continuing")]
    Incomplete(StepId),

    #[error("the questionnaire is already complete")]
    Finished,
}

/// Result of a successful `advance`.
#[derive(Debug, PartialEq)]
pub enum WalkProgress {
    Next(usize),
    Complete(AssessmentResponse),
}

/// One walk through `STEPS`, accumulating answers.
#[derive(Debug, Default)]
pub struct QuestionnaireWalk {
    current: usize,
    answers: AssessmentResponse,
    finished: bool,
}

impl QuestionnaireWalk {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static QuestionStep {
        &STEPS[self.current]
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn answers(&self) -> &AssessmentResponse {
        &self.answers
    }

    /// Single-choice steps replace the answer; multiple-choice steps toggle it.
    pub fn select(&mut self, option: &str) -> Result<(), WalkError> {
        if self.finished {
            return Err(WalkError::Finished);
        }
        let step = self.current_step();
        if !step.offers(option) {
            return Err(WalkError::UnknownOption {
                step: step.id,
                option: option.to_string(),
            });
        }
        match answer_mut(&mut self.answers, step.id) {
            Answer::Single(slot) => *slot = option.to_string(),
            Answer::Multiple(list) => {
                if let Some(pos) = list.iter().position(|o| o == option) {
                    list.remove(pos);
                } else {
                    list.push(option.to_string());
                }
            }
        }
        Ok(())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_selected(&self, option: &str) -> bool {
        match answer(&self.answers, self.current_step().id) {
            AnswerRef::Single(value) => value == option,
            AnswerRef::Multiple(list) => list.iter().any(|o| o == option),
        }
    }

    /// Single steps need exactly one answer, multiple steps at least one.
    pub fn can_proceed(&self) -> bool {
        match answer(&self.answers, self.current_step().id) {
            AnswerRef::Single(value) => !value.is_empty(),
            AnswerRef::Multiple(list) => !list.is_empty(),
        }
    }

    pub fn advance(&mut self) -> Result<WalkProgress, WalkError> {
        if self.finished {
            return Err(WalkError::Finished);
        }
        if !self.can_proceed() {
            return Err(WalkError::Incomplete(self.current_step().id));
        }
        if self.current + 1 < STEPS.len() {
            self.current += 1;
            Ok(WalkProgress::Next(self.current))
        } else {
            self.finished = true;
            Ok(WalkProgress::Complete(self.answers.clone()))
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn back(&mut self) {
        if self.current > 0 && !self.finished {
            self.current -= 1;
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn progress_percent(&self) -> u32 {
        (((self.current + 1) as f64 / STEPS.len() as f64) * 100.0).round() as u32
    }
}

/// Checks that every answer belongs to its step and no option repeats.
/// Unanswered steps pass.
pub fn check_selections(response: &AssessmentResponse) -> Result<(), WalkError> {
    for step in &STEPS {
        match answer(response, step.id) {
            AnswerRef::Single(value) => {
                if !value.is_empty() && !step.offers(value) {
                    return Err(WalkError::UnknownOption {
                        step: step.id,
                        option: value.to_string(),
                    });
                }
            }
            AnswerRef::Multiple(list) => {
                for (i, option) in list.iter().enumerate() {
                    if !step.offers(option) {
                        return Err(WalkError::UnknownOption {
                            step: step.id,
                            option: option.clone(),
                        });
                    }
                    if list[..i].contains(option) {
                        return Err(WalkError::DuplicateOption {
                            step: step.id,
                            option: option.clone(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

/// Replays a response through a fresh walk. Fails on the first step that
/// could not be completed.
pub fn check_complete(response: &AssessmentResponse) -> Result<AssessmentResponse, WalkError> {
    check_selections(response)?;

    let mut walk = QuestionnaireWalk::new();
    loop {
        match answer(response, walk.current_step().id) {
            AnswerRef::Single(value) => {
                if !value.is_empty() {
                    walk.select(value)?;
                }
            }
            AnswerRef::Multiple(list) => {
                for option in list {
                    walk.select(option)?;
                }
            }
        }
        if let WalkProgress::Complete(done) = walk.advance()? {
            return Ok(done);
        }
    }
}

enum Answer<'a> {
    Single(&'a mut String),
    Multiple(&'a mut Vec<String>),
}

enum AnswerRef<'a> {
    Single(&'a str),
    Multiple(&'a [String]),
}

fn answer_mut(response: &mut AssessmentResponse, step: StepId) -> Answer<'_> {
    match step {
        StepId::Interests => Answer::Multiple(&mut response.interests),
        StepId::Skills => Answer::Multiple(&mut response.skills),
        StepId::Values => Answer::Multiple(&mut response.values),
        StepId::WorkStyle => Answer::Multiple(&mut response.work_style),
        StepId::Education => Answer::Single(&mut response.education),
        StepId::Experience => Answer::Single(&mut response.experience),
        StepId::Personality => Answer::Multiple(&mut response.personality),
    }
}

fn answer(response: &AssessmentResponse, step: StepId) -> AnswerRef<'_> {
    match step {
        StepId::Interests => AnswerRef::Multiple(&response.interests),
        StepId::Skills => AnswerRef::Multiple(&response.skills),
        StepId::Values => AnswerRef::Multiple(&response.values),
        StepId::WorkStyle => AnswerRef::Multiple(&response.work_style),
        StepId::Education => AnswerRef::Single(&response.education),
        StepId::Experience => AnswerRef::Single(&response.experience),
        StepId::Personality => AnswerRef::Multiple(&response.personality),
    }
}
