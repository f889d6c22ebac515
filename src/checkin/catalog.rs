//! Built-in daily check-in questionnaire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionCategory {
    Energy,
    Sensory,
    Emotional,
    Social,
    Burnout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    Slider,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInQuestion {
    pub id: String,
    pub category: QuestionCategory,
    pub label: String,
    pub description: Option<String>,
    pub min: f64,
    pub max: f64,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

pub fn find_question<'a>(questions: &'a [CheckInQuestion], id: &str) -> Option<&'a CheckInQuestion> {
    questions.iter().find(|q| q.id == id)
}

fn slider(
    id: &str,
    category: QuestionCategory,
    label: &str,
    description: &str,
    min: f64,
    max: f64,
) -> CheckInQuestion {
    CheckInQuestion {
        id: id.into(),
        category,
        label: label.into(),
        description: Some(description.into()),
        min,
        max,
        kind: QuestionKind::Slider,
    }
}

/// Questions in the order they are asked. Order matters for scoring: earlier
/// answers carry more weight.
pub fn default_questions() -> Vec<CheckInQuestion> {
    use QuestionCategory::*;

    vec![
        slider(
            "spoons",
            Energy,
            "Current Spoon Level",
            "How many spoons do you have left today? (0 = depleted, 12 = full)",
            0.0,
            12.0,
        ),
        slider(
            "energy_baseline",
            Energy,
            "Energy vs Baseline",
            "How does your energy compare to your usual baseline?",
            0.0,
            10.0,
        ),
        slider(
            "masking_effort",
            Energy,
            "Masking Effort Today",
            "How much effort did you spend masking/pretending to be neurotypical?",
            0.0,
            10.0,
        ),
        slider(
            "sensory_overload",
            Sensory,
            "Sensory Overload Level",
            "How overwhelmed are your senses right now?",
            0.0,
            10.0,
        ),
        slider(
            "environment_comfort",
            Sensory,
            "Environmental Comfort",
            "How comfortable is your physical environment?",
            0.0,
            10.0,
        ),
        slider(
            "stim_regulation",
            Sensory,
            "Stim Regulation Needs",
            "How much do you need stimming/movement to regulate?",
            0.0,
            10.0,
        ),
        slider(
            "mood",
            Emotional,
            "Overall Mood",
            "How would you rate your overall mood?",
            1.0,
            10.0,
        ),
        slider(
            "stress",
            Emotional,
            "Stress Level",
            "How stressed do you feel?",
            0.0,
            10.0,
        ),
        slider(
            "rsd_triggers",
            Emotional,
            "RSD Triggers Encountered",
            "How many rejection-sensitive triggers did you experience?",
            0.0,
            10.0,
        ),
        slider(
            "social_cost",
            Social,
            "Social Interaction Energy Cost",
            "How draining were social interactions today?",
            0.0,
            10.0,
        ),
        slider(
            "communication_friction",
            Social,
            "Communication Friction",
            "How much friction did you experience in communication?",
            0.0,
            10.0,
        ),
        slider(
            "need_quiet",
            Social,
            "Need for Quiet/Space",
            "How much do you need quiet time or space right now?",
            0.0,
            10.0,
        ),
        slider(
            "brain_fog",
            Burnout,
            "Brain Fog Level",
            "How much brain fog are you experiencing?",
            0.0,
            10.0,
        ),
        slider(
            "executive_function",
            Burnout,
            "Executive Function Capacity",
            "How well can you plan, organize, and execute tasks?",
            0.0,
            10.0,
        ),
        slider(
            "recovery_needs",
            Burnout,
            "Recovery Needs",
            "How much do you need rest/recovery right now?",
            0.0,
            10.0,
        ),
    ]
}
