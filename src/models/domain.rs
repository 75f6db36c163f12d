use serde::{Deserialize, Serialize};

/// Fitness goal tags shared by user profiles and trainer specialties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
    GeneralFitness,
    Rehabilitation,
}

impl FitnessGoal {
    /// Parse a raw quiz value, returning None for anything outside the vocabulary
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weight-loss" => Some(Self::WeightLoss),
            "muscle-gain" => Some(Self::MuscleGain),
            "endurance" => Some(Self::Endurance),
            "flexibility" => Some(Self::Flexibility),
            "general-fitness" => Some(Self::GeneralFitness),
            "rehabilitation" => Some(Self::Rehabilitation),
            _ => None,
        }
    }
}

/// Training style tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingStyle {
    HighIntensity,
    SteadyState,
    Functional,
    SportSpecific,
    Mindful,
    StrengthFocused,
}

impl TrainingStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high-intensity" => Some(Self::HighIntensity),
            "steady-state" => Some(Self::SteadyState),
            "functional" => Some(Self::Functional),
            "sport-specific" => Some(Self::SportSpecific),
            "mindful" => Some(Self::Mindful),
            "strength-focused" => Some(Self::StrengthFocused),
            _ => None,
        }
    }
}

/// Personality trait tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonalityTrait {
    Motivating,
    Analytical,
    Empathetic,
    Disciplined,
    Flexible,
    Energetic,
}

impl PersonalityTrait {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "motivating" => Some(Self::Motivating),
            "analytical" => Some(Self::Analytical),
            "empathetic" => Some(Self::Empathetic),
            "disciplined" => Some(Self::Disciplined),
            "flexible" => Some(Self::Flexible),
            "energetic" => Some(Self::Energetic),
            _ => None,
        }
    }
}

/// Client experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Athlete,
}

impl ExperienceLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            "athlete" => Some(Self::Athlete),
            _ => None,
        }
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Beginner
    }
}

/// A recurring weekly availability window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl TimeSlot {
    pub fn new(day: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            day: day.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

/// Inclusive hourly budget bounds in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

/// Trainer record as loaded from the trainer store
///
/// Read-only input to the match engine; the engine never mutates trainers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    pub specialties: Vec<FitnessGoal>,
    pub training_styles: Vec<TrainingStyle>,
    #[serde(default)]
    pub personality: Vec<PersonalityTrait>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub hourly_rate: f64,
    pub availability: Vec<TimeSlot>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub years_experience: u8,
    #[serde(default)]
    pub verified: bool,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Canonical user profile derived from quiz answers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub goals: Vec<FitnessGoal>,
    pub preferred_styles: Vec<TrainingStyle>,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub personality: Vec<PersonalityTrait>,
    pub availability: Vec<TimeSlot>,
    pub timezone: String,
    pub budget_range: BudgetRange,
    #[serde(default)]
    pub virtual_only: bool,
    #[serde(default)]
    pub in_person_only: bool,
    pub completeness: u8,
}

/// Raw quiz submission, keyed by question id
///
/// Every field is optional and may arrive as a single string or an array.
/// Unknown tags are dropped during transformation, never rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(rename = "training-style", default, skip_serializing_if = "Option::is_none")]
    pub training_style: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<AnswerValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<AnswerValue>,
}

/// A quiz answer that may be a single choice or a multi-select
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    One(String),
    Many(Vec<String>),
}

impl AnswerValue {
    /// Normalize to a uniform list of raw values
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::One(value) if value.is_empty() => vec![],
            Self::One(value) => vec![value.as_str()],
            Self::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Whether this answer counts toward profile completeness
    pub fn is_answered(&self) -> bool {
        match self {
            Self::One(value) => !value.is_empty(),
            Self::Many(values) => !values.is_empty(),
        }
    }
}

/// The six independent comparison dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    GoalAlignment,
    StyleCompatibility,
    PersonalityFit,
    ScheduleMatch,
    ExperienceLevel,
    BudgetFit,
}

impl Factor {
    pub const ALL: [Factor; 6] = [
        Factor::GoalAlignment,
        Factor::StyleCompatibility,
        Factor::PersonalityFit,
        Factor::ScheduleMatch,
        Factor::ExperienceLevel,
        Factor::BudgetFit,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Factor::GoalAlignment => "Goal Alignment",
            Factor::StyleCompatibility => "Style Compatibility",
            Factor::PersonalityFit => "Personality Fit",
            Factor::ScheduleMatch => "Schedule Match",
            Factor::ExperienceLevel => "Experience Level",
            Factor::BudgetFit => "Budget Fit",
        }
    }
}

/// Per-factor weight vector applied to breakdown scores
///
/// Expected to sum to 1.0; validated at the HTTP boundary, not inside the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWeights {
    #[serde(default = "default_goal_weight")]
    pub goal_alignment: f64,
    #[serde(default = "default_style_weight")]
    pub style_compatibility: f64,
    #[serde(default = "default_personality_weight")]
    pub personality_fit: f64,
    #[serde(default = "default_schedule_weight")]
    pub schedule_match: f64,
    #[serde(default = "default_experience_weight")]
    pub experience_level: f64,
    #[serde(default = "default_budget_weight")]
    pub budget_fit: f64,
}

fn default_goal_weight() -> f64 { 0.25 }
fn default_style_weight() -> f64 { 0.20 }
fn default_personality_weight() -> f64 { 0.15 }
fn default_schedule_weight() -> f64 { 0.20 }
fn default_experience_weight() -> f64 { 0.10 }
fn default_budget_weight() -> f64 { 0.10 }

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            goal_alignment: default_goal_weight(),
            style_compatibility: default_style_weight(),
            personality_fit: default_personality_weight(),
            schedule_match: default_schedule_weight(),
            experience_level: default_experience_weight(),
            budget_fit: default_budget_weight(),
        }
    }
}

impl MatchWeights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::GoalAlignment => self.goal_alignment,
            Factor::StyleCompatibility => self.style_compatibility,
            Factor::PersonalityFit => self.personality_fit,
            Factor::ScheduleMatch => self.schedule_match,
            Factor::ExperienceLevel => self.experience_level,
            Factor::BudgetFit => self.budget_fit,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Whether the weight set is acceptable at the API boundary
    pub fn is_valid_sum(&self) -> bool {
        (self.sum() - 1.0).abs() <= 0.01
    }

    /// Scale all six weights so they sum to 1.0
    ///
    /// A degenerate all-zero weight set is returned unchanged.
    pub fn normalized(&self) -> Self {
        let sum = self.sum();
        if sum <= f64::EPSILON {
            return *self;
        }
        Self {
            goal_alignment: self.goal_alignment / sum,
            style_compatibility: self.style_compatibility / sum,
            personality_fit: self.personality_fit / sum,
            schedule_match: self.schedule_match / sum,
            experience_level: self.experience_level / sum,
            budget_fit: self.budget_fit / sum,
        }
    }
}

/// Raw, pre-weight factor scores attached to a match result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub goal_alignment: f64,
    pub style_compatibility: f64,
    pub personality_fit: f64,
    pub schedule_match: f64,
    pub experience_level: f64,
    pub budget_fit: f64,
}

impl MatchBreakdown {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::GoalAlignment => self.goal_alignment,
            Factor::StyleCompatibility => self.style_compatibility,
            Factor::PersonalityFit => self.personality_fit,
            Factor::ScheduleMatch => self.schedule_match,
            Factor::ExperienceLevel => self.experience_level,
            Factor::BudgetFit => self.budget_fit,
        }
    }

    /// Dot product of the breakdown with a weight set
    pub fn weighted_sum(&self, weights: &MatchWeights) -> f64 {
        Factor::ALL
            .iter()
            .map(|f| self.get(*f) * weights.get(*f))
            .sum()
    }
}

/// One of the top contributing factors surfaced in an explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopFactor {
    pub name: String,
    pub score: f64,
}

/// Human-readable narrative attached to a match result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchExplanation {
    pub summary: String,
    pub top_factors: Vec<TopFactor>,
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub considerations: Option<Vec<String>>,
}

/// One trainer's scored and explained result for a matching run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub trainer: &'a Trainer,
    pub overall_score: f64,
    pub confidence: u8,
    pub breakdown: MatchBreakdown,
    pub explanation: MatchExplanation,
    pub passes_constraints: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = MatchWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!(weights.is_valid_sum());
    }

    #[test]
    fn test_normalized_weights() {
        let weights = MatchWeights {
            goal_alignment: 0.5,
            style_compatibility: 0.5,
            personality_fit: 0.5,
            schedule_match: 0.5,
            experience_level: 0.5,
            budget_fit: 0.5,
        };
        let normalized = weights.normalized();
        assert!((normalized.sum() - 1.0).abs() < 1e-9);
        assert!((normalized.goal_alignment - 1.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_enum_parsing_drops_unknown_tags() {
        assert_eq!(FitnessGoal::parse("muscle-gain"), Some(FitnessGoal::MuscleGain));
        assert_eq!(FitnessGoal::parse("time-travel"), None);
        assert_eq!(ExperienceLevel::parse("athlete"), Some(ExperienceLevel::Athlete));
        assert_eq!(ExperienceLevel::parse("expert"), None);
    }

    #[test]
    fn test_answer_value_normalization() {
        let single = AnswerValue::One("muscle-gain".to_string());
        assert_eq!(single.values(), vec!["muscle-gain"]);
        assert!(single.is_answered());

        let empty = AnswerValue::One(String::new());
        assert!(empty.values().is_empty());
        assert!(!empty.is_answered());

        let multi = AnswerValue::Many(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(multi.values().len(), 2);
    }

    #[test]
    fn test_trainer_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "id": "t1",
            "name": "Jordan",
            "specialties": ["muscle-gain"],
            "trainingStyles": ["high-intensity"],
            "experienceLevels": ["beginner", "intermediate"],
            "hourlyRate": 80.0,
            "availability": [
                {"day": "monday", "startTime": "06:00", "endTime": "12:00"}
            ]
        });

        let trainer: Trainer = serde_json::from_value(json).unwrap();
        assert_eq!(trainer.specialties, vec![FitnessGoal::MuscleGain]);
        assert_eq!(trainer.timezone, "UTC");
        assert!(!trainer.verified);
    }
}
