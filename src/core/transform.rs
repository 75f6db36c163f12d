use crate::models::{
    AnswerValue, BudgetRange, ExperienceLevel, FitnessGoal, PersonalityTrait, QuizAnswers,
    TimeSlot, TrainingStyle, UserProfile,
};

const TOTAL_QUIZ_QUESTIONS: u32 = 6;

/// Transform raw quiz answers into a canonical user profile
///
/// Pure and deterministic: malformed or unknown values degrade to defaults,
/// never to errors. The client's timezone is passed in explicitly so the
/// function stays free of ambient reads; callers default it when the client
/// did not report one.
pub fn transform_quiz_answers(answers: &QuizAnswers, timezone: &str) -> UserProfile {
    UserProfile {
        goals: parse_tags(&answers.goals, FitnessGoal::parse),
        preferred_styles: parse_tags(&answers.training_style, TrainingStyle::parse),
        experience_level: parse_experience(answers.experience.as_deref()),
        personality: parse_tags(&answers.personality, PersonalityTrait::parse),
        availability: parse_schedule(&answers.schedule),
        timezone: timezone.to_string(),
        budget_range: parse_budget_range(answers.budget.as_deref()),
        virtual_only: false,
        in_person_only: false,
        completeness: calculate_completeness(answers),
    }
}

/// Normalize an answer to a list and keep only values inside the vocabulary
fn parse_tags<T>(answer: &Option<AnswerValue>, parse: fn(&str) -> Option<T>) -> Vec<T> {
    match answer {
        Some(value) => value.values().into_iter().filter_map(parse).collect(),
        None => Vec::new(),
    }
}

fn parse_experience(value: Option<&str>) -> ExperienceLevel {
    value
        .and_then(ExperienceLevel::parse)
        .unwrap_or_default()
}

/// Parse a bucketed budget string: "50-75", "125+" or anything else
pub fn parse_budget_range(value: Option<&str>) -> BudgetRange {
    let fallback = BudgetRange { min: 50, max: 100 };

    let Some(value) = value else {
        return fallback;
    };

    // "125+" style open-ended upper bound
    if let Some(stripped) = value.strip_suffix('+') {
        let min = stripped.parse().unwrap_or(125);
        return BudgetRange { min, max: 999 };
    }

    // "50-75" style closed range
    if let Some((min_str, max_str)) = value.split_once('-') {
        return BudgetRange {
            min: min_str.parse().unwrap_or(50),
            max: max_str.parse().unwrap_or(100),
        };
    }

    fallback
}

/// Expand schedule-preference buckets into concrete weekly windows
///
/// Zero selected buckets means "fully flexible", not "unavailable", and maps
/// to a maximally permissive default schedule.
pub fn parse_schedule(answer: &Option<AnswerValue>) -> Vec<TimeSlot> {
    let selected = match answer {
        Some(value) => value.values(),
        None => vec![],
    };

    let mut slots = Vec::new();

    for option in selected {
        match option {
            "weekday-morning" => push_weekdays(&mut slots, "06:00", "10:00"),
            "weekday-afternoon" => push_weekdays(&mut slots, "12:00", "17:00"),
            "weekday-evening" => push_weekdays(&mut slots, "17:00", "21:00"),
            "weekend-morning" => push_weekends(&mut slots, "08:00", "12:00"),
            "weekend-afternoon" => push_weekends(&mut slots, "12:00", "17:00"),
            _ => {}
        }
    }

    if slots.is_empty() {
        push_weekdays(&mut slots, "06:00", "21:00");
        push_weekends(&mut slots, "08:00", "17:00");
    }

    slots
}

fn push_weekdays(slots: &mut Vec<TimeSlot>, start: &str, end: &str) {
    for day in ["monday", "tuesday", "wednesday", "thursday", "friday"] {
        slots.push(TimeSlot::new(day, start, end));
    }
}

fn push_weekends(slots: &mut Vec<TimeSlot>, start: &str, end: &str) {
    for day in ["saturday", "sunday"] {
        slots.push(TimeSlot::new(day, start, end));
    }
}

/// Percentage of the six canonical quiz questions answered (0-100)
fn calculate_completeness(answers: &QuizAnswers) -> u8 {
    let mut answered = 0u32;

    if answers.goals.as_ref().is_some_and(AnswerValue::is_answered) {
        answered += 1;
    }
    if answers.experience.as_deref().is_some_and(|v| !v.is_empty()) {
        answered += 1;
    }
    if answers
        .training_style
        .as_ref()
        .is_some_and(AnswerValue::is_answered)
    {
        answered += 1;
    }
    if answers.schedule.as_ref().is_some_and(AnswerValue::is_answered) {
        answered += 1;
    }
    if answers.budget.as_deref().is_some_and(|v| !v.is_empty()) {
        answered += 1;
    }
    if answers
        .personality
        .as_ref()
        .is_some_and(AnswerValue::is_answered)
    {
        answered += 1;
    }

    ((answered as f64 / TOTAL_QUIZ_QUESTIONS as f64) * 100.0).round() as u8
}
