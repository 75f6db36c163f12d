use crate::core::similarity::{
    budget_fit, experience_level_match, jaccard_similarity, schedule_overlap,
};
use crate::models::{
    BudgetRange, ExperienceLevel, FitnessGoal, PersonalityTrait, TimeSlot, TrainingStyle,
};

/// A single factor's normalized score plus its display rationale
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub score: f64,
    pub details: String,
}

fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Goal alignment between user goals and trainer specialties (0-1)
pub fn score_goal_alignment(
    user_goals: &[FitnessGoal],
    trainer_specialties: &[FitnessGoal],
) -> FactorScore {
    // An empty preference set is neutral, not a mismatch
    let score = if user_goals.is_empty() {
        1.0
    } else {
        jaccard_similarity(user_goals, trainer_specialties)
    };

    FactorScore {
        score,
        details: format!(
            "{}% alignment between your fitness goals and trainer specialties",
            percent(score)
        ),
    }
}

/// Training style compatibility (0-1)
pub fn score_style_compatibility(
    user_styles: &[TrainingStyle],
    trainer_styles: &[TrainingStyle],
) -> FactorScore {
    let score = if user_styles.is_empty() {
        1.0
    } else {
        jaccard_similarity(user_styles, trainer_styles)
    };

    FactorScore {
        score,
        details: format!("{}% match in preferred training approaches", percent(score)),
    }
}

/// Personality fit (0-1)
pub fn score_personality_fit(
    user_traits: &[PersonalityTrait],
    trainer_traits: &[PersonalityTrait],
) -> FactorScore {
    let score = if user_traits.is_empty() {
        1.0
    } else {
        jaccard_similarity(user_traits, trainer_traits)
    };

    FactorScore {
        score,
        details: format!("{}% personality compatibility", percent(score)),
    }
}

/// Schedule overlap between user and trainer availability (0-1)
pub fn score_schedule_match(
    user_availability: &[TimeSlot],
    trainer_availability: &[TimeSlot],
) -> FactorScore {
    let score = schedule_overlap(user_availability, trainer_availability);

    FactorScore {
        score,
        details: format!(
            "{}% of your availability matches trainer's schedule",
            percent(score)
        ),
    }
}

/// Tiered experience level match (0-1)
pub fn score_experience_level(
    user_level: ExperienceLevel,
    trainer_levels: &[ExperienceLevel],
) -> FactorScore {
    let score = experience_level_match(user_level, trainer_levels);

    let details = if trainer_levels.contains(&user_level) {
        "Trainer works with your experience level".to_string()
    } else {
        "Trainer can adapt to your experience level".to_string()
    };

    FactorScore { score, details }
}

/// Budget fit against the trainer's hourly rate (0-1)
pub fn score_budget_fit(user_budget: &BudgetRange, trainer_rate: f64) -> FactorScore {
    let score = budget_fit(user_budget, trainer_rate);

    let details = if trainer_rate <= user_budget.max as f64 {
        format!("Trainer's rate (${}/hr) is within your budget", trainer_rate)
    } else {
        let over_amount = trainer_rate - user_budget.max as f64;
        format!(
            "Trainer's rate (${}/hr) is ${} above your max budget",
            trainer_rate, over_amount
        )
    };

    FactorScore { score, details }
}

/// Hard budget constraint: fails only when the rate is more than 50% over
/// the user's max budget
pub fn passes_budget_constraint(user_budget: &BudgetRange, trainer_rate: f64) -> bool {
    let max = user_budget.max as f64;
    let over_budget_percent = (trainer_rate - max) / max;
    over_budget_percent <= 0.5
}

/// Compounding 10% penalty on the already-weighted total when the trainer does
/// not serve the user's level, on top of the 0.5 partial credit in the factor
/// itself
pub fn apply_experience_penalty(
    user_level: ExperienceLevel,
    trainer_levels: &[ExperienceLevel],
    current_score: f64,
) -> f64 {
    if trainer_levels.contains(&user_level) {
        current_score
    } else {
        current_score * 0.9
    }
}
