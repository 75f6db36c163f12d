use std::cmp::Ordering;

use crate::core::scoring::{
    apply_experience_penalty, passes_budget_constraint, score_budget_fit, score_experience_level,
    score_goal_alignment, score_personality_fit, score_schedule_match, score_style_compatibility,
};
use crate::models::{
    Factor, MatchBreakdown, MatchExplanation, MatchResult, MatchWeights, TopFactor, Trainer,
    UserProfile,
};

/// Match engine: scores and ranks trainers against a user profile
///
/// Each trainer is scored independently across six factors; the weighted
/// combination, constraint check and penalty adjustment produce the final
/// ranked list. The engine trusts its weight input - callers validate the
/// sum-to-1.0 invariant before handing weights in.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// Score every trainer against the profile using the matcher's weights
    pub fn match_trainers<'a>(
        &self,
        profile: &UserProfile,
        trainers: &'a [Trainer],
    ) -> Vec<MatchResult<'a>> {
        self.match_trainers_with_weights(profile, trainers, &self.weights)
    }

    /// Score every trainer with an explicit weight set
    ///
    /// Returns results sorted by overall score descending; exact ties keep
    /// input order (stable sort). An empty trainer list yields an empty vec.
    pub fn match_trainers_with_weights<'a>(
        &self,
        profile: &UserProfile,
        trainers: &'a [Trainer],
        weights: &MatchWeights,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = trainers
            .iter()
            .map(|trainer| score_trainer(profile, trainer, weights))
            .collect();

        sort_by_score(&mut results);
        results
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn score_trainer<'a>(
    profile: &UserProfile,
    trainer: &'a Trainer,
    weights: &MatchWeights,
) -> MatchResult<'a> {
    let goal = score_goal_alignment(&profile.goals, &trainer.specialties);
    let style = score_style_compatibility(&profile.preferred_styles, &trainer.training_styles);
    let personality = score_personality_fit(&profile.personality, &trainer.personality);
    let schedule = score_schedule_match(&profile.availability, &trainer.availability);
    let experience = score_experience_level(profile.experience_level, &trainer.experience_levels);
    let budget = score_budget_fit(&profile.budget_range, trainer.hourly_rate);

    // Raw pre-weight scores, kept unmodified for display
    let breakdown = MatchBreakdown {
        goal_alignment: goal.score,
        style_compatibility: style.score,
        personality_fit: personality.score,
        schedule_match: schedule.score,
        experience_level: experience.score,
        budget_fit: budget.score,
    };

    let mut overall_score = breakdown.weighted_sum(weights);

    let passes_constraints =
        passes_budget_constraint(&profile.budget_range, trainer.hourly_rate);

    // Applied after weighting; compounds with the 0.5 partial credit already
    // in the experience factor
    overall_score = apply_experience_penalty(
        profile.experience_level,
        &trainer.experience_levels,
        overall_score,
    );

    let explanation = build_explanation(&breakdown, overall_score, passes_constraints, trainer);

    MatchResult {
        trainer,
        overall_score,
        confidence: profile.completeness,
        breakdown,
        explanation,
        passes_constraints,
    }
}

/// Recompute overall scores for an existing result set under a new weight set
///
/// Used for interactive re-weighting: the six scorers are never re-run, the
/// new overall is the dot product of each stored breakdown with the
/// renormalized weights. The experience-mismatch penalty and the budget
/// constraint flag are not reapplied on this path.
pub fn rescore_with_weights<'a>(
    results: &[MatchResult<'a>],
    weights: &MatchWeights,
) -> Vec<MatchResult<'a>> {
    let normalized = weights.normalized();

    let mut rescored: Vec<MatchResult<'a>> = results
        .iter()
        .map(|result| {
            let mut fresh = result.clone();
            fresh.overall_score = result.breakdown.weighted_sum(&normalized);
            fresh
        })
        .collect();

    sort_by_score(&mut rescored);
    rescored
}

fn sort_by_score(results: &mut [MatchResult<'_>]) {
    results.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
    });
}

fn build_explanation(
    breakdown: &MatchBreakdown,
    overall_score: f64,
    passes_constraints: bool,
    trainer: &Trainer,
) -> MatchExplanation {
    let mut factors: Vec<(Factor, f64)> = Factor::ALL
        .iter()
        .map(|factor| (*factor, breakdown.get(*factor)))
        .collect();
    factors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let top_factors = factors
        .iter()
        .take(3)
        .map(|(factor, score)| TopFactor {
            name: factor.display_name().to_string(),
            score: *score,
        })
        .collect();

    let summary = if !passes_constraints {
        "This trainer exceeds your budget constraints by more than 50%.".to_string()
    } else if overall_score >= 0.80 {
        "Excellent match! This trainer aligns well with your goals, style, and schedule."
            .to_string()
    } else if overall_score >= 0.60 {
        "Good match. This trainer meets most of your requirements and preferences.".to_string()
    } else if overall_score >= 0.40 {
        "Moderate match. Consider this trainer if you're flexible on some preferences.".to_string()
    } else {
        "Lower match. This trainer may not align closely with your stated preferences.".to_string()
    };

    let mut strengths = Vec::new();
    for (factor, score) in &factors {
        if *score >= 0.8 {
            strengths.push(match factor {
                Factor::GoalAlignment => format!(
                    "{}'s specialties align strongly with your fitness goals",
                    trainer.name
                ),
                Factor::StyleCompatibility => {
                    "Training style is an excellent match for your preferences".to_string()
                }
                Factor::PersonalityFit => {
                    "Personality traits suggest great working chemistry".to_string()
                }
                Factor::ScheduleMatch => {
                    "Strong schedule overlap for convenient booking".to_string()
                }
                Factor::ExperienceLevel => {
                    "Experience level matches your training background".to_string()
                }
                Factor::BudgetFit => "Pricing fits comfortably within your budget".to_string(),
            });
        }
    }

    let mut considerations = Vec::new();
    for (factor, score) in &factors {
        if *score < 0.5 {
            match factor {
                Factor::BudgetFit => considerations
                    .push("This trainer's rates are at the higher end of your budget".to_string()),
                Factor::ScheduleMatch => considerations.push(
                    "Limited availability overlap - may need flexible scheduling".to_string(),
                ),
                _ => {}
            }
        }
    }

    MatchExplanation {
        summary,
        top_factors,
        strengths,
        considerations: if considerations.is_empty() {
            None
        } else {
            Some(considerations)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetRange, ExperienceLevel, FitnessGoal, PersonalityTrait, TimeSlot, TrainingStyle,
    };

    fn create_trainer(id: &str, rate: f64) -> Trainer {
        Trainer {
            id: id.to_string(),
            name: format!("Trainer {}", id),
            tagline: String::new(),
            bio: String::new(),
            specialties: vec![FitnessGoal::MuscleGain, FitnessGoal::GeneralFitness],
            training_styles: vec![TrainingStyle::HighIntensity, TrainingStyle::StrengthFocused],
            personality: vec![PersonalityTrait::Motivating],
            experience_levels: vec![
                ExperienceLevel::Beginner,
                ExperienceLevel::Intermediate,
                ExperienceLevel::Advanced,
            ],
            hourly_rate: rate,
            availability: vec![TimeSlot::new("monday", "06:00", "12:00")],
            timezone: "America/New_York".to_string(),
            rating: 4.8,
            years_experience: 7,
            verified: true,
        }
    }

    fn create_profile() -> UserProfile {
        UserProfile {
            goals: vec![FitnessGoal::MuscleGain],
            preferred_styles: vec![TrainingStyle::HighIntensity],
            experience_level: ExperienceLevel::Intermediate,
            personality: vec![],
            availability: vec![TimeSlot::new("monday", "06:00", "09:00")],
            timezone: "America/New_York".to_string(),
            budget_range: BudgetRange { min: 60, max: 100 },
            virtual_only: false,
            in_person_only: false,
            completeness: 90,
        }
    }

    #[test]
    fn test_match_trainers_basic() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();
        let trainers = vec![create_trainer("1", 80.0)];

        let results = matcher.match_trainers(&profile, &trainers);

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.breakdown.goal_alignment, 0.5);
        assert_eq!(result.breakdown.budget_fit, 1.0);
        assert_eq!(result.breakdown.experience_level, 1.0);
        assert_eq!(result.confidence, 90);
        assert!(result.passes_constraints);
    }

    #[test]
    fn test_empty_trainer_list() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();

        let results = matcher.match_trainers(&profile, &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_sorted_descending() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();

        // Second trainer is well over budget, first is within
        let trainers = vec![create_trainer("expensive", 140.0), create_trainer("affordable", 80.0)];

        let results = matcher.match_trainers(&profile, &trainers);

        assert_eq!(results[0].trainer.id, "affordable");
        assert!(results[0].overall_score >= results[1].overall_score);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();

        let trainers = vec![create_trainer("first", 80.0), create_trainer("second", 80.0)];

        let results = matcher.match_trainers(&profile, &trainers);

        assert_eq!(results[0].overall_score, results[1].overall_score);
        assert_eq!(results[0].trainer.id, "first");
        assert_eq!(results[1].trainer.id, "second");
    }

    #[test]
    fn test_experience_mismatch_penalty_applied() {
        let matcher = Matcher::with_default_weights();
        let mut profile = create_profile();
        profile.experience_level = ExperienceLevel::Athlete;

        let trainers = vec![create_trainer("1", 80.0)];
        let results = matcher.match_trainers(&profile, &trainers);

        let result = &results[0];
        // Factor itself carries the 0.5 partial credit
        assert_eq!(result.breakdown.experience_level, 0.5);
        // The weighted sum then takes a further 10% cut
        let expected = result.breakdown.weighted_sum(matcher.weights()) * 0.9;
        assert!((result.overall_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_constraint_fails_far_over_budget() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();

        // 160 > 100 * 1.5
        let trainers = vec![create_trainer("1", 160.0)];
        let results = matcher.match_trainers(&profile, &trainers);

        assert!(!results[0].passes_constraints);
        assert!(results[0]
            .explanation
            .summary
            .contains("exceeds your budget constraints"));
    }

    #[test]
    fn test_explanation_top_factors_and_strengths() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();
        let trainers = vec![create_trainer("1", 80.0)];

        let results = matcher.match_trainers(&profile, &trainers);
        let explanation = &results[0].explanation;

        assert_eq!(explanation.top_factors.len(), 3);
        // Budget, experience, personality and schedule all score 1.0
        assert_eq!(explanation.top_factors[0].score, 1.0);
        assert!(explanation
            .strengths
            .iter()
            .any(|s| s.contains("Pricing fits comfortably")));
        assert!(explanation.considerations.is_none());
    }

    #[test]
    fn test_considerations_for_weak_budget_and_schedule() {
        let matcher = Matcher::with_default_weights();
        let mut profile = create_profile();
        profile.availability = vec![TimeSlot::new("sunday", "06:00", "08:00")];

        // Past the 50% cliff the budget factor drops to 0.0, which is the
        // only way it falls under the consideration threshold
        let trainers = vec![create_trainer("1", 160.0)];
        let results = matcher.match_trainers(&profile, &trainers);

        let considerations = results[0].explanation.considerations.as_ref().unwrap();
        assert_eq!(considerations.len(), 2);
    }

    #[test]
    fn test_rescore_uses_breakdown_dot_product() {
        let matcher = Matcher::with_default_weights();
        let profile = create_profile();
        let trainers = vec![create_trainer("1", 80.0), create_trainer("2", 120.0)];

        let results = matcher.match_trainers(&profile, &trainers);

        let new_weights = MatchWeights {
            budget_fit: 0.5,
            ..MatchWeights::default()
        };
        let rescored = rescore_with_weights(&results, &new_weights);

        let normalized = new_weights.normalized();
        for fresh in &rescored {
            let expected = fresh.breakdown.weighted_sum(&normalized);
            assert!((fresh.overall_score - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rescore_does_not_reapply_penalty() {
        // Known asymmetry of the interactive re-weight path, preserved on
        // purpose: a mismatched trainer loses the 0.9 multiplier when
        // rescored from its breakdown.
        let matcher = Matcher::with_default_weights();
        let mut profile = create_profile();
        profile.experience_level = ExperienceLevel::Athlete;

        let trainers = vec![create_trainer("1", 80.0)];
        let results = matcher.match_trainers(&profile, &trainers);

        let rescored = rescore_with_weights(&results, matcher.weights());

        let unpenalized = results[0].breakdown.weighted_sum(matcher.weights());
        assert!((rescored[0].overall_score - unpenalized).abs() < 1e-9);
        assert!(rescored[0].overall_score > results[0].overall_score);
    }
}
