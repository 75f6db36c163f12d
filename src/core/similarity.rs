use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{BudgetRange, ExperienceLevel, TimeSlot};

/// Jaccard index between two tag collections (0-1)
///
/// Both empty means no preference was stated on either side and scores as a
/// neutral 1.0; exactly one empty side scores 0.0.
pub fn jaccard_similarity<T>(first: &[T], second: &[T]) -> f64
where
    T: Eq + Hash,
{
    if first.is_empty() && second.is_empty() {
        return 1.0;
    }
    if first.is_empty() || second.is_empty() {
        return 0.0;
    }

    let set1: HashSet<&T> = first.iter().collect();
    let set2: HashSet<&T> = second.iter().collect();

    let intersection = set1.intersection(&set2).count();
    let union = set1.union(&set2).count();

    intersection as f64 / union as f64
}

/// Convert an HH:MM time string to minutes since midnight
///
/// Returns None for anything that does not parse; callers treat unparsable
/// windows as non-overlapping rather than failing the run.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Half-open overlap test between two same-day time windows
#[inline]
pub fn windows_overlap(first: &TimeSlot, second: &TimeSlot) -> bool {
    if first.day != second.day {
        return false;
    }

    match (
        time_to_minutes(&first.start_time),
        time_to_minutes(&first.end_time),
        time_to_minutes(&second.start_time),
        time_to_minutes(&second.end_time),
    ) {
        (Some(s1), Some(e1), Some(s2), Some(e2)) => s1 < e2 && e1 > s2,
        _ => false,
    }
}

/// Fraction of the user's availability covered by trainer slots (0-1)
///
/// Counts (user slot, trainer slot) pairs that share a day and overlap in
/// time, normalized by the user slot count. A user slot overlapped by several
/// trainer slots counts once per pair; the ratio is capped at 1.0 so that
/// pathological inputs cannot overshoot.
pub fn schedule_overlap(user_slots: &[TimeSlot], trainer_slots: &[TimeSlot]) -> f64 {
    if user_slots.is_empty() || trainer_slots.is_empty() {
        return 0.0;
    }

    let mut overlap_count = 0usize;
    for user_slot in user_slots {
        for trainer_slot in trainer_slots {
            if windows_overlap(user_slot, trainer_slot) {
                overlap_count += 1;
            }
        }
    }

    (overlap_count as f64 / user_slots.len() as f64).min(1.0)
}

/// Tiered experience match: 1.0 when the trainer serves the user's level,
/// otherwise 0.5 partial credit for a trainer who can still adapt
#[inline]
pub fn experience_level_match(user_level: ExperienceLevel, trainer_levels: &[ExperienceLevel]) -> f64 {
    if trainer_levels.contains(&user_level) {
        1.0
    } else {
        0.5
    }
}

/// Budget range fit against a trainer's hourly rate (0-1)
///
/// Rates inside the range or below it score 1.0 (cheaper is never penalized).
/// Over-budget rates decay as `1.0 - 0.5 * over_percent` up to 50% over, and
/// score 0.0 beyond that. The drop past 50% is a cliff, not a continuation of
/// the slope.
pub fn budget_fit(budget: &BudgetRange, rate: f64) -> f64 {
    let min = budget.min as f64;
    let max = budget.max as f64;

    if rate >= min && rate <= max {
        return 1.0;
    }
    if rate < min {
        return 1.0;
    }

    let over_percent = (rate - max) / max;
    if over_percent <= 0.5 {
        1.0 - over_percent * 0.5
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessGoal;

    #[test]
    fn test_jaccard_identity() {
        let tags = vec![FitnessGoal::MuscleGain, FitnessGoal::Endurance];
        assert_eq!(jaccard_similarity(&tags, &tags), 1.0);
    }

    #[test]
    fn test_jaccard_symmetry() {
        let a = vec![FitnessGoal::MuscleGain, FitnessGoal::Endurance];
        let b = vec![FitnessGoal::Endurance, FitnessGoal::WeightLoss];
        assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
    }

    #[test]
    fn test_jaccard_empty_cases() {
        let empty: Vec<FitnessGoal> = vec![];
        let tags = vec![FitnessGoal::Flexibility];
        assert_eq!(jaccard_similarity(&empty, &empty), 1.0);
        assert_eq!(jaccard_similarity(&empty, &tags), 0.0);
        assert_eq!(jaccard_similarity(&tags, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let user = vec![FitnessGoal::MuscleGain];
        let trainer = vec![FitnessGoal::MuscleGain, FitnessGoal::GeneralFitness];
        assert_eq!(jaccard_similarity(&user, &trainer), 0.5);
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("06:00"), Some(360));
        assert_eq!(time_to_minutes("23:59"), Some(1439));
        assert_eq!(time_to_minutes("not-a-time"), None);
        assert_eq!(time_to_minutes("12"), None);
    }

    #[test]
    fn test_windows_overlap_half_open() {
        let morning = TimeSlot::new("monday", "06:00", "09:00");
        let overlapping = TimeSlot::new("monday", "08:00", "12:00");
        let adjacent = TimeSlot::new("monday", "09:00", "12:00");
        let other_day = TimeSlot::new("tuesday", "06:00", "09:00");

        assert!(windows_overlap(&morning, &overlapping));
        // Touching endpoints do not overlap
        assert!(!windows_overlap(&morning, &adjacent));
        assert!(!windows_overlap(&morning, &other_day));
    }

    #[test]
    fn test_schedule_overlap_full_coverage() {
        let user = vec![TimeSlot::new("monday", "06:00", "09:00")];
        let trainer = vec![TimeSlot::new("monday", "06:00", "12:00")];
        assert_eq!(schedule_overlap(&user, &trainer), 1.0);
    }

    #[test]
    fn test_schedule_overlap_empty_lists() {
        let slots = vec![TimeSlot::new("monday", "06:00", "09:00")];
        assert_eq!(schedule_overlap(&[], &slots), 0.0);
        assert_eq!(schedule_overlap(&slots, &[]), 0.0);
    }

    #[test]
    fn test_schedule_overlap_capped_at_one() {
        // One user slot overlapped by three trainer slots would otherwise
        // score 3.0
        let user = vec![TimeSlot::new("monday", "06:00", "12:00")];
        let trainer = vec![
            TimeSlot::new("monday", "06:00", "08:00"),
            TimeSlot::new("monday", "08:00", "10:00"),
            TimeSlot::new("monday", "10:00", "12:00"),
        ];
        assert_eq!(schedule_overlap(&user, &trainer), 1.0);
    }

    #[test]
    fn test_experience_level_match() {
        let levels = vec![ExperienceLevel::Beginner, ExperienceLevel::Intermediate];
        assert_eq!(experience_level_match(ExperienceLevel::Beginner, &levels), 1.0);
        assert_eq!(experience_level_match(ExperienceLevel::Athlete, &levels), 0.5);
    }

    #[test]
    fn test_budget_fit_boundaries() {
        let budget = BudgetRange { min: 60, max: 100 };

        assert_eq!(budget_fit(&budget, 60.0), 1.0);
        assert_eq!(budget_fit(&budget, 100.0), 1.0);
        // Cheaper than min is never penalized
        assert_eq!(budget_fit(&budget, 40.0), 1.0);
        // 25% over budget
        assert!((budget_fit(&budget, 125.0) - 0.875).abs() < 1e-9);
        // Exactly 50% over budget is inclusive
        assert!((budget_fit(&budget, 150.0) - 0.75).abs() < 1e-9);
        // Just past 50% over the score cliffs to zero
        assert_eq!(budget_fit(&budget, 151.0), 0.0);
    }
}
