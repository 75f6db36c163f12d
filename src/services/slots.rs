use serde::{Deserialize, Serialize};

use crate::core::similarity::time_to_minutes;
use crate::models::TimeSlot;

/// Interval between consecutive bookable start times
pub const SLOT_STRIDE_MINUTES: u32 = 30;

/// A discrete bookable window offered to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookableSlot {
    pub start_time: String,
    pub end_time: String,
}

/// Enumerate bookable slots for one day of a trainer's availability
///
/// Walks each availability window for the requested day in 30-minute strides
/// and emits every start time whose full session still fits inside the
/// window. Windows with unparsable times are skipped.
pub fn generate_booking_slots(
    availability: &[TimeSlot],
    day: &str,
    duration_minutes: u32,
) -> Vec<BookableSlot> {
    let mut slots = Vec::new();

    for window in availability.iter().filter(|slot| slot.day == day) {
        let (Some(start), Some(end)) = (
            time_to_minutes(&window.start_time),
            time_to_minutes(&window.end_time),
        ) else {
            continue;
        };

        let mut current = start;
        while current + duration_minutes <= end {
            slots.push(BookableSlot {
                start_time: minutes_to_time(current),
                end_time: minutes_to_time(current + duration_minutes),
            });
            current += SLOT_STRIDE_MINUTES;
        }
    }

    slots
}

fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
