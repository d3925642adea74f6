//! Slot scoring and session placement.
//!
//! Scores every qualifying free slot with a time-of-day preference
//! table plus a small earlier-is-better penalty, then commits the
//! session to the best-scoring slot, shrinking or removing it. The
//! allocator owns no state: the caller passes the live slot list.

use serde::{Deserialize, Serialize};

use crate::model::{Complexity, Priority};
use crate::time::TimeInterval;

/// Mandatory gap after every scheduled session, in minutes.
pub const SLOT_BUFFER_MINUTES: i64 = 10;

/// Time-of-day band used by the preference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBand {
    /// 06:00-12:00, high energy
    Morning,
    /// 12:00-17:00, medium energy
    Afternoon,
    /// 17:00-22:00, low energy
    Evening,
    /// Everything else, no preference
    Night,
}

impl TimeBand {
    /// Band for a given hour of day.
    pub fn from_hour(hour: i64) -> Self {
        match hour {
            6..=11 => TimeBand::Morning,
            12..=16 => TimeBand::Afternoon,
            17..=21 => TimeBand::Evening,
            _ => TimeBand::Night,
        }
    }

    /// Preference delta for placing a task of the given complexity and
    /// priority in this band. Demanding work scores high in the
    /// morning, light work in the evening.
    pub fn score_delta(&self, complexity: Complexity, priority: Priority) -> f64 {
        match self {
            TimeBand::Morning => {
                if complexity == Complexity::High || priority == Priority::Urgent {
                    10.0
                } else if complexity == Complexity::Low {
                    -5.0
                } else {
                    0.0
                }
            }
            TimeBand::Afternoon => {
                if complexity == Complexity::Medium {
                    5.0
                } else {
                    0.0
                }
            }
            TimeBand::Evening => {
                if complexity == Complexity::Low {
                    10.0
                } else if complexity == Complexity::High {
                    -5.0
                } else {
                    0.0
                }
            }
            TimeBand::Night => 0.0,
        }
    }
}

/// A committed placement within one free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the chosen slot at evaluation time
    pub slot_index: usize,
    pub start: i64,
    pub end: i64,
}

/// Score a free slot for a session of the given complexity/priority.
///
/// The band delta dominates; the `start / 1440 * 2` term only breaks
/// ties between equally-preferred bands in favor of earlier slots.
pub fn score_slot(slot: &TimeInterval, complexity: Complexity, priority: Priority) -> f64 {
    let band = TimeBand::from_hour(slot.start / 60);
    band.score_delta(complexity, priority) - (slot.start as f64 / 1440.0) * 2.0
}

/// Place a session into the best-scoring free slot.
///
/// A slot qualifies only if it holds the session plus the 10-minute
/// buffer. The strictly highest score wins; the first-seen slot wins
/// ties. On placement the chosen slot's start advances past the buffer
/// and the slot is dropped once nothing remains. Returns `None` when
/// no slot qualifies, leaving the slot list untouched.
pub fn place_session(
    duration: i64,
    complexity: Complexity,
    priority: Priority,
    free_slots: &mut Vec<TimeInterval>,
) -> Option<Placement> {
    let mut best: Option<(usize, f64)> = None;

    for (index, slot) in free_slots.iter().enumerate() {
        if !slot.can_fit(duration + SLOT_BUFFER_MINUTES) {
            continue;
        }

        let score = score_slot(slot, complexity, priority);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (slot_index, _) = best?;
    let slot = free_slots[slot_index];

    let start = slot.start;
    let end = start + duration;

    let shrunk_start = end + SLOT_BUFFER_MINUTES;
    if shrunk_start < slot.end {
        free_slots[slot_index].start = shrunk_start;
    } else {
        free_slots.remove(slot_index);
    }

    Some(Placement {
        slot_index,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_from_hour() {
        assert_eq!(TimeBand::from_hour(6), TimeBand::Morning);
        assert_eq!(TimeBand::from_hour(11), TimeBand::Morning);
        assert_eq!(TimeBand::from_hour(12), TimeBand::Afternoon);
        assert_eq!(TimeBand::from_hour(16), TimeBand::Afternoon);
        assert_eq!(TimeBand::from_hour(17), TimeBand::Evening);
        assert_eq!(TimeBand::from_hour(21), TimeBand::Evening);
        assert_eq!(TimeBand::from_hour(22), TimeBand::Night);
        assert_eq!(TimeBand::from_hour(2), TimeBand::Night);
    }

    #[test]
    fn test_preference_table() {
        use Complexity as C;
        use Priority as P;

        assert_eq!(TimeBand::Morning.score_delta(C::High, P::Medium), 10.0);
        assert_eq!(TimeBand::Morning.score_delta(C::Medium, P::Urgent), 10.0);
        assert_eq!(TimeBand::Morning.score_delta(C::Low, P::Medium), -5.0);
        assert_eq!(TimeBand::Morning.score_delta(C::Medium, P::Medium), 0.0);

        assert_eq!(TimeBand::Afternoon.score_delta(C::Medium, P::Medium), 5.0);
        assert_eq!(TimeBand::Afternoon.score_delta(C::High, P::Medium), 0.0);

        assert_eq!(TimeBand::Evening.score_delta(C::Low, P::Medium), 10.0);
        assert_eq!(TimeBand::Evening.score_delta(C::High, P::Medium), -5.0);
        assert_eq!(TimeBand::Evening.score_delta(C::Medium, P::Medium), 0.0);

        assert_eq!(TimeBand::Night.score_delta(C::High, P::Urgent), 0.0);
    }

    #[test]
    fn test_buffer_eligibility() {
        // 40-minute slot cannot hold a 35-minute session plus buffer
        let mut slots = vec![TimeInterval::new(600, 640)];
        assert!(place_session(35, Complexity::Medium, Priority::Medium, &mut slots).is_none());
        assert_eq!(slots, vec![TimeInterval::new(600, 640)]);

        // A 45-minute slot can
        let mut slots = vec![TimeInterval::new(600, 645)];
        let placement =
            place_session(35, Complexity::Medium, Priority::Medium, &mut slots).unwrap();
        assert_eq!(placement.start, 600);
        assert_eq!(placement.end, 635);
    }

    #[test]
    fn test_high_complexity_prefers_morning() {
        // Morning (08:00) and evening (18:00) slots both fit
        let mut slots = vec![
            TimeInterval::new(1080, 1200), // 18:00-20:00
            TimeInterval::new(480, 600),   // 08:00-10:00
        ];
        let placement =
            place_session(60, Complexity::High, Priority::Medium, &mut slots).unwrap();
        assert_eq!(placement.start, 480);
    }

    #[test]
    fn test_low_complexity_prefers_evening() {
        let mut slots = vec![
            TimeInterval::new(480, 600),   // 08:00-10:00
            TimeInterval::new(1080, 1200), // 18:00-20:00
        ];
        let placement = place_session(60, Complexity::Low, Priority::Medium, &mut slots).unwrap();
        assert_eq!(placement.start, 1080);
    }

    #[test]
    fn test_recency_penalty_breaks_ties() {
        // Two morning slots, same band delta: the earlier one wins
        let mut slots = vec![
            TimeInterval::new(600, 720), // 10:00-12:00
            TimeInterval::new(480, 600), // 08:00-10:00
        ];
        let placement =
            place_session(60, Complexity::High, Priority::Medium, &mut slots).unwrap();
        assert_eq!(placement.start, 480);
    }

    #[test]
    fn test_slot_shrinks_after_placement() {
        let mut slots = vec![TimeInterval::new(480, 720)];
        let placement =
            place_session(60, Complexity::Medium, Priority::Medium, &mut slots).unwrap();

        assert_eq!(placement.end, 540);
        // Slot start advances past session end plus buffer
        assert_eq!(slots, vec![TimeInterval::new(550, 720)]);
    }

    #[test]
    fn test_slot_removed_when_exhausted() {
        let mut slots = vec![TimeInterval::new(480, 550)];
        let placement =
            place_session(60, Complexity::Medium, Priority::Medium, &mut slots).unwrap();

        assert_eq!(placement.end, 540);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_untouched_slots_keep_relative_order() {
        let mut slots = vec![
            TimeInterval::new(480, 545),   // exactly fits 55 + buffer
            TimeInterval::new(700, 760),
            TimeInterval::new(1080, 1140),
        ];
        let placement =
            place_session(55, Complexity::High, Priority::Medium, &mut slots).unwrap();

        assert_eq!(placement.slot_index, 0);
        assert_eq!(
            slots,
            vec![TimeInterval::new(700, 760), TimeInterval::new(1080, 1140)]
        );
    }

    #[test]
    fn test_placement_is_deterministic() {
        let slots = vec![
            TimeInterval::new(480, 600),
            TimeInterval::new(780, 900),
            TimeInterval::new(1080, 1200),
        ];

        let mut first = slots.clone();
        let mut second = slots.clone();
        let a = place_session(45, Complexity::Medium, Priority::High, &mut first);
        let b = place_session(45, Complexity::Medium, Priority::High, &mut second);

        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}
