//! MoveAnalyzer - pattern and frequency analysis over a human's move history
//!
//! All functions take the history as a slice, oldest move first.

use serde::Serialize;
use smallvec::SmallVec;

use crate::domain::entities::Move;
use crate::domain::value_objects::PolicyConfig;

/// Shortest window a rotation can be read from
pub const MIN_ROTATION_LEN: usize = 3;

/// A predicted next move and how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "predicted", rename_all = "lowercase")]
pub enum DetectedPattern {
    /// The last moves were all the same; expect it again
    Repetition(Move),
    /// The last moves walked the cycle; expect the next step
    Rotation(Move),
}

impl DetectedPattern {
    pub fn predicted(self) -> Move {
        match self {
            DetectedPattern::Repetition(mv) | DetectedPattern::Rotation(mv) => mv,
        }
    }
}

/// The repeated move if the last `window` moves are identical
pub fn detect_repetition(history: &[Move], window: usize) -> Option<Move> {
    if window == 0 || history.len() < window {
        return None;
    }

    let recent = &history[history.len() - window..];
    let first = recent[0];
    recent.iter().all(|&mv| mv == first).then_some(first)
}

/// Next move in the cycle if the last (up to) `window` moves form a perfect
/// forward rotation
pub fn detect_rotation(history: &[Move], window: usize) -> Option<Move> {
    let start = history.len().saturating_sub(window);
    let recent = &history[start..];
    if recent.len() < MIN_ROTATION_LEN {
        return None;
    }

    let follows_cycle = recent
        .windows(2)
        .all(|pair| pair[0].next_in_cycle() == pair[1]);

    if !follows_cycle {
        return None;
    }

    recent.last().map(|last| last.next_in_cycle())
}

/// Repetition first; rotation only when no repetition is found
pub fn detect_pattern(history: &[Move], config: &PolicyConfig) -> Option<DetectedPattern> {
    if let Some(mv) = detect_repetition(history, config.repetition_window) {
        return Some(DetectedPattern::Repetition(mv));
    }
    detect_rotation(history, config.rotation_window).map(DetectedPattern::Rotation)
}

/// Most common move across the whole history
///
/// Ties go to the move whose first occurrence comes earliest.
pub fn most_frequent(history: &[Move]) -> Option<Move> {
    let mut counts = [0usize; 3];
    let mut first_seen: SmallVec<[Move; 3]> = SmallVec::new();

    for &mv in history {
        if counts[mv.index()] == 0 {
            first_seen.push(mv);
        }
        counts[mv.index()] += 1;
    }

    let mut best: Option<(Move, usize)> = None;
    for mv in first_seen {
        let count = counts[mv.index()];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((mv, count));
        }
    }

    best.map(|(mv, _)| mv)
}
