//! Decision policy constants

use serde::{Deserialize, Serialize};

/// Thresholds and windows for the heuristic opponent
///
/// Branch order (pattern, streak break, random play, frequency) is fixed;
/// only the numbers live here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyConfig {
    /// Rounds played uniformly at random before any analysis
    pub bootstrap_rounds: u32,
    /// Identical trailing moves needed for a repetition pattern
    pub repetition_window: usize,
    /// Trailing moves examined for a rotation pattern
    pub rotation_window: usize,

    /// Counter a detected pattern when the draw exceeds this
    pub pattern_threshold: f64,
    /// Human streak at which the opponent tries to break it
    pub streak_threshold: u32,
    /// Counter the current move when the draw exceeds this
    pub streak_break_threshold: f64,
    /// Play at random when the draw is below this
    pub random_play_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            bootstrap_rounds: 3,
            repetition_window: 3,
            rotation_window: 5,

            pattern_threshold: 0.4,
            streak_threshold: 2,
            streak_break_threshold: 0.5,
            random_play_threshold: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: PolicyConfig = serde_json::from_str(r#"{"patternThreshold": 0.9}"#).unwrap();
        assert_eq!(config.pattern_threshold, 0.9);
        assert_eq!(config.bootstrap_rounds, 3);
        assert_eq!(config.rotation_window, 5);
    }
}
