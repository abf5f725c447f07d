//! Random source capability
//!
//! The decision engine never touches a global generator; every draw comes
//! through this trait so tests can script exact branch selection.

use crate::domain::entities::Move;

/// Source of uniform draws in [0, 1)
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Uniform move from a single draw: `ALL[floor(3 * draw)]`
pub fn random_move(rng: &mut dyn RandomSource) -> Move {
    let draw = rng.next_f64();
    let index = (draw * 3.0) as usize;
    Move::from_index(index.min(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_random_move_buckets() {
        assert_eq!(random_move(&mut Fixed(0.0)), Move::Rock);
        assert_eq!(random_move(&mut Fixed(0.33)), Move::Rock);
        assert_eq!(random_move(&mut Fixed(0.34)), Move::Paper);
        assert_eq!(random_move(&mut Fixed(0.66)), Move::Paper);
        assert_eq!(random_move(&mut Fixed(0.67)), Move::Scissors);
        assert_eq!(random_move(&mut Fixed(0.999_999)), Move::Scissors);
    }

    #[test]
    fn test_out_of_range_draws_stay_total() {
        assert_eq!(random_move(&mut Fixed(1.0)), Move::Scissors);
        assert_eq!(random_move(&mut Fixed(-0.5)), Move::Rock);
    }
}
