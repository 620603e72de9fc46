//! Guess-the-number game: a secret integer in [1, 100] with higher/lower
//! feedback. Once found, the secret is invalidated so further guesses are
//! rejected until a new game starts.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    TooLow,
    TooHigh,
    Correct { guesses: u32 },
    AlreadySolved,
}

pub struct NumberGuesser {
    secret: Option<i32>,
    guesses: u32,
}

impl NumberGuesser {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        NumberGuesser {
            secret: Some(rng.random_range(1..=100)),
            guesses: 0,
        }
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn is_solved(&self) -> bool {
        self.secret.is_none()
    }

    /// Fresh secret and a reset guess counter.
    pub fn new_game<R: Rng>(&mut self, rng: &mut R) {
        self.secret = Some(rng.random_range(1..=100));
        self.guesses = 0;
    }

    pub fn submit(&mut self, guess: i32) -> GuessFeedback {
        let Some(secret) = self.secret else {
            return GuessFeedback::AlreadySolved;
        };
        self.guesses += 1;
        if guess < secret {
            GuessFeedback::TooLow
        } else if guess > secret {
            GuessFeedback::TooHigh
        } else {
            self.secret = None;
            GuessFeedback::Correct {
                guesses: self.guesses,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // binary search always lands on the secret within 7 guesses
    fn solve(guesser: &mut NumberGuesser) -> u32 {
        let (mut lo, mut hi) = (1, 100);
        loop {
            let mid = (lo + hi) / 2;
            match guesser.submit(mid) {
                GuessFeedback::TooLow => lo = mid + 1,
                GuessFeedback::TooHigh => hi = mid - 1,
                GuessFeedback::Correct { guesses } => return guesses,
                GuessFeedback::AlreadySolved => panic!("solved too early"),
            }
        }
    }

    #[test]
    fn test_feedback_converges_on_the_secret() {
        let mut rng = StdRng::seed_from_u64(20);
        let mut guesser = NumberGuesser::new(&mut rng);
        let guesses = solve(&mut guesser);
        assert!(guesses <= 7);
        assert!(guesser.is_solved());
    }

    #[test]
    fn test_guesses_after_solving_are_rejected() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut guesser = NumberGuesser::new(&mut rng);
        solve(&mut guesser);
        assert_eq!(guesser.submit(50), GuessFeedback::AlreadySolved);
    }

    #[test]
    fn test_new_game_resets_secret_and_counter() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut guesser = NumberGuesser::new(&mut rng);
        solve(&mut guesser);
        guesser.new_game(&mut rng);
        assert!(!guesser.is_solved());
        assert_eq!(guesser.guesses(), 0);
        assert_ne!(guesser.submit(0), GuessFeedback::AlreadySolved);
    }

    #[test]
    fn test_secret_is_within_bounds() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let mut guesser = NumberGuesser::new(&mut rng);
            assert_eq!(guesser.submit(0), GuessFeedback::TooLow);
            assert_eq!(guesser.submit(101), GuessFeedback::TooHigh);
        }
    }
}
