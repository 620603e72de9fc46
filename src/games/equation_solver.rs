//! Linear-equation game: solve `ax + b = c` for x, with integer
//! coefficients in [1, 10]. The solution (c - b) / a may be non-integer.

use super::ANSWER_TOLERANCE;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveOutcome {
    Correct,
    Incorrect { correct: f64 },
}

pub struct EquationSolver {
    a: i64,
    b: i64,
    c: i64,
    score: u32,
    attempts: u32,
}

impl EquationSolver {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut solver = EquationSolver {
            a: 1,
            b: 1,
            c: 1,
            score: 0,
            attempts: 0,
        };
        solver.new_problem(rng);
        solver
    }

    pub fn coefficients(&self) -> (i64, i64, i64) {
        (self.a, self.b, self.c)
    }

    pub fn solution(&self) -> f64 {
        (self.c - self.b) as f64 / self.a as f64
    }

    pub fn prompt(&self) -> String {
        format!("{}x + {} = {}", self.a, self.b, self.c)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}/{}", self.score, self.attempts)
    }

    /// New random coefficients; counters carry over.
    pub fn new_problem<R: Rng>(&mut self, rng: &mut R) {
        self.a = rng.random_range(1..=10);
        self.b = rng.random_range(1..=10);
        self.c = rng.random_range(1..=10);
    }

    pub fn submit(&mut self, answer: f64) -> SolveOutcome {
        self.attempts += 1;
        let correct = self.solution();
        if (answer - correct).abs() < ANSWER_TOLERANCE {
            self.score += 1;
            SolveOutcome::Correct
        } else {
            SolveOutcome::Incorrect { correct }
        }
    }
}
