//! Arithmetic quiz: random one-operator questions with counters for score
//! and attempts. Subtraction never goes negative and division is generated
//! backwards from an integer quotient so the correct answer is always exact.

use super::ANSWER_TOLERANCE;
use rand::Rng;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum QuizOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Subtract,
    #[strum(serialize = "*")]
    Multiply,
    #[strum(serialize = "/")]
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizProblem {
    pub num1: i64,
    pub num2: i64,
    pub op: QuizOp,
    pub answer: f64,
}

impl QuizProblem {
    pub fn prompt(&self) -> String {
        format!("What is {} {} {}?", self.num1, self.op, self.num2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizOutcome {
    Correct,
    Incorrect { correct: f64 },
}

pub struct MathQuiz {
    score: u32,
    attempts: u32,
    problem: QuizProblem,
}

fn generate_problem<R: Rng>(rng: &mut R) -> QuizProblem {
    match rng.random_range(0..4) {
        0 => {
            let num1 = rng.random_range(1..=100);
            let num2 = rng.random_range(1..=100);
            QuizProblem {
                num1,
                num2,
                op: QuizOp::Add,
                answer: (num1 + num2) as f64,
            }
        }
        1 => {
            let num1 = rng.random_range(1..=100);
            // second operand capped so the result stays non-negative
            let num2 = rng.random_range(1..=num1);
            QuizProblem {
                num1,
                num2,
                op: QuizOp::Subtract,
                answer: (num1 - num2) as f64,
            }
        }
        2 => {
            let num1 = rng.random_range(1..=12);
            let num2 = rng.random_range(1..=12);
            QuizProblem {
                num1,
                num2,
                op: QuizOp::Multiply,
                answer: (num1 * num2) as f64,
            }
        }
        _ => {
            // dividend built from divisor and quotient, so the answer is exact
            let num2 = rng.random_range(1..=10);
            let quotient = rng.random_range(1..=10);
            QuizProblem {
                num1: num2 * quotient,
                num2,
                op: QuizOp::Divide,
                answer: quotient as f64,
            }
        }
    }
}

impl MathQuiz {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        MathQuiz {
            score: 0,
            attempts: 0,
            problem: generate_problem(rng),
        }
    }

    pub fn problem(&self) -> &QuizProblem {
        &self.problem
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

    /// Replaces the current question without touching the counters.
    pub fn new_problem<R: Rng>(&mut self, rng: &mut R) {
        self.problem = generate_problem(rng);
    }

    /// Scores one answer against the current question.
    pub fn submit(&mut self, answer: f64) -> QuizOutcome {
        self.attempts += 1;
        if (answer - self.problem.answer).abs() < ANSWER_TOLERANCE {
            self.score += 1;
            QuizOutcome::Correct
        } else {
            QuizOutcome::Incorrect {
                correct: self.problem.answer,
            }
        }
    }
}
