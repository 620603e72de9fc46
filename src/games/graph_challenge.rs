//! Graph identification game: one function from a fixed ten-entry catalog is
//! sampled for display and the player picks which catalog entry it was.
//! Scoring is an exact match on the catalog identifier.

use crate::plotter::sample_expression;
use crate::symbolic::normalize::AngleMode;
use log::warn;
use rand::Rng;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The fixed function catalog shown as answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CatalogFunction {
    #[strum(serialize = "x")]
    Identity,
    #[strum(serialize = "x^2")]
    Square,
    #[strum(serialize = "x^3")]
    Cube,
    #[strum(serialize = "sqrt(x)")]
    Sqrt,
    #[strum(serialize = "sin(x)")]
    Sin,
    #[strum(serialize = "cos(x)")]
    Cos,
    #[strum(serialize = "tan(x)")]
    Tan,
    #[strum(serialize = "exp(x)")]
    Exp,
    #[strum(serialize = "ln(x)")]
    Ln,
    #[strum(serialize = "abs(x)")]
    Abs,
}

impl CatalogFunction {
    pub fn expression(&self) -> &'static str {
        match self {
            CatalogFunction::Identity => "x",
            CatalogFunction::Square => "x^2",
            CatalogFunction::Cube => "x^3",
            CatalogFunction::Sqrt => "sqrt(x)",
            CatalogFunction::Sin => "sin(x)",
            CatalogFunction::Cos => "cos(x)",
            CatalogFunction::Tan => "tan(x)",
            CatalogFunction::Exp => "exp(x)",
            CatalogFunction::Ln => "ln(x)",
            CatalogFunction::Abs => "abs(x)",
        }
    }

    /// Display domain; sqrt only exists for non-negative x.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            CatalogFunction::Sqrt => (0.0, 5.0),
            _ => (-5.0, 5.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphOutcome {
    Correct,
    Incorrect { correct: CatalogFunction },
}

pub struct GraphChallenge {
    correct: CatalogFunction,
    points: Vec<(f64, f64)>,
    score: u32,
    attempts: u32,
}

fn pick_function<R: Rng>(rng: &mut R) -> CatalogFunction {
    let options: Vec<CatalogFunction> = CatalogFunction::iter().collect();
    options[rng.random_range(0..options.len())]
}

fn sample_catalog(func: CatalogFunction) -> Vec<(f64, f64)> {
    let (x_min, x_max) = func.domain();
    match sample_expression(func.expression(), x_min, x_max, AngleMode::Radians) {
        Ok(points) => points,
        Err(err) => {
            warn!("sampling catalog function '{}' failed: {}", func, err);
            Vec::new()
        }
    }
}

impl GraphChallenge {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let correct = pick_function(rng);
        GraphChallenge {
            correct,
            points: sample_catalog(correct),
            score: 0,
            attempts: 0,
        }
    }

    /// Samples of the hidden function, for drawing the mystery graph.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn options(&self) -> Vec<CatalogFunction> {
        CatalogFunction::iter().collect()
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

    /// Picks and samples a fresh hidden function; counters carry over.
    pub fn new_problem<R: Rng>(&mut self, rng: &mut R) {
        self.correct = pick_function(rng);
        self.points = sample_catalog(self.correct);
    }

    pub fn submit(&mut self, choice: CatalogFunction) -> GraphOutcome {
        self.attempts += 1;
        if choice == self.correct {
            self.score += 1;
            GraphOutcome::Correct
        } else {
            GraphOutcome::Incorrect {
                correct: self.correct,
            }
        }
    }
}
