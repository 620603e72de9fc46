//! Mini-game engines behind the Games tab. Each game is a self-contained
//! state machine with a `new_problem` / `submit` transition pair and its own
//! score counters; starting a game discards the previous one entirely.
///
///# Example
/// ```
/// use RustedCalc::games::GameState;
/// use RustedCalc::games::number_guesser::GuessFeedback;
/// let mut rng = rand::rng();
/// let mut game = GameState::start_number_guesser(&mut rng);
/// if let GameState::NumberGuesser(ref mut guesser) = game {
///     let feedback = guesser.submit(50);
///     assert!(!matches!(feedback, GuessFeedback::AlreadySolved));
/// }
/// ```
pub mod equation_solver;
pub mod graph_challenge;
pub mod math_quiz;
pub mod number_guesser;

use equation_solver::EquationSolver;
use graph_challenge::GraphChallenge;
use math_quiz::MathQuiz;
use number_guesser::NumberGuesser;
use rand::Rng;

/// Absolute tolerance for comparing a submitted numeric answer with the
/// correct one.
pub const ANSWER_TOLERANCE: f64 = 1e-4;

/// The one active game, if any. Exactly one variant lives at a time; the
/// previous variant's counters and problem parameters are dropped on switch.
pub enum GameState {
    MathQuiz(MathQuiz),
    NumberGuesser(NumberGuesser),
    EquationSolver(EquationSolver),
    GraphChallenge(GraphChallenge),
}

impl GameState {
    pub fn start_math_quiz<R: Rng>(rng: &mut R) -> Self {
        GameState::MathQuiz(MathQuiz::new(rng))
    }

    pub fn start_number_guesser<R: Rng>(rng: &mut R) -> Self {
        GameState::NumberGuesser(NumberGuesser::new(rng))
    }

    pub fn start_equation_solver<R: Rng>(rng: &mut R) -> Self {
        GameState::EquationSolver(EquationSolver::new(rng))
    }

    pub fn start_graph_challenge<R: Rng>(rng: &mut R) -> Self {
        GameState::GraphChallenge(GraphChallenge::new(rng))
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameState::MathQuiz(_) => "Math Quiz",
            GameState::NumberGuesser(_) => "Number Guesser",
            GameState::EquationSolver(_) => "Equation Solver",
            GameState::GraphChallenge(_) => "Graph Challenge",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_starting_a_game_discards_the_previous_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = GameState::start_math_quiz(&mut rng);
        if let GameState::MathQuiz(ref mut quiz) = state {
            let answer = quiz.problem().answer;
            quiz.submit(answer);
            assert_eq!(quiz.score(), 1);
        }
        state = GameState::start_math_quiz(&mut rng);
        if let GameState::MathQuiz(ref quiz) = state {
            assert_eq!(quiz.score(), 0);
            assert_eq!(quiz.attempts(), 0);
        } else {
            panic!("expected a math quiz");
        }
    }

    #[test]
    fn test_game_names() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(GameState::start_math_quiz(&mut rng).name(), "Math Quiz");
        assert_eq!(
            GameState::start_graph_challenge(&mut rng).name(),
            "Graph Challenge"
        );
    }
}
