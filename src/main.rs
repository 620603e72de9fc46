#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
pub mod calculator;
pub mod games;
pub mod history;
pub mod plotter;
pub mod symbolic;

use crate::calculator::session::{CalcSession, MemoryOp};
use crate::games::GameState;
use crate::games::math_quiz::QuizOutcome;
use crate::plotter::FunctionPlotter;
use crate::symbolic::normalize::AngleMode;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    // pick a demo: `RustedCalc 1` runs the plotting example
    let example: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    match example {
        0 => {
            // BASIC CALCULATOR SESSION
            // type an expression the way the button grid would produce it
            let mut session = CalcSession::new();
            session.append_token("sin(30) + 2^3");
            // degree mode is the default, so sin(30) is one half
            match session.evaluate_current() {
                Ok(value) => println!("sin(30) + 2^3 = {}", value),
                Err(err) => println!("evaluation failed: {}", err),
            }

            // the result stays in the buffer and feeds the next calculation
            session.append_token("*2");
            if let Ok(value) = session.evaluate_current() {
                println!("chained result = {}", value);
            }

            // memory register round trip
            let _ = session.memory_op(MemoryOp::Store);
            session.clear();
            let _ = session.memory_op(MemoryOp::Recall);
            println!("{}", session.memory_text());

            // single-shot operators work on the displayed value directly
            session.clear();
            session.append_token("5");
            if let Ok(value) = session.factorial_current() {
                println!("5! = {}", value);
            }
            session.clear();
            session.append_token("255");
            if let Ok(text) = session.to_hex() {
                println!("255 in hex = {}", text);
            }

            for entry in session.history.entries() {
                println!("history: {}", entry.text);
            }
            if let Err(err) = session.history.export("history.txt") {
                println!("history export failed: {}", err);
            }
        }
        1 => {
            // PLOTTING A FEW FUNCTIONS TO A PNG
            let mut plotter = FunctionPlotter::new();
            for expr in ["sin(x)", "x^2/10", "ln(x)"] {
                if let Err(err) = plotter.add_function(expr, -10.0, 10.0, AngleMode::Radians) {
                    println!("could not plot '{}': {}", expr, err);
                }
            }
            match plotter.render("plot.png") {
                Ok(()) => println!("plot saved to plot.png"),
                Err(err) => println!("render failed: {}", err),
            }
            if let Err(err) = plotter.export_csv("plot_points.csv") {
                println!("csv export failed: {}", err);
            }
        }
        2 => {
            // ONE ROUND OF THE MATH QUIZ
            let mut rng = rand::rng();
            let state = GameState::start_math_quiz(&mut rng);
            if let GameState::MathQuiz(mut quiz) = state {
                let problem = *quiz.problem();
                println!("{}", problem.prompt());
                match quiz.submit(problem.answer) {
                    QuizOutcome::Correct => println!("correct! {}", quiz.score_text()),
                    QuizOutcome::Incorrect { correct } => {
                        println!("the answer was {} - {}", correct, quiz.score_text())
                    }
                }
            }
        }
        _ => {
            println!("no such example");
        }
    }
}
