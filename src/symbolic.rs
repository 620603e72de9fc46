#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedCalc::symbolic::symbolic_engine::Expr;
/// use RustedCalc::symbolic::normalize::{normalize_for_eval, AngleMode};
/// let normalized = normalize_for_eval("sin(30)", AngleMode::Degrees);
/// let parsed_expression = Expr::parse_expression(&normalized).unwrap();
/// println!("parsed_expression {}", parsed_expression);
/// let result = parsed_expression.eval_const().unwrap();
/// assert!((result - 0.5).abs() < 1e-9);
/// ```
pub mod parse_expr;
/// # Symbolic engine
/// a module
/// 1) turns a normalized String expression into a symbolic expression
/// 2) evaluates a symbolic expression with full domain checking
/// 3) turns a symbolic expression into a regular Rust function for sampling
pub mod symbolic_engine;
/// buffer rewriting applied before parsing: operator substitution, angle-mode
/// trig conversion wrappers and parenthesis balancing
pub mod normalize;
/// the collection of utility functions mainly for bracket parsing and sampling
pub mod utils;
