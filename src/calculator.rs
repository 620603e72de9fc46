#![allow(non_snake_case)]
/// Calculator core: the session state machine behind the button grid and the
/// error taxonomy shared by every component of the crate.
///
///# Example
/// ```
/// use RustedCalc::calculator::session::CalcSession;
/// use RustedCalc::symbolic::normalize::AngleMode;
/// let mut session = CalcSession::new();
/// session.set_angle_mode(AngleMode::Degrees);
/// session.append_token("sin(30)");
/// let result = session.evaluate_current().unwrap();
/// assert!((result - 0.5).abs() < 1e-9);
/// ```
pub mod errors;
pub mod session;
