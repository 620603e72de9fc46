//! # Symbolic Engine Module
//!
//! Core expression tree for the calculator and the plotter. A user-typed string
//! is normalized (see `normalize`), parsed into an `Expr` (see `parse_expr`) and
//! then either evaluated with full domain checking (`eval_const`, `eval_at`) or
//! compiled into a plain Rust closure for bulk sampling (`lambdify1D`).
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The expression type supporting:
//! - **Variables**: `Var(String)` - the plot argument "x"
//! - **Constants**: `Const(f64)` - numerical constants, pi and e fold to these
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Mod`, `Pow`
//! - **Functions**: `Exp`, `Ln`, `Log10`, `Sqrt`, `Abs`, trigonometric and
//!   hyperbolic variants, and the `DegToRad`/`RadToDeg` conversion wrappers the
//!   normalizer inserts in degree mode
//!
//! ### Key Methods
//! - `eval_const()` - checked evaluation of a closed expression
//! - `eval_at(value)` - checked evaluation with "x" bound to a value
//! - `lambdify1D()` - convert to an executable `Fn(f64) -> f64`
//! - `extract_variables()` - list free variables of the expression
//!
//! Evaluation never executes anything outside this enum: the parser only builds
//! variants from its allow-listed function table, so a hostile identifier is a
//! `CalcError::Parse` long before evaluation.

#![allow(non_camel_case_types)]

use crate::calculator::errors::CalcError;
use std::f64::consts::PI;
use std::fmt;

/// Symbolic expression tree. Non-camel-case trig variant names follow the
/// mathematical notation used throughout the crate (`tg`, `arctg`).
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Free variable with a name (the plotter binds "x")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Floor-style modulo: left % right
    Mod(Box<Expr>, Box<Expr>),
    /// Power: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Base-10 logarithm: log(x)
    Log10(Box<Expr>),
    /// Square root: sqrt(x)
    Sqrt(Box<Expr>),
    /// Absolute value: abs(x)
    Abs(Box<Expr>),
    /// Sine
    sin(Box<Expr>),
    /// Cosine
    cos(Box<Expr>),
    /// Tangent - mathematical notation 'tg'
    tg(Box<Expr>),
    /// Arcsine
    arcsin(Box<Expr>),
    /// Arccosine
    arccos(Box<Expr>),
    /// Arctangent - mathematical notation 'arctg'
    arctg(Box<Expr>),
    /// Hyperbolic sine
    sinh(Box<Expr>),
    /// Hyperbolic cosine
    cosh(Box<Expr>),
    /// Hyperbolic tangent
    tanh(Box<Expr>),
    /// Degrees-to-radians wrapper inserted by the normalizer in degree mode
    DegToRad(Box<Expr>),
    /// Radians-to-degrees wrapper inserted by the normalizer in degree mode
    RadToDeg(Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Mod(lhs, rhs) => write!(f, "({} % {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(e) => write!(f, "exp({})", e),
            Expr::Ln(e) => write!(f, "ln({})", e),
            Expr::Log10(e) => write!(f, "log({})", e),
            Expr::Sqrt(e) => write!(f, "sqrt({})", e),
            Expr::Abs(e) => write!(f, "abs({})", e),
            Expr::sin(e) => write!(f, "sin({})", e),
            Expr::cos(e) => write!(f, "cos({})", e),
            Expr::tg(e) => write!(f, "tg({})", e),
            Expr::arcsin(e) => write!(f, "arcsin({})", e),
            Expr::arccos(e) => write!(f, "arccos({})", e),
            Expr::arctg(e) => write!(f, "arctg({})", e),
            Expr::sinh(e) => write!(f, "sinh({})", e),
            Expr::cosh(e) => write!(f, "cosh({})", e),
            Expr::tanh(e) => write!(f, "tanh({})", e),
            Expr::DegToRad(e) => write!(f, "deg2rad({})", e),
            Expr::RadToDeg(e) => write!(f, "rad2deg({})", e),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

// floor-style modulo, sign follows the divisor
fn floor_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

impl Expr {
    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Returns the sorted, deduplicated list of free variable names.
    pub fn extract_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars.sort();
        vars.dedup();
        vars
    }

    fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Expr::Var(name) => out.push(name.clone()),
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Mod(lhs, rhs)
            | Expr::Pow(lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            Expr::Exp(e)
            | Expr::Ln(e)
            | Expr::Log10(e)
            | Expr::Sqrt(e)
            | Expr::Abs(e)
            | Expr::sin(e)
            | Expr::cos(e)
            | Expr::tg(e)
            | Expr::arcsin(e)
            | Expr::arccos(e)
            | Expr::arctg(e)
            | Expr::sinh(e)
            | Expr::cosh(e)
            | Expr::tanh(e)
            | Expr::DegToRad(e)
            | Expr::RadToDeg(e) => e.collect_variables(out),
        }
    }

    /// Checked evaluation of a closed expression (no free variables allowed).
    ///
    /// Any free variable is a `CalcError::Parse` - the calculator never binds
    /// identifiers, so "x+1" typed into the calculator is rejected here.
    pub fn eval_const(&self) -> Result<f64, CalcError> {
        self.eval_inner(None)
    }

    /// Checked evaluation with the variable "x" bound to `value`.
    pub fn eval_at(&self, value: f64) -> Result<f64, CalcError> {
        self.eval_inner(Some(value))
    }

    fn eval_inner(&self, x: Option<f64>) -> Result<f64, CalcError> {
        match self {
            Expr::Var(name) => match x {
                Some(val) if name == "x" => Ok(val),
                _ => Err(CalcError::Parse(format!("unknown identifier '{}'", name))),
            },
            Expr::Const(val) => Ok(*val),
            Expr::Add(lhs, rhs) => Ok(lhs.eval_inner(x)? + rhs.eval_inner(x)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval_inner(x)? - rhs.eval_inner(x)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval_inner(x)? * rhs.eval_inner(x)?),
            Expr::Div(lhs, rhs) => {
                let denom = rhs.eval_inner(x)?;
                if denom == 0.0 {
                    return Err(CalcError::Domain(format!("division by zero in '{}'", self)));
                }
                Ok(lhs.eval_inner(x)? / denom)
            }
            Expr::Mod(lhs, rhs) => {
                let denom = rhs.eval_inner(x)?;
                if denom == 0.0 {
                    return Err(CalcError::Domain(format!("modulo by zero in '{}'", self)));
                }
                Ok(floor_mod(lhs.eval_inner(x)?, denom))
            }
            Expr::Pow(base, exp) => {
                let b = base.eval_inner(x)?;
                let e = exp.eval_inner(x)?;
                if b == 0.0 && e < 0.0 {
                    return Err(CalcError::Domain(format!(
                        "zero raised to negative power in '{}'",
                        self
                    )));
                }
                let res = b.powf(e);
                if res.is_nan() {
                    return Err(CalcError::Domain(format!(
                        "negative base with fractional exponent in '{}'",
                        self
                    )));
                }
                Ok(res)
            }
            Expr::Exp(e) => Ok(e.eval_inner(x)?.exp()),
            Expr::Ln(e) => {
                let arg = e.eval_inner(x)?;
                if arg <= 0.0 {
                    return Err(CalcError::Domain(format!(
                        "logarithm of non-positive value {}",
                        arg
                    )));
                }
                Ok(arg.ln())
            }
            Expr::Log10(e) => {
                let arg = e.eval_inner(x)?;
                if arg <= 0.0 {
                    return Err(CalcError::Domain(format!(
                        "logarithm of non-positive value {}",
                        arg
                    )));
                }
                Ok(arg.log10())
            }
            Expr::Sqrt(e) => {
                let arg = e.eval_inner(x)?;
                if arg < 0.0 {
                    return Err(CalcError::Domain(format!(
                        "square root of negative value {}",
                        arg
                    )));
                }
                Ok(arg.sqrt())
            }
            Expr::Abs(e) => Ok(e.eval_inner(x)?.abs()),
            Expr::sin(e) => Ok(e.eval_inner(x)?.sin()),
            Expr::cos(e) => Ok(e.eval_inner(x)?.cos()),
            Expr::tg(e) => Ok(e.eval_inner(x)?.tan()),
            Expr::arcsin(e) => {
                let arg = e.eval_inner(x)?;
                if !(-1.0..=1.0).contains(&arg) {
                    return Err(CalcError::Domain(format!(
                        "arcsin argument {} outside [-1, 1]",
                        arg
                    )));
                }
                Ok(arg.asin())
            }
            Expr::arccos(e) => {
                let arg = e.eval_inner(x)?;
                if !(-1.0..=1.0).contains(&arg) {
                    return Err(CalcError::Domain(format!(
                        "arccos argument {} outside [-1, 1]",
                        arg
                    )));
                }
                Ok(arg.acos())
            }
            Expr::arctg(e) => Ok(e.eval_inner(x)?.atan()),
            Expr::sinh(e) => Ok(e.eval_inner(x)?.sinh()),
            Expr::cosh(e) => Ok(e.eval_inner(x)?.cosh()),
            Expr::tanh(e) => Ok(e.eval_inner(x)?.tanh()),
            Expr::DegToRad(e) => Ok(e.eval_inner(x)?.to_radians()),
            Expr::RadToDeg(e) => Ok(e.eval_inner(x)?.to_degrees()),
        }
    }

    /// Converts a single-variable expression into an executable Rust closure.
    ///
    /// The resulting closure performs no domain checking: sampling outside a
    /// function's domain yields NaN/infinite values which the plotter masks.
    /// Constant expressions compile to a closure ignoring its argument.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").unwrap().lambdify1D();
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Mod(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| floor_mod(lhs_fn(x), rhs_fn(x)))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                let exp_fn = exp.lambdify1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Exp(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).exp())
            }
            Expr::Ln(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).ln())
            }
            Expr::Log10(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).log10())
            }
            Expr::Sqrt(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).sqrt())
            }
            Expr::Abs(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).abs())
            }
            Expr::sin(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).sin())
            }
            Expr::cos(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).cos())
            }
            Expr::tg(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).tan())
            }
            Expr::arcsin(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).asin())
            }
            Expr::arccos(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).acos())
            }
            Expr::arctg(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).atan())
            }
            Expr::sinh(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).sinh())
            }
            Expr::cosh(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).cosh())
            }
            Expr::tanh(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).tanh())
            }
            Expr::DegToRad(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).to_radians())
            }
            Expr::RadToDeg(e) => {
                let f = e.lambdify1D();
                Box::new(move |x| f(x).to_degrees())
            }
        }
    }

    /// The constant pi as an expression.
    pub fn pi() -> Expr {
        Expr::Const(PI)
    }

    /// The constant e as an expression.
    pub fn euler() -> Expr {
        Expr::Const(std::f64::consts::E)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_const_arithmetic() {
        let expr = Expr::Add(
            Box::new(Expr::Const(2.0)),
            Box::new(Expr::Mul(
                Box::new(Expr::Const(3.0)),
                Box::new(Expr::Const(4.0)),
            )),
        );
        assert_eq!(expr.eval_const().unwrap(), 14.0);
    }

    #[test]
    fn test_eval_rejects_free_variable() {
        let expr = Expr::Var("x".to_string());
        assert!(matches!(expr.eval_const(), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_eval_at_binds_x() {
        let expr = Expr::Var("x".to_string()).pow(Expr::Const(2.0));
        assert_eq!(expr.eval_at(3.0).unwrap(), 9.0);
    }

    #[test]
    fn test_eval_at_rejects_other_names() {
        let expr = Expr::Var("y".to_string());
        assert!(matches!(expr.eval_at(1.0), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        let expr = Expr::Div(Box::new(Expr::Const(1.0)), Box::new(Expr::Const(0.0)));
        assert!(matches!(expr.eval_const(), Err(CalcError::Domain(_))));
    }

    #[test]
    fn test_sqrt_of_negative_is_domain_error() {
        let expr = Expr::Sqrt(Box::new(Expr::Const(-4.0)));
        assert!(matches!(expr.eval_const(), Err(CalcError::Domain(_))));
    }

    #[test]
    fn test_ln_of_non_positive_is_domain_error() {
        let expr = Expr::Ln(Box::new(Expr::Const(0.0)));
        assert!(matches!(expr.eval_const(), Err(CalcError::Domain(_))));
    }

    #[test]
    fn test_floor_mod_follows_divisor_sign() {
        let expr = Expr::Mod(Box::new(Expr::Const(-7.0)), Box::new(Expr::Const(3.0)));
        assert_relative_eq!(expr.eval_const().unwrap(), 2.0);
    }

    #[test]
    fn test_log10_and_ln_are_distinct() {
        let log = Expr::Log10(Box::new(Expr::Const(100.0)));
        let ln = Expr::Ln(Box::new(Expr::Const(100.0)));
        assert_relative_eq!(log.eval_const().unwrap(), 2.0);
        assert_relative_eq!(ln.eval_const().unwrap(), 100.0_f64.ln());
    }

    #[test]
    fn test_deg_conversion_wrappers() {
        let expr = Expr::sin(Box::new(Expr::DegToRad(Box::new(Expr::Const(30.0)))));
        assert_relative_eq!(expr.eval_const().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_lambdify1D_square() {
        let expr = Expr::Var("x".to_string()).pow(Expr::Const(2.0));
        let f = expr.lambdify1D();
        assert_eq!(f(3.0), 9.0);
        assert_eq!(f(-2.0), 4.0);
    }

    #[test]
    fn test_lambdify1D_out_of_domain_is_nan() {
        let expr = Expr::Sqrt(Box::new(Expr::Var("x".to_string())));
        let f = expr.lambdify1D();
        assert!(f(-1.0).is_nan());
    }

    #[test]
    fn test_extract_variables() {
        let expr = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::sin(Box::new(Expr::Var("x".to_string())))),
        );
        assert_eq!(expr.extract_variables(), vec!["x".to_string()]);
    }

    #[test]
    fn test_operator_overloads_build_the_tree() {
        // same shapes the parser builds
        let expr = Expr::Const(2.0) + Expr::Const(3.0) * Expr::Var("x".to_string());
        assert_eq!(expr.eval_at(4.0).unwrap(), 14.0);
        let expr = -(Expr::Const(5.0) - Expr::Const(2.0)) / Expr::Const(3.0);
        assert_relative_eq!(expr.eval_const().unwrap(), -1.0);
    }

    #[test]
    fn test_pi_and_euler_constants() {
        assert_relative_eq!(Expr::pi().eval_const().unwrap(), PI);
        let ln_e = Expr::Ln(Expr::euler().boxed());
        assert_relative_eq!(ln_e.eval_const().unwrap(), 1.0);
    }

    #[test]
    fn test_display_text() {
        let expr = Expr::sin(Box::new(Expr::Var("x".to_string())));
        assert_eq!(format!("{}", expr), "sin(x)");
    }
}
