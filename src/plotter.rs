//! Function Plotter: turns expression strings into sampled (x, y) point
//! sequences over a user-chosen domain. Rendering the samples to a PNG and
//! exporting them as CSV delegates to `Utils::plots` and `Utils::logger`;
//! the plotter's own contract ends at producing (expression, points) pairs.

use crate::Utils::logger::save_points_to_csv;
use crate::Utils::plots::render_functions;
use crate::calculator::errors::CalcError;
use crate::symbolic::normalize::{AngleMode, normalize_for_plot};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::linspace;
use log::{info, warn};
use std::io;
use std::path::Path;

/// Fixed sampling resolution across the plot domain, endpoints included.
pub const PLOT_RESOLUTION: usize = 400;

/// One plotted function: the text the user typed and its current samples.
/// Points outside the function's domain carry a NaN y and are masked when
/// rendering.
#[derive(Debug, Clone)]
pub struct PlottedFunction {
    pub raw_expression: String,
    pub points: Vec<(f64, f64)>,
}

/// Ordered list of plotted functions; insertion order is legend order.
#[derive(Debug, Default)]
pub struct FunctionPlotter {
    functions: Vec<PlottedFunction>,
    x_min: f64,
    x_max: f64,
}

/// Samples a single expression at the fixed resolution. Fails on a blank
/// expression, an invalid domain, unparsable input, identifiers other than
/// "x", or an expression with no finite sample anywhere on the domain.
pub fn sample_expression(
    expression: &str,
    x_min: f64,
    x_max: f64,
    mode: AngleMode,
) -> Result<Vec<(f64, f64)>, CalcError> {
    if expression.trim().is_empty() {
        return Err(CalcError::Parse("empty plot expression".to_string()));
    }
    if x_min >= x_max {
        return Err(CalcError::Range { x_min, x_max });
    }
    let normalized = normalize_for_plot(expression, mode);
    let expr = Expr::parse_expression(&normalized)?;
    for var in expr.extract_variables() {
        if var != "x" {
            return Err(CalcError::Parse(format!("unknown identifier '{}'", var)));
        }
    }
    let f = expr.lambdify1D();
    let points: Vec<(f64, f64)> = linspace(x_min, x_max, PLOT_RESOLUTION)
        .into_iter()
        .map(|x| (x, f(x)))
        .collect();
    if points.iter().all(|&(_, y)| !y.is_finite()) {
        return Err(CalcError::Domain(format!(
            "'{}' has no finite value on [{}, {}]",
            expression, x_min, x_max
        )));
    }
    Ok(points)
}

impl FunctionPlotter {
    pub fn new() -> Self {
        FunctionPlotter {
            functions: Vec::new(),
            x_min: -10.0,
            x_max: 10.0,
        }
    }

    pub fn functions(&self) -> &[PlottedFunction] {
        &self.functions
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Validates, samples and appends a function. On any failure the
    /// function list is left untouched.
    pub fn add_function(
        &mut self,
        expression: &str,
        x_min: f64,
        x_max: f64,
        mode: AngleMode,
    ) -> Result<(), CalcError> {
        let points = sample_expression(expression, x_min, x_max, mode)?;
        self.x_min = x_min;
        self.x_max = x_max;
        info!(
            "plotting '{}' from {} to {} ({} samples)",
            expression,
            x_min,
            x_max,
            points.len()
        );
        self.functions.push(PlottedFunction {
            raw_expression: expression.to_string(),
            points,
        });
        Ok(())
    }

    /// Removes a function by position, then recomputes every remaining
    /// function from scratch over the currently configured domain. An
    /// out-of-range index is ignored.
    pub fn remove_function(&mut self, index: usize, mode: AngleMode) {
        if index >= self.functions.len() {
            warn!("remove_function: no function at index {}", index);
            return;
        }
        let removed = self.functions.remove(index);
        info!("removed '{}' from the plot", removed.raw_expression);
        for func in &mut self.functions {
            match sample_expression(&func.raw_expression, self.x_min, self.x_max, mode) {
                Ok(points) => func.points = points,
                Err(err) => {
                    // keep the previous samples rather than drop the curve
                    warn!("re-sampling '{}' failed: {}", func.raw_expression, err);
                }
            }
        }
    }

    /// Empties the function list; the next render shows axes only.
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// Draws all functions to a PNG file at the given path.
    pub fn render(&self, path: impl AsRef<Path>) -> Result<(), CalcError> {
        render_functions(&self.functions, self.x_min, self.x_max, path.as_ref())
            .map_err(|e| CalcError::Io(io::Error::other(e.to_string())))
    }

    /// Writes every function's samples as CSV (expression, x, y rows).
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<(), CalcError> {
        save_points_to_csv(&self.functions, path.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_function_samples_400_points_inclusive() {
        let mut plotter = FunctionPlotter::new();
        plotter
            .add_function("x**2", -10.0, 10.0, AngleMode::Radians)
            .unwrap();
        let func = &plotter.functions()[0];
        assert_eq!(func.points.len(), PLOT_RESOLUTION);
        assert_relative_eq!(func.points[0].0, -10.0);
        assert_relative_eq!(func.points[0].1, 100.0);
        assert_relative_eq!(func.points[PLOT_RESOLUTION - 1].0, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_domain_is_range_error() {
        let mut plotter = FunctionPlotter::new();
        let res = plotter.add_function("x", 10.0, 10.0, AngleMode::Radians);
        assert!(matches!(res, Err(CalcError::Range { .. })));
        assert!(plotter.functions().is_empty());
    }

    #[test]
    fn test_inverted_domain_is_range_error() {
        let res = sample_expression("x", 5.0, -5.0, AngleMode::Radians);
        assert!(matches!(res, Err(CalcError::Range { .. })));
    }

    #[test]
    fn test_blank_expression_is_rejected() {
        let mut plotter = FunctionPlotter::new();
        let res = plotter.add_function("  ", -1.0, 1.0, AngleMode::Radians);
        assert!(res.is_err());
        assert!(plotter.functions().is_empty());
    }

    #[test]
    fn test_failure_does_not_mutate_list() {
        let mut plotter = FunctionPlotter::new();
        plotter
            .add_function("sin(x)", -5.0, 5.0, AngleMode::Radians)
            .unwrap();
        let _ = plotter.add_function("y + 1", -5.0, 5.0, AngleMode::Radians);
        assert_eq!(plotter.functions().len(), 1);
    }

    #[test]
    fn test_partial_domain_masks_with_nan() {
        // ln(x) is undefined for x <= 0; those samples become NaN
        let points = sample_expression("ln(x)", -5.0, 5.0, AngleMode::Radians).unwrap();
        assert!(points.iter().any(|&(_, y)| y.is_nan()));
        assert!(points.iter().any(|&(_, y)| y.is_finite()));
    }

    #[test]
    fn test_nowhere_finite_expression_is_domain_error() {
        let res = sample_expression("sqrt(-1-x^2)", -5.0, 5.0, AngleMode::Radians);
        assert!(matches!(res, Err(CalcError::Domain(_))));
    }

    #[test]
    fn test_remove_function_recomputes_remaining() {
        let mut plotter = FunctionPlotter::new();
        plotter
            .add_function("x", -1.0, 1.0, AngleMode::Radians)
            .unwrap();
        plotter
            .add_function("x^3", -2.0, 2.0, AngleMode::Radians)
            .unwrap();
        // second add moved the domain to [-2, 2]; removal re-samples "x" there
        plotter.remove_function(1, AngleMode::Radians);
        assert_eq!(plotter.functions().len(), 1);
        let func = &plotter.functions()[0];
        assert_eq!(func.raw_expression, "x");
        assert_relative_eq!(func.points[0].0, -2.0);
        assert_relative_eq!(func.points[0].1, -2.0);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut plotter = FunctionPlotter::new();
        plotter
            .add_function("x", -1.0, 1.0, AngleMode::Radians)
            .unwrap();
        plotter.remove_function(5, AngleMode::Radians);
        assert_eq!(plotter.functions().len(), 1);
    }

    #[test]
    fn test_clear_empties_list() {
        let mut plotter = FunctionPlotter::new();
        plotter
            .add_function("x", -1.0, 1.0, AngleMode::Radians)
            .unwrap();
        plotter.clear();
        assert!(plotter.functions().is_empty());
    }

    #[test]
    fn test_degree_mode_affects_plot_samples() {
        let points = sample_expression("sin(x)", 0.0, 90.0, AngleMode::Degrees).unwrap();
        let last = points[PLOT_RESOLUTION - 1];
        assert_relative_eq!(last.0, 90.0, epsilon = 1e-9);
        assert_relative_eq!(last.1, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_constant_expression_plots_flat_line() {
        let points = sample_expression("2", -1.0, 1.0, AngleMode::Radians).unwrap();
        assert!(points.iter().all(|&(_, y)| y == 2.0));
    }
}
