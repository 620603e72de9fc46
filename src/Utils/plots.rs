use crate::plotter::PlottedFunction;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Renders all functions into one 800x600 PNG chart. Non-finite samples are
/// skipped, so a curve with domain gaps is drawn only where it exists.
pub fn render_functions(
    functions: &[PlottedFunction],
    x_min: f64,
    x_max: f64,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let (y_min, y_max) = y_range(functions);

    // Create a chart builder
    let mut chart = ChartBuilder::on(&root_area)
        .caption("Function Plot", ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // Configure the mesh
    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    for (col, func) in functions.iter().enumerate() {
        let series: Vec<(f64, f64)> = func
            .points
            .iter()
            .copied()
            .filter(|&(_, y)| y.is_finite())
            .collect();
        chart
            .draw_series(LineSeries::new(series, &Palette99::pick(col)))?
            .label(format!(" {}", func.raw_expression))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], &Palette99::pick(col))
            });
    }

    // Configure the legend
    if !functions.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }
    root_area.present()?;
    Ok(())
}

// Vertical extent over all finite samples, padded so flat or empty data
// still yields a drawable range.
fn y_range(functions: &[PlottedFunction]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for func in functions {
        for &(_, y) in &func.points {
            if y.is_finite() {
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return (-1.0, 1.0);
    }
    if y_min == y_max {
        return (y_min - 1.0, y_max + 1.0);
    }
    let pad = (y_max - y_min) * 0.05;
    (y_min - pad, y_max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_y_range_pads_flat_data() {
        let functions = vec![PlottedFunction {
            raw_expression: "2".to_string(),
            points: vec![(0.0, 2.0), (1.0, 2.0)],
        }];
        assert_eq!(y_range(&functions), (1.0, 3.0));
    }

    #[test]
    fn test_y_range_defaults_when_no_finite_samples() {
        assert_eq!(y_range(&[]), (-1.0, 1.0));
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let functions = vec![PlottedFunction {
            raw_expression: "x".to_string(),
            points: (0..100).map(|i| (i as f64, i as f64)).collect(),
        }];
        render_functions(&functions, 0.0, 99.0, &path).unwrap();
        assert!(path.exists());
    }
}
