use crate::plotter::PlottedFunction;
use csv::Writer;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes history lines as newline-delimited UTF-8 text.
pub fn save_history_to_file<'a>(
    entries: impl Iterator<Item = &'a str>,
    path: &Path,
) -> io::Result<()> {
    let mut file = File::create(path)?;
    for entry in entries {
        writeln!(file, "{}", entry)?;
    }
    Ok(())
}

/// Writes every function's samples as CSV rows of (function, x, y).
pub fn save_points_to_csv(functions: &[PlottedFunction], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["function", "x", "y"])?;
    for func in functions {
        for &(x, y) in &func.points {
            writer.write_record([
                func.raw_expression.as_str(),
                &x.to_string(),
                &y.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}
