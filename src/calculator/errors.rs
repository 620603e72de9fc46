use std::fmt;
use std::io;

/// Error taxonomy shared by the whole crate. Every operation boundary
/// converts one of these into a user-visible message; nothing propagates
/// uncaught past the public API.
#[derive(Debug)]
pub enum CalcError {
    /// Unbalanced or unsupported syntax, identifiers outside the allow-list
    Parse(String),
    /// Mathematically undefined request: sqrt of negative, log of
    /// non-positive, factorial of negative/non-integer, division by zero
    Domain(String),
    /// Invalid plot domain
    Range { x_min: f64, x_max: f64 },
    /// Non-numeric text where a number is required
    InputFormat(String),
    /// Export or render write failure
    Io(io::Error),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::Parse(s) => write!(f, "Failed to parse expression: {}", s),
            CalcError::Domain(s) => write!(f, "Math domain error: {}", s),
            CalcError::Range { x_min, x_max } => {
                write!(f, "X min must be less than X max (got {} and {})", x_min, x_max)
            }
            CalcError::InputFormat(s) => write!(f, "'{}' is not a valid number", s),
            CalcError::Io(e) => write!(f, "Write failed: {}", e),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CalcError {
    fn from(e: io::Error) -> Self {
        CalcError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = CalcError::Parse("bad token".to_string());
        assert!(format!("{}", e).contains("bad token"));
        let e = CalcError::Range {
            x_min: 5.0,
            x_max: 5.0,
        };
        assert!(format!("{}", e).contains("X min"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e: CalcError = io_err.into();
        assert!(matches!(e, CalcError::Io(_)));
    }
}
