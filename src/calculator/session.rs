//! Calculator Session State: the single live state struct behind the
//! calculator tab. Holds the input buffer, memory register, angle mode and
//! display-format mode; button events map one-to-one onto the operations
//! here, and `evaluate_current` drives the normalize-parse-evaluate pipeline.

use crate::calculator::errors::CalcError;
use crate::history::HistoryLog;
use crate::symbolic::normalize::{AngleMode, normalize_for_eval};
use crate::symbolic::symbolic_engine::Expr;
use log::{info, warn};
use rand::Rng;
use strum_macros::Display;

/// Number rendering of the display projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DisplayMode {
    Normal,
    Scientific,
}

/// Memory register operations (the MC/MR/M+/M-/MS/M-show button row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
    Store,
    Show,
}

/// Renders an f64 the way the display expects: integral values lose the
/// trailing ".0" (f64 Display already does this).
pub fn format_number(v: f64) -> String {
    format!("{}", v)
}

/// One live session per running application. The buffer is the source of
/// truth for the next evaluation; the visible display is a projection of the
/// buffer or of the last error message.
pub struct CalcSession {
    buffer: String,
    memory: f64,
    angle_mode: AngleMode,
    display_mode: DisplayMode,
    last_error: Option<String>,
    pub history: HistoryLog,
}

impl Default for CalcSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcSession {
    pub fn new() -> Self {
        CalcSession {
            buffer: String::new(),
            memory: 0.0,
            angle_mode: AngleMode::Degrees,
            display_mode: DisplayMode::Normal,
            last_error: None,
            history: HistoryLog::new(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Text for the display binding: the last error if one is pending,
    /// otherwise the buffer.
    pub fn display_text(&self) -> String {
        match &self.last_error {
            Some(msg) => msg.clone(),
            None => self.buffer.clone(),
        }
    }

    /// Text for the memory label binding.
    pub fn memory_text(&self) -> String {
        format!("Memory: {}", format_number(self.memory))
    }

    /// Appends button text to the buffer; typing clears a pending error.
    pub fn append_token(&mut self, text: &str) {
        self.last_error = None;
        self.buffer.push_str(text);
    }

    /// Appends a uniform random value in [0, 1) (the Rand button).
    pub fn append_random<R: Rng>(&mut self, rng: &mut R) {
        let value: f64 = rng.random();
        self.append_token(&format_number(value));
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_error = None;
    }

    pub fn clear_entry(&mut self) {
        self.clear();
    }

    /// Removes the last character of the buffer.
    pub fn backspace(&mut self) {
        self.last_error = None;
        self.buffer.pop();
    }

    /// Toggles a leading minus sign; no-op on an empty buffer.
    pub fn negate_leading(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if let Some(stripped) = self.buffer.strip_prefix('-') {
            self.buffer = stripped.to_string();
        } else {
            self.buffer = format!("-{}", self.buffer);
        }
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
        info!("angle mode set to {}", mode);
    }

    /// Toggles between plain and scientific rendering of a numeric buffer.
    /// A non-numeric buffer is left untouched.
    pub fn toggle_display_format(&mut self) {
        let Ok(value) = self.buffer.trim().parse::<f64>() else {
            return;
        };
        match self.display_mode {
            DisplayMode::Normal => {
                self.buffer = format!("{:.4e}", value);
                self.display_mode = DisplayMode::Scientific;
            }
            DisplayMode::Scientific => {
                self.buffer = format_number(value);
                self.display_mode = DisplayMode::Normal;
            }
        }
    }

    /// Normalizes the buffer exactly once, parses and evaluates it.
    ///
    /// Success replaces the buffer with the textual result and records
    /// `"<input> = <result>"`; failure sets the error indicator, clears the
    /// buffer and records `"Error evaluating: <input>"`.
    pub fn evaluate_current(&mut self) -> Result<f64, CalcError> {
        let input = self.buffer.clone();
        let normalized = normalize_for_eval(&input, self.angle_mode);
        let outcome = Expr::parse_expression(&normalized).and_then(|e| e.eval_const());
        match outcome {
            Ok(value) => {
                let text = format_number(value);
                info!("evaluated '{}' -> {}", input, text);
                self.history.append(format!("{} = {}", input, text));
                self.buffer = text;
                self.last_error = None;
                Ok(value)
            }
            Err(err) => {
                warn!("evaluation of '{}' failed: {}", input, err);
                self.history.append(format!("Error evaluating: {}", input));
                self.buffer.clear();
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The x² button: appends the power-of-2 operator and evaluates at once.
    pub fn square_current(&mut self) -> Result<f64, CalcError> {
        self.append_token("^2");
        self.evaluate_current()
    }

    /// Factorial of the buffer's numeric value, via the product recurrence.
    /// Requires a non-negative integer; operates directly on the parsed
    /// value, not through the general evaluator.
    pub fn factorial_current(&mut self) -> Result<f64, CalcError> {
        let value = self.parse_buffer_number()?;
        if value < 0.0 || value.fract() != 0.0 {
            return self.fail_and_clear(CalcError::Domain(format!(
                "factorial requires a non-negative integer, got {}",
                value
            )));
        }
        // 171! already exceeds f64::MAX
        if value > 170.0 {
            return self.fail_and_clear(CalcError::Domain(format!(
                "factorial of {} overflows",
                value
            )));
        }
        let n = value as u64;
        let result: f64 = (1..=n).map(|i| i as f64).product();
        let text = format_number(result);
        self.history.append(format!("{}! = {}", n, text));
        self.buffer = text;
        self.last_error = None;
        Ok(result)
    }

    /// Reciprocal of the buffer's numeric value; zero is a domain error.
    pub fn reciprocal_current(&mut self) -> Result<f64, CalcError> {
        let value = self.parse_buffer_number()?;
        if value == 0.0 {
            return self.fail_and_clear(CalcError::Domain(
                "reciprocal of zero".to_string(),
            ));
        }
        let result = 1.0 / value;
        let text = format_number(result);
        self.history.append(format!("1/{} = {}", format_number(value), text));
        self.buffer = text;
        self.last_error = None;
        Ok(result)
    }

    /// Renders the displayed value in hexadecimal, truncated to an integer.
    pub fn to_hex(&mut self) -> Result<String, CalcError> {
        self.convert_base(16)
    }

    /// Renders the displayed value in binary, truncated to an integer.
    pub fn to_bin(&mut self) -> Result<String, CalcError> {
        self.convert_base(2)
    }

    fn convert_base(&mut self, base: u32) -> Result<String, CalcError> {
        let value = self.parse_buffer_number()?;
        let n = value.trunc() as i64;
        let magnitude = n.unsigned_abs();
        let (body, label) = match base {
            16 => (format!("0x{:x}", magnitude), "hex"),
            _ => (format!("0b{:b}", magnitude), "binary"),
        };
        let text = if n < 0 { format!("-{}", body) } else { body };
        self.history.append(format!("{} in {} = {}", n, label, text));
        self.buffer = text.clone();
        self.last_error = None;
        Ok(text)
    }

    /// Memory register operations. Add/Subtract/Store need a numeric buffer;
    /// a non-numeric one surfaces as the user-visible error indicator and
    /// leaves the register unchanged.
    pub fn memory_op(&mut self, op: MemoryOp) -> Result<(), CalcError> {
        match op {
            MemoryOp::Clear => {
                self.memory = 0.0;
            }
            MemoryOp::Recall => {
                let text = format_number(self.memory);
                self.append_token(&text);
            }
            MemoryOp::Add => {
                self.memory += self.parse_buffer_number()?;
            }
            MemoryOp::Subtract => {
                self.memory -= self.parse_buffer_number()?;
            }
            MemoryOp::Store => {
                self.memory = self.parse_buffer_number()?;
            }
            MemoryOp::Show => {
                self.history
                    .append(format!("Memory Value: {}", format_number(self.memory)));
            }
        }
        Ok(())
    }

    // Buffer-as-number parse shared by the single-shot operators; failure
    // sets the error indicator.
    fn parse_buffer_number(&mut self) -> Result<f64, CalcError> {
        match self.buffer.trim().parse::<f64>() {
            Ok(v) => Ok(v),
            Err(_) => {
                let err = CalcError::InputFormat(self.buffer.clone());
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn fail_and_clear(&mut self, err: CalcError) -> Result<f64, CalcError> {
        warn!("{}", err);
        self.last_error = Some(err.to_string());
        self.buffer.clear();
        Err(err)
    }
}
