//! Expression Normalizer: rewrites a raw user-typed buffer into the canonical
//! form the parser accepts. Pure string-to-string, deterministic, no UI
//! dependency. Applied exactly once per evaluation - re-normalizing an already
//! converted string double-wraps degree-mode trig calls by design.

use crate::symbolic::utils::find_pair_to_this_bracket;
use strum_macros::Display;

/// Whether trigonometric input/output is interpreted in degrees or radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AngleMode {
    Degrees,
    Radians,
}

/// Normalizes the calculator buffer for evaluation.
///
/// Fixed substitution order: `**` -> `^`, literal `mod` -> `%`, then
/// angle-mode trig rewriting, then parenthesis balancing. In degree mode
/// `sin(`/`cos(`/`tan(` get their argument wrapped in `deg2rad(...)` and the
/// inverse functions get their result wrapped in `rad2deg(...)`; radian mode
/// passes trig through unconverted.
pub fn normalize_for_eval(raw: &str, mode: AngleMode) -> String {
    let mut s = raw.replace("**", "^");
    s = s.replace("mod", "%");
    if mode == AngleMode::Degrees {
        s = rewrite_trig_degrees(&s);
    }
    balance_parentheses(&s)
}

/// Normalizes a plot expression. Identical rewriting: the sqrt/log/ln/exp/abs
/// name mapping the plot path needs lives in the parser's function table,
/// where `log` means log10 and `ln` the natural logarithm.
pub fn normalize_for_plot(raw: &str, mode: AngleMode) -> String {
    normalize_for_eval(raw, mode)
}

/// Appends the deficit of `)` so the expression is syntactically closeable.
/// The reverse case (more closes than opens) is left for the parser to reject.
pub fn balance_parentheses(s: &str) -> String {
    let opens = s.chars().filter(|&c| c == '(').count();
    let closes = s.chars().filter(|&c| c == ')').count();
    let mut out = s.to_string();
    for _ in closes..opens {
        out.push(')');
    }
    out
}

// Degree-mode rewriting over whole identifiers. Matching the full identifier
// before the bracket avoids the substring collision between "sin" and "asin"
// that plagued replace-based rewriting; unterminated calls leave their
// wrappers open for the balancing pass to close.
fn rewrite_trig_degrees(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let ident: String = chars[start..i].iter().collect();
            if i < chars.len() && chars[i] == '(' {
                let direct = matches!(ident.as_str(), "sin" | "cos" | "tan" | "tg");
                let inverse = matches!(
                    ident.as_str(),
                    "asin" | "acos" | "atan" | "arcsin" | "arccos" | "arctan" | "arctg"
                );
                if direct || inverse {
                    match find_pair_to_this_bracket(s, i) {
                        Some(close) => {
                            let inner: String = chars[i + 1..close].iter().collect();
                            let inner = rewrite_trig_degrees(&inner);
                            if direct {
                                out.push_str(&format!("{}(deg2rad({}))", ident, inner));
                            } else {
                                out.push_str(&format!("rad2deg({}({}))", ident, inner));
                            }
                            i = close + 1;
                        }
                        None => {
                            let inner: String = chars[i + 1..].iter().collect();
                            let inner = rewrite_trig_degrees(&inner);
                            if direct {
                                out.push_str(&format!("{}(deg2rad({}", ident, inner));
                            } else {
                                out.push_str(&format!("rad2deg({}({}", ident, inner));
                            }
                            i = chars.len();
                        }
                    }
                    continue;
                }
            }
            out.push_str(&ident);
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radian_mode_passes_trig_through() {
        assert_eq!(
            normalize_for_eval("sin(0.5)", AngleMode::Radians),
            "sin(0.5)"
        );
    }

    #[test]
    fn test_degree_mode_wraps_trig_argument() {
        assert_eq!(
            normalize_for_eval("sin(30)", AngleMode::Degrees),
            "sin(deg2rad(30))"
        );
        assert_eq!(
            normalize_for_eval("cos(60)", AngleMode::Degrees),
            "cos(deg2rad(60))"
        );
    }

    #[test]
    fn test_degree_mode_wraps_inverse_result() {
        assert_eq!(
            normalize_for_eval("asin(0.5)", AngleMode::Degrees),
            "rad2deg(asin(0.5))"
        );
    }

    #[test]
    fn test_asin_is_not_mangled_by_sin_rewrite() {
        // the substring collision the replace-based approach suffered from
        let out = normalize_for_eval("asin(0.5)+sin(30)", AngleMode::Degrees);
        assert_eq!(out, "rad2deg(asin(0.5))+sin(deg2rad(30))");
    }

    #[test]
    fn test_sinh_is_not_rewritten_in_degree_mode() {
        assert_eq!(
            normalize_for_eval("sinh(1)", AngleMode::Degrees),
            "sinh(1)"
        );
    }

    #[test]
    fn test_trailing_content_stays_outside_wrapper() {
        assert_eq!(
            normalize_for_eval("sin(30)+1", AngleMode::Degrees),
            "sin(deg2rad(30))+1"
        );
    }

    #[test]
    fn test_nested_trig_rewriting() {
        assert_eq!(
            normalize_for_eval("sin(cos(90))", AngleMode::Degrees),
            "sin(deg2rad(cos(deg2rad(90))))"
        );
    }

    #[test]
    fn test_unterminated_call_closed_by_balancing() {
        assert_eq!(
            normalize_for_eval("sin(30", AngleMode::Degrees),
            "sin(deg2rad(30))"
        );
    }

    #[test]
    fn test_mod_substitution() {
        assert_eq!(normalize_for_eval("10 mod 3", AngleMode::Radians), "10 % 3");
    }

    #[test]
    fn test_double_star_becomes_caret() {
        assert_eq!(normalize_for_eval("2**3", AngleMode::Radians), "2^3");
    }

    #[test]
    fn test_parenthesis_balancing_appends_deficit() {
        assert_eq!(
            normalize_for_eval("sqrt(2*(1+1", AngleMode::Radians),
            "sqrt(2*(1+1))"
        );
    }

    #[test]
    fn test_excess_closing_is_left_alone() {
        assert_eq!(normalize_for_eval("1+2))", AngleMode::Radians), "1+2))");
    }

    #[test]
    fn test_normalization_is_not_idempotent() {
        let once = normalize_for_eval("sin(30)", AngleMode::Degrees);
        let twice = normalize_for_eval(&once, AngleMode::Degrees);
        assert_eq!(twice, "sin(deg2rad(deg2rad(30)))");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_determinism() {
        let a = normalize_for_eval("tan(45)+1", AngleMode::Degrees);
        let b = normalize_for_eval("tan(45)+1", AngleMode::Degrees);
        assert_eq!(a, b);
    }
}
