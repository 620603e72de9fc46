// the collection of utility functions mainly for bracket parsing and sampling

/// Finds the position of the `)` matching the `(` at `bracket_start`
/// (a char index). Returns None when the bracket never closes.
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    let mut stack = 0;
    for (i, c) in input.chars().enumerate().skip(bracket_start) {
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Evenly spaced values from start to end inclusive.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);

    for i in 0..num_values {
        let value = start + (i as f64 * step);
        values.push(value);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_find_pair() {
        assert_eq!(find_pair_to_this_bracket("f(a(b)c)d", 1), Some(7));
        assert_eq!(find_pair_to_this_bracket("f(a(b)c", 1), None);
    }

    #[test]
    fn test_linspace_endpoints_and_count() {
        let xs = linspace(-10.0, 10.0, 400);
        assert_eq!(xs.len(), 400);
        assert_relative_eq!(xs[0], -10.0);
        assert_relative_eq!(xs[399], 10.0, epsilon = 1e-9);
    }
}
