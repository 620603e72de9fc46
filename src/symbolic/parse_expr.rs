use crate::calculator::errors::CalcError;
use crate::symbolic::symbolic_engine::Expr;
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedCalc::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2 + sin(x)").unwrap();
/// println!("parsed_expression {}", parsed_expression);
/// let f = parsed_expression.lambdify1D();
/// println!("f(2) = {}", f(2.0));
/// ```
//                  grammar (recursive descent, precedence climbing)
//
//                  expr   := term  (('+' | '-') term)*
//                  term   := unary (('*' | '/' | '%') unary)*
//                  unary  := '-' unary | power
//                  power  := atom ('^' unary)?            right-associative
//                  atom   := number | name '(' expr ')' | name | '(' expr ')'
//
// name resolves against a fixed allow-list of functions and the constants
// pi and e; anything else becomes Var, which only the plotter may bind ("x").

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

/// Splits the input into tokens. `**` is accepted as a spelling of `^`;
/// numbers may carry a decimal point and an exponent part ("2.5e-3").
fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::Caret);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '%' => {
                tokens.push(Token::Percent);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            _ if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // exponent part: e/E followed by optional sign and a digit
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| CalcError::Parse(format!("bad number literal '{}'", text)))?;
                tokens.push(Token::Number(value));
            }
            _ if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                tokens.push(Token::Ident(name));
            }
            _ => {
                return Err(CalcError::Parse(format!("unexpected character '{}'", c)));
            }
        }
    }
    Ok(tokens)
}

/// The allow-listed function table. Returns None for names that are not
/// callable - those are rejected by the caller, never evaluated.
fn function_expr(name: &str, arg: Expr) -> Option<Expr> {
    let arg = Box::new(arg);
    let expr = match name {
        "sin" => Expr::sin(arg),
        "cos" => Expr::cos(arg),
        "tan" | "tg" => Expr::tg(arg),
        "asin" | "arcsin" => Expr::arcsin(arg),
        "acos" | "arccos" => Expr::arccos(arg),
        "atan" | "arctan" | "arctg" => Expr::arctg(arg),
        "sinh" => Expr::sinh(arg),
        "cosh" => Expr::cosh(arg),
        "tanh" => Expr::tanh(arg),
        "exp" => Expr::Exp(arg),
        "ln" => Expr::Ln(arg),
        "log" => Expr::Log10(arg),
        "sqrt" => Expr::Sqrt(arg),
        "abs" => Expr::Abs(arg),
        "deg2rad" => Expr::DegToRad(arg),
        "rad2deg" => Expr::RadToDeg(arg),
        _ => return None,
    };
    Some(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect_rparen(&mut self, context: &str) -> Result<(), CalcError> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            _ => Err(CalcError::Parse(format!(
                "missing closing bracket after {}",
                context
            ))),
        }
    }

    fn parse_expr(&mut self) -> Result<Expr, CalcError> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    lhs = lhs + rhs;
                }
                Some(Token::Minus) => {
                    self.advance();
                    let rhs = self.parse_term()?;
                    lhs = lhs - rhs;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_term(&mut self) -> Result<Expr, CalcError> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    lhs = lhs * rhs;
                }
                Some(Token::Slash) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    lhs = lhs / rhs;
                }
                Some(Token::Percent) => {
                    self.advance();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Mod(lhs.boxed(), rhs.boxed());
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, CalcError> {
        if self.peek() == Some(&Token::Minus) {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(-inner);
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, CalcError> {
        let base = self.parse_atom()?;
        if self.peek() == Some(&Token::Caret) {
            self.advance();
            // right-associative, unary so that x^-2 parses
            let exponent = self.parse_unary()?;
            return Ok(base.pow(exponent));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expr, CalcError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::Const(value)),
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                self.expect_rparen("bracketed expression")?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.advance();
                    let arg = self.parse_expr()?;
                    self.expect_rparen(&format!("function '{}'", name))?;
                    function_expr(&name, arg)
                        .ok_or_else(|| CalcError::Parse(format!("unknown function '{}'", name)))
                } else {
                    match name.as_str() {
                        "pi" | "PI" => Ok(Expr::pi()),
                        "e" | "E" => Ok(Expr::euler()),
                        _ => Ok(Expr::Var(name)),
                    }
                }
            }
            Some(tok) => Err(CalcError::Parse(format!("unexpected token {:?}", tok))),
            None => Err(CalcError::Parse("unexpected end of expression".to_string())),
        }
    }
}

impl Expr {
    /// Parses a normalized expression string into a symbolic expression.
    ///
    /// Blank input is a parse failure, not zero. Trailing garbage after a
    /// complete expression is rejected.
    pub fn parse_expression(input: &str) -> Result<Expr, CalcError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CalcError::Parse("empty expression".to_string()));
        }
        let tokens = tokenize(input)?;
        let mut parser = Parser { tokens, pos: 0 };
        let expr = parser.parse_expr()?;
        if parser.pos != parser.tokens.len() {
            return Err(CalcError::Parse(format!(
                "trailing input after expression in '{}'",
                input
            )));
        }
        Ok(expr)
    }
}
