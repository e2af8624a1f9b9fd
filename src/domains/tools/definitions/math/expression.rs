//! Restricted arithmetic grammar.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Integers stay exact (128-bit, overflow is an error) until they meet a
//! decimal; `/` always produces a decimal.

use std::fmt;

use thiserror::Error;

/// Deepest allowed nesting of parentheses and unary signs.
const MAX_DEPTH: usize = 64;

/// Errors produced while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("no arithmetic expression found")]
    Empty,

    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    #[error("unexpected '{0}' at position {1}")]
    UnexpectedToken(String, usize),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression nested too deeply")]
    TooDeep,

    #[error("integer overflow")]
    Overflow,
}

/// Result of evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i128),
    Decimal(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Decimal(d) => d,
        }
    }

    fn combine(
        self,
        rhs: Number,
        int_op: fn(i128, i128) -> Option<i128>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Number, ExpressionError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Number::Int)
                .ok_or(ExpressionError::Overflow),
            (a, b) => Ok(Number::Decimal(float_op(a.as_f64(), b.as_f64()))),
        }
    }

    fn add(self, rhs: Number) -> Result<Number, ExpressionError> {
        self.combine(rhs, i128::checked_add, |a, b| a + b)
    }

    fn sub(self, rhs: Number) -> Result<Number, ExpressionError> {
        self.combine(rhs, i128::checked_sub, |a, b| a - b)
    }

    fn mul(self, rhs: Number) -> Result<Number, ExpressionError> {
        self.combine(rhs, i128::checked_mul, |a, b| a * b)
    }

    fn div(self, rhs: Number) -> Result<Number, ExpressionError> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(ExpressionError::DivisionByZero);
        }
        Ok(Number::Decimal(self.as_f64() / divisor))
    }

    fn neg(self) -> Result<Number, ExpressionError> {
        match self {
            Number::Int(i) => i
                .checked_neg()
                .map(Number::Int)
                .ok_or(ExpressionError::Overflow),
            Number::Decimal(d) => Ok(Number::Decimal(-d)),
        }
    }
}

/// Shortest round-trip digits, keeping ".0" on whole values and writing
/// exponents with a sign and at least two digits (`1e+16`, `1e-05`).
fn format_decimal(d: f64) -> String {
    let repr = format!("{:?}", d);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Decimal(d) if d.is_finite() => f.write_str(&format_decimal(*d)),
            Number::Decimal(d) if d.is_nan() => f.write_str("nan"),
            Number::Decimal(d) if *d > 0.0 => f.write_str("inf"),
            Number::Decimal(_) => f.write_str("-inf"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(Number),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn symbol(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::Slash => "/".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
        }
    }
}

fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Find the arithmetic part of a query.
///
/// A query made only of expression characters is taken whole. Otherwise the
/// longest span with a digit and an operator that is not glued to a word on
/// either side is taken; the first span wins a tie. Inside prose a `-` or `/`
/// written tight between two digits reads as a range, phone number or date,
/// so such spans are never picked.
pub fn extract_expression(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if !trimmed.is_empty() && trimmed.chars().all(is_expression_char) {
        return Some(trimmed);
    }

    let mut best: Option<&str> = None;
    let mut run_start: Option<usize> = None;

    let mut consider = |start: usize, end: usize| {
        if let Some(candidate) = embedded_span(input, start, end)
            && best.is_none_or(|b| candidate.len() > b.len())
        {
            best = Some(candidate);
        }
    };

    for (i, c) in input.char_indices() {
        match (is_expression_char(c), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                consider(start, i);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        consider(start, input.len());
    }

    best
}

/// The trimmed run `input[start..end]`, if it qualifies as arithmetic
/// written inside prose.
fn embedded_span(input: &str, start: usize, end: usize) -> Option<&str> {
    let run = &input[start..end];
    let span_start = start + (run.len() - run.trim_start().len());
    let span = run.trim();
    let span_end = span_start + span.len();

    let glued = |c: Option<char>| c.is_some_and(char::is_alphanumeric);
    if glued(input[..span_start].chars().next_back()) || glued(input[span_end..].chars().next()) {
        return None;
    }

    let chars: Vec<char> = span.chars().collect();
    let joined_numbers = chars.windows(3).any(|w| {
        w[0].is_ascii_digit() && matches!(w[1], '-' | '/') && w[2].is_ascii_digit()
    });

    let arithmetic = chars.iter().any(char::is_ascii_digit) && chars.iter().any(|&c| is_operator(c));
    (arithmetic && !joined_numbers).then_some(span)
}

fn tokenize(expr: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut end = pos;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((Token::Number(parse_number(&expr[pos..end])?), pos));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(ExpressionError::UnexpectedChar(other, pos)),
        };
        tokens.push((token, pos));
        chars.next();
    }

    Ok(tokens)
}

fn parse_number(literal: &str) -> Result<Number, ExpressionError> {
    let invalid = || ExpressionError::InvalidNumber(literal.to_string());

    if literal == "." || literal.matches('.').count() > 1 {
        return Err(invalid());
    }
    if literal.contains('.') {
        return literal.parse().map(Number::Decimal).map_err(|_| invalid());
    }
    // Digits only, so the only way to fail is size.
    literal
        .parse::<i128>()
        .map(Number::Int)
        .map_err(|_| ExpressionError::Overflow)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        self.pos += 1;
        token
    }

    fn descend(&mut self) -> Result<(), ExpressionError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExpressionError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Number, ExpressionError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value = value.add(self.term()?)?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value = value.sub(self.term()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<Number, ExpressionError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value = value.mul(self.unary()?)?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    value = value.div(self.unary()?)?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<Number, ExpressionError> {
        match self.peek() {
            Some(Token::Plus) | Some(Token::Minus) => {
                let negate = matches!(self.advance(), Some(Token::Minus));
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                if negate { value.neg() } else { Ok(value) }
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Number, ExpressionError> {
        let at = self.pos;
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    Some(other) => Err(self.unexpected(other, at + 1)),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some(other) => Err(self.unexpected(other, at)),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    fn unexpected(&self, token: Token, fallback: usize) -> ExpressionError {
        let position = self
            .tokens
            .get(self.pos.saturating_sub(1))
            .map(|(_, p)| *p)
            .unwrap_or(fallback);
        ExpressionError::UnexpectedToken(token.symbol(), position)
    }
}

/// Parse and evaluate an arithmetic expression.
pub fn evaluate(expr: &str) -> Result<Number, ExpressionError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;

    match parser.advance() {
        None => Ok(value),
        Some(extra) => Err(parser.unexpected(extra, expr.len())),
    }
}
