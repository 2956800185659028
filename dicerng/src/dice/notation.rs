// Dice notation grammar
//
// [N1] [":" W]? ["d" | ":" N2]? [("+" | "-" | "*" | "/") P]?
//
// Whitespace between tokens is ignored and the whole input must match. Numbers are unsigned
// decimal. The ":" W group is only taken when another mode symbol follows it, so "10:20" is a
// range (N1 ":" N2) rather than N1 with a best-of count.

use super::DiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How N1 and N2 combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollMode {
    /// `d`: dice with N2 sides
    Dice,
    /// `:`: inclusive range up to N2
    Range,
}

impl RollMode {
    pub fn symbol(self) -> char {
        match self {
            RollMode::Dice => 'd',
            RollMode::Range => ':',
        }
    }
}

/// Trailing arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    /// Integer division truncating toward zero
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// Parsed dice notation
///
/// Every field is optional; which combination is present decides how the roll is evaluated.
/// Combinations the evaluator does not recognise roll 0.
///
/// # Example
/// ```
/// use dicerng_core::dice::{Operator, RollMode, RollSpec};
///
/// let spec: RollSpec = "3:4d6 + 2".parse().unwrap();
/// assert_eq!(spec.low, Some(3));
/// assert_eq!(spec.best_of, Some(4));
/// assert_eq!(spec.mode, Some(RollMode::Dice));
/// assert_eq!(spec.sides, Some(6));
/// assert_eq!(spec.op, Some(Operator::Add));
/// assert_eq!(spec.operand, Some(2));
/// assert_eq!(spec.to_string(), "3:4d6+2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollSpec {
    /// N1: constant, dice count, range low end or best-of keep count
    #[serde(default)]
    pub low: Option<i32>,

    /// W: number of dice rolled before keeping the best N1
    #[serde(default)]
    pub best_of: Option<i32>,

    #[serde(default)]
    pub mode: Option<RollMode>,

    /// N2: die sides or inclusive range high end
    #[serde(default)]
    pub sides: Option<i32>,

    #[serde(default)]
    pub op: Option<Operator>,

    /// P: right-hand literal of the trailing operator
    #[serde(default)]
    pub operand: Option<i32>,
}

impl RollSpec {
    /// Strictly parse notation
    ///
    /// # Errors
    /// - [`DiceError::NoMatch`] if the input does not match the grammar
    /// - [`DiceError::LiteralOutOfRange`] if a number does not fit in `i32`
    pub fn parse(input: &str) -> Result<Self, DiceError> {
        let tokens = tokenize(input).ok_or_else(|| DiceError::NoMatch(input.to_string()))?;
        let matched = match_tokens(&tokens).ok_or_else(|| DiceError::NoMatch(input.to_string()))?;
        matched.into_spec()
    }

    /// `value`
    pub fn constant(value: i32) -> Self {
        Self {
            low: Some(value),
            ..Self::default()
        }
    }

    /// `count d sides`
    pub fn dice(count: i32, sides: i32) -> Self {
        Self {
            low: Some(count),
            mode: Some(RollMode::Dice),
            sides: Some(sides),
            ..Self::default()
        }
    }

    /// `lo : hi`, inclusive
    pub fn range(lo: i32, hi: i32) -> Self {
        Self {
            low: Some(lo),
            mode: Some(RollMode::Range),
            sides: Some(hi),
            ..Self::default()
        }
    }

    /// `keep : dice d sides`
    pub fn keep_best(keep: i32, dice: i32, sides: i32) -> Self {
        Self {
            low: Some(keep),
            best_of: Some(dice),
            mode: Some(RollMode::Dice),
            sides: Some(sides),
            ..Self::default()
        }
    }

    /// Attach a trailing operator
    pub fn with_operator(mut self, op: Operator, operand: i32) -> Self {
        self.op = Some(op);
        self.operand = Some(operand);
        self
    }
}

impl FromStr for RollSpec {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RollSpec::parse(s)
    }
}

/// Canonical notation without whitespace
impl fmt::Display for RollSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(low) = self.low {
            write!(f, "{}", low)?;
        }
        if let Some(best_of) = self.best_of {
            write!(f, ":{}", best_of)?;
        }
        if let (Some(mode), Some(sides)) = (self.mode, self.sides) {
            write!(f, "{}{}", mode.symbol(), sides)?;
        }
        if let (Some(op), Some(operand)) = (self.op, self.operand) {
            write!(f, "{}{}", op.symbol(), operand)?;
        }
        Ok(())
    }
}

// ============================================================================
// TOKENS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    Colon,
    Dice,
    Op(Operator),
}

impl Token<'_> {
    fn mode(&self) -> Option<RollMode> {
        match self {
            Token::Dice => Some(RollMode::Dice),
            Token::Colon => Some(RollMode::Range),
            _ => None,
        }
    }
}

/// Split into tokens, dropping whitespace; `None` on any foreign character
fn tokenize(input: &str) -> Option<Vec<Token<'_>>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b if b.is_ascii_whitespace() => i += 1,
            b'0'..=b'9' => {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                tokens.push(Token::Number(&input[start..i]));
            }
            b':' => {
                tokens.push(Token::Colon);
                i += 1;
            }
            b'd' => {
                tokens.push(Token::Dice);
                i += 1;
            }
            other => {
                tokens.push(Token::Op(Operator::from_symbol(char::from(other))?));
                i += 1;
            }
        }
    }

    Some(tokens)
}

// ============================================================================
// GRAMMAR
// ============================================================================

/// Grammar match with literals still as digit strings
#[derive(Debug, Default)]
struct Matched<'a> {
    low: Option<&'a str>,
    best_of: Option<&'a str>,
    mode: Option<RollMode>,
    sides: Option<&'a str>,
    op: Option<Operator>,
    operand: Option<&'a str>,
}

fn match_tokens<'a>(tokens: &[Token<'a>]) -> Option<Matched<'a>> {
    let mut matched = Matched::default();
    let mut rest = tokens;

    if let [Token::Number(low), tail @ ..] = rest {
        matched.low = Some(*low);
        rest = tail;
    }

    match rest {
        [Token::Colon, Token::Number(best_of), mode, Token::Number(sides), tail @ ..]
            if mode.mode().is_some() =>
        {
            matched.best_of = Some(*best_of);
            matched.mode = mode.mode();
            matched.sides = Some(*sides);
            rest = tail;
        }
        [mode, Token::Number(sides), tail @ ..] if mode.mode().is_some() => {
            matched.mode = mode.mode();
            matched.sides = Some(*sides);
            rest = tail;
        }
        _ => {}
    }

    if let [Token::Op(op), Token::Number(operand), tail @ ..] = rest {
        matched.op = Some(*op);
        matched.operand = Some(*operand);
        rest = tail;
    }

    rest.is_empty().then_some(matched)
}

impl Matched<'_> {
    fn into_spec(self) -> Result<RollSpec, DiceError> {
        Ok(RollSpec {
            low: self.low.map(literal).transpose()?,
            best_of: self.best_of.map(literal).transpose()?,
            mode: self.mode,
            sides: self.sides.map(literal).transpose()?,
            op: self.op,
            operand: self.operand.map(literal).transpose()?,
        })
    }
}

fn literal(digits: &str) -> Result<i32, DiceError> {
    digits
        .parse::<i32>()
        .map_err(|_| DiceError::LiteralOutOfRange(digits.to_string()))
}
