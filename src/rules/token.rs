use std::fmt;
use std::str::FromStr;

use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Tok {
    Lparen,
    Rparen,
    Rule,
    Selector,
    Constraint,
    Clearance,
    Min,
    Condition,
    MatchLayer,
    MatchNetclass,
    MatchRef,
    MatchItem,
    #[strum(disabled)]
    Literal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub tok: Tok,
    pub s: String,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.s)
    }
}

pub fn classify(s: &str) -> Tok {
    match s {
        "(" => Tok::Lparen,
        ")" => Tok::Rparen,
        _ => Tok::from_str(&s.to_lowercase()).unwrap_or(Tok::Literal),
    }
}
