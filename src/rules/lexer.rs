use eyre::{eyre, Result};

use crate::rules::token::{classify, Tok, Token};

pub struct Lexer {
    data: Vec<char>,
    idx: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(data: &str) -> Self {
        Self { data: data.chars().collect(), idx: 0, line: 1, col: 1 }
    }

    pub fn lex(mut self) -> Result<Vec<Token>> {
        let mut toks = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            if self.idx >= self.data.len() {
                break;
            }
            let (line, col) = (self.line, self.col);
            let c = self.peek();
            if c == '(' || c == ')' {
                self.advance();
                toks.push(Token { tok: classify(&c.to_string()), s: c.to_string(), line, col });
            } else if c == '"' {
                let s = self.read_quoted()?;
                toks.push(Token { tok: Tok::Literal, s, line, col });
            } else {
                let s = self.read_atom();
                toks.push(Token { tok: classify(&s), s, line, col });
            }
        }
        Ok(toks)
    }

    fn peek(&self) -> char {
        self.data[self.idx]
    }

    fn advance(&mut self) -> char {
        let c = self.data[self.idx];
        self.idx += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        c
    }

    fn skip_whitespace_and_comments(&mut self) {
        while self.idx < self.data.len() {
            let c = self.peek();
            if c.is_whitespace() {
                self.advance();
            } else if c == ';' {
                while self.idx < self.data.len() && self.peek() != '\n' {
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_quoted(&mut self) -> Result<String> {
        self.advance(); // opening quote
        let mut s = String::new();
        loop {
            if self.idx >= self.data.len() {
                return Err(eyre!("unterminated string at line {} col {}", self.line, self.col));
            }
            let c = self.advance();
            if c == '"' {
                break;
            }
            s.push(c);
        }
        Ok(s)
    }

    fn read_atom(&mut self) -> String {
        let mut s = String::new();
        while self.idx < self.data.len() {
            let c = self.peek();
            if c.is_whitespace() || c == '(' || c == ')' {
                break;
            }
            s.push(self.advance());
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_basic() {
        let toks = Lexer::new("(rule foo (constraint clearance (min 100)))").lex().unwrap();
        assert_eq!(toks.first().unwrap().tok, Tok::Lparen);
        assert!(toks.iter().any(|t| t.tok == Tok::Rule));
        assert!(toks.iter().any(|t| t.tok == Tok::Min));
    }

    #[test]
    fn test_lex_quoted_condition() {
        let toks = Lexer::new(r#"(condition "A.layer == 'F.Cu'")"#).lex().unwrap();
        let lit = toks.iter().find(|t| t.s.contains("A.layer")).unwrap();
        assert_eq!(lit.tok, Tok::Literal);
    }
}
