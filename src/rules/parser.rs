use eyre::{eyre, Result};

use crate::rules::token::{Tok, Token};
use crate::rules::types::{Rule, RuleFile, Selector};

pub struct Parser {
    toks: Vec<Token>,
    idx: usize,
    file: RuleFile,
}

impl Parser {
    pub fn new(toks: Vec<Token>) -> Self {
        Self { toks, idx: 0, file: RuleFile::default() }
    }

    pub fn parse(mut self) -> Result<RuleFile> {
        while self.idx < self.toks.len() {
            self.top_form()?;
        }
        Ok(self.file)
    }

    fn peek(&self, ahead: usize) -> Result<&Token> {
        self.toks.get(self.idx + ahead).ok_or_else(|| eyre!("unexpected EOF"))
    }

    fn next(&mut self) -> Result<Token> {
        let t = self.toks.get(self.idx).cloned().ok_or_else(|| eyre!("unexpected EOF"))?;
        self.idx += 1;
        Ok(t)
    }

    fn expect(&mut self, t: Tok) -> Result<Token> {
        let got = self.next()?;
        if got.tok == t {
            Ok(got)
        } else {
            Err(eyre!("line {} col {}: expected {:?}, found '{}'", got.line, got.col, t, got.s))
        }
    }

    fn literal(&mut self) -> Result<String> {
        Ok(self.next()?.s)
    }

    fn number(&mut self) -> Result<f64> {
        let t = self.next()?;
        t.s.parse::<f64>().map_err(|_| eyre!("line {} col {}: expected number, found '{}'", t.line, t.col, t.s))
    }

    fn top_form(&mut self) -> Result<()> {
        self.expect(Tok::Lparen)?;
        match self.peek(0)?.tok {
            Tok::Rule => {
                let r = self.rule_body()?;
                self.file.rules.push(r);
            }
            Tok::Selector => {
                let s = self.selector_body()?;
                self.file.selectors.push(s);
            }
            _ => {
                let bad = self.peek(0)?.clone();
                return Err(eyre!("line {} col {}: unrecognised top-level form '{}'", bad.line, bad.col, bad.s));
            }
        }
        Ok(())
    }

    fn rule_body(&mut self) -> Result<Rule> {
        self.expect(Tok::Rule)?;
        let name = self.literal()?;
        let mut clearance = 0.0;
        let mut condition = None;
        while self.peek(0)?.tok != Tok::Rparen {
            self.expect(Tok::Lparen)?;
            match self.next()?.tok {
                Tok::Constraint => {
                    self.expect(Tok::Clearance)?;
                    self.expect(Tok::Lparen)?;
                    self.expect(Tok::Min)?;
                    clearance = self.number()?;
                    self.expect(Tok::Rparen)?;
                }
                Tok::Condition => {
                    condition = Some(self.literal()?);
                }
                other => return Err(eyre!("unrecognised rule clause {:?}", other)),
            }
            self.expect(Tok::Rparen)?;
        }
        self.expect(Tok::Rparen)?;
        Ok(Rule { name, clearance, condition })
    }

    fn selector_body(&mut self) -> Result<Selector> {
        self.expect(Tok::Selector)?;
        let mut s = Selector {
            match_layer: None,
            match_netclass: None,
            match_ref: None,
            match_item: None,
            rule_name: String::new(),
            file_order: self.file.selectors.len(),
        };
        while self.peek(0)?.tok != Tok::Rparen {
            self.expect(Tok::Lparen)?;
            match self.next()?.tok {
                Tok::MatchLayer => s.match_layer = Some(self.literal()?),
                Tok::MatchNetclass => s.match_netclass = Some(self.literal()?),
                Tok::MatchRef => s.match_ref = Some(self.literal()?),
                Tok::MatchItem => s.match_item = Some(self.literal()?),
                Tok::Rule => s.rule_name = self.literal()?,
                other => return Err(eyre!("unrecognised selector clause {:?}", other)),
            }
            self.expect(Tok::Rparen)?;
        }
        self.expect(Tok::Rparen)?;
        if s.rule_name.is_empty() {
            return Err(eyre!("selector is missing a (rule <name>) clause"));
        }
        Ok(s)
    }
}
