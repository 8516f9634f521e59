// The `drc-rules` project file grammar: a hand-written lexer and recursive
// descent parser in the same style as the board import format, plus the
// resolver that turns a parsed rule file into a per-pair clearance lookup.

pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod token;
pub mod types;

use eyre::Result;

pub use resolver::{resolve, ResolveSide, Resolved};
pub use types::{Rule, RuleFile, Selector};

// Loads and parses a `drc-rules` file. On any lexer or parser failure, the
// caller (the orchestrator) is expected to fall back to an empty `RuleFile`
// and surface the error as a diagnostic marker, per the engine's run order.
pub fn load_rules(src: &str) -> Result<RuleFile> {
    let toks = lexer::Lexer::new(src).lex()?;
    parser::Parser::new(toks).parse()
}
