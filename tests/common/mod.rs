//! Shared scaffolding for harness integration tests: a deterministic stub
//! parser and a scratch fixture-tree writer.

use std::fs;
use std::path::Path;

use gauntlet::{ParserUnderTest, ToSexp};

/// Node kinds the stub parser produces.
pub enum StubNode {
    Word(String),
    ExtGlob(String),
}

impl ToSexp for StubNode {
    fn to_sexp(&self) -> String {
        match self {
            StubNode::Word(word) => format!("(word {})", word),
            StubNode::ExtGlob(glob) => format!("(extglob {})", glob),
        }
    }
}

/// Whitespace-token parser with deterministic failure triggers: tokens
/// starting with `!` are rejected, and `?(` tokens are rejected unless
/// extglob mode is on.
pub struct StubParser;

impl ParserUnderTest for StubParser {
    type Node = StubNode;
    type Error = String;

    fn parse(&self, input: &str, extglob: bool) -> Result<Vec<StubNode>, String> {
        let mut nodes = Vec::new();
        for token in input.split_whitespace() {
            if token.starts_with('!') {
                return Err(format!("unexpected token '{}'", token));
            }
            if token.starts_with("?(") {
                if !extglob {
                    return Err(format!("extglob disabled at '{}'", token));
                }
                nodes.push(StubNode::ExtGlob(token.to_string()));
            } else {
                nodes.push(StubNode::Word(token.to_string()));
            }
        }
        Ok(nodes)
    }
}

/// Writes one fixture file, creating parent directories as needed.
pub fn write_fixture(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
