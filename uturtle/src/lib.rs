// turtleworld/uturtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A small command language for driving turtles.

#[macro_use]
extern crate lalrpop_util;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub mod ast;

lalrpop_mod!(pub turtle); // synthesized by LALRPOP

pub type Parser = turtle::TopLevelParser;

pub use crate::ast::{Command, Program};

// Only whole-line comments, so `#` stays usable inside quoted text.
static COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#.*$").expect("comment pattern is valid"));

/// Parses a whole program. Lines whose first non-blank character is `#`
/// are comments.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let source = COMMENTS.replace_all(source, "");
    Parser::new()
        .parse(&source)
        .map_err(|err| ParseError::new(err.to_string()))
}

#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    fn new(message: String) -> ParseError {
        ParseError { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[test]
fn turtle_command_parser() {
    assert!(turtle::CommandParser::new().parse("penup").is_ok());
    assert!(turtle::CommandParser::new().parse("pendown").is_ok());
    assert!(turtle::CommandParser::new().parse("turnleft").is_ok());
    assert!(turtle::CommandParser::new().parse("turnleft 22.7").is_ok());
    assert!(turtle::CommandParser::new().parse("turnright").is_ok());
    assert!(turtle::CommandParser::new().parse("turnright 12.3").is_ok());
    assert!(turtle::CommandParser::new().parse("forward 20").is_ok());
    assert!(turtle::CommandParser::new().parse("forward -3").is_ok());
    assert!(turtle::CommandParser::new().parse("direction 270").is_ok());
    assert!(turtle::CommandParser::new().parse("pushloc").is_ok());
    assert!(turtle::CommandParser::new().parse("poploc").is_ok());
    assert!(turtle::CommandParser::new().parse("pushrot").is_ok());
    assert!(turtle::CommandParser::new().parse("poprot").is_ok());
    assert!(turtle::CommandParser::new().parse("go 1 3").is_ok());
    assert!(turtle::CommandParser::new().parse("gox 5").is_ok());
    assert!(turtle::CommandParser::new().parse("goy 44").is_ok());
    assert!(turtle::CommandParser::new().parse("speed 1").is_ok());
    assert!(turtle::CommandParser::new().parse("animate on").is_ok());
    assert!(turtle::CommandParser::new().parse("animate off").is_ok());
    assert!(turtle::CommandParser::new().parse("print \"hi there\"").is_ok());
    assert!(turtle::CommandParser::new().parse("write \"a\tb\"").is_ok());
    assert!(turtle::CommandParser::new()
        .parse("pencolor 255,128 ,    128")
        .is_ok());

    assert!(turtle::CommandParser::new().parse("bleh").is_err());
    assert!(turtle::CommandParser::new().parse("penup pendown").is_err());
    assert!(turtle::CommandParser::new().parse("pushloc 22").is_err());
    assert!(turtle::CommandParser::new().parse("forward 2.5").is_err());
    assert!(turtle::CommandParser::new().parse("animate maybe").is_err());
    assert!(turtle::CommandParser::new()
        .parse("pencolor 255,128")
        .is_err());
    assert!(turtle::CommandParser::new()
        .parse("pencolor 256,0,0")
        .is_err());
}

#[test]
fn turtle_command_values() {
    let parser = turtle::CommandParser::new();
    assert_eq!(parser.parse("turnleft").unwrap(), Command::TurnLeft(90.0));
    assert_eq!(parser.parse("turnright 12.5").unwrap(), Command::TurnRight(12.5));
    assert_eq!(parser.parse("go -4 7").unwrap(), Command::Go(-4, 7));
    assert_eq!(parser.parse("pencolor 1, 2, 3").unwrap(), Command::PenColor(1, 2, 3));
    assert_eq!(
        parser.parse("print \"TurtleID # 1\"").unwrap(),
        Command::Print("TurtleID # 1".to_owned())
    );
}

#[test]
fn turtle_program_parser() {
    assert!(turtle::TopLevelParser::new()
        .parse("turnright turnright 12.3 turnleft")
        .is_ok());
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn turtle_program_with_comments() {
    let program = parse("# a square\nforward 10\n  # corner\nturnleft\nprint \"#1\"\n").unwrap();
    assert_eq!(
        program,
        vec![
            Command::Forward(10),
            Command::TurnLeft(90.0),
            Command::Print("#1".to_owned()),
        ]
    );
}

#[test]
fn turtle_program_errors_are_readable() {
    let err = parse("forward ten").unwrap_err();
    assert!(!err.message().is_empty());
    assert_eq!(err.to_string(), err.message());
    assert!(std::error::Error::source(&err).is_none());
}

#[test]
fn turtle_program_parses_repeatedly() {
    let source = "# header\nforward 5\n# footer\n";
    for _ in 0..3 {
        assert_eq!(parse(source).unwrap(), vec![Command::Forward(5)]);
    }
    assert!(parse("# only a comment").unwrap().is_empty());
}
