//! Line based parser for route maps. Each non-empty line holds one
//! declaration, `#` starts a comment that runs to the end of the line:
//!
//! ```text
//! start Arad
//! goal Bucharest
//! edge Arad Sibiu 140      # one way road
//! link Sibiu Fagaras 99    # road in both directions
//! estimate Sibiu 253
//! node Nowhere
//! ```

use crate::domains::ParseError;
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{alpha1, alphanumeric1, char, line_ending, space0, space1},
    combinator::{eof, map, opt, recognize},
    multi::many0_count,
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated, tuple},
};

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

type ParseResult<'a, T> =
    nom::IResult<Span<'a>, T, nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>>;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Declaration<'a> {
    Start(&'a str),
    Goal(&'a str),
    Node(&'a str),
    Road {
        from: &'a str,
        to: &'a str,
        cost: f64,
        both_ways: bool,
    },
    Estimate {
        node: &'a str,
        value: f64,
    },
}

fn parse_name(input: Span) -> ParseResult<&str> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0_count(alt((alphanumeric1, tag("_"), tag("-")))),
        )),
        |span: Span| *span.fragment(),
    )(input)
}

fn keyword<'a>(word: &'static str) -> impl FnMut(Span<'a>) -> ParseResult<'a, Span<'a>> {
    terminated(tag(word), space1)
}

fn parse_road(input: Span) -> ParseResult<Declaration> {
    map(
        tuple((
            alt((
                map(keyword("edge"), |_| false),
                map(keyword("link"), |_| true),
            )),
            parse_name,
            preceded(space1, parse_name),
            preceded(space1, double),
        )),
        |(both_ways, from, to, cost)| Declaration::Road {
            from,
            to,
            cost,
            both_ways,
        },
    )(input)
}

fn parse_declaration(input: Span) -> ParseResult<Declaration> {
    alt((
        map(preceded(keyword("start"), parse_name), Declaration::Start),
        map(preceded(keyword("goal"), parse_name), Declaration::Goal),
        map(preceded(keyword("node"), parse_name), Declaration::Node),
        parse_road,
        map(
            pair(preceded(keyword("estimate"), parse_name), preceded(space1, double)),
            |(node, value)| Declaration::Estimate { node, value },
        ),
    ))(input)
}

fn parse_comment(input: Span) -> ParseResult<()> {
    map(pair(char('#'), opt(is_not("\r\n"))), |_| ())(input)
}

fn parse_line(input: Span) -> ParseResult<Option<Declaration>> {
    terminated(
        delimited(space0, opt(parse_declaration), pair(space0, opt(parse_comment))),
        alt((line_ending, eof)),
    )(input)
}

/// Parse every declaration of `text`, paired with the line it appears on.
pub(super) fn parse_declarations(text: &str) -> Result<Vec<(u32, Declaration)>, ParseError> {
    let mut declarations = vec![];
    let mut input = Span::new(text);
    while !input.fragment().is_empty() {
        let line = input.location_line();
        let (remainder, declaration) = parse_line(input).map_err(|_| ParseError::Syntax {
            line,
            text: input.fragment().lines().next().unwrap_or_default().to_string(),
        })?;
        if let Some(declaration) = declaration {
            declarations.push((line, declaration));
        }
        input = remainder;
    }
    Ok(declarations)
}
