//! Command-line language of a session.
//!
//! A line is a command name, optionally followed by one space and arguments
//! separated by single spaces. Empty arguments count, so `flow  A a b` has
//! four arguments.

use once_cell::sync::Lazy;
use regex::Regex;

use ef_core::{NetworkId, RoomId, parse_capacity};
use ef_graph::Section;

use crate::error::{AppError, AppResult};

/// `<room><capacity><room>`, capacity without sign, leading zeros allowed.
static SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-z]{1,6})(0*[1-9][0-9]*)([a-z]{1,6})$").expect("section pattern is valid")
});

const SECTION_SEPARATOR: char = ';';

/// A parsed, syntactically valid command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a network from sections, or add one section to an existing one.
    Add {
        network: NetworkId,
        sections: Vec<Section>,
    },
    /// Show a network's sections.
    Print { network: NetworkId },
    /// List all networks, or the cached flows of one network.
    List { network: Option<NetworkId> },
    /// Compute a maximum flow.
    Flow {
        network: NetworkId,
        start: RoomId,
        end: RoomId,
    },
    /// End the session.
    Quit,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> AppResult<Self> {
        let (name, args) = split_line(line);
        match name {
            "add" => {
                let [network, sections] = expect_args::<2>("add", "2", &args)?;
                Ok(Command::Add {
                    network: parse_network(network)?,
                    sections: parse_sections(sections)?,
                })
            }
            "print" => {
                let [network] = expect_args::<1>("print", "1", &args)?;
                Ok(Command::Print {
                    network: parse_network(network)?,
                })
            }
            "list" => match args.as_slice() {
                [] => Ok(Command::List { network: None }),
                [network] => Ok(Command::List {
                    network: Some(parse_network(network)?),
                }),
                _ => Err(AppError::ArgumentCount {
                    command: "list",
                    expected: "0 or 1",
                    got: args.len(),
                }),
            },
            "flow" => {
                let [network, start, end] = expect_args::<3>("flow", "3", &args)?;
                Ok(Command::Flow {
                    network: parse_network(network)?,
                    start: parse_room(start)?,
                    end: parse_room(end)?,
                })
            }
            "quit" => {
                expect_args::<0>("quit", "0", &args)?;
                Ok(Command::Quit)
            }
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

fn split_line(line: &str) -> (&str, Vec<&str>) {
    match line.split_once(' ') {
        Some((name, rest)) => (name, rest.split(' ').collect()),
        None => (line, Vec::new()),
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    expected: &'static str,
    args: &[&'a str],
) -> AppResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| AppError::ArgumentCount {
        command,
        expected,
        got: args.len(),
    })
}

fn parse_network(text: &str) -> AppResult<NetworkId> {
    NetworkId::parse(text)
        .map_err(|_| AppError::InvalidFormat(format!("{text:?} is not a network identifier")))
}

fn parse_room(text: &str) -> AppResult<RoomId> {
    RoomId::parse(text)
        .map_err(|_| AppError::InvalidFormat(format!("{text:?} is not a room identifier")))
}

/// Parse one `<room><capacity><room>` token.
pub fn parse_section(text: &str) -> AppResult<Section> {
    let caps = SECTION
        .captures(text)
        .ok_or_else(|| AppError::InvalidFormat(format!("{text:?} is not a section")))?;
    let source = RoomId::parse(&caps[1])?;
    let capacity = parse_capacity(&caps[2])?;
    let target = RoomId::parse(&caps[3])?;
    Ok(Section::new(source, target, capacity))
}

/// Parse a `;`-separated list of sections. Empty entries are malformed.
pub fn parse_sections(text: &str) -> AppResult<Vec<Section>> {
    text.split(SECTION_SEPARATOR).map(parse_section).collect()
}
