//  Library for the T-diagram simulator.
// Copyright (C) 2019 Charles Johnson
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use crate::{
    constants::{
        DEFINE, EXECUTABLE, EXECUTABLE_USAGE, EXIT, INTERPRETER,
        INTERPRETER_USAGE, PROGRAM, PROGRAM_USAGE, TRANSLATOR,
        TRANSLATOR_USAGE,
    },
    errors::{TDiagramError, TDiagramResult},
    facts::{Fact, Interpreter, Program, Translator},
};

/// A well-formed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Declare(Fact),
    Query {
        program: String,
    },
    Exit,
}

/// Splits `line` on whitespace and recognises the command. Verbs are case-insensitive, arguments
/// are kept as written. A blank line is `Ok(None)`.
pub fn parse_line(line: &str) -> TDiagramResult<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let verb = match tokens.first() {
        None => return Ok(None),
        Some(verb) => verb.to_uppercase(),
    };
    match verb.as_str() {
        EXIT => Ok(Some(Command::Exit)),
        DEFINE => parse_definition(&tokens).map(Some),
        EXECUTABLE => match tokens.as_slice() {
            [_, program] => Ok(Some(Command::Query {
                program: (*program).to_string(),
            })),
            _ => Err(TDiagramError::WrongArity {
                usage: EXECUTABLE_USAGE,
            }),
        },
        _ => Err(TDiagramError::UnknownCommand {
            verb,
        }),
    }
}

fn parse_definition(tokens: &[&str]) -> TDiagramResult<Command> {
    if tokens.len() < 3 {
        return Err(TDiagramError::IncompleteDefinition);
    }
    let kind = tokens[1].to_uppercase();
    let fact: Fact = match (kind.as_str(), &tokens[2..]) {
        (PROGRAM, [name, language]) => Program::new(*name, *language).into(),
        (PROGRAM, _) => {
            return Err(TDiagramError::WrongArity {
                usage: PROGRAM_USAGE,
            })
        },
        (INTERPRETER, [host, interpreted]) => {
            Interpreter::new(*host, *interpreted).into()
        },
        (INTERPRETER, _) => {
            return Err(TDiagramError::WrongArity {
                usage: INTERPRETER_USAGE,
            })
        },
        (TRANSLATOR, [host, source, target]) => {
            Translator::new(*host, *source, *target).into()
        },
        (TRANSLATOR, _) => {
            return Err(TDiagramError::WrongArity {
                usage: TRANSLATOR_USAGE,
            })
        },
        _ => {
            return Err(TDiagramError::UnknownKind {
                kind,
            })
        },
    };
    Ok(Command::Declare(fact))
}
