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

use thiserror::Error;

pub type TDiagramResult<T> = Result<T, TDiagramError>;

/// All the expected ways a declaration, a query or a command line could be rejected.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum TDiagramError {
    /// When declaring a program with a name that is already taken.
    #[error("ERROR: Ya existe un programa con el nombre '{name}'")]
    DuplicateName {
        name: String,
    },
    /// When looking up a program that was never declared.
    #[error("ERROR: No existe un programa con el nombre '{name}'")]
    NotFound {
        name: String,
    },
    /// When `DEFINIR` is not followed by a kind and at least one argument.
    #[error("ERROR: Comando DEFINIR incompleto")]
    IncompleteDefinition,
    /// When a command has the wrong number of arguments.
    #[error("ERROR: {usage}")]
    WrongArity {
        usage: &'static str,
    },
    /// When `DEFINIR` is followed by something other than a program, interpreter or translator.
    #[error("ERROR: Tipo desconocido '{kind}'")]
    UnknownKind {
        kind: String,
    },
    #[error("ERROR: Comando desconocido '{verb}'")]
    UnknownCommand {
        verb: String,
    },
    /// When configuring a session with a strategy name that doesn't exist.
    #[error("ERROR: Estrategia desconocida '{name}' (naive, incremental o parallel)")]
    UnknownStrategy {
        name: String,
    },
}

impl TDiagramError {
    /// Whether the error comes from a malformed command line rather than from the fact store.
    pub fn is_usage(&self) -> bool {
        !matches!(
            self,
            TDiagramError::DuplicateName {
                ..
            } | TDiagramError::NotFound {
                ..
            }
        )
    }
}
