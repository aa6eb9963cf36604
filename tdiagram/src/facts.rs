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

use crate::language::Language;
use std::fmt::{self, Display, Formatter};

/// A named program written in some language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    pub name: String,
    pub language: Language,
}

/// A program written in `host` that can run any program written in `interpreted`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interpreter {
    pub host: Language,
    pub interpreted: Language,
}

/// A program written in `host` that rewrites `source` programs into `target` programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Translator {
    pub host: Language,
    pub source: Language,
    pub target: Language,
}

impl Program {
    pub fn new(name: impl Into<String>, language: impl Into<Language>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}

impl Interpreter {
    pub fn new(
        host: impl Into<Language>,
        interpreted: impl Into<Language>,
    ) -> Self {
        Self {
            host: host.into(),
            interpreted: interpreted.into(),
        }
    }
}

impl Translator {
    pub fn new(
        host: impl Into<Language>,
        source: impl Into<Language>,
        target: impl Into<Language>,
    ) -> Self {
        Self {
            host: host.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// The distinct languages that must all be executable before `target` is.
    pub fn antecedents(&self) -> impl Iterator<Item = &Language> {
        let source = if self.source == self.host {
            None
        } else {
            Some(&self.source)
        };
        std::iter::once(&self.host).chain(source)
    }
}

/// A single declaration appended to the fact store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fact {
    Program(Program),
    Interpreter(Interpreter),
    Translator(Translator),
}

impl From<Program> for Fact {
    fn from(p: Program) -> Self {
        Fact::Program(p)
    }
}

impl From<Interpreter> for Fact {
    fn from(i: Interpreter) -> Self {
        Fact::Interpreter(i)
    }
}

impl From<Translator> for Fact {
    fn from(t: Translator) -> Self {
        Fact::Translator(t)
    }
}

impl Display for Fact {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Fact::Program(Program {
                name,
                language,
            }) => write!(
                f,
                "Se definió el programa '{}', ejecutable en '{}'",
                name, language
            ),
            Fact::Interpreter(Interpreter {
                host,
                interpreted,
            }) => write!(
                f,
                "Se definió un intérprete para '{}', escrito en '{}'",
                interpreted, host
            ),
            Fact::Translator(Translator {
                host,
                source,
                target,
            }) => write!(
                f,
                "Se definió un traductor de '{}' hacia '{}', escrito en '{}'",
                source, target, host
            ),
        }
    }
}
