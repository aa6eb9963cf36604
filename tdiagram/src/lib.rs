/*  Library for the T-diagram simulator.
    Copyright (C) 2018 to 2019 Charles Johnson

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program. If not, see <http://www.gnu.org/licenses/>.
*/

//! # Simulator for T-diagrams
//! A machine natively runs one language, `LOCAL`. Programs are declared in arbitrary languages,
//! along with interpreters (programs written in one language that run programs of another) and
//! translators (programs written in one language that rewrite programs from a source language into
//! a target language). The simulator answers whether a declared program can ultimately be run on
//! the machine.
//!
//! A language is executable if it is `LOCAL`, if an interpreter for it is written in an executable
//! language, or if a translator into it is written in an executable language and translates from
//! an executable language. Facts are only ever added, so the set of executable languages only
//! grows. Cycles of interpreters and translators are fine: they make their languages executable
//! together or not at all.
//!
//! Commands are sent to a `Context` one line at a time, the same way the interactive shell
//! [ITDiagram](https://github.com/Charles-Johnson/zia_programming) does.
//!
//! # Examples
//!
//! ```
//! extern crate tdiagram;
//! use tdiagram::{Context, TDiagramError};
//!
//! let mut context = Context::new();
//!
//! // Programs written in the machine's language are executable
//! context.execute("DEFINIR PROGRAMA fibonacci LOCAL");
//! assert_eq!(
//!     context.execute("EJECUTABLE fibonacci").to_string(),
//!     "Si, es posible ejecutar el programa 'fibonacci'"
//! );
//!
//! // A Java program needs a way to run Java
//! context.execute("DEFINIR PROGRAMA factorial Java");
//! assert_eq!(
//!     context.execute("EJECUTABLE factorial").to_string(),
//!     "No es posible ejecutar el programa 'factorial'"
//! );
//!
//! // An interpreter for C written in LOCAL and one for Java written in C
//! context.execute("DEFINIR INTERPRETE LOCAL C");
//! context.execute("DEFINIR INTERPRETE C Java");
//! assert_eq!(context.is_executable("factorial"), Ok(true));
//!
//! // Names are unique
//! assert_eq!(
//!     context.execute("DEFINIR PROGRAMA factorial Python").to_string(),
//!     TDiagramError::DuplicateName { name: "factorial".to_string() }.to_string()
//! );
//!
//! // Asking about a program that doesn't exist is an error, not a "no"
//! assert_eq!(
//!     context.is_executable("holamundo"),
//!     Err(TDiagramError::NotFound { name: "holamundo".to_string() })
//! );
//! ```

/// Reserved words of the command protocol and the name of the machine's language.
pub mod constants;

/// The session that owns the facts and answers commands.
mod context;

/// The errors that users could make when declaring, querying or typing commands.
mod errors;

/// Append-only storage of declarations.
mod fact_store;

/// Programs, interpreters and translators.
mod facts;

mod language;

/// A session behind a reader/writer lock for several clients.
pub mod multi_threaded;

/// Turns command lines into commands.
mod parser;

/// Strategies for computing the executable languages.
pub mod reachability;

pub use context::{Context, Reply};
pub use errors::{TDiagramError, TDiagramResult};
pub use fact_store::FactStore;
pub use facts::{Fact, Interpreter, Program, Translator};
pub use language::Language;
pub use parser::{parse_line, Command};
pub use reachability::{Reachability, Strategy};
