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
    errors::{TDiagramError, TDiagramResult},
    fact_store::FactStore,
    facts::{Fact, Interpreter, Program, Translator},
    language::Language,
    parser::{parse_line, Command},
    reachability::{Reachability, Strategy},
};
use log::info;
use std::{
    collections::HashSet,
    fmt::{self, Debug, Display, Formatter},
};

/// One interactive session: the facts declared so far and the engine deciding what they make
/// executable.
pub struct Context {
    facts: FactStore,
    engine: Box<dyn Reachability + Send + Sync>,
    strategy: Strategy,
}

/// What the session has to say in response to a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Defined(Fact),
    Executable {
        program: String,
        executable: bool,
    },
    Failed(TDiagramError),
    /// Nothing to report, e.g. for a blank line.
    Silent,
    Exit,
}

impl Display for Reply {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Reply::Defined(fact) => write!(f, "{}", fact),
            Reply::Executable {
                program,
                executable: true,
            } => write!(f, "Si, es posible ejecutar el programa '{}'", program),
            Reply::Executable {
                program,
                executable: false,
            } => write!(f, "No es posible ejecutar el programa '{}'", program),
            Reply::Failed(error) => write!(f, "{}", error),
            Reply::Silent | Reply::Exit => Ok(()),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::with_strategy(Strategy::default())
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Context")
            .field("facts", &self.facts)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        info!("New session using the {} strategy", strategy);
        Self {
            facts: FactStore::default(),
            engine: strategy.engine(),
            strategy,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    /// Appends `fact` to the store and lets the engine see it. A rejected fact reaches neither.
    pub fn declare(&mut self, fact: Fact) -> TDiagramResult<()> {
        self.facts.insert(fact.clone())?;
        self.engine.observe(&self.facts, &fact);
        Ok(())
    }

    pub fn declare_program(
        &mut self,
        name: &str,
        language: &str,
    ) -> TDiagramResult<()> {
        self.declare(Program::new(name, language).into())
    }

    pub fn declare_interpreter(&mut self, host: &str, interpreted: &str) {
        let interpreter = Interpreter::new(host, interpreted);
        self.facts.add_interpreter(interpreter.clone());
        self.engine.observe(&self.facts, &interpreter.into());
    }

    pub fn declare_translator(
        &mut self,
        host: &str,
        source: &str,
        target: &str,
    ) {
        let translator = Translator::new(host, source, target);
        self.facts.add_translator(translator.clone());
        self.engine.observe(&self.facts, &translator.into());
    }

    pub fn lookup_program(&self, name: &str) -> TDiagramResult<&Program> {
        self.facts.lookup_program(name)
    }

    /// Whether the language of the program called `name` is executable. Unreachability is
    /// `Ok(false)`; only an undeclared name is an error.
    pub fn is_executable(&self, name: &str) -> TDiagramResult<bool> {
        let program = self.facts.lookup_program(name)?;
        Ok(self.is_language_executable(&program.language))
    }

    pub fn is_language_executable(&self, language: &Language) -> bool {
        self.engine.is_language_executable(&self.facts, language)
    }

    pub fn executable_languages(&self) -> HashSet<Language> {
        self.engine.executable_languages(&self.facts)
    }

    /// Runs one line of the command protocol. Errors are reported in the reply and never end the
    /// session.
    pub fn execute(&mut self, line: &str) -> Reply {
        match parse_line(line) {
            Ok(None) => Reply::Silent,
            Ok(Some(command)) => self.run(command),
            Err(error) => Reply::Failed(error),
        }
    }

    pub fn run(&mut self, command: Command) -> Reply {
        match command {
            Command::Exit => Reply::Exit,
            Command::Declare(fact) => match self.declare(fact.clone()) {
                Ok(()) => Reply::Defined(fact),
                Err(error) => Reply::Failed(error),
            },
            Command::Query {
                program,
            } => match self.is_executable(&program) {
                Ok(executable) => Reply::Executable {
                    program,
                    executable,
                },
                Err(error) => Reply::Failed(error),
            },
        }
    }
}
