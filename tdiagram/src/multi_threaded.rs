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
    context::{Context, Reply},
    errors::TDiagramResult,
    facts::Program,
    language::Language,
    reachability::Strategy,
};
use parking_lot::RwLock;
use std::{collections::HashSet, sync::Arc};

/// A session that several clients can hold at once.
///
/// Declarations take the write lock for the whole of the store update and the engine update, so
/// readers only ever see a session in which every declaration has been fully applied.
#[derive(Clone, Default, Debug)]
pub struct SharedContext(Arc<RwLock<Context>>);

impl From<Context> for SharedContext {
    fn from(context: Context) -> Self {
        Self(Arc::new(RwLock::new(context)))
    }
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Context::with_strategy(strategy).into()
    }

    pub fn declare_program(&self, name: &str, language: &str) -> TDiagramResult<()> {
        self.0.write().declare_program(name, language)
    }

    pub fn declare_interpreter(&self, host: &str, interpreted: &str) {
        self.0.write().declare_interpreter(host, interpreted)
    }

    pub fn declare_translator(&self, host: &str, source: &str, target: &str) {
        self.0.write().declare_translator(host, source, target)
    }

    pub fn lookup_program(&self, name: &str) -> TDiagramResult<Program> {
        self.0.read().lookup_program(name).map(Program::clone)
    }

    pub fn is_executable(&self, name: &str) -> TDiagramResult<bool> {
        self.0.read().is_executable(name)
    }

    pub fn executable_languages(&self) -> HashSet<Language> {
        self.0.read().executable_languages()
    }

    pub fn execute(&self, line: &str) -> Reply {
        self.0.write().execute(line)
    }

    /// Runs `f` against one consistent snapshot of the session.
    pub fn read<R>(&self, f: impl FnOnce(&Context) -> R) -> R {
        let context = self.0.read();
        f(&*context)
    }
}
