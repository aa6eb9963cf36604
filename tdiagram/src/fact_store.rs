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
    facts::{Fact, Interpreter, Program, Translator},
    language::Language,
};
use std::collections::{hash_map::Entry, HashMap, HashSet};

/// Append-only record of every program, interpreter and translator declared in a session.
#[derive(Default, Debug, Clone)]
pub struct FactStore {
    /// Programs keyed by their unique name.
    programs: HashMap<String, Program>,
    /// Kept in declaration order. Duplicates are stored as declared.
    interpreters: Vec<Interpreter>,
    translators: Vec<Translator>,
}

impl FactStore {
    /// Appends `fact`. Only a program whose name is already taken is rejected, in which case the
    /// store is left unchanged.
    pub fn insert(&mut self, fact: Fact) -> TDiagramResult<()> {
        match fact {
            Fact::Program(program) => {
                match self.programs.entry(program.name.clone()) {
                    Entry::Occupied(_) => Err(TDiagramError::DuplicateName {
                        name: program.name,
                    }),
                    Entry::Vacant(entry) => {
                        entry.insert(program);
                        Ok(())
                    },
                }
            },
            Fact::Interpreter(interpreter) => {
                self.add_interpreter(interpreter);
                Ok(())
            },
            Fact::Translator(translator) => {
                self.add_translator(translator);
                Ok(())
            },
        }
    }

    pub fn declare_program(
        &mut self,
        name: &str,
        language: &str,
    ) -> TDiagramResult<()> {
        self.insert(Program::new(name, language).into())
    }

    pub fn declare_interpreter(&mut self, host: &str, interpreted: &str) {
        self.add_interpreter(Interpreter::new(host, interpreted));
    }

    pub fn declare_translator(
        &mut self,
        host: &str,
        source: &str,
        target: &str,
    ) {
        self.add_translator(Translator::new(host, source, target));
    }

    pub fn add_interpreter(&mut self, interpreter: Interpreter) {
        self.interpreters.push(interpreter);
    }

    pub fn add_translator(&mut self, translator: Translator) {
        self.translators.push(translator);
    }

    pub fn lookup_program(&self, name: &str) -> TDiagramResult<&Program> {
        self.programs.get(name).ok_or_else(|| TDiagramError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.programs.values()
    }

    pub fn interpreters(&self) -> &[Interpreter] {
        &self.interpreters
    }

    pub fn translators(&self) -> &[Translator] {
        &self.translators
    }

    /// Every language mentioned by any fact, together with `LOCAL`. Bounds the executable set.
    pub fn languages(&self) -> HashSet<Language> {
        let mut languages = HashSet::new();
        languages.insert(Language::local());
        languages.extend(self.programs.values().map(|p| p.language.clone()));
        for Interpreter {
            host,
            interpreted,
        } in &self.interpreters
        {
            languages.insert(host.clone());
            languages.insert(interpreted.clone());
        }
        for Translator {
            host,
            source,
            target,
        } in &self.translators
        {
            languages.insert(host.clone());
            languages.insert(source.clone());
            languages.insert(target.clone());
        }
        languages
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
            && self.interpreters.is_empty()
            && self.translators.is_empty()
    }
}
