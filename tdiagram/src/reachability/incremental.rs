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

use super::Reachability;
use crate::{
    fact_store::FactStore,
    facts::{Fact, Interpreter},
    language::Language,
};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Keeps the executable set up to date as facts arrive, so that queries are membership tests.
///
/// Rules that cannot fire yet are indexed by the languages they are waiting on. When a language
/// becomes executable it is pushed on a worklist, and popping it releases exactly the rules that
/// were waiting on it. Each rule is therefore touched a bounded number of times over the lifetime
/// of the session, however many queries are made.
#[derive(Debug, Clone)]
pub struct IncrementalClosure {
    executable: HashSet<Language>,
    /// Interpreted languages keyed by the host they are waiting on.
    interpreters_waiting_on: HashMap<Language, Vec<Language>>,
    pending_translators: Vec<PendingTranslator>,
    /// Indices into `pending_translators` keyed by each antecedent they are waiting on.
    translators_waiting_on: HashMap<Language, Vec<usize>>,
}

#[derive(Debug, Clone)]
struct PendingTranslator {
    target: Language,
    /// Antecedents not yet executable.
    missing: usize,
}

impl Default for IncrementalClosure {
    fn default() -> Self {
        let mut executable = HashSet::new();
        executable.insert(Language::local());
        Self {
            executable,
            interpreters_waiting_on: HashMap::new(),
            pending_translators: Vec::new(),
            translators_waiting_on: HashMap::new(),
        }
    }
}

impl IncrementalClosure {
    #[cfg(test)]
    fn executable(&self) -> &HashSet<Language> {
        &self.executable
    }

    /// Number of translators still waiting on at least one antecedent.
    #[cfg(test)]
    fn waiting_translators(&self) -> usize {
        self.pending_translators.iter().filter(|t| t.missing > 0).count()
    }

    fn mark(&mut self, language: &Language, worklist: &mut Vec<Language>) {
        if self.executable.insert(language.clone()) {
            debug!("{} became executable", language);
            worklist.push(language.clone());
        }
    }

    fn propagate(&mut self, mut worklist: Vec<Language>) {
        while let Some(language) = worklist.pop() {
            for interpreted in self
                .interpreters_waiting_on
                .remove(&language)
                .unwrap_or_default()
            {
                self.mark(&interpreted, &mut worklist);
            }
            for index in self
                .translators_waiting_on
                .remove(&language)
                .unwrap_or_default()
            {
                let pending = &mut self.pending_translators[index];
                pending.missing -= 1;
                if pending.missing == 0 {
                    let target = pending.target.clone();
                    self.mark(&target, &mut worklist);
                }
            }
        }
    }
}

impl Reachability for IncrementalClosure {
    fn observe(&mut self, _: &FactStore, fact: &Fact) {
        let mut worklist = Vec::new();
        match fact {
            Fact::Program(_) => return,
            Fact::Interpreter(Interpreter {
                host,
                interpreted,
            }) => {
                if self.executable.contains(host) {
                    self.mark(interpreted, &mut worklist);
                } else {
                    self.interpreters_waiting_on
                        .entry(host.clone())
                        .or_default()
                        .push(interpreted.clone());
                }
            },
            Fact::Translator(translator) => {
                let missing: Vec<Language> = translator
                    .antecedents()
                    .filter(|l| !self.executable.contains(*l))
                    .cloned()
                    .collect();
                if missing.is_empty() {
                    self.mark(&translator.target, &mut worklist);
                } else {
                    let index = self.pending_translators.len();
                    self.pending_translators.push(PendingTranslator {
                        target: translator.target.clone(),
                        missing: missing.len(),
                    });
                    for language in missing {
                        self.translators_waiting_on
                            .entry(language)
                            .or_default()
                            .push(index);
                    }
                }
            },
        }
        self.propagate(worklist);
    }

    fn executable_languages(&self, _: &FactStore) -> HashSet<Language> {
        self.executable.clone()
    }

    fn is_language_executable(&self, _: &FactStore, language: &Language) -> bool {
        self.executable.contains(language)
    }
}

#[cfg(test)]
mod tests {
    use super::IncrementalClosure;
    use crate::{
        fact_store::FactStore,
        facts::{Fact, Interpreter, Translator},
        language::Language,
        reachability::{least_fixpoint, Reachability},
    };
    use maplit::hashset;

    fn observe_all(facts: Vec<Fact>) -> (FactStore, IncrementalClosure) {
        let mut store = FactStore::default();
        let mut closure = IncrementalClosure::default();
        for fact in facts {
            store.insert(fact.clone()).unwrap();
            closure.observe(&store, &fact);
        }
        (store, closure)
    }

    #[test]
    fn chain_declared_from_the_top_down() {
        let (_, closure) = observe_all(vec![
            Interpreter::new("C", "D").into(),
            Interpreter::new("B", "C").into(),
            Interpreter::new("A", "B").into(),
        ]);
        assert_eq!(closure.executable(), &hashset! {Language::local()});
        let (_, closure) = observe_all(vec![
            Interpreter::new("C", "D").into(),
            Interpreter::new("B", "C").into(),
            Interpreter::new("A", "B").into(),
            Interpreter::new("LOCAL", "A").into(),
        ]);
        assert_eq!(
            closure.executable(),
            &hashset! {Language::local(), "A".into(), "B".into(), "C".into(), "D".into()}
        );
    }

    #[test]
    fn translator_fires_when_its_last_antecedent_arrives() {
        let (_, closure) = observe_all(vec![
            Translator::new("H", "S", "T").into(),
            Interpreter::new("LOCAL", "H").into(),
        ]);
        assert!(!closure.executable().contains("T"));
        assert_eq!(closure.waiting_translators(), 1);
        let (_, closure) = observe_all(vec![
            Translator::new("H", "S", "T").into(),
            Interpreter::new("LOCAL", "H").into(),
            Interpreter::new("H", "S").into(),
        ]);
        assert!(closure.executable().contains("T"));
        assert_eq!(closure.waiting_translators(), 0);
    }

    #[test]
    fn translator_whose_host_is_its_source_waits_on_one_language() {
        let (_, closure) = observe_all(vec![
            Translator::new("A", "A", "B").into(),
            Interpreter::new("LOCAL", "A").into(),
        ]);
        assert!(closure.executable().contains("B"));
    }

    #[test]
    fn identity_translator_is_harmless() {
        let (_, closure) = observe_all(vec![
            Translator::new("LOCAL", "A", "A").into(),
            Interpreter::new("LOCAL", "B").into(),
        ]);
        assert_eq!(closure.executable(), &hashset! {Language::local(), "B".into()});
    }

    #[test]
    fn ungrounded_cycle_stays_unexecutable() {
        let (store, closure) = observe_all(vec![
            Interpreter::new("LOCAL", "B").into(),
            Translator::new("B", "A", "C").into(),
            Translator::new("B", "C", "A").into(),
        ]);
        assert_eq!(closure.executable(), &hashset! {Language::local(), "B".into()});
        assert_eq!(
            closure.executable_languages(&store),
            least_fixpoint(store.interpreters(), store.translators())
        );
    }

    #[test]
    fn programs_change_nothing() {
        let (_, closure) = observe_all(vec![
            crate::facts::Program::new("p", "Java").into(),
        ]);
        assert_eq!(closure.executable(), &hashset! {Language::local()});
    }
}
