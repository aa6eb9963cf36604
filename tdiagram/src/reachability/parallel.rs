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
    facts::{Fact, Interpreter, Translator},
    language::Language,
};
use log::trace;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::collections::HashSet;

/// Like `NaiveRelaxation`, but each round checks every rule in parallel against the set found by
/// the previous round. Everything found in a round is added at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParallelRelaxation;

impl Reachability for ParallelRelaxation {
    fn observe(&mut self, _: &FactStore, _: &Fact) {}

    fn executable_languages(&self, facts: &FactStore) -> HashSet<Language> {
        let mut executable = HashSet::new();
        executable.insert(Language::local());
        let mut round = 0;
        loop {
            round += 1;
            let found = consequents(
                &executable,
                facts.interpreters(),
                facts.translators(),
            );
            trace!("Parallel round {} found {} new languages", round, found.len());
            if found.is_empty() {
                return executable;
            }
            executable.extend(found);
        }
    }
}

/// Languages not yet in `executable` that some rule would make executable.
fn consequents(
    executable: &HashSet<Language>,
    interpreters: &[Interpreter],
    translators: &[Translator],
) -> HashSet<Language> {
    let interpreted = interpreters.par_iter().filter_map(|i| {
        if executable.contains(&i.host) && !executable.contains(&i.interpreted)
        {
            Some(i.interpreted.clone())
        } else {
            None
        }
    });
    let translated = translators.par_iter().filter_map(|t| {
        if executable.contains(&t.host)
            && executable.contains(&t.source)
            && !executable.contains(&t.target)
        {
            Some(t.target.clone())
        } else {
            None
        }
    });
    interpreted.chain(translated).collect()
}
