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
use log::{debug, trace};
use std::collections::HashSet;

/// Recomputes the executable set from `{LOCAL}` on every query and keeps no state between them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveRelaxation;

impl Reachability for NaiveRelaxation {
    fn observe(&mut self, _: &FactStore, _: &Fact) {}

    fn executable_languages(&self, facts: &FactStore) -> HashSet<Language> {
        least_fixpoint(facts.interpreters(), facts.translators())
    }
}

/// Scans every rule, in the order given, until a whole pass makes nothing new executable.
pub fn least_fixpoint(
    interpreters: &[Interpreter],
    translators: &[Translator],
) -> HashSet<Language> {
    let mut executable = HashSet::new();
    executable.insert(Language::local());
    let mut round = 0;
    loop {
        round += 1;
        let mut changed = false;
        for Interpreter {
            host,
            interpreted,
        } in interpreters
        {
            if executable.contains(host) && !executable.contains(interpreted) {
                debug!("{} is executable through an interpreter written in {}", interpreted, host);
                executable.insert(interpreted.clone());
                changed = true;
            }
        }
        for Translator {
            host,
            source,
            target,
        } in translators
        {
            if executable.contains(host)
                && executable.contains(source)
                && !executable.contains(target)
            {
                debug!(
                    "{} is executable through a translator from {} written in {}",
                    target, source, host
                );
                executable.insert(target.clone());
                changed = true;
            }
        }
        trace!("Relaxation round {} found {} executable languages", round, executable.len());
        if !changed {
            return executable;
        }
    }
}
