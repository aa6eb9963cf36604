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

//! Deciding which languages can ultimately be run on the machine.
//!
//! Languages are propositions, `LOCAL` is an axiom, and the declared facts are rules:
//! an interpreter makes its interpreted language true whenever its host is true, and a translator
//! makes its target true whenever both its host and its source are true. The executable set is the
//! least fixpoint of these rules. The strategies below differ only in how they reach it.

mod incremental;
mod naive;
mod parallel;

pub use incremental::IncrementalClosure;
pub use naive::{least_fixpoint, NaiveRelaxation};
pub use parallel::ParallelRelaxation;

use crate::{
    errors::TDiagramError, fact_store::FactStore, facts::Fact,
    language::Language,
};
use std::{
    collections::HashSet,
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// A way of computing the executable languages of a growing fact store.
pub trait Reachability: Debug {
    /// Called after `fact` has been appended to `facts`.
    fn observe(&mut self, facts: &FactStore, fact: &Fact);

    /// The least set of languages containing `LOCAL` that is closed under every interpreter and
    /// translator in `facts`.
    fn executable_languages(&self, facts: &FactStore) -> HashSet<Language>;

    fn is_language_executable(
        &self,
        facts: &FactStore,
        language: &Language,
    ) -> bool {
        self.executable_languages(facts).contains(language)
    }
}

/// Which `Reachability` implementation a session uses. All of them give the same answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Rescan every rule from `{LOCAL}` on each query.
    Naive,
    /// Maintain the executable set as facts arrive.
    Incremental,
    /// Rescan every rule on each query, with each round scanned in parallel.
    Parallel,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Incremental
    }
}

impl Strategy {
    pub const ALL: [Strategy; 3] =
        [Strategy::Naive, Strategy::Incremental, Strategy::Parallel];

    /// A fresh engine that has observed nothing yet.
    pub fn engine(self) -> Box<dyn Reachability + Send + Sync> {
        match self {
            Strategy::Naive => Box::new(NaiveRelaxation),
            Strategy::Incremental => Box::new(IncrementalClosure::default()),
            Strategy::Parallel => Box::new(ParallelRelaxation),
        }
    }
}

impl FromStr for Strategy {
    type Err = TDiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "incremental" => Ok(Strategy::Incremental),
            "parallel" => Ok(Strategy::Parallel),
            _ => Err(TDiagramError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Strategy::Naive => "naive",
            Strategy::Incremental => "incremental",
            Strategy::Parallel => "parallel",
        })
    }
}
