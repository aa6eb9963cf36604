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
#[macro_use]
extern crate proptest;
extern crate tdiagram;
extern crate test_tdiagram;

use proptest::prelude::*;
use std::collections::HashSet;
use tdiagram::{
    reachability::least_fixpoint, Context, Fact, Interpreter, Language,
    Reply, Strategy, Translator,
};
use test_tdiagram::{rule, rules, Rule};

fn declare_all(cont: &mut Context, rules: &[Rule]) {
    for rule in rules {
        assert!(matches!(cont.execute(&rule.command()), Reply::Defined(_)));
    }
}

fn split(rules: &[Rule]) -> (Vec<Interpreter>, Vec<Translator>) {
    let mut interpreters = vec![];
    let mut translators = vec![];
    for rule in rules {
        match rule {
            Rule::Interpreter {
                host,
                interpreted,
            } => interpreters.push(Interpreter::new(host.as_str(), interpreted.as_str())),
            Rule::Translator {
                host,
                source,
                target,
            } => translators.push(Translator::new(
                host.as_str(),
                source.as_str(),
                target.as_str(),
            )),
        }
    }
    (interpreters, translators)
}

proptest! {
    // LOCAL is executable whatever has been declared.
    #[test]
    fn local_is_always_executable(declared in rules(20)) {
        for strategy in Strategy::ALL.iter() {
            let mut cont = Context::with_strategy(*strategy);
            prop_assert!(cont.executable_languages().contains("LOCAL"));
            declare_all(&mut cont, &declared);
            prop_assert!(cont.executable_languages().contains("LOCAL"));
        }
    }
    // Declaring something never makes a language unexecutable.
    #[test]
    fn executable_set_only_grows(declared in rules(20)) {
        for strategy in Strategy::ALL.iter() {
            let mut cont = Context::with_strategy(*strategy);
            let mut before = cont.executable_languages();
            for rule in &declared {
                cont.execute(&rule.command());
                let after = cont.executable_languages();
                prop_assert!(before.is_subset(&after));
                before = after;
            }
        }
    }
    // The order rules are scanned in doesn't change the fixpoint.
    #[test]
    fn scan_order_is_irrelevant(declared in rules(20)) {
        let (mut interpreters, mut translators) = split(&declared);
        let forwards = least_fixpoint(&interpreters, &translators);
        interpreters.reverse();
        translators.reverse();
        prop_assert_eq!(least_fixpoint(&interpreters, &translators), forwards);
    }
    // Neither does the order in which they were declared, for any strategy.
    #[test]
    fn declaration_order_is_irrelevant(declared in rules(20), rotation in 0usize..20) {
        let mut rotated = declared.clone();
        if !rotated.is_empty() {
            let len = rotated.len();
            rotated.rotate_left(rotation % len);
        }
        for strategy in Strategy::ALL.iter() {
            let mut original = Context::with_strategy(*strategy);
            declare_all(&mut original, &declared);
            let mut reordered = Context::with_strategy(*strategy);
            declare_all(&mut reordered, &rotated);
            prop_assert_eq!(original.executable_languages(), reordered.executable_languages());
        }
    }
    // Every strategy reaches the same least fixpoint after every declaration.
    #[test]
    fn strategies_agree(declared in rules(25)) {
        let mut contexts: Vec<Context> =
            Strategy::ALL.iter().map(|s| Context::with_strategy(*s)).collect();
        for rule in &declared {
            for cont in contexts.iter_mut() {
                cont.execute(&rule.command());
            }
            let expected = contexts[0].executable_languages();
            for cont in &contexts[1..] {
                prop_assert_eq!(&cont.executable_languages(), &expected);
            }
        }
    }
    // The executable set is closed under every rule and never mentions undeclared languages.
    #[test]
    fn fixpoint_is_closed_and_bounded(declared in rules(20)) {
        let mut cont = Context::new();
        declare_all(&mut cont, &declared);
        let executable = cont.executable_languages();
        prop_assert!(executable.is_subset(&cont.facts().languages()));
        for interpreter in cont.facts().interpreters() {
            if executable.contains(&interpreter.host) {
                prop_assert!(executable.contains(&interpreter.interpreted));
            }
        }
        for translator in cont.facts().translators() {
            if executable.contains(&translator.host) && executable.contains(&translator.source) {
                prop_assert!(executable.contains(&translator.target));
            }
        }
    }
    // The fixpoint is the intersection of every rule-closed set of languages containing LOCAL.
    #[test]
    fn fixpoint_is_least(declared in rules(12)) {
        let (interpreters, translators) = split(&declared);
        let executable = least_fixpoint(&interpreters, &translators);
        let others: Vec<Language> =
            ["A", "B", "C", "D", "E", "F"].iter().map(|l| Language::from(*l)).collect();
        let mut intersection: Option<HashSet<Language>> = None;
        for mask in 0u32..(1 << others.len()) {
            let mut candidate: HashSet<Language> = others
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, l)| l.clone())
                .collect();
            candidate.insert(Language::local());
            let closed = interpreters
                .iter()
                .all(|i| !candidate.contains(&i.host) || candidate.contains(&i.interpreted))
                && translators.iter().all(|t| {
                    !(candidate.contains(&t.host) && candidate.contains(&t.source))
                        || candidate.contains(&t.target)
                });
            if closed {
                intersection = Some(match intersection {
                    None => candidate,
                    Some(so_far) => so_far.intersection(&candidate).cloned().collect(),
                });
            }
        }
        prop_assert_eq!(Some(executable), intersection);
    }
    // A translator whose host or source is missing never fires.
    #[test]
    fn translators_need_both_antecedents(host in "[A-F]", source in "[A-F]", target in "[G-K]") {
        prop_assume!(host != source);
        for strategy in Strategy::ALL.iter() {
            let mut cont = Context::with_strategy(*strategy);
            cont.declare_translator(&host, &source, &target);
            cont.declare_interpreter("LOCAL", &host);
            prop_assert!(!cont.is_language_executable(&target.as_str().into()));
            let mut cont = Context::with_strategy(*strategy);
            cont.declare_translator(&host, &source, &target);
            cont.declare_interpreter("LOCAL", &source);
            prop_assert!(!cont.is_language_executable(&target.as_str().into()));
            cont.declare_interpreter("LOCAL", &host);
            prop_assert!(cont.is_language_executable(&target.as_str().into()));
        }
    }
    // Any one executable host is enough for an interpreted language.
    #[test]
    fn any_interpreter_will_do(hosts in proptest::collection::vec("[A-F]", 1..6), chosen in 0usize..6) {
        let chosen = &hosts[chosen % hosts.len()];
        for strategy in Strategy::ALL.iter() {
            let mut cont = Context::with_strategy(*strategy);
            for host in &hosts {
                cont.declare_interpreter(host, "Z");
            }
            prop_assert!(!cont.is_language_executable(&"Z".into()));
            cont.declare_interpreter("LOCAL", chosen);
            prop_assert!(cont.is_language_executable(&"Z".into()));
        }
    }
    // Rules built entirely out of one closed ring of languages never reach LOCAL.
    #[test]
    fn ungrounded_cycles_terminate(len in 2usize..8, translated in any::<bool>()) {
        for strategy in Strategy::ALL.iter() {
            let mut cont = Context::with_strategy(*strategy);
            for i in 0..len {
                let from = format!("R{}", i);
                let to = format!("R{}", (i + 1) % len);
                if translated {
                    cont.declare_translator(&from, &from, &to);
                } else {
                    cont.declare_interpreter(&from, &to);
                }
            }
            let executable = cont.executable_languages();
            prop_assert_eq!(executable.len(), 1);
        }
    }
    // A single rule declared through the facts API or the command line has the same effect.
    #[test]
    fn commands_and_typed_declarations_agree(rule in rule()) {
        let mut by_command = Context::new();
        by_command.execute(&rule.command());
        let mut by_fact = Context::new();
        let fact: Fact = match &rule {
            Rule::Interpreter { host, interpreted } =>
                Interpreter::new(host.as_str(), interpreted.as_str()).into(),
            Rule::Translator { host, source, target } =>
                Translator::new(host.as_str(), source.as_str(), target.as_str()).into(),
        };
        prop_assert_eq!(by_fact.declare(fact), Ok(()));
        prop_assert_eq!(by_command.executable_languages(), by_fact.executable_languages());
    }
}
