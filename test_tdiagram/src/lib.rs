/*  Testing library for the T-diagram simulator.
    Copyright (C) 2019 Charles Johnson

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

use proptest::{collection::vec, prelude::*};

// Checks if a string can be used as a single argument of a command
#[macro_export]
macro_rules! assume_token {
    ($a:ident) => {
        prop_assume!($a.len() > 0);
        prop_assume!(!$a.contains(char::is_whitespace));
    };
}

// Checks if all strings can each be used as an argument
#[macro_export]
macro_rules! assume_tokens {
	($($a:ident),*) => ($(assume_token!($a);)*)
}

// Common pattern in tests where a program is declared and the declaration must be confirmed.
#[macro_export]
macro_rules! declare_program {
    ($cont:ident, $name:ident, $language:ident) => {
        assume_tokens!($name, $language);
        let command = format!("DEFINIR PROGRAMA {} {}", $name, $language);
        prop_assert_eq!(
            $cont.execute(&command).to_string(),
            format!("Se definió el programa '{}', ejecutable en '{}'", $name, $language)
        );
    };
}

#[macro_export]
macro_rules! declare_interpreter {
    ($cont:ident, $host:ident, $interpreted:ident) => {
        assume_tokens!($host, $interpreted);
        let command = format!("DEFINIR INTERPRETE {} {}", $host, $interpreted);
        prop_assert_eq!(
            $cont.execute(&command).to_string(),
            format!("Se definió un intérprete para '{}', escrito en '{}'", $interpreted, $host)
        );
    };
}

#[macro_export]
macro_rules! declare_translator {
    ($cont:ident, $host:ident, $source:ident, $target:ident) => {
        assume_tokens!($host, $source, $target);
        let command = format!("DEFINIR TRADUCTOR {} {} {}", $host, $source, $target);
        prop_assert_eq!(
            $cont.execute(&command).to_string(),
            format!(
                "Se definió un traductor de '{}' hacia '{}', escrito en '{}'",
                $source, $target, $host
            )
        );
    };
}

// Asks whether a declared program is executable and checks the answer.
#[macro_export]
macro_rules! assert_executable {
    ($cont:ident, $name:ident, true) => {
        prop_assert_eq!(
            $cont.execute(&format!("EJECUTABLE {}", $name)).to_string(),
            format!("Si, es posible ejecutar el programa '{}'", $name)
        );
    };
    ($cont:ident, $name:ident, false) => {
        prop_assert_eq!(
            $cont.execute(&format!("EJECUTABLE {}", $name)).to_string(),
            format!("No es posible ejecutar el programa '{}'", $name)
        );
    };
}

/// An interpreter or translator declaration, as the command line that declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Interpreter {
        host: String,
        interpreted: String,
    },
    Translator {
        host: String,
        source: String,
        target: String,
    },
}

impl Rule {
    pub fn command(&self) -> String {
        match self {
            Rule::Interpreter {
                host,
                interpreted,
            } => format!("DEFINIR INTERPRETE {} {}", host, interpreted),
            Rule::Translator {
                host,
                source,
                target,
            } => format!("DEFINIR TRADUCTOR {} {} {}", host, source, target),
        }
    }
}

/// Languages drawn from a small alphabet so that generated rules chain, loop and collide often.
pub fn language() -> impl Strategy<Value = String> {
    prop_oneof![Just("LOCAL".to_string()), "[A-F]"]
}

pub fn rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        (language(), language()).prop_map(|(host, interpreted)| {
            Rule::Interpreter {
                host,
                interpreted,
            }
        }),
        (language(), language(), language()).prop_map(
            |(host, source, target)| Rule::Translator {
                host,
                source,
                target,
            }
        ),
    ]
}

pub fn rules(max: usize) -> impl Strategy<Value = Vec<Rule>> {
    vec(rule(), 0..max)
}
