// ITDiagram: Interactive Shell for the T-diagram simulator.
// Copyright (C) 2018 to 2019 Charles Johnson
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
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! # Interactive Shell for the T-diagram simulator.

extern crate linefeed;
extern crate tdiagram;

use clap::Parser;
use linefeed::{Interface, ReadResult};
use log::{debug, Level};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    path::PathBuf,
};
use tdiagram::{Context, Reply, Strategy};

const BANNER: &str = "Simulador de Diagramas T
Comandos disponibles:
  DEFINIR PROGRAMA <nombre> <lenguaje>
  DEFINIR INTERPRETE <lenguaje_base> <lenguaje>
  DEFINIR TRADUCTOR <lenguaje_base> <lenguaje_origen> <lenguaje_destino>
  EJECUTABLE <nombre>
  SALIR
";

const PROMPT: &str = "$> ";

/// Decide whether programs can run on a machine through chains of interpreters and translators
#[derive(Parser, Debug)]
#[command(name = "itdiagram", version)]
struct Cli {
    /// How executable languages are computed: naive, incremental or parallel
    #[arg(long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Most verbose level of log messages to show
    #[arg(long, default_value_t = Level::Warn)]
    log_level: Level,

    /// Don't print the list of commands on start up
    #[arg(long, short)]
    quiet: bool,

    /// Read commands from this file instead of standard input
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = simple_logger::init_with_level(cli.log_level) {
        eprintln!("{}", error);
    }
    if !cli.quiet {
        println!("{}", BANNER);
    }
    let mut context = Context::with_strategy(cli.strategy);
    let result = match &cli.script {
        Some(path) => File::open(path).and_then(|file| {
            read_lines(&mut context, BufReader::new(file), false, &mut io::stdout())
        }),
        None if io::stdin().is_terminal() => read_terminal(&mut context),
        None => {
            read_lines(&mut context, io::stdin().lock(), true, &mut io::stdout())
        },
    };
    if let Err(error) = result {
        eprintln!("Error leyendo entrada: {}", error);
    }
    debug!("Session ended with {:?}", context.facts());
}

// Writes the reply, if any, and returns whether the session continues.
fn respond(
    context: &mut Context,
    line: &str,
    output: &mut impl Write,
) -> io::Result<bool> {
    match context.execute(line) {
        Reply::Exit => Ok(false),
        Reply::Silent => Ok(true),
        reply => {
            writeln!(output, "{}", reply)?;
            Ok(true)
        },
    }
}

fn read_terminal(context: &mut Context) -> io::Result<()> {
    let reader = Interface::new("ITDiagram")?;
    reader.set_prompt(PROMPT)?;
    let mut stdout = io::stdout();
    while let ReadResult::Input(input) = reader.read_line()? {
        if !input.trim().is_empty() {
            reader.add_history_unique(input.clone());
        }
        if !respond(context, &input, &mut stdout)? {
            break;
        }
    }
    Ok(())
}

/// Prompts (if asked to) before every read, including the one that finds the end of the input.
/// Bytes that aren't UTF-8 are replaced rather than ending the session.
fn read_lines(
    context: &mut Context,
    mut input: impl BufRead,
    prompt: bool,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut buffer = Vec::new();
    loop {
        if prompt {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buffer);
        if !respond(context, &line, output)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_lines, PROMPT};
    use tdiagram::Context;

    fn session(input: &[u8], prompt: bool) -> String {
        let mut context = Context::new();
        let mut output = Vec::new();
        read_lines(&mut context, input, prompt, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prompt_comes_before_every_read() {
        assert_eq!(
            session(b"DEFINIR PROGRAMA p LOCAL\nEJECUTABLE p\n", true),
            format!(
                "{p}Se definió el programa 'p', ejecutable en 'LOCAL'\n\
                 {p}Si, es posible ejecutar el programa 'p'\n{p}",
                p = PROMPT
            )
        );
    }

    #[test]
    fn exit_stops_reading() {
        assert_eq!(
            session(b"SALIR\nEJECUTABLE p\n", true),
            PROMPT.to_string()
        );
    }

    #[test]
    fn scripts_have_no_prompt_and_last_line_needs_no_newline() {
        assert_eq!(
            session(b"\nEJECUTABLE p", false),
            "ERROR: No existe un programa con el nombre 'p'\n"
        );
    }

    #[test]
    fn invalid_utf8_does_not_end_the_session() {
        assert_eq!(
            session(b"DEFINIR PROGRAMA p \xffJava\nDEFINIR PROGRAMA q LOCAL\n", false),
            "Se definió el programa 'p', ejecutable en '\u{fffd}Java'\n\
             Se definió el programa 'q', ejecutable en 'LOCAL'\n"
        );
    }
}
