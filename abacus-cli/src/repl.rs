//! Interactive shell
//!
//! Reads one line at a time, scans it, and prints the tokens or the error.
//! Ends at end of input.

use std::io::{self, BufRead, Write};

use abacus_api::{tokenize, RunConfig};
use abacus_config::ReplConfig;
use tracing::debug;

use crate::platform::{render_error, render_tokens};

pub fn run<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    repl: &ReplConfig,
    config: &RunConfig,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "{}", repl.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            debug!(target: "abacus::cli", "End of shell input");
            return Ok(());
        }

        let text = line.trim_end_matches(|c| c == '\n' || c == '\r');
        match tokenize(&repl.file_name, text, config) {
            Ok(tokens) => writeln!(out, "{}", render_tokens(&tokens, config.output)?)?,
            Err(e) => writeln!(out, "{}", render_error(&e, config))?,
        }
    }
}
