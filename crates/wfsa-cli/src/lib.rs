// wfsa-cli: shared utilities for the CLI tools.
//
// Every tool reads sequences from stdin (one per line, each character one
// automaton symbol) and writes one result line per input against one of the
// built-in sample automata.

use std::io::BufRead;
use std::process;

/// Check for `-h`/`--help` anywhere in the arguments.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error to stderr and exit with a failure status.
pub fn fatal(message: &str) -> ! {
    eprintln!("error: {message}");
    process::exit(1)
}

/// Find the first argument that is not in `allowed`.
///
/// The tools take no positional arguments, so anything unrecognized is a
/// usage error the caller reports through [`fatal`].
pub fn unexpected_arg<'a>(args: &'a [String], allowed: &[&str]) -> Option<&'a str> {
    args.iter()
        .map(String::as_str)
        .find(|a| !allowed.contains(a))
}

/// Feed each non-empty, trimmed stdin line to `handle` as a character
/// sequence. Read errors end the loop with a message rather than aborting
/// already-produced output.
pub fn for_each_line(mut handle: impl FnMut(&str, &[char])) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let symbols: Vec<char> = word.chars().collect();
        handle(word, &symbols);
    }
}
