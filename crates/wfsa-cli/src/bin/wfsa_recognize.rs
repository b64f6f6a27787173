// wfsa-recognize: classify stdin lines with the boolean sample acceptor.
//
// Reads sequences over {C, V} from stdin (one per line) and reports whether
// the built-in double-letter automaton accepts each:
//   A: word    (accepted -- contains an adjacent CC or VV)
//   R: word    (rejected)

use std::io::{self, Write};

use wfsa_engine::samples;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wfsa_cli::wants_help(&args) {
        println!("wfsa-recognize: classify stdin lines with the boolean sample acceptor.");
        println!();
        println!("Usage: wfsa-recognize");
        println!();
        println!("Reads sequences over {{C, V}} from stdin (one per line). Prints:");
        println!("  A: word    (accepted)");
        println!("  R: word    (rejected)");
        return;
    }
    if let Some(arg) = wfsa_cli::unexpected_arg(&args, &[]) {
        wfsa_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let automaton = samples::double_letter_acceptor();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    wfsa_cli::for_each_line(|word, symbols| {
        if automaton.accept(symbols) {
            let _ = writeln!(out, "A: {word}");
        } else {
            let _ = writeln!(out, "R: {word}");
        }
    });
}
