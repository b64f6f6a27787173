// wfsa-transduce: rewrite stdin lines with the string-set sample
// transliterator.
//
// Reads sequences over {n, t, a} from stdin (one per line) and prints the
// first candidate output the built-in context transliterator produces. An
// input with no accepting path is not an error: the line is echoed
// unchanged, the way a word-level converter skips words its transducer
// does not know.
//
// Options:
//   --all    Print every candidate, tab-separated, instead of the first

use std::io::{self, Write};

use wfsa_engine::samples;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wfsa_cli::wants_help(&args) {
        println!("wfsa-transduce: rewrite stdin lines with the sample transliterator.");
        println!();
        println!("Usage: wfsa-transduce [--all]");
        println!();
        println!("Reads sequences over {{n, t, a}} from stdin (one per line).");
        println!("Prints the first candidate output, or the input unchanged");
        println!("when the automaton does not recognize it.");
        println!();
        println!("Options:");
        println!("  --all    Print every candidate, tab-separated");
        return;
    }
    if let Some(arg) = wfsa_cli::unexpected_arg(&args, &["--all"]) {
        wfsa_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let show_all = args.iter().any(|a| a == "--all");
    let automaton = samples::context_transliterator();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    wfsa_cli::for_each_line(|word, symbols| {
        let candidates = automaton.accept(symbols);
        if show_all {
            let joined = candidates.strings().join("\t");
            if joined.is_empty() {
                let _ = writeln!(out, "{word}");
            } else {
                let _ = writeln!(out, "{joined}");
            }
        } else {
            match candidates.first() {
                Some(first) => {
                    let _ = writeln!(out, "{first}");
                }
                None => {
                    let _ = writeln!(out, "{word}");
                }
            }
        }
    });
}
