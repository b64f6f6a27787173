// wfsa-score: score stdin lines with the probability sample model.
//
// Reads letter sequences from stdin (one per line) and prints the total
// probability mass the built-in bigram model assigns to each, i.e. the sum
// over all accepting paths. A value of 0 means no path generates the
// sequence.

use std::io::{self, Write};

use wfsa_engine::samples;
use wfsa_semiring::Semiring;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wfsa_cli::wants_help(&args) {
        println!("wfsa-score: score stdin lines with the probability sample model.");
        println!();
        println!("Usage: wfsa-score");
        println!();
        println!("Reads letter sequences over {{a, e, i, n, t, s}} from stdin");
        println!("(one per line). Prints the bigram-model probability of each.");
        return;
    }
    if let Some(arg) = wfsa_cli::unexpected_arg(&args, &[]) {
        wfsa_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let automaton = samples::bigram_scorer();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    wfsa_cli::for_each_line(|word, symbols| {
        let p = automaton.accept(symbols);
        if p.is_identity_alt() {
            let _ = writeln!(out, "0\t{word}");
        } else {
            let _ = writeln!(out, "{:e}\t{word}", p.value());
        }
    });
}
