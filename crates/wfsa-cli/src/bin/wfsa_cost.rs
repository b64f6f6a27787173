// wfsa-cost: find minimum path costs with the cost sample network.
//
// Reads sequences from stdin (one per line) and prints the cheapest
// accepting path's total cost in the built-in toll network, or "rejected"
// when no accepting path exists.

use std::io::{self, Write};

use wfsa_engine::samples;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wfsa_cli::wants_help(&args) {
        println!("wfsa-cost: find minimum path costs with the cost sample network.");
        println!();
        println!("Usage: wfsa-cost");
        println!();
        println!("Reads sequences over {{C, V}} from stdin (one per line).");
        println!("Prints the minimum accepting cost, or 'rejected'.");
        return;
    }
    if let Some(arg) = wfsa_cli::unexpected_arg(&args, &[]) {
        wfsa_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let automaton = samples::toll_route();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    wfsa_cli::for_each_line(|word, symbols| {
        let cost = automaton.accept(symbols);
        if cost.is_finite() {
            let _ = writeln!(out, "{}\t{word}", cost.value());
        } else {
            let _ = writeln!(out, "rejected\t{word}");
        }
    });
}
