// Evaluate the same kind of automaton under all four algebras.
//
// Run: cargo run -p wfsa-engine --example four_algebras

use wfsa_engine::samples;

fn main() {
    let chars = |s: &str| s.chars().collect::<Vec<char>>();

    let recognizer = samples::double_letter_acceptor();
    for w in ["CVCVCV", "CVCCVCV"] {
        println!("recognize {w}: {}", recognizer.accept(&chars(w)));
    }

    let scorer = samples::bigram_scorer();
    for w in ["eta", "ena"] {
        println!("score {w}: {:.6e}", scorer.accept(&chars(w)).value());
    }

    let route = samples::toll_route();
    for w in ["CC", "CCC", "CVC"] {
        let cost = route.accept(&chars(w));
        if cost.is_finite() {
            println!("cost {w}: {}", cost.value());
        } else {
            println!("cost {w}: rejected");
        }
    }

    let translit = samples::context_transliterator();
    for w in ["tan", "atan", "xan"] {
        let out = translit.accept(&chars(w));
        println!("transduce {w}: {:?}", out.strings());
    }
}
