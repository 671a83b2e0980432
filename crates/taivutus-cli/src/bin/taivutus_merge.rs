// taivutus-merge: Merge suffixes onto a stem.
//
// Applies consonant gradation and vowel harmony and prints one merged form
// per suffix, e.g. `taivutus-merge soitti n me` prints soitin and soittime.
//
// Usage:
//   taivutus-merge STEM SUFFIX...
//
// Options:
//   -h, --help   Print help

use std::io::{self, Write};

fn main() {
    taivutus_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if taivutus_cli::wants_help(&args) || args.len() < 2 {
        println!("taivutus-merge: Merge suffixes onto a Finnish stem.");
        println!();
        println!("Usage: taivutus-merge STEM SUFFIX...");
        println!();
        println!("The stem is given in its strong grade. Prints one merged");
        println!("form per suffix.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        if args.len() < 2 && !taivutus_cli::wants_help(&args) {
            std::process::exit(2);
        }
        return;
    }

    let inflector = taivutus_fi::Inflector::default();
    let stem = &args[0];

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for suffix in &args[1..] {
        match inflector.merge(stem, suffix) {
            Ok(form) => {
                let _ = writeln!(out, "{form}");
            }
            Err(e) => {
                let _ = out.flush();
                taivutus_cli::fatal(&e.to_string());
            }
        }
    }
}
