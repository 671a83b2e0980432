// taivutus-decline: Classify Finnish nominals and print their forms.
//
// Classifies each nominative singular into a declension key and prints the
// key with the nominative forms (or every case with --all). Questions the
// word form cannot settle are answered by flags or asked on the terminal.
//
// Usage:
//   taivutus-decline [--native=y|n] [--noun=y|n] [--permissive] [--all] [--case=NAME] [--json] [WORD...]
//
// Options:
//   --native=y|n    Answer to "Is the word native?"
//   --noun=y|n      Answer to "Is the word a noun?"
//   --permissive    Accept words no rule matches, with an unconstrained key
//   --all           Print every case and number
//   --case=NAME     Print one case (English or Finnish name)
//   --json          Print one JSON object per word
//   -h, --help      Print help

use std::io::{self, Write};

use taivutus_cli::TerminalOracle;
use taivutus_fi::declension::CaseForm;
use taivutus_fi::{ClassifierOptions, FallbackPolicy, Inflector, InflectorOptions};

type Prompter = TerminalOracle<io::StdinLock<'static>, io::Stderr>;

fn main() {
    taivutus_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if taivutus_cli::wants_help(&args) {
        println!("taivutus-decline: Classify Finnish nominals and print their forms.");
        println!();
        println!(
            "Usage: taivutus-decline [--native=y|n] [--noun=y|n] [--permissive] [--all] [--case=NAME] [--json] [WORD...]"
        );
        println!();
        println!("If WORD arguments are given, declines each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --native=y|n    Answer to \"Is the word native?\"");
        println!("  --noun=y|n      Answer to \"Is the word a noun?\"");
        println!("  --permissive    Accept words no rule matches, with an unconstrained key");
        println!("  --all           Print every case and number");
        println!("  --case=NAME     Print one case (English or Finnish name)");
        println!("  --json          Print one JSON object per word");
        println!("  -h, --help      Print this help");
        return;
    }

    let parsed =
        taivutus_cli::parse_decline_args(&args).unwrap_or_else(|e| taivutus_cli::fatal(&e));

    let fallback = if parsed.permissive {
        FallbackPolicy::Unconstrained
    } else {
        FallbackPolicy::Reject
    };
    let inflector = Inflector::new(InflectorOptions {
        classifier: ClassifierOptions { fallback },
    });

    let stdin = io::stdin();
    let mut oracle =
        TerminalOracle::new(stdin.lock(), io::stderr()).with_presets(parsed.native, parsed.noun);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    let mut decline_word = |word: &str, oracle: &mut Prompter| {
        let key = match inflector.classify(word, oracle) {
            Ok(key) => key,
            Err(e) => {
                eprintln!("{word}: {e}");
                failed = true;
                return;
            }
        };
        let forms: Vec<CaseForm> = inflector
            .list_all_forms(&key)
            .into_iter()
            .filter(|f| parsed.shows(f.case))
            .collect();

        if parsed.json {
            let _ = writeln!(out, "{}", taivutus_cli::render_json(word, &key, &forms));
        } else {
            let _ = write!(out, "{}", taivutus_cli::render_text(word, &key, &forms));
        }
        // prompts for the next word must not overtake this one
        let _ = out.flush();
    };

    if parsed.words.is_empty() {
        while let Some(word) = oracle.next_line() {
            decline_word(&word, &mut oracle);
        }
    } else {
        for word in &parsed.words {
            decline_word(word, &mut oracle);
        }
    }

    if failed {
        std::process::exit(1);
    }
}
