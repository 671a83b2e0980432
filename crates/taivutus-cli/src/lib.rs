// taivutus-cli: shared utilities for CLI tools.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::process;

use serde_json::{Value, json};
use taivutus_core::case::Case;
use taivutus_fi::declension::CaseForm;
use taivutus_fi::{DeclensionKey, Oracle, Question};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`warn` when unset).
pub const LOG_ENV: &str = "TAIVUTUS_LOG";

/// Install a stderr log subscriber filtered by [`LOG_ENV`].
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Parse a yes/no flag value.
pub fn parse_answer(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(format!("expected y or n, got `{value}`")),
    }
}

// ---------------------------------------------------------------------------
// taivutus-decline arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclineArgs {
    /// Preset answer to "Is the word native?".
    pub native: Option<bool>,
    /// Preset answer to "Is the word a noun?".
    pub noun: Option<bool>,
    /// Use the unconstrained fallback instead of rejecting unknown shapes.
    pub permissive: bool,
    /// Print every case and number, not only the nominatives.
    pub all: bool,
    /// Print only this case, in both numbers. Overrides `all`.
    pub case: Option<Case>,
    pub json: bool,
    pub words: Vec<String>,
}

pub fn parse_decline_args(args: &[String]) -> Result<DeclineArgs, String> {
    let mut parsed = DeclineArgs::default();

    for arg in args {
        if let Some(val) = arg.strip_prefix("--native=") {
            parsed.native = Some(parse_answer(val).map_err(|e| format!("--native: {e}"))?);
        } else if let Some(val) = arg.strip_prefix("--noun=") {
            parsed.noun = Some(parse_answer(val).map_err(|e| format!("--noun: {e}"))?);
        } else if let Some(val) = arg.strip_prefix("--case=") {
            parsed.case = Some(val.parse::<Case>().map_err(|e| format!("--case: {e}"))?);
        } else if arg == "--permissive" {
            parsed.permissive = true;
        } else if arg == "--all" {
            parsed.all = true;
        } else if arg == "--json" {
            parsed.json = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option {arg}"));
        } else {
            parsed.words.push(arg.clone());
        }
    }

    Ok(parsed)
}

impl DeclineArgs {
    /// Whether forms of `case` are printed.
    pub fn shows(&self, case: Case) -> bool {
        match self.case {
            Some(wanted) => case == wanted,
            None => self.all || case == Case::Nominative,
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal oracle
// ---------------------------------------------------------------------------

/// Oracle that answers from preset flags and prompts for the rest.
///
/// Prompts go to `output`; answers are read line by line from `input`
/// until a `y` or `n` arrives. End of input answers no.
pub struct TerminalOracle<R, W> {
    native: Option<bool>,
    noun: Option<bool>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalOracle<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            native: None,
            noun: None,
            input,
            output,
        }
    }

    pub fn with_presets(mut self, native: Option<bool>, noun: Option<bool>) -> Self {
        self.native = native;
        self.noun = noun;
        self
    }

    /// Next non-empty input line, trimmed. Words and answers share the
    /// input, so a session alternates between the two.
    pub fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    return None;
                }
            }
        }
    }

    fn preset(&self, question: Question) -> Option<bool> {
        match question {
            Question::Native => self.native,
            Question::Noun => self.noun,
        }
    }
}

impl<R: BufRead, W: Write> Oracle for TerminalOracle<R, W> {
    fn ask(&mut self, question: Question) -> bool {
        if let Some(answer) = self.preset(question) {
            return answer;
        }
        loop {
            let _ = writeln!(self.output, "Is the word {question}? (y/n)");
            let _ = self.output.flush();
            match self.next_line().as_deref() {
                None => return false,
                Some("y") => return true,
                Some("n") => return false,
                Some(_) => continue,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Plain-text report: the key line, then one indented line per form.
pub fn render_text(word: &str, key: &DeclensionKey, forms: &[CaseForm]) -> String {
    let mut out = format!("{word}: {key}\n");
    for form in forms {
        let shown = match &form.form {
            Ok(s) => s.clone(),
            Err(e) => format!("({e})"),
        };
        let _ = writeln!(out, "  {} {}: {shown}", form.case, form.number);
    }
    out
}

pub fn render_json(word: &str, key: &DeclensionKey, forms: &[CaseForm]) -> Value {
    let forms: Vec<Value> = forms
        .iter()
        .map(|f| match &f.form {
            Ok(s) => json!({ "case": f.case, "number": f.number, "form": s }),
            Err(e) => json!({ "case": f.case, "number": f.number, "error": e.to_string() }),
        })
        .collect();
    json!({ "word": word, "key": key, "forms": forms })
}
