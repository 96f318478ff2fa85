//! Date/time format pattern transpilation.
//!
//! Host patterns use letter runs (`yyyy`, `MM`, `HH` ...). The target has two
//! mini-languages:
//!
//! - **symbol** (`DATE_FORMAT`, `STR_TO_DATE`): `%`-prefixed symbols such as `%Y`
//! - **specifier** (`TO_CHAR`, `TO_DATE`, `TO_TIMESTAMP`): tokens such as `YYYY`, `HH24`
//!
//! Symbol rules are applied one after another, wider runs first. Every
//! output starts with `%`, which host patterns never contain, and the
//! single-letter rules refuse to match a letter directly after a `%`, so a
//! later rule never rewrites an earlier rule's output. Specifier tokens are
//! letters themselves, so that table is applied in a single scan over runs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Target format mini-language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    Symbol,
    Specifier,
}

impl std::fmt::Display for FormatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatMode::Symbol => write!(f, "symbol"),
            FormatMode::Specifier => write!(f, "specifier"),
        }
    }
}

/// Notified after each transpilation.
pub trait FormatObserver: Send + Sync {
    fn transpiled(&self, mode: FormatMode, input: &str, output: &str);
}

/// Logs each transpilation at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FormatObserver for TracingObserver {
    fn transpiled(&self, mode: FormatMode, input: &str, output: &str) {
        tracing::debug!(%mode, input, output, "transpiled format pattern");
    }
}

/// Ordered symbol-mode rules. Order is load-bearing.
const SYMBOL_RULES: &[(&str, &str)] = &[
    (r"HH:mm:ss", "%T"),
    (r"[yY]{4,}", "%Y"),
    (r"[yY]{2}", "%y"),
    (r"D{1,3}", "%j"),
    (r"M{4,}", "%M"),
    (r"M{3}", "%b"),
    (r"M{2}", "%m"),
    (r"(^|[^%])M", "${1}%c"),
    (r"d{2,}", "%d"),
    (r"(^|[^%])d", "${1}%e"),
    (r"H{2,}", "%H"),
    (r"(^|[^%])H", "${1}%k"),
    (r"h{2,}", "%h"),
    (r"(^|[^%])h", "${1}%l"),
    (r"(^|[^%])m{2,}", "${1}%i"),
    (r"(^|[^%])s+", "${1}%s"),
    (r"(^|[^%])S+", "${1}%f"),
    (r"(^|[^%])a+", "${1}%p"),
    (r"(^|[^%])w+", "${1}%v"),
    (r"E{4,}", "%W"),
    (r"E{1,3}", "%a"),
];

static SYMBOL_REGEXES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SYMBOL_RULES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("symbol format rule is a valid regex"),
                *replacement,
            )
        })
        .collect()
});

/// Specifier-mode table: (letter, min run, max run, token). `y` also covers `Y`.
const SPECIFIER_RULES: &[(char, usize, usize, &str)] = &[
    ('y', 4, usize::MAX, "YYYY"),
    ('y', 1, 3, "YY"),
    ('M', 4, usize::MAX, "MONTH"),
    ('M', 3, 3, "MON"),
    ('M', 1, 2, "MM"),
    ('E', 4, usize::MAX, "DAY"),
    ('E', 1, 3, "DY"),
    ('d', 1, usize::MAX, "DD"),
    ('D', 1, usize::MAX, "DDD"),
    ('H', 1, usize::MAX, "HH24"),
    ('h', 1, usize::MAX, "HH12"),
    ('m', 1, usize::MAX, "MI"),
    ('s', 1, usize::MAX, "SS"),
    ('S', 1, usize::MAX, "FF6"),
    ('a', 1, usize::MAX, "AM"),
];

static SPECIFIER_RUNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[yY]+|M+|E+|d+|D+|H+|h+|m+|s+|S+|a+")
        .expect("specifier run pattern is a valid regex")
});

/// Rewrite a host pattern into `%`-symbols.
pub fn to_symbol(pattern: &str) -> String {
    SYMBOL_REGEXES
        .iter()
        .fold(pattern.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

/// Rewrite a host pattern into specifier tokens.
pub fn to_specifier(pattern: &str) -> String {
    SPECIFIER_RUNS
        .replace_all(pattern, |caps: &Captures<'_>| {
            let run = &caps[0];
            specifier_token(run).unwrap_or(run).to_string()
        })
        .into_owned()
}

fn specifier_token(run: &str) -> Option<&'static str> {
    let letter = match run.chars().next()? {
        'Y' => 'y',
        c => c,
    };
    let len = run.chars().count();
    SPECIFIER_RULES
        .iter()
        .find(|(l, min, max, _)| *l == letter && (*min..=*max).contains(&len))
        .map(|(_, _, _, token)| *token)
}

/// Transpile in the given mode without notifying anyone.
pub fn transpile(pattern: &str, mode: FormatMode) -> String {
    match mode {
        FormatMode::Symbol => to_symbol(pattern),
        FormatMode::Specifier => to_specifier(pattern),
    }
}

/// Transpile and report `(input, output)` to `observer`.
pub fn transpile_observed(
    pattern: &str,
    mode: FormatMode,
    observer: &dyn FormatObserver,
) -> String {
    let output = transpile(pattern, mode);
    observer.transpiled(mode, pattern, &output);
    output
}
