//! Translation rules, one module per family of expression nodes.
//!
//! A rule inspects a node and answers `Ok(Some(_))` when it produced the
//! translation, `Ok(None)` when it does not apply (or a child could not be
//! translated), and `Err(_)` for input that is invalid outright. The
//! translator tries rules in the order returned by [`ordered`].

mod aggregates;
mod casts;
mod conditional;
mod functions;
mod leaves;
mod operators;
mod strings;
mod temporal;
mod window;

pub use self::leaves::aliased;
pub use self::window::frame_boundary;

use crate::ast::Expr;
use crate::transpiler::{Translation, Translator};

/// A single translation rule.
pub type Rule = fn(&Translator<'_>, &Expr) -> Translation;

/// Rules in priority order. Earlier rules shadow later ones.
pub fn ordered() -> Vec<(&'static str, Rule)> {
    vec![
        ("column", leaves::column),
        ("literal", leaves::literal),
        ("alias", leaves::alias),
        ("cast", casts::cast),
        ("temporal_rewrite", temporal::rewritten),
        ("variadic_function", functions::variadic),
        ("aggregate", aggregates::aggregate),
        ("window", window::window),
        ("binary_operator", operators::binary),
        ("unary_operator", operators::unary),
        ("leaf_function", functions::leaf),
        ("scalar_function", functions::scalar),
        ("date_arithmetic", temporal::date_arithmetic),
        ("format_function", temporal::format_function),
        ("string_match", strings::pattern_match),
        ("string_predicate", strings::predicate),
        ("membership", operators::membership),
        ("conditional", conditional::conditional),
    ]
}
