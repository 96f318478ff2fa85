//! Expression transpiler.
//!
//! Turns host [`Expr`] trees into target-dialect [`Fragment`]s. Translation
//! is partial: a node the target cannot express yields `Ok(None)`, and that
//! `None` propagates to every ancestor, so the host keeps evaluating the
//! whole subtree itself. Errors are reserved for input that is invalid on
//! its own terms, such as a weekday name nobody recognizes.
//!
//! ```rust,ignore
//! use pushdown::prelude::*;
//!
//! let ctx = TranslationContext::default();
//! let expr = Expr::binary(
//!     Expr::col(1, "total", DataType::Long),
//!     BinaryOp::Gt,
//!     Expr::lit(100i64),
//! );
//! let sql = expr.to_sql(&ctx)?.expect("translatable");
//! assert_eq!(sql.sql, "(`total` > 100)");
//! ```

pub mod capability;
pub mod context;
pub mod format;
pub mod fragment;
pub mod literals;
pub mod rewrite;
pub mod rules;

#[cfg(test)]
mod tests;

pub use self::capability::{Capabilities, Feature, Version};
pub use self::context::{ColumnResolver, MappedColumns, QuotedColumns, TranslationContext};
pub use self::format::{FormatMode, FormatObserver, TracingObserver};
pub use self::fragment::{BoundValue, Fragment, RenderedSql};

use crate::ast::Expr;
use crate::error::PushdownResult;
use self::rules::Rule;

/// Result of translating one node: `Ok(None)` when the target cannot express it.
pub type Translation<T = Fragment> = PushdownResult<Option<T>>;

/// Applies the ordered rule list to an expression tree.
pub struct Translator<'a> {
    ctx: &'a TranslationContext,
    rules: Vec<(&'static str, Rule)>,
}

impl<'a> Translator<'a> {
    pub fn new(ctx: &'a TranslationContext) -> Self {
        Self {
            ctx,
            rules: rules::ordered(),
        }
    }

    pub fn context(&self) -> &TranslationContext {
        self.ctx
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.ctx.supports(feature)
    }

    /// First rule with an answer wins.
    pub fn translate(&self, expr: &Expr) -> Translation {
        for (name, rule) in &self.rules {
            if let Some(fragment) = rule(self, expr)? {
                tracing::trace!(rule = name, "rule matched");
                return Ok(Some(fragment));
            }
        }
        tracing::trace!(node = node_kind(expr), "no rule matched");
        Ok(None)
    }

    /// Translate every expression, or none of them.
    pub fn translate_all<'e>(
        &self,
        exprs: impl IntoIterator<Item = &'e Expr>,
    ) -> Translation<Vec<Fragment>> {
        let mut out = Vec::new();
        for expr in exprs {
            let Some(fragment) = self.translate(expr)? else {
                return Ok(None);
            };
            out.push(fragment);
        }
        Ok(Some(out))
    }

    /// Transpile a format pattern, notifying the context's observer.
    pub fn format(&self, pattern: &str, mode: FormatMode) -> String {
        format::transpile_observed(pattern, mode, self.ctx.observer())
    }
}

/// Conversion of host expressions into target SQL.
pub trait ToSql {
    fn to_fragment(&self, ctx: &TranslationContext) -> Translation;

    /// Rendered statement text plus bound parameters.
    fn to_sql(&self, ctx: &TranslationContext) -> Translation<RenderedSql> {
        Ok(self.to_fragment(ctx)?.map(|f| f.render()))
    }
}

impl ToSql for Expr {
    fn to_fragment(&self, ctx: &TranslationContext) -> Translation {
        translate(self, ctx)
    }
}

/// Translate a single root expression. Only a root alias renders `AS`.
pub fn translate(expr: &Expr, ctx: &TranslationContext) -> Translation {
    let translator = Translator::new(ctx);
    let fragment = match expr {
        Expr::Alias { child, name } => translator
            .translate(child)?
            .map(|inner| rules::aliased(inner, name)),
        _ => translator.translate(expr)?,
    };
    if fragment.is_none() {
        tracing::debug!(
            node = node_kind(expr),
            version = %ctx.version(),
            "expression stays on the host"
        );
    }
    Ok(fragment)
}

fn node_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Literal { .. } => "literal",
        Expr::Column(_) => "column",
        Expr::Alias { .. } => "alias",
        Expr::Unary { .. } => "unary",
        Expr::Binary { .. } => "binary",
        Expr::Call { .. } => "call",
        Expr::If { .. } => "if",
        Expr::Case { .. } => "case",
        Expr::Match { .. } => "match",
        Expr::InList { .. } => "in_list",
        Expr::InSet { .. } => "in_set",
        Expr::Cast { .. } => "cast",
        Expr::Aggregate(_) => "aggregate",
        Expr::Window(_) => "window",
    }
}
