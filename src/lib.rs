//! # pushdown
//!
//! Compiles host query-expression trees into parameterized SQL for a
//! MySQL-family analytical engine, so filters, projections, aggregates and
//! window functions can run remotely instead of on the host.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use pushdown::prelude::*;
//!
//! let ctx = TranslationContext::new(Version::new(7, 5, 0));
//! let expr = Expr::call(
//!     ScalarFunc::DateFormat,
//!     vec![Expr::col(1, "created_at", DataType::Timestamp), Expr::lit("yyyy-MM-dd")],
//! );
//!
//! let sql = expr.to_sql(&ctx)?.expect("translatable");
//! // sql.sql    => "DATE_FORMAT(`created_at`, ?)"
//! // sql.params => ["%Y-%m-%d"]
//! ```
//!
//! ## Outcomes
//!
//! | Result          | Meaning                                        |
//! |-----------------|------------------------------------------------|
//! | `Ok(Some(sql))` | The whole tree runs on the target              |
//! | `Ok(None)`      | Some node has no target equivalent; keep it    |
//! | `Err(e)`        | The tree itself is invalid (e.g. bad weekday)  |

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::PushdownConfig;
    pub use crate::error::*;
    pub use crate::transpiler::{
        Capabilities, ColumnResolver, Feature, Fragment, MappedColumns, QuotedColumns,
        RenderedSql, ToSql, TranslationContext, Translator, Version,
    };
}

/// Translate one expression under `ctx`.
///
/// ```
/// use pushdown::prelude::*;
///
/// let expr = Expr::binary(
///     Expr::col(1, "total", DataType::Long),
///     BinaryOp::Gt,
///     Expr::lit(100i64),
/// );
/// let sql = pushdown::translate(&expr, &TranslationContext::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(sql.sql, "(`total` > 100)");
/// ```
pub fn translate(
    expr: &ast::Expr,
    ctx: &transpiler::TranslationContext,
) -> error::PushdownResult<Option<transpiler::RenderedSql>> {
    Ok(transpiler::translate(expr, ctx)?.map(|f| f.render()))
}
