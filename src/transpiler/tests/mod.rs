//! Translator tests, grouped by expression family.

mod functions;
mod windows;

use crate::ast::{DataType, Expr};
use crate::transpiler::{RenderedSql, ToSql, TranslationContext, Version};

fn render_with(expr: &Expr, ctx: &TranslationContext) -> Option<RenderedSql> {
    expr.to_sql(ctx).expect("translation should not error")
}

fn render(expr: &Expr) -> RenderedSql {
    render_with(expr, &TranslationContext::default()).expect("expression should translate")
}

fn sql(expr: &Expr) -> String {
    render(expr).sql
}

fn untranslatable(expr: &Expr) -> bool {
    render_with(expr, &TranslationContext::default()).is_none()
}

fn sql_at(expr: &Expr, major: u32, minor: u32) -> Option<String> {
    let ctx = TranslationContext::new(Version::new(major, minor, 0));
    render_with(expr, &ctx).map(|r| r.sql)
}

fn long(id: u64, name: &str) -> Expr {
    Expr::col(id, name, DataType::Long)
}

fn string(id: u64, name: &str) -> Expr {
    Expr::col(id, name, DataType::String)
}

fn date(id: u64, name: &str) -> Expr {
    Expr::col(id, name, DataType::Date)
}

fn timestamp(id: u64, name: &str) -> Expr {
    Expr::col(id, name, DataType::Timestamp)
}
