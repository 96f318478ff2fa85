use crate::ast::{DataType, Expr, ScalarFunc, Value};
use crate::transpiler::capability::Feature;
use crate::transpiler::format::FormatMode;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::rewrite;
use crate::transpiler::{Translation, Translator};

/// Composite temporal calls, rewritten and translated again.
pub(super) fn rewritten(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    let Some(tree) = rewrite::rewrite(*func, args)? else {
        return Ok(None);
    };
    tracing::trace!(?func, "rewrote composite temporal call");
    t.translate(&tree)
}

/// `DATE_ADD(d, INTERVAL n DAY)`, `DATE_SUB(d, INTERVAL n DAY)` and
/// `DATE_ADD(d, INTERVAL n MONTH)`.
pub(super) fn date_arithmetic(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    let (name, unit) = match func {
        ScalarFunc::DateAdd => ("DATE_ADD", "DAY"),
        ScalarFunc::DateSub => ("DATE_SUB", "DAY"),
        ScalarFunc::AddMonths => ("DATE_ADD", "MONTH"),
        _ => return Ok(None),
    };
    let [date, amount] = args.as_slice() else {
        return Ok(None);
    };
    let Some(date) = t.translate(date)? else {
        return Ok(None);
    };
    let Some(amount) = t.translate(amount)? else {
        return Ok(None);
    };
    let interval = Fragment::join(
        vec![Fragment::raw("INTERVAL"), amount, Fragment::raw(unit)],
        " ",
    );
    Ok(Some(Fragment::func(name, vec![date, interval])))
}

/// Functions driven by a date format pattern. The pattern must be a string
/// literal; it is transpiled into the target's format language and bound.
pub(super) fn format_function(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    let (name, mode) = match func {
        ScalarFunc::DateFormat => ("DATE_FORMAT", FormatMode::Symbol),
        ScalarFunc::StrToDate => ("STR_TO_DATE", FormatMode::Symbol),
        ScalarFunc::ToChar => ("TO_CHAR", FormatMode::Specifier),
        ScalarFunc::ToDate => ("TO_DATE", FormatMode::Specifier),
        ScalarFunc::ToTimestamp => ("TO_TIMESTAMP", FormatMode::Specifier),
        _ => return Ok(None),
    };
    if mode == FormatMode::Specifier && !t.supports(Feature::SpecifierFormats) {
        return Ok(None);
    }
    let [input, pattern] = args.as_slice() else {
        return Ok(None);
    };
    let Some(pattern) = pattern.as_string_literal() else {
        tracing::trace!(?func, "format pattern is not a string literal");
        return Ok(None);
    };
    let Some(input) = t.translate(input)? else {
        return Ok(None);
    };
    let format = t.format(pattern, mode);
    Ok(Some(Fragment::func(
        name,
        vec![input, Fragment::bind(Value::String(format), DataType::String)],
    )))
}
