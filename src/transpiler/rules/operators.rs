use crate::ast::{Expr, UnaryOp};
use crate::transpiler::fragment::Fragment;
use crate::transpiler::literals;
use crate::transpiler::{Translation, Translator};

/// `(<left> OP <right>)`
pub(super) fn binary(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Binary { op, left, right } = expr else {
        return Ok(None);
    };
    let Some(left) = t.translate(left)? else {
        return Ok(None);
    };
    let Some(right) = t.translate(right)? else {
        return Ok(None);
    };
    Ok(Some(Fragment::parenthesize(Fragment::join(
        vec![left, Fragment::raw(op.token()), right],
        " ",
    ))))
}

/// Prefix operators wrap their operand in parentheses, so `-` followed by a
/// negative literal never renders as a `--` comment.
pub(super) fn unary(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Unary { op, child } = expr else {
        return Ok(None);
    };
    let Some(child) = t.translate(child)? else {
        return Ok(None);
    };
    let fragment = match op {
        UnaryOp::Not => Fragment::concat(Fragment::raw("NOT"), Fragment::parenthesize(child), " "),
        UnaryOp::Negate => Fragment::concat(Fragment::raw("-"), Fragment::parenthesize(child), ""),
        UnaryOp::BitNot => Fragment::concat(Fragment::raw("~"), Fragment::parenthesize(child), ""),
        UnaryOp::IsNull => Fragment::parenthesize(Fragment::concat(
            child,
            Fragment::raw("IS NULL"),
            " ",
        )),
        UnaryOp::IsNotNull => Fragment::parenthesize(Fragment::concat(
            child,
            Fragment::raw("IS NOT NULL"),
            " ",
        )),
    };
    Ok(Some(fragment))
}

/// `(x [NOT] IN (...))` over expression lists and constant sets.
pub(super) fn membership(t: &Translator<'_>, expr: &Expr) -> Translation {
    let (child, items, negated) = match expr {
        Expr::InList {
            child,
            list,
            negated,
        } => {
            let Some(items) = t.translate_all(list)? else {
                return Ok(None);
            };
            (child, items, *negated)
        }
        Expr::InSet {
            child,
            values,
            data_type,
            negated,
        } => {
            let Some(items) = literals::encode_all(values, *data_type) else {
                return Ok(None);
            };
            (child, items, *negated)
        }
        _ => return Ok(None),
    };
    // `IN ()` is a syntax error on the target.
    if items.is_empty() {
        return Ok(None);
    }
    let Some(child) = t.translate(child)? else {
        return Ok(None);
    };
    let keyword = if negated { "NOT IN" } else { "IN" };
    Ok(Some(Fragment::parenthesize(Fragment::join(
        vec![
            child,
            Fragment::raw(keyword),
            Fragment::parenthesize(Fragment::join(items, ", ")),
        ],
        " ",
    ))))
}
