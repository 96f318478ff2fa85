//! CAST lowering.
//!
//! The host and target disagree on a few conversions. Fractional to integral
//! truncates on the host but rounds on the target, so those casts truncate
//! explicitly first. Numeric to boolean has no CAST target at all, and
//! boolean to string spells out `true`/`false`.

use crate::ast::{DataType, Expr, Value};
use crate::transpiler::fragment::{Fragment, RawText};
use crate::transpiler::literals::decimal_type;
use crate::transpiler::{Translation, Translator};

pub(super) fn cast(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Cast { child, to } = expr else {
        return Ok(None);
    };
    let from = child.data_type();
    let Some(inner) = t.translate(child)? else {
        return Ok(None);
    };
    if from == *to {
        return Ok(Some(inner));
    }
    Ok(lower(inner, from, *to))
}

fn lower(inner: Fragment, from: DataType, to: DataType) -> Option<Fragment> {
    // An untyped NULL converts to anything.
    let null = from == DataType::Null;
    let numeric = null || from.is_numeric() || from == DataType::Boolean;

    let target = match to {
        DataType::String if from == DataType::Boolean => {
            // CHAR would give '1' and '0'.
            let spelled = |word: &str| Fragment::bind(Value::from(word), DataType::String);
            return Some(Fragment::func(
                "IF",
                vec![inner, spelled("true"), spelled("false")],
            ));
        }
        DataType::String if from != DataType::Binary => Fragment::raw("CHAR"),
        ty if ty.is_integral() => {
            if from.is_fractional() {
                let truncated =
                    Fragment::func("TRUNCATE", vec![inner, RawText::integer(0).into()]);
                return Some(cast_as(truncated, Fragment::raw("SIGNED")));
            }
            if !(null || from.is_integral() || from == DataType::Boolean) {
                return None;
            }
            Fragment::raw("SIGNED")
        }
        DataType::Float | DataType::Double if numeric => Fragment::raw("DOUBLE"),
        DataType::Decimal { precision, scale } if numeric => decimal_type(precision, scale),
        DataType::Date if null || from.is_temporal() || from == DataType::String => {
            Fragment::raw("DATE")
        }
        DataType::Timestamp if null || from.is_temporal() || from == DataType::String => {
            Fragment::raw("DATETIME(6)")
        }
        DataType::Boolean if from.is_numeric() => {
            return Some(Fragment::parenthesize(Fragment::join(
                vec![inner, Fragment::raw("!="), RawText::integer(0).into()],
                " ",
            )));
        }
        _ => {
            tracing::trace!(%from, %to, "cast has no target equivalent");
            return None;
        }
    };
    Some(cast_as(inner, target))
}

/// `CAST(x AS T)`
fn cast_as(inner: Fragment, target: Fragment) -> Fragment {
    Fragment::join(
        vec![
            Fragment::raw("CAST("),
            inner,
            Fragment::raw(" AS "),
            target,
            Fragment::raw(")"),
        ],
        "",
    )
}
