//! Aggregate calls.
//!
//! The target has no `FILTER (WHERE ..)` clause. A filtered aggregate feeds
//! every argument through `IF(c, x, NULL)` instead, which every aggregate
//! here ignores. DISTINCT combined with FILTER is not attempted.

use crate::ast::{AggregateCall, AggregateFunc, Expr};
use crate::transpiler::capability::Feature;
use crate::transpiler::fragment::{Fragment, RawText};
use crate::transpiler::{Translation, Translator};

pub(super) fn aggregate(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Aggregate(call) = expr else {
        return Ok(None);
    };
    lower(t, call)
}

/// Shared with window functions.
pub(super) fn lower(t: &Translator<'_>, call: &AggregateCall) -> Translation {
    if !available(t, call.func) {
        tracing::trace!(func = %call.func, version = %t.context().version(), "aggregate gated off");
        return Ok(None);
    }
    if call.distinct && call.filter.is_some() {
        tracing::trace!(func = %call.func, "DISTINCT with FILTER is not supported");
        return Ok(None);
    }
    let star = call.args.is_empty();
    if star && (call.func != AggregateFunc::Count || call.distinct) {
        return Ok(None);
    }
    // Only COUNT(DISTINCT a, b, ..) takes more than one argument.
    let multi = call.distinct && call.func == AggregateFunc::Count;
    if !star && !multi && call.args.len() != 1 {
        return Ok(None);
    }

    let filter = match &call.filter {
        Some(condition) => match t.translate(condition)? {
            Some(f) => Some(f),
            None => return Ok(None),
        },
        None => None,
    };

    let args = if star {
        match filter {
            Some(condition) => vec![filtered(condition, RawText::integer(1).into())],
            None => vec![Fragment::raw("*")],
        }
    } else {
        let Some(args) = t.translate_all(&call.args)? else {
            return Ok(None);
        };
        match filter {
            Some(condition) => args
                .into_iter()
                .map(|arg| filtered(condition.clone(), arg))
                .collect(),
            None => args,
        }
    };

    let name = call.func.sql_name();
    if call.distinct {
        let inner = Fragment::concat(Fragment::raw("DISTINCT"), Fragment::join(args, ", "), " ");
        return Ok(Some(Fragment::concat(
            Fragment::raw(name),
            Fragment::parenthesize(inner),
            "",
        )));
    }
    Ok(Some(Fragment::func(name, args)))
}

/// `IF(c, x, NULL)`
fn filtered(condition: Fragment, arg: Fragment) -> Fragment {
    Fragment::func("IF", vec![condition, arg, Fragment::raw("NULL")])
}

fn available(t: &Translator<'_>, func: AggregateFunc) -> bool {
    match func {
        AggregateFunc::BitAnd | AggregateFunc::BitOr | AggregateFunc::BitXor => {
            t.supports(Feature::BitwiseAggregates)
        }
        AggregateFunc::ApproxCountDistinct => t.supports(Feature::ApproxCountDistinct),
        _ => true,
    }
}
