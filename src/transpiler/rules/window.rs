//! Window function calls.
//!
//! `<fn> OVER ([PARTITION BY ..] [ORDER BY ..] [ROWS|RANGE BETWEEN .. AND ..])`.
//! The target always sorts NULLs low, so only the matching null ordering for
//! each direction (ASC NULLS FIRST, DESC NULLS LAST) can be expressed.

use crate::ast::{
    Expr, FrameBoundary, FrameKind, NullOrdering, SortDirection, SortKey, WindowCall,
    WindowFrame, WindowFunction,
};
use crate::transpiler::fragment::{Fragment, RawText};
use crate::transpiler::{Translation, Translator};

use super::aggregates;

pub(super) fn window(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Window(call) = expr else {
        return Ok(None);
    };
    let Some(func) = function(t, &call.func)? else {
        return Ok(None);
    };
    let Some(over) = over_clause(t, call)? else {
        return Ok(None);
    };
    Ok(Some(Fragment::join(vec![func, Fragment::raw("OVER"), over], " ")))
}

fn function(t: &Translator<'_>, func: &WindowFunction) -> Translation {
    let fragment = match func {
        WindowFunction::Aggregate(call) => {
            if call.distinct {
                tracing::trace!(func = %call.func, "distinct aggregate inside a window");
                return Ok(None);
            }
            return aggregates::lower(t, call);
        }
        WindowFunction::RowNumber => Fragment::func("ROW_NUMBER", vec![]),
        WindowFunction::Rank => Fragment::func("RANK", vec![]),
        WindowFunction::DenseRank => Fragment::func("DENSE_RANK", vec![]),
        WindowFunction::PercentRank => Fragment::func("PERCENT_RANK", vec![]),
        WindowFunction::CumeDist => Fragment::func("CUME_DIST", vec![]),
        WindowFunction::Ntile(buckets) => {
            let Some(buckets) = t.translate(buckets)? else {
                return Ok(None);
            };
            Fragment::func("NTILE", vec![buckets])
        }
        WindowFunction::Lag {
            input,
            offset,
            default,
        } => return shift(t, "LAG", input, *offset, default.as_deref()),
        WindowFunction::Lead {
            input,
            offset,
            default,
        } => return shift(t, "LEAD", input, *offset, default.as_deref()),
        WindowFunction::FirstValue(input) => {
            let Some(input) = t.translate(input)? else {
                return Ok(None);
            };
            Fragment::func("FIRST_VALUE", vec![input])
        }
        WindowFunction::LastValue(input) => {
            let Some(input) = t.translate(input)? else {
                return Ok(None);
            };
            Fragment::func("LAST_VALUE", vec![input])
        }
        WindowFunction::NthValue(input, n) => {
            if *n < 1 {
                return Ok(None);
            }
            let Some(input) = t.translate(input)? else {
                return Ok(None);
            };
            Fragment::func("NTH_VALUE", vec![input, RawText::integer(*n).into()])
        }
    };
    Ok(Some(fragment))
}

/// `LAG(x, offset[, default])` / `LEAD(..)`
fn shift(
    t: &Translator<'_>,
    name: &'static str,
    input: &Expr,
    offset: i64,
    default: Option<&Expr>,
) -> Translation {
    if offset < 0 {
        tracing::trace!(func = name, offset, "negative offset");
        return Ok(None);
    }
    let Some(input) = t.translate(input)? else {
        return Ok(None);
    };
    let mut args = vec![input, RawText::integer(offset).into()];
    if let Some(default) = default {
        let Some(default) = t.translate(default)? else {
            return Ok(None);
        };
        args.push(default);
    }
    Ok(Some(Fragment::func(name, args)))
}

fn over_clause(t: &Translator<'_>, call: &WindowCall) -> Translation {
    let mut clauses = Vec::new();
    if !call.partition_by.is_empty() {
        let Some(keys) = t.translate_all(&call.partition_by)? else {
            return Ok(None);
        };
        clauses.push(Fragment::concat(
            Fragment::raw("PARTITION BY"),
            Fragment::join(keys, ", "),
            " ",
        ));
    }
    if !call.order_by.is_empty() {
        let mut keys = Vec::with_capacity(call.order_by.len());
        for key in &call.order_by {
            let Some(key) = sort_key(t, key)? else {
                return Ok(None);
            };
            keys.push(key);
        }
        clauses.push(Fragment::concat(
            Fragment::raw("ORDER BY"),
            Fragment::join(keys, ", "),
            " ",
        ));
    }
    if let Some(frame) = &call.frame {
        clauses.push(frame_clause(frame));
    }
    Ok(Some(Fragment::parenthesize(Fragment::join(clauses, " "))))
}

fn sort_key(t: &Translator<'_>, key: &SortKey) -> Translation {
    let (direction, default_nulls) = match key.direction {
        SortDirection::Asc => ("ASC", NullOrdering::NullsFirst),
        SortDirection::Desc => ("DESC", NullOrdering::NullsLast),
    };
    if key.nulls != default_nulls {
        tracing::trace!(direction = ?key.direction, nulls = ?key.nulls, "null ordering not expressible");
        return Ok(None);
    }
    let Some(expr) = t.translate(&key.expr)? else {
        return Ok(None);
    };
    Ok(Some(Fragment::concat(expr, Fragment::raw(direction), " ")))
}

fn frame_clause(frame: &WindowFrame) -> Fragment {
    let kind = match frame.kind {
        FrameKind::Rows => "ROWS",
        FrameKind::Range => "RANGE",
    };
    Fragment::join(
        vec![
            Fragment::raw(kind),
            Fragment::raw("BETWEEN"),
            frame_boundary(frame.start),
            Fragment::raw("AND"),
            frame_boundary(frame.end),
        ],
        " ",
    )
}

/// A single frame boundary. Negative offsets precede the current row.
pub fn frame_boundary(boundary: FrameBoundary) -> Fragment {
    match boundary {
        FrameBoundary::UnboundedPreceding => Fragment::raw("UNBOUNDED PRECEDING"),
        FrameBoundary::UnboundedFollowing => Fragment::raw("UNBOUNDED FOLLOWING"),
        FrameBoundary::CurrentRow => Fragment::raw("CURRENT ROW"),
        FrameBoundary::Offset(n) if n < 0 => Fragment::concat(
            RawText::integer(n.unsigned_abs()).into(),
            Fragment::raw("PRECEDING"),
            " ",
        ),
        FrameBoundary::Offset(n) => Fragment::concat(
            RawText::integer(n).into(),
            Fragment::raw("FOLLOWING"),
            " ",
        ),
    }
}
