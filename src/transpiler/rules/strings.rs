use crate::ast::{DataType, Expr, MatchKind, ScalarFunc, Value};
use crate::transpiler::fragment::{Fragment, RawText};
use crate::transpiler::{Translation, Translator};

const DEFAULT_ESCAPE: char = '\\';

/// LIKE, RLIKE and start-anchored regex matches.
pub(super) fn pattern_match(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Match {
        kind,
        child,
        pattern,
    } = expr
    else {
        return Ok(None);
    };
    let Some(child) = t.translate(child)? else {
        return Ok(None);
    };
    let Some(pattern) = t.translate(pattern)? else {
        return Ok(None);
    };
    let mut parts = vec![child];
    match kind {
        MatchKind::Like { escape } => {
            parts.push(Fragment::raw("LIKE"));
            parts.push(pattern);
            if *escape != DEFAULT_ESCAPE {
                parts.push(Fragment::raw("ESCAPE"));
                parts.push(Fragment::bind(
                    Value::String(escape.to_string()),
                    DataType::String,
                ));
            }
        }
        MatchKind::RLike => {
            parts.push(Fragment::raw("RLIKE"));
            parts.push(pattern);
        }
        MatchKind::RegexFromStart => {
            parts.push(Fragment::raw("RLIKE"));
            parts.push(Fragment::func("CONCAT", vec![Fragment::raw("'^'"), pattern]));
        }
    }
    Ok(Some(Fragment::parenthesize(Fragment::join(parts, " "))))
}

/// StartsWith, EndsWith and Contains expressed with LEFT, RIGHT and LOCATE.
pub(super) fn predicate(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    if !matches!(
        func,
        ScalarFunc::StartsWith | ScalarFunc::EndsWith | ScalarFunc::Contains
    ) {
        return Ok(None);
    }
    let [haystack, needle] = args.as_slice() else {
        return Ok(None);
    };
    let Some(haystack) = t.translate(haystack)? else {
        return Ok(None);
    };
    let Some(needle) = t.translate(needle)? else {
        return Ok(None);
    };

    let comparison = match func {
        ScalarFunc::Contains => vec![
            Fragment::func("LOCATE", vec![needle, haystack]),
            Fragment::raw(">"),
            RawText::integer(0).into(),
        ],
        _ => {
            let side = if *func == ScalarFunc::StartsWith {
                "LEFT"
            } else {
                "RIGHT"
            };
            let length = Fragment::func("CHAR_LENGTH", vec![needle.clone()]);
            vec![
                Fragment::func(side, vec![haystack, length]),
                Fragment::raw("="),
                needle,
            ]
        }
    };
    Ok(Some(Fragment::parenthesize(Fragment::join(comparison, " "))))
}
