use crate::ast::Expr;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::{Translation, Translator};

/// `IF(p, t, e)` and `CASE WHEN .. THEN .. [ELSE ..] END`.
pub(super) fn conditional(t: &Translator<'_>, expr: &Expr) -> Translation {
    match expr {
        Expr::If {
            predicate,
            then,
            otherwise,
        } => {
            let parts = [predicate.as_ref(), then.as_ref(), otherwise.as_ref()];
            let Some(args) = t.translate_all(parts)? else {
                return Ok(None);
            };
            Ok(Some(Fragment::func("IF", args)))
        }
        Expr::Case {
            branches,
            otherwise,
        } => case(t, branches, otherwise.as_deref()),
        _ => Ok(None),
    }
}

fn case(t: &Translator<'_>, branches: &[(Expr, Expr)], otherwise: Option<&Expr>) -> Translation {
    if branches.is_empty() {
        return Ok(None);
    }
    let mut parts = vec![Fragment::raw("CASE")];
    for (condition, result) in branches {
        let Some(condition) = t.translate(condition)? else {
            return Ok(None);
        };
        let Some(result) = t.translate(result)? else {
            return Ok(None);
        };
        parts.extend([
            Fragment::raw("WHEN"),
            condition,
            Fragment::raw("THEN"),
            result,
        ]);
    }
    if let Some(otherwise) = otherwise {
        let Some(otherwise) = t.translate(otherwise)? else {
            return Ok(None);
        };
        parts.extend([Fragment::raw("ELSE"), otherwise]);
    }
    parts.push(Fragment::raw("END"));
    Ok(Some(Fragment::join(parts, " ")))
}
