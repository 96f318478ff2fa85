use crate::ast::Expr;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::literals;
use crate::transpiler::{Translation, Translator};

pub(super) fn column(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Column(col) = expr else {
        return Ok(None);
    };
    let resolved = t.context().resolve(col);
    if resolved.is_none() {
        tracing::trace!(column = %col.display_name(), "column not visible to target");
    }
    Ok(resolved)
}

pub(super) fn literal(_: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Literal { value, data_type } = expr else {
        return Ok(None);
    };
    Ok(literals::encode(value, *data_type))
}

/// A nested alias names nothing in SQL; only the child is rendered.
/// Root aliases go through [`aliased`].
pub(super) fn alias(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Alias { child, .. } = expr else {
        return Ok(None);
    };
    t.translate(child)
}

/// `<child> AS <ident>`
pub fn aliased(inner: Fragment, name: &str) -> Fragment {
    Fragment::join(
        vec![inner, Fragment::raw("AS"), Fragment::ident(name.to_string())],
        " ",
    )
}
