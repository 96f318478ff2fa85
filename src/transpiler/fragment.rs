//! Output-dialect fragments.
//!
//! A fragment is either fixed text, a quoted identifier, a bound parameter,
//! or an ordered composite of other fragments. Text that did not originate in
//! this crate can only enter the output as an identifier (quoted on render)
//! or a bound value (sent out of band); `RawText` has no constructor that
//! takes an arbitrary `String`.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ast::{DataType, Value};

/// Placeholder emitted for every bound value.
pub const PLACEHOLDER: &str = "?";

/// Text that is safe to inline: fixed keywords or canonical number renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText(Cow<'static, str>);

impl RawText {
    /// A keyword, operator or punctuation baked into the translator.
    pub const fn keyword(text: &'static str) -> Self {
        RawText(Cow::Borrowed(text))
    }

    /// Canonical decimal rendering of an integer.
    pub fn integer(n: impl Into<i128>) -> Self {
        RawText(Cow::Owned(n.into().to_string()))
    }

    /// Scientific-notation rendering so the target types it as DOUBLE.
    /// Returns `None` for NaN and infinities, which have no literal form.
    pub fn float<F>(f: F) -> Option<Self>
    where
        F: Into<f64> + std::fmt::LowerExp + Copy,
    {
        if f.into().is_finite() {
            Some(RawText(Cow::Owned(format!("{:e}", f))))
        } else {
            None
        }
    }

    /// Plain digits of a decimal (sign, digits, optional point).
    pub fn decimal(d: &Decimal) -> Self {
        RawText(Cow::Owned(d.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A value sent out of band in place of a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundValue {
    pub value: Value,
    pub data_type: DataType,
}

/// Rendered statement text and its positional parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedSql {
    pub sql: String,
    pub params: Vec<BoundValue>,
}

/// Composable unit of target-dialect output.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Raw(RawText),
    /// Identifier, backtick-quoted at render time
    Ident(String),
    Bound(BoundValue),
    Composite {
        parts: Vec<Fragment>,
        sep: &'static str,
        parens: bool,
    },
}

impl Fragment {
    pub const fn raw(text: &'static str) -> Self {
        Fragment::Raw(RawText::keyword(text))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Fragment::Ident(name.into())
    }

    pub fn bind(value: Value, data_type: DataType) -> Self {
        Fragment::Bound(BoundValue { value, data_type })
    }

    /// `a <sep> b`
    pub fn concat(a: Fragment, b: Fragment, sep: &'static str) -> Self {
        Fragment::join(vec![a, b], sep)
    }

    /// All parts in order, separated by `sep`.
    pub fn join(parts: Vec<Fragment>, sep: &'static str) -> Self {
        Fragment::Composite {
            parts,
            sep,
            parens: false,
        }
    }

    /// `(f)`
    pub fn parenthesize(f: Fragment) -> Self {
        Fragment::Composite {
            parts: vec![f],
            sep: "",
            parens: true,
        }
    }

    /// `NAME(arg, arg, ...)`
    pub fn func(name: &'static str, args: Vec<Fragment>) -> Self {
        Fragment::join(
            vec![
                Fragment::raw(name),
                Fragment::Composite {
                    parts: args,
                    sep: ", ",
                    parens: true,
                },
            ],
            "",
        )
    }

    /// Statement text with `?` placeholders and the matching parameter list.
    pub fn render(&self) -> RenderedSql {
        let mut out = RenderedSql::default();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut RenderedSql) {
        match self {
            Fragment::Raw(text) => out.sql.push_str(text.as_str()),
            Fragment::Ident(name) => out.sql.push_str(&quote_identifier(name)),
            Fragment::Bound(bound) => {
                out.sql.push_str(PLACEHOLDER);
                out.params.push(bound.clone());
            }
            Fragment::Composite { parts, sep, parens } => {
                if *parens {
                    out.sql.push('(');
                }
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.sql.push_str(sep);
                    }
                    part.write_to(out);
                }
                if *parens {
                    out.sql.push(')');
                }
            }
        }
    }
}

impl From<RawText> for Fragment {
    fn from(text: RawText) -> Self {
        Fragment::Raw(text)
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render().sql)
    }
}

/// Backtick-quote an identifier, doubling embedded backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_preserves_order() {
        let f = Fragment::concat(Fragment::raw("a"), Fragment::raw("b"), " AND ");
        assert_eq!(f.to_string(), "a AND b");
    }

    #[test]
    fn test_parenthesize() {
        let f = Fragment::parenthesize(Fragment::concat(
            Fragment::raw("1"),
            Fragment::raw("2"),
            " + ",
        ));
        assert_eq!(f.to_string(), "(1 + 2)");
    }

    #[test]
    fn test_func_renders_args() {
        let f = Fragment::func("GREATEST", vec![Fragment::raw("1"), Fragment::raw("2")]);
        assert_eq!(f.to_string(), "GREATEST(1, 2)");
        assert_eq!(Fragment::func("PI", vec![]).to_string(), "PI()");
    }

    #[test]
    fn test_render_collects_params_in_order() {
        let f = Fragment::join(
            vec![
                Fragment::bind(Value::String("x".into()), DataType::String),
                Fragment::raw("="),
                Fragment::bind(Value::Long(7), DataType::Long),
            ],
            " ",
        );
        let rendered = f.render();
        assert_eq!(rendered.sql, "? = ?");
        assert_eq!(rendered.params.len(), 2);
        assert_eq!(rendered.params[0].value, Value::String("x".into()));
        assert_eq!(rendered.params[1].value, Value::Long(7));
    }

    #[test]
    fn test_ident_is_quoted_and_escaped() {
        assert_eq!(Fragment::ident("total").to_string(), "`total`");
        assert_eq!(Fragment::ident("we`ird").to_string(), "`we``ird`");
    }

    #[test]
    fn test_raw_float_rejects_non_finite() {
        assert!(RawText::float(f64::NAN).is_none());
        assert!(RawText::float(f64::INFINITY).is_none());
        assert_eq!(RawText::float(1.5).unwrap().as_str(), "1.5e0");
    }
}
