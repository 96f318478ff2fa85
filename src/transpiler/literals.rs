//! Literal encoding.
//!
//! Numbers and booleans have a fixed canonical rendering and are inlined.
//! Everything else that carries external content (strings, dates,
//! timestamps, binary) is bound as a parameter.

use crate::ast::{DataType, Value};
use crate::transpiler::fragment::{Fragment, RawText};

/// Largest DECIMAL precision the target accepts.
pub const MAX_DECIMAL_PRECISION: u8 = 65;
/// Largest DECIMAL scale the target accepts.
pub const MAX_DECIMAL_SCALE: u8 = 30;

/// `DECIMAL(p,s)` with precision and scale clamped to the target's maximum.
pub fn decimal_type(precision: u8, scale: u8) -> Fragment {
    Fragment::join(
        vec![
            Fragment::raw("DECIMAL("),
            RawText::integer(precision.min(MAX_DECIMAL_PRECISION)).into(),
            Fragment::raw(","),
            RawText::integer(scale.min(MAX_DECIMAL_SCALE)).into(),
            Fragment::raw(")"),
        ],
        "",
    )
}

/// Encode one literal. `None` means the value has no target literal form.
pub fn encode(value: &Value, data_type: DataType) -> Option<Fragment> {
    match value {
        Value::Null => Some(Fragment::bind(Value::Null, data_type)),
        Value::Bool(true) => Some(Fragment::raw("TRUE")),
        Value::Bool(false) => Some(Fragment::raw("FALSE")),
        Value::Byte(n) => Some(RawText::integer(*n).into()),
        Value::Short(n) => Some(RawText::integer(*n).into()),
        Value::Int(n) => Some(RawText::integer(*n).into()),
        Value::Long(n) => Some(RawText::integer(*n).into()),
        Value::Decimal(d) => {
            let (precision, scale) = match data_type {
                DataType::Decimal { precision, scale } => (precision, scale),
                _ => match value.natural_type() {
                    DataType::Decimal { precision, scale } => (precision, scale),
                    _ => return None,
                },
            };
            Some(Fragment::join(
                vec![
                    Fragment::raw("CAST("),
                    RawText::decimal(d).into(),
                    Fragment::raw(" AS "),
                    decimal_type(precision, scale),
                    Fragment::raw(")"),
                ],
                "",
            ))
        }
        Value::Float(f) => RawText::float(*f).map(Fragment::from),
        Value::Double(f) => RawText::float(*f).map(Fragment::from),
        Value::String(_) | Value::Binary(_) | Value::Date(_) | Value::Timestamp(_) => {
            Some(Fragment::bind(value.clone(), data_type))
        }
        Value::Interval {
            months,
            days,
            micros,
        } => encode_interval(*months, *days, *micros),
    }
}

/// Encode every value or nothing.
pub fn encode_all(values: &[Value], data_type: DataType) -> Option<Vec<Fragment>> {
    values.iter().map(|v| encode(v, data_type)).collect()
}

// Only single-unit intervals have a literal form.
fn encode_interval(months: i32, days: i32, micros: i64) -> Option<Fragment> {
    let (amount, unit): (i64, &'static str) = match (months, days, micros) {
        (0, 0, 0) => (0, "DAY"),
        (m, 0, 0) => (m as i64, "MONTH"),
        (0, d, 0) => (d as i64, "DAY"),
        (0, 0, us) => (us, "MICROSECOND"),
        _ => return None,
    };
    Some(Fragment::join(
        vec![
            Fragment::raw("INTERVAL"),
            RawText::integer(amount).into(),
            Fragment::raw(unit),
        ],
        " ",
    ))
}
