use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DataType;

/// A host-side scalar value carried by a literal node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// Fixed-point decimal; precision and scale come from the literal's type.
    Decimal(Decimal),
    /// String
    String(String),
    Binary(Vec<u8>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    /// Calendar interval split into its independent components.
    Interval { months: i32, days: i32, micros: i64 },
}

impl Value {
    /// The type a bare value implies when the host does not supply one.
    pub fn natural_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Boolean,
            Value::Byte(_) => DataType::Byte,
            Value::Short(_) => DataType::Short,
            Value::Int(_) => DataType::Integer,
            Value::Long(_) => DataType::Long,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Decimal(d) => {
                let scale = d.scale().min(u8::MAX as u32) as u8;
                let digits = d.mantissa().unsigned_abs().to_string().len() as u8;
                DataType::Decimal {
                    precision: digits.max(scale).max(1),
                    scale,
                }
            }
            Value::String(_) => DataType::String,
            Value::Binary(_) => DataType::Binary,
            Value::Date(_) => DataType::Date,
            Value::Timestamp(_) => DataType::Timestamp,
            Value::Interval { .. } => DataType::Interval,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Byte(n) => write!(f, "{}", n),
            Value::Short(n) => write!(f, "{}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "'{}'", s),
            Value::Binary(bytes) => {
                write!(f, "0x")?;
                for b in bytes {
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
            Value::Date(d) => write!(f, "DATE '{}'", d),
            Value::Timestamp(ts) => write!(f, "TIMESTAMP '{}'", ts),
            Value::Interval {
                months,
                days,
                micros,
            } => write!(f, "INTERVAL {} months {} days {} micros", months, days, micros),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}
