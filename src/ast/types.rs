use serde::{Deserialize, Serialize};

/// Semantic value type attached to every expression node by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    /// Fixed-point decimal with host-side precision and scale.
    Decimal { precision: u8, scale: u8 },
    String,
    Binary,
    Date,
    Timestamp,
    Interval,
}

impl DataType {
    /// Byte, short, int or long.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            DataType::Byte | DataType::Short | DataType::Integer | DataType::Long
        )
    }

    /// Decimal, float or double.
    pub fn is_fractional(&self) -> bool {
        matches!(
            self,
            DataType::Float | DataType::Double | DataType::Decimal { .. }
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integral() || self.is_fractional()
    }

    /// Date or timestamp.
    pub fn is_temporal(&self) -> bool {
        matches!(self, DataType::Date | DataType::Timestamp)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Null => write!(f, "null"),
            DataType::Boolean => write!(f, "boolean"),
            DataType::Byte => write!(f, "byte"),
            DataType::Short => write!(f, "short"),
            DataType::Integer => write!(f, "int"),
            DataType::Long => write!(f, "long"),
            DataType::Float => write!(f, "float"),
            DataType::Double => write!(f, "double"),
            DataType::Decimal { precision, scale } => write!(f, "decimal({}, {})", precision, scale),
            DataType::String => write!(f, "string"),
            DataType::Binary => write!(f, "binary"),
            DataType::Date => write!(f, "date"),
            DataType::Timestamp => write!(f, "timestamp"),
            DataType::Interval => write!(f, "interval"),
        }
    }
}
