use serde::{Deserialize, Serialize};

/// Binary operators. Each renders as `(<left> OP <right>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Modulo (%)
    Rem,
    /// Integer division (DIV)
    IntDiv,
    Eq,
    NotEq,
    /// Null-safe equality (<=>)
    NullSafeEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOp {
    /// Target-dialect token for this operator.
    pub fn token(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::IntDiv => "DIV",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::NullSafeEq => "<=>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
        }
    }

    /// Comparisons and logical connectives yield booleans.
    pub fn is_predicate(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::NullSafeEq
                | BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
                | BinaryOp::And
                | BinaryOp::Or
        )
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Not,
    Negate,
    BitNot,
    IsNull,
    IsNotNull,
}

/// Aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    /// COUNT; with no arguments this is COUNT(*)
    Count,
    Sum,
    Avg,
    Min,
    Max,
    StddevPop,
    StddevSamp,
    VarPop,
    VarSamp,
    AnyValue,
    ApproxCountDistinct,
    BitAnd,
    BitOr,
    BitXor,
}

impl AggregateFunc {
    /// Target-dialect function name.
    pub fn sql_name(&self) -> &'static str {
        match self {
            AggregateFunc::Count => "COUNT",
            AggregateFunc::Sum => "SUM",
            AggregateFunc::Avg => "AVG",
            AggregateFunc::Min => "MIN",
            AggregateFunc::Max => "MAX",
            AggregateFunc::StddevPop => "STDDEV_POP",
            AggregateFunc::StddevSamp => "STDDEV_SAMP",
            AggregateFunc::VarPop => "VAR_POP",
            AggregateFunc::VarSamp => "VAR_SAMP",
            AggregateFunc::AnyValue => "ANY_VALUE",
            AggregateFunc::ApproxCountDistinct => "APPROX_COUNT_DISTINCT",
            AggregateFunc::BitAnd => "BIT_AND",
            AggregateFunc::BitOr => "BIT_OR",
            AggregateFunc::BitXor => "BIT_XOR",
        }
    }
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sql_name())
    }
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Where NULLs land in an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullOrdering {
    NullsFirst,
    NullsLast,
}

/// String pattern matching flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// SQL LIKE with the given escape character.
    Like { escape: char },
    /// Regex search anywhere in the input (same default anchoring as RLIKE).
    RLike,
    /// Regex that must match at the start of the input.
    RegexFromStart,
}

/// ROWS or RANGE window frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameKind {
    Rows,
    Range,
}
