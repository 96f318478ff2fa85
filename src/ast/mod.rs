pub mod expr;
pub mod functions;
pub mod operators;
pub mod types;
pub mod values;

pub use self::expr::{
    AggregateCall, ColumnRef, Expr, FrameBoundary, SortKey, WindowCall, WindowFrame,
    WindowFunction,
};
pub use self::functions::{FunctionShape, ScalarFunc};
pub use self::operators::{
    AggregateFunc, BinaryOp, FrameKind, MatchKind, NullOrdering, SortDirection, UnaryOp,
};
pub use self::types::DataType;
pub use self::values::Value;
