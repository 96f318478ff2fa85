use serde::{Deserialize, Serialize};

use super::{
    AggregateFunc, BinaryOp, DataType, FrameKind, MatchKind, NullOrdering, ScalarFunc,
    SortDirection, UnaryOp, Value,
};

/// Logical column identity as resolved by the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Host-assigned unique id (stable across renames and aliases).
    pub id: u64,
    pub name: String,
    /// Table or subquery qualifier, if any.
    pub qualifier: Option<String>,
    pub data_type: DataType,
}

impl ColumnRef {
    pub fn new(id: u64, name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            id,
            name: name.into(),
            qualifier: None,
            data_type,
        }
    }

    pub fn qualified(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// `qualifier.name` or just `name`.
    pub fn display_name(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{}.{}", q, self.name),
            None => self.name.clone(),
        }
    }
}

/// An aggregate call with optional DISTINCT and FILTER (WHERE ...) clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateCall {
    pub func: AggregateFunc,
    /// Empty for COUNT(*)
    pub args: Vec<Expr>,
    pub distinct: bool,
    pub filter: Option<Box<Expr>>,
}

impl AggregateCall {
    pub fn new(func: AggregateFunc, args: Vec<Expr>) -> Self {
        Self {
            func,
            args,
            distinct: false,
            filter: None,
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn filter(mut self, condition: Expr) -> Self {
        self.filter = Some(Box::new(condition));
        self
    }
}

/// Functions that may appear in a window expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowFunction {
    Aggregate(AggregateCall),
    RowNumber,
    Rank,
    DenseRank,
    PercentRank,
    CumeDist,
    Ntile(Box<Expr>),
    Lag {
        input: Box<Expr>,
        offset: i64,
        default: Option<Box<Expr>>,
    },
    Lead {
        input: Box<Expr>,
        offset: i64,
        default: Option<Box<Expr>>,
    },
    FirstValue(Box<Expr>),
    LastValue(Box<Expr>),
    NthValue(Box<Expr>, i64),
}

/// One boundary of a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameBoundary {
    UnboundedPreceding,
    UnboundedFollowing,
    CurrentRow,
    /// Signed offset: negative is PRECEDING, non-negative is FOLLOWING.
    Offset(i64),
}

/// Window frame specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub kind: FrameKind,
    pub start: FrameBoundary,
    pub end: FrameBoundary,
}

impl WindowFrame {
    pub fn rows(start: FrameBoundary, end: FrameBoundary) -> Self {
        Self {
            kind: FrameKind::Rows,
            start,
            end,
        }
    }

    pub fn range(start: FrameBoundary, end: FrameBoundary) -> Self {
        Self {
            kind: FrameKind::Range,
            start,
            end,
        }
    }
}

/// ORDER BY key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub expr: Expr,
    pub direction: SortDirection,
    pub nulls: NullOrdering,
}

impl SortKey {
    /// Ascending with NULLs first.
    pub fn asc(expr: Expr) -> Self {
        Self {
            expr,
            direction: SortDirection::Asc,
            nulls: NullOrdering::NullsFirst,
        }
    }

    /// Descending with NULLs last.
    pub fn desc(expr: Expr) -> Self {
        Self {
            expr,
            direction: SortDirection::Desc,
            nulls: NullOrdering::NullsLast,
        }
    }

    pub fn nulls(mut self, nulls: NullOrdering) -> Self {
        self.nulls = nulls;
        self
    }
}

/// A window call: function plus its OVER clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowCall {
    pub func: WindowFunction,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<SortKey>,
    pub frame: Option<WindowFrame>,
}

impl WindowCall {
    pub fn new(func: WindowFunction) -> Self {
        Self {
            func,
            partition_by: Vec::new(),
            order_by: Vec::new(),
            frame: None,
        }
    }

    pub fn partition_by(mut self, exprs: Vec<Expr>) -> Self {
        self.partition_by = exprs;
        self
    }

    pub fn order_by(mut self, keys: Vec<SortKey>) -> Self {
        self.order_by = keys;
        self
    }

    pub fn frame(mut self, frame: WindowFrame) -> Self {
        self.frame = Some(frame);
        self
    }
}

/// A type-resolved expression node handed over by the host engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal value with its semantic type
    Literal { value: Value, data_type: DataType },
    /// Column reference
    Column(ColumnRef),
    /// expr AS name
    Alias { child: Box<Expr>, name: String },
    Unary { op: UnaryOp, child: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// N-ary scalar function call
    Call { func: ScalarFunc, args: Vec<Expr> },
    /// IF(predicate, then, otherwise)
    If {
        predicate: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
    /// CASE WHEN .. THEN .. [ELSE ..] END
    Case {
        branches: Vec<(Expr, Expr)>,
        otherwise: Option<Box<Expr>>,
    },
    /// LIKE / RLIKE style pattern match
    Match {
        kind: MatchKind,
        child: Box<Expr>,
        pattern: Box<Expr>,
    },
    /// child [NOT] IN (expr, ...)
    InList {
        child: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    /// child [NOT] IN (literal, ...) over a constant set
    InSet {
        child: Box<Expr>,
        values: Vec<Value>,
        data_type: DataType,
        negated: bool,
    },
    Cast { child: Box<Expr>, to: DataType },
    Aggregate(AggregateCall),
    Window(Box<WindowCall>),
}

impl Expr {
    /// Literal with an explicit type.
    pub fn typed(value: impl Into<Value>, data_type: DataType) -> Self {
        Expr::Literal {
            value: value.into(),
            data_type,
        }
    }

    /// Literal typed by its value.
    pub fn lit(value: impl Into<Value>) -> Self {
        let value = value.into();
        let data_type = value.natural_type();
        Expr::Literal { value, data_type }
    }

    /// Typed NULL literal.
    pub fn null(data_type: DataType) -> Self {
        Expr::Literal {
            value: Value::Null,
            data_type,
        }
    }

    pub fn col(id: u64, name: impl Into<String>, data_type: DataType) -> Self {
        Expr::Column(ColumnRef::new(id, name, data_type))
    }

    pub fn alias(self, name: impl Into<String>) -> Self {
        Expr::Alias {
            child: Box::new(self),
            name: name.into(),
        }
    }

    pub fn unary(op: UnaryOp, child: Expr) -> Self {
        Expr::Unary {
            op,
            child: Box::new(child),
        }
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(func: ScalarFunc, args: Vec<Expr>) -> Self {
        Expr::Call { func, args }
    }

    pub fn cast(self, to: DataType) -> Self {
        Expr::Cast {
            child: Box::new(self),
            to,
        }
    }

    pub fn if_then(predicate: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::If {
            predicate: Box::new(predicate),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn matches(kind: MatchKind, child: Expr, pattern: Expr) -> Self {
        Expr::Match {
            kind,
            child: Box::new(child),
            pattern: Box::new(pattern),
        }
    }

    pub fn aggregate(call: AggregateCall) -> Self {
        Expr::Aggregate(call)
    }

    pub fn window(call: WindowCall) -> Self {
        Expr::Window(Box::new(call))
    }

    /// The literal value, if this node is a literal.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// The string contents, if this node is a non-null string literal.
    pub fn as_string_literal(&self) -> Option<&str> {
        self.as_literal().and_then(Value::as_str)
    }

    /// Semantic type of this node as the host resolved it.
    pub fn data_type(&self) -> DataType {
        match self {
            Expr::Literal { data_type, .. } => *data_type,
            Expr::Column(col) => col.data_type,
            Expr::Alias { child, .. } => child.data_type(),
            Expr::Unary { op, child } => match op {
                UnaryOp::Not | UnaryOp::IsNull | UnaryOp::IsNotNull => DataType::Boolean,
                UnaryOp::Negate | UnaryOp::BitNot => child.data_type(),
            },
            Expr::Binary { op, left, .. } => {
                if op.is_predicate() {
                    DataType::Boolean
                } else {
                    left.data_type()
                }
            }
            Expr::Call { func, args } => {
                let arg_types: Vec<DataType> = args.iter().map(Expr::data_type).collect();
                func.return_type(&arg_types)
            }
            Expr::If { then, .. } => then.data_type(),
            Expr::Case { branches, otherwise } => branches
                .first()
                .map(|(_, result)| result.data_type())
                .or_else(|| otherwise.as_ref().map(|e| e.data_type()))
                .unwrap_or(DataType::Null),
            Expr::Match { .. } | Expr::InList { .. } | Expr::InSet { .. } => DataType::Boolean,
            Expr::Cast { to, .. } => *to,
            Expr::Aggregate(call) => aggregate_type(call),
            Expr::Window(call) => match &call.func {
                WindowFunction::Aggregate(agg) => aggregate_type(agg),
                WindowFunction::RowNumber
                | WindowFunction::Rank
                | WindowFunction::DenseRank
                | WindowFunction::Ntile(_) => DataType::Long,
                WindowFunction::PercentRank | WindowFunction::CumeDist => DataType::Double,
                WindowFunction::Lag { input, .. }
                | WindowFunction::Lead { input, .. }
                | WindowFunction::FirstValue(input)
                | WindowFunction::LastValue(input)
                | WindowFunction::NthValue(input, _) => input.data_type(),
            },
        }
    }
}

fn aggregate_type(call: &AggregateCall) -> DataType {
    match call.func {
        AggregateFunc::Count | AggregateFunc::ApproxCountDistinct => DataType::Long,
        AggregateFunc::Avg
        | AggregateFunc::StddevPop
        | AggregateFunc::StddevSamp
        | AggregateFunc::VarPop
        | AggregateFunc::VarSamp => DataType::Double,
        _ => call
            .args
            .first()
            .map(Expr::data_type)
            .unwrap_or(DataType::Null),
    }
}
