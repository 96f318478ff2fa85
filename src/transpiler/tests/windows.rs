//! Window functions and OVER clauses.

use pretty_assertions::assert_eq;

use super::*;
use crate::ast::{
    AggregateCall, AggregateFunc, BinaryOp, FrameBoundary, NullOrdering, SortKey, WindowCall,
    WindowFrame, WindowFunction,
};
use crate::transpiler::rules::frame_boundary;

#[test]
fn test_frame_boundaries() {
    let render = |b| frame_boundary(b).to_string();
    assert_eq!(render(FrameBoundary::Offset(-3)), "3 PRECEDING");
    assert_eq!(render(FrameBoundary::Offset(2)), "2 FOLLOWING");
    assert_eq!(render(FrameBoundary::Offset(0)), "0 FOLLOWING");
    assert_eq!(render(FrameBoundary::UnboundedPreceding), "UNBOUNDED PRECEDING");
    assert_eq!(render(FrameBoundary::CurrentRow), "CURRENT ROW");
}

#[test]
fn test_empty_over_clause() {
    let expr = Expr::window(WindowCall::new(WindowFunction::Rank));
    assert_eq!(sql(&expr), "RANK() OVER ()");
}

#[test]
fn test_partition_and_order() {
    let expr = Expr::window(
        WindowCall::new(WindowFunction::RowNumber)
            .partition_by(vec![long(1, "p")])
            .order_by(vec![SortKey::asc(long(2, "o")), SortKey::desc(long(3, "q"))]),
    );
    assert_eq!(
        sql(&expr),
        "ROW_NUMBER() OVER (PARTITION BY `p` ORDER BY `o` ASC, `q` DESC)"
    );
}

#[test]
fn test_aggregate_with_frame() {
    let sum = AggregateCall::new(AggregateFunc::Sum, vec![long(1, "x")]);
    let expr = Expr::window(
        WindowCall::new(WindowFunction::Aggregate(sum))
            .order_by(vec![SortKey::desc(long(2, "o"))])
            .frame(WindowFrame::rows(
                FrameBoundary::Offset(-3),
                FrameBoundary::Offset(2),
            )),
    );
    assert_eq!(
        sql(&expr),
        "SUM(`x`) OVER (ORDER BY `o` DESC ROWS BETWEEN 3 PRECEDING AND 2 FOLLOWING)"
    );
}

#[test]
fn test_range_frame() {
    let expr = Expr::window(
        WindowCall::new(WindowFunction::CumeDist)
            .order_by(vec![SortKey::asc(long(1, "o"))])
            .frame(WindowFrame::range(
                FrameBoundary::UnboundedPreceding,
                FrameBoundary::CurrentRow,
            )),
    );
    assert_eq!(
        sql(&expr),
        "CUME_DIST() OVER (ORDER BY `o` ASC RANGE BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)"
    );
}

#[test]
fn test_filtered_aggregate_in_window() {
    let count = AggregateCall::new(AggregateFunc::Count, vec![])
        .filter(Expr::binary(long(1, "x"), BinaryOp::Gt, Expr::lit(0i64)));
    let expr = Expr::window(WindowCall::new(WindowFunction::Aggregate(count)));
    assert_eq!(sql(&expr), "COUNT(IF((`x` > 0), 1, NULL)) OVER ()");
}

#[test]
fn test_distinct_aggregate_in_window_is_untranslatable() {
    let count = AggregateCall::new(AggregateFunc::Count, vec![long(1, "x")]).distinct();
    let expr = Expr::window(WindowCall::new(WindowFunction::Aggregate(count)));
    assert!(untranslatable(&expr));
}

#[test]
fn test_offset_functions() {
    let lag = WindowFunction::Lag {
        input: Box::new(long(1, "x")),
        offset: 1,
        default: Some(Box::new(Expr::lit(0i64))),
    };
    let expr = Expr::window(WindowCall::new(lag).order_by(vec![SortKey::asc(long(2, "o"))]));
    assert_eq!(sql(&expr), "LAG(`x`, 1, 0) OVER (ORDER BY `o` ASC)");

    let lead = WindowFunction::Lead {
        input: Box::new(long(1, "x")),
        offset: 2,
        default: None,
    };
    assert_eq!(sql(&Expr::window(WindowCall::new(lead))), "LEAD(`x`, 2) OVER ()");

    let nth = WindowFunction::NthValue(Box::new(long(1, "x")), 3);
    assert_eq!(sql(&Expr::window(WindowCall::new(nth))), "NTH_VALUE(`x`, 3) OVER ()");

    let ntile = WindowFunction::Ntile(Box::new(Expr::lit(4i32)));
    assert_eq!(sql(&Expr::window(WindowCall::new(ntile))), "NTILE(4) OVER ()");
}

#[test]
fn test_offsets_outside_target_domain_are_untranslatable() {
    let lag = WindowFunction::Lag {
        input: Box::new(long(1, "x")),
        offset: -1,
        default: None,
    };
    assert!(untranslatable(&Expr::window(WindowCall::new(lag))));

    let lead = WindowFunction::Lead {
        input: Box::new(long(1, "x")),
        offset: -2,
        default: None,
    };
    assert!(untranslatable(&Expr::window(WindowCall::new(lead))));

    let zero = WindowFunction::Lag {
        input: Box::new(long(1, "x")),
        offset: 0,
        default: None,
    };
    assert_eq!(sql(&Expr::window(WindowCall::new(zero))), "LAG(`x`, 0) OVER ()");

    for n in [0, -1] {
        let nth = WindowFunction::NthValue(Box::new(long(1, "x")), n);
        assert!(untranslatable(&Expr::window(WindowCall::new(nth))), "n = {}", n);
    }
}

#[test]
fn test_non_default_null_ordering_is_untranslatable() {
    let expr = Expr::window(
        WindowCall::new(WindowFunction::RowNumber)
            .order_by(vec![SortKey::asc(long(1, "o")).nulls(NullOrdering::NullsLast)]),
    );
    assert!(untranslatable(&expr));

    let expr = Expr::window(
        WindowCall::new(WindowFunction::DenseRank)
            .order_by(vec![SortKey::desc(long(1, "o")).nulls(NullOrdering::NullsFirst)]),
    );
    assert!(untranslatable(&expr));
}
