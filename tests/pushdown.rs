//! End-to-end translation through the public API.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use pushdown::prelude::*;

fn total() -> Expr {
    Expr::Column(ColumnRef::new(1, "total", DataType::Long).qualified("orders"))
}

#[test]
fn test_json_expression_tree() {
    let json = r#"{
        "Binary": {
            "op": "And",
            "left": {
                "Binary": {
                    "op": "Gt",
                    "left": { "Column": { "id": 1, "name": "total", "data_type": "Long" } },
                    "right": { "Literal": { "value": { "Long": 100 }, "data_type": "Long" } }
                }
            },
            "right": {
                "Match": {
                    "kind": { "Like": { "escape": "\\" } },
                    "child": { "Column": { "id": 2, "name": "region", "data_type": "String" } },
                    "pattern": { "Literal": { "value": { "String": "EU%" }, "data_type": "String" } }
                }
            }
        }
    }"#;
    let expr: Expr = serde_json::from_str(json).unwrap();
    let sql = pushdown::translate(&expr, &TranslationContext::default())
        .unwrap()
        .unwrap();
    assert_eq!(sql.sql, "((`total` > 100) AND (`region` LIKE ?))");
    assert_eq!(sql.params.len(), 1);
    assert_eq!(sql.params[0].value, Value::from("EU%"));
}

#[test]
fn test_projection_with_alias_and_window() {
    let running = Expr::window(
        WindowCall::new(WindowFunction::Aggregate(AggregateCall::new(
            AggregateFunc::Sum,
            vec![total()],
        )))
        .partition_by(vec![Expr::col(2, "region", DataType::String)])
        .order_by(vec![SortKey::asc(Expr::col(3, "day", DataType::Date))])
        .frame(WindowFrame::rows(
            FrameBoundary::UnboundedPreceding,
            FrameBoundary::CurrentRow,
        )),
    )
    .alias("running_total");

    let sql = running.to_sql(&TranslationContext::default()).unwrap().unwrap();
    assert_eq!(
        sql.sql,
        "SUM(`orders`.`total`) OVER (PARTITION BY `region` ORDER BY `day` ASC \
         ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW) AS `running_total`"
    );
}

#[test]
fn test_configured_context() {
    let config = PushdownConfig::from_toml(
        r#"
        [dialect]
        version = "6.0"

        [columns]
        "orders.total" = "o_total"
        "#,
    )
    .unwrap();
    let ctx = config.context().unwrap();

    let bits = Expr::aggregate(AggregateCall::new(AggregateFunc::BitOr, vec![total()]));
    assert!(bits.to_sql(&ctx).unwrap().is_none());

    let approx = Expr::aggregate(AggregateCall::new(
        AggregateFunc::ApproxCountDistinct,
        vec![total()],
    ));
    assert_eq!(
        approx.to_sql(&ctx).unwrap().unwrap().sql,
        "APPROX_COUNT_DISTINCT(`o_total`)"
    );
}

#[test]
fn test_weekday_error_reaches_the_caller() {
    let expr = Expr::call(
        ScalarFunc::NextDay,
        vec![Expr::col(1, "d", DataType::Date), Expr::lit("Caturday")],
    );
    let err = pushdown::translate(&expr, &TranslationContext::default()).unwrap_err();
    assert!(matches!(err, PushdownError::UnknownWeekday(_)));
    assert!(err.to_string().contains("Caturday"));
}

#[test]
fn test_context_is_shared_across_threads() {
    let ctx = Arc::new(TranslationContext::new(Version::new(7, 5, 0)));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                let expr = Expr::binary(total(), BinaryOp::Add, Expr::lit(i as i64));
                expr.to_sql(&ctx).unwrap().unwrap().sql
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            "(`orders`.`total` + 0)",
            "(`orders`.`total` + 1)",
            "(`orders`.`total` + 2)",
            "(`orders`.`total` + 3)",
        ]
    );
}
