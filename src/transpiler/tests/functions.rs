//! Scalar functions, casts and string matching.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use super::*;
use crate::ast::{MatchKind, ScalarFunc, Value};

#[test]
fn test_variadic_functions() {
    let coalesce = Expr::call(ScalarFunc::Coalesce, vec![long(1, "a"), Expr::lit(0i64)]);
    assert_eq!(sql(&coalesce), "COALESCE(`a`, 0)");

    let concat_ws = Expr::call(
        ScalarFunc::ConcatWs,
        vec![Expr::lit("-"), string(1, "a"), string(2, "b")],
    );
    let rendered = render(&concat_ws);
    assert_eq!(rendered.sql, "CONCAT_WS(?, `a`, `b`)");
    assert_eq!(rendered.params[0].value, Value::from("-"));

    let lonely = Expr::call(ScalarFunc::ConcatWs, vec![Expr::lit("-")]);
    assert!(untranslatable(&lonely));
}

#[test]
fn test_leaf_functions() {
    assert_eq!(sql(&Expr::call(ScalarFunc::CurrentTimestamp, vec![])), "NOW(6)");
    assert_eq!(sql(&Expr::call(ScalarFunc::CurrentDate, vec![])), "CURRENT_DATE()");
    assert_eq!(sql(&Expr::call(ScalarFunc::Pi, vec![])), "PI()");
}

#[test]
fn test_uuid_is_version_gated() {
    let uuid = Expr::call(ScalarFunc::Uuid, vec![]);
    assert_eq!(sql_at(&uuid, 8, 5).as_deref(), Some("UUID()"));
    assert_eq!(sql_at(&uuid, 8, 1), None);
}

#[test]
fn test_fixed_arity_functions() {
    assert_eq!(sql(&Expr::call(ScalarFunc::Abs, vec![long(1, "x")])), "ABS(`x`)");
    assert_eq!(
        sql(&Expr::call(ScalarFunc::Length, vec![string(1, "s")])),
        "CHAR_LENGTH(`s`)"
    );
    assert_eq!(
        sql(&Expr::call(
            ScalarFunc::Substring,
            vec![string(1, "s"), Expr::lit(2i64), Expr::lit(3i64)]
        )),
        "SUBSTRING(`s`, 2, 3)"
    );
    assert_eq!(
        sql(&Expr::call(ScalarFunc::Pow, vec![long(1, "x"), Expr::lit(2i64)])),
        "POWER(`x`, 2)"
    );
}

#[test]
fn test_wrong_arity_is_untranslatable() {
    assert!(untranslatable(&Expr::call(
        ScalarFunc::Abs,
        vec![long(1, "x"), long(2, "y")]
    )));
    assert!(untranslatable(&Expr::call(ScalarFunc::Lpad, vec![string(1, "s")])));
}

#[test]
fn test_round_only_for_exact_numbers() {
    let price = Expr::col(1, "price", DataType::Decimal { precision: 10, scale: 4 });
    assert_eq!(
        sql(&Expr::call(ScalarFunc::Round, vec![price, Expr::lit(2i32)])),
        "ROUND(`price`, 2)"
    );
    let ratio = Expr::col(2, "ratio", DataType::Double);
    assert!(untranslatable(&Expr::call(ScalarFunc::Round, vec![ratio])));
}

#[test]
fn test_casts() {
    let x = Expr::col(1, "x", DataType::Double);
    let n = long(2, "n");
    let s = string(3, "s");

    assert_eq!(sql(&x.clone().cast(DataType::Long)), "CAST(TRUNCATE(`x`, 0) AS SIGNED)");
    assert_eq!(sql(&n.clone().cast(DataType::Integer)), "CAST(`n` AS SIGNED)");
    assert_eq!(sql(&n.clone().cast(DataType::String)), "CAST(`n` AS CHAR)");
    assert_eq!(sql(&n.clone().cast(DataType::Double)), "CAST(`n` AS DOUBLE)");
    assert_eq!(sql(&s.clone().cast(DataType::Timestamp)), "CAST(`s` AS DATETIME(6))");
    assert_eq!(sql(&s.clone().cast(DataType::Date)), "CAST(`s` AS DATE)");
    assert_eq!(
        sql(&n.clone().cast(DataType::Decimal { precision: 70, scale: 40 })),
        "CAST(`n` AS DECIMAL(65,30))"
    );
    assert_eq!(sql(&n.clone().cast(DataType::Boolean)), "(`n` != 0)");
    assert_eq!(sql(&n.clone().cast(DataType::Long)), "`n`");
}

#[test]
fn test_casts_without_target_equivalent() {
    let bytes = Expr::col(1, "b", DataType::Binary);
    assert!(untranslatable(&bytes.cast(DataType::String)));
    assert!(untranslatable(&date(2, "d").cast(DataType::Long)));
    assert!(untranslatable(&string(3, "s").cast(DataType::Boolean)));
}

#[test]
fn test_boolean_to_string_spells_out_words() {
    let flag = Expr::col(1, "flag", DataType::Boolean);
    let rendered = render(&flag.cast(DataType::String));
    assert_eq!(rendered.sql, "IF(`flag`, ?, ?)");
    let params: Vec<Value> = rendered.params.into_iter().map(|p| p.value).collect();
    assert_eq!(params, vec![Value::from("true"), Value::from("false")]);
}

#[test]
fn test_decimal_literal_cast() {
    let d = Expr::lit(Decimal::new(125, 2));
    assert_eq!(sql(&d), "CAST(1.25 AS DECIMAL(3,2))");
}

#[test]
fn test_like_and_escape() {
    let plain = Expr::matches(MatchKind::Like { escape: '\\' }, string(1, "s"), Expr::lit("a%"));
    assert_eq!(sql(&plain), "(`s` LIKE ?)");

    let custom = Expr::matches(MatchKind::Like { escape: '!' }, string(1, "s"), Expr::lit("a!%"));
    let rendered = render(&custom);
    assert_eq!(rendered.sql, "(`s` LIKE ? ESCAPE ?)");
    assert_eq!(rendered.params[1].value, Value::from("!"));
}

#[test]
fn test_regex_matches() {
    let rlike = Expr::matches(MatchKind::RLike, string(1, "s"), Expr::lit("[0-9]+"));
    assert_eq!(sql(&rlike), "(`s` RLIKE ?)");

    let anchored = Expr::matches(MatchKind::RegexFromStart, string(1, "s"), Expr::lit("ab"));
    assert_eq!(sql(&anchored), "(`s` RLIKE CONCAT('^', ?))");
}

#[test]
fn test_string_predicates() {
    let starts = Expr::call(ScalarFunc::StartsWith, vec![string(1, "s"), Expr::lit("ab")]);
    let rendered = render(&starts);
    assert_eq!(rendered.sql, "(LEFT(`s`, CHAR_LENGTH(?)) = ?)");
    assert_eq!(rendered.params.len(), 2);

    let ends = Expr::call(ScalarFunc::EndsWith, vec![string(1, "s"), string(2, "t")]);
    assert_eq!(sql(&ends), "(RIGHT(`s`, CHAR_LENGTH(`t`)) = `t`)");

    let contains = Expr::call(ScalarFunc::Contains, vec![string(1, "s"), string(2, "t")]);
    assert_eq!(sql(&contains), "(LOCATE(`t`, `s`) > 0)");
}
