//! Composite temporal functions rewritten into primitive expression trees.
//!
//! The target has no counterpart for things like "next Monday after" or
//! "weeks between, starting on Sunday". Each composite call is replaced by an
//! equivalent tree of primitives, which the translator then handles like any
//! other input. Day arithmetic is anchored on the unix epoch, 1970-01-01,
//! which was a Thursday.

use chrono::NaiveDate;

use crate::ast::{BinaryOp, DataType, Expr, ScalarFunc, Value};
use crate::error::{PushdownError, PushdownResult};

/// Days after Thursday, with the spellings accepted for each weekday.
const WEEKDAYS: [([&str; 3], i64); 7] = [
    (["TH", "THU", "THURSDAY"], 0),
    (["FR", "FRI", "FRIDAY"], 1),
    (["SA", "SAT", "SATURDAY"], 2),
    (["SU", "SUN", "SUNDAY"], 3),
    (["MO", "MON", "MONDAY"], 4),
    (["TU", "TUE", "TUESDAY"], 5),
    (["WE", "WED", "WEDNESDAY"], 6),
];

/// Offset of `name` from the epoch weekday (Thursday = 0).
///
/// Two-letter, three-letter and full English names are accepted in any case.
pub fn weekday_offset(name: &str) -> PushdownResult<i64> {
    WEEKDAYS
        .iter()
        .find(|(spellings, _)| spellings.iter().any(|s| s.eq_ignore_ascii_case(name)))
        .map(|(_, offset)| *offset)
        .ok_or_else(|| PushdownError::unknown_weekday(name))
}

/// Rewrite a composite call. `Ok(None)` when `func` is not composite or the
/// arguments do not have a rewritable shape.
pub fn rewrite(func: ScalarFunc, args: &[Expr]) -> PushdownResult<Option<Expr>> {
    use ScalarFunc::*;
    let tree = match (func, args) {
        (DayStartInTimezone, [ts, tz]) => day_start_in_timezone(ts, tz),
        (StringToDateInTimezone, [input, tz]) => {
            local_date(input.clone().cast(DataType::Timestamp), tz)
        }
        (StringToDateInTimezone, [input, fmt, tz]) => local_date(
            Expr::call(StrToDate, vec![input.clone(), fmt.clone()]),
            tz,
        ),
        (DayDiff, [end, start]) => Expr::call(
            DateDiff,
            vec![
                end.clone().cast(DataType::Date),
                start.clone().cast(DataType::Date),
            ],
        ),
        (WeekDiff, [end, start, week_start]) => {
            let Some(offset) = literal_weekday(week_start)? else {
                return Ok(None);
            };
            Expr::binary(
                week_number(end, offset),
                BinaryOp::Sub,
                week_number(start, offset),
            )
        }
        (NextDay, [date, weekday]) => {
            let Some(offset) = literal_weekday(weekday)? else {
                return Ok(None);
            };
            next_day(date, offset)
        }
        (DayOfWeekName, [date]) => Expr::call(
            DateFormat,
            vec![date.clone(), Expr::lit("EEEE")],
        ),
        (FromUnixTimeFormatted, [seconds, fmt]) => Expr::call(
            DateFormat,
            vec![Expr::call(FromUnixTime, vec![seconds.clone()]), fmt.clone()],
        ),
        _ => return Ok(None),
    };
    Ok(Some(tree))
}

// None for a non-literal weekday; an error for a literal nobody recognizes.
fn literal_weekday(arg: &Expr) -> PushdownResult<Option<i64>> {
    match arg.as_string_literal() {
        Some(name) => weekday_offset(name).map(Some),
        None => Ok(None),
    }
}

fn utc() -> Expr {
    Expr::lit("UTC")
}

fn long(n: i64) -> Expr {
    Expr::typed(Value::Long(n), DataType::Long)
}

fn floor(e: Expr) -> Expr {
    Expr::call(ScalarFunc::Floor, vec![e])
}

/// `DATEDIFF(CAST(x AS DATE), '1970-01-01')`
fn days_since_epoch(x: &Expr) -> Expr {
    Expr::call(
        ScalarFunc::DateDiff,
        vec![
            x.clone().cast(DataType::Date),
            Expr::typed(Value::Date(NaiveDate::default()), DataType::Date),
        ],
    )
}

/// `days(x) - offset`: days since the most recent epoch-aligned week start.
fn shifted_days(x: &Expr, offset: i64) -> Expr {
    Expr::binary(days_since_epoch(x), BinaryOp::Sub, long(offset))
}

/// `FLOOR((days(x) - offset) / 7)`
fn week_number(x: &Expr, offset: i64) -> Expr {
    floor(Expr::binary(shifted_days(x, offset), BinaryOp::Div, long(7)))
}

fn day_start_in_timezone(ts: &Expr, tz: &Expr) -> Expr {
    let local = Expr::call(ScalarFunc::ConvertTz, vec![ts.clone(), utc(), tz.clone()]);
    let midnight = local.cast(DataType::Date).cast(DataType::Timestamp);
    Expr::call(ScalarFunc::ConvertTz, vec![midnight, tz.clone(), utc()])
}

fn local_date(utc_ts: Expr, tz: &Expr) -> Expr {
    Expr::call(ScalarFunc::ConvertTz, vec![utc_ts, utc(), tz.clone()]).cast(DataType::Date)
}

/// `DATE_ADD(date, INTERVAL 7 - floormod(days(date) - offset, 7) DAY)`
fn next_day(date: &Expr, offset: i64) -> Expr {
    let shifted = shifted_days(date, offset);
    let floormod = Expr::binary(
        shifted.clone(),
        BinaryOp::Sub,
        Expr::binary(
            floor(Expr::binary(shifted, BinaryOp::Div, long(7))),
            BinaryOp::Mul,
            long(7),
        ),
    );
    Expr::call(
        ScalarFunc::DateAdd,
        vec![
            date.clone().cast(DataType::Date),
            Expr::binary(long(7), BinaryOp::Sub, floormod),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_spellings_share_an_offset() {
        assert_eq!(weekday_offset("MON").unwrap(), 4);
        assert_eq!(weekday_offset("Monday").unwrap(), 4);
        assert_eq!(weekday_offset("mo").unwrap(), 4);
        assert_eq!(weekday_offset("th").unwrap(), 0);
        assert_eq!(weekday_offset("Wednesday").unwrap(), 6);
    }

    #[test]
    fn test_unknown_weekday_is_an_error() {
        let err = weekday_offset("NOTADAY").unwrap_err();
        assert!(matches!(err, PushdownError::UnknownWeekday(ref name) if name == "NOTADAY"));
        assert!(weekday_offset("").is_err());
        assert!(weekday_offset("M").is_err());
    }

    #[test]
    fn test_epoch_is_a_thursday() {
        use chrono::{Datelike, Weekday};
        assert_eq!(NaiveDate::default().weekday(), Weekday::Thu);
        assert_eq!(NaiveDate::default().to_string(), "1970-01-01");
    }

    #[test]
    fn test_non_composite_is_left_alone() {
        let args = [Expr::lit(1i64)];
        assert!(rewrite(ScalarFunc::Abs, &args).unwrap().is_none());
    }

    #[test]
    fn test_wrong_arity_is_not_rewritten() {
        let d = Expr::col(1, "d", DataType::Date);
        assert!(rewrite(ScalarFunc::NextDay, &[d.clone()]).unwrap().is_none());
        assert!(rewrite(ScalarFunc::DayDiff, &[d]).unwrap().is_none());
    }

    #[test]
    fn test_non_literal_weekday_is_not_rewritten() {
        let d = Expr::col(1, "d", DataType::Date);
        let day = Expr::col(2, "day", DataType::String);
        assert!(rewrite(ScalarFunc::NextDay, &[d, day]).unwrap().is_none());
    }

    #[test]
    fn test_literal_unknown_weekday_propagates() {
        let d = Expr::col(1, "d", DataType::Date);
        let result = rewrite(ScalarFunc::WeekDiff, &[d.clone(), d, Expr::lit("someday")]);
        assert!(matches!(result, Err(PushdownError::UnknownWeekday(_))));
    }

    #[test]
    fn test_day_of_week_name_uses_full_name_pattern() {
        let d = Expr::col(1, "d", DataType::Date);
        let tree = rewrite(ScalarFunc::DayOfWeekName, &[d.clone()]).unwrap().unwrap();
        assert_eq!(
            tree,
            Expr::call(ScalarFunc::DateFormat, vec![d, Expr::lit("EEEE")])
        );
    }

    #[test]
    fn test_week_diff_floors_both_sides() {
        let end = Expr::col(1, "end", DataType::Date);
        let start = Expr::col(2, "start", DataType::Date);
        let tree = rewrite(ScalarFunc::WeekDiff, &[end, start, Expr::lit("SU")])
            .unwrap()
            .unwrap();
        let Expr::Binary { op, left, right } = tree else {
            panic!("expected a subtraction");
        };
        assert_eq!(op, BinaryOp::Sub);
        for side in [left, right] {
            assert!(matches!(*side, Expr::Call { func: ScalarFunc::Floor, .. }));
        }
    }
}
