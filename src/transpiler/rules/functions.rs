use crate::ast::{DataType, Expr, ScalarFunc};
use crate::transpiler::capability::Feature;
use crate::transpiler::fragment::Fragment;
use crate::transpiler::{Translation, Translator};

/// COALESCE, GREATEST, LEAST, CONCAT, CONCAT_WS.
pub(super) fn variadic(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    let name = match func {
        ScalarFunc::Coalesce => "COALESCE",
        ScalarFunc::Greatest => "GREATEST",
        ScalarFunc::Least => "LEAST",
        ScalarFunc::Concat => "CONCAT",
        ScalarFunc::ConcatWs => "CONCAT_WS",
        _ => return Ok(None),
    };
    if !func.shape().accepts(args.len()) {
        return Ok(None);
    }
    let Some(args) = t.translate_all(args)? else {
        return Ok(None);
    };
    Ok(Some(Fragment::func(name, args)))
}

/// Functions without arguments.
pub(super) fn leaf(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    if !args.is_empty() {
        return Ok(None);
    }
    let fragment = match func {
        ScalarFunc::CurrentDate => Fragment::func("CURRENT_DATE", vec![]),
        ScalarFunc::CurrentTimestamp => Fragment::raw("NOW(6)"),
        ScalarFunc::Pi => Fragment::func("PI", vec![]),
        ScalarFunc::Rand => Fragment::func("RAND", vec![]),
        ScalarFunc::Uuid if t.supports(Feature::Uuid) => Fragment::func("UUID", vec![]),
        _ => return Ok(None),
    };
    Ok(Some(fragment))
}

/// Fixed-arity functions with a same-shaped target counterpart.
pub(super) fn scalar(t: &Translator<'_>, expr: &Expr) -> Translation {
    let Expr::Call { func, args } = expr else {
        return Ok(None);
    };
    let Some(name) = target_name(*func) else {
        return Ok(None);
    };
    if !func.shape().accepts(args.len()) {
        tracing::trace!(?func, arity = args.len(), "argument count does not fit");
        return Ok(None);
    }
    // The target rounds approximate values half-to-even; the host rounds half-up.
    if *func == ScalarFunc::Round
        && matches!(args[0].data_type(), DataType::Float | DataType::Double)
    {
        return Ok(None);
    }
    let Some(args) = t.translate_all(args)? else {
        return Ok(None);
    };
    Ok(Some(Fragment::func(name, args)))
}

fn target_name(func: ScalarFunc) -> Option<&'static str> {
    use ScalarFunc::*;
    let name = match func {
        Abs => "ABS",
        Ceil => "CEIL",
        Floor => "FLOOR",
        Sqrt => "SQRT",
        Exp => "EXP",
        Ln => "LN",
        Log10 => "LOG10",
        Log2 => "LOG2",
        Log => "LOG",
        Pow => "POWER",
        Sin => "SIN",
        Cos => "COS",
        Tan => "TAN",
        Asin => "ASIN",
        Acos => "ACOS",
        Atan => "ATAN",
        Atan2 => "ATAN2",
        Degrees => "DEGREES",
        Radians => "RADIANS",
        Sign => "SIGN",
        Round => "ROUND",

        Upper => "UPPER",
        Lower => "LOWER",
        Length => "CHAR_LENGTH",
        Trim => "TRIM",
        LTrim => "LTRIM",
        RTrim => "RTRIM",
        Reverse => "REVERSE",
        Ascii => "ASCII",
        Hex => "HEX",
        Unhex => "UNHEX",
        Md5 => "MD5",
        Sha1 => "SHA1",
        Sha2 => "SHA2",
        Left => "LEFT",
        Right => "RIGHT",
        Repeat => "REPEAT",
        Substring => "SUBSTRING",
        Lpad => "LPAD",
        Rpad => "RPAD",
        Locate => "LOCATE",
        Replace => "REPLACE",

        Year => "YEAR",
        Quarter => "QUARTER",
        Month => "MONTH",
        DayOfMonth => "DAYOFMONTH",
        DayOfYear => "DAYOFYEAR",
        DayOfWeek => "DAYOFWEEK",
        WeekOfYear => "WEEKOFYEAR",
        Hour => "HOUR",
        Minute => "MINUTE",
        Second => "SECOND",
        LastDay => "LAST_DAY",
        ToDateOnly => "DATE",
        DateDiff => "DATEDIFF",
        ConvertTz => "CONVERT_TZ",
        FromUnixTime => "FROM_UNIXTIME",
        UnixTimestamp => "UNIX_TIMESTAMP",

        // Handled by their own rules.
        CurrentDate | CurrentTimestamp | Pi | Rand | Uuid | Coalesce | Greatest | Least
        | Concat | ConcatWs | StartsWith | EndsWith | Contains | DateAdd | DateSub
        | AddMonths | DateFormat | StrToDate | ToChar | ToDate | ToTimestamp
        | DayStartInTimezone | StringToDateInTimezone | DayDiff | WeekDiff | NextDay
        | DayOfWeekName | FromUnixTimeFormatted => return None,
    };
    Some(name)
}
