use serde::{Deserialize, Serialize};

use super::DataType;

/// Scalar functions the host engine can hand over.
///
/// Most map one-to-one onto a target function; the composite temporal ones
/// (`DayStartInTimezone` through `FromUnixTimeFormatted`) have no direct
/// counterpart and are rewritten into primitive trees before translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarFunc {
    // No-arg
    CurrentDate,
    CurrentTimestamp,
    Pi,
    Rand,
    Uuid,

    // Variadic
    Coalesce,
    Greatest,
    Least,
    Concat,
    /// First argument is the separator.
    ConcatWs,

    // Math
    Abs,
    Ceil,
    Floor,
    Sqrt,
    Exp,
    Ln,
    Log10,
    Log2,
    /// LOG(base, x)
    Log,
    Pow,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Degrees,
    Radians,
    Sign,
    /// ROUND(x[, scale])
    Round,

    // Strings
    Upper,
    Lower,
    Length,
    Trim,
    LTrim,
    RTrim,
    Reverse,
    Ascii,
    Hex,
    Unhex,
    Md5,
    Sha1,
    Sha2,
    Left,
    Right,
    Repeat,
    /// SUBSTRING(x, pos[, len])
    Substring,
    Lpad,
    Rpad,
    /// LOCATE(needle, haystack)
    Locate,
    Replace,
    StartsWith,
    EndsWith,
    Contains,

    // Date parts
    Year,
    Quarter,
    Month,
    DayOfMonth,
    DayOfYear,
    /// 1 = Sunday .. 7 = Saturday
    DayOfWeek,
    WeekOfYear,
    Hour,
    Minute,
    Second,
    LastDay,
    /// Date part of a timestamp.
    ToDateOnly,

    // Date arithmetic
    /// DATE_ADD(date, INTERVAL n DAY)
    DateAdd,
    /// DATE_SUB(date, INTERVAL n DAY)
    DateSub,
    AddMonths,
    /// DATEDIFF(end, start) in days
    DateDiff,
    /// CONVERT_TZ(ts, from, to)
    ConvertTz,
    FromUnixTime,
    UnixTimestamp,

    // Format-driven
    /// DATE_FORMAT(ts, fmt), symbol format
    DateFormat,
    /// STR_TO_DATE(str, fmt), symbol format
    StrToDate,
    /// TO_CHAR(ts, fmt), specifier format
    ToChar,
    /// TO_DATE(str, fmt), specifier format
    ToDate,
    /// TO_TIMESTAMP(str, fmt), specifier format
    ToTimestamp,

    // Composite temporal functions
    /// (ts, tz): start of the day containing `ts` in `tz`, as a UTC timestamp
    DayStartInTimezone,
    /// (str, tz) or (str, fmt, tz): local date in `tz` of a UTC timestamp string
    StringToDateInTimezone,
    /// (end, start): whole days between the two dates
    DayDiff,
    /// (end, start, week_start): week boundaries crossed between two dates
    WeekDiff,
    /// (date, weekday): first date after `date` falling on `weekday`
    NextDay,
    /// (date): full English day name
    DayOfWeekName,
    /// (seconds, fmt): formatted local time of a unix timestamp
    FromUnixTimeFormatted,
}

/// How a function's argument list is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionShape {
    /// Takes no arguments.
    Leaf,
    /// Any number of arguments (at least `min`).
    Variadic { min: usize },
    /// Between `min` and `max` arguments.
    Fixed { min: usize, max: usize },
    /// Second argument is a format pattern literal.
    Format,
    /// Rewritten into primitive nodes before translation.
    Composite,
}

impl ScalarFunc {
    pub fn shape(&self) -> FunctionShape {
        use ScalarFunc::*;
        match self {
            CurrentDate | CurrentTimestamp | Pi | Rand | Uuid => FunctionShape::Leaf,
            Coalesce | Greatest | Least | Concat => FunctionShape::Variadic { min: 1 },
            ConcatWs => FunctionShape::Variadic { min: 2 },
            DateFormat | StrToDate | ToChar | ToDate | ToTimestamp => FunctionShape::Format,
            DayStartInTimezone | StringToDateInTimezone | DayDiff | WeekDiff | NextDay
            | DayOfWeekName | FromUnixTimeFormatted => FunctionShape::Composite,
            Round => FunctionShape::Fixed { min: 1, max: 2 },
            Substring => FunctionShape::Fixed { min: 2, max: 3 },
            Log | Pow | Atan2 | Sha2 | Left | Right | Repeat | Locate | StartsWith | EndsWith
            | Contains | DateAdd | DateSub | AddMonths | DateDiff => {
                FunctionShape::Fixed { min: 2, max: 2 }
            }
            Lpad | Rpad | Replace | ConvertTz => FunctionShape::Fixed { min: 3, max: 3 },
            _ => FunctionShape::Fixed { min: 1, max: 1 },
        }
    }

    /// Result type as the host engine would have resolved it.
    pub fn return_type(&self, args: &[DataType]) -> DataType {
        use ScalarFunc::*;
        let first = args.first().copied().unwrap_or(DataType::Null);
        match self {
            CurrentDate | LastDay | ToDateOnly | DateAdd | DateSub | AddMonths | ToDate
            | StringToDateInTimezone | NextDay => DataType::Date,
            CurrentTimestamp | ConvertTz | FromUnixTime | StrToDate | ToTimestamp
            | DayStartInTimezone => DataType::Timestamp,
            Pi | Rand | Sqrt | Exp | Ln | Log10 | Log2 | Log | Pow | Sin | Cos | Tan | Asin
            | Acos | Atan | Atan2 | Degrees | Radians => DataType::Double,
            Uuid | Concat | ConcatWs | Upper | Lower | Trim | LTrim | RTrim | Reverse | Hex
            | Md5 | Sha1 | Sha2 | Left | Right | Repeat | Substring | Lpad | Rpad | Replace
            | DateFormat | ToChar | DayOfWeekName | FromUnixTimeFormatted => DataType::String,
            Unhex => DataType::Binary,
            StartsWith | EndsWith | Contains => DataType::Boolean,
            Length | Ascii | Locate | Year | Quarter | Month | DayOfMonth | DayOfYear
            | DayOfWeek | WeekOfYear | Hour | Minute | Second => DataType::Integer,
            DateDiff | DayDiff | WeekDiff | UnixTimestamp | Ceil | Floor | Sign => DataType::Long,
            Coalesce | Greatest | Least | Abs | Round => first,
        }
    }
}

impl FunctionShape {
    /// Whether `count` arguments fit this shape.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            FunctionShape::Leaf => count == 0,
            FunctionShape::Variadic { min } => count >= *min,
            FunctionShape::Fixed { min, max } => (*min..=*max).contains(&count),
            FunctionShape::Format => count == 2,
            FunctionShape::Composite => true,
        }
    }
}
