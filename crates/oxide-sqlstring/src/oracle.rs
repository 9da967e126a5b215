//! Oracle raw function pass-through.
//!
//! Oracle callers may hand over a ready-made `TO_TIMESTAMP_TZ(...)` or
//! `TO_DATE(...)` call as a string value. It is inserted into the statement
//! unquoted, so it must be exactly one of two known shapes:
//!
//! ```text
//! TO_TIMESTAMP_TZ('2020-01-02 03:04:05.000 +00:00','YYYY-MM-DD HH24:MI:SS.FFTZH:TZM')
//! TO_DATE('2020/01/02','YYYY/MM/DD')
//! ```
//!
//! This is an allow-list, not a parser. Anything else is rejected.

use chrono::{DateTime, NaiveDate};
use tracing::{debug, warn};

use crate::error::{EscapeError, Result};
use crate::types::{DATE_WITH_OFFSET, ORACLE_TIMESTAMP_TZ_FORMAT};

const TO_TIMESTAMP_TZ: &str = "TO_TIMESTAMP_TZ";
const TO_DATE: &str = "TO_DATE";
const TO_DATE_FORMAT: &str = "'YYYY/MM/DD'";

/// Returns whether `value` should be routed through
/// [`validate_raw_function`] instead of being quoted.
#[must_use]
pub fn is_raw_function_candidate(value: &str) -> bool {
    value.starts_with(TO_TIMESTAMP_TZ) || value.starts_with(TO_DATE)
}

/// Validates an Oracle raw function call and returns it unchanged.
///
/// # Errors
///
/// - [`EscapeError::InvalidRawFunctionCall`] when the text is not
///   `NAME(VALUE, FORMAT)` with `NAME` one of `TO_TIMESTAMP_TZ` / `TO_DATE`.
/// - [`EscapeError::InvalidRawFunctionFormat`] when the format literal is not
///   the one accepted for that function.
/// - [`EscapeError::InvalidRawFunctionValue`] when the date text does not
///   reproduce itself through the expected pattern.
pub fn validate_raw_function(value: &str) -> Result<&str> {
    let result = check(value);
    match &result {
        Ok(()) => debug!(call = value, "passing Oracle function call through raw"),
        Err(err) => warn!(call = value, error = %err, "rejected Oracle function call"),
    }
    result.map(|()| value)
}

fn check(value: &str) -> Result<()> {
    let segments: Vec<&str> = value.split(['(', ')']).collect();
    if segments.len() != 3 || !segments[2].is_empty() {
        return Err(EscapeError::InvalidRawFunctionCall(String::from(
            "expected NAME(VALUE, FORMAT)",
        )));
    }

    let function = segments[0].trim();
    let arguments = segments[1].trim();
    if function != TO_TIMESTAMP_TZ && function != TO_DATE {
        return Err(EscapeError::InvalidRawFunctionCall(format!(
            "expected {TO_TIMESTAMP_TZ} or {TO_DATE}, found {function}"
        )));
    }

    let params: Vec<&str> = arguments.split(',').collect();
    let [date_value, format_value] = params.as_slice() else {
        return Err(EscapeError::InvalidRawFunctionCall(format!(
            "{TO_TIMESTAMP_TZ} and {TO_DATE} are supported only with a value and a format"
        )));
    };
    let date_value = quoted_parameter(date_value.trim()).ok_or_else(|| {
        EscapeError::InvalidRawFunctionCall(String::from(
            "the value must be a single-quoted literal",
        ))
    })?;
    let format_value = format_value.trim();

    if function == TO_TIMESTAMP_TZ {
        check_timestamp_tz(date_value, format_value)
    } else {
        check_date(date_value, format_value)
    }
}

/// Returns the text between an opening and a closing quote, or `None` when
/// either quote is missing or the text holds another quote.
fn quoted_parameter(param: &str) -> Option<&str> {
    param
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .filter(|inner| !inner.contains('\''))
}

fn check_timestamp_tz(date_value: &str, format_value: &str) -> Result<()> {
    if format_value != ORACLE_TIMESTAMP_TZ_FORMAT {
        return Err(EscapeError::InvalidRawFunctionFormat {
            function: TO_TIMESTAMP_TZ,
            expected: ORACLE_TIMESTAMP_TZ_FORMAT,
        });
    }
    let reformatted = DateTime::parse_from_str(date_value, DATE_WITH_OFFSET)
        .ok()
        .map(|date| date.format(DATE_WITH_OFFSET).to_string());
    if reformatted.as_deref() != Some(date_value) {
        return Err(EscapeError::InvalidRawFunctionValue {
            function: TO_TIMESTAMP_TZ,
            expected: "YYYY-MM-DD HH:mm:ss.SSS Z",
        });
    }
    Ok(())
}

fn check_date(date_value: &str, format_value: &str) -> Result<()> {
    if format_value != TO_DATE_FORMAT {
        return Err(EscapeError::InvalidRawFunctionFormat {
            function: TO_DATE,
            expected: TO_DATE_FORMAT,
        });
    }
    // Oracle reads either separator under the YYYY/MM/DD mask.
    let round_trips = ["%Y-%m-%d", "%Y/%m/%d"].iter().any(|pattern| {
        NaiveDate::parse_from_str(date_value, pattern)
            .is_ok_and(|date| date.format(pattern).to_string() == date_value)
    });
    if !round_trips {
        return Err(EscapeError::InvalidRawFunctionValue {
            function: TO_DATE,
            expected: "YYYY-MM-DD",
        });
    }
    Ok(())
}
