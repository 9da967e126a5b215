//! Tests for single-value escaping across dialects: NULL, booleans,
//! numbers, strings, dates, blobs and arrays.

mod common;
use common::*;

use chrono::{TimeZone as _, Utc};
use oxide_sqlstring::{
    Dialect, EscapeError, TimeZone, ToSqlValue, Value, array, array_to_list, escape,
};

#[test]
fn null_is_null_for_every_dialect() {
    for dialect in Dialect::ALL {
        assert_eq!(lit(Value::Null, dialect), "NULL");
        assert_eq!(lit(None::<&str>.to_sql_value(), dialect), "NULL");
    }
}

#[test]
fn booleans_follow_dialect_style() {
    for dialect in [Dialect::Sqlite, Dialect::Mssql, Dialect::Oracle] {
        assert_eq!(lit(true, dialect), "1");
        assert_eq!(lit(false, dialect), "0");
    }
    for dialect in [
        Dialect::Postgres,
        Dialect::Mysql,
        Dialect::Mariadb,
        Dialect::Snowflake,
        Dialect::Db2,
        Dialect::Ibmi,
        Dialect::Generic,
    ] {
        assert_eq!(lit(true, dialect), "true");
        assert_eq!(lit(false, dialect), "false");
    }
}

#[test]
fn numbers_use_canonical_text() {
    for dialect in Dialect::ALL {
        assert_eq!(lit(0, dialect), "0");
        assert_eq!(lit(-12_i64, dialect), "-12");
        assert_eq!(lit(u64::MAX, dialect), "18446744073709551615");
        assert_eq!(lit(0.25, dialect), "0.25");
    }
}

#[test]
fn nan_has_no_literal() {
    assert!(matches!(
        lit_err(f64::NAN, Dialect::Mysql),
        EscapeError::InvalidValue(_)
    ));
}

#[test]
fn plain_strings_are_only_quoted() {
    for dialect in Dialect::ALL {
        let expected = if dialect == Dialect::Mssql {
            "N'plain text 123'"
        } else {
            "'plain text 123'"
        };
        assert_eq!(lit("plain text 123", dialect), expected);
    }
}

#[test]
fn empty_string() {
    assert_eq!(lit("", Dialect::Postgres), "''");
    assert_eq!(lit("", Dialect::Mssql), "N''");
    assert_eq!(lit("", Dialect::Mysql), "''");
}

#[test]
fn quote_doubling_dialects() {
    for dialect in [
        Dialect::Postgres,
        Dialect::Sqlite,
        Dialect::Snowflake,
        Dialect::Db2,
        Dialect::Oracle,
    ] {
        assert_eq!(lit("a'b''c", dialect), "'a''b''''c'");
        // Backslashes are ordinary characters here.
        assert_eq!(lit("a\\b", dialect), "'a\\b'");
    }
    assert_eq!(lit("a'b", Dialect::Mssql), "N'a''b'");
}

#[test]
fn postgres_nul_byte() {
    assert_eq!(lit("x\0y", Dialect::Postgres), "'x\\0y'");
}

#[test]
fn backslash_dialects_escape_control_set() {
    for dialect in [
        Dialect::Mysql,
        Dialect::Mariadb,
        Dialect::Ibmi,
        Dialect::Generic,
    ] {
        assert_eq!(lit("line1\nline2", dialect), "'line1\\nline2'");
        assert_eq!(lit("tab\there", dialect), "'tab\\there'");
        assert_eq!(lit("cr\r", dialect), "'cr\\r'");
        assert_eq!(lit("nul\0", dialect), "'nul\\0'");
        assert_eq!(lit("bs\u{8}", dialect), "'bs\\b'");
        assert_eq!(lit("eof\u{1a}", dialect), "'eof\\Z'");
        assert_eq!(lit(r#"q'"\"#, dialect), r#"'q\'\"\\'"#);
    }
}

#[test]
fn unicode_is_passed_through() {
    assert_eq!(lit("héllo wörld ✓", Dialect::Mssql), "N'héllo wörld ✓'");
    assert_eq!(lit("日本語", Dialect::Mysql), "'日本語'");
}

#[test]
fn dates_use_timezone() {
    let date = Utc.with_ymd_and_hms(1999, 12, 31, 23, 30, 0).unwrap();
    let tz: TimeZone = "+01:00".parse().unwrap();
    assert_eq!(
        escape(&Value::Date(date), tz, Dialect::Postgres, false).unwrap(),
        "'2000-01-01 00:30:00.000 +01:00'"
    );
    assert_eq!(
        escape(&Value::Date(date), tz, Dialect::Mariadb, false).unwrap(),
        "'2000-01-01 00:30:00.000'"
    );
    assert_eq!(
        escape(&Value::Date(date), tz, Dialect::Oracle, false).unwrap(),
        "TO_TIMESTAMP_TZ('2000-01-01 00:30:00.000 +01:00','YYYY-MM-DD HH24:MI:SS.FFTZH:TZM')"
    );
}

#[test]
fn blobs_use_dialect_syntax_or_fallback() {
    let bytes = vec![0x00_u8, 0x7f, 0xff];
    assert_eq!(lit(bytes.clone(), Dialect::Postgres), "'\\x007fff'");
    assert_eq!(lit(bytes.clone(), Dialect::Mssql), "0x007FFF");
    assert_eq!(lit(bytes.clone(), Dialect::Oracle), "HEXTORAW('007FFF')");
    assert_eq!(lit(bytes.clone(), Dialect::Mysql), "X'007FFF'");
    assert_eq!(lit(bytes, Dialect::Sqlite), "X'007FFF'");
}

#[test]
fn postgres_arrays() {
    let values = array([1, 2]);
    assert_eq!(
        escape(&values, utc(), Dialect::Postgres, false).unwrap(),
        "ARRAY[1,2]"
    );
    assert_eq!(
        escape(&values, utc(), Dialect::Postgres, true).unwrap(),
        "1, 2"
    );
    let nested = Value::Array(vec![array(["a"]), array(["b'c"])]);
    assert_eq!(
        escape(&nested, utc(), Dialect::Postgres, false).unwrap(),
        "ARRAY[ARRAY['a'],ARRAY['b''c']]"
    );
}

#[test]
fn arrays_without_native_literal_become_lists() {
    let values = array([1, 2]);
    for dialect in Dialect::ALL {
        if dialect == Dialect::Postgres {
            continue;
        }
        assert_eq!(escape(&values, utc(), dialect, false).unwrap(), "1, 2");
    }
}

#[test]
fn list_nesting() {
    let values = vec![Value::Int(1), Value::Int(2), array([3, 4])];
    assert_eq!(
        array_to_list(&values, utc(), Dialect::Mysql, false).unwrap(),
        "1, 2, (3, 4)"
    );
    let rows = vec![
        Value::Array(vec![Value::Int(1), Value::from("a")]),
        Value::Array(vec![Value::Int(2), Value::Null]),
    ];
    assert_eq!(
        array_to_list(&rows, utc(), Dialect::Postgres, false).unwrap(),
        "(1, 'a'), (2, NULL)"
    );
    assert_eq!(array_to_list(&[], utc(), Dialect::Mysql, false).unwrap(), "");
}

#[test]
fn list_error_is_all_or_nothing() {
    let values = vec![Value::Int(1), Value::Float(f64::INFINITY)];
    assert!(array_to_list(&values, utc(), Dialect::Mysql, false).is_err());
}

#[test]
fn unquote_helper_reverses_escaping() {
    for dialect in Dialect::ALL {
        let input = "it's a \"test\"\n";
        assert_eq!(unquote(&lit(input, dialect), dialect), input);
    }
}
