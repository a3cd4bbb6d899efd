// src/workbook.rs
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::Timelike;

use crate::data_types::{Sheet, Workbook};
use crate::error::Result;

/// Parses an in-memory workbook (xlsx, xls, xlsb or ods).
pub fn parse_workbook(bytes: Vec<u8>) -> Result<Workbook> {
    let mut source = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let mut sheets = Vec::new();
    for name in source.sheet_names() {
        let range = source.worksheet_range(&name)?;
        sheets.push(sheet_from_range(name, &range));
    }

    Ok(Workbook { sheets })
}

/// Keeps only the used range; its top-left cell becomes the sheet origin.
fn sheet_from_range(name: String, range: &Range<Data>) -> Sheet {
    let Some(origin) = range.start() else {
        return Sheet::new(name, Vec::new());
    };

    let rows = range
        .rows()
        .map(|cells| cells.iter().map(cell_text).collect())
        .collect();

    Sheet::with_origin(name, origin, rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => general_number(*f),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(moment) if moment.num_seconds_from_midnight() == 0 => {
                moment.format("%Y-%m-%d").to_string()
            }
            Some(moment) => moment.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => general_number(dt.as_f64()),
        },
        Data::Error(e) => e.to_string(),
    }
}

/// Significant digits shown for plain decimals.
const GENERAL_DIGITS: i32 = 11;

/// Renders a number the way the spreadsheet "General" format does: up to
/// eleven significant digits with trailing zeros dropped, and exponent form
/// (`1E+21`, `1.5E-07`) for very large or very small magnitudes.
fn general_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if !(-4..GENERAL_DIGITS).contains(&exponent) {
        return scientific(value);
    }

    let decimals = (GENERAL_DIGITS - 1 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = trim_fraction(&fixed);
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn scientific(value: f64) -> String {
    let formatted = format!("{:.5E}", value);
    let Some((mantissa, exponent)) = formatted.split_once('E') else {
        return formatted;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}E{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
