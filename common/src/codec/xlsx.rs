//! 表計算(XLSX)コーデック
//!
//! エクスポートはフィールド名の見出し行とレコードごとの行を1シートに書く。
//! インポートは先頭シートを読み、見出しの大文字小文字と前後の空白を無視して
//! 照合し、欠けたセルは既定値で埋める。IDは 1..N に振り直す。

use crate::error::{Error, Result};
use crate::types::{Guest, DEFAULT_NAME, FIELD_CONFIRMED, FIELD_IDENTIFIER, FIELD_NAME};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Cursor;

pub const SHEET_NAME: &str = "Convidados";
pub const EXPORT_FILE_NAME: &str = "convidados.xlsx";
pub const MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 空の見出しセルに付ける名前
const EMPTY_HEADER: &str = "__EMPTY";

// ============================================
// エクスポート
// ============================================

pub fn encode(guests: &[Guest]) -> Result<Vec<u8>> {
    // オブジェクト以外の要素は空行になる
    let empty = Map::new();
    let records: Vec<&Map<String, Value>> = guests
        .iter()
        .map(|g| g.fields().unwrap_or(&empty))
        .collect();

    // 列は初出順。通常のリストなら id, nome, rg, confirmado
    let mut columns: Vec<&str> = Vec::new();
    for record in &records {
        for key in record.keys() {
            if !columns.contains(&key.as_str()) {
                columns.push(key.as_str());
            }
        }
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, column_index(col)?, *name, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, name) in columns.iter().enumerate() {
            if let Some(value) = record.get(*name) {
                write_value(worksheet, row, column_index(col)?, value)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn column_index(col: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)
}

fn write_value(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
) -> std::result::Result<(), XlsxError> {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => {
                worksheet.write_number(row, col, f)?;
            }
            None => {
                worksheet.write_string(row, col, n.to_string())?;
            }
        },
        Value::String(s) => {
            worksheet.write_string(row, col, s)?;
        }
        nested => {
            worksheet.write_string(row, col, nested.to_string())?;
        }
    }
    Ok(())
}

// ============================================
// インポート
// ============================================

pub fn decode(bytes: &[u8]) -> Result<Vec<Guest>> {
    let mut workbook: Xlsx<Cursor<&[u8]>> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: calamine::XlsxError| Error::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet("workbook has no sheets".to_string()))?
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers = header_names(header_row);

    let guests = rows
        .filter_map(|cells| normalized_row(&headers, cells))
        .enumerate()
        .map(|(i, row)| guest_from_row(i + 1, &row))
        .collect();

    Ok(guests)
}

/// 見出しセルの文字列。空欄は `__EMPTY`、重複は `_1`, `_2`, ... を付ける
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    cells
        .iter()
        .map(|cell| {
            let base = if is_blank(cell) {
                EMPTY_HEADER.to_string()
            } else {
                cell_text(cell)
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}_{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

/// 正規化した見出し名（trim + 小文字）から空でないセルへの対応。
/// セルが1つも無い行は None
fn normalized_row<'a>(headers: &[String], cells: &'a [Data]) -> Option<HashMap<String, &'a Data>> {
    let row: HashMap<String, &Data> = headers
        .iter()
        .zip(cells)
        .filter(|(_, cell)| !matches!(cell, Data::Empty))
        .map(|(header, cell)| (header.trim().to_lowercase(), cell))
        .collect();

    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}

fn guest_from_row(index: usize, row: &HashMap<String, &Data>) -> Guest {
    let text = |key: &str| {
        row.get(key)
            .copied()
            .filter(|cell| !is_falsy(cell))
            .map(cell_text)
    };

    let confirmed = match row.get(FIELD_CONFIRMED).copied() {
        Some(Data::Bool(b)) => *b,
        Some(Data::String(s)) => s == "true",
        _ => false,
    };

    Guest::new(
        index as i64,
        text(FIELD_NAME).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        text(FIELD_IDENTIFIER).unwrap_or_default(),
        confirmed,
    )
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

/// 既定値に置き換えるセル: 空文字・0・`false`
fn is_falsy(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        Data::Int(n) => *n == 0,
        Data::Float(f) => *f == 0.0 || f.is_nan(),
        Data::Bool(b) => !*b,
        _ => false,
    }
}
