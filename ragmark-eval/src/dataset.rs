//! Loading labeled question/answer datasets.
//!
//! Two file formats are recognised by extension:
//!
//! - **CSV** (`.csv`) — a header row naming at least the `question` and
//!   `answer` columns, in any order; extra columns are ignored. Quoted
//!   fields may contain commas, doubled quotes, and newlines.
//! - **JSON Lines** (`.jsonl`, `.ndjson`) — one JSON object per line with
//!   `question` and `answer` fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EvalError, Result};

/// A labeled (question, reference answer) pair. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QaRecord {
    /// The question put to the pipeline.
    pub question: String,
    /// The ground-truth answer it is scored against.
    pub answer: String,
}

/// Load a QA dataset, dispatching on the file extension.
///
/// # Errors
///
/// Returns [`EvalError::Dataset`] if the file cannot be read, has an
/// unrecognised extension, is empty, or lacks a required column/field.
pub fn load_qa_dataset(path: impl AsRef<Path>) -> Result<Vec<QaRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| EvalError::Dataset(format!("cannot read '{}': {e}", path.display())))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let records = match extension {
        "csv" => parse_csv(&text)?,
        "jsonl" | "ndjson" => parse_jsonl(&text)?,
        other => {
            return Err(EvalError::Dataset(format!(
                "unsupported dataset extension '{other}' (expected csv, jsonl, or ndjson)"
            )));
        }
    };

    if records.is_empty() {
        return Err(EvalError::Dataset(format!("'{}' contains no records", path.display())));
    }

    info!(record_count = records.len(), path = %path.display(), "loaded QA dataset");
    Ok(records)
}

/// Split CSV text into rows of fields, honouring quoting rules: fields may
/// be wrapped in double quotes, a doubled quote inside a quoted field is a
/// literal quote, and quoted fields may span lines.
fn csv_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => quoted = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => quoted = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                // Ignore blank lines between records.
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(std::mem::take(&mut row));
                }
                row.clear();
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn parse_csv(text: &str) -> Result<Vec<QaRecord>> {
    let mut rows = csv_rows(text).into_iter();
    let header = rows.next().ok_or_else(|| EvalError::Dataset("file is empty".into()))?;

    let column = |name: &str| {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| EvalError::Dataset(format!("missing required column '{name}'")))
    };
    let question_col = column("question")?;
    let answer_col = column("answer")?;

    let mut records = Vec::new();
    for (line, row) in rows.enumerate() {
        let field = |col: usize| {
            row.get(col).map(|s| s.trim().to_string()).ok_or_else(|| {
                EvalError::Dataset(format!("row {} has {} fields", line + 2, row.len()))
            })
        };
        records.push(QaRecord { question: field(question_col)?, answer: field(answer_col)? });
    }
    Ok(records)
}

fn parse_jsonl(text: &str) -> Result<Vec<QaRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<QaRecord>(line)
                .map_err(|e| EvalError::Dataset(format!("line {}: {e}", i + 1)))
        })
        .collect()
}
