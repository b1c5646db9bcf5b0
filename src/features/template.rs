//! CRF++ feature template matching the output columns.
//!
//! CRF++ addresses input columns as `%x[row,col]`; the indices here come from
//! [`FIELD_NAMES`] so the template cannot drift from the writer.

use std::io::{self, Write};

use super::types::{FIELD_COUNT, FIELD_NAMES, column};

/// Row offsets for token unigrams.
const TOKEN_WINDOW: [i32; 5] = [-2, -1, 0, 1, 2];
/// Row offsets for POS unigrams.
const POS_WINDOW: [i32; 3] = [-1, 0, 1];

/// Render the template as text.
pub fn template() -> String {
    let token = column("token").unwrap_or(0);
    let pos = column("pos").unwrap_or(1);
    let label = FIELD_COUNT - 1;

    let mut lines = vec!["# Unigram".to_string()];
    let mut next_id = 0;
    let mut unigram = |expr: String| {
        let line = format!("U{next_id:02}:{expr}");
        next_id += 1;
        line
    };

    for row in TOKEN_WINDOW {
        lines.push(unigram(format!("%x[{row},{token}]")));
    }
    lines.push(unigram(format!("%x[-1,{token}]/%x[0,{token}]")));
    lines.push(unigram(format!("%x[0,{token}]/%x[1,{token}]")));
    for row in POS_WINDOW {
        lines.push(unigram(format!("%x[{row},{pos}]")));
    }
    for (col, name) in FIELD_NAMES.iter().enumerate() {
        // The gold label is the answer column, never a feature.
        if col == token || col == pos || col == label {
            continue;
        }
        lines.push(format!("# {name}"));
        lines.push(unigram(format!("%x[0,{col}]")));
    }

    lines.push(String::new());
    lines.push("# Bigram".to_string());
    lines.push("B".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Write the template to `writer`.
pub fn write_template<W: Write>(mut writer: W) -> io::Result<()> {
    writer.write_all(template().as_bytes())?;
    writer.flush()
}
