//! Plain-text rendering of the two ranked tables.

use crate::aggregate::{TopUsers, UserTotal};
use std::io::{self, Write};

/// One table: header, one `<score>\t<name>` row per entry, then a blank line.
pub fn write_table<W: Write>(out: &mut W, header: &str, rows: &[UserTotal]) -> io::Result<()> {
    writeln!(out, "{}", header)?;
    for row in rows {
        writeln!(out, "{}\t{}", row.total_score, row.display_name)?;
    }
    writeln!(out)
}

pub fn table_header(top_k: usize, category: &str, months_back: u32) -> String {
    format!("Top {} users by total score on {} asked from the past {} months", top_k, category, months_back)
}

/// Questions table followed by answers table.
pub fn write_report<W: Write>(out: &mut W, top: &TopUsers, top_k: usize, months_back: u32) -> io::Result<()> {
    write_table(out, &table_header(top_k, "questions", months_back), &top.questions)?;
    write_table(out, &table_header(top_k, "answers", months_back), &top.answers)?;
    out.flush()
}
