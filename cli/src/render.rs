//! Console tables for 7×7 matrices.

use std::fmt::Write;

use veil_types::Coord;

/// Render a named matrix as a console table.
///
/// `cell` supplies the value for each position; `highlight` brackets one
/// cell (the attacked one, typically) so it stands out in the dump.
pub fn matrix_table(
    name: &str,
    cell: impl Fn(Coord) -> u8,
    highlight: Option<Coord>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {name} ---");
    for row in 0..7u8 {
        let mut line = String::new();
        for col in 0..7u8 {
            let at = Coord::new(row, col).expect("row/col < 7");
            let value = cell(at);
            if highlight == Some(at) {
                let _ = write!(line, "[{value:2}] ");
            } else {
                let _ = write!(line, " {value:2}  ");
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
