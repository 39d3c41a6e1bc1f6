//! CSV row lexer and writer for GDF data rows.
//!
//! Cells are comma-separated. A cell wrapped in double quotes may contain
//! commas, and a doubled quote inside it stands for one quote character.
//!
//! An unquoted empty cell is *missing* (`None`); a quoted empty cell `""`
//! is the empty string (`Some("")`).

use crate::{Error, Result};

/// Split one data row into cells.
pub fn split_row(line: &str, line_no: usize) -> Result<Vec<Option<String>>> {
    let mut cells = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        match chars.peek() {
            // Quoted cell
            Some('"') => {
                chars.next();
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            s.push('"');
                        }
                        Some('"') => break,
                        Some(c) => s.push(c),
                        None => return Err(Error::Parse {
                            line: line_no,
                            message: "Unclosed quoted field".into(),
                        }),
                    }
                }
                match chars.next() {
                    None => {
                        cells.push(Some(s));
                        return Ok(cells);
                    }
                    Some(',') => cells.push(Some(s)),
                    Some(c) => return Err(Error::Parse {
                        line: line_no,
                        message: format!("Unexpected '{c}' after quoted field"),
                    }),
                }
            }

            // Unquoted cell
            _ => {
                let mut s = String::new();
                let mut at_end = true;
                for c in chars.by_ref() {
                    match c {
                        ',' => { at_end = false; break; }
                        '"' => return Err(Error::Parse {
                            line: line_no,
                            message: "Illegal quote in unquoted field".into(),
                        }),
                        c => s.push(c),
                    }
                }
                cells.push(if s.is_empty() { None } else { Some(s) });
                if at_end {
                    return Ok(cells);
                }
            }
        }
    }
}

/// Render one row, newline-terminated. `None` cells are written empty.
pub fn write_row<'a>(out: &mut String, cells: impl IntoIterator<Item = Option<&'a str>>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if let Some(cell) = cell {
            write_cell(out, cell);
        }
    }
    out.push('\n');
}

fn write_cell(out: &mut String, cell: &str) {
    if needs_quoting(cell) {
        out.push('"');
        out.push_str(&cell.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(cell);
    }
}

/// Empty strings are quoted so they stay distinct from missing cells, and
/// cells that line trimming or header detection would alter are quoted too.
fn needs_quoting(cell: &str) -> bool {
    cell.is_empty()
        || cell.contains([',', '"', '\n', '\r'])
        || cell.starts_with(char::is_whitespace)
        || cell.ends_with(char::is_whitespace)
        || cell.starts_with(super::NODEDEF)
        || cell.starts_with(super::EDGEDEF)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<Option<String>> {
        split_row(line, 1).unwrap()
    }

    fn row(cells: &[Option<&str>]) -> String {
        let mut out = String::new();
        write_row(&mut out, cells.iter().copied());
        out
    }

    fn cells(v: &[Option<&str>]) -> Vec<Option<String>> {
        v.iter().map(|c| c.map(str::to_owned)).collect()
    }

    #[test]
    fn test_split_plain() {
        assert_eq!(split("toto,14,TOTO"), cells(&[Some("toto"), Some("14"), Some("TOTO")]));
    }

    #[test]
    fn test_split_empty_cells() {
        assert_eq!(split(",bar"), cells(&[None, Some("bar")]));
        assert_eq!(split("a,"), cells(&[Some("a"), None]));
        assert_eq!(split(r#""",x"#), cells(&[Some(""), Some("x")]));
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(split(r#""foo,bar",42"#), cells(&[Some("foo,bar"), Some("42")]));
        assert_eq!(split(r#""fo""o""#), cells(&[Some("fo\"o")]));
    }

    #[test]
    fn test_split_malformed() {
        assert!(matches!(split_row(r#""open"#, 3), Err(Error::Parse { line: 3, .. })));
        assert!(split_row(r#""a"b"#, 1).is_err());
        assert!(split_row(r#"fo"o"#, 1).is_err());
    }

    #[test]
    fn test_write_quoting() {
        assert_eq!(row(&[Some("foo,bar")]), "\"foo,bar\"\n");
        assert_eq!(row(&[Some("foo\"bar")]), "\"foo\"\"bar\"\n");
        assert_eq!(row(&[Some(""), None, Some("x")]), "\"\",,x\n");
        assert_eq!(row(&[Some(" padded")]), "\" padded\"\n");
        assert_eq!(row(&[Some("nodedef>x")]), "\"nodedef>x\"\n");
    }

    #[test]
    fn test_write_then_split() {
        let line = row(&[Some("a,b"), Some("c\"d"), Some(""), None]);
        assert_eq!(
            split(line.trim_end()),
            cells(&[Some("a,b"), Some("c\"d"), Some(""), None])
        );
    }
}
