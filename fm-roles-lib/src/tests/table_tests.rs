use super::*;

#[test]
fn test_parse_keeps_empty_cells() {
    let rows = parse_table(",Striker,,Wing\n,Poacher,,Winger,\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["", "Striker", "", "Wing"]);
    assert_eq!(rows[1], vec!["", "Poacher", "", "Winger", ""]);
}

#[test]
fn test_parse_variable_width_rows() {
    let rows = parse_table(",A,B,C\nPace,primary\nStamina\n").unwrap();
    assert_eq!(rows[0].len(), 4);
    assert_eq!(rows[1].len(), 2);
    assert_eq!(rows[2], vec!["Stamina"]);
}

#[test]
fn test_parse_strips_byte_order_mark() {
    let rows = parse_table("\u{feff}Category,Striker\n").unwrap();
    assert_eq!(rows[0][0], "Category");
}

#[test]
fn test_parse_quoted_cells() {
    let rows = parse_table("\"Centre, Back\",\"Say \"\"hi\"\"\"\n").unwrap();
    assert_eq!(rows[0], vec!["Centre, Back", "Say \"hi\""]);
}

#[test]
fn test_parse_empty_content() {
    let rows = parse_table("").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, GenerateError::MissingInputFile { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn test_load_invalid_utf8_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, [0x2c, 0xff, 0xfe, 0x0a]).unwrap();
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, GenerateError::Encoding { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_load_file_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in_possession.csv");
    std::fs::write(&path, "\u{feff},Striker\n,Poacher\nFinishing,primary\n").unwrap();
    let rows = load_table(&path).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["", "Striker"]);
}

#[test]
fn test_parse_blank_line_at_end_is_a_row() {
    let rows = parse_table(",Wing\n,Winger\n\n").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["", "Winger"]);
    assert!(rows[2].is_empty());
}

#[test]
fn test_parse_blank_line_in_middle_keeps_position() {
    let rows = parse_table(",Wing\n\n,Winger\nPace,primary\n").unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].is_empty());
    assert_eq!(rows[2], vec!["", "Winger"]);
    assert_eq!(rows[3], vec!["Pace", "primary"]);
}

#[test]
fn test_parse_leading_and_repeated_blank_lines() {
    let rows = parse_table("\n,Wing\n\n\n,Winger").unwrap();
    let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
    assert_eq!(widths, vec![0, 2, 0, 0, 2]);
}

#[test]
fn test_parse_blank_lines_with_crlf() {
    let rows = parse_table(",Wing\r\n\r\n,Winger\r\n\r\n").unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].is_empty());
    assert_eq!(rows[2], vec!["", "Winger"]);
    assert!(rows[3].is_empty());
}

#[test]
fn test_parse_only_blank_lines() {
    let rows = parse_table("\n\n").unwrap();
    assert_eq!(rows, vec![Row::new(), Row::new()]);
}

#[test]
fn test_parse_newline_inside_quotes_is_not_blank() {
    let rows = parse_table(",\"Wing\n\nBack\"\n,Wing-Back\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][1], "Wing\n\nBack");
}
