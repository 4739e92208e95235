use classtrack::utils::colors::{colorize_status, display_width};
use classtrack::utils::table::Table;
use classtrack::models::AttendanceStatus;

/// Display column where `needle` starts on `line`.
fn column_of(line: &str, needle: &str) -> usize {
    let idx = line.find(needle).expect("needle on line");
    display_width(&line[..idx])
}

#[test]
fn test_wide_glyph_names_stay_aligned() {
    let mut table = Table::new(&["name", "rate"]);
    table.add_row(vec!["王小明".to_string(), "90%".to_string()]);
    table.add_row(vec!["Bobby".to_string(), "80%".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(column_of(lines[2], "90%"), column_of(lines[3], "80%"));
    assert_eq!(column_of(lines[0], "rate"), column_of(lines[3], "80%"));
}

#[test]
fn test_colored_cells_do_not_widen_columns() {
    let mut table = Table::new(&["status", "note"]);
    table.add_row(vec![colorize_status(AttendanceStatus::Late), "x".to_string()]);
    table.add_row(vec!["absent".to_string(), "y".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(column_of(lines[2], "x"), column_of(lines[3], "y"));
    // "status" and "absent" are both six columns wide
    assert_eq!(column_of(lines[3], "y"), 8);
}

#[test]
fn test_right_aligned_column() {
    let mut table = Table::new(&["id", "name"]).align_right(0);
    table.add_row(vec!["7".to_string(), "A".to_string()]);
    table.add_row(vec!["123".to_string(), "B".to_string()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[2].starts_with("  7  A"));
    assert!(lines[3].starts_with("123  B"));
}

#[test]
fn test_display_width_counts_wide_glyphs_double() {
    assert_eq!(display_width("Bobby"), 5);
    assert_eq!(display_width("王小明"), 6);
    assert_eq!(display_width(&colorize_status(AttendanceStatus::Present)), 7);
}
