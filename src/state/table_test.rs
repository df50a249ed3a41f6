use super::*;

fn users_table() -> TableState {
    TableState::new(
        vec![
            TableColumn::new("ID", SortKind::Number),
            TableColumn::new("Email", SortKind::Text),
            TableColumn::new("Role", SortKind::Text),
            TableColumn::new("Created", SortKind::Date),
        ],
        vec![
            TableRow::new("10", vec!["10".into(), "zoe@shop.test".into(), "supplier".into(), "2024-02-01".into()]),
            TableRow::new("2", vec!["2".into(), "Admin@Example.com".into(), "admin".into(), "2023-11-20".into()]),
            TableRow::new("33", vec!["33".into(), "bob@shop.test".into(), "supplier".into(), "2024-01-05".into()]),
        ],
    )
}

fn visible_keys(table: &TableState) -> Vec<&str> {
    table
        .rows
        .iter()
        .filter(|row| table.is_row_visible(row))
        .map(|row| row.key.as_str())
        .collect()
}

fn first_column(table: &TableState) -> Vec<&str> {
    table.rows.iter().map(|r| r.cell(0)).collect()
}

// =============================================================
// sorting
// =============================================================

#[test]
fn sort_number_column_numerically() {
    let mut table = users_table();
    table.sort_by(0);
    assert_eq!(first_column(&table), vec!["2", "10", "33"]);
    assert_eq!(table.sorted_by, Some(0));
}

#[test]
fn sort_same_column_as_text_is_lexicographic() {
    let mut table = users_table();
    table.sort_by_kind(0, SortKind::Text);
    assert_eq!(first_column(&table), vec!["10", "2", "33"]);
}

#[test]
fn sort_date_column_chronologically() {
    let mut table = users_table();
    table.sort_by(3);
    assert_eq!(first_column(&table), vec!["2", "33", "10"]);
}

#[test]
fn sort_is_ascending_only() {
    let mut table = users_table();
    table.sort_by(0);
    table.sort_by(0);
    assert_eq!(first_column(&table), vec!["2", "10", "33"]);
}

#[test]
fn sort_text_keeps_equal_keys_in_prior_order() {
    let mut table = users_table();
    table.sort_by(2);
    assert_eq!(first_column(&table), vec!["2", "10", "33"]);
}

#[test]
fn sort_out_of_range_column_is_noop() {
    let mut table = users_table();
    let before = table.clone();
    table.sort_by(9);
    table.sort_by_kind(4, SortKind::Number);
    assert_eq!(table, before);
}

#[test]
fn sort_tolerates_short_rows() {
    let mut table = users_table();
    table.rows.push(TableRow::new("short", vec!["5".into()]));
    table.sort_by(1);
    assert_eq!(table.rows[0].key, "short");
}

#[test]
fn sort_on_empty_table_is_noop() {
    let mut table = TableState::default();
    table.sort_by(0);
    assert!(table.rows.is_empty());
    assert_eq!(table.sorted_by, None);
}

// =============================================================
// filtering
// =============================================================

#[test]
fn empty_query_shows_all_rows() {
    let table = users_table();
    assert_eq!(table.visible_count(), 3);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let mut table = users_table();
    table.set_query("ADMIN@");
    assert_eq!(visible_keys(&table), vec!["2"]);

    table.set_query("shop.TEST");
    assert_eq!(visible_keys(&table), vec!["10", "33"]);
}

#[test]
fn filter_hides_exactly_non_matching_rows() {
    let mut table = users_table();
    table.set_query("supplier");
    for row in &table.rows {
        assert_eq!(table.is_row_visible(row), row.text().to_lowercase().contains("supplier"));
    }
    assert_eq!(table.rows.len(), 3);
}

#[test]
fn filter_reevaluates_on_every_query() {
    let mut table = users_table();
    table.set_query("nobody");
    assert_eq!(table.visible_count(), 0);
    table.set_query("");
    assert_eq!(table.visible_count(), 3);
}

#[test]
fn filter_survives_sort() {
    let mut table = users_table();
    table.set_query("supplier");
    table.sort_by(0);
    assert_eq!(visible_keys(&table), vec!["10", "33"]);
}

#[test]
fn row_matches_handles_non_ascii() {
    assert!(row_matches("Пользователь Иван", "иван"));
    assert!(!row_matches("Пользователь Иван", "пётр"));
}

#[test]
fn row_style_hides_invisible_rows() {
    assert_eq!(row_style(true), "");
    assert_eq!(row_style(false), "display: none");
}
