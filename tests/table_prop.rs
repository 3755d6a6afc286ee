//! テーブル補完・整形のプロパティテスト
//!
//! 区切り行・エスケープしたパイプ・コードスパン・左右マージンを含む行を生成する。
//! 単独のバックスラッシュで終わるセルは書き戻すと閉じパイプをエスケープするので
//! 生成しない

use mdtable::{complete_table, format_table, read_table, FormatType, Options, Table};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9 ]{0,4}",
        2 => " ?:?-{1,4}:? ?",
        1 => r"[a-z ]{0,2}\\\|[a-z ]{0,2}",
        1 => "[a-z ]{0,1}`[a-z|]{1,3}`[a-z ]{0,1}",
    ]
}

fn row_strategy() -> impl Strategy<Value = String> {
    (
        "[ >]{0,2}",
        proptest::collection::vec(cell_strategy(), 1..5),
        " {0,2}",
    )
        .prop_map(|(margin, cells, trailing)| format!("{}|{}|{}", margin, cells.join("|"), trailing))
}

fn delimiter_row_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(" ?:?-{1,4}:? ?", 1..5).prop_map(|cells| format!("|{}|", cells.join("|")))
}

/// ヘッダー行、任意の区切り行、本文行
fn table_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        row_strategy(),
        proptest::option::of(delimiter_row_strategy()),
        proptest::collection::vec(row_strategy(), 0..5),
    )
        .prop_map(|(header, delimiter, body)| {
            std::iter::once(header)
                .chain(delimiter)
                .chain(body)
                .collect()
        })
}

fn format_type_strategy() -> impl Strategy<Value = FormatType> {
    prop_oneof![Just(FormatType::Normal), Just(FormatType::Weak)]
}

fn options(format_type: FormatType) -> Options {
    Options::default()
        .with_left_margin_chars(['>'])
        .with_format_type(format_type)
}

fn reread(table: &Table, options: &Options) -> Vec<String> {
    let lines = table.to_lines();
    read_table(&lines, options).unwrap().to_lines()
}

fn format_lines(lines: &[String], options: &Options) -> Vec<String> {
    let table = read_table(lines, options).unwrap();
    let completed = complete_table(&table, options).unwrap();
    format_table(&completed.table, options).table.to_lines()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn completed_rows_share_table_width(lines in table_strategy()) {
        let options = options(FormatType::Normal);
        let table = read_table(&lines, &options).unwrap();
        let completed = complete_table(&table, &options).unwrap();

        let width = table.width();
        let had_delimiter = table.delimiter_row().is_some();
        prop_assert_eq!(completed.delimiter_inserted, !had_delimiter);
        let expected_height = if had_delimiter { table.height() } else { table.height() + 1 };
        prop_assert_eq!(completed.table.height(), expected_height);
        prop_assert!(completed.table.delimiter_row().is_some());
        for row in completed.table.rows() {
            prop_assert_eq!(row.width(), width);
        }
    }

    #[test]
    fn completed_and_formatted_tables_round_trip(
        lines in table_strategy(),
        format_type in format_type_strategy(),
    ) {
        let options = options(format_type);
        let table = read_table(&lines, &options).unwrap();
        let completed = complete_table(&table, &options).unwrap();
        prop_assert_eq!(reread(&completed.table, &options), completed.table.to_lines());

        let formatted = format_table(&completed.table, &options);
        prop_assert_eq!(reread(&formatted.table, &options), formatted.table.to_lines());
        for row in formatted.table.rows() {
            prop_assert_eq!(row.margin_left(), formatted.margin_left.as_str());
        }
    }

    #[test]
    fn normal_format_rows_have_equal_length(lines in table_strategy()) {
        let formatted = format_lines(&lines, &options(FormatType::Normal));
        let first = formatted[0].chars().count();
        prop_assert!(formatted.iter().all(|line| line.chars().count() == first));
    }

    #[test]
    fn format_is_idempotent(lines in table_strategy(), format_type in format_type_strategy()) {
        let options = options(format_type);
        let once = format_lines(&lines, &options);
        let twice = format_lines(&once, &options);
        prop_assert_eq!(once, twice);
    }
}
