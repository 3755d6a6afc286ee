//! テーブル補完
//!
//! 足りないセルと区切り行を補い、全行をテーブル幅に揃える

use crate::error::{Result, TableError};
use crate::options::Options;
use crate::table::{Alignment, Table, TableCell, TableRow};

/// 補完結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTable {
    pub table: Table,
    /// 区切り行を新しく挿入したか
    pub delimiter_inserted: bool,
}

/// テーブルを補完する
///
/// 行が一つもなければ `TableError::EmptyTable`
pub fn complete_table(table: &Table, options: &Options) -> Result<CompletedTable> {
    let width = table.width();
    let header = table.row_at(0).ok_or(TableError::EmptyTable)?;
    let delimiter = table.delimiter_row();

    let mut rows = Vec::with_capacity(table.height() + 1);
    rows.push(extend_row(header, width, |first| {
        carry_margin(header, first)
    }));

    let body_start = match delimiter {
        Some(row) => {
            let min = options.min_delimiter_width;
            let right_len = row.margin_right().chars().count();
            rows.push(extend_row(row, width, |first| {
                let bar = if first {
                    min.max(right_len.saturating_sub(2))
                } else {
                    min
                };
                TableCell::delimiter(Alignment::None, bar)
            }));
            2
        }
        None => {
            let cells =
                vec![TableCell::delimiter(Alignment::None, options.min_delimiter_width); width];
            rows.push(TableRow::new(cells, "", ""));
            1
        }
    };

    rows.extend(
        table.rows()[body_start..]
            .iter()
            .map(|row| extend_row(row, width, |first| carry_margin(row, first))),
    );

    Ok(CompletedTable {
        table: Table::new(rows),
        delimiter_inserted: delimiter.is_none(),
    })
}

/// 追加する最初のセルは右マージンの内容を引き継ぐ
fn carry_margin(row: &TableRow, first: bool) -> TableCell {
    if first {
        TableCell::new(row.margin_right())
    } else {
        TableCell::empty()
    }
}

/// 行を `width` セルまで伸ばす
///
/// `filler` は追加するセルが最初の一つかどうかを受け取る。
/// 伸ばした行の右マージンは捨てる
fn extend_row(row: &TableRow, width: usize, filler: impl Fn(bool) -> TableCell) -> TableRow {
    let current = row.width();
    if current >= width {
        return row.clone();
    }
    let mut cells = row.cells().to_vec();
    cells.extend((current..width).map(|index| filler(index == current)));
    TableRow::new(cells, row.margin_left(), "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_table;

    fn complete(lines: &[&str]) -> CompletedTable {
        let table = read_table(lines, &Options::default()).unwrap();
        complete_table(&table, &Options::default()).unwrap()
    }

    #[test]
    fn test_empty_table_is_error() {
        let result = complete_table(&Table::default(), &Options::default());
        assert!(matches!(result, Err(TableError::EmptyTable)));
    }

    #[test]
    fn test_widths_are_equalized() {
        let completed = complete(&["| a |", "| --- |", "| 1 | 2 | 3 |"]);
        assert!(!completed.delimiter_inserted);
        assert!(completed.table.rows().iter().all(|row| row.width() == 3));
        assert_eq!(completed.table.to_lines()[0], "| a |||");
        assert_eq!(completed.table.to_lines()[1], "| --- | --- | --- |");
    }

    #[test]
    fn test_right_margin_becomes_cell() {
        // 伸ばした行では右マージンが最初の追加セルになる
        let completed = complete(&["| a |  ", "| --- |", "| 1 | 2 |"]);
        let header = &completed.table.rows()[0];
        assert_eq!(header.cell_at(1).unwrap().raw_content(), "  ");
        assert_eq!(header.margin_right(), "");
    }

    #[test]
    fn test_delimiter_first_new_cell_uses_margin_length() {
        let completed = complete(&["| a | b |", "| --- |      ", "| 1 | 2 |"]);
        let delimiter = &completed.table.rows()[1];
        assert_eq!(delimiter.cell_at(1).unwrap().raw_content(), " ---- ");
        assert_eq!(delimiter.margin_right(), "");
    }

    #[test]
    fn test_delimiter_row_inserted() {
        let completed = complete(&["| a | b |", "| 1 | 2 |"]);
        assert!(completed.delimiter_inserted);
        assert_eq!(completed.table.height(), 3);
        assert_eq!(completed.table.to_lines()[1], "| --- | --- |");
        assert_eq!(completed.table.to_lines()[2], "| 1 | 2 |");
    }

    #[test]
    fn test_complete_rows_are_kept() {
        let lines = ["  | a | b |  ", "  | --- | --- |", "  | 1 | 2 |"];
        let completed = complete(&lines);
        assert_eq!(completed.table.to_lines(), lines);
    }
}
