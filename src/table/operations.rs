//! テーブル構造操作
//!
//! いずれも補完済み（全行同じ幅）のテーブルを受け取り、新しいテーブルを返す。
//! 範囲外のインデックスは何もしない

use super::{Alignment, Table, TableCell, TableRow};
use crate::options::Options;

/// 列のアライメントを変更
pub fn alter_alignment(
    table: &Table,
    column: usize,
    alignment: Alignment,
    options: &Options,
) -> Table {
    let Some(delimiter_row) = table.row_at(1) else {
        return table.clone();
    };
    if column >= delimiter_row.width() {
        return table.clone();
    }
    let mut cells = delimiter_row.cells().to_vec();
    cells[column] = TableCell::delimiter(alignment, options.min_delimiter_width);

    let mut rows = table.rows().to_vec();
    rows[1] = delimiter_row.with_cells(cells);
    Table::new(rows)
}

/// 行を挿入
///
/// ヘッダー行と区切り行より上には挿入しない
pub fn insert_row(table: &Table, index: usize, row: TableRow) -> Table {
    let mut rows = table.rows().to_vec();
    let index = index.max(2).min(rows.len());
    rows.insert(index, row);
    Table::new(rows)
}

/// 行を削除
///
/// ヘッダー行はセルを空にするだけで削除しない。区切り行は何もしない
pub fn delete_row(table: &Table, index: usize) -> Table {
    if index == 1 || index >= table.height() {
        return table.clone();
    }
    let mut rows = table.rows().to_vec();
    if index == 0 {
        let header = &rows[0];
        rows[0] = header.with_cells(vec![TableCell::empty(); header.width()]);
    } else {
        rows.remove(index);
    }
    Table::new(rows)
}

/// 行を移動
pub fn move_row(table: &Table, from: usize, to: usize) -> Table {
    if from <= 1 || to <= 1 || from == to || from >= table.height() {
        return table.clone();
    }
    let mut rows = table.rows().to_vec();
    let row = rows.remove(from);
    let to = to.min(rows.len());
    rows.insert(to, row);
    Table::new(rows)
}

/// 列を挿入
///
/// `column` はヘッダー行と本文行に入るセル（区切り行の分は含まない）。
/// 区切り行には `none` の区切りセルを挿入する
pub fn insert_column(
    table: &Table,
    index: usize,
    column: &[TableCell],
    options: &Options,
) -> Table {
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cell = if i == 1 {
                TableCell::delimiter(Alignment::None, options.min_delimiter_width)
            } else {
                let source = if i > 1 { i - 1 } else { i };
                column.get(source).cloned().unwrap_or_else(TableCell::empty)
            };
            let mut cells = row.cells().to_vec();
            cells.insert(index.min(cells.len()), cell);
            row.with_cells(cells)
        })
        .collect();
    Table::new(rows)
}

/// 列を削除
///
/// 列が一つしかない行はセルを空（区切り行なら区切りセル）にして残す
pub fn delete_column(table: &Table, index: usize, options: &Options) -> Table {
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = row.cells().to_vec();
            if cells.len() <= 1 {
                cells = vec![if i == 1 {
                    TableCell::delimiter(Alignment::None, options.min_delimiter_width)
                } else {
                    TableCell::empty()
                }];
            } else if index < cells.len() {
                cells.remove(index);
            }
            row.with_cells(cells)
        })
        .collect();
    Table::new(rows)
}

/// 列を移動
pub fn move_column(table: &Table, from: usize, to: usize) -> Table {
    if from == to {
        return table.clone();
    }
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let mut cells = row.cells().to_vec();
            if from < cells.len() {
                let cell = cells.remove(from);
                let to = to.min(cells.len());
                cells.insert(to, cell);
            }
            row.with_cells(cells)
        })
        .collect();
    Table::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::read_table;

    fn sample() -> Table {
        read_table(
            &["| a | b |", "| --- | ---: |", "| 1 | 2 |", "| 3 | 4 |"],
            &Options::default(),
        )
        .unwrap()
    }

    fn contents(table: &Table) -> Vec<Vec<String>> {
        table
            .rows()
            .iter()
            .map(|row| row.cells().iter().map(|c| c.content().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_alter_alignment() {
        let altered = alter_alignment(&sample(), 0, Alignment::Center, &Options::default());
        assert_eq!(altered.cell_at(1, 0).unwrap().raw_content(), ":---:");
        assert_eq!(altered.cell_at(1, 1).unwrap().alignment(), Some(Alignment::Right));

        // 範囲外は何もしない
        let untouched = alter_alignment(&sample(), 2, Alignment::Center, &Options::default());
        assert_eq!(untouched, sample());
    }

    #[test]
    fn test_insert_row_never_above_body() {
        let inserted = insert_row(&sample(), 0, TableRow::empty(2));
        assert_eq!(inserted.height(), 5);
        assert_eq!(contents(&inserted)[2], vec!["", ""]);
        assert_eq!(contents(&inserted)[0], vec!["a", "b"]);

        let appended = insert_row(&sample(), 10, TableRow::empty(2));
        assert_eq!(contents(&appended)[4], vec!["", ""]);
    }

    #[test]
    fn test_delete_row() {
        let table = sample();
        assert_eq!(delete_row(&table, 1), table);

        let header_cleared = delete_row(&table, 0);
        assert_eq!(header_cleared.height(), 4);
        assert_eq!(contents(&header_cleared)[0], vec!["", ""]);

        let body_deleted = delete_row(&table, 2);
        assert_eq!(body_deleted.height(), 3);
        assert_eq!(contents(&body_deleted)[2], vec!["3", "4"]);
    }

    #[test]
    fn test_move_row() {
        let table = sample();
        assert_eq!(move_row(&table, 1, 3), table);
        assert_eq!(move_row(&table, 2, 2), table);
        let moved = move_row(&table, 2, 3);
        assert_eq!(contents(&moved)[2], vec!["3", "4"]);
        assert_eq!(contents(&moved)[3], vec!["1", "2"]);
    }

    #[test]
    fn test_insert_column() {
        let column = vec![TableCell::new(" x "), TableCell::new(" y "), TableCell::new(" z ")];
        let inserted = insert_column(&sample(), 1, &column, &Options::default());
        assert_eq!(inserted.width(), 3);
        assert_eq!(contents(&inserted)[0], vec!["a", "x", "b"]);
        assert_eq!(inserted.cell_at(1, 1).unwrap().raw_content(), " --- ");
        assert_eq!(contents(&inserted)[2], vec!["1", "y", "2"]);
        assert_eq!(contents(&inserted)[3], vec!["3", "z", "4"]);
    }

    #[test]
    fn test_delete_column() {
        let deleted = delete_column(&sample(), 0, &Options::default());
        assert_eq!(contents(&deleted)[0], vec!["b"]);
        assert_eq!(deleted.cell_at(1, 0).unwrap().alignment(), Some(Alignment::Right));

        // 最後の一列は空にして残す
        let emptied = delete_column(&deleted, 0, &Options::default());
        assert_eq!(emptied.width(), 1);
        assert_eq!(contents(&emptied)[0], vec![""]);
        assert_eq!(emptied.cell_at(1, 0).unwrap().raw_content(), " --- ");
        assert_eq!(contents(&emptied)[3], vec![""]);
    }

    #[test]
    fn test_move_column() {
        let moved = move_column(&sample(), 0, 1);
        assert_eq!(contents(&moved)[0], vec!["b", "a"]);
        assert_eq!(moved.cell_at(1, 0).unwrap().alignment(), Some(Alignment::Right));
        assert_eq!(move_column(&sample(), 1, 1), sample());
    }
}
