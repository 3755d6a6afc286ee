//! テーブルモデル
//!
//! パース済みテーブルの不変な構造表現。すべての変換は新しい値を返す

pub mod alignment;
pub mod cell;
pub mod operations;
pub mod row;

pub use alignment::{delimiter_text, Alignment, DefaultAlignment, HeaderAlignment};
pub use cell::TableCell;
pub use row::TableRow;

use crate::geometry::{Focus, Point, Range};

/// テーブル
///
/// 0行目がヘッダー。1行目のセルがすべて区切りセルならそれが区切り行
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    rows: Vec<TableRow>,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// 行数
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// 最大のセル数
    pub fn width(&self) -> usize {
        self.rows.iter().map(TableRow::width).max().unwrap_or(0)
    }

    /// ヘッダー行のセル数（行がなければ `None`）
    pub fn header_width(&self) -> Option<usize> {
        self.rows.first().map(TableRow::width)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<TableRow> {
        self.rows
    }

    pub fn row_at(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    /// 区切り行（存在しなければ `None`）
    pub fn delimiter_row(&self) -> Option<&TableRow> {
        self.rows.get(1).filter(|row| row.is_delimiter())
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cell_at(column)
    }

    /// フォーカスが指すセル
    pub fn focused_cell(&self, focus: &Focus) -> Option<&TableCell> {
        self.cell_at(focus.row, focus.column_index()?)
    }

    /// 各行のテキスト表現
    pub fn to_lines(&self) -> Vec<String> {
        self.rows.iter().map(TableRow::to_text).collect()
    }

    /// テキスト上の位置からフォーカスを求める
    ///
    /// `row_offset` はテーブル先頭行のテキスト上の行番号
    pub fn focus_of_position(&self, pos: Point, row_offset: usize) -> Option<Focus> {
        let row_index = pos.row.checked_sub(row_offset)?;
        let row = self.rows.get(row_index)?;
        let margin = row.margin_left().chars().count();
        if pos.column < margin + 1 {
            return Some(Focus::new(row_index, Focus::MARGIN_COLUMN, pos.column));
        }
        let mut column_pos = margin + 1;
        let mut column_index = 0;
        for cell in row.cells() {
            let cell_width = cell.raw_len();
            if column_pos + cell_width + 1 > pos.column {
                break;
            }
            column_pos += cell_width + 1;
            column_index += 1;
        }
        Some(Focus::new(
            row_index,
            column_index as isize,
            pos.column - column_pos,
        ))
    }

    /// フォーカスからテキスト上の位置を求める
    pub fn position_of_focus(&self, focus: &Focus, row_offset: usize) -> Option<Point> {
        let row = self.rows.get(focus.row)?;
        let row_pos = focus.row + row_offset;
        let Some(column) = focus.column_index() else {
            return Some(Point::new(row_pos, focus.offset));
        };
        let column_pos = row.cell_start_column(column.min(row.width()));
        Some(Point::new(row_pos, column_pos + focus.offset))
    }

    /// フォーカスしたセルの内容を選択する範囲
    ///
    /// セルが存在しない、または内容が空なら `None`
    pub fn selection_range_of_focus(&self, focus: &Focus, row_offset: usize) -> Option<Range> {
        let row = self.rows.get(focus.row)?;
        let column = focus.column_index()?;
        let cell = row.cell_at(column)?;
        if cell.content().is_empty() {
            return None;
        }
        let row_pos = focus.row + row_offset;
        let column_pos = row.cell_start_column(column) + cell.padding_left();
        Some(Range::new(
            Point::new(row_pos, column_pos),
            Point::new(row_pos, column_pos + cell.content_len()),
        ))
    }
}
