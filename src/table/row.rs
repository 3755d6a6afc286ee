//! テーブル行

use super::cell::TableCell;

/// セル列と左右マージンを持つ一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<TableCell>,
    /// 最初のパイプより左のテキスト
    margin_left: String,
    /// 最後のパイプより右のテキスト
    margin_right: String,
}

impl TableRow {
    pub fn new(
        cells: Vec<TableCell>,
        margin_left: impl Into<String>,
        margin_right: impl Into<String>,
    ) -> Self {
        Self {
            cells,
            margin_left: margin_left.into(),
            margin_right: margin_right.into(),
        }
    }

    /// 指定幅の空行（マージンなし）
    pub fn empty(width: usize) -> Self {
        Self::new(vec![TableCell::empty(); width], "", "")
    }

    pub fn margin_left(&self) -> &str {
        &self.margin_left
    }

    pub fn margin_right(&self) -> &str {
        &self.margin_right
    }

    /// セル数
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    pub fn cell_at(&self, index: usize) -> Option<&TableCell> {
        self.cells.get(index)
    }

    /// セル列を差し替えた新しい行（マージンは維持）
    pub fn with_cells(&self, cells: Vec<TableCell>) -> Self {
        Self::new(cells, self.margin_left.clone(), self.margin_right.clone())
    }

    /// テキスト表現
    pub fn to_text(&self) -> String {
        if self.cells.is_empty() {
            return self.margin_left.clone();
        }
        let cells: Vec<&str> = self.cells.iter().map(TableCell::to_text).collect();
        format!("{}|{}|{}", self.margin_left, cells.join("|"), self.margin_right)
    }

    /// すべてのセルが区切りセルか
    pub fn is_delimiter(&self) -> bool {
        self.cells.iter().all(TableCell::is_delimiter)
    }

    /// 指定セルの行頭からの開始列（左マージンとパイプの直後）
    pub(crate) fn cell_start_column(&self, index: usize) -> usize {
        let margin = self.margin_left.chars().count() + 1;
        self.cells
            .iter()
            .take(index)
            .map(|cell| cell.raw_len() + 1)
            .sum::<usize>()
            + margin
    }
}
