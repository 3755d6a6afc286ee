//! 座標型
//!
//! テキストエディタ上の位置（`Point` / `Range`）と、テーブル内のセル位置（`Focus`）

pub mod focus;

pub use focus::Focus;

/// テキストエディタ上の位置
///
/// 行・列ともに0ベース。列は行頭からの文字（Unicodeスカラー値）数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// 行番号（0ベース）
    pub row: usize,
    /// 列番号（0ベース、文字単位）
    pub column: usize,
}

impl Point {
    /// 指定位置を作成
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// テキストエディタ上の範囲
///
/// `start <= end` は型としては保証しない。呼び出し側が正しく構築すること
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// 開始位置
    pub start: Point,
    /// 終了位置
    pub end: Point,
}

impl Range {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// 単一行内の範囲かどうか
    pub fn is_single_line(&self) -> bool {
        self.start.row == self.end.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(2, 1));
    }

    #[test]
    fn test_range_keeps_given_order() {
        let range = Range::new(Point::new(3, 0), Point::new(1, 4));
        assert_eq!(range.start, Point::new(3, 0));
        assert_eq!(range.end, Point::new(1, 4));
        assert!(!range.is_single_line());
    }
}
