//! フォーカス（テーブル内の注目セル）

/// テーブル内で注目しているセルとセル内オフセット
///
/// `row` / `column` はテーブル内のセル位置で、テキスト上の座標ではない。
/// `column == -1` は最初のパイプより左（左マージン内）を表す。
/// `offset` は常にトリム前の生テキストに対する文字オフセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Focus {
    /// 行インデックス
    pub row: usize,
    /// 列インデックス（左マージン内なら -1）
    pub column: isize,
    /// セル生テキスト内のオフセット
    pub offset: usize,
}

impl Focus {
    /// 左マージンを表す列番号
    pub const MARGIN_COLUMN: isize = -1;

    pub fn new(row: usize, column: isize, offset: usize) -> Self {
        Self {
            row,
            column,
            offset,
        }
    }

    /// 同じセルを指しているか（オフセットは無視）
    pub fn pos_equals(&self, other: &Focus) -> bool {
        self.row == other.row && self.column == other.column
    }

    /// 行だけを差し替えたコピー
    pub fn with_row(self, row: usize) -> Self {
        Self { row, ..self }
    }

    /// 列だけを差し替えたコピー
    pub fn with_column(self, column: isize) -> Self {
        Self { column, ..self }
    }

    /// オフセットだけを差し替えたコピー
    pub fn with_offset(self, offset: usize) -> Self {
        Self { offset, ..self }
    }

    /// 左マージン内か
    pub fn is_in_margin(&self) -> bool {
        self.column < 0
    }

    /// セルを指している場合の列インデックス
    pub fn column_index(&self) -> Option<usize> {
        usize::try_from(self.column).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_equals_ignores_offset() {
        let a = Focus::new(2, 1, 0);
        let b = Focus::new(2, 1, 7);
        assert!(a.pos_equals(&b));
        assert_ne!(a, b);
        assert!(!a.pos_equals(&Focus::new(2, 0, 0)));
    }

    #[test]
    fn test_setters_return_copies() {
        let focus = Focus::new(0, 0, 0);
        let moved = focus.with_row(3).with_column(2).with_offset(5);
        assert_eq!(moved, Focus::new(3, 2, 5));
        assert_eq!(focus, Focus::new(0, 0, 0));
    }

    #[test]
    fn test_margin_sentinel() {
        let focus = Focus::new(1, Focus::MARGIN_COLUMN, 2);
        assert!(focus.is_in_margin());
        assert_eq!(focus.column_index(), None);
        assert_eq!(Focus::new(1, 3, 0).column_index(), Some(3));
    }
}
