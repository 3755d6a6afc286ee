//! テキストエディタインターフェース
//!
//! テーブル編集エンジンがホスト側の文書とカーソルを操作するための境界

use crate::error::Result;
use crate::geometry::{Point, Range};

/// ホスト側テキストエディタの操作インターフェース
///
/// 行番号・列番号はどちらも0始まりで、列は行内の文字数で数える
pub trait TextEditor {
    /// カーソル位置を取得
    fn cursor_position(&self) -> Point;

    /// カーソル位置を設定
    fn set_cursor_position(&mut self, pos: Point) -> Result<()>;

    /// 選択範囲を設定（カーソルは範囲の終端に置く）
    fn set_selection_range(&mut self, range: Range) -> Result<()>;

    /// 最終行の行番号
    fn last_row(&self) -> usize;

    /// 指定行のテーブルを編集してよいか（コードブロック内などでは `false`）
    fn accepts_table_edit(&self, row: usize) -> bool;

    /// 指定行のテキスト（改行を含まない）
    fn line(&self, row: usize) -> Result<String>;

    /// 指定行の前に行を挿入（`last_row() + 1` なら末尾に追加）
    fn insert_line(&mut self, row: usize, line: &str) -> Result<()>;

    /// 行を削除
    fn delete_line(&mut self, row: usize) -> Result<()>;

    /// `start..end` の行を置き換える
    fn replace_lines(&mut self, start: usize, end: usize, lines: &[String]) -> Result<()>;

    /// 一連の変更を一つの操作としてまとめる（取り消し単位など）
    fn transact<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
        Self: Sized,
    {
        f(self)
    }
}
