//! メモリ上のテキストエディタ
//!
//! 行ベクタとカーソルだけを持つ `TextEditor` 実装。コマンドラインからの一括整形と
//! テストで使う

use super::text_editor::TextEditor;
use crate::error::{EditorError, Result};
use crate::geometry::{Point, Range};

/// メモリ上のテキストエディタ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEditor {
    lines: Vec<String>,
    cursor: Point,
    selection: Option<Range>,
    /// フェンスドコードブロック内の行ではテーブル編集を拒否する
    detect_fences: bool,
    /// `transact` が呼ばれた回数
    transactions: usize,
}

impl MemoryEditor {
    /// テキストから作成（カーソルは先頭）
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            lines,
            cursor: Point::default(),
            selection: None,
            detect_fences: false,
            transactions: 0,
        }
    }

    /// Markdown 文書として作成
    ///
    /// ```` ``` ```` / `~~~` で囲まれたコードブロック内ではテーブルを編集しない
    pub fn from_markdown(text: &str) -> Self {
        Self {
            detect_fences: true,
            ..Self::from_text(text)
        }
    }

    /// カーソル位置を指定したコピー
    pub fn with_cursor(mut self, pos: Point) -> Self {
        self.cursor = pos;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 改行で連結したテキスト
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn selection(&self) -> Option<Range> {
        self.selection
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.lines.len() {
            Ok(())
        } else {
            Err(EditorError::RowOutOfRange {
                row,
                last_row: self.last_row(),
            }
            .into())
        }
    }

    fn check_line(line: &str) -> Result<()> {
        if line.contains(|ch| ch == '\n' || ch == '\r') {
            return Err(EditorError::LineBreak {
                line: line.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// 指定行がフェンスドコードブロック内（フェンス行を含む）か
    fn in_code_block(&self, row: usize) -> bool {
        let mut open: Option<(char, usize)> = None;
        for (index, line) in self.lines.iter().enumerate().take(row + 1) {
            let fence = fence_of(line);
            match (open, fence) {
                (None, Some(fence)) => open = Some(fence),
                (Some((ch, len)), Some((fence_ch, fence_len))) if ch == fence_ch && fence_len >= len => {
                    if index == row {
                        return true;
                    }
                    open = None;
                }
                _ => {}
            }
        }
        open.is_some()
    }
}

/// フェンス行ならフェンス文字と長さ
fn fence_of(line: &str) -> Option<(char, usize)> {
    let trimmed = line.trim_start();
    let ch = trimmed.chars().next().filter(|&ch| ch == '`' || ch == '~')?;
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    (len >= 3).then_some((ch, len))
}

impl Default for MemoryEditor {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl TextEditor for MemoryEditor {
    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn set_cursor_position(&mut self, pos: Point) -> Result<()> {
        self.check_row(pos.row)?;
        self.cursor = pos;
        self.selection = None;
        Ok(())
    }

    fn set_selection_range(&mut self, range: Range) -> Result<()> {
        self.check_row(range.start.row)?;
        self.check_row(range.end.row)?;
        self.cursor = range.end;
        self.selection = Some(range);
        Ok(())
    }

    fn last_row(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    fn accepts_table_edit(&self, row: usize) -> bool {
        !self.detect_fences || !self.in_code_block(row)
    }

    fn line(&self, row: usize) -> Result<String> {
        self.check_row(row)?;
        Ok(self.lines[row].clone())
    }

    fn insert_line(&mut self, row: usize, line: &str) -> Result<()> {
        if row > self.lines.len() {
            return Err(EditorError::RowOutOfRange {
                row,
                last_row: self.last_row(),
            }
            .into());
        }
        Self::check_line(line)?;
        self.lines.insert(row, line.to_string());
        Ok(())
    }

    fn delete_line(&mut self, row: usize) -> Result<()> {
        self.check_row(row)?;
        self.lines.remove(row);
        Ok(())
    }

    fn replace_lines(&mut self, start: usize, end: usize, lines: &[String]) -> Result<()> {
        if start > end || end > self.lines.len() {
            return Err(EditorError::InvalidRange { start, end }.into());
        }
        for line in lines {
            Self::check_line(line)?;
        }
        self.lines.splice(start..end, lines.iter().cloned());
        Ok(())
    }

    fn transact<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.transactions += 1;
        f(self)
    }
}
