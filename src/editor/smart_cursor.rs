//! スマートカーソル
//!
//! `next_cell` / `next_row` で連続して移動している間、移動を始めた列を覚えておき、
//! 次の行に移るときにその列へ戻す

use crate::geometry::{Focus, Point};

/// スマートカーソルの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmartCursor {
    active: bool,
    /// 有効化したときのテーブル先頭位置
    table_pos: Option<Point>,
    /// 移動を始めたフォーカス
    start_focus: Option<Focus>,
    /// 最後に移動したフォーカス
    last_focus: Option<Focus>,
}

impl SmartCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 無効化する（記録した位置は次の有効化で上書きされる）
    pub fn reset(&mut self) {
        self.active = false;
    }

    /// 前回の移動以降にテーブルかフォーカスが変わったか
    pub fn focus_moved(&self, table_pos: Point, focus: &Focus) -> bool {
        self.table_pos.is_some_and(|pos| pos != table_pos)
            || self.last_focus.is_some_and(|last| !last.pos_equals(focus))
    }

    /// 予期しない移動があれば無効化する
    pub fn reset_if_moved(&mut self, table_pos: Point, focus: &Focus) {
        if self.active && self.focus_moved(table_pos, focus) {
            log::trace!("smart cursor reset: focus moved outside of table commands");
            self.reset();
        }
    }

    /// 有効なときに戻る列
    pub fn anchor_column(&self) -> Option<isize> {
        if self.active {
            self.start_focus.map(|focus| focus.column)
        } else {
            None
        }
    }

    /// 移動を記録する。無効なら `start` を開始位置として有効化する
    ///
    /// `start` がセルを指していなければ、その行の先頭セルを開始位置にする
    pub fn record(&mut self, table_pos: Point, start: Focus, header_width: usize, last: Focus) {
        if !self.active {
            self.active = true;
            self.table_pos = Some(table_pos);
            let in_cells = start
                .column_index()
                .is_some_and(|column| column < header_width);
            self.start_focus = Some(if in_cells {
                start
            } else {
                Focus::new(start.row, 0, 0)
            });
        }
        self.last_focus = Some(last);
    }
}
