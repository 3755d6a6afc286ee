//! テーブルエディタ
//!
//! カーソル位置のテーブルを見つけ、補完・構造操作・整形を行ってから
//! 最小限の行変更でテキストエディタに書き戻す

use super::smart_cursor::SmartCursor;
use super::text_editor::TextEditor;
use crate::diff::{apply_edit_script, shortest_edit_script};
use crate::error::Result;
use crate::format::{complete_table, format_table, CompletedTable, FormattedTable};
use crate::geometry::{Focus, Point};
use crate::options::Options;
use crate::parser::{read_table_with, MarginPattern};
use crate::table::{operations, Alignment, Table, TableCell, TableRow};

/// 通常の編集なら編集距離はこれを超えない
const EDIT_SCRIPT_LIMIT: usize = 3;

/// カーソル位置で見つけたテーブル
#[derive(Debug, Clone)]
struct TableInfo {
    /// テーブル先頭行
    start_row: usize,
    /// 元の行テキスト
    lines: Vec<String>,
    table: Table,
    focus: Focus,
}

impl TableInfo {
    /// テーブルの直後の行（置き換え範囲の終端）
    fn end_row(&self) -> usize {
        self.start_row + self.lines.len()
    }

    fn table_pos(&self) -> Point {
        Point::new(self.start_row, 0)
    }
}

/// 整形後にカーソルをどう置くか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// フォーカス位置にカーソルを置く
    Cursor,
    /// フォーカスしたセルの内容を選択する
    Select,
}

impl Placement {
    fn moved(moved: bool) -> Self {
        if moved {
            Placement::Select
        } else {
            Placement::Cursor
        }
    }
}

/// テーブル編集コマンドの実行器
///
/// すべてのコマンドはカーソル行がテーブル行でなければ何もしない
#[derive(Debug)]
pub struct TableEditor<E: TextEditor> {
    editor: E,
    smart_cursor: SmartCursor,
}

impl<E: TextEditor> TableEditor<E> {
    pub fn new(editor: E) -> Self {
        Self {
            editor,
            smart_cursor: SmartCursor::new(),
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn into_inner(self) -> E {
        self.editor
    }

    pub fn smart_cursor(&self) -> &SmartCursor {
        &self.smart_cursor
    }

    /// スマートカーソルを無効化（エディタがフォーカスを失ったときなど）
    pub fn reset_smart_cursor(&mut self) {
        self.smart_cursor.reset();
    }

    /// カーソル行がテーブル行か
    pub fn cursor_is_in_table(&self, options: &Options) -> Result<bool> {
        let pattern = options.margin_pattern()?;
        let row = self.editor.cursor_position().row;
        if row > self.editor.last_row() {
            return Ok(false);
        }
        is_table_line(&self.editor, row, &pattern)
    }

    /// テーブルを整形する
    pub fn format(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, focus)) = self.prepare("format", options)? else {
            return Ok(());
        };
        let formatted = format_table(&completed.table, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &completed.table, &formatted, false));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Cursor)
    }

    /// テーブルを整形し、カーソルをテーブルの外（直後の行）に出す
    pub fn escape(&mut self, options: &Options) -> Result<()> {
        let pattern = options.margin_pattern()?;
        let Some(info) = self.find_table(&pattern)? else {
            log::debug!("escape: no table at cursor");
            return Ok(());
        };
        let completed = complete_table(&info.table, options)?;
        let formatted = format_table(&completed.table, options);
        let new_lines = formatted.table.to_lines();
        let new_row = info.start_row + new_lines.len();

        self.editor.transact(|editor| {
            update_lines(editor, info.start_row, info.end_row(), &new_lines, Some(info.lines.as_slice()))?;
            let pos = if new_row > editor.last_row() {
                editor.insert_line(new_row, "")?;
                Point::new(new_row, 0)
            } else {
                let next_line = editor.line(new_row)?;
                Point::new(new_row, pattern.leading_margin_len(&next_line))
            };
            editor.set_cursor_position(pos)
        })?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカスしている列のアライメントを変更する
    pub fn align_column(&mut self, alignment: Alignment, options: &Options) -> Result<()> {
        let Some((info, completed, focus)) = self.prepare("align_column", options)? else {
            return Ok(());
        };
        let altered = match header_column(&completed.table, &focus) {
            Some(column) => {
                operations::alter_alignment(&completed.table, column, alignment, options)
            }
            None => completed.table.clone(),
        };
        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &completed.table, &formatted, false));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Cursor)?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカスしているセルの内容を選択する
    pub fn select_cell(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, focus)) = self.prepare("select_cell", options)? else {
            return Ok(());
        };
        let formatted = format_table(&completed.table, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &completed.table, &formatted, false));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Select)
    }

    /// フォーカスを相対移動する
    ///
    /// 区切り行は飛ばし、テーブルの範囲に収める
    pub fn move_focus(&mut self, row_offset: isize, column_offset: isize, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("move_focus", options)? else {
            return Ok(());
        };
        let table = &completed.table;
        let mut focus = start;

        if row_offset != 0 {
            let row = start.row as isize;
            let target = row + row_offset;
            let skip = if row < 1 && target >= 1 {
                1
            } else if row > 1 && target <= 1 {
                -1
            } else {
                0
            };
            let height = table.height() as isize;
            let max_row = if height <= 2 { 0 } else { height - 1 };
            focus = focus.with_row((target + skip).clamp(0, max_row) as usize);
        }
        if column_offset != 0 {
            let width = header_width(table) as isize;
            let stays_outside = (focus.column < 0 && column_offset < 0)
                || (focus.column > width - 1 && column_offset > 0);
            if !stays_outside && width > 0 {
                focus = focus.with_column((focus.column + column_offset).clamp(0, width - 1));
            }
        }

        let moved = !focus.pos_equals(&start);
        let formatted = format_table(table, options);
        let focus = focus.with_offset(compute_new_offset(&focus, table, &formatted, moved));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::moved(moved))?;
        if moved {
            self.smart_cursor.reset();
        }
        Ok(())
    }

    /// 次のセルへ移動する
    ///
    /// 最後の列からは次の本文行へ折り返し、必要なら行や列を追加する
    pub fn next_cell(&mut self, options: &Options) -> Result<()> {
        let pattern = options.margin_pattern()?;
        let Some(info) = self.find_table(&pattern)? else {
            log::debug!("next_cell: no table at cursor");
            return Ok(());
        };
        self.smart_cursor.reset_if_moved(info.table_pos(), &info.focus);
        let (completed, start) = complete_with_focus(&info, options)?;
        let width = header_width(&completed.table);
        let mut altered = completed.table;
        let mut focus = start;

        if start.row == 1 {
            focus = focus.with_row(2);
            if !options.smart_cursor || !column_in_range(focus.column, width) {
                focus = focus.with_column(0);
            }
            altered = append_row_if_needed(altered, focus.row, width);
        } else if start.column > width as isize - 1 {
            // 右マージンからは新しい列を追加してそこへ移る
            let column = vec![TableCell::empty(); altered.height().saturating_sub(1)];
            altered = operations::insert_column(&altered, width, &column, options);
            focus = focus.with_column(width as isize);
        } else if start.column == width as isize - 1 {
            let row = if start.row == 0 { 2 } else { start.row + 1 };
            let column = self.anchor_column(width, options).unwrap_or(0);
            focus = Focus::new(row, column, 0);
            altered = append_row_if_needed(altered, row, width);
        } else {
            focus = focus.with_column(start.column + 1);
        }

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, true));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Select)?;
        if options.smart_cursor {
            self.smart_cursor
                .record(info.table_pos(), start, header_width(&formatted.table), focus);
        }
        Ok(())
    }

    /// 前のセルへ移動する
    pub fn previous_cell(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("previous_cell", options)? else {
            return Ok(());
        };
        let table = &completed.table;
        let last_column = header_width(table) as isize - 1;
        let focus = match start.row {
            0 if start.column > 0 => start.with_column(start.column - 1),
            0 => start,
            1 => Focus::new(0, last_column, start.offset),
            _ if start.column > 0 => start.with_column(start.column - 1),
            row => Focus::new(if row == 2 { 0 } else { row - 1 }, last_column, start.offset),
        };

        let moved = !focus.pos_equals(&start);
        let formatted = format_table(table, options);
        let focus = focus.with_offset(compute_new_offset(&focus, table, &formatted, moved));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::moved(moved))?;
        if moved {
            self.smart_cursor.reset();
        }
        Ok(())
    }

    /// 次の行へ移動する（必要なら行を追加する）
    pub fn next_row(&mut self, options: &Options) -> Result<()> {
        let pattern = options.margin_pattern()?;
        let Some(info) = self.find_table(&pattern)? else {
            log::debug!("next_row: no table at cursor");
            return Ok(());
        };
        self.smart_cursor.reset_if_moved(info.table_pos(), &info.focus);
        let (completed, start) = complete_with_focus(&info, options)?;
        let width = header_width(&completed.table);

        let row = if start.row == 0 { 2 } else { start.row + 1 };
        let column = self.wrap_column(&start, width, options);
        let focus = Focus::new(row, column, 0);
        let altered = append_row_if_needed(completed.table, row, width);

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, true));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Select)?;
        if options.smart_cursor {
            self.smart_cursor
                .record(info.table_pos(), start, header_width(&formatted.table), focus);
        }
        Ok(())
    }

    /// フォーカス行に空行を挿入する（区切り行より上には挿入しない）
    pub fn insert_row(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("insert_row", options)? else {
            return Ok(());
        };
        let focus = Focus::new(start.row.max(2), 0, start.offset);
        let row = TableRow::empty(header_width(&completed.table));
        let altered = operations::insert_row(&completed.table, focus.row, row);

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, true));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Cursor)?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカス行を削除する
    ///
    /// ヘッダー行は内容を空にし、区切り行は削除しない
    pub fn delete_row(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("delete_row", options)? else {
            return Ok(());
        };
        let mut altered = completed.table;
        let mut focus = start;
        let moved = start.row != 1;
        if moved {
            altered = operations::delete_row(&altered, start.row);
            if start.row > altered.height().saturating_sub(1) {
                focus = focus.with_row(if start.row == 2 { 0 } else { start.row - 1 });
            }
        }

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, moved));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::moved(moved))?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカス行を移動する
    pub fn move_row(&mut self, offset: isize, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("move_row", options)? else {
            return Ok(());
        };
        let mut altered = completed.table;
        let mut focus = start;
        if start.row > 1 {
            let last = altered.height() as isize - 1;
            let dest = (start.row as isize + offset).max(2).min(last) as usize;
            altered = operations::move_row(&altered, start.row, dest);
            focus = focus.with_row(dest);
        }

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, false));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Cursor)?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカス列に空列を挿入する
    pub fn insert_column(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("insert_column", options)? else {
            return Ok(());
        };
        let mut focus = start;
        if focus.row == 1 {
            focus = focus.with_row(0);
        }
        if focus.is_in_margin() {
            focus = focus.with_column(0);
        }
        let column = vec![TableCell::empty(); completed.table.height().saturating_sub(1)];
        let index = focus.column_index().unwrap_or(0);
        let altered = operations::insert_column(&completed.table, index, &column, options);

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, true));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Cursor)?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカス列を削除する
    pub fn delete_column(&mut self, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("delete_column", options)? else {
            return Ok(());
        };
        let mut focus = start;
        if focus.row == 1 {
            focus = focus.with_row(0);
        }
        let mut altered = completed.table;
        let column = header_column(&altered, &focus);
        let moved = column.is_some();
        if let Some(column) = column {
            altered = operations::delete_column(&altered, column, options);
            let width = header_width(&altered);
            if column >= width {
                focus = focus.with_column(width as isize - 1);
            }
        }

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, moved));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::moved(moved))?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// フォーカス列を移動する
    pub fn move_column(&mut self, offset: isize, options: &Options) -> Result<()> {
        let Some((info, completed, start)) = self.prepare("move_column", options)? else {
            return Ok(());
        };
        let mut altered = completed.table;
        let mut focus = start;
        if let Some(column) = header_column(&altered, &focus) {
            let last = header_width(&altered) as isize - 1;
            let dest = (column as isize + offset).clamp(0, last) as usize;
            altered = operations::move_column(&altered, column, dest);
            focus = focus.with_column(dest as isize);
        }

        let formatted = format_table(&altered, options);
        let focus = focus.with_offset(compute_new_offset(&focus, &altered, &formatted, false));
        self.apply(&info, formatted.table.to_lines(), &formatted.table, focus, Placement::Cursor)?;
        self.smart_cursor.reset();
        Ok(())
    }

    /// 文書中のすべてのテーブルを整形する
    pub fn format_all(&mut self, options: &Options) -> Result<()> {
        let pattern = options.margin_pattern()?;
        self.editor
            .transact(|editor| format_all_tables(editor, &pattern, options))
    }

    /// テーブルを探して補完し、フォーカスを補正する
    fn prepare(
        &self,
        command: &str,
        options: &Options,
    ) -> Result<Option<(TableInfo, CompletedTable, Focus)>> {
        let pattern = options.margin_pattern()?;
        let Some(info) = self.find_table(&pattern)? else {
            log::debug!("{}: no table at cursor", command);
            return Ok(None);
        };
        log::debug!(
            "{}: table at rows {}..{}, focus {:?}",
            command,
            info.start_row,
            info.end_row(),
            info.focus
        );
        let (completed, focus) = complete_with_focus(&info, options)?;
        Ok(Some((info, completed, focus)))
    }

    /// カーソル行を含む連続したテーブル行を探す
    fn find_table(&self, pattern: &MarginPattern) -> Result<Option<TableInfo>> {
        let pos = self.editor.cursor_position();
        let last_row = self.editor.last_row();
        if pos.row > last_row || !is_table_line(&self.editor, pos.row, pattern)? {
            return Ok(None);
        }

        let mut start_row = pos.row;
        while start_row > 0 && is_table_line(&self.editor, start_row - 1, pattern)? {
            start_row -= 1;
        }
        let mut end_row = pos.row;
        while end_row < last_row && is_table_line(&self.editor, end_row + 1, pattern)? {
            end_row += 1;
        }

        let lines = (start_row..=end_row)
            .map(|row| self.editor.line(row))
            .collect::<Result<Vec<_>>>()?;
        let table = read_table_with(&lines, pattern);
        Ok(table
            .focus_of_position(pos, start_row)
            .map(|focus| TableInfo {
                start_row,
                lines,
                table,
                focus,
            }))
    }

    /// スマートカーソルが覚えている開始列（今のテーブル幅に収まる場合のみ）
    fn anchor_column(&self, width: usize, options: &Options) -> Option<isize> {
        if !options.smart_cursor {
            return None;
        }
        self.smart_cursor
            .anchor_column()
            .filter(|&column| column_in_range(column, width))
    }

    /// `next_row` で次の行へ移るときの列
    ///
    /// 開始列がなければ今の列を保つ
    fn wrap_column(&self, start: &Focus, width: usize, options: &Options) -> isize {
        if !options.smart_cursor {
            return 0;
        }
        if let Some(column) = self.anchor_column(width, options) {
            return column;
        }
        if column_in_range(start.column, width) {
            start.column
        } else {
            0
        }
    }

    /// 整形後の行を書き戻し、カーソルを置く
    fn apply(
        &mut self,
        info: &TableInfo,
        new_lines: Vec<String>,
        table: &Table,
        focus: Focus,
        placement: Placement,
    ) -> Result<()> {
        let start_row = info.start_row;
        self.editor.transact(|editor| {
            update_lines(editor, start_row, info.end_row(), &new_lines, Some(info.lines.as_slice()))?;
            match placement {
                Placement::Cursor => move_to_focus(editor, start_row, table, &focus),
                Placement::Select => select_focus(editor, start_row, table, &focus),
            }
        })
    }
}

fn is_table_line<E: TextEditor>(editor: &E, row: usize, pattern: &MarginPattern) -> Result<bool> {
    if !editor.accepts_table_edit(row) {
        return Ok(false);
    }
    Ok(pattern.is_table_row(&editor.line(row)?))
}

/// 補完し、区切り行を挿入したらヘッダーより下のフォーカスを一行ずらす
fn complete_with_focus(info: &TableInfo, options: &Options) -> Result<(CompletedTable, Focus)> {
    let completed = complete_table(&info.table, options)?;
    let focus = if completed.delimiter_inserted && info.focus.row > 0 {
        info.focus.with_row(info.focus.row + 1)
    } else {
        info.focus
    };
    Ok((completed, focus))
}

/// ヘッダー行のセル数
fn header_width(table: &Table) -> usize {
    table.header_width().unwrap_or(0)
}

fn column_in_range(column: isize, width: usize) -> bool {
    column >= 0 && (column as usize) < width
}

/// フォーカスがヘッダー行の範囲内の列を指していればその列
fn header_column(table: &Table, focus: &Focus) -> Option<usize> {
    focus
        .column_index()
        .filter(|&column| column < header_width(table))
}

/// `row` がテーブルの外なら末尾に空行を追加する
fn append_row_if_needed(table: Table, row: usize, width: usize) -> Table {
    if row < table.height() {
        return table;
    }
    let height = table.height();
    operations::insert_row(&table, height, TableRow::empty(width))
}

/// 移動後・整形後のフォーカスオフセットを計算する
///
/// 移動していなければ元のセル内容上の位置を保ち、移動していればセル内容の先頭に置く。
/// `table` は整形前（補完済み）のテーブル
pub(crate) fn compute_new_offset(
    focus: &Focus,
    table: &Table,
    formatted: &FormattedTable,
    moved: bool,
) -> usize {
    let fallback = if focus.is_in_margin() {
        formatted.margin_left.chars().count()
    } else {
        0
    };
    let Some(formatted_cell) = formatted.table.focused_cell(focus) else {
        return fallback;
    };
    if moved {
        return formatted_cell.compute_raw_offset(0);
    }
    match table.focused_cell(focus) {
        Some(cell) => {
            let offset = cell
                .compute_content_offset(focus.offset)
                .min(formatted_cell.content_len());
            formatted_cell.compute_raw_offset(offset)
        }
        None => fallback,
    }
}

/// 行を置き換える
///
/// 元の行が分かっていれば編集スクリプトで差分だけを適用する
fn update_lines<E: TextEditor>(
    editor: &mut E,
    start_row: usize,
    end_row: usize,
    new_lines: &[String],
    old_lines: Option<&[String]>,
) -> Result<()> {
    if let Some(old_lines) = old_lines {
        if let Some(script) = shortest_edit_script(old_lines, new_lines, Some(EDIT_SCRIPT_LIMIT)) {
            return apply_edit_script(editor, &script, start_row);
        }
        log::trace!(
            "edit distance exceeds {}, replacing rows {}..{}",
            EDIT_SCRIPT_LIMIT,
            start_row,
            end_row
        );
    }
    editor.replace_lines(start_row, end_row, new_lines)
}

fn move_to_focus<E: TextEditor>(editor: &mut E, start_row: usize, table: &Table, focus: &Focus) -> Result<()> {
    match table.position_of_focus(focus, start_row) {
        Some(pos) => editor.set_cursor_position(pos),
        None => Ok(()),
    }
}

fn select_focus<E: TextEditor>(editor: &mut E, start_row: usize, table: &Table, focus: &Focus) -> Result<()> {
    match table.selection_range_of_focus(focus, start_row) {
        Some(range) => editor.set_selection_range(range),
        None => move_to_focus(editor, start_row, table, focus),
    }
}

/// 文書を先頭から走査し、連続したテーブル行ごとに整形する
fn format_all_tables<E: TextEditor>(editor: &mut E, pattern: &MarginPattern, options: &Options) -> Result<()> {
    let mut pos = editor.cursor_position();
    let mut lines: Vec<String> = Vec::new();
    let mut start_row: Option<usize> = None;
    let mut row = 0;

    while row <= editor.last_row() {
        let line = editor.line(row)?;
        if editor.accepts_table_edit(row) && pattern.is_table_row(&line) {
            lines.push(line);
            start_row.get_or_insert(row);
        } else if let Some(start) = start_row.take() {
            let (new_len, new_pos) = format_block(editor, start, &lines, pos, pattern, options)?;
            pos = new_pos;
            // 整形で行数が変わった分だけ走査位置をずらす
            row = start + new_len;
            lines.clear();
        }
        row += 1;
    }
    if let Some(start) = start_row {
        let (_, new_pos) = format_block(editor, start, &lines, pos, pattern, options)?;
        pos = new_pos;
    }
    log::debug!("format_all: cursor at {:?}", pos);
    editor.set_cursor_position(pos)
}

/// 一つのテーブルを整形し、新しい行数と補正したカーソル位置を返す
fn format_block<E: TextEditor>(
    editor: &mut E,
    start_row: usize,
    lines: &[String],
    pos: Point,
    pattern: &MarginPattern,
    options: &Options,
) -> Result<(usize, Point)> {
    let table = read_table_with(lines, pattern);
    let completed = complete_table(&table, options)?;
    let formatted = format_table(&completed.table, options);
    let new_lines = formatted.table.to_lines();
    let end_row = start_row + lines.len();
    update_lines(editor, start_row, end_row, &new_lines, Some(lines))?;

    let new_pos = match table.focus_of_position(pos, start_row) {
        Some(focus) => {
            let focus = if completed.delimiter_inserted && focus.row > 0 {
                focus.with_row(focus.row + 1)
            } else {
                focus
            };
            let focus = focus.with_offset(compute_new_offset(&focus, &completed.table, &formatted, false));
            formatted
                .table
                .position_of_focus(&focus, start_row)
                .unwrap_or(pos)
        }
        None if pos.row >= end_row => {
            Point::new(pos.row + new_lines.len() - lines.len(), pos.column)
        }
        None => pos,
    };
    Ok((new_lines.len(), new_pos))
}
