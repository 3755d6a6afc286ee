//! テーブル整形
//!
//! 通常整形は列幅を揃えてアライメントを適用する。弱い整形はセル内容の前後に
//! 空白を一つずつ置くだけで、列幅は揃えない。どちらも全行にヘッダー行の
//! 左マージンを付け、右マージンは消す

pub mod complete;
pub mod width;

pub use complete::{complete_table, CompletedTable};
pub use width::{compute_text_width, TextWidthOptions};

use crate::error::TableError;
use crate::options::Options;
use crate::table::{Alignment, Table, TableCell, TableRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 整形方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormatType {
    #[default]
    Normal,
    Weak,
}

impl FormatType {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatType::Normal => "normal",
            FormatType::Weak => "weak",
        }
    }
}

impl FromStr for FormatType {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FormatType::Normal),
            "weak" => Ok(FormatType::Weak),
            other => Err(TableError::UnknownFormatType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FormatType {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormatType> for String {
    fn from(value: FormatType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 整形結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTable {
    pub table: Table,
    /// 全行に付けた左マージン
    pub margin_left: String,
}

/// テーブルを整形する
pub fn format_table(table: &Table, options: &Options) -> FormattedTable {
    match options.format_type {
        FormatType::Normal => format_normal(table, options),
        FormatType::Weak => format_weak(table, options),
    }
}

/// 行がない・セルがないテーブルの扱い（共通）
fn format_degenerate(table: &Table) -> Option<FormattedTable> {
    let Some(header) = table.row_at(0) else {
        return Some(FormattedTable {
            table: table.clone(),
            margin_left: String::new(),
        });
    };
    if table.width() > 0 {
        return None;
    }
    let margin_left = header.margin_left().to_string();
    let rows = (0..table.height())
        .map(|_| TableRow::new(Vec::new(), margin_left.clone(), ""))
        .collect();
    Some(FormattedTable {
        table: Table::new(rows),
        margin_left,
    })
}

fn format_normal(table: &Table, options: &Options) -> FormattedTable {
    if let Some(formatted) = format_degenerate(table) {
        return formatted;
    }
    let width = table.width();
    let text_options = &options.text_width_options;
    let delimiter = table.delimiter_row();

    // 列幅
    let mut column_widths = vec![0; width];
    if let Some(row) = delimiter {
        column_widths
            .iter_mut()
            .take(row.width())
            .for_each(|w| *w = options.min_delimiter_width);
    }
    for (i, row) in table.rows().iter().enumerate() {
        if delimiter.is_some() && i == 1 {
            continue;
        }
        for (j, cell) in row.cells().iter().enumerate() {
            let content_width = compute_text_width(cell.content(), text_options);
            column_widths[j] = column_widths[j].max(content_width);
        }
    }

    // 列アライメント
    let default_alignment = Alignment::from(options.default_alignment);
    let mut alignments: Vec<Alignment> = delimiter
        .map(|row| {
            row.cells()
                .iter()
                .map(|cell| cell.alignment().unwrap_or(Alignment::None))
                .collect()
        })
        .unwrap_or_default();
    alignments.resize(width, default_alignment);

    let margin_left = table.rows()[0].margin_left().to_string();
    let mut rows = Vec::with_capacity(table.height());

    let header = &table.rows()[0];
    let header_cells = header
        .cells()
        .iter()
        .enumerate()
        .map(|(j, cell)| {
            let alignment = options
                .header_alignment
                .resolve(alignments[j], options.default_alignment);
            TableCell::new(pad_text(&align_text(
                cell.content(),
                column_widths[j],
                alignment,
                options,
            )))
        })
        .collect();
    rows.push(TableRow::new(header_cells, margin_left.clone(), ""));

    let body_start = match delimiter {
        Some(row) => {
            let cells = (0..row.width())
                .map(|j| TableCell::delimiter(alignments[j], column_widths[j]))
                .collect();
            rows.push(TableRow::new(cells, margin_left.clone(), ""));
            2
        }
        None => 1,
    };

    for row in &table.rows()[body_start..] {
        let cells = row
            .cells()
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                let alignment = alignments[j].or_default(options.default_alignment);
                TableCell::new(pad_text(&align_text(
                    cell.content(),
                    column_widths[j],
                    alignment,
                    options,
                )))
            })
            .collect();
        rows.push(TableRow::new(cells, margin_left.clone(), ""));
    }

    FormattedTable {
        table: Table::new(rows),
        margin_left,
    }
}

fn format_weak(table: &Table, options: &Options) -> FormattedTable {
    if let Some(formatted) = format_degenerate(table) {
        return formatted;
    }
    let delimiter = table.delimiter_row();
    let margin_left = table.rows()[0].margin_left().to_string();

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = if delimiter.is_some() && i == 1 {
                row.cells()
                    .iter()
                    .map(|cell| {
                        let alignment = cell.alignment().unwrap_or(Alignment::None);
                        TableCell::delimiter(alignment, options.min_delimiter_width)
                    })
                    .collect()
            } else {
                row.cells()
                    .iter()
                    .map(|cell| TableCell::new(pad_text(cell.content())))
                    .collect()
            };
            TableRow::new(cells, margin_left.clone(), "")
        })
        .collect();

    FormattedTable {
        table: Table::new(rows),
        margin_left,
    }
}

/// テキストを指定幅に揃える
///
/// テキストの方が広ければそのまま返す。`Alignment::None` は左揃えとして扱う
pub fn align_text(text: &str, width: usize, alignment: Alignment, options: &Options) -> String {
    let text_width = compute_text_width(text, &options.text_width_options);
    if text_width >= width {
        return text.to_string();
    }
    let space = width - text_width;
    match alignment {
        Alignment::None | Alignment::Left => format!("{}{}", text, " ".repeat(space)),
        Alignment::Right => format!("{}{}", " ".repeat(space), text),
        Alignment::Center => format!(
            "{}{}{}",
            " ".repeat(space / 2),
            text,
            " ".repeat(space - space / 2)
        ),
    }
}

/// 前後に空白を一つずつ付ける
pub fn pad_text(text: &str) -> String {
    format!(" {} ", text)
}
