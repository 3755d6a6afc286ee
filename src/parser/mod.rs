//! テーブル行パーサー
//!
//! 一行ずつ独立に解析する。エスケープされたパイプとコードスパン内のパイプは
//! セルの区切りとして扱わない

use crate::error::Result;
use crate::options::Options;
use crate::table::{Table, TableCell, TableRow};
use regex::Regex;
use std::collections::BTreeSet;

/// 行をパイプで分割する
///
/// パイプが p 個あれば p+1 個の区間を返す。不正なコードスパンは文字として扱い、
/// エラーにはならない。
///
/// 末尾が単独のバックスラッシュで終わるセル（`|a\` の `a\`）は、書き戻すと
/// 閉じパイプをエスケープするため、読み直すと一つのセル `a\|` になる
pub fn split_cells(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut cells = Vec::new();
    let mut buf = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        match chars[pos] {
            '`' => {
                let open = backtick_run(&chars, pos);
                match find_closing_run(&chars, pos + open, open) {
                    Some(end) => {
                        buf.extend(&chars[pos..end]);
                        pos = end;
                    }
                    None => {
                        // 閉じられないバッククォートは1文字だけ進める
                        buf.push('`');
                        pos += 1;
                    }
                }
            }
            '\\' => {
                buf.push('\\');
                if let Some(&next) = chars.get(pos + 1) {
                    buf.push(next);
                    pos += 2;
                } else {
                    pos += 1;
                }
            }
            '|' => {
                cells.push(std::mem::take(&mut buf));
                pos += 1;
            }
            ch => {
                buf.push(ch);
                pos += 1;
            }
        }
    }
    cells.push(buf);
    cells
}

/// `pos` から始まるバッククォートの連続長
fn backtick_run(chars: &[char], pos: usize) -> usize {
    chars[pos..].iter().take_while(|&&ch| ch == '`').count()
}

/// 長さ `len` のバッククォート列で閉じる位置（閉じ列の直後）を探す
fn find_closing_run(chars: &[char], mut pos: usize, len: usize) -> Option<usize> {
    while pos < chars.len() {
        if chars[pos] == '`' {
            let run = backtick_run(chars, pos);
            pos += run;
            if run == len {
                return Some(pos);
            }
        } else {
            pos += 1;
        }
    }
    None
}

/// 左マージン文字集合から作るパターン群
#[derive(Debug, Clone)]
pub struct MarginPattern {
    /// 行全体がマージン
    margin: Regex,
    /// テーブル行の判定
    table_row: Regex,
    /// 行頭のマージン部分
    prefix: Regex,
}

impl MarginPattern {
    /// マージン文字集合からパターンを生成
    ///
    /// パイプ・バックスラッシュ・バッククォートは無視する
    pub fn new(chars: &BTreeSet<char>) -> Result<Self> {
        let class = margin_class(chars);
        Ok(Self {
            margin: Regex::new(&format!("^{}$", class))?,
            table_row: Regex::new(&format!(r"^{}\|", class))?,
            prefix: Regex::new(&format!("^{}", class))?,
        })
    }

    /// テキスト全体がマージンとして扱えるか
    pub fn is_margin(&self, text: &str) -> bool {
        self.margin.is_match(text)
    }

    /// テーブル行か（マージンの直後にパイプがある）
    pub fn is_table_row(&self, line: &str) -> bool {
        self.table_row.is_match(line)
    }

    /// 行頭のマージン部分の文字数
    pub fn leading_margin_len(&self, line: &str) -> usize {
        self.prefix
            .find(line)
            .map(|m| m.as_str().chars().count())
            .unwrap_or(0)
    }
}

fn margin_class(chars: &BTreeSet<char>) -> String {
    let extra: String = chars
        .iter()
        .filter(|&&ch| ch != '|' && ch != '\\' && ch != '`')
        .map(|ch| regex::escape(&ch.to_string()))
        .collect();
    format!(r"[\s{}]*", extra)
}

/// 一行をテーブル行として読む
pub fn read_row(text: &str, pattern: &MarginPattern) -> TableRow {
    let mut segments = split_cells(text);

    let margin_left = if segments
        .first()
        .is_some_and(|first| pattern.is_margin(first))
    {
        segments.remove(0)
    } else {
        String::new()
    };

    let margin_right = if segments.len() > 1
        && segments
            .last()
            .is_some_and(|last| last.chars().all(char::is_whitespace))
    {
        segments.pop().unwrap_or_default()
    } else {
        String::new()
    };

    let cells = segments.into_iter().map(TableCell::new).collect();
    TableRow::new(cells, margin_left, margin_right)
}

/// 複数行をテーブルとして読む
pub fn read_table<S: AsRef<str>>(lines: &[S], options: &Options) -> Result<Table> {
    let pattern = options.margin_pattern()?;
    Ok(read_table_with(lines, &pattern))
}

/// 生成済みのマージンパターンでテーブルを読む
pub fn read_table_with<S: AsRef<str>>(lines: &[S], pattern: &MarginPattern) -> Table {
    Table::new(
        lines
            .iter()
            .map(|line| read_row(line.as_ref(), pattern))
            .collect(),
    )
}
