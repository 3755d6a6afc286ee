//! 行単位の最短編集スクリプト
//!
//! Myers の O((N+M)D) アルゴリズムで、テーブル更新時に変更のない行を
//! 書き換えずに済ませる

use crate::editor::TextEditor;
use crate::error::Result;

/// 編集コマンド
///
/// `row` はスクリプトを先頭から適用している途中の文書上の行番号
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert { row: usize, line: String },
    Delete { row: usize },
}

/// 各対角線上で到達した最遠点
#[derive(Debug, Clone, Copy, Default)]
struct Endpoint {
    /// `from` 側の位置
    i: isize,
    /// 経路の末尾コマンド（`trail` のインデックス）
    head: Option<usize>,
}

/// `from` を `to` に変える最短の編集スクリプト
///
/// `limit` を指定すると、その距離以内のスクリプトが存在しなければ `None` を返す
pub fn shortest_edit_script<A, B>(
    from: &[A],
    to: &[B],
    limit: Option<usize>,
) -> Option<Vec<EditCommand>>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let n = from.len() as isize;
    let m = to.len() as isize;
    let maxd = limit.map_or(n + m, |limit| (limit as isize).min(n + m));
    let offset = maxd.min(n);
    let mut mem = vec![Endpoint::default(); (maxd.min(n) + maxd.min(m) + 1) as usize];
    // 経路は後ろ向きの連結リストとして共有する
    let mut trail: Vec<(EditCommand, Option<usize>)> = Vec::new();

    let at = |mem: &[Endpoint], k: isize| -> Endpoint {
        usize::try_from(offset + k)
            .ok()
            .and_then(|index| mem.get(index).copied())
            .unwrap_or_default()
    };

    for d in 0..=maxd {
        let min_k = if d <= n { -d } else { d - 2 * n };
        let max_k = if d <= m { d } else { -d + 2 * m };
        let mut k = min_k;
        while k <= max_k {
            let mut endpoint = if d == 0 {
                Endpoint::default()
            } else {
                let delete = k == -d || (k != d && at(&mem, k + 1).i + 1 > at(&mem, k - 1).i);
                if delete {
                    let prev = at(&mem, k + 1);
                    let i = prev.i + 1;
                    trail.push((EditCommand::Delete { row: (i + k) as usize }, prev.head));
                    Endpoint {
                        i,
                        head: Some(trail.len() - 1),
                    }
                } else {
                    let prev = at(&mem, k - 1);
                    let row = (prev.i + k - 1) as usize;
                    let line = to[row].as_ref().to_string();
                    trail.push((EditCommand::Insert { row, line }, prev.head));
                    Endpoint {
                        i: prev.i,
                        head: Some(trail.len() - 1),
                    }
                }
            };

            // 一致する行はそのまま進める
            while endpoint.i < n
                && endpoint.i + k < m
                && from[endpoint.i as usize].as_ref() == to[(endpoint.i + k) as usize].as_ref()
            {
                endpoint.i += 1;
            }

            if k == m - n && endpoint.i == n {
                return Some(collect_script(&trail, endpoint.head));
            }
            if let Ok(index) = usize::try_from(offset + k) {
                if let Some(slot) = mem.get_mut(index) {
                    *slot = endpoint;
                }
            }
            k += 2;
        }
    }
    None
}

fn collect_script(trail: &[(EditCommand, Option<usize>)], head: Option<usize>) -> Vec<EditCommand> {
    let mut script = Vec::new();
    let mut cursor = head;
    while let Some(index) = cursor {
        let (command, next) = &trail[index];
        script.push(command.clone());
        cursor = *next;
    }
    script.reverse();
    script
}

/// 編集スクリプトをテキストエディタに適用する
///
/// 各コマンドの行番号に `row_offset` を足す
pub fn apply_edit_script<E: TextEditor>(
    editor: &mut E,
    script: &[EditCommand],
    row_offset: usize,
) -> Result<()> {
    for command in script {
        match command {
            EditCommand::Insert { row, line } => editor.insert_line(row + row_offset, line)?,
            EditCommand::Delete { row } => editor.delete_line(row + row_offset)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::MemoryEditor;

    fn apply(from: &[&str], script: &[EditCommand]) -> Vec<String> {
        let mut lines: Vec<String> = from.iter().map(|s| s.to_string()).collect();
        for command in script {
            match command {
                EditCommand::Insert { row, line } => lines.insert(*row, line.clone()),
                EditCommand::Delete { row } => {
                    lines.remove(*row);
                }
            }
        }
        lines
    }

    #[test]
    fn test_identical_lines() {
        let lines = ["a", "b", "c"];
        assert_eq!(shortest_edit_script(&lines, &lines, None), Some(vec![]));
        assert_eq!(shortest_edit_script(&lines, &lines, Some(0)), Some(vec![]));
    }

    #[test]
    fn test_replace_single_line() {
        let script = shortest_edit_script(&["a"], &["b"], None).unwrap();
        assert_eq!(
            script,
            vec![
                EditCommand::Delete { row: 0 },
                EditCommand::Insert {
                    row: 0,
                    line: "b".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_minimal_script() {
        let from = ["a", "b", "c", "d"];
        let to = ["a", "c", "d", "e"];
        let script = shortest_edit_script(&from, &to, None).unwrap();
        assert_eq!(script.len(), 2);
        assert_eq!(apply(&from, &script), to);
    }

    #[test]
    fn test_empty_sides() {
        let to = ["x", "y"];
        let empty: [&str; 0] = [];
        let script = shortest_edit_script(&empty, &to, None).unwrap();
        assert_eq!(apply(&empty, &script), to);

        let script = shortest_edit_script(&to, &empty, None).unwrap();
        assert_eq!(script.len(), 2);
        assert!(apply(&to, &script).is_empty());
    }

    #[test]
    fn test_limit() {
        assert_eq!(shortest_edit_script(&["a"], &["b"], Some(1)), None);
        assert!(shortest_edit_script(&["a"], &["b"], Some(2)).is_some());
        let from = ["1", "2", "3", "4"];
        let to = ["5", "6", "7", "8"];
        assert_eq!(shortest_edit_script(&from, &to, Some(3)), None);
    }

    #[test]
    fn test_apply_with_offset() {
        let mut editor = MemoryEditor::from_text("head\na\nb\ntail");
        let script = shortest_edit_script(&["a", "b"], &["a", "c"], None).unwrap();
        apply_edit_script(&mut editor, &script, 1).unwrap();
        assert_eq!(editor.lines(), ["head", "a", "c", "tail"]);
    }
}
