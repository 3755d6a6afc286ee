//! テーブルセル

use super::alignment::{delimiter_text, Alignment};

/// パイプで区切られた一区間
///
/// 生テキスト・トリム済み内容・左右パディング幅を保持する不変値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// 生テキスト
    raw_content: String,
    /// 前後の空白を除いた内容
    content: String,
    /// 左パディング幅（文字数）
    padding_left: usize,
    /// 右パディング幅（文字数）
    padding_right: usize,
}

impl TableCell {
    pub fn new(raw_content: impl Into<String>) -> Self {
        let raw_content = raw_content.into();
        let content = raw_content.trim().to_string();
        let raw_len = raw_content.chars().count();
        let content_len = content.chars().count();
        // 空白のみのセルは左パディング1として扱う
        let padding_left = if content.is_empty() {
            if raw_content.is_empty() {
                0
            } else {
                1
            }
        } else {
            raw_len - raw_content.trim_start().chars().count()
        };
        let padding_right = raw_len - content_len - padding_left;

        Self {
            raw_content,
            content,
            padding_left,
            padding_right,
        }
    }

    /// 空セル
    pub fn empty() -> Self {
        Self::new("")
    }

    /// 区切りセル
    pub fn delimiter(alignment: Alignment, width: usize) -> Self {
        Self::new(delimiter_text(alignment, width))
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn padding_left(&self) -> usize {
        self.padding_left
    }

    pub fn padding_right(&self) -> usize {
        self.padding_right
    }

    /// 生テキストの文字数
    pub fn raw_len(&self) -> usize {
        self.raw_content.chars().count()
    }

    /// 内容の文字数
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// テキスト表現（生テキストそのもの）
    pub fn to_text(&self) -> &str {
        &self.raw_content
    }

    /// 区切りセルか（`:?-+:?` の前後に空白のみ）
    pub fn is_delimiter(&self) -> bool {
        let body = self.content.strip_prefix(':').unwrap_or(&self.content);
        let body = body.strip_suffix(':').unwrap_or(body);
        !body.is_empty() && body.chars().all(|ch| ch == '-')
    }

    /// 区切りセルが表すアライメント（区切りセルでなければ `None`）
    pub fn alignment(&self) -> Option<Alignment> {
        if !self.is_delimiter() {
            return None;
        }
        let leading = self.content.starts_with(':');
        let trailing = self.content.ends_with(':');
        Some(match (leading, trailing) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        })
    }

    /// 生テキスト上のオフセットを内容上のオフセットに変換
    pub fn compute_content_offset(&self, raw_offset: usize) -> usize {
        if self.content.is_empty() || raw_offset < self.padding_left {
            return 0;
        }
        let content_len = self.content_len();
        if raw_offset < self.padding_left + content_len {
            raw_offset - self.padding_left
        } else {
            content_len
        }
    }

    /// 内容上のオフセットを生テキスト上のオフセットに変換
    pub fn compute_raw_offset(&self, content_offset: usize) -> usize {
        content_offset + self.padding_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddings() {
        let cell = TableCell::new("  foo ");
        assert_eq!(cell.content(), "foo");
        assert_eq!(cell.padding_left(), 2);
        assert_eq!(cell.padding_right(), 1);

        let blank = TableCell::new("   ");
        assert_eq!(blank.content(), "");
        assert_eq!(blank.padding_left(), 1);
        assert_eq!(blank.padding_right(), 2);

        let empty = TableCell::empty();
        assert_eq!(empty.padding_left(), 0);
        assert_eq!(empty.padding_right(), 0);
    }

    #[test]
    fn test_paddings_count_chars() {
        let cell = TableCell::new(" 日本語  ");
        assert_eq!(cell.padding_left(), 1);
        assert_eq!(cell.padding_right(), 2);
        assert_eq!(cell.content_len(), 3);
    }

    #[test]
    fn test_delimiter_detection() {
        assert!(TableCell::new(" --- ").is_delimiter());
        assert!(TableCell::new(":-").is_delimiter());
        assert!(TableCell::new(" -: ").is_delimiter());
        assert!(!TableCell::new(" : ").is_delimiter());
        assert!(!TableCell::new("::").is_delimiter());
        assert!(!TableCell::new(" -- - ").is_delimiter());
        assert!(!TableCell::new("").is_delimiter());
        assert!(!TableCell::new("a").is_delimiter());
    }

    #[test]
    fn test_alignment_derivation() {
        assert_eq!(TableCell::new(":---").alignment(), Some(Alignment::Left));
        assert_eq!(TableCell::new("---:").alignment(), Some(Alignment::Right));
        assert_eq!(TableCell::new(":---:").alignment(), Some(Alignment::Center));
        assert_eq!(TableCell::new("---").alignment(), Some(Alignment::None));
        assert_eq!(TableCell::new("foo").alignment(), None);
    }

    #[test]
    fn test_offset_conversion() {
        let cell = TableCell::new("  foo ");
        assert_eq!(cell.compute_content_offset(0), 0);
        assert_eq!(cell.compute_content_offset(3), 1);
        assert_eq!(cell.compute_content_offset(6), 3);
        assert_eq!(cell.compute_raw_offset(1), 3);

        // 内容が空なら常に0
        assert_eq!(TableCell::new("   ").compute_content_offset(2), 0);
    }
}
