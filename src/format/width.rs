//! 表示幅の計算
//!
//! East Asian Width に基づいて文字ごとの幅（1 または 2）を合計する

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;
use unicode_width::UnicodeWidthChar;

/// 表示幅計算の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextWidthOptions {
    /// 計算前に NFC 正規化する
    pub normalize: bool,
    /// 常に幅2として扱う文字
    pub wide_chars: BTreeSet<char>,
    /// 常に幅1として扱う文字
    pub narrow_chars: BTreeSet<char>,
    /// 曖昧幅文字を幅2として扱う
    pub ambiguous_as_wide: bool,
}

impl Default for TextWidthOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            wide_chars: BTreeSet::new(),
            narrow_chars: BTreeSet::new(),
            ambiguous_as_wide: false,
        }
    }
}

impl TextWidthOptions {
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_wide_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.wide_chars = chars.into_iter().collect();
        self
    }

    pub fn with_narrow_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.narrow_chars = chars.into_iter().collect();
        self
    }

    pub fn with_ambiguous_as_wide(mut self, ambiguous_as_wide: bool) -> Self {
        self.ambiguous_as_wide = ambiguous_as_wide;
        self
    }

    fn char_width(&self, ch: char) -> usize {
        if self.wide_chars.contains(&ch) {
            return 2;
        }
        if self.narrow_chars.contains(&ch) {
            return 1;
        }
        if ch.width() == Some(2) {
            // Fullwidth / Wide
            2
        } else if ch.width_cjk() == Some(2) {
            // Ambiguous
            if self.ambiguous_as_wide {
                2
            } else {
                1
            }
        } else {
            1
        }
    }
}

/// テキストの表示幅
pub fn compute_text_width(text: &str, options: &TextWidthOptions) -> usize {
    if options.normalize {
        text.nfc().map(|ch| options.char_width(ch)).sum()
    } else {
        text.chars().map(|ch| options.char_width(ch)).sum()
    }
}
