//! 編集オプション
//!
//! 全項目が省略可能なフラットな設定。JSON（camelCase）から読み込める

use crate::error::{ConfigError, Result, TableError};
use crate::format::{FormatType, TextWidthOptions};
use crate::parser::MarginPattern;
use crate::table::{DefaultAlignment, HeaderAlignment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 既定の設定ファイル名
const CONFIG_FILE_NAME: &str = "options.json";

/// テーブル編集オプション
///
/// 読み込みは `OptionsRecord` を経由し、列挙値の検証エラーを型付きで返す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OptionsRecord", rename_all = "camelCase")]
pub struct Options {
    /// 空白以外に左マージンとして認める文字
    pub left_margin_chars: BTreeSet<char>,
    /// 整形方式
    pub format_type: FormatType,
    /// 区切りセルのハイフンの最小数
    pub min_delimiter_width: usize,
    /// 区切り行にアライメント指定がない列のアライメント
    pub default_alignment: DefaultAlignment,
    /// ヘッダーセルのアライメント
    pub header_alignment: HeaderAlignment,
    /// スマートカーソル（次の行に移るとき開始列に戻る）
    pub smart_cursor: bool,
    /// 表示幅計算の設定
    pub text_width_options: TextWidthOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            left_margin_chars: BTreeSet::new(),
            format_type: FormatType::Normal,
            min_delimiter_width: 3,
            default_alignment: DefaultAlignment::Left,
            header_alignment: HeaderAlignment::Follow,
            smart_cursor: false,
            text_width_options: TextWidthOptions::default(),
        }
    }
}

/// JSON 上の設定レコード
///
/// 列挙値は文字列のまま受け取り、`Options` への変換時に解析する
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OptionsRecord {
    left_margin_chars: Option<BTreeSet<char>>,
    format_type: Option<String>,
    min_delimiter_width: Option<usize>,
    default_alignment: Option<String>,
    header_alignment: Option<String>,
    smart_cursor: Option<bool>,
    text_width_options: Option<TextWidthOptions>,
}

impl TryFrom<OptionsRecord> for Options {
    type Error = TableError;

    fn try_from(record: OptionsRecord) -> Result<Self> {
        let defaults = Options::default();
        Ok(Self {
            left_margin_chars: record
                .left_margin_chars
                .unwrap_or(defaults.left_margin_chars),
            format_type: parse_or(record.format_type, defaults.format_type)?,
            min_delimiter_width: record
                .min_delimiter_width
                .unwrap_or(defaults.min_delimiter_width),
            default_alignment: parse_or(record.default_alignment, defaults.default_alignment)?,
            header_alignment: parse_or(record.header_alignment, defaults.header_alignment)?,
            smart_cursor: record.smart_cursor.unwrap_or(defaults.smart_cursor),
            text_width_options: record
                .text_width_options
                .unwrap_or(defaults.text_width_options),
        })
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = TableError>,
{
    value.map_or(Ok(default), |value| value.parse())
}

impl Options {
    /// JSON 文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self> {
        let record: OptionsRecord = serde_json::from_str(json)?;
        Self::try_from(record)
    }

    /// JSON ファイルから読み込む
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::InvalidFile {
                path: path.display().to_string(),
            }
            .into());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// ユーザー設定ディレクトリ内の既定の設定ファイル
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdtable").join(CONFIG_FILE_NAME))
    }

    /// 既定の設定ファイルがあれば読み込み、なければデフォルト値を返す
    pub fn load_default() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// 左マージン文字から生成したパターン
    pub fn margin_pattern(&self) -> Result<MarginPattern> {
        MarginPattern::new(&self.left_margin_chars)
    }

    pub fn with_left_margin_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.left_margin_chars = chars.into_iter().collect();
        self
    }

    pub fn with_format_type(mut self, format_type: FormatType) -> Self {
        self.format_type = format_type;
        self
    }

    pub fn with_min_delimiter_width(mut self, width: usize) -> Self {
        self.min_delimiter_width = width;
        self
    }

    pub fn with_default_alignment(mut self, alignment: DefaultAlignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    pub fn with_header_alignment(mut self, alignment: HeaderAlignment) -> Self {
        self.header_alignment = alignment;
        self
    }

    pub fn with_smart_cursor(mut self, smart_cursor: bool) -> Self {
        self.smart_cursor = smart_cursor;
        self
    }

    pub fn with_text_width_options(mut self, options: TextWidthOptions) -> Self {
        self.text_width_options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.min_delimiter_width, 3);
        assert_eq!(options.format_type, FormatType::Normal);
        assert!(!options.smart_cursor);
        assert!(options.text_width_options.normalize);
        assert_eq!(Options::from_json("{}").unwrap(), options);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "leftMarginChars": [">"],
            "formatType": "weak",
            "minDelimiterWidth": 5,
            "defaultAlignment": "center",
            "headerAlignment": "right",
            "smartCursor": true,
            "textWidthOptions": { "ambiguousAsWide": true, "wideChars": ["a"] }
        }"#;
        let options = Options::from_json(json).unwrap();
        assert!(options.left_margin_chars.contains(&'>'));
        assert_eq!(options.format_type, FormatType::Weak);
        assert_eq!(options.min_delimiter_width, 5);
        assert_eq!(options.default_alignment, DefaultAlignment::Center);
        assert_eq!(options.header_alignment, HeaderAlignment::Right);
        assert!(options.smart_cursor);
        assert!(options.text_width_options.ambiguous_as_wide);
        assert!(options.text_width_options.normalize);
        assert!(options.text_width_options.wide_chars.contains(&'a'));
    }

    #[test]
    fn test_unknown_enum_values() {
        let result = Options::from_json(r#"{ "formatType": "strong" }"#);
        assert!(matches!(
            result,
            Err(TableError::UnknownFormatType { value }) if value == "strong"
        ));

        let result = Options::from_json(r#"{ "headerAlignment": "none" }"#);
        assert!(matches!(
            result,
            Err(TableError::UnknownAlignment { value }) if value == "none"
        ));
    }

    #[test]
    fn test_unknown_value_in_valid_json_keeps_type() {
        // 値の位置に関係なく型付きのエラーになる
        let json = "{\n  \"smartCursor\": true,\n  \"defaultAlignment\": \"middle at line 9\"\n}";
        let result = Options::from_json(json);
        assert!(matches!(
            result,
            Err(TableError::UnknownAlignment { value }) if value == "middle at line 9"
        ));

        let result: std::result::Result<Options, _> =
            serde_json::from_str(r#"{ "formatType": "weak" }"#);
        assert_eq!(result.unwrap().format_type, FormatType::Weak);
    }

    #[test]
    fn test_malformed_json() {
        let result = Options::from_json("{ not json");
        assert!(matches!(
            result,
            Err(TableError::Config(ConfigError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "smartCursor": true }}"#).unwrap();
        let options = Options::from_file(file.path()).unwrap();
        assert!(options.smart_cursor);

        let missing = Options::from_file("/nonexistent/mdtable/options.json");
        assert!(matches!(
            missing,
            Err(TableError::Config(ConfigError::InvalidFile { .. }))
        ));
    }

    #[test]
    fn test_builders() {
        let options = Options::default()
            .with_left_margin_chars(['>'])
            .with_min_delimiter_width(1)
            .with_smart_cursor(true);
        assert_eq!(options.min_delimiter_width, 1);
        assert!(options.smart_cursor);
        assert!(options.margin_pattern().unwrap().is_table_row("> | a |"));
    }
}
