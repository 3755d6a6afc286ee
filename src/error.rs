//! エラーハンドリングシステム
//!
//! テーブル編集エンジン全体で使用される統一されたエラー型を定義
//! 「見つからない」系の状況はエラーにせず `None` / 何もしない で表現する

use thiserror::Error;

/// クレート全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum TableError {
    /// 行を一つも持たないテーブルを補完しようとした（呼び出し側の前提条件違反）
    #[error("Empty table")]
    EmptyTable,

    /// 未知のフォーマット種別
    #[error("Unknown format type: {value}")]
    UnknownFormatType { value: String },

    /// 未知のアライメント
    #[error("Unknown alignment: {value}")]
    UnknownAlignment { value: String },

    /// テキストエディタ操作エラー
    #[error("Text editor operation failed")]
    Editor(#[from] EditorError),

    /// 設定エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// マージン文字から生成したパターンが不正
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// テキストエディタ（ホスト側アダプタ）固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Row out of range: {row} (last row: {last_row})")]
    RowOutOfRange { row: usize, last_row: usize },

    #[error("Invalid line range: {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Line must not contain a line break: {line:?}")]
    LineBreak { line: String },

    #[error("Host editor failure: {message}")]
    Host { message: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration file: {path}")]
    InvalidFile { path: String },

    #[error("Malformed configuration: {message}")]
    Malformed { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TableError>;

impl TableError {
    /// 設定値・プログラミングエラーに起因するか
    ///
    /// これらはコマンド一回分を失敗させるが、編集セッション自体は継続できる
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TableError::UnknownFormatType { .. }
                | TableError::UnknownAlignment { .. }
                | TableError::Config(_)
                | TableError::InvalidPattern(_)
        )
    }
}

// std::io::Error から TableError への変換
impl From<std::io::Error> for TableError {
    fn from(error: std::io::Error) -> Self {
        TableError::Config(ConfigError::Io {
            message: error.to_string(),
        })
    }
}

// JSON 設定の読み込みエラー
impl From<serde_json::Error> for TableError {
    fn from(error: serde_json::Error) -> Self {
        TableError::Config(ConfigError::Malformed {
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_error_conversion() {
        let error: TableError = EditorError::RowOutOfRange { row: 5, last_row: 2 }.into();
        match error {
            TableError::Editor(EditorError::RowOutOfRange { row, last_row }) => {
                assert_eq!(row, 5);
                assert_eq!(last_row, 2);
            }
            _ => panic!("Expected RowOutOfRange error"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: TableError = io_error.into();
        assert!(matches!(error, TableError::Config(ConfigError::Io { .. })));
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_configuration_error_classification() {
        assert!(TableError::UnknownFormatType { value: "strong".into() }.is_configuration_error());
        assert!(!TableError::EmptyTable.is_configuration_error());
        assert!(!TableError::Editor(EditorError::Host { message: "x".into() })
            .is_configuration_error());
    }
}
