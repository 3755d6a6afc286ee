//! mdtable - Markdown table editing engine
//!
//! パイプ区切りテーブルの解析・整形・構造編集と、最小限の行更新による書き戻し

// コアモジュール
pub mod error;
pub mod geometry;
pub mod logging;
pub mod options;

// データ層
pub mod parser;
pub mod table;

// 変換層
pub mod diff;
pub mod format;

// 編集層
pub mod editor;

// 公開API
pub use diff::{apply_edit_script, shortest_edit_script, EditCommand};
pub use editor::{MemoryEditor, SmartCursor, TableEditor, TextEditor};
pub use error::{ConfigError, EditorError, Result, TableError};
pub use format::{
    complete_table, compute_text_width, format_table, CompletedTable, FormatType, FormattedTable,
    TextWidthOptions,
};
pub use geometry::{Focus, Point, Range};
pub use options::Options;
pub use parser::{read_row, read_table, split_cells, MarginPattern};
pub use table::{
    Alignment, DefaultAlignment, HeaderAlignment, Table, TableCell, TableRow,
};
