//! エディタモジュール
//!
//! ホスト側テキストエディタとの境界と、その上で動くテーブル編集コマンド

pub mod memory;
pub mod smart_cursor;
pub mod table_editor;
pub mod text_editor;

// 公開API
pub use memory::MemoryEditor;
pub use smart_cursor::SmartCursor;
pub use table_editor::TableEditor;
pub use text_editor::TextEditor;
