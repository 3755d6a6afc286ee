//! 列アライメント

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 列のアライメント
///
/// `None` はデフォルトアライメントに従うことを表す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Alignment {
    None,
    Left,
    Right,
    Center,
}

/// デフォルトの列アライメント（`None` を含まない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DefaultAlignment {
    #[default]
    Left,
    Right,
    Center,
}

/// ヘッダーセルのアライメント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HeaderAlignment {
    /// 列のアライメントに従う
    #[default]
    Follow,
    Left,
    Right,
    Center,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::None => "none",
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }

    /// `None` をデフォルトアライメントで置き換える
    pub fn or_default(self, default: DefaultAlignment) -> Alignment {
        match self {
            Alignment::None => default.into(),
            other => other,
        }
    }
}

impl HeaderAlignment {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderAlignment::Follow => "follow",
            HeaderAlignment::Left => "left",
            HeaderAlignment::Right => "right",
            HeaderAlignment::Center => "center",
        }
    }

    /// ヘッダーセルに適用するアライメントを決定
    pub fn resolve(self, column: Alignment, default: DefaultAlignment) -> Alignment {
        match self {
            HeaderAlignment::Follow => column.or_default(default),
            HeaderAlignment::Left => Alignment::Left,
            HeaderAlignment::Right => Alignment::Right,
            HeaderAlignment::Center => Alignment::Center,
        }
    }
}

impl From<DefaultAlignment> for Alignment {
    fn from(alignment: DefaultAlignment) -> Self {
        match alignment {
            DefaultAlignment::Left => Alignment::Left,
            DefaultAlignment::Right => Alignment::Right,
            DefaultAlignment::Center => Alignment::Center,
        }
    }
}

impl FromStr for Alignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Alignment::None),
            "left" => Ok(Alignment::Left),
            "right" => Ok(Alignment::Right),
            "center" => Ok(Alignment::Center),
            other => Err(TableError::UnknownAlignment {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for DefaultAlignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Alignment>()? {
            Alignment::Left => Ok(DefaultAlignment::Left),
            Alignment::Right => Ok(DefaultAlignment::Right),
            Alignment::Center => Ok(DefaultAlignment::Center),
            Alignment::None => Err(TableError::UnknownAlignment {
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for HeaderAlignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "follow" {
            return Ok(HeaderAlignment::Follow);
        }
        match s.parse::<Alignment>()? {
            Alignment::Left => Ok(HeaderAlignment::Left),
            Alignment::Right => Ok(HeaderAlignment::Right),
            Alignment::Center => Ok(HeaderAlignment::Center),
            Alignment::None => Err(TableError::UnknownAlignment {
                value: s.to_string(),
            }),
        }
    }
}

// serde は try_from/into 経由で文字列表現を使う
macro_rules! string_conversions {
    ($ty:ty) => {
        impl TryFrom<String> for $ty {
            type Error = TableError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_conversions!(Alignment);
string_conversions!(DefaultAlignment);
string_conversions!(HeaderAlignment);

impl DefaultAlignment {
    pub fn as_str(self) -> &'static str {
        Alignment::from(self).as_str()
    }
}

/// 区切りセルのテキストを生成
///
/// `width` はハイフン部分の長さ。両端の1文字はコロンまたは空白
pub fn delimiter_text(alignment: Alignment, width: usize) -> String {
    let bar = "-".repeat(width);
    match alignment {
        Alignment::None => format!(" {} ", bar),
        Alignment::Left => format!(":{} ", bar),
        Alignment::Right => format!(" {}:", bar),
        Alignment::Center => format!(":{}:", bar),
    }
}
