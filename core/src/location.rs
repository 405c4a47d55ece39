use crate::{clamp_coord, Coordinate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// 地點規模，篩選與隨機選點的標準判別值
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum Size {
    #[default]
    #[serde(rename = "S")]
    #[strum(to_string = "小型")]
    Small,
    #[serde(rename = "L")]
    #[strum(to_string = "大型")]
    Large,
}

impl Size {
    /// 標記上顯示的單字母代號
    pub fn letter(&self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Large => "L",
        }
    }
}

/// 地圖上的具名地點
///
/// `size` 為標準判別值；`buildings` 與 `kind` 是舊版資料帶的
/// 描述性欄位，保留供顯示，不參與篩選。
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Location {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildings: Option<u32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f32, y: f32, size: Size) -> Self {
        Self {
            name: name.into(),
            x: clamp_coord(x),
            y: clamp_coord(y),
            size,
            buildings: None,
            kind: None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            x: self.x,
            y: self.y,
        }
    }
}
