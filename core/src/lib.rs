use serde::{Deserialize, Serialize};

mod error;
mod flight_path;
mod gesture;
mod geometry;
mod location;
mod map;
mod picker;

pub use error::*;
pub use flight_path::*;
pub use gesture::*;
pub use geometry::*;
pub use location::*;
pub use map::*;
pub use picker::*;

pub type MapID = String;
pub type LocationIndex = usize;

/// 地圖座標上限（x、y 皆以 0..=1000 正規化，與圖片實際像素無關）
pub const COORD_MAX: f32 = 1000.0;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
