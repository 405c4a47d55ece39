// 地圖核心錯誤型別，攜帶 function name 與 context
use crate::MapID;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 地圖核心錯誤型別
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("`{func}`: 索引 {index} 超出範圍（共 {len} 筆）")]
    IndexOutOfBounds {
        func: &'static str,
        index: usize,
        len: usize,
    },

    #[error("`{func}`: 找不到地圖 {map_id}")]
    MapNotFound { func: &'static str, map_id: MapID },

    #[error("沒有符合規模篩選的地點")]
    NoMatchingLocation,

    #[error("航線範圍內沒有符合的地點")]
    NoLocationNearPath,

    #[error("`{func}`: 序列化失敗: {detail}")]
    Serialize { func: &'static str, detail: String },
}
