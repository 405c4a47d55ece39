use crate::{clamp_coord, Error, Location, LocationIndex, MapID, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 單一地圖的資料：名稱、底圖與地點列表
///
/// 地點順序即插入順序，除了提供穩定索引（編輯、刪除、拖曳的目標）
/// 之外沒有其他語意。
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MapData {
    pub name: String,
    pub image: String,
    pub locations: Vec<Location>,
}

impl MapData {
    /// 新增地點，回傳其索引（即附加前的長度）
    pub fn add_location(&mut self, location: Location) -> LocationIndex {
        let index = self.locations.len();
        self.locations.push(location);
        index
    }

    /// 整筆取代指定索引的地點，索引不變
    pub fn edit_location(&mut self, index: LocationIndex, location: Location) -> Result<()> {
        let len = self.locations.len();
        let slot = self.locations.get_mut(index).ok_or(Error::IndexOutOfBounds {
            func: "edit_location",
            index,
            len,
        })?;
        *slot = location;
        Ok(())
    }

    /// 刪除指定索引的地點，之後的索引全部往前移一位
    ///
    /// 外部持有的選取或拖曳索引由呼叫端自行作廢，store 不追蹤。
    pub fn delete_location(&mut self, index: LocationIndex) -> Result<Location> {
        if index >= self.locations.len() {
            return Err(Error::IndexOutOfBounds {
                func: "delete_location",
                index,
                len: self.locations.len(),
            });
        }
        Ok(self.locations.remove(index))
    }

    /// 只更新座標，拖曳的每個 move tick 都會呼叫
    pub fn move_location(&mut self, index: LocationIndex, x: f32, y: f32) -> Result<()> {
        let len = self.locations.len();
        let location = self.locations.get_mut(index).ok_or(Error::IndexOutOfBounds {
            func: "move_location",
            index,
            len,
        })?;
        location.x = clamp_coord(x);
        location.y = clamp_coord(y);
        Ok(())
    }
}

/// 地圖集合，key 為地圖 id，載入後固定
// BTreeMap 讓地圖下拉選單的順序穩定
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(transparent)]
pub struct MapDataCollection {
    maps: BTreeMap<MapID, MapData>,
}

impl MapDataCollection {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|err| Error::Serialize {
            func: "from_json",
            detail: err.to_string(),
        })
    }

    /// 匯出整個集合為 JSON 文字，交由 host 決定寫檔或剪貼簿
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.maps).map_err(|err| Error::Serialize {
            func: "to_json_pretty",
            detail: err.to_string(),
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &MapID> {
        self.maps.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&MapData> {
        self.maps.get(id).ok_or_else(|| Error::MapNotFound {
            func: "get",
            map_id: id.to_string(),
        })
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut MapData> {
        self.maps.get_mut(id).ok_or_else(|| Error::MapNotFound {
            func: "get_mut",
            map_id: id.to_string(),
        })
    }

    /// 取一個存在的地圖 id，偏好傳入者（偏好值無效時退回第一個）
    pub fn resolve_id(&self, preferred: &str) -> Option<MapID> {
        if self.maps.contains_key(preferred) {
            Some(preferred.to_string())
        } else {
            self.maps.keys().next().cloned()
        }
    }
}
