//! 跨 session 保存的 UI 偏好設定

use crate::common::{from_toml, to_toml_file};
use crate::constants::DEFAULT_MAX_PATH_DISTANCE;
use map_lib::{MapID, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// 三個跨 session 的偏好值：目前地圖、規模篩選、航線最大距離
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub current_map: MapID,
    pub size_filter: Option<Size>,
    pub max_path_distance: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            current_map: "vikendi".to_string(),
            size_filter: None,
            max_path_distance: DEFAULT_MAX_PATH_DISTANCE,
        }
    }
}

impl Preferences {
    /// 讀取偏好設定；檔案不存在或內容壞掉時退回預設值，不回報錯誤
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        from_toml(&content).unwrap_or_default()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        to_toml_file(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("drop-selector-prefs-{}", name))
    }

    #[test]
    fn test_missing_file_yields_default() {
        let prefs = Preferences::load(temp_path("does-not-exist.toml"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_malformed_file_yields_default() {
        let path = temp_path("malformed.toml");
        fs::write(&path, "current_map = [not toml").unwrap();
        let prefs = Preferences::load(&path);
        assert_eq!(prefs, Preferences::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("round-trip.toml");
        let prefs = Preferences {
            current_map: "rondo".to_string(),
            size_filter: Some(Size::Large),
            max_path_distance: 220.0,
        };
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path), prefs);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        // 缺漏的欄位以預設值補上
        let path = temp_path("partial.toml");
        fs::write(&path, "current_map = \"rondo\"").unwrap();
        let prefs = Preferences::load(&path);
        assert_eq!(prefs.current_map, "rondo");
        assert_eq!(prefs.size_filter, None);
        assert_eq!(prefs.max_path_distance, DEFAULT_MAX_PATH_DISTANCE);
        let _ = fs::remove_file(&path);
    }
}
