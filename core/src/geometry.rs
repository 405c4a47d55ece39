//! 本檔案收錄座標幾何運算：正規化座標夾限、螢幕座標轉換、
//! 點到線段距離（閉形式投影公式）。
//! 請維護演算法的正確性與可重現性。

use crate::{Coordinate, COORD_MAX};

/// 將單一座標值夾限在 0..=1000 範圍內
pub fn clamp_coord(value: f32) -> f32 {
    value.clamp(0.0, COORD_MAX)
}

/// 點到線段的最短歐氏距離
///
/// 將 `point - start` 投影到線段方向向量上，投影參數夾限在 [0, 1]
/// （限制在線段內，而非無限延伸的直線）。
/// 線段長度為零時，走「起點之前」分支，即回傳到 `start` 的距離。
/// 永遠回傳有限非負數，不會失敗。
pub fn point_to_segment_distance(point: Coordinate, start: Coordinate, end: Coordinate) -> f32 {
    let a = point.x - start.x;
    let b = point.y - start.y;
    let c = end.x - start.x;
    let d = end.y - start.y;

    let dot = a * c + b * d;
    let len_sq = c * c + d * d;
    let param = if len_sq != 0.0 { dot / len_sq } else { -1.0 };

    let (proj_x, proj_y) = if param < 0.0 {
        (start.x, start.y)
    } else if param > 1.0 {
        (end.x, end.y)
    } else {
        (start.x + param * c, start.y + param * d)
    };

    let dx = point.x - proj_x;
    let dy = point.y - proj_y;
    (dx * dx + dy * dy).sqrt()
}

/// 螢幕座標（像素）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 兩點間歐氏距離，用於點擊與拖曳的判別
    pub fn distance(self, other: ScreenPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// 地圖圖片目前渲染出的矩形
///
/// 所有地圖座標皆正規化為 0..=1000，轉換時必須使用當下 frame 的
/// 矩形，不可快取（視窗大小隨時會變）。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// 版面是否已就緒；尚未就緒時座標轉換應直接略過該事件
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// 將地圖座標轉換為螢幕座標
    pub fn map_to_screen(&self, coord: Coordinate) -> ScreenPos {
        ScreenPos {
            x: self.left + coord.x / COORD_MAX * self.width,
            y: self.top + coord.y / COORD_MAX * self.height,
        }
    }

    /// 將螢幕座標轉換為地圖座標，並夾限在 0..=1000
    pub fn screen_to_map(&self, pos: ScreenPos) -> Coordinate {
        Coordinate {
            x: clamp_coord((pos.x - self.left) / self.width * COORD_MAX),
            y: clamp_coord((pos.y - self.top) / self.height * COORD_MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_non_negative() {
        let cases = [
            (
                Coordinate::new(0.0, 0.0),
                Coordinate::new(10.0, 0.0),
                Coordinate::new(20.0, 0.0),
            ),
            (
                Coordinate::new(-5.0, 3.0),
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 100.0),
            ),
            (
                Coordinate::new(500.0, 500.0),
                Coordinate::new(0.0, 0.0),
                Coordinate::new(999.0, 0.0),
            ),
        ];
        for (p, a, b) in cases {
            assert!(point_to_segment_distance(p, a, b) >= 0.0);
        }
    }

    #[test]
    fn test_distance_degenerate_segment() {
        // 零長度線段：距離等於到起點的歐氏距離
        let p = Coordinate::new(3.0, 4.0);
        let a = Coordinate::new(0.0, 0.0);
        assert_eq!(point_to_segment_distance(p, a, a), 5.0);
    }

    #[test]
    fn test_distance_point_on_segment_is_zero() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(100.0, 100.0);
        // 兩端點與中點
        for p in [a, b, Coordinate::new(50.0, 50.0)] {
            assert!(point_to_segment_distance(p, a, b) < 1e-4);
        }
    }

    #[test]
    fn test_distance_perpendicular() {
        // 線段 (0,0)-(10,0)，點 (5,7) 的垂直距離為 7
        let d = point_to_segment_distance(
            Coordinate::new(5.0, 7.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 0.0),
        );
        assert!((d - 7.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_clamped_to_endpoint() {
        // 投影落在線段外側時，夾限到端點
        let d = point_to_segment_distance(
            Coordinate::new(13.0, 4.0),
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_rect_round_trip() {
        let rect = ScreenRect::new(100.0, 50.0, 800.0, 800.0);
        let coord = Coordinate::new(250.0, 750.0);
        let screen = rect.map_to_screen(coord);
        assert_eq!(screen, ScreenPos::new(300.0, 650.0));
        let back = rect.screen_to_map(screen);
        assert!((back.x - coord.x).abs() < 1e-3);
        assert!((back.y - coord.y).abs() < 1e-3);
    }

    #[test]
    fn test_screen_to_map_clamps() {
        let rect = ScreenRect::new(0.0, 0.0, 1000.0, 1000.0);
        let coord = rect.screen_to_map(ScreenPos::new(-50.0, 1200.0));
        assert_eq!(coord, Coordinate::new(0.0, 1000.0));
    }

    #[test]
    fn test_unready_rect() {
        assert!(!ScreenRect::default().is_ready());
        assert!(ScreenRect::new(0.0, 0.0, 10.0, 10.0).is_ready());
    }
}
