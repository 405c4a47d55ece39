use crate::Coordinate;

/// 使用者畫出的兩點航線，用來以距離限制隨機選點
///
/// 點擊在起點與終點之間輪替：沒有起點（或兩點都已設定）時，
/// 這次點擊成為新的起點並清掉終點；只有起點時成為終點。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightPath {
    pub start: Option<Coordinate>,
    pub end: Option<Coordinate>,
}

impl FlightPath {
    /// 處理一次航線點擊
    pub fn toggle_point(&mut self, coord: Coordinate) {
        match (self.start, self.end) {
            (Some(_), None) => self.end = Some(coord),
            _ => {
                self.start = Some(coord);
                self.end = None;
            }
        }
    }

    /// 兩端點都設定好時回傳線段
    pub fn segment(&self) -> Option<(Coordinate, Coordinate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_alternates_start_end() {
        let mut path = FlightPath::default();
        assert!(path.is_empty());
        assert_eq!(path.segment(), None);

        path.toggle_point(Coordinate::new(100.0, 100.0));
        assert_eq!(path.start, Some(Coordinate::new(100.0, 100.0)));
        assert_eq!(path.end, None);
        assert_eq!(path.segment(), None);

        path.toggle_point(Coordinate::new(900.0, 900.0));
        assert_eq!(path.end, Some(Coordinate::new(900.0, 900.0)));
        assert!(path.segment().is_some());
    }

    #[test]
    fn test_third_click_restarts_path() {
        let mut path = FlightPath::default();
        path.toggle_point(Coordinate::new(0.0, 0.0));
        path.toggle_point(Coordinate::new(500.0, 0.0));

        // 兩點都設定後再點一次，從新起點重新開始
        path.toggle_point(Coordinate::new(250.0, 250.0));
        assert_eq!(path.start, Some(Coordinate::new(250.0, 250.0)));
        assert_eq!(path.end, None);
    }

    #[test]
    fn test_clear() {
        let mut path = FlightPath::default();
        path.toggle_point(Coordinate::new(1.0, 2.0));
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.end, None);
    }
}
