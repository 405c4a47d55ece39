//! 標記手勢狀態機
//!
//! 把指標互動（點擊、拖曳、修飾鍵點擊）解析為選取、編輯、刪除、
//! 移動等動作。狀態以明確的 tagged enum 表示，不用散落的布林旗標，
//! 讓轉移邏輯可以直接測試。時間由呼叫端以參數傳入，狀態機本身
//! 不讀時鐘。

use crate::{Coordinate, LocationIndex, ScreenPos, ScreenRect};

/// 點擊與拖曳的判別門檻（螢幕像素）
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;
/// 拖曳放開後抑制地圖表面點擊的時間（秒）
///
/// 放開拖曳的瞬間，底下的地圖表面會收到一次合成點擊，若不抑制
/// 會立刻開出「新增地點」表單。
pub const POST_DRAG_SUPPRESS_SECS: f64 = 0.15;

/// 手勢狀態
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GesturePhase {
    /// 沒有進行中的手勢
    #[default]
    Idle,
    /// 指標已按下、尚未放開（非編輯模式）；放開即切換選取
    Pending { index: LocationIndex },
    /// 拖曳中（編輯模式）
    ///
    /// `offset` 是按下瞬間指標與標記螢幕位置的差，整段手勢固定
    /// 不變，標記才不會瞬移貼到指標上。
    Dragging {
        index: LocationIndex,
        down: ScreenPos,
        offset: ScreenPos,
    },
    /// 拖曳剛結束，抑制表面點擊，到期自動清除
    JustFinished { until: f64 },
}

/// 狀態機輸出的標記動作，由呼叫端套用到 store 與選取狀態
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerAction {
    /// 切換選取（同一筆再點一次取消）
    Select(LocationIndex),
    /// 開啟編輯表單
    Edit(LocationIndex),
    /// 刪除地點
    Delete(LocationIndex),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GestureController {
    phase: GesturePhase,
}

impl GestureController {
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// 拖曳中的地點索引
    pub fn dragging_index(&self) -> Option<LocationIndex> {
        match self.phase {
            GesturePhase::Dragging { index, .. } => Some(index),
            _ => None,
        }
    }

    /// 指標在標記上按下
    ///
    /// 轉移優先順序：
    /// 1. 編輯模式 + 刪除修飾鍵 → 立刻回傳刪除，維持 Idle
    /// 2. 編輯模式 → 進入 Dragging，記下按下位置與固定 offset
    /// 3. 其他 → 進入 Pending，放開時切換選取
    pub fn pointer_down(
        &mut self,
        index: LocationIndex,
        pointer: ScreenPos,
        marker_screen: ScreenPos,
        edit_mode: bool,
        delete_modifier: bool,
    ) -> Option<MarkerAction> {
        if edit_mode && delete_modifier {
            self.phase = GesturePhase::Idle;
            return Some(MarkerAction::Delete(index));
        }

        if edit_mode {
            self.phase = GesturePhase::Dragging {
                index,
                down: pointer,
                offset: ScreenPos::new(pointer.x - marker_screen.x, pointer.y - marker_screen.y),
            };
        } else {
            self.phase = GesturePhase::Pending { index };
        }
        None
    }

    /// 指標移動；拖曳中時回傳 (索引, 新地圖座標) 供呼叫端寫回 store
    ///
    /// 每次都以當下 frame 的圖片矩形換算。版面尚未就緒時整個事件
    /// 略過，下一個指標事件再試。
    pub fn pointer_move(
        &mut self,
        pointer: ScreenPos,
        image_rect: ScreenRect,
    ) -> Option<(LocationIndex, Coordinate)> {
        let GesturePhase::Dragging { index, offset, .. } = self.phase else {
            return None;
        };
        if !image_rect.is_ready() {
            return None;
        }

        let coord = image_rect
            .screen_to_map(ScreenPos::new(pointer.x - offset.x, pointer.y - offset.y));
        Some((index, Coordinate::new(coord.x.round(), coord.y.round())))
    }

    /// 指標放開
    ///
    /// - Dragging：進入 JustFinished；移動距離小於門檻且在編輯模式
    ///   時視為點擊，回傳編輯動作
    /// - Pending：編輯模式外回傳切換選取，與移動距離無關
    ///   （非編輯模式沒有拖曳可言）
    pub fn pointer_up(
        &mut self,
        pointer: ScreenPos,
        edit_mode: bool,
        now: f64,
    ) -> Option<MarkerAction> {
        match self.phase {
            GesturePhase::Dragging { index, down, .. } => {
                self.phase = GesturePhase::JustFinished {
                    until: now + POST_DRAG_SUPPRESS_SECS,
                };
                if edit_mode && pointer.distance(down) < CLICK_DRAG_THRESHOLD {
                    Some(MarkerAction::Edit(index))
                } else {
                    None
                }
            }
            GesturePhase::Pending { index } => {
                self.phase = GesturePhase::Idle;
                if edit_mode {
                    None
                } else {
                    Some(MarkerAction::Select(index))
                }
            }
            _ => None,
        }
    }

    /// 每個 frame 呼叫，JustFinished 到期時回到 Idle
    pub fn tick(&mut self, now: f64) {
        if let GesturePhase::JustFinished { until } = self.phase {
            if now >= until {
                self.phase = GesturePhase::Idle;
            }
        }
    }

    /// 是否要抑制地圖表面的點擊（拖曳中或剛放開）
    pub fn suppress_surface_click(&self) -> bool {
        matches!(
            self.phase,
            GesturePhase::Dragging { .. } | GesturePhase::JustFinished { .. }
        )
    }

    /// 強制回到 Idle；切換編輯模式時呼叫，放棄進行中的手勢
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: ScreenRect = ScreenRect {
        left: 0.0,
        top: 0.0,
        width: 1000.0,
        height: 1000.0,
    };

    #[test]
    fn test_delete_modifier_takes_precedence() {
        let mut gesture = GestureController::default();
        let action = gesture.pointer_down(
            2,
            ScreenPos::new(100.0, 100.0),
            ScreenPos::new(100.0, 100.0),
            true,
            true,
        );
        assert_eq!(action, Some(MarkerAction::Delete(2)));
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_delete_modifier_ignored_outside_edit_mode() {
        let mut gesture = GestureController::default();
        let action = gesture.pointer_down(
            2,
            ScreenPos::new(100.0, 100.0),
            ScreenPos::new(100.0, 100.0),
            false,
            true,
        );
        assert_eq!(action, None);
        assert!(matches!(gesture.phase(), GesturePhase::Pending { .. }));
    }

    #[test]
    fn test_select_toggle_outside_edit_mode() {
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            1,
            ScreenPos::new(50.0, 50.0),
            ScreenPos::new(50.0, 50.0),
            false,
            false,
        );
        let action = gesture.pointer_up(ScreenPos::new(51.0, 50.0), false, 0.0);
        assert_eq!(action, Some(MarkerAction::Select(1)));
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_select_fires_regardless_of_movement() {
        // 非編輯模式沒有拖曳，放開時不比對移動距離
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            1,
            ScreenPos::new(50.0, 50.0),
            ScreenPos::new(50.0, 50.0),
            false,
            false,
        );
        let action = gesture.pointer_up(ScreenPos::new(300.0, 300.0), false, 0.0);
        assert_eq!(action, Some(MarkerAction::Select(1)));
        assert_eq!(gesture.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_drag_offset_prevents_snap() {
        let mut gesture = GestureController::default();
        // 按在標記中心右下 (3, 4) 處
        gesture.pointer_down(
            0,
            ScreenPos::new(503.0, 504.0),
            ScreenPos::new(500.0, 500.0),
            true,
            false,
        );
        assert!(gesture.is_dragging());
        assert_eq!(gesture.dragging_index(), Some(0));

        // 指標移動到 (603, 604)，標記應落在 (600, 600)
        let (index, coord) = gesture
            .pointer_move(ScreenPos::new(603.0, 604.0), IMAGE)
            .unwrap();
        assert_eq!(index, 0);
        assert_eq!(coord, Coordinate::new(600.0, 600.0));
    }

    #[test]
    fn test_drag_move_clamps_to_map() {
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            0,
            ScreenPos::new(500.0, 500.0),
            ScreenPos::new(500.0, 500.0),
            true,
            false,
        );
        let (_, coord) = gesture
            .pointer_move(ScreenPos::new(-200.0, 1500.0), IMAGE)
            .unwrap();
        assert_eq!(coord, Coordinate::new(0.0, 1000.0));
    }

    #[test]
    fn test_move_skipped_when_layout_not_ready() {
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            0,
            ScreenPos::new(500.0, 500.0),
            ScreenPos::new(500.0, 500.0),
            true,
            false,
        );
        // 版面尚未就緒：事件略過，但拖曳不中斷
        assert_eq!(
            gesture.pointer_move(ScreenPos::new(600.0, 600.0), ScreenRect::default()),
            None
        );
        assert!(gesture.is_dragging());
    }

    #[test]
    fn test_short_press_in_edit_mode_opens_edit() {
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            3,
            ScreenPos::new(100.0, 100.0),
            ScreenPos::new(100.0, 100.0),
            true,
            false,
        );
        // 移動不足 5px 就放開：視為點擊，開啟編輯
        let action = gesture.pointer_up(ScreenPos::new(102.0, 101.0), true, 10.0);
        assert_eq!(action, Some(MarkerAction::Edit(3)));
        assert!(matches!(gesture.phase(), GesturePhase::JustFinished { .. }));
    }

    #[test]
    fn test_real_drag_release_suppresses_then_clears() {
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            0,
            ScreenPos::new(100.0, 100.0),
            ScreenPos::new(100.0, 100.0),
            true,
            false,
        );
        gesture.pointer_move(ScreenPos::new(300.0, 300.0), IMAGE);

        let action = gesture.pointer_up(ScreenPos::new(300.0, 300.0), true, 10.0);
        assert_eq!(action, None);
        assert!(gesture.suppress_surface_click());

        // 抑制期間內 tick 不清除
        gesture.tick(10.0 + POST_DRAG_SUPPRESS_SECS / 2.0);
        assert!(gesture.suppress_surface_click());

        // 到期後回到 Idle
        gesture.tick(10.0 + POST_DRAG_SUPPRESS_SECS);
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        assert!(!gesture.suppress_surface_click());
    }

    #[test]
    fn test_reset_abandons_drag() {
        let mut gesture = GestureController::default();
        gesture.pointer_down(
            0,
            ScreenPos::new(100.0, 100.0),
            ScreenPos::new(100.0, 100.0),
            true,
            false,
        );
        assert!(gesture.is_dragging());

        gesture.reset();
        assert_eq!(gesture.phase(), GesturePhase::Idle);
        // 放棄後放開不再產生任何動作
        assert_eq!(gesture.pointer_up(ScreenPos::new(100.0, 100.0), true, 0.0), None);
    }
}
