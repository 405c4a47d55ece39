//! 地圖檢視：底圖、航線、標記、懸停提示與指標事件轉譯
//!
//! 指標事件在這裡轉譯成手勢狀態機的呼叫；狀態機輸出的動作
//! 原封不動回傳給 app 套用。

use crate::common::image_file;
use crate::constants::*;
use egui::*;
use map_lib::{
    filter_locations, Coordinate, FlightPath, GestureController, Location, LocationIndex,
    MapData, MarkerAction, ScreenPos, ScreenRect, Size,
};

/// 地圖檢視輸出的事件
#[derive(Debug, Clone, PartialEq)]
pub enum MapViewEvent {
    Marker(MarkerAction),
    /// 在地圖表面點擊，於該座標開啟新增表單
    OpenAdd(Coordinate),
}

pub struct MapViewParams<'a> {
    pub map: &'a mut MapData,
    pub gesture: &'a mut GestureController,
    pub flight_path: &'a mut FlightPath,
    pub selected: Option<LocationIndex>,
    pub size_filter: Option<Size>,
    pub max_path_distance: f32,
    pub edit_mode: bool,
}

pub fn show_map(ui: &mut egui::Ui, params: MapViewParams) -> Option<MapViewEvent> {
    let MapViewParams {
        map,
        gesture,
        flight_path,
        selected,
        size_filter,
        max_path_distance,
        edit_mode,
    } = params;

    // 地圖維持正方形，佔滿可用空間的短邊
    let available = ui.available_size();
    let side = available.x.min(available.y).max(1.0);
    let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::click());
    let image_rect = ScreenRect::new(rect.min.x, rect.min.y, rect.width(), rect.height());

    // ==================== 輸入 ====================

    let (pressed, released, pointer, modifiers, now) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.interact_pos(),
            i.modifiers,
            i.time,
        )
    });
    gesture.tick(now);

    // 目前顯示中的標記（索引以未篩選序列為準）與其螢幕位置
    let markers: Vec<(LocationIndex, ScreenPos)> = filter_locations(&map.locations, size_filter)
        .into_iter()
        .map(|(index, loc)| (index, image_rect.map_to_screen(loc.coordinate())))
        .collect();

    // 後畫的標記在最上層，命中測試從尾端找
    let hit_test = |pos: ScreenPos| {
        markers
            .iter()
            .rev()
            .find(|(_, marker)| marker.distance(pos) <= MARKER_RADIUS)
            .map(|(index, marker)| (*index, *marker))
    };

    let mut event = None;

    // 在標記上按下
    if pressed {
        if let Some(pos) = pointer.filter(|p| rect.contains(*p)) {
            let pos = ScreenPos::new(pos.x, pos.y);
            if let Some((index, marker)) = hit_test(pos) {
                if let Some(action) =
                    gesture.pointer_down(index, pos, marker, edit_mode, modifiers.shift)
                {
                    event = Some(MapViewEvent::Marker(action));
                }
            }
        }
    }

    // 拖曳中：每個 frame 即時寫回 store
    if gesture.is_dragging() {
        if let Some(pos) = pointer {
            if let Some((index, coord)) =
                gesture.pointer_move(ScreenPos::new(pos.x, pos.y), image_rect)
            {
                if map.move_location(index, coord.x, coord.y).is_err() {
                    // 索引已失效（不該發生），放棄這次手勢
                    gesture.reset();
                }
            }
        }
    }

    // 放開
    if released {
        if let Some(pos) = pointer {
            if let Some(action) =
                gesture.pointer_up(ScreenPos::new(pos.x, pos.y), edit_mode, now)
            {
                event = Some(MapViewEvent::Marker(action));
            }
        }
    }

    // 地圖表面點擊（不在標記上，拖曳與剛放開期間抑制）
    if response.clicked() && !gesture.suppress_surface_click() {
        if let Some(pos) = response.interact_pointer_pos() {
            let pos = ScreenPos::new(pos.x, pos.y);
            if hit_test(pos).is_none() && image_rect.is_ready() {
                let coord = image_rect.screen_to_map(pos);
                if !edit_mode && modifiers.ctrl {
                    // 畫航線：點擊在起點與終點間輪替
                    flight_path.toggle_point(coord);
                } else if edit_mode && !modifiers.shift {
                    event = Some(MapViewEvent::OpenAdd(Coordinate::new(
                        coord.x.round(),
                        coord.y.round(),
                    )));
                }
            }
        }
    }

    // ==================== 渲染 ====================

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, MAP_COLOR_BACKGROUND);

    // 底圖載不到時只剩背景色，座標轉換照常使用配置出的矩形
    let uri = format!("file://{}", image_file(&map.image).display());
    Image::new(uri).paint_at(ui, rect);

    render_flight_path(&painter, image_rect, flight_path, max_path_distance);
    // 位置重新取自 store，拖曳中的標記才會跟著這個 frame 的寫入走
    render_markers(&painter, map, size_filter, image_rect, selected, gesture);

    // 懸停提示：拖曳中完全抑制
    if !gesture.is_dragging() && response.hovered() {
        if let Some(pos) = pointer {
            if let Some((index, marker)) = hit_test(ScreenPos::new(pos.x, pos.y)) {
                render_tooltip(ui, &map.locations[index], marker);
            }
        }
    }

    event
}

// ==================== 渲染層 ====================

fn render_flight_path(
    painter: &Painter,
    image_rect: ScreenRect,
    flight_path: &FlightPath,
    max_path_distance: f32,
) {
    let to_pos2 = |coord: Coordinate| {
        let p = image_rect.map_to_screen(coord);
        pos2(p.x, p.y)
    };

    if let Some(start) = flight_path.start {
        painter.circle(
            to_pos2(start),
            PATH_ENDPOINT_RADIUS,
            PATH_COLOR_ENDPOINT,
            Stroke::new(STROKE_WIDTH, Color32::WHITE),
        );
    }

    if let Some((start, end)) = flight_path.segment() {
        painter.line_segment(
            [to_pos2(start), to_pos2(end)],
            Stroke::new(PATH_STROKE_WIDTH, PATH_COLOR_LINE),
        );
        painter.circle(
            to_pos2(end),
            PATH_ENDPOINT_RADIUS,
            PATH_COLOR_ENDPOINT,
            Stroke::new(STROKE_WIDTH, Color32::WHITE),
        );

        // 左上角畫出最大落點距離的比例尺
        let legend_from = to_pos2(Coordinate::new(25.0, 25.0));
        let legend_to = to_pos2(Coordinate::new(25.0 + max_path_distance, 25.0));
        painter.line_segment(
            [legend_from, legend_to],
            Stroke::new(LEGEND_STROKE_WIDTH, PATH_COLOR_LINE),
        );
        painter.text(
            to_pos2(Coordinate::new(25.0, 35.0)),
            Align2::LEFT_TOP,
            "最大落點距離",
            FontId::proportional(MARKER_TEXT_SIZE),
            Color32::WHITE,
        );
    }
}

fn render_markers(
    painter: &Painter,
    map: &MapData,
    size_filter: Option<Size>,
    image_rect: ScreenRect,
    selected: Option<LocationIndex>,
    gesture: &GestureController,
) {
    for (index, location) in filter_locations(&map.locations, size_filter) {
        let color = if gesture.dragging_index() == Some(index) {
            MARKER_COLOR_DRAGGING
        } else if selected == Some(index) {
            MARKER_COLOR_SELECTED
        } else {
            MARKER_COLOR_NORMAL
        };

        let marker = image_rect.map_to_screen(location.coordinate());
        let center = pos2(marker.x, marker.y);
        painter.circle(
            center,
            MARKER_RADIUS,
            color,
            Stroke::new(STROKE_WIDTH, MARKER_COLOR_OUTLINE),
        );
        painter.text(
            center,
            Align2::CENTER_CENTER,
            location.size.letter(),
            FontId::proportional(MARKER_TEXT_SIZE),
            Color32::BLACK,
        );
    }
}

fn render_tooltip(ui: &egui::Ui, location: &Location, marker: ScreenPos) {
    let mut lines = vec![location.name.clone(), location.size.to_string()];
    if let Some(kind) = &location.kind {
        lines.push(kind.clone());
    }
    if let Some(buildings) = location.buildings {
        lines.push(format!("{} 棟建築", buildings));
    }
    lines.push(format!("({}, {})", location.x.round(), location.y.round()));
    let hover_text = lines.join("\n");

    let font_id = TextStyle::Body.resolve(ui.style());
    let galley = ui
        .painter()
        .layout_no_wrap(hover_text, font_id, Color32::BLACK);
    let text_size = galley.size();

    // 顯示在標記右上方，右邊太窄就移到左邊
    let viewport_rect = ui.ctx().viewport_rect();
    let tooltip_x = if marker.x + MARKER_RADIUS + text_size.x + SPACING_MEDIUM > viewport_rect.right()
    {
        marker.x - MARKER_RADIUS - text_size.x - SPACING_MEDIUM
    } else {
        marker.x + MARKER_RADIUS + SPACING_MEDIUM
    };
    let tooltip_pos = pos2(tooltip_x, marker.y - MARKER_RADIUS - text_size.y);

    let tooltip_layer = LayerId::new(Order::Tooltip, Id::new("map_hover_tooltip_layer"));
    let tooltip_painter = ui.ctx().layer_painter(tooltip_layer);
    tooltip_painter.rect_filled(
        Rect::from_min_size(tooltip_pos, text_size).expand(SPACING_SMALL),
        0.0,
        Color32::GRAY,
    );
    tooltip_painter.galley(tooltip_pos, galley, Color32::BLACK);
}
