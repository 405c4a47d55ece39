use crate::common::{maps_file, prefs_file, show_status_message};
use crate::constants::*;
use crate::edit_form::{EditForm, FormResult};
use crate::map_view::{self, MapViewEvent, MapViewParams};
use crate::panels;
use crate::prefs::Preferences;
use egui::*;
use map_lib::{
    pick_random, FlightPath, GestureController, Location, LocationIndex, MapDataCollection, MapID,
    MarkerAction, Size,
};
use std::fs;
use strum::IntoEnumIterator;

/// 內建的種子資料，磁碟上沒有資料檔時使用
const BUNDLED_MAP_DATA: &str = include_str!("../../data/maps.json");

/// 應用程式狀態
///
/// store 由 app 明確持有，再借給各個面板，沒有全域單例。
pub struct DropSelectorApp {
    maps: MapDataCollection,
    current_map: MapID,
    size_filter: Option<Size>,
    max_path_distance: f32,
    selected: Option<LocationIndex>,
    edit_mode: bool,
    flight_path: FlightPath,
    gesture: GestureController,
    edit_form: Option<EditForm>,
    status_message: Option<(String, bool)>,
    prefs: Preferences,
}

impl DropSelectorApp {
    pub fn new() -> Self {
        let mut status_message = None;
        let maps = match fs::read_to_string(maps_file()) {
            Ok(content) => match MapDataCollection::from_json(&content) {
                Ok(maps) => maps,
                Err(err) => {
                    status_message = Some((format!("載入地圖資料失敗: {}", err), true));
                    MapDataCollection::from_json(BUNDLED_MAP_DATA).unwrap_or_default()
                }
            },
            // 沒有資料檔時退回內建種子資料
            Err(_) => MapDataCollection::from_json(BUNDLED_MAP_DATA).unwrap_or_default(),
        };

        let prefs = Preferences::load(prefs_file());
        let current_map = maps
            .resolve_id(&prefs.current_map)
            .unwrap_or_else(|| prefs.current_map.clone());

        Self {
            maps,
            current_map,
            size_filter: prefs.size_filter,
            max_path_distance: prefs.max_path_distance,
            selected: None,
            edit_mode: false,
            flight_path: FlightPath::default(),
            gesture: GestureController::default(),
            edit_form: None,
            status_message,
            prefs,
        }
    }

    fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = Some((message.into(), is_error));
    }

    /// 切換地圖：選取索引立刻作廢，進行中的手勢放棄
    fn switch_map(&mut self, map_id: MapID) {
        self.current_map = map_id;
        self.selected = None;
        self.gesture.reset();
        self.edit_form = None;
    }

    /// 切換編輯模式：清除選取並強制重置手勢，拖曳到一半的標記
    /// 停在最後一次即時更新的座標
    fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        self.selected = None;
        self.gesture.reset();
        if !self.edit_mode {
            self.edit_form = None;
        }
    }

    fn pick_random_location(&mut self) {
        let Ok(map) = self.maps.get(&self.current_map) else {
            return;
        };
        let mut rng = rand::rng();
        match pick_random(
            &mut rng,
            &map.locations,
            self.size_filter,
            &self.flight_path,
            self.max_path_distance,
        ) {
            Ok(index) => {
                let name = map.locations[index].name.clone();
                self.selected = Some(index);
                self.set_status(format!("已選出落點：{}", name), false);
            }
            // 沒有候選不是致命錯誤：提示使用者，選取不動
            Err(err) => self.set_status(err.to_string(), true),
        }
    }

    fn export_to_file(&mut self) {
        let json = match self.maps.to_json_pretty() {
            Ok(json) => json,
            Err(err) => {
                self.set_status(format!("匯出失敗: {}", err), true);
                return;
            }
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_directory(".")
            .set_file_name("maps.json")
            .save_file()
        {
            match fs::write(&path, json) {
                Ok(()) => self.set_status(format!("已匯出到 {}", path.display()), false),
                Err(err) => self.set_status(format!("匯出失敗: {}", err), true),
            }
        }
    }

    fn export_to_clipboard(&mut self, ctx: &egui::Context) {
        match self.maps.to_json_pretty() {
            Ok(json) => {
                ctx.copy_text(json);
                self.set_status("已複製 JSON 到剪貼簿", false);
            }
            Err(err) => self.set_status(format!("匯出失敗: {}", err), true),
        }
    }

    fn apply_marker_action(&mut self, action: MarkerAction) {
        match action {
            MarkerAction::Select(index) => {
                // 同一筆再點一次取消選取
                self.selected = if self.selected == Some(index) {
                    None
                } else {
                    Some(index)
                };
            }
            MarkerAction::Edit(index) => {
                if let Ok(map) = self.maps.get(&self.current_map) {
                    if let Some(location) = map.locations.get(index) {
                        self.edit_form = Some(EditForm::edit(index, location.clone()));
                    }
                }
            }
            MarkerAction::Delete(index) => {
                let result = self
                    .maps
                    .get_mut(&self.current_map)
                    .and_then(|map| map.delete_location(index));
                match result {
                    Ok(removed) => {
                        // 刪除讓索引失效，選取一律作廢
                        self.selected = None;
                        self.set_status(format!("已刪除 {}", removed.name), false);
                    }
                    Err(err) => self.set_status(err.to_string(), true),
                }
            }
        }
    }

    fn open_add_form(&mut self, coord: map_lib::Coordinate) {
        let Ok(map) = self.maps.get(&self.current_map) else {
            return;
        };
        let location = Location::new(
            format!("{} {}", NEW_LOCATION_PREFIX, map.locations.len() + 1),
            coord.x,
            coord.y,
            self.size_filter.unwrap_or_default(),
        );
        self.edit_form = Some(EditForm::add_at(location));
    }

    fn show_edit_form(&mut self, ctx: &egui::Context) {
        let Some(form) = &mut self.edit_form else {
            return;
        };
        match form.show(ctx) {
            FormResult::Open => {}
            FormResult::Cancel => self.edit_form = None,
            FormResult::Save => {
                if let Some(form) = self.edit_form.take() {
                    let result =
                        self.maps
                            .get_mut(&self.current_map)
                            .and_then(|map| match form.index {
                                Some(index) => map.edit_location(index, form.location.clone()),
                                None => {
                                    map.add_location(form.location.clone());
                                    Ok(())
                                }
                            });
                    match result {
                        Ok(()) => self.set_status(format!("已儲存 {}", form.location.name), false),
                        Err(err) => self.set_status(err.to_string(), true),
                    }
                }
            }
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            // 地圖選擇
            ui.label("地圖：");
            let map_ids: Vec<MapID> = self.maps.ids().cloned().collect();
            let current_name = self
                .maps
                .get(&self.current_map)
                .map(|map| map.name.clone())
                .unwrap_or_else(|_| self.current_map.clone());
            let mut switch_to = None;
            ComboBox::from_id_salt("map_select")
                .selected_text(current_name)
                .show_ui(ui, |ui| {
                    for id in &map_ids {
                        let name = self
                            .maps
                            .get(id)
                            .map(|map| map.name.clone())
                            .unwrap_or_else(|_| id.clone());
                        if ui
                            .selectable_label(*id == self.current_map, name)
                            .clicked()
                        {
                            switch_to = Some(id.clone());
                        }
                    }
                });
            if let Some(id) = switch_to {
                if id != self.current_map {
                    self.switch_map(id);
                }
            }

            ui.separator();

            // 規模篩選
            ui.label("規模：");
            let filter_text = match self.size_filter {
                None => "全部".to_string(),
                Some(size) => size.to_string(),
            };
            ComboBox::from_id_salt("size_filter")
                .selected_text(filter_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.size_filter, None, "全部");
                    for size in Size::iter() {
                        ui.selectable_value(&mut self.size_filter, Some(size), size.to_string());
                    }
                });

            ui.label("航線最大距離：");
            ui.add(
                DragValue::new(&mut self.max_path_distance)
                    .speed(DRAG_VALUE_SPEED)
                    .range(MAX_PATH_DISTANCE_RANGE),
            );

            ui.separator();

            // 選點操作
            ui.add_enabled_ui(!self.edit_mode, |ui| {
                if ui.button("隨機選點").clicked() {
                    self.pick_random_location();
                }
            });
            if ui.button("清除選取").clicked() {
                self.selected = None;
            }
            if !self.flight_path.is_empty() {
                if ui.button("清除航線").clicked() {
                    self.flight_path.clear();
                }
            }

            ui.separator();

            let edit_label = if self.edit_mode {
                "離開編輯模式"
            } else {
                "編輯模式"
            };
            if ui.button(edit_label).clicked() {
                self.toggle_edit_mode();
            }
            if ui.button("匯出 JSON").clicked() {
                self.export_to_file();
            }
            if ui.button("複製 JSON").clicked() {
                let ctx = ui.ctx().clone();
                self.export_to_clipboard(&ctx);
            }
        });

        // 操作提示
        let tip = if self.edit_mode {
            "編輯模式：點地圖新增地點，點標記編輯，拖曳標記移動，Shift+點擊刪除"
        } else {
            "提示：按住 Ctrl 點擊地圖畫出航線，落點會沿航線選出"
        };
        ui.label(RichText::new(tip).size(FONT_SIZE_SMALL).weak());
    }

    /// 偏好值有變動就立刻寫檔
    fn persist_prefs(&mut self) {
        let snapshot = Preferences {
            current_map: self.current_map.clone(),
            size_filter: self.size_filter,
            max_path_distance: self.max_path_distance,
        };
        if snapshot != self.prefs {
            if let Err(err) = snapshot.save(prefs_file()) {
                self.set_status(format!("儲存偏好設定失敗: {}", err), true);
            }
            self.prefs = snapshot;
        }
    }
}

impl eframe::App for DropSelectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(SPACING_SMALL);
            self.show_controls(ui);
            ui.add_space(SPACING_SMALL);
        });

        if let Some((message, is_error)) = self.status_message.clone() {
            show_status_message(ctx, &message, is_error);
        }

        SidePanel::right("info_panel")
            .default_width(LIST_PANEL_WIDTH)
            .show(ctx, |ui| {
                let Ok(map) = self.maps.get(&self.current_map) else {
                    ui.label("沒有地圖資料");
                    return;
                };

                // 編輯模式外才顯示選點結果
                if !self.edit_mode {
                    if let Some(location) = self.selected.and_then(|i| map.locations.get(i)) {
                        panels::render_random_result(ui, location);
                        ui.add_space(SPACING_MEDIUM);
                    }
                }

                if let Some(index) =
                    panels::render_location_list(ui, map, self.size_filter, self.selected)
                {
                    self.apply_marker_action(MarkerAction::Select(index));
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            let event = match self.maps.get_mut(&self.current_map) {
                Ok(map) => map_view::show_map(
                    ui,
                    MapViewParams {
                        map,
                        gesture: &mut self.gesture,
                        flight_path: &mut self.flight_path,
                        selected: self.selected,
                        size_filter: self.size_filter,
                        max_path_distance: self.max_path_distance,
                        edit_mode: self.edit_mode,
                    },
                ),
                Err(_) => {
                    ui.label("沒有地圖資料");
                    None
                }
            };

            match event {
                Some(MapViewEvent::Marker(action)) => self.apply_marker_action(action),
                Some(MapViewEvent::OpenAdd(coord)) => self.open_add_form(coord),
                None => {}
            }
        });

        self.show_edit_form(ctx);
        self.persist_prefs();
    }
}
