//! 新增／編輯地點的表單視窗

use crate::constants::SPACING_MEDIUM;
use egui::*;
use map_lib::{Location, LocationIndex, Size};
use strum::IntoEnumIterator;

/// 表單暫存：`index` 為 None 時是新增，否則是編輯既有地點
#[derive(Debug, Clone)]
pub struct EditForm {
    pub index: Option<LocationIndex>,
    pub location: Location,
}

/// 表單結果，由 app 套用到 store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormResult {
    Open,
    Save,
    Cancel,
}

impl EditForm {
    pub fn add_at(location: Location) -> Self {
        Self {
            index: None,
            location,
        }
    }

    pub fn edit(index: LocationIndex, location: Location) -> Self {
        Self {
            index: Some(index),
            location,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> FormResult {
        let title = if self.index.is_some() {
            "編輯地點"
        } else {
            "新增地點"
        };

        let mut result = FormResult::Open;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("名稱：");
                    ui.text_edit_singleline(&mut self.location.name);
                });

                // 座標由點擊或拖曳決定，表單內唯讀
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "座標：({}, {})",
                        self.location.x.round(),
                        self.location.y.round()
                    ));
                });

                ui.horizontal(|ui| {
                    ui.label("規模：");
                    ComboBox::from_id_salt("edit_form_size")
                        .selected_text(self.location.size.to_string())
                        .show_ui(ui, |ui| {
                            for size in Size::iter() {
                                ui.selectable_value(
                                    &mut self.location.size,
                                    size,
                                    size.to_string(),
                                );
                            }
                        });
                });

                ui.add_space(SPACING_MEDIUM);

                ui.horizontal(|ui| {
                    // 名稱空白時不允許儲存
                    let can_save = !self.location.name.trim().is_empty();
                    ui.add_enabled_ui(can_save, |ui| {
                        let label = if self.index.is_some() { "更新" } else { "儲存" };
                        if ui.button(label).clicked() {
                            result = FormResult::Save;
                        }
                    });
                    if ui.button("取消").clicked() {
                        result = FormResult::Cancel;
                    }
                });
            });

        result
    }
}
