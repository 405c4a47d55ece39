//! 側邊面板：地點列表與隨機選點結果

use crate::constants::*;
use egui::*;
use map_lib::{filter_locations, Location, LocationIndex, MapData, Size};

/// 渲染篩選後的地點列表；點擊列表項目回傳其未篩選索引
pub fn render_location_list(
    ui: &mut egui::Ui,
    map: &MapData,
    size_filter: Option<Size>,
    selected: Option<LocationIndex>,
) -> Option<LocationIndex> {
    let filtered = filter_locations(&map.locations, size_filter);

    ui.heading(format!("所有地點（{}）", filtered.len()));
    ui.add_space(SPACING_SMALL);

    let mut clicked = None;
    ScrollArea::vertical()
        .id_salt("location_list_scroll")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for (index, location) in filtered {
                let is_selected = selected == Some(index);
                let label = format!(
                    "{}　{}　({}, {})",
                    location.name,
                    location.size.letter(),
                    location.x.round(),
                    location.y.round()
                );
                if ui.selectable_label(is_selected, label).clicked() {
                    clicked = Some(index);
                }
            }
        });
    clicked
}

/// 選中地點時顯示選點結果
pub fn render_random_result(ui: &mut egui::Ui, location: &Location) {
    ui.group(|ui| {
        ui.heading("已選出落點！");
        ui.add_space(SPACING_SMALL);
        ui.label(RichText::new(&location.name).strong());
        ui.label(format!("規模：{}", location.size));
        if let Some(kind) = &location.kind {
            ui.label(format!("類型：{}", kind));
        }
        if let Some(buildings) = location.buildings {
            ui.label(format!("建築：{} 棟", buildings));
        }
        ui.label(format!("座標：({}, {})", location.x.round(), location.y.round()));
    });
}
