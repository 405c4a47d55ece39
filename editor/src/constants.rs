pub const APP_TITLE: &str = "空投選點器";
pub const FONT_FILE_PATH: &str = "fonts/NotoSans.ttf";
pub const FONT_NAME: &str = "NotoSans";

// 字體大小
pub const FONT_SIZE_HEADING: f32 = 28.0;
pub const FONT_SIZE_BODY: f32 = 18.0;
pub const FONT_SIZE_MONOSPACE: f32 = 18.0;
pub const FONT_SIZE_BUTTON: f32 = 18.0;
pub const FONT_SIZE_SMALL: f32 = 14.0;

// UI 間距
pub const SPACING_SMALL: f32 = 5.0;
pub const SPACING_MEDIUM: f32 = 10.0;

// UI 尺寸
pub const LIST_PANEL_WIDTH: f32 = 280.0;
pub const STROKE_WIDTH: f32 = 2.0;

// 地圖檢視
pub const MARKER_RADIUS: f32 = 10.0;
pub const MARKER_TEXT_SIZE: f32 = 12.0;
pub const PATH_ENDPOINT_RADIUS: f32 = 6.0;
pub const PATH_STROKE_WIDTH: f32 = 2.0;
pub const LEGEND_STROKE_WIDTH: f32 = 8.0;

// 地圖檢視 - 顏色
pub const MAP_COLOR_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(24, 32, 24);
pub const MARKER_COLOR_NORMAL: egui::Color32 = egui::Color32::from_rgb(220, 60, 60);
pub const MARKER_COLOR_SELECTED: egui::Color32 = egui::Color32::YELLOW;
pub const MARKER_COLOR_DRAGGING: egui::Color32 = egui::Color32::LIGHT_BLUE;
pub const MARKER_COLOR_OUTLINE: egui::Color32 = egui::Color32::WHITE;
pub const PATH_COLOR_LINE: egui::Color32 = egui::Color32::RED;
pub const PATH_COLOR_ENDPOINT: egui::Color32 = egui::Color32::BLUE;

// 隨機選點
pub const DEFAULT_MAX_PATH_DISTANCE: f32 = 150.0;
pub const MAX_PATH_DISTANCE_RANGE: std::ops::RangeInclusive<f32> = 1.0..=1000.0;
pub const DRAG_VALUE_SPEED: f64 = 1.0;

// 新增地點的預設名稱前綴
pub const NEW_LOCATION_PREFIX: &str = "Cluster";
