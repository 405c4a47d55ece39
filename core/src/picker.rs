use crate::{
    point_to_segment_distance, Error, FlightPath, Location, LocationIndex, Result, Size,
};
use rand::Rng;

/// 依規模篩選地點，回傳 (原始索引, 地點) 配對
///
/// 沒有篩選條件時全部通過。索引以未篩選的序列為準，後續的
/// 選取、刪除與拖曳都以這個索引定位。
pub fn filter_locations(
    locations: &[Location],
    size_filter: Option<Size>,
) -> Vec<(LocationIndex, &Location)> {
    locations
        .iter()
        .enumerate()
        .filter(|(_, loc)| size_filter.is_none_or(|size| loc.size == size))
        .collect()
}

/// 隨機選出一個地點，回傳未篩選序列中的索引
///
/// 步驟：(a) 依規模篩選；(b) 航線兩端點都設定時，再以點到線段
/// 距離 <= `max_distance` 篩選；(c) 候選為空回傳錯誤（使用者訊息，
/// 呼叫端不得改動目前選取）；(d) 在候選中均勻隨機取一個。
pub fn pick_random<R: Rng + ?Sized>(
    rng: &mut R,
    locations: &[Location],
    size_filter: Option<Size>,
    path: &FlightPath,
    max_distance: f32,
) -> Result<LocationIndex> {
    let mut candidates = filter_locations(locations, size_filter);
    if candidates.is_empty() {
        return Err(Error::NoMatchingLocation);
    }

    if let Some((start, end)) = path.segment() {
        candidates.retain(|(_, loc)| {
            point_to_segment_distance(loc.coordinate(), start, end) <= max_distance
        });
        if candidates.is_empty() {
            return Err(Error::NoLocationNearPath);
        }
    }

    let (index, _) = candidates[rng.random_range(0..candidates.len())];
    Ok(index)
}
