//! Live photo 配對器
//!
//! 只依檔名判斷：`.mov` 檔若有同名（不分大小寫）的靜態圖片，就視為 live photo 的動態部分

use log::info;
use std::collections::HashSet;

/// 動態檔副檔名
pub const MOTION_EXTENSION: &str = ".mov";

/// 可配對的靜態圖片副檔名
pub const STILL_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".heic"];

/// 從資料夾的檔名列表找出 live photo 的動態檔
///
/// 回傳順序與輸入順序相同。空列表回傳空結果。
#[must_use]
pub fn find_live_photos<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let lowercase_names: HashSet<String> = files
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect();

    let mut live_photos = Vec::new();

    for file in files {
        let file = file.as_ref();

        let Some(base) = motion_base_name(file) else {
            continue;
        };

        let has_still = STILL_EXTENSIONS
            .iter()
            .any(|ext| lowercase_names.contains(&format!("{base}{ext}").to_lowercase()));

        if has_still {
            info!("找到 live photo: {file}");
            live_photos.push(file.to_string());
        }
    }

    live_photos
}

/// 檔名最後 4 個字元為 `.mov`（不分大小寫）時回傳去掉後綴的部分
fn motion_base_name(file: &str) -> Option<&str> {
    let split = file.len().checked_sub(MOTION_EXTENSION.len())?;
    if !file.is_char_boundary(split) {
        return None;
    }

    let (base, suffix) = file.split_at(split);
    suffix
        .eq_ignore_ascii_case(MOTION_EXTENSION)
        .then_some(base)
}
