use anyhow::Result;
use log::warn;
use std::path::Path;
use walkdir::WalkDir;

/// 列出資料夾第一層的一般檔案名稱，不遞迴、不含子資料夾
///
/// 順序維持作業系統列出的順序。指向一般檔案的符號連結也算在內。
pub fn list_directory_files(directory: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("讀取目錄項目失敗: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => warn!("跳過非 UTF-8 檔名: {}", entry.path().display()),
        }
    }

    Ok(names)
}
