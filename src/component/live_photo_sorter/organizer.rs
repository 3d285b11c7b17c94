//! Live photo 整理器
//!
//! 將配對到的動態檔移動到目標資料夾，或直接刪除。
//! 任何檔案操作失敗都會中止整批，已完成的部分不會還原。

use crate::tools::ensure_dest_dir;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 整理結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrganizeResult {
    /// 已處理（移動或刪除）的檔案
    pub processed: Vec<PathBuf>,
}

impl OrganizeResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.processed.len()
    }
}

/// Live photo 整理器
pub struct LivePhotoOrganizer {
    source_dir: PathBuf,
    dest_dir: PathBuf,
    prefix: Option<String>,
}

impl LivePhotoOrganizer {
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            prefix: None,
        }
    }

    /// 設定移動後的檔名前綴
    #[must_use]
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// 目標檔名：有前綴時為 `prefix + file_name`
    #[must_use]
    pub fn target_name(&self, file_name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{file_name}"),
            None => file_name.to_string(),
        }
    }

    /// 依序將 live photo 移動到目標資料夾
    pub fn move_live_photos(&self, live_photos: &[String]) -> Result<OrganizeResult> {
        ensure_dest_dir(&self.dest_dir)?;

        let mut result = OrganizeResult::default();

        for file_name in live_photos {
            let source_path = self.source_dir.join(file_name);
            let target_path = self.dest_dir.join(self.target_name(file_name));

            debug!("移動 {file_name} -> {}", target_path.display());
            fs::rename(&source_path, &target_path).with_context(|| {
                format!(
                    "移動檔案失敗: {} -> {}",
                    source_path.display(),
                    target_path.display()
                )
            })?;

            result.processed.push(target_path);
        }

        Ok(result)
    }

    /// 依序刪除 live photo，呼叫前須已取得確認
    pub fn delete_live_photos(&self, live_photos: &[String]) -> Result<OrganizeResult> {
        let mut result = OrganizeResult::default();

        for file_name in live_photos {
            let source_path = self.source_dir.join(file_name);

            debug!("刪除 {}", source_path.display());
            fs::remove_file(&source_path)
                .with_context(|| format!("刪除檔案失敗: {}", source_path.display()))?;

            result.processed.push(source_path);
        }

        Ok(result)
    }
}
