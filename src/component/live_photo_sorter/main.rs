use super::matcher::find_live_photos;
use super::organizer::{LivePhotoOrganizer, OrganizeResult};
use super::prompt::ConfirmPrompt;
use crate::config::{Config, SortMode};
use crate::tools::{list_directory_files, validate_source_dir};
use anyhow::Result;
use console::style;
use log::{debug, info};

/// 一次執行的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// 沒有找到 live photo，目標資料夾不會被建立
    NothingFound,
    Moved(OrganizeResult),
    Deleted(OrganizeResult),
    /// 使用者拒絕刪除，不做任何事
    DeleteDeclined,
}

/// Live photo 整理元件
pub struct LivePhotoSorter {
    config: Config,
}

impl LivePhotoSorter {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self, prompt: &dyn ConfirmPrompt) -> Result<SortOutcome> {
        let source_dir = &self.config.source_dir;
        validate_source_dir(source_dir)?;

        info!("開始整理 live photo: {}", source_dir.display());

        let files = list_directory_files(source_dir)?;
        let live_photos = find_live_photos(&files);

        if live_photos.is_empty() {
            info!("沒有找到任何 live photo，結束");
            return Ok(SortOutcome::NothingFound);
        }

        debug!("偵測到的 live photo: {live_photos:?}");

        let organizer = LivePhotoOrganizer::new(source_dir, &self.config.dest_dir)
            .with_prefix(self.config.prefix.clone());

        let outcome = match self.config.mode {
            SortMode::Delete => {
                if !self.confirm_delete(prompt, live_photos.len())? {
                    println!("{}", style("操作已取消").yellow());
                    return Ok(SortOutcome::DeleteDeclined);
                }

                let result = organizer.delete_live_photos(&live_photos)?;
                info!("刪除完成，共 {} 個檔案", result.count());
                SortOutcome::Deleted(result)
            }
            SortMode::Move => {
                debug!("移動 live photo 到 {}", organizer.dest_dir().display());
                let result = organizer.move_live_photos(&live_photos)?;
                info!("移動完成，共 {} 個檔案", result.count());
                SortOutcome::Moved(result)
            }
        };

        self.print_result(&outcome);

        Ok(outcome)
    }

    fn confirm_delete(&self, prompt: &dyn ConfirmPrompt, count: usize) -> Result<bool> {
        if self.config.force {
            return Ok(true);
        }
        prompt.confirm(&format!("確定要刪除這 {count} 個 live photo 嗎？"))
    }

    fn print_result(&self, outcome: &SortOutcome) {
        println!();
        println!("{}", style("=== 處理結果 ===").cyan().bold());

        match outcome {
            SortOutcome::Moved(result) => {
                println!(
                    "  已移動 live photo: {} 個",
                    style(result.count()).green()
                );
                println!("  目標資料夾: {}", self.config.dest_dir.display());
            }
            SortOutcome::Deleted(result) => {
                println!(
                    "  已刪除 live photo: {} 個",
                    style(result.count()).yellow()
                );
            }
            SortOutcome::NothingFound | SortOutcome::DeleteDeclined => {}
        }
    }
}
