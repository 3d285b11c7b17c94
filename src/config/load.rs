use crate::cli::Cli;
use crate::config::types::{Config, SortMode};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

impl Config {
    /// 從命令列參數建立設定
    ///
    /// 兩個路徑都以目前工作目錄轉成絕對路徑，所以相對的 `--dest`
    /// 是相對於執行位置，而不是 `--path`。
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let source_dir = absolute_path(&cli.path)?;
        let dest_dir = absolute_path(&cli.dest)?;

        Ok(Self {
            source_dir,
            dest_dir,
            prefix: cli.prefix,
            mode: if cli.delete {
                SortMode::Delete
            } else {
                SortMode::Move
            },
            force: cli.force,
            verbose: cli.verbose,
        })
    }
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("無法解析路徑: {}", path.display()))
}
