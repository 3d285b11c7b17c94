use anyhow::{Context, Result, bail};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 確認 `--path` 指向存在的資料夾，否則在任何掃描之前直接失敗
pub fn validate_source_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => bail!("--path 不是資料夾: {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("--path 指定的路徑不存在: {}", path.display())
        }
        Err(e) => Err(e).with_context(|| format!("無法讀取 --path: {}", path.display())),
    }
}

/// 遞迴建立 `--dest` 資料夾，已存在時不做任何事
pub fn ensure_dest_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("無法建立 --dest 資料夾: {}", path.display()))
}
