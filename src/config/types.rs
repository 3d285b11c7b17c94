use std::path::PathBuf;

/// 預設的 live photo 目標資料夾名稱
pub const DEFAULT_DEST_FOLDER: &str = "live_photos";

/// 找到 live photo 之後要做的事
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// 移動到目標資料夾
    #[default]
    Move,
    /// 直接刪除，不會退回移動
    Delete,
}

/// 一次執行的完整設定，由命令列參數建立後明確傳遞
#[derive(Debug, Clone)]
pub struct Config {
    /// 要掃描的資料夾
    pub source_dir: PathBuf,
    /// 移動模式的目標資料夾
    pub dest_dir: PathBuf,
    /// 移動後檔名前綴
    pub prefix: Option<String>,
    pub mode: SortMode,
    /// 刪除前不詢問
    pub force: bool,
    /// 輸出每個檔案的操作
    pub verbose: bool,
}

impl Config {
    /// 以預設值建立設定，主要給測試與程式化呼叫使用
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            prefix: None,
            mode: SortMode::Move,
            force: false,
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SortMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}
