//! Live photo 整理元件
//!
//! 找出 iPhone live photo 的 `.mov` 動態檔（與靜態圖片同名），
//! 並將其移動到指定目錄或刪除

mod main;
mod matcher;
mod organizer;
mod prompt;

pub use main::{LivePhotoSorter, SortOutcome};
pub use matcher::{MOTION_EXTENSION, STILL_EXTENSIONS, find_live_photos};
pub use organizer::{LivePhotoOrganizer, OrganizeResult};
pub use prompt::{ConfirmPrompt, TerminalPrompt};
