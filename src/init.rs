use log::LevelFilter;
use std::io::Write;

/// 初始化日誌，`verbose` 時輸出每個檔案的操作
///
/// `RUST_LOG` 仍可覆蓋預設等級。
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
