use anyhow::Result;
use clap::Parser;
use console::style;
use live_photo_sorter::cli::Cli;
use live_photo_sorter::component::LivePhotoSorter;
use live_photo_sorter::component::live_photo_sorter::TerminalPrompt;
use live_photo_sorter::config::Config;
use live_photo_sorter::init::init_logger;
use log::warn;

fn main() {
    if let Err(e) = run(Cli::parse()) {
        warn!("程式錯誤: {e:#}");
        eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    init_logger(config.verbose);

    LivePhotoSorter::new(config).run(&TerminalPrompt)?;
    Ok(())
}
