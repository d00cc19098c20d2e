pub mod history;
pub mod save;
pub mod table;
pub mod transcode;

/// Number of seats at the table.
pub const N: usize = 6;

/// Line prefix that opens every hand record in the source dialect.
pub const HAND_MARKER: &str = "PokerStars Zoom Hand";
/// Table name stamped onto every converted hand.
pub const SOLVER_TABLE: &str = "PioSolver Table";
/// Marker line that opens the summary region in both dialects.
pub const SUMMARY_MARKER: &str = "*** SUMMARY ***";
/// Closes every hand in the output stream: the line break terminating the
/// block plus three blank lines, so converted files concatenate cleanly.
pub const HAND_SEPARATOR: &str = "\n\n\n\n";
/// Suffix spliced into the source filename to derive the destination.
pub const OUTPUT_TAG: &str = "-H2N4";
/// Hands between progress log messages during conversion.
pub const PROGRESS_INTERVAL: usize = 1_000;

/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
