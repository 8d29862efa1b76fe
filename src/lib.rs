pub mod config;
pub mod date_parser;
pub mod document;
pub mod schedule;
pub mod utils;

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use date_parser::parse_date;
pub use document::{collect_full_text, DocumentError, PageSource, TextPages};
pub use schedule::{extract_schedule, extract_schedule_at, ExtractedScheduleItem};
pub use utils::sanitize_file_name;
