pub mod logging;
pub mod output;
pub mod progress;
pub mod types;
pub mod utils;

pub use logging::*;
pub use output::{load_paper_records, write_json, write_jsonl};
pub use types::*;
pub use utils::*;

pub use progress::{create_count_progress_bar, create_spinner};
