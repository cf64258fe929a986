mod console;
mod logging;

pub use console::{write_section, write_table};
pub use logging::init_logging;
