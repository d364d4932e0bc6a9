mod coerce;
mod reader;
mod tokenizer;
mod types;

pub use coerce::{TimestampMode, parse_int, parse_timestamp};
pub use reader::LogReader;
pub use tokenizer::Tokenizer;
pub use types::*;
