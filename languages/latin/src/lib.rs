pub mod entry;
pub mod gender;
pub mod heading;
pub mod processor;

pub use entry::{PosNotation, parse_entry};
pub use gender::split_gender;
pub use heading::{is_heading, normalize_title};
pub use processor::LatinGrammar;
