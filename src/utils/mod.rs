pub mod paths;
pub mod terminal;

pub use paths::{dotted_extension, file_stem, open_bounded_file};
pub use terminal::strip_ansi_codes;
