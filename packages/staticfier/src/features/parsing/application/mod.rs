mod parse_file;

pub use parse_file::{parse_java, ParseFileUseCase};
