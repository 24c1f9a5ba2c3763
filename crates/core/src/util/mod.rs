pub mod file;
pub mod glob;
pub mod value;

pub use file::{check_directory, check_file, get_directory, path_expand};
pub use glob::WhitelistPattern;
pub use value::boolenize;
