pub mod banner;
pub mod fs;
