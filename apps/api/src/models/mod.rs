pub mod directory;
pub mod showcase;
