pub mod format;
pub mod iso;
