pub mod fetch;
pub mod format;
pub mod navigation;
pub mod time;
pub mod window;
