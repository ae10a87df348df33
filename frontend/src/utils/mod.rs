pub mod cookie;
pub mod format;
pub mod jwt;
pub mod navigation;
pub mod time;
pub mod validation;
