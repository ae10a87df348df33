pub mod meta;
pub mod seo;
