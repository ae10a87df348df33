mod form;
mod panel;
pub mod utils;

pub use panel::AdminToursPage;
