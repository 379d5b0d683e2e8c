mod adapter;

pub use adapter::{FakerText, TEXT_LOCALE};
