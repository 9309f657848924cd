pub mod core;
pub mod util;

pub(crate) mod assert;
