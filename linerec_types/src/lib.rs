pub mod io_utils;
pub mod serde;
pub mod types;
