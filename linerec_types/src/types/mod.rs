mod serializable;

pub use serializable::*;
