mod blanket_impls;

mod traits;
pub use traits::*;
pub mod path_type;
