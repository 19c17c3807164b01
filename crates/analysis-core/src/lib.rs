pub mod access;
pub mod error;
pub mod numeric;
pub mod traits;
pub mod types;

pub use access::*;
pub use error::*;
pub use numeric::{normalize, round_to, safe_divide, safe_percent};
pub use traits::*;
pub use types::*;
