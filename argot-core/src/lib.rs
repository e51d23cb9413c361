mod dialect;
mod error;
mod registry;
mod types;
mod util;
mod value;

pub use dialect::*;
pub use error::*;
pub use registry::*;
pub use types::*;
pub use util::*;
pub use value::*;
