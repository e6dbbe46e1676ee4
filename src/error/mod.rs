mod store;
mod togo;

pub use store::StoreError;
pub use togo::{StoreOp, TogoError};
