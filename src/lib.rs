pub mod macros;

mod bind;
mod observer;
mod registry;
mod store;

pub use observer::{Callback, Observer};
pub use registry::Handle;
pub use store::{Store, Toggle};
