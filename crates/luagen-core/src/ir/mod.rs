pub mod context;
pub mod example;
pub mod operations;
pub mod schemas;

pub use context::{IrInfo, SdkContext};
pub use example::ExampleValue;
pub use operations::*;
pub use schemas::*;
