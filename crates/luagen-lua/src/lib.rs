pub mod emitters;
pub mod generator;
pub mod literal;

pub use generator::{EmitError, LuaClientGenerator};
