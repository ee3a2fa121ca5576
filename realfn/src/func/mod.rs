mod builtin;
mod bulk;
mod core;
mod ops;

pub use self::builtin::{builtin, builtin_names};
pub use self::core::{RealFunc, Rule};
