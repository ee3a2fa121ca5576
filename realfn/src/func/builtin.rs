use super::core::RealFunc;

const BUILTIN_NAMES: &[&str] = &["exp", "log", "sin", "tan"];

/// Look up a parameterless built-in function by name.
pub fn builtin(name: &str) -> Option<RealFunc> {
    match name {
        "exp" => Some(RealFunc::exp()),
        "log" => Some(RealFunc::log()),
        "sin" => Some(RealFunc::sin()),
        "tan" => Some(RealFunc::tan()),
        _ => None,
    }
}

/// The names [`builtin`] resolves.
pub fn builtin_names() -> &'static [&'static str] {
    BUILTIN_NAMES
}
