//! Result alias and the precondition checks shared by the concord crates.

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with an `InvalidArgument` error when `$expr` is false.
///
/// The argument name and the stringified condition become the error's
/// `name` and `message`.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Returns early with an `InvalidFormat` error when `$expr` is false.
///
/// Used for data read from outside the process, such as stop-word files.
#[macro_export]
macro_rules! verify_data {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_data(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(invalid_arg(name, condition))
    }
}

#[inline]
pub fn verify_data(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(invalid_format(name, condition))
    }
}

#[cold]
fn invalid_arg(name: &str, condition: &str) -> crate::error::Error {
    crate::error::Error::invalid_arg(name, condition)
}

#[cold]
fn invalid_format(element: &str, condition: &str) -> crate::error::Error {
    crate::error::Error::invalid_format(element, condition)
}
