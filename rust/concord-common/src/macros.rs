/// Unwraps a `Result` inside a function returning `Option<Result<T, E>>`.
///
/// `Ok(t)` yields `t`; `Err(e)` makes the enclosing function return
/// `Some(Err(e))`. Meant for `next()` of iterators over fallible sources,
/// such as line readers.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err.into()));
            }
        }
    };
}
