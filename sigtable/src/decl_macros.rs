// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Syntactic sugar for functions that return a [Result].

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly.
///
/// ```
/// use r3bl_sigtable::throws;
///
/// fn do_work() -> Result<(), std::fmt::Error> {
///     throws!({
///         let _it = 1 + 1;
///     });
/// }
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Shorthand for `Ok(())` and `Ok(value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
