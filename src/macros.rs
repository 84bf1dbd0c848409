/// Imports (`use`s) `fs`.
///
/// With the `fs-err` feature enabled this imports
/// [`fs_err as fs`](https://docs.rs/fs-err), so that IO errors carry
/// the offending path in their message. Otherwise it imports [`std::fs`].
///
/// Expands to
/// ```no_run
/// #[cfg(not(feature = "fs-err"))]
/// use std::fs;
///
/// #[cfg(feature = "fs-err")]
/// use fs_err as fs;
/// ```
macro_rules! use_enabled_fs_module {
    () => {
        #[cfg(not(feature = "fs-err"))]
        use std::fs;

        #[cfg(feature = "fs-err")]
        use fs_err as fs;
    };
}

pub(crate) use use_enabled_fs_module;
