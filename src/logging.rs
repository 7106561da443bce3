// Shims over the `log` crate that vanish unless the "logging" feature is on.

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::trace!($($arg)+);
    };
}
