// Crate-local log macros. In debug builds they go straight to the `log` facade;
// release builds drop the call and its arguments entirely.
// Reports meant for the user are written by the session, never logged.

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        ::log::log!(::log::Level::Debug, $($arg)+)
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)+) => {
        ()
    };
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)+) => {
        ::log::log!(::log::Level::Info, $($arg)+)
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)+) => {
        ()
    };
}

/// Sets up `env_logger` on stderr. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
