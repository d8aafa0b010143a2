//! Route finding through a hex grid of chambers.
//!
//! The search walks from the entrance toward every treasure chamber with a
//! greedy, backtracking depth-first strategy. The current route is always the
//! content of a [`stack::DLStack`], a doubly linked stack that can also remove
//! the k-th item from its top.

// Macros for conditional logging, shared by every module of the crate.
// They call into the `logger` module, which drops messages until
// `logger::init_global_logger` has been called.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            // Use format_args! to create std::fmt::Arguments, avoiding String allocation.
            $crate::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            $crate::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

pub(crate) use verbose_eprintln;
pub(crate) use verbose_println;

pub mod app;
pub mod logger;
pub mod map;
pub mod path;
pub mod stack;
