pub mod sanitize;
pub use sanitize::{NumberKind, Policy, is_valid_number};

pub mod convert;
pub use convert::{Numeric, parse_float_lenient, parse_int_lenient};

pub mod options;
pub use options::{LINE_CAPACITY, OverlongLine, ReadOptions};

pub mod error;
pub use error::ReadError;

pub mod terminal;
pub use terminal::{
    Terminal, color_for_stderr, diagnostic_message, read_float, read_int, stderr_wants_color,
};

cfg_if::cfg_if! {
    if #[cfg(feature = "tokio-dep")] {
        pub mod async_terminal;
        pub use async_terminal::AsyncTerminal;
    }
}
