//! Rust friendly bindings to the Linux [prctl(2)] process attribute options.
//!
//! A fixed table maps symbolic option names to the kernel's `PR_GET_*` and
//! `PR_SET_*` codes. The table index is the public option identifier: pass it
//! to [`prctl`] without a value to read the attribute, or with a value to
//! change it.
//!
//! ```no_run
//! use prctl::{prctl, Value, KEEPCAPS, NAME};
//!
//! # fn main() -> prctl::Result<()> {
//! prctl(KEEPCAPS, Some(Value::from(true)))?;
//! assert_eq!(prctl(KEEPCAPS, None)?, Value::Integer(1));
//!
//! prctl(NAME, Some(Value::from("worker")))?;
//! println!("{}", prctl(NAME, None)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature flags
//!
//! * `typed` (default): per-option accessors such as
//!   [`get_keepcaps`](typed::get_keepcaps) and the flag types they use.
//!
//! [prctl(2)]: https://man7.org/linux/man-pages/man2/prctl.2.html
#![crate_name = "prctl"]
#![deny(unused)]
#![allow(unused_macros)]
#![deny(unstable_features)]
#![deny(missing_debug_implementations)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::cast_ptr_alignment)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(non_camel_case_types)]

#[macro_use]
mod macros;

cfg_if::cfg_if! {
    if #[cfg(linux)] {
        mod dispatch;
        pub mod errno;
        pub mod option;
        mod value;

        #[cfg(feature = "typed")]
        #[cfg_attr(docsrs, doc(cfg(feature = "typed")))]
        pub mod flags;
        #[cfg(feature = "typed")]
        #[cfg_attr(docsrs, doc(cfg(feature = "typed")))]
        pub mod typed;

        pub use crate::dispatch::{get, prctl, set};
        pub use crate::errno::Errno;
        pub use crate::option::{
            DUMPABLE, ENDIAN, FPEMU, FPEXC, KEEPCAPS, MAX_ENTRY, MIN_ENTRY,
            NAME, PDEATHSIG, TIMING, UNALIGN,
        };
        pub use crate::value::{Value, ValueKind};

        use std::{error, fmt, io};

        use libc::c_int;

        use crate::option::Encode;

        /// Prctl Result Type
        pub type Result<T> = std::result::Result<T, Error>;

        /// Errors returned by [`prctl`] and the functions built on it.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Error {
            /// The option index is outside `MIN_ENTRY..=MAX_ENTRY`.
            InvalidOption(c_int),
            /// The value cannot be marshalled for the option.
            TypeMismatch {
                /// Index of the option being set.
                option: c_int,
                /// Representation the option takes.
                expected: Encode,
                /// Representation that was supplied.
                found: ValueKind,
            },
            /// The system call failed.
            Sys(Errno),
        }

        impl Error {
            /// The errno of a failed system call, if this is one.
            pub const fn errno(&self) -> Option<Errno> {
                match *self {
                    Error::Sys(errno) => Some(errno),
                    _ => None,
                }
            }

            /// The raw platform error code of a failed system call.
            pub const fn raw_os_error(&self) -> Option<i32> {
                match *self {
                    Error::Sys(errno) => Some(errno as i32),
                    _ => None,
                }
            }
        }

        impl From<Errno> for Error {
            fn from(errno: Errno) -> Error {
                Error::Sys(errno)
            }
        }

        impl From<Error> for io::Error {
            fn from(err: Error) -> Self {
                match err {
                    Error::Sys(errno) => errno.into(),
                    other => io::Error::new(io::ErrorKind::InvalidInput, other),
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match *self {
                    Error::InvalidOption(option) => {
                        write!(f, "invalid option: {}", option)
                    }
                    Error::TypeMismatch { option, expected, found } => write!(
                        f,
                        "option/value type error: option {} takes {:?}, got {:?}",
                        option, expected, found
                    ),
                    Error::Sys(errno) => write!(f, "{}", errno),
                }
            }
        }

        impl error::Error for Error {
            fn source(&self) -> Option<&(dyn error::Error + 'static)> {
                match self {
                    Error::Sys(errno) => Some(errno),
                    _ => None,
                }
            }
        }
    }
}
