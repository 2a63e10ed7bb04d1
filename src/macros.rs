/// The `libc_bitflags!` macro helps with a common use case of defining a public bitflags type
/// with values from the libc crate. It is used the same way as the `bitflags!` macro, except
/// that only the name of the flag value has to be given.
///
/// The `libc` crate must be in scope with the name `libc`.
///
/// # Example
/// ```ignore
/// libc_bitflags!{
///     pub struct UnalignFlags: libc::c_int {
///         PR_UNALIGN_NOPRINT;
///         /// Deliver SIGBUS on unaligned user access
///         PR_UNALIGN_SIGBUS;
///     }
/// }
/// ```
macro_rules! libc_bitflags {
    (
        $(#[$outer:meta])*
        pub struct $BitFlags:ident: $T:ty {
            $(
                $(#[$inner:ident $($args:tt)*])*
                $Flag:ident $(as $cast:ty)*;
            )+
        }
    ) => {
        ::bitflags::bitflags! {
            #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
            #[repr(transparent)]
            $(#[$outer])*
            pub struct $BitFlags: $T {
                $(
                    $(#[$inner $($args)*])*
                    const $Flag = libc::$Flag $(as $cast)*;
                )+
            }
        }
    };
}

/// The `libc_enum!` macro helps with a common use case of defining an enum exclusively using
/// values from the `libc` crate. The `impl TryFrom<$repr>` clause generates a conversion from
/// the raw kernel value that fails with `EINVAL` for values the enum does not name.
///
/// The `libc` crate must be in scope with the name `libc`.
///
/// # Example
/// ```ignore
/// libc_enum! {
///     #[repr(i32)]
///     pub enum PrctlTiming {
///         PR_TIMING_STATISTICAL,
///         PR_TIMING_TIMESTAMP,
///     }
///     impl TryFrom<i32>
/// }
/// ```
macro_rules! libc_enum {
    (
        $(#[$enum_attr:meta])*
        $v:vis enum $Enum:ident {
            $(
                $(#[$attr:meta])*
                $entry:ident
            ),* $(,)?
        }
        impl TryFrom<$repr:ty>
    ) => {
        $(#[$enum_attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $v enum $Enum {
            $(
                $(#[$attr])*
                $entry = libc::$entry
            ),*
        }

        impl ::std::convert::TryFrom<$repr> for $Enum {
            type Error = $crate::Error;

            #[allow(unused_doc_comments)]
            fn try_from(x: $repr) -> $crate::Result<Self> {
                match x {
                    $(
                        $(#[$attr])*
                        libc::$entry => Ok(Self::$entry),
                    )*
                    _ => Err($crate::Errno::EINVAL.into())
                }
            }
        }

        impl From<$Enum> for $repr {
            fn from(value: $Enum) -> $repr {
                value as $repr
            }
        }
    };
}

/// Defines the option table: one public index constant per entry and the
/// `OPTION_TABLE` static holding the entries in index order.
///
/// Indices must be written out contiguously from zero; `OPTION_TABLE[i]` is
/// the entry whose constant equals `i`.
macro_rules! option_table {
    (
        $(
            $(#[$attr:meta])*
            $name:ident = $index:literal {
                get: $get:ident,
                set: $set:ident,
                decode: $decode:ident,
                encode: $encode:ident,
                supported: $supported:expr,
                desc: $desc:literal $(,)?
            }
        ),+ $(,)?
    ) => {
        $(
            $(#[$attr])*
            pub const $name: c_int = $index;
        )+

        static OPTION_TABLE: &[OptionEntry] = &[
            $(
                OptionEntry {
                    name: stringify!($name),
                    description: $desc,
                    get: libc::$get,
                    set: libc::$set,
                    decode: Decode::$decode,
                    encode: Encode::$encode,
                    supported: $supported,
                },
            )+
        ];
    };
}
