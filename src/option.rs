//! The static option table.
//!
//! Each entry maps a symbolic option to the kernel's `PR_GET_*`/`PR_SET_*`
//! codes, together with the policies used to marshal values in and out of
//! the system call. The position of an entry in the table is its public
//! identifier, exported as a constant of the same name.
use std::ffi::CStr;
use std::mem;

use libc::{c_int, c_long, c_ulong, c_void};

use crate::{Error, Result, Value};

/// Size of the buffer handed to the kernel on a get. Well above the longest
/// string the kernel reports (`TASK_COMM_LEN` for the process name).
pub const GET_BUFFER_LEN: usize = 1024;

option_table! {
    /// Signal delivered to the calling process when its parent dies.
    PDEATHSIG = 0 {
        get: PR_GET_PDEATHSIG,
        set: PR_SET_PDEATHSIG,
        decode: BufferInt,
        encode: Integer,
        supported: true,
        desc: "Receive signal (as defined by value) on parent exit",
    },
    /// Whether the process may produce a core dump or be ptrace-attached.
    DUMPABLE = 1 {
        get: PR_GET_DUMPABLE,
        set: PR_SET_DUMPABLE,
        decode: ReturnValue,
        encode: Integer,
        supported: true,
        desc: "current->mm->dumpable",
    },
    /// Unaligned access control bits.
    UNALIGN = 2 {
        get: PR_GET_UNALIGN,
        set: PR_SET_UNALIGN,
        decode: ReturnValue,
        encode: Integer,
        supported: true,
        desc: "Unaligned access control bits (if meaningful)",
    },
    /// Whether capabilities survive a setuid() away from uid 0.
    KEEPCAPS = 3 {
        get: PR_GET_KEEPCAPS,
        set: PR_SET_KEEPCAPS,
        decode: ReturnValue,
        encode: Integer,
        supported: true,
        desc: "Whether or not to drop capabilities on setuid() away from uid 0",
    },
    /// Floating-point emulation control bits.
    FPEMU = 4 {
        get: PR_GET_FPEMU,
        set: PR_SET_FPEMU,
        decode: ReturnValue,
        encode: Integer,
        supported: true,
        desc: "Floating-point emulation control bits (if meaningful)",
    },
    /// Floating-point exception mode.
    FPEXC = 5 {
        get: PR_GET_FPEXC,
        set: PR_SET_FPEXC,
        decode: ReturnValue,
        encode: Integer,
        supported: true,
        desc: "Floating-point exception mode (if meaningful)",
    },
    /// Statistical process timing or accurate timestamps.
    TIMING = 6 {
        get: PR_GET_TIMING,
        set: PR_SET_TIMING,
        decode: ReturnValue,
        encode: Integer,
        supported: true,
        desc: "Whether we use statistical process timing or accurate timestamp",
    },
    /// Name of the calling thread.
    NAME = 7 {
        get: PR_GET_NAME,
        set: PR_SET_NAME,
        decode: BufferText,
        encode: Text,
        supported: true,
        desc: "Process name",
    },
    /// Byte order of the calling process. Only implemented by the kernel on
    /// PowerPC; see [`OptionEntry::is_supported`].
    ENDIAN = 8 {
        get: PR_GET_ENDIAN,
        set: PR_SET_ENDIAN,
        decode: ReturnValue,
        encode: Integer,
        supported: cfg!(endian_control),
        desc: "Process endianess",
    },
}

/// Lowest valid option index.
pub const MIN_ENTRY: c_int = PDEATHSIG;
/// Highest valid option index.
pub const MAX_ENTRY: c_int = ENDIAN;

/// How the result of a get is turned into a [`Value`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Decode {
    /// The return value of the system call, as [`Value::Integer`].
    ReturnValue,
    /// A `c_int` the kernel stored at the start of the buffer, as
    /// [`Value::SignedInteger`].
    BufferInt,
    /// A NUL-terminated string the kernel stored in the buffer, as
    /// [`Value::Text`].
    BufferText,
}

impl Decode {
    /// Decode the outcome of a successful get.
    pub fn decode(self, ret: c_int, buf: &GetBuffer) -> Value {
        match self {
            Decode::ReturnValue => Value::Integer(c_long::from(ret)),
            Decode::BufferInt => Value::SignedInteger(buf.int()),
            Decode::BufferText => Value::Text(buf.text().to_owned()),
        }
    }
}

/// The representation a set expects its value in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Encode {
    /// An integer passed directly as the second argument.
    Integer,
    /// A string passed by pointer as the second argument.
    Text,
}

impl Encode {
    /// Marshal `value` for a set of `option`.
    ///
    /// Integers are narrowed to `c_ulong` the way a C cast would. Fails with
    /// [`Error::TypeMismatch`] if `value` has the wrong representation.
    pub fn encode(self, option: c_int, value: &Value) -> Result<SetArg<'_>> {
        match (self, value) {
            (Encode::Integer, &Value::Integer(i)) => Ok(SetArg::Int(i as c_ulong)),
            (Encode::Integer, &Value::SignedInteger(i)) => {
                Ok(SetArg::Int(i as c_ulong))
            }
            (Encode::Text, Value::Text(s)) => Ok(SetArg::Ptr(s)),
            (expected, value) => Err(Error::TypeMismatch {
                option,
                expected,
                found: value.kind(),
            }),
        }
    }
}

/// The second argument of a set, ready for the system call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetArg<'a> {
    /// Passed by value.
    Int(c_ulong),
    /// Passed by address; must outlive the call.
    Ptr(&'a CStr),
}

impl SetArg<'_> {
    /// The argument as the kernel receives it.
    pub fn as_raw(&self) -> c_ulong {
        match *self {
            SetArg::Int(i) => i,
            SetArg::Ptr(s) => s.as_ptr() as c_ulong,
        }
    }
}

/// Zeroed, `c_long`-aligned buffer the kernel writes get results into.
#[repr(C, align(8))]
#[derive(Clone)]
pub struct GetBuffer([u8; GET_BUFFER_LEN]);

impl GetBuffer {
    /// A zero-filled buffer.
    pub const fn new() -> Self {
        GetBuffer([0; GET_BUFFER_LEN])
    }

    /// Wrap bytes as if the kernel had written them.
    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = GetBuffer::new();
        let len = bytes.len().min(GET_BUFFER_LEN);
        buf.0[..len].copy_from_slice(&bytes[..len]);
        buf
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_void {
        self.0.as_mut_ptr().cast()
    }

    fn int(&self) -> c_int {
        let mut raw = [0u8; mem::size_of::<c_int>()];
        raw.copy_from_slice(&self.0[..mem::size_of::<c_int>()]);
        c_int::from_ne_bytes(raw)
    }

    fn text(&self) -> &CStr {
        // The kernel writes at most TASK_COMM_LEN bytes into a zeroed buffer,
        // so a terminator is always present.
        CStr::from_bytes_until_nul(&self.0).unwrap_or_default()
    }
}

impl Default for GetBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GetBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let used = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        f.debug_tuple("GetBuffer").field(&&self.0[..used]).finish()
    }
}

/// One row of the option table.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OptionEntry {
    name: &'static str,
    description: &'static str,
    get: c_int,
    set: c_int,
    decode: Decode,
    encode: Encode,
    supported: bool,
}

impl OptionEntry {
    /// Symbolic name, e.g. `"KEEPCAPS"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description of the attribute.
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Kernel `PR_GET_*` code.
    pub const fn get_code(&self) -> c_int {
        self.get
    }

    /// Kernel `PR_SET_*` code.
    pub const fn set_code(&self) -> c_int {
        self.set
    }

    /// How a get result is decoded.
    pub const fn decode(&self) -> Decode {
        self.decode
    }

    /// What a set expects.
    pub const fn encode(&self) -> Encode {
        self.encode
    }

    /// Whether the kernel of the target platform implements the option.
    ///
    /// Calls on an unsupported option are still issued; the kernel answers
    /// them with `EINVAL`.
    pub const fn is_supported(&self) -> bool {
        self.supported
    }
}

/// Look up the entry for an option index.
pub fn entry(option: c_int) -> Result<&'static OptionEntry> {
    if !(MIN_ENTRY..=MAX_ENTRY).contains(&option) {
        return Err(Error::InvalidOption(option));
    }
    OPTION_TABLE
        .get(option as usize)
        .ok_or(Error::InvalidOption(option))
}

/// All entries, in index order.
pub fn entries() -> &'static [OptionEntry] {
    OPTION_TABLE
}

/// Resolve a symbolic option name to its index.
///
/// ```
/// assert_eq!(prctl::option::lookup("NAME"), Some(prctl::NAME));
/// assert_eq!(prctl::option::lookup("name"), None);
/// ```
pub fn lookup(name: &str) -> Option<c_int> {
    OPTION_TABLE
        .iter()
        .position(|e| e.name == name)
        .map(|i| i as c_int)
}
