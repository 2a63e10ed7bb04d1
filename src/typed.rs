//! Typed accessors for each option in the table.
//!
//! These go through the same option table as [`prctl`](crate::prctl) and
//! add the conversion between [`Value`] and a type fitting the attribute.
//! `UNALIGN`, `FPEMU`, `FPEXC` and `ENDIAN` are read from the integer the
//! kernel stores through the get pointer rather than the return value.
use std::ffi::{CStr, CString};

use libc::c_int;

use crate::flags::{FpExcFlags, FpemuFlags, PrctlEndian, PrctlTiming, UnalignFlags};
use crate::dispatch::get_with;
use crate::option::{Decode, Encode};
use crate::{
    get, set, Error, Result, Value, DUMPABLE, ENDIAN, FPEMU, FPEXC, KEEPCAPS,
    NAME, PDEATHSIG, TIMING, UNALIGN,
};

/// Options whose `PR_GET_*` stores the setting through the pointer argument
/// and returns 0.
const STORED: Decode = Decode::BufferInt;

fn get_int(option: c_int) -> Result<c_int> {
    int_value(option, get(option)?)
}

fn get_stored(option: c_int) -> Result<c_int> {
    int_value(option, get_with(option, STORED)?)
}

fn int_value(option: c_int, value: Value) -> Result<c_int> {
    match value {
        Value::SignedInteger(i) => Ok(i),
        Value::Integer(i) => Ok(i as c_int),
        other => Err(Error::TypeMismatch {
            option,
            expected: Encode::Integer,
            found: other.kind(),
        }),
    }
}

fn get_bool(option: c_int) -> Result<bool> {
    get_int(option).map(|i| i != 0)
}

/// Get the signal the calling process receives when its parent dies, or 0
/// if none is set.
pub fn get_pdeathsig() -> Result<c_int> {
    get_int(PDEATHSIG)
}

/// Set the parent-death signal of the calling process. 0 clears it.
pub fn set_pdeathsig(signal: c_int) -> Result<()> {
    set(PDEATHSIG, signal)
}

/// Get the "dumpable" flag of the calling process.
pub fn get_dumpable() -> Result<bool> {
    get_bool(DUMPABLE)
}

/// Set the "dumpable" flag of the calling process.
pub fn set_dumpable(dumpable: bool) -> Result<()> {
    set(DUMPABLE, dumpable)
}

/// Get the unaligned access control bits.
pub fn get_unalign() -> Result<UnalignFlags> {
    get_stored(UNALIGN).map(UnalignFlags::from_bits_retain)
}

/// Set the unaligned access control bits.
pub fn set_unalign(flags: UnalignFlags) -> Result<()> {
    set(UNALIGN, flags.bits())
}

/// Get the "keep capabilities" flag of the calling thread.
pub fn get_keepcaps() -> Result<bool> {
    get_bool(KEEPCAPS)
}

/// Set the "keep capabilities" flag of the calling thread. It is cleared on
/// execve().
pub fn set_keepcaps(keepcaps: bool) -> Result<()> {
    set(KEEPCAPS, keepcaps)
}

/// Get the floating-point emulation control bits.
pub fn get_fpemu() -> Result<FpemuFlags> {
    get_stored(FPEMU).map(FpemuFlags::from_bits_retain)
}

/// Set the floating-point emulation control bits.
pub fn set_fpemu(flags: FpemuFlags) -> Result<()> {
    set(FPEMU, flags.bits())
}

/// Get the floating-point exception mode.
pub fn get_fpexc() -> Result<FpExcFlags> {
    get_stored(FPEXC).map(FpExcFlags::from_bits_retain)
}

/// Set the floating-point exception mode.
pub fn set_fpexc(flags: FpExcFlags) -> Result<()> {
    set(FPEXC, flags.bits())
}

/// Get the process timing method.
pub fn get_timing() -> Result<PrctlTiming> {
    PrctlTiming::try_from(get_int(TIMING)?)
}

/// Set the process timing method. Linux rejects
/// [`PR_TIMING_TIMESTAMP`](PrctlTiming::PR_TIMING_TIMESTAMP) with `EINVAL`.
pub fn set_timing(timing: PrctlTiming) -> Result<()> {
    set(TIMING, c_int::from(timing))
}

/// Get the name of the calling thread.
pub fn get_name() -> Result<CString> {
    match get(NAME)? {
        Value::Text(name) => Ok(name),
        other => Err(Error::TypeMismatch {
            option: NAME,
            expected: Encode::Text,
            found: other.kind(),
        }),
    }
}

/// Set the name of the calling thread. The kernel truncates it to
/// `TASK_COMM_LEN - 1` (15) bytes.
pub fn set_name(name: &CStr) -> Result<()> {
    set(NAME, name)
}

/// Get the byte order of the calling process.
pub fn get_endian() -> Result<PrctlEndian> {
    PrctlEndian::try_from(get_stored(ENDIAN)?)
}

/// Set the byte order of the calling process. Only PowerPC implements this.
pub fn set_endian(endian: PrctlEndian) -> Result<()> {
    set(ENDIAN, c_int::from(endian))
}
