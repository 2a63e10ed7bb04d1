use libc::{c_int, c_ulong};

use crate::errno::Errno;
use crate::option::{self, Decode, GetBuffer, OptionEntry};
use crate::{Result, Value};

/// Get or set a process attribute
/// [prctl(2)](https://man7.org/linux/man-pages/man2/prctl.2.html)
///
/// `option` is one of the index constants ([`PDEATHSIG`](crate::PDEATHSIG)
/// through [`ENDIAN`](crate::ENDIAN)). Without a value the current setting
/// is returned; with one the attribute is changed and [`Value::Unit`] is
/// returned.
///
/// Fails with [`Error::InvalidOption`](crate::Error::InvalidOption) for an
/// unknown index and [`Error::TypeMismatch`](crate::Error::TypeMismatch) for
/// a value of the wrong kind, both before the kernel is entered, and with
/// [`Error::Sys`](crate::Error::Sys) if the system call fails.
pub fn prctl(option: c_int, value: Option<Value>) -> Result<Value> {
    let entry = option::entry(option)?;

    match value {
        Some(value) => set_entry(option, entry, &value).map(|()| Value::Unit),
        None => get_entry(entry),
    }
}

/// Read the current setting of `option`.
pub fn get(option: c_int) -> Result<Value> {
    get_entry(option::entry(option)?)
}

/// Change the setting of `option`.
pub fn set<V: Into<Value>>(option: c_int, value: V) -> Result<()> {
    let entry = option::entry(option)?;
    set_entry(option, entry, &value.into())
}

/// Read `option` like [`get`], but decode the result with `decode` instead
/// of the table's policy.
///
/// Several `PR_GET_*` calls store the setting through the get pointer and
/// return 0; the table keeps the raw return value for those.
#[cfg(feature = "typed")]
pub(crate) fn get_with(option: c_int, decode: Decode) -> Result<Value> {
    get_decoded(option::entry(option)?, decode)
}

fn get_entry(entry: &OptionEntry) -> Result<Value> {
    get_decoded(entry, entry.decode())
}

fn get_decoded(entry: &OptionEntry, decode: Decode) -> Result<Value> {
    let mut buf = GetBuffer::new();

    log::trace!("PR_GET {} ({})", entry.name(), entry.get_code());
    let res = raw_prctl(entry.get_code(), buf.as_mut_ptr() as c_ulong)
        .map_err(|e| failed(entry, "get", e))?;

    Ok(decode.decode(res, &buf))
}

fn set_entry(option: c_int, entry: &OptionEntry, value: &Value) -> Result<()> {
    let arg = entry.encode().encode(option, value)?;

    log::trace!("PR_SET {} ({}) = {}", entry.name(), entry.set_code(), value);
    raw_prctl(entry.set_code(), arg.as_raw())
        .map(drop)
        .map_err(|e| failed(entry, "set", e))
}

fn failed(entry: &OptionEntry, what: &str, errno: Errno) -> crate::Error {
    log::debug!("{} {} failed: {}", what, entry.name(), errno);
    errno.into()
}

fn raw_prctl(option: c_int, arg2: c_ulong) -> std::result::Result<c_int, Errno> {
    let res = unsafe {
        libc::prctl(option, arg2, 0 as c_ulong, 0 as c_ulong, 0 as c_ulong)
    };

    if res < 0 {
        Err(Errno::last())
    } else {
        Ok(res)
    }
}
