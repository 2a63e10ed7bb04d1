//! These tests change attributes of the test process itself, so they run in
//! their own binary and hold `PRCTL_MTX` while doing so. Each test puts the
//! original value back before it returns.
#![cfg(target_os = "linux")]

use std::ffi::{CStr, CString};

use parking_lot::{const_mutex, Mutex};

use prctl::errno::Errno;
use prctl::option::{self, Decode};
use prctl::{
    get, prctl, set, Error, Value, DUMPABLE, FPEMU, FPEXC, KEEPCAPS, MAX_ENTRY,
    NAME, PDEATHSIG, TIMING, UNALIGN,
};

static PRCTL_MTX: Mutex<()> = const_mutex(());

#[test]
fn test_get_every_option() {
    let _m = PRCTL_MTX.lock();

    for (i, entry) in option::entries().iter().enumerate() {
        let option = i as libc::c_int;
        match prctl(option, None) {
            Ok(value) => match entry.decode() {
                Decode::ReturnValue => {
                    assert!(matches!(value, Value::Integer(_)), "{}", entry.name())
                }
                Decode::BufferInt => {
                    assert!(matches!(value, Value::SignedInteger(_)), "{}", entry.name())
                }
                Decode::BufferText => {
                    assert!(matches!(value, Value::Text(_)), "{}", entry.name())
                }
            },
            // Architecture dependent, most kernels only implement some of these
            Err(Error::Sys(Errno::EINVAL))
                if [UNALIGN, FPEMU, FPEXC].contains(&option)
                    || !entry.is_supported() => {}
            Err(e) => panic!("get {} failed: {}", entry.name(), e),
        }
    }
}

#[test]
fn test_get_set_keepcaps() {
    let _m = PRCTL_MTX.lock();
    let original = get(KEEPCAPS).unwrap();

    for keepcaps in [1, 0, 1] {
        assert_eq!(prctl(KEEPCAPS, Some(Value::Integer(keepcaps))), Ok(Value::Unit));
        assert_eq!(prctl(KEEPCAPS, None), Ok(Value::Integer(keepcaps)));
    }

    prctl(KEEPCAPS, Some(original)).unwrap();
}

#[test]
fn test_get_set_dumpable() {
    let _m = PRCTL_MTX.lock();
    let original = get(DUMPABLE).unwrap();

    set(DUMPABLE, false).unwrap();
    assert_eq!(get(DUMPABLE), Ok(Value::Integer(0)));

    set(DUMPABLE, original).unwrap();
}

#[cfg_attr(qemu, ignore)]
#[test]
fn test_get_set_pdeathsig() {
    let _m = PRCTL_MTX.lock();
    let original = get(PDEATHSIG).unwrap();

    set(PDEATHSIG, libc::SIGUSR1).unwrap();
    assert_eq!(get(PDEATHSIG), Ok(Value::SignedInteger(libc::SIGUSR1)));

    set(PDEATHSIG, original).unwrap();
}

#[test]
fn test_get_set_name() {
    let _m = PRCTL_MTX.lock();
    let original = get(NAME).unwrap();

    let long_name = "0123456789abcdefghijklmn";
    set(NAME, long_name).unwrap();
    // name truncated by kernel to TASK_COMM_LEN
    assert_eq!(
        get(NAME),
        Ok(Value::Text(CString::new(&long_name[..15]).unwrap()))
    );

    let short_name = CStr::from_bytes_with_nul(b"01234567\0").unwrap();
    set(NAME, short_name).unwrap();
    assert_eq!(get(NAME), Ok(Value::from(short_name)));

    prctl(NAME, Some(original)).unwrap();
}

#[test]
fn test_get_timing() {
    let _m = PRCTL_MTX.lock();
    assert_eq!(get(TIMING), Ok(Value::Integer(libc::PR_TIMING_STATISTICAL.into())));
}

#[test]
fn test_system_error() {
    let _m = PRCTL_MTX.lock();

    let err = set(PDEATHSIG, 1000).unwrap_err();
    assert_eq!(err, Error::Sys(Errno::EINVAL));
    assert_eq!(err.raw_os_error(), Some(libc::EINVAL));

    // narrowed to a huge unsigned long, not a valid signal either
    assert_eq!(set(PDEATHSIG, -1), Err(Error::Sys(Errno::EINVAL)));

    // SUID_DUMP_ROOT cannot be requested through prctl
    assert_eq!(set(DUMPABLE, 2), Err(Error::Sys(Errno::EINVAL)));

    assert_eq!(
        set(TIMING, libc::PR_TIMING_TIMESTAMP),
        Err(Error::Sys(Errno::EINVAL))
    );
}

#[test]
fn test_rejected_calls_change_nothing() {
    let _m = PRCTL_MTX.lock();
    let keepcaps = get(KEEPCAPS).unwrap();
    let name = get(NAME).unwrap();

    assert_eq!(set(MAX_ENTRY + 1, 1), Err(Error::InvalidOption(MAX_ENTRY + 1)));
    assert_eq!(set(-1, "other"), Err(Error::InvalidOption(-1)));
    assert!(matches!(set(NAME, 5), Err(Error::TypeMismatch { .. })));
    assert!(matches!(set(KEEPCAPS, "1"), Err(Error::TypeMismatch { .. })));

    assert_eq!(get(KEEPCAPS), Ok(keepcaps));
    assert_eq!(get(NAME), Ok(name));
}

#[cfg(feature = "typed")]
mod typed_accessors {
    use super::*;

    use prctl::flags::{FpExcFlags, FpemuFlags, PrctlEndian, PrctlTiming, UnalignFlags};
    use prctl::{typed, ENDIAN};

    // Not every architecture implements these; the kernel answers EINVAL.
    fn unimplemented<T>(res: &prctl::Result<T>) -> bool {
        matches!(res, Err(Error::Sys(Errno::EINVAL)))
    }

    #[test]
    fn test_typed_keepcaps() {
        let _m = PRCTL_MTX.lock();
        let original = typed::get_keepcaps().unwrap();

        typed::set_keepcaps(true).unwrap();
        assert!(typed::get_keepcaps().unwrap());
        typed::set_keepcaps(false).unwrap();
        assert!(!typed::get_keepcaps().unwrap());

        typed::set_keepcaps(original).unwrap();
    }

    #[test]
    fn test_typed_dumpable() {
        let _m = PRCTL_MTX.lock();
        let original = typed::get_dumpable().unwrap();

        typed::set_dumpable(false).unwrap();
        assert!(!typed::get_dumpable().unwrap());

        typed::set_dumpable(original).unwrap();
    }

    #[cfg_attr(qemu, ignore)]
    #[test]
    fn test_typed_pdeathsig() {
        let _m = PRCTL_MTX.lock();
        let original = typed::get_pdeathsig().unwrap();

        typed::set_pdeathsig(libc::SIGUSR2).unwrap();
        assert_eq!(typed::get_pdeathsig().unwrap(), libc::SIGUSR2);

        typed::set_pdeathsig(original).unwrap();
    }

    #[test]
    fn test_typed_name() {
        let _m = PRCTL_MTX.lock();
        let original = typed::get_name().unwrap();

        let name = CStr::from_bytes_with_nul(b"typed-name\0").unwrap();
        typed::set_name(name).unwrap();
        assert_eq!(typed::get_name().unwrap().as_c_str(), name);

        typed::set_name(&original).unwrap();
    }

    #[test]
    fn test_typed_timing() {
        let _m = PRCTL_MTX.lock();

        assert_eq!(typed::get_timing(), Ok(PrctlTiming::PR_TIMING_STATISTICAL));
        assert_eq!(
            typed::set_timing(PrctlTiming::PR_TIMING_TIMESTAMP),
            Err(Error::Sys(Errno::EINVAL))
        );
        typed::set_timing(PrctlTiming::PR_TIMING_STATISTICAL).unwrap();
    }

    #[test]
    fn test_typed_unalign() {
        let _m = PRCTL_MTX.lock();
        let res = typed::get_unalign();
        if unimplemented(&res) {
            return;
        }
        let original: UnalignFlags = res.unwrap();

        typed::set_unalign(original).unwrap();
        assert_eq!(typed::get_unalign(), Ok(original));
    }

    #[test]
    fn test_typed_fpemu() {
        let _m = PRCTL_MTX.lock();
        let res = typed::get_fpemu();
        if unimplemented(&res) {
            return;
        }
        let original: FpemuFlags = res.unwrap();

        typed::set_fpemu(original).unwrap();
        assert_eq!(typed::get_fpemu(), Ok(original));
    }

    #[test]
    fn test_typed_fpexc() {
        let _m = PRCTL_MTX.lock();
        let res = typed::get_fpexc();
        if unimplemented(&res) {
            return;
        }
        let original: FpExcFlags = res.unwrap();

        typed::set_fpexc(original).unwrap();
        assert_eq!(typed::get_fpexc(), Ok(original));
    }

    #[test]
    fn test_typed_endian() {
        let _m = PRCTL_MTX.lock();
        let res = typed::get_endian();
        if !option::entry(ENDIAN).unwrap().is_supported() {
            assert!(unimplemented(&res));
            return;
        }
        let original: PrctlEndian = res.unwrap();

        typed::set_endian(original).unwrap();
        assert_eq!(typed::get_endian(), Ok(original));
    }
}
