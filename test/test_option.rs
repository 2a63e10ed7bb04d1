//! Table lookups and argument checks. Nothing here reaches the kernel.
use std::ffi::CString;

use libc::c_int;

use prctl::option::{self, Decode, Encode, OptionEntry};
use prctl::{
    prctl, set, Error, Value, ValueKind, DUMPABLE, ENDIAN, KEEPCAPS, MAX_ENTRY,
    MIN_ENTRY, NAME, PDEATHSIG, TIMING,
};

#[test]
fn test_constants_are_indices() {
    assert_eq!(MIN_ENTRY, 0);
    assert_eq!(PDEATHSIG, 0);
    assert_eq!(NAME, 7);
    assert_eq!(ENDIAN, 8);
    assert_eq!(MAX_ENTRY, ENDIAN);
    assert_eq!(option::entries().len(), (MAX_ENTRY - MIN_ENTRY + 1) as usize);
}

#[test]
fn test_entries_in_order() {
    let names: Vec<_> = option::entries().iter().map(OptionEntry::name).collect();
    assert_eq!(
        names,
        [
            "PDEATHSIG", "DUMPABLE", "UNALIGN", "KEEPCAPS", "FPEMU", "FPEXC",
            "TIMING", "NAME", "ENDIAN"
        ]
    );
    for e in option::entries() {
        assert!(!e.description().is_empty());
    }
}

#[test]
fn test_lookup() {
    assert_eq!(option::lookup("KEEPCAPS"), Some(KEEPCAPS));
    assert_eq!(option::lookup("TIMING"), Some(TIMING));
    assert_eq!(option::lookup("keepcaps"), None);
    assert_eq!(option::lookup(""), None);
}

#[test]
fn test_invalid_option() {
    for option in [MIN_ENTRY - 1, MAX_ENTRY + 1, c_int::MAX, c_int::MIN] {
        assert_eq!(prctl(option, None), Err(Error::InvalidOption(option)));
        assert_eq!(
            prctl(option, Some(Value::Integer(1))),
            Err(Error::InvalidOption(option))
        );
        assert_eq!(set(option, "name"), Err(Error::InvalidOption(option)));
        assert_eq!(option::entry(option), Err(Error::InvalidOption(option)));
    }
}

#[test]
fn test_name_needs_text() {
    for value in [Value::Integer(1), Value::SignedInteger(1), Value::Unit] {
        let kind = value.kind();
        assert_eq!(
            prctl(NAME, Some(value)),
            Err(Error::TypeMismatch {
                option: NAME,
                expected: Encode::Text,
                found: kind,
            })
        );
    }
}

#[test]
fn test_integer_options_need_integers() {
    for option in option::entries()
        .iter()
        .filter(|e| e.encode() == Encode::Integer)
        .map(|e| option::lookup(e.name()).unwrap())
    {
        let text = Value::Text(CString::new("1").unwrap());
        assert_eq!(
            prctl(option, Some(text)),
            Err(Error::TypeMismatch {
                option,
                expected: Encode::Integer,
                found: ValueKind::Text,
            })
        );
        assert!(matches!(
            prctl(option, Some(Value::Unit)),
            Err(Error::TypeMismatch { .. })
        ));
    }
}

#[test]
fn test_type_mismatch_display() {
    let err = set(DUMPABLE, "yes").unwrap_err();
    assert!(err.to_string().starts_with("option/value type error"));
}

#[test]
fn test_decode_policy_per_option() {
    let decode = |option| option::entry(option).unwrap().decode();
    assert_eq!(decode(PDEATHSIG), Decode::BufferInt);
    assert_eq!(decode(NAME), Decode::BufferText);
    assert_eq!(decode(KEEPCAPS), Decode::ReturnValue);
}

#[test]
fn test_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OptionEntry>();
    assert_send_sync::<Value>();
    assert_send_sync::<Error>();
    assert_send_sync::<prctl::Errno>();
}
