//! Bit flags and enumerations for the values of individual options.
//!
//! Flag types keep bits they do not name, so a value read from the kernel
//! can be written back unchanged.

libc_bitflags! {
    /// Unaligned access control for [`UNALIGN`](crate::UNALIGN).
    pub struct UnalignFlags: libc::c_int {
        /// Silently fix up unaligned user accesses.
        PR_UNALIGN_NOPRINT;
        /// Generate `SIGBUS` on unaligned user access.
        PR_UNALIGN_SIGBUS;
    }
}

libc_bitflags! {
    /// Floating-point emulation control for [`FPEMU`](crate::FPEMU).
    pub struct FpemuFlags: libc::c_int {
        /// Silently emulate floating-point operations.
        PR_FPEMU_NOPRINT;
        /// Don't emulate, send `SIGFPE` instead.
        PR_FPEMU_SIGFPE;
    }
}

libc_bitflags! {
    /// Floating-point exception mode for [`FPEXC`](crate::FPEXC).
    ///
    /// `PR_FP_EXC_NONRECOV`, `PR_FP_EXC_ASYNC` and `PR_FP_EXC_PRECISE` share
    /// the two low bits and select the exception mode; the empty set is
    /// `PR_FP_EXC_DISABLED`.
    pub struct FpExcFlags: libc::c_int {
        /// Use FPEXC for FP exception enables.
        PR_FP_EXC_SW_ENABLE;
        /// Floating-point divide by zero.
        PR_FP_EXC_DIV;
        /// Floating-point overflow.
        PR_FP_EXC_OVF;
        /// Floating-point underflow.
        PR_FP_EXC_UND;
        /// Floating-point inexact result.
        PR_FP_EXC_RES;
        /// Floating-point invalid operation.
        PR_FP_EXC_INV;
        /// Async non-recoverable exception mode.
        PR_FP_EXC_NONRECOV;
        /// Async recoverable exception mode.
        PR_FP_EXC_ASYNC;
        /// Precise exception mode.
        PR_FP_EXC_PRECISE;
    }
}

libc_enum! {
    /// Process timing method for [`TIMING`](crate::TIMING).
    #[repr(i32)]
    #[non_exhaustive]
    pub enum PrctlTiming {
        /// Normal, traditional, statistical process timing.
        PR_TIMING_STATISTICAL,
        /// Accurate timestamp based process timing. Not implemented by Linux.
        PR_TIMING_TIMESTAMP,
    }
    impl TryFrom<i32>
}

libc_enum! {
    /// Byte order of the process for [`ENDIAN`](crate::ENDIAN).
    #[repr(i32)]
    #[non_exhaustive]
    pub enum PrctlEndian {
        /// Big endian.
        PR_ENDIAN_BIG,
        /// True little endian.
        PR_ENDIAN_LITTLE,
        /// PowerPC pseudo little endian.
        PR_ENDIAN_PPC_LITTLE,
    }
    impl TryFrom<i32>
}
