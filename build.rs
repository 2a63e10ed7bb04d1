use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        linux: { target_os = "linux" },
        // PR_SET_ENDIAN/PR_GET_ENDIAN are only implemented by the PowerPC kernel
        endian_control: { all(linux, any(target_arch = "powerpc", target_arch = "powerpc64")) },
    }

    // Below are custom cfg values set during some CI steps.
    println!("cargo:rustc-check-cfg=cfg(qemu)");
}
