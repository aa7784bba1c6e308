// build.rs

fn main() {
    // --- Link against X11 ---
    // pkg-config is the standard way to find linking information on Unix-like
    // systems. Fall back to the common linker flag if it is missing.
    if let Err(e) = pkg_config::probe_library("x11") {
        eprintln!(
            "pkg-config failed for library 'x11' ({}). Falling back to manual linking.",
            e
        );
        println!("cargo:rustc-link-lib=X11");
        println!("cargo:rustc-link-search=/usr/lib");
    }
}
