// File: crates/whisker-core/build.rs
// Summary: Links the Windows system libraries Skia needs for the preview renderer.

fn main() {
    // Target OS, not host.
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "windows" {
        // Skia's font manager calls RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
