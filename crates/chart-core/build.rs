// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU need when the `png` feature is on.

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_PNG");
    let png = std::env::var_os("CARGO_FEATURE_PNG").is_some();
    let windows = std::env::var("CARGO_CFG_TARGET_OS").map(|os| os == "windows").unwrap_or(false);
    if png && windows {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
