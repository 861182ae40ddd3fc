use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, fixed at build time so SSR and hydration agree
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
