fn main() {
    // Footer copyright year is read from this at compile time so the server
    // render and the hydrated client always agree.
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
}
