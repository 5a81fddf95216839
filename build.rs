fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // BACKEND_URL is read with option_env! and baked into both server and wasm builds
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
