fn main() {
    // Release builds set VERSION to the git tag.
    println!("cargo:rerun-if-env-changed=VERSION");
    let version = std::env::var("VERSION").unwrap_or_else(|_| "v0.0.0-dev".to_string());
    println!("cargo:rustc-env=VERSION={}", version);
}
