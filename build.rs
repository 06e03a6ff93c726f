fn main() {
    // Linker scripts only make sense for on-target builds; host builds and
    // tests run with the default linker untouched.
    if std::env::var("CARGO_FEATURE_ESP32S3").is_ok() {
        if std::env::var("PROFILE").unwrap_or_default() == "release" {
            println!("cargo:rustc-env=DEFMT_LOG=off");
        }

        println!("cargo:rustc-link-arg=-Tdefmt.x");
        println!("cargo:rustc-link-arg=-Tlinkall.x");
    }
}
