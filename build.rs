use std::env;

fn main() {
    let target = env::var("TARGET").unwrap();
    let example = env::var("CARGO_FEATURE_PROFILE_EXAMPLE").is_ok();
    let builtin = env::var("CARGO_FEATURE_PROFILE_BUILTIN").is_ok();

    // Exclusivity is reported by compile_error! in the crate, only name the profile here
    let profile = match (example, builtin) {
        (true, false) => "example",
        (false, true) => "builtin",
        (true, true) => "conflicting",
        (false, false) => "none",
    };
    println!("cargo:rustc-env=OQTADRIVE_PROFILE={}", profile);

    // Arduino Nano clock, used for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega328p");
        println!("cargo:warning=Building OqtaDrive adapter for ATmega328P at 16MHz, profile '{}'", profile);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
