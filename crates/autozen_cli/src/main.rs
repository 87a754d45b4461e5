//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `autozen_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("autozen_core ping={}", autozen_core::ping());
    println!("autozen_core version={}", autozen_core::core_version());
}
