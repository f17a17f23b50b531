//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pindrop_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("pindrop_core ping={}", pindrop_core::ping());
    println!("pindrop_core version={}", pindrop_core::core_version());
}
