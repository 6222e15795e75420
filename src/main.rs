// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the demos with:
//   cargo run --example logic_gate
//   cargo run --example wordgen -- input.txt
fn main() {
    println!("conduct-nn: a signal/conductivity propagation network in Rust.");
    println!("Run `cargo run --example logic_gate` to see the tuning demo.");
}
