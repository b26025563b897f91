//! Entry point for the WASM application

pub fn main() {
    seamap_frontend::mount();
}
