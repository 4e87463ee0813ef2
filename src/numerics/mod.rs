// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub(crate) mod format;
    pub mod matrix;
    pub mod multiply;
    pub mod tolerance;
    pub mod traits;
}
