// tests/integration/mod.rs

mod projection;

use matrix4::Matrix4x4;

/// Deterministic pseudo-random matrices with entries in [-2, 2).
pub struct MatrixSource {
    state: u64,
}

impl MatrixSource {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_value(&mut self) -> f32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let bits = (self.state >> 40) as u32; // 24 random bits
        (bits as f32 / (1u32 << 24) as f32) * 4.0 - 2.0
    }

    pub fn next_matrix(&mut self) -> Matrix4x4 {
        Matrix4x4::new_from(core::array::from_fn(|_| self.next_value()))
    }
}
