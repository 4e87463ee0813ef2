// src/numerics/types/multiply.rs
// Buffer-level 4x4 product for callers that manage their own storage.

/// Writes `a × b` into `out` and returns `out`.
///
/// All three buffers are row-major, so
/// `out[r * 4 + c] = Σ_k a[r * 4 + k] * b[k * 4 + c]`, accumulated in
/// increasing `k`. The whole of `b` is cached before any write; `a` is read
/// one row at a time. `out` is a unique borrow, so it can never alias `a` or
/// `b`; use [`Matrix4x4::pre_multiply`] / [`Matrix4x4::post_multiply`] for
/// in-place products.
///
/// [`Matrix4x4::pre_multiply`]: crate::Matrix4x4::pre_multiply
/// [`Matrix4x4::post_multiply`]: crate::Matrix4x4::post_multiply
///
/// # Examples
/// ```
/// use matrix4::multiply_raw;
///
/// let scale: [f32; 16] = [
///     2.0, 0.0, 0.0, 0.0,
///     0.0, 2.0, 0.0, 0.0,
///     0.0, 0.0, 2.0, 0.0,
///     0.0, 0.0, 0.0, 1.0,
/// ];
/// let mut out = [0.0f32; 16];
/// multiply_raw(&mut out, &scale, &scale);
/// assert_eq!(out[0], 4.0);
/// assert_eq!(out[15], 1.0);
/// ```
#[inline]
pub fn multiply_raw<'a>(out: &'a mut [f32; 16], a: &[f32; 16], b: &[f32; 16]) -> &'a mut [f32; 16] {
    let [
        b00, b01, b02, b03,
        b10, b11, b12, b13,
        b20, b21, b22, b23,
        b30, b31, b32, b33,
    ] = *b;

    for m in (0..16).step_by(4) {
        // Cache only the current row of the left operand
        let (a0, a1, a2, a3) = (a[m], a[m + 1], a[m + 2], a[m + 3]);
        out[m] = a0 * b00 + a1 * b10 + a2 * b20 + a3 * b30;
        out[m + 1] = a0 * b01 + a1 * b11 + a2 * b21 + a3 * b31;
        out[m + 2] = a0 * b02 + a1 * b12 + a2 * b22 + a3 * b32;
        out[m + 3] = a0 * b03 + a1 * b13 + a2 * b23 + a3 * b33;
    }

    out
}
