//! Jenkins one-at-a-time hash
//!
//! Every step uses wrapping `u32` arithmetic; results must match the
//! reference bit pattern on every platform.

#[inline(always)]
fn mix(hash: u32, byte: u8) -> u32 {
    let mut h = hash.wrapping_add(byte as u32);
    h = h.wrapping_add(h << 10);
    h ^ (h >> 6)
}

/// Hash `key` with Bob Jenkins' one-at-a-time function.
///
/// Input is consumed four bytes at a time with the tail handled singly.
/// The grouping is only an unrolling of the byte loop.
#[inline]
pub fn jenkins_one_at_a_time(key: &[u8]) -> u32 {
    let mut hash = 0u32;

    let mut chunks = key.chunks_exact(4);
    for chunk in &mut chunks {
        hash = mix(hash, chunk[0]);
        hash = mix(hash, chunk[1]);
        hash = mix(hash, chunk[2]);
        hash = mix(hash, chunk[3]);
    }
    for &byte in chunks.remainder() {
        hash = mix(hash, byte);
    }

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}
