//! Determinism helpers.

/// BLAKE3 hex digest of `bytes`.
pub fn compute_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Runs `generate` `runs` times and panics if any output differs from the
/// first.
pub fn assert_deterministic<F>(runs: usize, mut generate: F)
where
    F: FnMut() -> Vec<u8>,
{
    let reference = compute_hash(&generate());
    for run in 1..runs {
        let hash = compute_hash(&generate());
        assert_eq!(
            hash, reference,
            "run {} produced different output ({} vs {})",
            run, hash, reference
        );
    }
}
