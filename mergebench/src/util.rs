use crate::BenchError;

/// Allocates a zero-filled vector of `len` elements, reporting allocation
/// failure instead of aborting.
pub fn try_zeroed_vec<T: Copy + Default>(len: usize) -> Result<Vec<T>, BenchError> {
    let mut vec = try_vec_with_capacity(len)?;
    vec.resize(len, T::default());
    Ok(vec)
}

pub fn try_vec_with_capacity<T>(len: usize) -> Result<Vec<T>, BenchError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|_| BenchError::Allocation {
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    Ok(vec)
}

/// Length of `trials` back-to-back sequences of `count` elements.
pub fn batch_len<T>(count: usize, trials: usize) -> Result<usize, BenchError> {
    count.checked_mul(trials)
        .filter(|len| len.checked_mul(std::mem::size_of::<T>()).is_some())
        .ok_or(BenchError::Allocation { bytes: usize::MAX })
}
