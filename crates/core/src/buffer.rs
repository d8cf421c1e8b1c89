//! Output-buffer validation and element-parallel fill loops
//!
//! Every kernel validates its buffers with [`expect_shape`] before writing and
//! then fills them with [`fill_rows`] or [`fill_values`], which run on rayon's
//! pool when the `parallel` feature is on.

use crate::error::{Error, Result};
use ndarray::{ArrayViewMut1, ArrayViewMut2, Axis};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sequential stand-in for rayon's `into_par_iter`
#[cfg(not(feature = "parallel"))]
trait IntoParallelIterator: IntoIterator + Sized {
    fn into_par_iter(self) -> Self::IntoIter {
        self.into_iter()
    }
}

#[cfg(not(feature = "parallel"))]
impl<I: IntoIterator> IntoParallelIterator for I {}

/// Fail with [`Error::ShapeMismatch`] unless `actual == expected`
pub fn expect_shape(array: &'static str, actual: &[usize], expected: &[usize]) -> Result<()> {
    if actual != expected {
        return Err(Error::shape_mismatch(array, expected, actual));
    }
    Ok(())
}

/// Fill each row of `out`; `f` receives the row index and the row view
pub fn fill_rows<T, F>(mut out: ArrayViewMut2<'_, T>, f: F)
where
    T: Send + Sync,
    F: Fn(usize, ArrayViewMut1<'_, T>) + Sync + Send,
{
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, row)| f(i, row));
}

/// Fill each element of `out` with `f(index)`
pub fn fill_values<T, F>(mut out: ArrayViewMut1<'_, T>, f: F)
where
    T: Send + Sync,
    F: Fn(usize) -> T + Sync + Send,
{
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut value)| value[()] = f(i));
}
