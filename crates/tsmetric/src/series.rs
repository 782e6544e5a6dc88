//! Time series types with validation guarantees.

use std::ops::Index;

use crate::error::SeriesError;

/// Owned, validated time series. Guaranteed non-empty with all finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Series(Vec<f64>);

impl Series {
    /// Create a new series, validating that it is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SeriesError::Empty`] | `values` is empty |
    /// | [`SeriesError::NonFinite`] | Any value is NaN or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, SeriesError> {
        check(&values)?;
        Ok(Self(values))
    }

    /// Borrow this series as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SeriesView<'_> {
        SeriesView(&self.0)
    }

    /// Return the number of time steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed [`Series`]; present for the
    /// `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Borrowed, validated view into a time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesView<'a>(&'a [f64]);

impl<'a> SeriesView<'a> {
    /// Create a view over `slice`, validating that it is non-empty and all values are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`SeriesError::Empty`] | `slice` is empty |
    /// | [`SeriesError::NonFinite`] | Any value is NaN or infinite |
    pub fn new(slice: &'a [f64]) -> Result<Self, SeriesError> {
        check(slice)?;
        Ok(Self(slice))
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of time steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed [`SeriesView`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for SeriesView<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[f64]> for SeriesView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

impl<'a> TryFrom<&'a [f64]> for SeriesView<'a> {
    type Error = SeriesError;

    fn try_from(slice: &'a [f64]) -> Result<Self, Self::Error> {
        Self::new(slice)
    }
}

fn check(values: &[f64]) -> Result<(), SeriesError> {
    if values.is_empty() {
        return Err(SeriesError::Empty);
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SeriesError::NonFinite { index }),
        None => Ok(()),
    }
}
