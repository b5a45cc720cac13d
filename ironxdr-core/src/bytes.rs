//! Fixed and variable-length byte sequences and bounded containers.
//!
//! This module provides:
//! - [`XdrBytes`] for uniform "as byte sequence" access
//! - [`XdrBound`], implemented by every generated bounded wrapper type
//! - [`XdrVariableBytes`] and [`XdrVarArray`] for bound-checked length changes
//! - [`XdrArray`], the fixed-length container used for `T name[N]`

use crate::error::{Result, XdrError};
use std::ops::{Deref, DerefMut};

/// Uniform read access to the bytes of an opaque or string value.
pub trait XdrBytes {
    /// Returns the value as a byte slice.
    fn get_byte_slice(&self) -> &[u8];
}

/// Maximum length of a bounded variable-length type.
///
/// Generated code implements this once per distinct (base type, bound)
/// pair so marshaling code can query any bound without per-field logic.
pub trait XdrBound {
    /// Returns the declared maximum number of elements.
    fn xdr_bound(&self) -> u32;
}

/// A bounded `opaque<N>` or `string<N>` whose contents can be replaced.
pub trait XdrVariableBytes: XdrBytes + XdrBound {
    /// Replaces the contents, changing the length.
    ///
    /// # Errors
    /// Returns `XdrError::BoundExceeded` if `bytes` is longer than the bound,
    /// or `XdrError::InvalidUtf8` for strings holding non-UTF-8 data.
    fn set_byte_slice(&mut self, bytes: &[u8]) -> Result<()>;
}

/// A bounded `T name<N>` vector whose length can be changed.
pub trait XdrVarArray: XdrBound {
    /// Returns the current number of elements.
    fn get_vec_len(&self) -> u32;

    /// Grows (with default elements) or truncates the vector.
    ///
    /// # Errors
    /// Returns `XdrError::BoundExceeded` if `len` is larger than the bound.
    fn set_vec_len(&mut self, len: u32) -> Result<()>;
}

impl<W, T> XdrVarArray for W
where
    W: XdrBound + DerefMut<Target = Vec<T>>,
    T: Default,
{
    fn get_vec_len(&self) -> u32 {
        self.deref().len() as u32
    }

    fn set_vec_len(&mut self, len: u32) -> Result<()> {
        check_bound(len as usize, self.xdr_bound())?;
        self.deref_mut().resize_with(len as usize, T::default);
        Ok(())
    }
}

/// Verifies that `len` fits within `bound`.
///
/// # Errors
/// Returns `XdrError::BoundExceeded` if `len > bound`.
#[inline]
pub fn check_bound(len: usize, bound: u32) -> Result<()> {
    if len > bound as usize {
        return Err(XdrError::BoundExceeded { len, bound });
    }
    Ok(())
}

/// Storage that can be refilled from raw bytes.
pub trait ByteContainer {
    /// Replaces the contents with `bytes`.
    ///
    /// # Errors
    /// Returns `XdrError` if the bytes are not valid for this container.
    fn replace_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

impl ByteContainer for Vec<u8> {
    fn replace_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.clear();
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl ByteContainer for String {
    fn replace_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        *self = String::from_utf8(bytes.to_vec())?;
        Ok(())
    }
}

/// Bound-checked replacement of a byte container's contents.
///
/// Generated `XdrVariableBytes` impls delegate here.
///
/// # Errors
/// Returns `XdrError` if the bound is exceeded or the bytes are rejected.
pub fn set_bounded_bytes<C: ByteContainer>(dst: &mut C, bytes: &[u8], bound: u32) -> Result<()> {
    check_bound(bytes.len(), bound)?;
    dst.replace_bytes(bytes)
}

impl XdrBytes for Vec<u8> {
    #[inline]
    fn get_byte_slice(&self) -> &[u8] {
        self
    }
}

impl XdrBytes for String {
    #[inline]
    fn get_byte_slice(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Fixed-length array, `T name[N]` in the IDL.
///
/// Unlike `[T; N]`, this implements `Default` for every `N`, so generated
/// aggregates can always derive it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XdrArray<T, const N: usize>(pub [T; N]);

impl<T: Default, const N: usize> Default for XdrArray<T, N> {
    fn default() -> Self {
        Self(std::array::from_fn(|_| T::default()))
    }
}

impl<T, const N: usize> XdrArray<T, N> {
    /// Number of elements.
    pub const LEN: usize = N;

    /// Wraps an existing array.
    #[must_use]
    pub const fn new(items: [T; N]) -> Self {
        Self(items)
    }

    /// Returns the inner array.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T, const N: usize> Deref for XdrArray<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for XdrArray<T, N> {
    fn deref_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

impl<T, const N: usize> From<[T; N]> for XdrArray<T, N> {
    fn from(items: [T; N]) -> Self {
        Self(items)
    }
}

impl<const N: usize> XdrBytes for XdrArray<u8, N> {
    #[inline]
    fn get_byte_slice(&self) -> &[u8] {
        &self.0
    }
}
