//! Numeric views of primitive wire scalars.
//!
//! Every XDR scalar travels as either a 32-bit or a 64-bit big-endian word.
//! [`XdrNum32`] and [`XdrNum64`] expose that canonical word so generic
//! marshaling code can move any scalar without knowing its Rust type.

use crate::error::{Result, XdrError};
use std::any::Any;

/// Snapshot of a scalar value, for reflective consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XdrValue {
    /// `bool`.
    Bool(bool),
    /// `int`.
    Int(i32),
    /// `unsigned int`.
    UInt(u32),
    /// `float`.
    Float(f32),
    /// `hyper`.
    Hyper(i64),
    /// `unsigned hyper`.
    UHyper(u64),
    /// `double`.
    Double(f64),
}

/// A scalar encoded as one 32-bit word.
pub trait XdrNum32 {
    /// Returns the canonical 32-bit representation.
    fn get_u32(&self) -> u32;

    /// Replaces the value from its canonical 32-bit representation.
    ///
    /// # Errors
    /// Returns `XdrError` if the word is not a legal encoding of this type.
    fn set_u32(&mut self, value: u32) -> Result<()>;

    /// Returns a reference to the underlying Rust primitive.
    fn xdr_pointer(&mut self) -> &mut dyn Any;

    /// Returns the current value.
    fn xdr_value(&self) -> XdrValue;
}

/// A scalar encoded as one 64-bit word.
pub trait XdrNum64 {
    /// Returns the canonical 64-bit representation.
    fn get_u64(&self) -> u64;

    /// Replaces the value from its canonical 64-bit representation.
    fn set_u64(&mut self, value: u64);

    /// Returns a reference to the underlying Rust primitive.
    fn xdr_pointer(&mut self) -> &mut dyn Any;

    /// Returns the current value.
    fn xdr_value(&self) -> XdrValue;
}

impl XdrNum32 for bool {
    #[inline]
    fn get_u32(&self) -> u32 {
        u32::from(*self)
    }

    fn set_u32(&mut self, value: u32) -> Result<()> {
        match value {
            0 => *self = false,
            1 => *self = true,
            _ => return Err(XdrError::InvalidBool { value }),
        }
        Ok(())
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::Bool(*self)
    }
}

impl XdrNum32 for i32 {
    #[inline]
    fn get_u32(&self) -> u32 {
        *self as u32
    }

    #[inline]
    fn set_u32(&mut self, value: u32) -> Result<()> {
        *self = value as i32;
        Ok(())
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::Int(*self)
    }
}

impl XdrNum32 for u32 {
    #[inline]
    fn get_u32(&self) -> u32 {
        *self
    }

    #[inline]
    fn set_u32(&mut self, value: u32) -> Result<()> {
        *self = value;
        Ok(())
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::UInt(*self)
    }
}

impl XdrNum32 for f32 {
    #[inline]
    fn get_u32(&self) -> u32 {
        self.to_bits()
    }

    #[inline]
    fn set_u32(&mut self, value: u32) -> Result<()> {
        *self = f32::from_bits(value);
        Ok(())
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::Float(*self)
    }
}

impl XdrNum64 for i64 {
    #[inline]
    fn get_u64(&self) -> u64 {
        *self as u64
    }

    #[inline]
    fn set_u64(&mut self, value: u64) {
        *self = value as i64;
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::Hyper(*self)
    }
}

impl XdrNum64 for u64 {
    #[inline]
    fn get_u64(&self) -> u64 {
        *self
    }

    #[inline]
    fn set_u64(&mut self, value: u64) {
        *self = value;
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::UHyper(*self)
    }
}

impl XdrNum64 for f64 {
    #[inline]
    fn get_u64(&self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn set_u64(&mut self, value: u64) {
        *self = f64::from_bits(value);
    }

    fn xdr_pointer(&mut self) -> &mut dyn Any {
        self
    }

    fn xdr_value(&self) -> XdrValue {
        XdrValue::Double(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_round_trip() {
        let mut v = false;
        v.set_u32(1).expect("legal bool");
        assert!(v);
        assert_eq!(v.get_u32(), 1);
        assert_eq!(v.xdr_value(), XdrValue::Bool(true));
    }

    #[test]
    fn test_bool_rejects_other_words() {
        let mut v = true;
        let err = v.set_u32(2).unwrap_err();
        assert!(matches!(err, XdrError::InvalidBool { value: 2 }));
        assert!(v, "value must be left untouched");
    }

    #[test]
    fn test_int_sign_preserved() {
        let mut v: i32 = 0;
        v.set_u32(0xffff_ffff).expect("any word is legal");
        assert_eq!(v, -1);
        assert_eq!(v.get_u32(), 0xffff_ffff);
    }

    #[test]
    fn test_float_bits() {
        let mut v: f32 = 1.5;
        let bits = v.get_u32();
        v = 0.0;
        v.set_u32(bits).expect("any word is legal");
        assert_eq!(v, 1.5);
    }

    #[test]
    fn test_hyper_views() {
        let mut v: i64 = -2;
        assert_eq!(v.get_u64(), u64::MAX - 1);
        v.set_u64(7);
        assert_eq!(v.xdr_value(), XdrValue::Hyper(7));

        let mut d: f64 = 0.0;
        d.set_u64(2.25f64.to_bits());
        assert_eq!(d, 2.25);
    }

    #[test]
    fn test_pointer_downcast() {
        let mut v: u32 = 5;
        let any = XdrNum32::xdr_pointer(&mut v);
        *any.downcast_mut::<u32>().expect("u32 pointer") = 9;
        assert_eq!(v, 9);
    }
}
