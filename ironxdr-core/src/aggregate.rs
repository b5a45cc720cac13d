//! Reflection traits for generated enums and unions.

use crate::num::XdrNum32;
use std::any::Any;
use std::fmt;

/// XDR `TRUE`, usable as a union case label.
pub const TRUE: bool = true;

/// XDR `FALSE`, usable as a union case label.
pub const FALSE: bool = false;

/// Payload of a `void` declaration.
pub type XdrVoid = ();

/// Any generated value, viewed dynamically.
///
/// Implemented for every `'static + Debug` type; union bodies are
/// returned as `&mut dyn XdrAny` so callers can downcast to the arm type.
pub trait XdrAny: Any + fmt::Debug {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any + fmt::Debug> XdrAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl dyn XdrAny + '_ {
    /// Returns true if the value is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        XdrAny::as_any(self).is::<T>()
    }

    /// Downcasts to a `T` reference.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        XdrAny::as_any(self).downcast_ref::<T>()
    }

    /// Downcasts to a mutable `T` reference.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        XdrAny::as_any_mut(self).downcast_mut::<T>()
    }
}

/// A generated enum: an `i32` newtype with symbolic names.
pub trait XdrEnum: XdrNum32 {
    /// Returns the known `(value, name)` pairs in declaration order.
    fn enum_names(&self) -> &'static [(i32, &'static str)];

    /// Returns the raw discriminant value.
    fn enum_val(&mut self) -> &mut i32;

    /// Returns the symbolic name of the current value, if it has one.
    fn enum_name(&self) -> Option<&'static str> {
        let value = self.get_u32() as i32;
        self.enum_names()
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, name)| *name)
    }
}

/// A generated discriminated union.
pub trait XdrUnion {
    /// Returns the discriminant.
    fn xdr_union_tag(&mut self) -> &mut dyn XdrNum32;

    /// Returns true if the discriminant selects some arm.
    fn xdr_union_valid(&self) -> bool;

    /// Returns the payload of the selected arm, or `None` for a void arm.
    fn xdr_union_body(&mut self) -> Option<&mut dyn XdrAny>;
}

/// Aborts on a contract violation by the caller of generated code.
///
/// Used when a union arm accessor is invoked while the discriminant selects
/// a different arm.
#[cold]
#[track_caller]
pub fn xdr_panic(message: &str) -> ! {
    panic!("{message}")
}
