//! Typed integer tables and the quantization rules that produce them.
//!
//! A [`Table`] is an ordered sequence of fixed-width integers. Generators
//! build tables through the [`Element`] trait, which owns the two rounding
//! modes used by the firmware and the saturating conversion into the target
//! width.
//!
//! # Rounding
//!
//! | Mode | Used by |
//! |------|---------|
//! | [`Rounding::Nearest`] | LFO increments, DCO periods, curve shapes |
//! | [`Rounding::Truncate`] | Warped increments, drum phase increments, groove templates |
//!
//! Nearest rounding breaks ties towards the even integer.

/// Storage width of a table element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BitWidth {
    /// 8-bit elements.
    Bits8,
    /// 16-bit elements.
    Bits16,
    /// 32-bit elements.
    Bits32,
}

impl BitWidth {
    /// Number of bits per element.
    pub const fn bits(&self) -> u32 {
        match self {
            BitWidth::Bits8 => 8,
            BitWidth::Bits16 => 16,
            BitWidth::Bits32 => 32,
        }
    }

    /// Number of bytes per element.
    pub const fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }
}

/// Conversion of a real value into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to nearest, ties to even.
    Nearest,
    /// Round towards zero.
    Truncate,
}

impl Rounding {
    /// Apply the rounding mode, keeping the result as `f64`.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Nearest => value.round_ties_even(),
            Rounding::Truncate => value.trunc(),
        }
    }
}

/// An integer type a table can be made of.
///
/// Conversions saturate: a value outside `[MIN, MAX]` is clamped to the
/// nearest bound and NaN maps to zero.
pub trait Element: Copy + Into<i64> + private::Sealed {
    /// Storage width.
    const WIDTH: BitWidth;
    /// Whether the type is signed.
    const SIGNED: bool;
    /// Smallest representable value.
    const MIN: f64;
    /// Largest representable value.
    const MAX: f64;

    /// Convert an already integral value, clamping into range.
    fn saturate(value: f64) -> Self;

    /// Wrap a vector of elements into a [`Table`].
    fn into_table(values: Vec<Self>) -> Table;

    /// Round `value` with `rounding`, then clamp into range.
    #[inline]
    fn quantize(value: f64, rounding: Rounding) -> Self {
        Self::saturate(rounding.apply(value))
    }
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident, $width:expr, $signed:expr) => {
        impl private::Sealed for $ty {}

        impl Element for $ty {
            const WIDTH: BitWidth = $width;
            const SIGNED: bool = $signed;
            const MIN: f64 = <$ty>::MIN as f64;
            const MAX: f64 = <$ty>::MAX as f64;

            #[inline]
            fn saturate(value: f64) -> Self {
                if value.is_nan() {
                    0
                } else {
                    value.clamp(<Self as Element>::MIN, <Self as Element>::MAX) as $ty
                }
            }

            fn into_table(values: Vec<Self>) -> Table {
                Table::$variant(values)
            }
        }

        impl From<Vec<$ty>> for Table {
            fn from(values: Vec<$ty>) -> Self {
                Table::$variant(values)
            }
        }
    };
}

impl_element!(u8, U8, BitWidth::Bits8, false);
impl_element!(i8, I8, BitWidth::Bits8, true);
impl_element!(u16, U16, BitWidth::Bits16, false);
impl_element!(i16, I16, BitWidth::Bits16, true);
impl_element!(u32, U32, BitWidth::Bits32, false);

/// A generated lookup table.
///
/// The variant fixes both width and signedness, so every element is in
/// range by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Table {
    /// Unsigned 8-bit elements.
    U8(Vec<u8>),
    /// Signed 8-bit elements.
    I8(Vec<i8>),
    /// Unsigned 16-bit elements.
    U16(Vec<u16>),
    /// Signed 16-bit elements.
    I16(Vec<i16>),
    /// Unsigned 32-bit elements.
    U32(Vec<u32>),
}

impl Table {
    /// Element width.
    pub fn width(&self) -> BitWidth {
        match self {
            Table::U8(_) | Table::I8(_) => BitWidth::Bits8,
            Table::U16(_) | Table::I16(_) => BitWidth::Bits16,
            Table::U32(_) => BitWidth::Bits32,
        }
    }

    /// Whether elements are signed.
    pub fn is_signed(&self) -> bool {
        matches!(self, Table::I8(_) | Table::I16(_))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Table::U8(v) => v.len(),
            Table::I8(v) => v.len(),
            Table::U16(v) => v.len(),
            Table::I16(v) => v.len(),
            Table::U32(v) => v.len(),
        }
    }

    /// Returns `true` if the table has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage size in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.width().bytes()
    }

    /// Element at `index`, widened to `i64`.
    pub fn get(&self, index: usize) -> Option<i64> {
        match self {
            Table::U8(v) => v.get(index).map(|&x| x.into()),
            Table::I8(v) => v.get(index).map(|&x| x.into()),
            Table::U16(v) => v.get(index).map(|&x| x.into()),
            Table::I16(v) => v.get(index).map(|&x| x.into()),
            Table::U32(v) => v.get(index).map(|&x| x.into()),
        }
    }

    /// All elements, widened to `i64`.
    pub fn values(&self) -> Vec<i64> {
        fn widen<T: Element>(v: &[T]) -> Vec<i64> {
            v.iter().map(|&x| x.into()).collect()
        }
        match self {
            Table::U8(v) => widen(v),
            Table::I8(v) => widen(v),
            Table::U16(v) => widen(v),
            Table::I16(v) => widen(v),
            Table::U32(v) => widen(v),
        }
    }

    /// Representable `(min, max)` of the element type.
    pub fn bounds(&self) -> (i64, i64) {
        match self {
            Table::U8(_) => (0, u8::MAX.into()),
            Table::I8(_) => (i8::MIN.into(), i8::MAX.into()),
            Table::U16(_) => (0, u16::MAX.into()),
            Table::I16(_) => (i16::MIN.into(), i16::MAX.into()),
            Table::U32(_) => (0, u32::MAX.into()),
        }
    }
}
