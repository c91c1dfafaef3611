use core::fmt::{Debug, Display, Formatter};

/// The primitive kinds a 2D array can hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Int,
    Long,
    Double,
    Float,
    Boolean,
}

impl Display for ElementKind {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.write_str(match self {
            ElementKind::Int => "i32",
            ElementKind::Long => "i64",
            ElementKind::Double => "f64",
            ElementKind::Float => "f32",
            ElementKind::Boolean => "bool",
        })
    }
}

mod sealed {
    pub trait Sealed {}
}

/// An element type that `Dense2DArray` can be instantiated with.
///
/// The set is closed: it is implemented for `i32`, `i64`, `f64`, `f32` and
/// `bool`, and cannot be implemented outside this crate.
pub trait Element: sealed::Sealed + Copy + PartialEq + Debug + 'static {
    const KIND: ElementKind;

    /// The value of a freshly allocated cell when no fill value is given.
    const ZERO: Self;
}

macro_rules! element {
    ($t:ty, $kind:ident, $zero:expr) => {
        impl sealed::Sealed for $t {}
        impl Element for $t {
            const KIND: ElementKind = ElementKind::$kind;
            const ZERO: Self = $zero;
        }
    };
}

element!(i32, Int, 0);
element!(i64, Long, 0);
element!(f64, Double, 0.0);
element!(f32, Float, 0.0);
element!(bool, Boolean, false);
