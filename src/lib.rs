//! Fixed-shape, row-major 2D arrays over a closed set of primitive element
//! types, with bounds-checked access.

pub mod array2;
pub mod bit_array2;
pub mod element;
pub mod error;

#[cfg(test)]
mod testing;

pub use crate::array2::{Array2D, Dense2DArray};
pub use crate::bit_array2::BitArray2;
pub use crate::element::{Element, ElementKind};
pub use crate::error::Error;

// One alias per supported element type.
pub type IntArray2 = Dense2DArray<i32>;
pub type LongArray2 = Dense2DArray<i64>;
pub type DoubleArray2 = Dense2DArray<f64>;
pub type FloatArray2 = Dense2DArray<f32>;
pub type BoolArray2 = Dense2DArray<bool>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        crate::testing::init_test();
        let mut a = IntArray2::create(1, 2, 3).unwrap();
        a.set(0, 1, -4).unwrap();
        assert_eq!(a.get(0, 1), Ok(-4));
        assert_eq!(LongArray2::zeroed(2, 2).unwrap().get(1, 1), Ok(0i64));
        assert_eq!(DoubleArray2::create(1, 1, 2.5).unwrap().get(0, 0), Ok(2.5));
        assert_eq!(FloatArray2::create(1, 1, 0.5).unwrap().get(0, 0), Ok(0.5f32));
        assert_eq!(BoolArray2::create(1, 1, true).unwrap().get(0, 0), Ok(true));
    }
}
