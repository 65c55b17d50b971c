mod array3_c64;

use ndarray_crate::{Array3 as NdArray3, ShapeBuilder};
use num::traits::Zero;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Array3<T> {
    shape: [usize; 3],
    data: NdArray3<T>,
}

impl<T: Default + Clone> Default for Array3<T> {
    fn default() -> Self {
        Self {
            shape: [0, 0, 0],
            data: NdArray3::from_elem((0, 0, 0).f(), T::default()),
        }
    }
}

impl<T: Default + Copy + Clone + Zero> Array3<T> {
    pub fn new(shape: [usize; 3]) -> Array3<T> {
        Array3 {
            shape,
            // First index fastest, the Fortran-order layout used for FFT data.
            data: NdArray3::from_elem((shape[0], shape[1], shape[2]).f(), T::default()),
        }
    }

    pub fn from_vec(shape: [usize; 3], data: Vec<T>) -> Array3<T> {
        let nlen = shape[0] * shape[1] * shape[2];
        assert_eq!(data.len(), nlen);

        let data = NdArray3::from_shape_vec((shape[0], shape[1], shape[2]).f(), data)
            .expect("invalid Array3 shape/data length");

        Array3 { shape, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for v in self.data.iter() {
            s = s + *v;
        }

        s
    }

    pub fn set_value(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn as_slice(&self) -> &[T] {
        self.data
            .as_slice_memory_order()
            .expect("Array3 is not contiguous in memory order")
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
            .as_slice_memory_order_mut()
            .expect("Array3 is not contiguous in memory order")
    }
}

impl<T> Index<[usize; 3]> for Array3<T> {
    type Output = T;

    fn index(&self, idx: [usize; 3]) -> &T {
        &self.data[[idx[0], idx[1], idx[2]]]
    }
}

impl<T> IndexMut<[usize; 3]> for Array3<T> {
    fn index_mut(&mut self, idx: [usize; 3]) -> &mut Self::Output {
        &mut self.data[[idx[0], idx[1], idx[2]]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array3_layout_contract() {
        let a = Array3::from_vec([2, 2, 2], vec![0i32, 1, 2, 3, 4, 5, 6, 7]);

        // first index fastest
        assert_eq!(a[[0, 0, 0]], 0);
        assert_eq!(a[[1, 0, 0]], 1);
        assert_eq!(a[[0, 1, 0]], 2);
        assert_eq!(a[[1, 1, 0]], 3);
        assert_eq!(a[[0, 0, 1]], 4);
        assert_eq!(a[[1, 1, 1]], 7);

        assert_eq!(a.shape(), [2, 2, 2]);
        assert_eq!(a.len(), 8);
        assert!(!a.is_empty());
        assert_eq!(a.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_array3_fill_and_sum() {
        let mut a = Array3::<f64>::new([3, 2, 2]);

        assert_eq!(a.sum(), 0.0);

        a.set_value(0.5);
        assert_eq!(a.sum(), 6.0);

        a.as_mut_slice()[0] = 1.5;
        assert_eq!(a.sum(), 7.0);
    }

    #[test]
    fn test_array3_default_is_empty() {
        let a = Array3::<f64>::default();

        assert_eq!(a.shape(), [0, 0, 0]);
        assert!(a.is_empty());
    }
}
