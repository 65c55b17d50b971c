use std::ops::{Index, IndexMut};

// Dense matrix with column-major storage.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Matrix<T> {
    nrow: usize,
    ncol: usize,
    data: Vec<T>,
}

impl<T: Default + Copy + Clone> Matrix<T> {
    pub fn new(nrow: usize, ncol: usize) -> Matrix<T> {
        Matrix {
            nrow,
            ncol,
            data: vec![T::default(); nrow * ncol],
        }
    }

    pub fn get_nrow(&self) -> usize {
        self.nrow
    }

    pub fn get_ncol(&self) -> usize {
        self.ncol
    }

    pub fn set_col(&mut self, icol: usize, col: &[T]) {
        assert_eq!(col.len(), self.nrow);

        let p0 = icol * self.nrow;

        self.data[p0..p0 + self.nrow].copy_from_slice(col);
    }

    pub fn get_col(&self, icol: usize) -> Vec<T> {
        let p0 = icol * self.nrow;

        self.data[p0..p0 + self.nrow].to_vec()
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: [usize; 2]) -> &T {
        &self.data[idx[1] * self.nrow + idx[0]]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut Self::Output {
        &mut self.data[idx[1] * self.nrow + idx[0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_column_major_layout() {
        let mut m = Matrix::<f64>::new(3, 2);

        m.set_col(0, &[1.0, 2.0, 3.0]);
        m.set_col(1, &[4.0, 5.0, 6.0]);

        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[2, 0]], 3.0);
        assert_eq!(m[[0, 1]], 4.0);
        assert_eq!(m[[2, 1]], 6.0);

        // columns are contiguous
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_matrix_get_col() {
        let mut m = Matrix::<i32>::new(2, 2);

        m.set_col(0, &[1, 2]);
        m.set_col(1, &[3, 4]);

        assert_eq!(m.get_col(0), vec![1, 2]);
        assert_eq!(m.get_col(1), vec![3, 4]);
        assert_eq!(m.get_nrow(), 2);
        assert_eq!(m.get_ncol(), 2);
    }

    #[test]
    fn test_matrix_index_mut() {
        let mut m = Matrix::<f64>::new(2, 2);

        m[[1, 0]] = 7.0;
        m[[0, 1]] = 8.0;

        assert_eq!(m.as_slice(), &[0.0, 7.0, 8.0, 0.0]);

        m.as_mut_slice()[0] = 9.0;
        assert_eq!(m[[0, 0]], 9.0);
    }
}
