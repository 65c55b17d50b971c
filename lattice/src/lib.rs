use matrix::*;
use vector3::*;

use std::{f64::consts, fmt};

// Bravais lattice: the three cell vectors stored as the columns of a 3x3
// matrix, in Bohr.
#[derive(Debug, Default, Clone)]
pub struct Lattice {
    data: Matrix<f64>,
}

impl Lattice {
    pub fn new(a: &[f64], b: &[f64], c: &[f64]) -> Lattice {
        let mut data = Matrix::<f64>::new(3, 3);

        data.set_col(0, a);
        data.set_col(1, b);
        data.set_col(2, c);

        Lattice { data }
    }

    // ( a x b ) . c
    pub fn volume(&self) -> f64 {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        a.cross_product(&b).dot_product(&c)
    }

    // ra = 2 x PI x (b x c) / volume
    // rb = 2 x PI x (c x a) / volume
    // rc = 2 x PI x (a x b) / volume
    pub fn reciprocal(&self) -> Lattice {
        let factor = 2.0 * consts::PI / self.volume();

        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        let blatt_a = b.cross_product(&c) * factor;
        let blatt_b = c.cross_product(&a) * factor;
        let blatt_c = a.cross_product(&b) * factor;

        Lattice::new(&blatt_a.to_vec(), &blatt_b.to_vec(), &blatt_c.to_vec())
    }

    pub fn get_vector_a(&self) -> Vector3f64 {
        let v = self.data.get_col(0);

        Vector3f64 {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    pub fn get_vector_b(&self) -> Vector3f64 {
        let v = self.data.get_col(1);

        Vector3f64 {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    pub fn get_vector_c(&self) -> Vector3f64 {
        let v = self.data.get_col(2);

        Vector3f64 {
            x: v[0],
            y: v[1],
            z: v[2],
        }
    }

    pub fn scaled_by(&mut self, f: f64) {
        self.data.as_mut_slice().iter_mut().for_each(|v| *v *= f);
    }

    pub fn frac_to_cart(&self, pos_f: &[f64], pos_c: &mut [f64]) {
        for i in 0..3 {
            pos_c[i] = 0.0;

            for j in 0..3 {
                pos_c[i] += self.data[[i, j]] * pos_f[j];
            }
        }
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = self.get_vector_a();
        let b = self.get_vector_b();
        let c = self.get_vector_c();

        write!(f,
               "{}\n{:25.16}\t{:25.16}\t{:25.16}\n{:25.16}\t{:25.16}\t{:25.16}\n{:25.16}\t{:25.16}\t{:25.16}", "Lattice",
               a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z)
    }
}
