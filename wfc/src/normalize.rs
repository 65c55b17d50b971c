use ndarray::Array3;
use orbstore::Transform;
use types::c64;

// Normalization applied to every R space field on write:
//
//    psi -> psi / sqrt( sum(|psi|^2) * omega / N )
//
// so that the integrated squared magnitude over the cell equals one.
// All configuration is captured as plain values at construction.
pub struct TransformNormalize {
    omega: f64,
    shape: [usize; 3],
    ntot: f64,
}

impl TransformNormalize {
    pub fn new(omega: f64, shape: [usize; 3]) -> TransformNormalize {
        TransformNormalize {
            omega,
            shape,
            ntot: (shape[0] * shape[1] * shape[2]) as f64,
        }
    }
}

impl Transform<Array3<c64>> for TransformNormalize {
    fn apply(&self, mut psir: Array3<c64>) -> Array3<c64> {
        // a wrong shape is a collaborator bug upstream, not a recoverable error
        assert_eq!(
            psir.shape(),
            self.shape,
            "field shape {:?} does not match the wavefunction grid {:?}",
            psir.shape(),
            self.shape
        );

        let s: f64 = psir.as_slice().iter().map(|v| v.norm_sqr()).sum();

        let norm = (s * self.omega / self.ntot).sqrt();

        psir.scale(1.0 / norm);

        psir
    }
}
