use lattice::Lattice;
use std::{f64::consts, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FFTGrid {
    n1: usize,
    n2: usize,
    n3: usize,
}

impl FFTGrid {
    pub fn new(latt: &Lattice, ecut: f64) -> FFTGrid {
        assert!(ecut > 0.0);

        let gmax = (2.0 * ecut).sqrt();

        let twopi = 2.0 * consts::PI;

        let mut n1 = (2.0 * gmax * latt.get_vector_a().norm2() / twopi).ceil() as usize;
        let mut n2 = (2.0 * gmax * latt.get_vector_b().norm2() / twopi).ceil() as usize;
        let mut n3 = (2.0 * gmax * latt.get_vector_c().norm2() / twopi).ceil() as usize;

        n1 = get_fftwn(n1);
        n2 = get_fftwn(n2);
        n3 = get_fftwn(n3);

        FFTGrid { n1, n2, n3 }
    }

    pub fn from_dims(n1: usize, n2: usize, n3: usize) -> FFTGrid {
        assert!(n1 > 0 && n2 > 0 && n3 > 0);

        FFTGrid { n1, n2, n3 }
    }

    pub fn get_ntotf64(&self) -> f64 {
        (self.n1 * self.n2 * self.n3) as f64
    }

    pub fn get_ntot(&self) -> usize {
        self.n1 * self.n2 * self.n3
    }

    pub fn get_n1(&self) -> usize {
        self.n1
    }

    pub fn get_n2(&self) -> usize {
        self.n2
    }

    pub fn get_n3(&self) -> usize {
        self.n3
    }

    pub fn get_size(&self) -> [usize; 3] {
        [self.n1, self.n2, self.n3]
    }
}

impl fmt::Display for FFTGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let outstr = format!("{} x {} x {}", self.n1, self.n2, self.n3);

        write!(f, "{}", outstr)
    }
}

fn get_fftwn(n: usize) -> usize {
    let mut bres: bool = false;

    // 1 is the smallest acceptable grid dimension
    let mut tn = n.max(1);

    while !bres {
        bres = is_fftw_ok(tn);
        if !bres {
            tn += 1;
        }
    }

    tn
}

fn is_fftw_ok(n_to_check: usize) -> bool {
    const FACTORS: [usize; 6] = [2, 3, 5, 7, 11, 13];

    let mut pcnt = vec![0usize; 6];

    let mut tn = n_to_check;

    for (i, fi) in FACTORS.iter().enumerate() {
        while tn % fi == 0 && tn != 1 {
            tn = tn / fi;
            pcnt[i] += 1;
        }
    }

    if tn == 1 {
        true
    } else {
        false
    }
}

#[test]
fn test_fftgrid_from_dims() {
    let grid = FFTGrid::from_dims(4, 6, 8);

    assert_eq!(grid.get_size(), [4, 6, 8]);
    assert_eq!(grid.get_ntot(), 192);
    assert_eq!(grid.get_ntotf64(), 192.0);
    assert_eq!(format!("{}", grid), "4 x 6 x 8");
}

#[test]
fn test_fftgrid_fftw_sizes() {
    // 17 is prime and larger than 13, the next acceptable size is 18 = 2 * 3^2
    assert_eq!(get_fftwn(17), 18);
    assert_eq!(get_fftwn(12), 12);
    assert!(is_fftw_ok(2 * 3 * 5 * 7 * 11 * 13));
    assert!(!is_fftw_ok(17));

    // a zero request terminates at the smallest acceptable size
    assert_eq!(get_fftwn(0), 1);
}

#[test]
fn test_fftgrid_new_from_cutoff() {
    let a = 10.0;

    let latt = Lattice::new(&[a, 0.0, 0.0], &[0.0, a, 0.0], &[0.0, 0.0, a]);

    let twopi = 2.0 * consts::PI;

    for &ecut in [1.0, 5.0, 12.5, 40.0].iter() {
        let grid = FFTGrid::new(&latt, ecut);

        let gmax = (2.0 * ecut).sqrt();
        let nmin = (2.0 * gmax * a / twopi).ceil() as usize;

        for &n in grid.get_size().iter() {
            assert!(n >= nmin);
            assert!(is_fftw_ok(n));
        }

        // all three dimensions agree for a cubic cell
        assert_eq!(grid.get_n1(), grid.get_n2());
        assert_eq!(grid.get_n2(), grid.get_n3());
    }

    // a = 10, ecut = 40 ceils to 29, prime above 13, bumped to 30
    let grid = FFTGrid::new(&latt, 40.0);
    assert_eq!(grid.get_n1(), 30);
}

#[test]
#[should_panic(expected = "ecut > 0.0")]
fn test_fftgrid_rejects_nonpositive_cutoff() {
    let latt = Lattice::new(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]);

    FFTGrid::new(&latt, 0.0);
}
