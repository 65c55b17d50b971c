use types::c64;

// units : length

pub const BOHR_TO_ANG: f64 = 0.529177249;
pub const ANG_TO_BOHR: f64 = 1.0 / BOHR_TO_ANG;

// units : volume

pub const BOHR3_TO_ANG3: f64 = BOHR_TO_ANG * BOHR_TO_ANG * BOHR_TO_ANG;
pub const ANG3_TO_BOHR3: f64 = ANG_TO_BOHR * ANG_TO_BOHR * ANG_TO_BOHR;

//

pub const ONE_C64: c64 = c64 { re: 1.0, im: 0.0 };
pub const I_C64: c64 = c64 { re: 0.0, im: 1.0 };

// numerical convergence

pub const EPS0: f64 = 1E0;
pub const EPS1: f64 = 1E-1;
pub const EPS2: f64 = 1E-2;
pub const EPS3: f64 = 1E-3;
pub const EPS4: f64 = 1E-4;
pub const EPS5: f64 = 1E-5;
pub const EPS6: f64 = 1E-6;
pub const EPS7: f64 = 1E-7;
pub const EPS8: f64 = 1E-8;
pub const EPS9: f64 = 1E-9;
pub const EPS10: f64 = 1E-10;
pub const EPS11: f64 = 1E-11;
pub const EPS12: f64 = 1E-12;
pub const EPS13: f64 = 1E-13;
pub const EPS14: f64 = 1E-14;
pub const EPS15: f64 = 1E-15;
pub const EPS16: f64 = 1E-16;
