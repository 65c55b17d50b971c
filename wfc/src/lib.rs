mod normalize;

pub use normalize::TransformNormalize;

use dfttypes::{NBands, Occupations, WfcError, WfcResult};
use fftgrid::FFTGrid;
use log::debug;
use ndarray::Array3;
use orbindex::OrbitalIndex;
use orbstore::OrbitalStore;
use sample::Sample;
use types::c64;

use std::rc::Rc;

// Kohn-Sham wavefunction container.
//
// One orbital index shared by two stores: psi_r holds the R space fields on
// the wavefunction grid and normalizes every field on write, psi_g holds the
// G space coefficient vectors unchanged. Orbitals are addressed either by
// internal index or by (spin, kpoint, band) index.
pub struct Wavefunction {
    index: Rc<OrbitalIndex>,
    wgrid: FFTGrid,
    dgrid: FFTGrid,
    omega: f64,
    occ: Vec<Vec<Vec<f64>>>,
    gamma: bool,
    psi_r: OrbitalStore<Array3<c64>>,
    psi_g: OrbitalStore<Vec<c64>>,
}

impl Wavefunction {
    pub fn new(
        sample: &Sample,
        wgrid: &FFTGrid,
        dgrid: &FFTGrid,
        nspin: usize,
        nkpt: usize,
        nbnd: &NBands,
        occ: &Occupations,
        gamma: bool,
    ) -> WfcResult<Wavefunction> {
        let index = Rc::new(OrbitalIndex::new(nspin, nkpt, nbnd)?);

        let omega = sample.get_omega();

        let occ = resolve_occ(&index, occ)?;

        let psi_g = OrbitalStore::new(Rc::clone(&index));

        let psi_r = OrbitalStore::with_transform(
            Rc::clone(&index),
            Box::new(TransformNormalize::new(omega, wgrid.get_size())),
        );

        debug!(
            "wavefunction built: norb = {}, wgrid = {}, dgrid = {}, omega = {:.6}",
            index.get_norb(),
            wgrid,
            dgrid,
            omega
        );

        Ok(Wavefunction {
            index,
            wgrid: wgrid.clone(),
            dgrid: dgrid.clone(),
            omega,
            occ,
            gamma,
            psi_r,
            psi_g,
        })
    }

    pub fn get_psi_r(&self) -> &OrbitalStore<Array3<c64>> {
        &self.psi_r
    }

    pub fn get_psi_r_mut(&mut self) -> &mut OrbitalStore<Array3<c64>> {
        &mut self.psi_r
    }

    pub fn get_psi_g(&self) -> &OrbitalStore<Vec<c64>> {
        &self.psi_g
    }

    pub fn get_psi_g_mut(&mut self) -> &mut OrbitalStore<Vec<c64>> {
        &mut self.psi_g
    }

    pub fn skb_to_internal(&self, ispin: usize, ikpt: usize, ibnd: usize) -> Option<usize> {
        self.index.to_internal(ispin, ikpt, ibnd)
    }

    pub fn internal_to_skb(&self, idx: usize) -> WfcResult<(usize, usize, usize)> {
        self.index.to_triple(idx)
    }

    pub fn get_norb(&self) -> usize {
        self.index.get_norb()
    }

    pub fn get_nspin(&self) -> usize {
        self.index.get_nspin()
    }

    pub fn get_nkpt(&self) -> usize {
        self.index.get_nkpt()
    }

    pub fn get_nbnd(&self, ispin: usize, ikpt: usize) -> usize {
        self.index.get_nbnd(ispin, ikpt)
    }

    pub fn get_occ(&self, ispin: usize, ikpt: usize, ibnd: usize) -> f64 {
        self.occ[ispin][ikpt][ibnd]
    }

    pub fn get_occ_channel(&self, ispin: usize, ikpt: usize) -> &[f64] {
        &self.occ[ispin][ikpt]
    }

    pub fn get_omega(&self) -> f64 {
        self.omega
    }

    pub fn get_wgrid(&self) -> &FFTGrid {
        &self.wgrid
    }

    pub fn get_dgrid(&self) -> &FFTGrid {
        &self.dgrid
    }

    pub fn is_gamma(&self) -> bool {
        self.gamma
    }

    pub fn clear(&mut self) {
        self.psi_r.clear();
        self.psi_g.clear();
    }

    pub fn display(&self) {
        println!("   {:-^88}", " wavefunction ");
        println!();

        println!("   nspin  = {}", self.get_nspin());
        println!("   nkpt   = {}", self.get_nkpt());
        println!("   norb   = {}", self.get_norb());
        println!("   wgrid  = {}", self.wgrid);
        println!("   dgrid  = {}", self.dgrid);
        println!("   omega  = {:16.6} (Bohr^3)", self.omega);
        println!("   gamma  = {}", self.gamma);

        println!();
        println!("   occupations");
        println!();

        for ispin in 0..self.get_nspin() {
            for ikpt in 0..self.get_nkpt() {
                println!(
                    "   spin {}  kpt {} : {:?}",
                    ispin,
                    ikpt,
                    self.get_occ_channel(ispin, ikpt)
                );
            }
        }
    }
}

fn resolve_occ(index: &OrbitalIndex, occ: &Occupations) -> WfcResult<Vec<Vec<Vec<f64>>>> {
    let nspin = index.get_nspin();
    let nkpt = index.get_nkpt();

    let mut resolved = vec![vec![Vec::new(); nkpt]; nspin];

    match occ {
        // one sequence broadcast to every channel
        Occupations::Uniform(seq) => {
            for ispin in 0..nspin {
                for ikpt in 0..nkpt {
                    resolved[ispin][ikpt] = fit_channel(seq, index.get_nbnd(ispin, ikpt));
                }
            }
        }

        // one sequence per channel
        Occupations::PerChannel(table) => {
            if table.len() != nspin || table.iter().any(|row| row.len() != nkpt) {
                return Err(WfcError::UnsupportedConfiguration(format!(
                    "occupation table shape does not match (nspin, nkpt) = ({}, {})",
                    nspin, nkpt
                )));
            }

            for ispin in 0..nspin {
                for ikpt in 0..nkpt {
                    resolved[ispin][ikpt] =
                        fit_channel(&table[ispin][ikpt], index.get_nbnd(ispin, ikpt));
                }
            }
        }
    }

    Ok(resolved)
}

// Truncate or zero-pad a sequence to the channel's own band count.
fn fit_channel(seq: &[f64], nbnd: usize) -> Vec<f64> {
    let mut channel = vec![0.0; nbnd];

    let ncopy = seq.len().min(nbnd);

    channel[..ncopy].copy_from_slice(&seq[..ncopy]);

    channel
}
