use dfttypes::{NBands, WfcError, WfcResult};
use log::debug;

use std::collections::HashMap;
use std::fmt;

// Bijection between the internal orbital index and the (spin, kpoint, band)
// index. Internal indices run spin-major, kpoint next, band fastest:
//
//    for ispin in 0..nspin
//        for ikpt in 0..nkpt
//            for ibnd in 0..nbnd[ispin][ikpt]
//                idx += 1
//
// Both maps are built once at construction and never mutated afterwards.
#[derive(Debug)]
pub struct OrbitalIndex {
    nspin: usize,
    nkpt: usize,
    nbnd: Vec<Vec<usize>>,
    idx_skb_map: Vec<(usize, usize, usize)>,
    skb_idx_map: HashMap<(usize, usize, usize), usize>,
    norb: usize,
}

impl OrbitalIndex {
    pub fn new(nspin: usize, nkpt: usize, nbnd: &NBands) -> WfcResult<OrbitalIndex> {
        if nspin == 0 {
            return Err(WfcError::UnsupportedConfiguration(format!(
                "nspin = {}, need at least one spin channel",
                nspin
            )));
        }

        if nkpt != 1 {
            return Err(WfcError::UnsupportedConfiguration(format!(
                "nkpt = {}, k points are not supported yet",
                nkpt
            )));
        }

        let nbnd = resolve_nbnd(nspin, nkpt, nbnd)?;

        let mut idx_skb_map = Vec::new();

        for ispin in 0..nspin {
            for ikpt in 0..nkpt {
                for ibnd in 0..nbnd[ispin][ikpt] {
                    idx_skb_map.push((ispin, ikpt, ibnd));
                }
            }
        }

        let norb = idx_skb_map.len();

        let skb_idx_map: HashMap<(usize, usize, usize), usize> = idx_skb_map
            .iter()
            .enumerate()
            .map(|(idx, skb)| (*skb, idx))
            .collect();

        debug!(
            "orbital index built: nspin = {}, nkpt = {}, norb = {}",
            nspin, nkpt, norb
        );

        Ok(OrbitalIndex {
            nspin,
            nkpt,
            nbnd,
            idx_skb_map,
            skb_idx_map,
            norb,
        })
    }

    // No range validation here; an unmapped triple is simply absent.
    pub fn to_internal(&self, ispin: usize, ikpt: usize, ibnd: usize) -> Option<usize> {
        self.skb_idx_map.get(&(ispin, ikpt, ibnd)).copied()
    }

    pub fn to_triple(&self, idx: usize) -> WfcResult<(usize, usize, usize)> {
        if idx >= self.norb {
            return Err(WfcError::IndexOutOfRange(format!(
                "internal index {} out of range (norb = {})",
                idx, self.norb
            )));
        }

        Ok(self.idx_skb_map[idx])
    }

    pub fn get_nspin(&self) -> usize {
        self.nspin
    }

    pub fn get_nkpt(&self) -> usize {
        self.nkpt
    }

    pub fn get_nbnd(&self, ispin: usize, ikpt: usize) -> usize {
        self.nbnd[ispin][ikpt]
    }

    pub fn get_nbnd_table(&self) -> &Vec<Vec<usize>> {
        &self.nbnd
    }

    pub fn get_norb(&self) -> usize {
        self.norb
    }
}

fn resolve_nbnd(nspin: usize, nkpt: usize, nbnd: &NBands) -> WfcResult<Vec<Vec<usize>>> {
    match nbnd {
        // all spin channels and k points share the same band count
        NBands::Uniform(n) => Ok(vec![vec![*n; nkpt]; nspin]),

        // every spin channel and k point has its own band count
        NBands::PerChannel(table) => {
            if table.len() != nspin || table.iter().any(|row| row.len() != nkpt) {
                return Err(WfcError::UnsupportedConfiguration(format!(
                    "nbnd table {:?} does not match (nspin, nkpt) = ({}, {})",
                    table, nspin, nkpt
                )));
            }

            Ok(table.clone())
        }
    }
}

impl fmt::Display for OrbitalIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "nspin = {}  nkpt = {}  nbnd = {:?}  norb = {}",
            self.nspin, self.nkpt, self.nbnd, self.norb
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let index = OrbitalIndex::new(2, 1, &NBands::Uniform(3)).unwrap();

        assert_eq!(index.get_norb(), 6);
        assert_eq!(index.to_internal(0, 0, 0), Some(0));
        assert_eq!(index.to_internal(1, 0, 2), Some(5));

        for idx in 0..index.get_norb() {
            let (ispin, ikpt, ibnd) = index.to_triple(idx).unwrap();
            assert_eq!(index.to_internal(ispin, ikpt, ibnd), Some(idx));
        }

        // spin-major, band-minor assignment is strictly ascending
        for idx in 1..index.get_norb() {
            let prev = index.to_triple(idx - 1).unwrap();
            let next = index.to_triple(idx).unwrap();
            assert!(prev < next);
        }
    }

    #[test]
    fn test_index_per_channel() {
        let nbnd = NBands::PerChannel(vec![vec![3], vec![5]]);

        let index = OrbitalIndex::new(2, 1, &nbnd).unwrap();

        assert_eq!(index.get_norb(), 8);
        assert_eq!(index.get_nbnd(0, 0), 3);
        assert_eq!(index.get_nbnd(1, 0), 5);

        // spin 1 starts right after the three bands of spin 0
        assert_eq!(index.to_internal(0, 0, 2), Some(2));
        assert_eq!(index.to_internal(1, 0, 0), Some(3));
        assert_eq!(index.to_internal(1, 0, 4), Some(7));

        // band 3 exists for spin 1 but not for spin 0
        assert_eq!(index.to_internal(0, 0, 3), None);
    }

    #[test]
    fn test_index_rejects_bad_config() {
        assert_eq!(
            OrbitalIndex::new(0, 1, &NBands::Uniform(3)).unwrap_err(),
            WfcError::UnsupportedConfiguration("nspin = 0, need at least one spin channel".to_string())
        );

        match OrbitalIndex::new(1, 2, &NBands::Uniform(3)).unwrap_err() {
            WfcError::UnsupportedConfiguration(msg) => {
                assert!(msg.contains("not supported yet"))
            }
            other => panic!("unexpected error {:?}", other),
        }

        let nbnd = NBands::PerChannel(vec![vec![3]]);

        match OrbitalIndex::new(2, 1, &nbnd).unwrap_err() {
            WfcError::UnsupportedConfiguration(msg) => {
                assert!(msg.contains("(2, 1)"))
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_index_to_triple_out_of_range() {
        let index = OrbitalIndex::new(2, 1, &NBands::Uniform(3)).unwrap();

        assert!(index.to_triple(5).is_ok());

        match index.to_triple(6).unwrap_err() {
            WfcError::IndexOutOfRange(msg) => {
                assert!(msg.contains("6"));
                assert!(msg.contains("norb = 6"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_index_display() {
        let index = OrbitalIndex::new(1, 1, &NBands::Uniform(2)).unwrap();

        assert_eq!(
            format!("{}", index),
            "nspin = 1  nkpt = 1  nbnd = [[2]]  norb = 2"
        );
    }
}
