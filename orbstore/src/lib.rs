mod key;
mod transform;

pub use key::OrbitalKey;
pub use transform::{Transform, TransformIdentity};

use dfttypes::{WfcError, WfcResult};
use orbindex::OrbitalIndex;

use std::collections::HashMap;
use std::rc::Rc;

// Keyed container holding one field per orbital. Entries live under the
// internal index; semantic (spin, kpoint, band) keys are resolved through
// the shared OrbitalIndex before every container operation.
pub struct OrbitalStore<T> {
    index: Rc<OrbitalIndex>,
    data: HashMap<usize, T>,
    transform: Box<dyn Transform<T>>,
}

impl<T> OrbitalStore<T> {
    pub fn new(index: Rc<OrbitalIndex>) -> OrbitalStore<T> {
        OrbitalStore::with_transform(index, Box::new(TransformIdentity))
    }

    pub fn with_transform(
        index: Rc<OrbitalIndex>,
        transform: Box<dyn Transform<T>>,
    ) -> OrbitalStore<T> {
        OrbitalStore {
            index,
            data: HashMap::new(),
            transform,
        }
    }

    // Internal indices pass through unchecked; a bad one surfaces later as
    // KeyNotFound. Triples are validated against the channel bounds first,
    // then resolved through the index maps.
    pub fn resolve_key(&self, key: impl Into<OrbitalKey>) -> WfcResult<usize> {
        match key.into() {
            OrbitalKey::Internal(idx) => Ok(idx),

            OrbitalKey::Skb(ispin, ikpt, ibnd) => {
                let nspin = self.index.get_nspin();
                let nkpt = self.index.get_nkpt();

                if ispin >= nspin || ikpt >= nkpt || ibnd >= self.index.get_nbnd(ispin, ikpt) {
                    return Err(WfcError::IndexOutOfRange(format!(
                        "(spin, kpoint, band) index ({}, {}, {}) out of range ({}, {}, {:?})",
                        ispin,
                        ikpt,
                        ibnd,
                        nspin,
                        nkpt,
                        self.index.get_nbnd_table()
                    )));
                }

                // every in-range triple is in the map by construction
                Ok(self
                    .index
                    .to_internal(ispin, ikpt, ibnd)
                    .expect("in-range triple not found in orbital index"))
            }
        }
    }

    pub fn get(&self, key: impl Into<OrbitalKey>) -> WfcResult<&T> {
        let idx = self.resolve_key(key)?;

        self.data.get(&idx).ok_or(WfcError::KeyNotFound(idx))
    }

    pub fn set(&mut self, key: impl Into<OrbitalKey>, value: T) -> WfcResult<()> {
        let idx = self.resolve_key(key)?;

        self.data.insert(idx, self.transform.apply(value));

        Ok(())
    }

    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.data.keys().copied().collect();

        indices.sort_unstable();

        indices
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get_index(&self) -> &OrbitalIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests;
