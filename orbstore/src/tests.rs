use super::*;

use dfttypes::NBands;

fn make_index() -> Rc<OrbitalIndex> {
    Rc::new(OrbitalIndex::new(2, 1, &NBands::Uniform(3)).unwrap())
}

#[test]
fn test_store_set_get_round_trip() {
    let mut store: OrbitalStore<Vec<f64>> = OrbitalStore::new(make_index());

    store.set((0, 0, 0), vec![1.0, 2.0]).unwrap();
    store.set(5usize, vec![3.0]).unwrap();

    // the same entry is reachable under both addressing schemes
    assert_eq!(store.get(0usize).unwrap(), &vec![1.0, 2.0]);
    assert_eq!(store.get((1, 0, 2)).unwrap(), &vec![3.0]);
    assert_eq!(store.get([1, 0, 2]).unwrap(), &vec![3.0]);

    assert_eq!(store.len(), 2);
    assert_eq!(store.get_index().get_norb(), 6);
}

#[test]
fn test_store_overwrite_keeps_one_entry() {
    let mut store: OrbitalStore<f64> = OrbitalStore::new(make_index());

    // (1, 0, 0) and internal index 3 name the same orbital
    store.set(3usize, 1.0).unwrap();
    store.set((1, 0, 0), 2.0).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(3usize).unwrap(), &2.0);
}

#[test]
fn test_store_rejects_out_of_range_triples() {
    let store: OrbitalStore<f64> = OrbitalStore::new(make_index());

    match store.resolve_key((3, 0, 0)).unwrap_err() {
        WfcError::IndexOutOfRange(msg) => {
            assert!(msg.contains("(3, 0, 0)"));
            assert!(msg.contains("(2, 1,"));
        }
        other => panic!("unexpected error {:?}", other),
    }

    // boundary values equal to the channel counts are already out of range
    assert!(store.resolve_key((2, 0, 0)).is_err());
    assert!(store.resolve_key((0, 1, 0)).is_err());
    assert!(store.resolve_key((0, 0, 3)).is_err());

    assert!(store.resolve_key((1, 0, 2)).is_ok());
}

#[test]
fn test_store_missing_entry_is_key_not_found() {
    let store: OrbitalStore<f64> = OrbitalStore::new(make_index());

    // in range but never populated
    assert_eq!(store.get(2usize).unwrap_err(), WfcError::KeyNotFound(2));

    // internal indices are unchecked, a wild one fails the same way
    assert_eq!(store.get(99usize).unwrap_err(), WfcError::KeyNotFound(99));
}

#[test]
fn test_store_indices_sorted_and_clear() {
    let mut store: OrbitalStore<f64> = OrbitalStore::new(make_index());

    store.set(5usize, 1.0).unwrap();
    store.set(0usize, 2.0).unwrap();
    store.set(3usize, 3.0).unwrap();

    assert_eq!(store.indices(), vec![0, 3, 5]);

    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.indices(), Vec::<usize>::new());
    assert_eq!(store.get(0usize).unwrap_err(), WfcError::KeyNotFound(0));

    // clearing an empty store is a no-op
    store.clear();
    assert!(store.is_empty());
}

struct TransformDouble;

impl Transform<Vec<f64>> for TransformDouble {
    fn apply(&self, value: Vec<f64>) -> Vec<f64> {
        value.iter().map(|v| 2.0 * v).collect()
    }
}

#[test]
fn test_store_applies_transform_on_write() {
    let mut store = OrbitalStore::with_transform(make_index(), Box::new(TransformDouble));

    store.set((0, 0, 1), vec![1.0, -2.5]).unwrap();

    assert_eq!(store.get(1usize).unwrap(), &vec![2.0, -5.0]);

    // overwriting re-applies the transform to the new value only
    store.set(1usize, vec![4.0]).unwrap();
    assert_eq!(store.get(1usize).unwrap(), &vec![8.0]);
}
