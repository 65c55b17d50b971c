use enum_as_inner::EnumAsInner;

mod error;

pub use error::{WfcError, WfcResult};

// Band counts per (spin, k-point) channel. Uniform broadcasts one count to
// every channel; PerChannel must match the (nspin, nkpt) layout exactly.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum NBands {
    Uniform(usize),
    PerChannel(Vec<Vec<usize>>),
}

// Occupation numbers. Uniform broadcasts one sequence to every channel;
// PerChannel supplies one sequence per (spin, k-point) channel.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Occupations {
    Uniform(Vec<f64>),
    PerChannel(Vec<Vec<Vec<f64>>>),
}

// cargo test test_dfttypes --lib -- --nocapture
#[test]
fn test_dfttypes() {
    let nbnd = NBands::Uniform(4);

    assert_eq!(*nbnd.as_uniform().unwrap(), 4);
    assert!(nbnd.as_per_channel().is_none());

    let nbnd = NBands::PerChannel(vec![vec![3], vec![5]]);

    let table = nbnd.as_per_channel().unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table[1][0], 5);

    let occ = Occupations::Uniform(vec![1.0, 1.0, 0.0]);

    assert_eq!(occ.as_uniform().unwrap().len(), 3);

    let occ = Occupations::PerChannel(vec![vec![vec![1.0, 0.5]], vec![vec![1.0, 0.0]]]);

    let channels = occ.as_per_channel().unwrap();

    assert_eq!(channels[0][0], vec![1.0, 0.5]);
    assert_eq!(channels[1][0], vec![1.0, 0.0]);
}
