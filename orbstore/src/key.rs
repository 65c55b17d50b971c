use dfttypes::WfcError;

use std::convert::TryFrom;

// A store key is either the internal index itself or the semantic
// (spin, kpoint, band) index that resolves to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitalKey {
    Internal(usize),
    Skb(usize, usize, usize),
}

impl From<usize> for OrbitalKey {
    fn from(idx: usize) -> OrbitalKey {
        OrbitalKey::Internal(idx)
    }
}

impl From<(usize, usize, usize)> for OrbitalKey {
    fn from(skb: (usize, usize, usize)) -> OrbitalKey {
        OrbitalKey::Skb(skb.0, skb.1, skb.2)
    }
}

impl From<[usize; 3]> for OrbitalKey {
    fn from(skb: [usize; 3]) -> OrbitalKey {
        OrbitalKey::Skb(skb[0], skb[1], skb[2])
    }
}

// Signed inputs arrive from parsers and scripting front ends; a negative
// component cannot name an orbital.
impl TryFrom<i64> for OrbitalKey {
    type Error = WfcError;

    fn try_from(idx: i64) -> Result<OrbitalKey, WfcError> {
        if idx < 0 {
            return Err(WfcError::InvalidKeyType(format!(
                "key must be an internal index or a (spin, kpoint, band) index, got {}",
                idx
            )));
        }

        Ok(OrbitalKey::Internal(idx as usize))
    }
}

impl TryFrom<(i64, i64, i64)> for OrbitalKey {
    type Error = WfcError;

    fn try_from(skb: (i64, i64, i64)) -> Result<OrbitalKey, WfcError> {
        let (ispin, ikpt, ibnd) = skb;

        if ispin < 0 || ikpt < 0 || ibnd < 0 {
            return Err(WfcError::InvalidKeyType(format!(
                "key must be an internal index or a (spin, kpoint, band) index, got ({}, {}, {})",
                ispin, ikpt, ibnd
            )));
        }

        Ok(OrbitalKey::Skb(ispin as usize, ikpt as usize, ibnd as usize))
    }
}

#[test]
fn test_key_conversions() {
    assert_eq!(OrbitalKey::from(4usize), OrbitalKey::Internal(4));
    assert_eq!(OrbitalKey::from((1, 0, 2)), OrbitalKey::Skb(1, 0, 2));
    assert_eq!(OrbitalKey::from([1, 0, 2]), OrbitalKey::Skb(1, 0, 2));

    assert_eq!(OrbitalKey::try_from(4i64).unwrap(), OrbitalKey::Internal(4));
    assert_eq!(
        OrbitalKey::try_from((1i64, 0i64, 2i64)).unwrap(),
        OrbitalKey::Skb(1, 0, 2)
    );
}

#[test]
fn test_key_rejects_negative() {
    match OrbitalKey::try_from(-1i64).unwrap_err() {
        WfcError::InvalidKeyType(msg) => assert!(msg.contains("-1")),
        other => panic!("unexpected error {:?}", other),
    }

    match OrbitalKey::try_from((0i64, -1i64, 0i64)).unwrap_err() {
        WfcError::InvalidKeyType(msg) => assert!(msg.contains("(0, -1, 0)")),
        other => panic!("unexpected error {:?}", other),
    }
}
