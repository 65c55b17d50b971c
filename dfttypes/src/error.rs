use thiserror::Error;

pub type WfcResult<T> = std::result::Result<T, WfcError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WfcError {
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("invalid key type: {0}")]
    InvalidKeyType(String),

    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("no orbital stored at internal index {0}")]
    KeyNotFound(usize),
}

#[test]
fn test_error_messages() {
    let e = WfcError::UnsupportedConfiguration("k points are not supported yet".to_string());
    assert_eq!(
        format!("{}", e),
        "unsupported configuration: k points are not supported yet"
    );

    let e = WfcError::KeyNotFound(5);
    assert_eq!(format!("{}", e), "no orbital stored at internal index 5");
}
