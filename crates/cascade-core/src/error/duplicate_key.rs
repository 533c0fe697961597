use super::Error;

/// Error when two registered items share a key, e.g. two filters bound to the
/// same column on one resource.
#[derive(Debug)]
pub(super) struct DuplicateKey {
    what: &'static str,
    key: Box<str>,
}

impl std::error::Error for DuplicateKey {}

impl core::fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "duplicate {} key: {}", self.what, self.key)
    }
}

impl Error {
    pub fn duplicate_key(what: &'static str, key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateKey(DuplicateKey {
            what,
            key: key.into().into(),
        }))
    }

    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateKey(_))
    }
}
