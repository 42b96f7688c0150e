use crate::dictionary::DictionaryError;
use crate::types::message::AppMessageResult;

pub type SystemResult<T> = core::result::Result<T, SystemError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SystemError {
    #[error("display error: {0}")]
    Display(#[from] DisplayError),
    #[error("app message error: {0}")]
    Message(#[from] AppMessageResult),
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DisplayError {
    #[error("region has not been created")]
    UnknownRegion,
    #[error("region already exists")]
    RegionExists,
}
