//! One module per backend resource.
//!
//! Functions log nothing on success and convert API errors to
//! [ClientError::ApiRequest] reports with the HTTP status attached.

use error_stack::Result;

use crate::ClientError;

pub mod agencies;
pub mod auth;
pub mod comments;
pub mod media;
pub mod notifications;
pub mod reports;
pub mod stats;
pub mod users;
pub mod wallet;

/// Page selection for list requests. Pages start from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(page: u32, per_page: u32) -> Result<Self, ClientError> {
        if page == 0 {
            return Err(ClientError::InvalidInput("page numbers start from 1".to_string()).report());
        }
        if per_page == 0 || per_page > Self::MAX_PER_PAGE {
            return Err(ClientError::InvalidInput(format!(
                "per_page must be between 1 and {}",
                Self::MAX_PER_PAGE
            ))
            .report());
        }
        Ok(Self { page, per_page })
    }

    pub fn first(per_page: u32) -> Result<Self, ClientError> {
        Self::new(1, per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_validation() {
        assert!(PageRequest::new(1, 20).is_ok());
        assert!(PageRequest::new(0, 20).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, PageRequest::MAX_PER_PAGE + 1).is_err());
    }
}
