// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod public;
pub mod review;
pub mod sections;

use crate::domain::article::PageRequest;
use serde::Deserialize;
use utoipa::IntoParams;

/// `page` starts at 1; a `page_size` outside 1..=100 falls back to 10.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageParams {
    pub fn to_request(self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(PageRequest::DEFAULT_PAGE_SIZE),
        )
    }
}
