// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Source browsing API endpoint
//!
//! Provides the `/v1/browse` HTTP endpoint over the source browser.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::browse_handler;
pub use request::BrowseApiRequest;
pub use response::BrowseApiResponse;
