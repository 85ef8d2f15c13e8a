// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod browse;
pub mod chat;
pub mod errors;
pub mod http_server;
pub mod sources;

pub use browse::{browse_handler, BrowseApiRequest, BrowseApiResponse};
pub use chat::{chat_turn_handler, topic_handler, ChatTurnRequest, ChatTurnResponse};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, AppState, HealthResponse};
