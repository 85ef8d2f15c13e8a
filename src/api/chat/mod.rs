// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat and topic API endpoints

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{chat_turn_handler, topic_handler};
pub use request::{ChatTurnRequest, TopicRequest};
pub use response::{ChatTurnResponse, TopicResponse};
