// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Configuration error: {0}")]
    Config(#[from] aura::ConfigError),
    #[error("Publish failure: {0}")]
    Publish(#[from] PublishError),
}

/// A delivery failure towards the generative backend. The in-memory
/// prompt state remains the source of truth; the next publish carries
/// the full current set again.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Generative backend rejected the prompt set: {reason}")]
    Backend { reason: String },
    #[error("Generative backend did not respond within {seconds} seconds")]
    Timeout { seconds: u64 },
}

pub type Result<T> = std::result::Result<T, PromptError>;
