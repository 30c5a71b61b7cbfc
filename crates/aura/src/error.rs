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

use crate::classifier::EmotionLabel;
use crate::metrics::Metric;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AffectError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Malformed sample: {0}")]
    Sample(#[from] SampleError),
}

/// Fatal at startup or first use; never retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No range configured for metric '{metric}'")]
    MissingMetricRange { metric: Metric },
    #[error("No {axis} weight configured for metric '{metric}'")]
    MissingAxisWeight { axis: &'static str, metric: Metric },
    #[error("Angular partition is empty")]
    EmptyPartition,
    #[error("Angular partition must start at 0 degrees, found {found}")]
    PartitionOrigin { found: f64 },
    #[error("Angular partition must end at 360 degrees, found {found}")]
    PartitionEnd { found: f64 },
    #[error("Angular partition is not contiguous: expected sector start {expected}, found {found}")]
    PartitionNotContiguous { expected: f64, found: f64 },
    #[error("Invalid sector for '{label}': [{start_deg}, {end_deg}) is empty or inverted")]
    InvalidSector {
        label: EmotionLabel,
        start_deg: f64,
        end_deg: f64,
    },
    #[error("'neutral' is a magnitude threshold case and cannot own an angular sector")]
    NeutralSector,
    #[error("Invalid value for '{name}': {value} is out of range")]
    InvalidThreshold { name: &'static str, value: f64 },
    #[error("No style record configured for emotion '{label}'")]
    MissingStyleRecord { label: EmotionLabel },
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML configuration: {source}")]
    TomlParseError {
        #[from]
        source: toml::de::Error,
    },
}

/// Recovered at the call boundary by rejecting the single sample.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Sample is missing required metric '{metric}'")]
    MissingMetric { metric: Metric },
    #[error("Metric '{metric}' carries a non-finite value ({value})")]
    NonFinite { metric: Metric, value: f64 },
    #[error("Expected a vector of {expected} metrics, received {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, AffectError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type SampleResult<T> = std::result::Result<T, SampleError>;
