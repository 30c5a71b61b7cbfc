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

pub mod classifier;
pub mod config;
pub mod error;
pub mod metrics;
pub mod normalise;
pub mod pipeline;
pub mod scorer;

#[cfg(test)]
pub mod tests;

pub use classifier::{
    AngularPartition, EmotionClassifier, EmotionLabel, EmotionReading, IntensityCurve, Sector,
};
pub use config::{AffectConfig, ClassifierSection, WeightsSection};
pub use error::{AffectError, ConfigError, ConfigResult, Result, SampleError, SampleResult};
pub use metrics::{Metric, MetricSample, NormalisedSample};
pub use normalise::{normalise, MetricRanges};
pub use pipeline::AffectPipeline;
pub use scorer::{AffectCoordinate, AffectScorer, AxisWeights};
