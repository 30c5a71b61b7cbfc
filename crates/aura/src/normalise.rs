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

use crate::error::{ConfigError, ConfigResult};
use crate::metrics::{Metric, MetricSample, NormalisedSample};
use std::collections::HashMap;

/// Rescales a raw metric value into [-1, 1] against its declared range.
/// A degenerate range (max == min) carries no information and maps to 0.
/// Out-of-range raw input is passed through un-clamped; the scorer
/// clamps the axis outputs, not the individual channels.
pub fn normalise(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    2.0 * ((value - min) / (max - min)) - 1.0
}

/// Per-metric raw value ranges. Device API versions disagree on scale
/// ((0, 1) vs (0, 100)), so the range is deployment configuration
/// rather than a per-metric constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRanges {
    ranges: [(f64, f64); Metric::COUNT],
}

impl MetricRanges {
    /// Every metric in the fixed set must carry a range.
    pub fn from_map(ranges: &HashMap<Metric, (f64, f64)>) -> ConfigResult<Self> {
        let mut fixed = [(0.0, 0.0); Metric::COUNT];
        for metric in Metric::ALL {
            match ranges.get(&metric) {
                Some(range) => fixed[metric.index()] = *range,
                None => return Err(ConfigError::MissingMetricRange { metric }),
            }
        }
        Ok(Self { ranges: fixed })
    }

    pub fn uniform(min: f64, max: f64) -> Self {
        Self {
            ranges: [(min, max); Metric::COUNT],
        }
    }

    pub fn get(&self, metric: Metric) -> (f64, f64) {
        self.ranges[metric.index()]
    }

    pub fn normalise_sample(&self, sample: &MetricSample) -> NormalisedSample {
        let mut values = [0.0; Metric::COUNT];
        for metric in Metric::ALL {
            let (min, max) = self.get(metric);
            values[metric.index()] = normalise(sample.get(metric), min, max);
        }
        NormalisedSample::new(values)
    }
}

impl Default for MetricRanges {
    fn default() -> Self {
        Self::uniform(0.0, 1.0)
    }
}
