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

use crate::error::{SampleError, SampleResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The fixed performance-metric key set. Ordering matches the device
/// API vector (`eng, exc, lex, str, rel, int, foc`); axis weights and
/// ranges are keyed on exactly this set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Engagement,
    Excitement,
    LexicalExcitement,
    Stress,
    Relaxation,
    Interest,
    Focus,
}

impl Metric {
    pub const COUNT: usize = 7;

    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::Engagement,
        Metric::Excitement,
        Metric::LexicalExcitement,
        Metric::Stress,
        Metric::Relaxation,
        Metric::Interest,
        Metric::Focus,
    ];

    pub fn index(self) -> usize {
        match self {
            Metric::Engagement => 0,
            Metric::Excitement => 1,
            Metric::LexicalExcitement => 2,
            Metric::Stress => 3,
            Metric::Relaxation => 4,
            Metric::Interest => 5,
            Metric::Focus => 6,
        }
    }

    /// Short key used on the device wire and in keyed sample payloads.
    pub fn wire_key(self) -> &'static str {
        match self {
            Metric::Engagement => "eng",
            Metric::Excitement => "exc",
            Metric::LexicalExcitement => "lex",
            Metric::Stress => "str",
            Metric::Relaxation => "rel",
            Metric::Interest => "int",
            Metric::Focus => "foc",
        }
    }

    pub fn from_wire_key(key: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.wire_key() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Engagement => "engagement",
            Metric::Excitement => "excitement",
            Metric::LexicalExcitement => "lexical_excitement",
            Metric::Stress => "stress",
            Metric::Relaxation => "relaxation",
            Metric::Interest => "interest",
            Metric::Focus => "focus",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading of the full metric set at a point in time. Values are
/// raw device units; see `MetricRanges` for the per-deployment scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    values: [f64; Metric::COUNT],
}

impl MetricSample {
    /// Builds a sample from the ordered device vector.
    pub fn from_ordered(values: &[f64]) -> SampleResult<Self> {
        if values.len() != Metric::COUNT {
            return Err(SampleError::LengthMismatch {
                expected: Metric::COUNT,
                found: values.len(),
            });
        }
        let mut fixed = [0.0; Metric::COUNT];
        fixed.copy_from_slice(values);
        let sample = Self { values: fixed };
        sample.check_finite()?;
        Ok(sample)
    }

    /// Builds a sample from a wire-keyed payload. Every metric in the
    /// fixed set must be present; unknown extra keys are ignored.
    pub fn from_keyed(values: &HashMap<String, f64>) -> SampleResult<Self> {
        let mut fixed = [0.0; Metric::COUNT];
        for metric in Metric::ALL {
            match values.get(metric.wire_key()) {
                Some(value) => fixed[metric.index()] = *value,
                None => return Err(SampleError::MissingMetric { metric }),
            }
        }
        let sample = Self { values: fixed };
        sample.check_finite()?;
        Ok(sample)
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    fn check_finite(&self) -> SampleResult<()> {
        for metric in Metric::ALL {
            let value = self.get(metric);
            if !value.is_finite() {
                return Err(SampleError::NonFinite { metric, value });
            }
        }
        Ok(())
    }
}

/// A metric sample rescaled into signed unit space, one value per
/// metric in [-1, 1] for in-range raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisedSample {
    values: [f64; Metric::COUNT],
}

impl NormalisedSample {
    pub(crate) fn new(values: [f64; Metric::COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    pub(crate) fn set(&mut self, metric: Metric, value: f64) {
        self.values[metric.index()] = value;
    }
}
