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
use crate::normalise::MetricRanges;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point in the valence/arousal plane, both axes clamped to [-1, 1].
/// Produced fresh per sample and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffectCoordinate {
    pub valence: f64,
    pub arousal: f64,
}

impl AffectCoordinate {
    pub fn magnitude(&self) -> f64 {
        (self.valence * self.valence + self.arousal * self.arousal).sqrt()
    }
}

/// Signed weight per metric for one output axis, fixed shape over the
/// metric key set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisWeights {
    values: [f64; Metric::COUNT],
}

impl AxisWeights {
    /// A weight table missing any metric of the fixed set is a fatal
    /// configuration error.
    pub fn from_map(axis: &'static str, weights: &HashMap<Metric, f64>) -> ConfigResult<Self> {
        let mut fixed = [0.0; Metric::COUNT];
        for metric in Metric::ALL {
            match weights.get(&metric) {
                Some(weight) => fixed[metric.index()] = *weight,
                None => return Err(ConfigError::MissingAxisWeight { axis, metric }),
            }
        }
        Ok(Self { values: fixed })
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    fn weighted_sum(&self, sample: &NormalisedSample) -> f64 {
        Metric::ALL
            .into_iter()
            .map(|metric| self.get(metric) * sample.get(metric))
            .sum()
    }
}

/// Computes the valence/arousal coordinate for one metric sample as a
/// weighted linear combination of the normalised channels.
#[derive(Debug, Clone)]
pub struct AffectScorer {
    ranges: MetricRanges,
    valence: AxisWeights,
    arousal: AxisWeights,
    focus_gate: Option<f64>,
}

impl AffectScorer {
    pub fn new(
        ranges: MetricRanges,
        valence: AxisWeights,
        arousal: AxisWeights,
        focus_gate: Option<f64>,
    ) -> Self {
        Self {
            ranges,
            valence,
            arousal,
            focus_gate,
        }
    }

    pub fn score(&self, sample: &MetricSample) -> AffectCoordinate {
        let mut normalised = self.ranges.normalise_sample(sample);

        // Noise gate: a near-zero raw focus reading carries no signal
        // and is excluded from both axes.
        if let Some(gate) = self.focus_gate {
            if sample.get(Metric::Focus) <= gate {
                normalised.set(Metric::Focus, 0.0);
            }
        }

        AffectCoordinate {
            valence: self.valence.weighted_sum(&normalised).clamp(-1.0, 1.0),
            arousal: self.arousal.weighted_sum(&normalised).clamp(-1.0, 1.0),
        }
    }
}
