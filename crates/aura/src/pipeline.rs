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

use crate::classifier::{EmotionClassifier, EmotionReading};
use crate::config::AffectConfig;
use crate::error::ConfigResult;
use crate::metrics::MetricSample;
use crate::scorer::AffectScorer;

/// The complete sample-to-emotion transformation: normalisation,
/// valence/arousal scoring and angular classification. Stateless per
/// invocation; samples may be processed in parallel.
///
/// This is the sole contract consumed by transport layers — device
/// callbacks, HTTP handlers and test harnesses all hand a
/// `MetricSample` in and take an `EmotionReading` out.
#[derive(Debug, Clone)]
pub struct AffectPipeline {
    scorer: AffectScorer,
    classifier: EmotionClassifier,
}

impl AffectPipeline {
    pub fn from_config(config: &AffectConfig) -> ConfigResult<Self> {
        Ok(Self {
            scorer: config.scorer()?,
            classifier: config.classifier()?,
        })
    }

    pub fn process(&self, sample: &MetricSample) -> EmotionReading {
        let coordinate = self.scorer.score(sample);
        self.classifier.classify(coordinate)
    }
}

impl Default for AffectPipeline {
    fn default() -> Self {
        // The built-in configuration is pinned valid by tests.
        Self::from_config(&AffectConfig::default())
            .expect("default affect configuration is valid")
    }
}
