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

use crate::classifier::{AngularPartition, EmotionClassifier, IntensityCurve, Sector};
use crate::error::{ConfigError, ConfigResult};
use crate::metrics::Metric;
use crate::normalise::MetricRanges;
use crate::scorer::{AffectScorer, AxisWeights};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Deployment configuration for the inference pipeline: metric ranges,
/// axis weight tables, classifier thresholds and the angular partition.
/// Weight tables are tuning surface, not compiled constants.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AffectConfig {
    pub ranges: HashMap<Metric, (f64, f64)>,
    pub weights: WeightsSection,
    pub classifier: ClassifierSection,
    pub partition: Vec<Sector>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WeightsSection {
    pub valence: HashMap<Metric, f64>,
    pub arousal: HashMap<Metric, f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClassifierSection {
    pub neutral_threshold: f64,
    pub intensity_curve: IntensityCurve,
    /// Raw focus readings at or below this value are excluded from the
    /// axis computation. `None` disables the gate.
    pub focus_gate: Option<f64>,
}

impl AffectConfig {
    pub fn load_from_file(config_path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigFileError {
                path: config_path.display().to_string(),
                source,
            }
        })?;
        let config: AffectConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config/affect.toml")
    }

    pub fn load_or_default() -> Self {
        let config_path = Self::default_config_path();
        Self::load_from_file(&config_path).unwrap_or_else(|e| {
            debug!(path = %config_path.display(), error = %e, "using built-in affect configuration");
            Self::default()
        })
    }

    pub fn ranges(&self) -> ConfigResult<MetricRanges> {
        MetricRanges::from_map(&self.ranges)
    }

    pub fn scorer(&self) -> ConfigResult<AffectScorer> {
        let ranges = self.ranges()?;
        let valence = AxisWeights::from_map("valence", &self.weights.valence)?;
        let arousal = AxisWeights::from_map("arousal", &self.weights.arousal)?;
        if let Some(gate) = self.classifier.focus_gate {
            if !gate.is_finite() || gate < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    name: "focus_gate",
                    value: gate,
                });
            }
        }
        Ok(AffectScorer::new(
            ranges,
            valence,
            arousal,
            self.classifier.focus_gate,
        ))
    }

    pub fn classifier(&self) -> ConfigResult<EmotionClassifier> {
        let partition = AngularPartition::new(self.partition.clone())?;
        EmotionClassifier::new(
            partition,
            self.classifier.neutral_threshold,
            self.classifier.intensity_curve,
        )
    }

    /// Exhaustive load-time validation; any violation is fatal.
    pub fn validate(&self) -> ConfigResult<()> {
        self.scorer()?;
        self.classifier()?;
        Ok(())
    }
}

impl Default for AffectConfig {
    fn default() -> Self {
        let mut ranges = HashMap::new();
        for metric in Metric::ALL {
            ranges.insert(metric, (0.0, 1.0));
        }

        let valence = HashMap::from([
            (Metric::Relaxation, 0.35),
            (Metric::Interest, 0.25),
            (Metric::Engagement, 0.2),
            (Metric::LexicalExcitement, 0.2),
            (Metric::Focus, 0.1),
            (Metric::Excitement, 0.1),
            (Metric::Stress, -0.5),
        ]);
        let arousal = HashMap::from([
            (Metric::Excitement, 0.4),
            (Metric::LexicalExcitement, 0.2),
            (Metric::Stress, 0.15),
            (Metric::Interest, 0.15),
            (Metric::Engagement, 0.15),
            (Metric::Focus, 0.05),
            (Metric::Relaxation, -0.2),
        ]);

        Self {
            ranges,
            weights: WeightsSection { valence, arousal },
            classifier: ClassifierSection {
                neutral_threshold: 0.1,
                intensity_curve: IntensityCurve::Linear,
                focus_gate: Some(0.1),
            },
            partition: AngularPartition::sixteen_sector().sectors().to_vec(),
        }
    }
}
