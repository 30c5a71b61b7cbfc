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
use crate::scorer::AffectCoordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_MAGNITUDE: f64 = std::f64::consts::SQRT_2;

/// The discrete emotion vocabulary. Every label except `Neutral` owns
/// one angular sector of the valence/arousal plane; `Neutral` is the
/// sub-threshold magnitude case and is independent of angle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    Happy,
    Excited,
    Surprised,
    Fear,
    Angry,
    Contempt,
    Disgust,
    Miserable,
    Sad,
    Depressed,
    Bored,
    Tired,
    Sleepy,
    Relaxed,
    Pleased,
    Neutral,
}

impl EmotionLabel {
    pub const COUNT: usize = 16;

    pub const ALL: [EmotionLabel; EmotionLabel::COUNT] = [
        EmotionLabel::Happy,
        EmotionLabel::Excited,
        EmotionLabel::Surprised,
        EmotionLabel::Fear,
        EmotionLabel::Angry,
        EmotionLabel::Contempt,
        EmotionLabel::Disgust,
        EmotionLabel::Miserable,
        EmotionLabel::Sad,
        EmotionLabel::Depressed,
        EmotionLabel::Bored,
        EmotionLabel::Tired,
        EmotionLabel::Sleepy,
        EmotionLabel::Relaxed,
        EmotionLabel::Pleased,
        EmotionLabel::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Excited => "excited",
            EmotionLabel::Surprised => "surprised",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Contempt => "contempt",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Miserable => "miserable",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Depressed => "depressed",
            EmotionLabel::Bored => "bored",
            EmotionLabel::Tired => "tired",
            EmotionLabel::Sleepy => "sleepy",
            EmotionLabel::Relaxed => "relaxed",
            EmotionLabel::Pleased => "pleased",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Human-facing form used in prompt text and logs.
    pub fn display_name(self) -> &'static str {
        match self {
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Excited => "Excited",
            EmotionLabel::Surprised => "Surprised",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Contempt => "Contempt",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Miserable => "Miserable",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Depressed => "Depressed",
            EmotionLabel::Bored => "Bored",
            EmotionLabel::Tired => "Tired",
            EmotionLabel::Sleepy => "Sleepy",
            EmotionLabel::Relaxed => "Relaxed",
            EmotionLabel::Pleased => "Pleased",
            EmotionLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One half-open angular sector `[start_deg, end_deg)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub label: EmotionLabel,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Sector {
    pub fn new(label: EmotionLabel, start_deg: f64, end_deg: f64) -> Self {
        Self {
            label,
            start_deg,
            end_deg,
        }
    }

    fn contains(&self, angle_deg: f64) -> bool {
        angle_deg >= self.start_deg && angle_deg < self.end_deg
    }
}

/// A total, non-overlapping, wrap-around partition of [0, 360) into
/// contiguous labelled sectors. Validated once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularPartition {
    sectors: Vec<Sector>,
}

impl AngularPartition {
    pub fn new(sectors: Vec<Sector>) -> ConfigResult<Self> {
        if sectors.is_empty() {
            return Err(ConfigError::EmptyPartition);
        }
        let first = sectors[0];
        if first.start_deg != 0.0 {
            return Err(ConfigError::PartitionOrigin {
                found: first.start_deg,
            });
        }
        let mut expected_start = 0.0;
        for sector in &sectors {
            if sector.label == EmotionLabel::Neutral {
                return Err(ConfigError::NeutralSector);
            }
            if sector.start_deg >= sector.end_deg {
                return Err(ConfigError::InvalidSector {
                    label: sector.label,
                    start_deg: sector.start_deg,
                    end_deg: sector.end_deg,
                });
            }
            if sector.start_deg != expected_start {
                return Err(ConfigError::PartitionNotContiguous {
                    expected: expected_start,
                    found: sector.start_deg,
                });
            }
            expected_start = sector.end_deg;
        }
        if expected_start != 360.0 {
            return Err(ConfigError::PartitionEnd {
                found: expected_start,
            });
        }
        Ok(Self { sectors })
    }

    /// The committed 16-label table: fifteen angular sectors plus the
    /// neutral threshold case handled by the classifier.
    pub fn sixteen_sector() -> Self {
        let sectors = vec![
            Sector::new(EmotionLabel::Happy, 0.0, 30.0),
            Sector::new(EmotionLabel::Excited, 30.0, 60.0),
            Sector::new(EmotionLabel::Surprised, 60.0, 90.0),
            Sector::new(EmotionLabel::Fear, 90.0, 112.5),
            Sector::new(EmotionLabel::Angry, 112.5, 135.0),
            Sector::new(EmotionLabel::Contempt, 135.0, 157.5),
            Sector::new(EmotionLabel::Disgust, 157.5, 180.0),
            Sector::new(EmotionLabel::Miserable, 180.0, 198.0),
            Sector::new(EmotionLabel::Sad, 198.0, 216.0),
            Sector::new(EmotionLabel::Depressed, 216.0, 234.0),
            Sector::new(EmotionLabel::Bored, 234.0, 252.0),
            Sector::new(EmotionLabel::Tired, 252.0, 270.0),
            Sector::new(EmotionLabel::Sleepy, 270.0, 300.0),
            Sector::new(EmotionLabel::Relaxed, 300.0, 330.0),
            Sector::new(EmotionLabel::Pleased, 330.0, 360.0),
        ];
        // Totality of the built-in table is pinned by tests.
        Self { sectors }
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn label_for(&self, angle_deg: f64) -> EmotionLabel {
        let angle = angle_deg.rem_euclid(360.0);
        for sector in &self.sectors {
            if sector.contains(angle) {
                return sector.label;
            }
        }
        // rem_euclid keeps the angle inside [0, 360) and the partition
        // is total, so only a rounding artefact at the seam lands here.
        self.sectors[self.sectors.len() - 1].label
    }
}

impl Default for AngularPartition {
    fn default() -> Self {
        Self::sixteen_sector()
    }
}

/// Maps affect magnitude onto the [0, 100] intensity scale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntensityCurve {
    #[default]
    Linear,
    /// Square-root reshaping that boosts sensitivity at low magnitudes.
    PerceptualSqrt,
}

impl IntensityCurve {
    pub fn apply(self, magnitude: f64) -> f64 {
        let linear = (magnitude / MAX_MAGNITUDE * 100.0).min(100.0);
        match self {
            IntensityCurve::Linear => linear,
            IntensityCurve::PerceptualSqrt => ((linear / 100.0).sqrt() * 100.0).min(100.0),
        }
    }
}

/// The classified output for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub label: EmotionLabel,
    /// Affect magnitude on the [0, 100] scale.
    pub intensity: f64,
    pub valence: f64,
    pub arousal: f64,
}

/// Converts a valence/arousal coordinate into a discrete label plus
/// continuous intensity. Pure and deterministic; instances carry only
/// immutable configuration.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    partition: AngularPartition,
    neutral_threshold: f64,
    curve: IntensityCurve,
}

impl EmotionClassifier {
    pub fn new(
        partition: AngularPartition,
        neutral_threshold: f64,
        curve: IntensityCurve,
    ) -> ConfigResult<Self> {
        if !(0.0..=MAX_MAGNITUDE).contains(&neutral_threshold) {
            return Err(ConfigError::InvalidThreshold {
                name: "neutral_threshold",
                value: neutral_threshold,
            });
        }
        Ok(Self {
            partition,
            neutral_threshold,
            curve,
        })
    }

    pub fn classify(&self, coordinate: AffectCoordinate) -> EmotionReading {
        let magnitude = coordinate.magnitude();
        // Near-neutral states still report their small continuous
        // intensity rather than a fixed zero.
        let intensity = self.curve.apply(magnitude);

        let label = if magnitude < self.neutral_threshold {
            EmotionLabel::Neutral
        } else {
            let mut angle = coordinate.arousal.atan2(coordinate.valence).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            self.partition.label_for(angle)
        };

        EmotionReading {
            label,
            intensity,
            valence: coordinate.valence,
            arousal: coordinate.arousal,
        }
    }
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self {
            partition: AngularPartition::sixteen_sector(),
            neutral_threshold: 0.1,
            curve: IntensityCurve::Linear,
        }
    }
}
