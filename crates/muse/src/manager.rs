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

use crate::composite::compose_prompt;
use crate::error::PublishError;
use crate::styles::StylePalette;
use async_trait::async_trait;
use aura::{ConfigResult, EmotionLabel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// One (text, weight) pair as consumed by a generative backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedPrompt {
    pub text: String,
    pub weight: f64,
}

/// A single-point-in-time view of the blend: every prompt with a
/// non-zero weight, plus the label and clamped intensity it reflects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromptSnapshot {
    pub prompts: Vec<WeightedPrompt>,
    pub label: EmotionLabel,
    pub intensity: f64,
}

/// The publish capability supplied by the generative media service.
/// Each publish carries the full current non-zero set, never a delta.
#[async_trait]
pub trait PromptSink: Send + Sync {
    async fn send_weighted_prompts(
        &self,
        prompts: &[WeightedPrompt],
    ) -> Result<(), PublishError>;
}

/// How the active emotion is voiced in the blend.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// The label's own text carries the weight directly.
    Simple,
    /// A single synthesised composite description carries the weight.
    #[default]
    Composite,
}

struct BlendState {
    weights: HashMap<String, f64>,
    composite_key: Option<String>,
    label: EmotionLabel,
    intensity: f64,
}

/// Owns the current weighted-prompt blend: one fixed base entry, one
/// entry per emotion label, and (in composite mode) at most one
/// synthesised composite entry. All mutation goes through `apply`
/// under the state lock, so readers never observe the mid-update
/// all-zero state.
pub struct PromptManager {
    base_text: String,
    palette: StylePalette,
    mode: BlendMode,
    state: Mutex<BlendState>,
}

impl PromptManager {
    pub fn new(
        base_text: impl Into<String>,
        base_weight: f64,
        palette: StylePalette,
        mode: BlendMode,
    ) -> ConfigResult<Self> {
        palette.validate()?;
        let base_text = base_text.into();

        let mut weights = HashMap::new();
        weights.insert(base_text.clone(), base_weight.max(0.0));
        for label in EmotionLabel::ALL {
            weights.insert(label.display_name().to_string(), 0.0);
        }

        Ok(Self {
            base_text,
            palette,
            mode,
            state: Mutex::new(BlendState {
                weights,
                composite_key: None,
                label: EmotionLabel::Neutral,
                intensity: 0.0,
            }),
        })
    }

    pub fn base_text(&self) -> &str {
        &self.base_text
    }

    /// Replaces the active emotion entry: resets every emotion weight
    /// to zero, clamps the intensity into [0, 1] and installs the new
    /// entry, leaving the base weight untouched. The returned snapshot
    /// is taken inside the same critical section.
    pub async fn apply(&self, label: EmotionLabel, intensity: f64) -> PromptSnapshot {
        let mut state = self.state.lock().await;

        for other in EmotionLabel::ALL {
            if let Some(weight) = state.weights.get_mut(other.display_name()) {
                *weight = 0.0;
            }
        }

        let clamped = intensity.clamp(0.0, 1.0);
        match self.mode {
            BlendMode::Simple => {
                state
                    .weights
                    .insert(label.display_name().to_string(), clamped);
            }
            BlendMode::Composite => {
                if let Some(stale) = state.composite_key.take() {
                    state.weights.remove(&stale);
                }
                // The palette is validated complete at construction;
                // the neutral record stands in if it ever is not.
                let record = self
                    .palette
                    .get(label)
                    .or_else(|| self.palette.get(EmotionLabel::Neutral));
                if let Some(record) = record {
                    let key = compose_prompt(record, clamped);
                    state.weights.insert(key.clone(), clamped);
                    state.composite_key = Some(key);
                }
            }
        }

        state.label = label;
        state.intensity = clamped;
        debug!(label = %label, intensity = clamped, "prompt blend updated");

        Self::collect(&state)
    }

    /// A consistent view of the current blend.
    pub async fn snapshot(&self) -> PromptSnapshot {
        let state = self.state.lock().await;
        Self::collect(&state)
    }

    /// State update first, then delivery. A failed publish is reported
    /// as a delivery failure and never rolls back the in-memory state;
    /// the next publish carries the full set again.
    pub async fn apply_and_publish(
        &self,
        label: EmotionLabel,
        intensity: f64,
        sink: &dyn PromptSink,
    ) -> Result<PromptSnapshot, PublishError> {
        let snapshot = self.apply(label, intensity).await;
        sink.send_weighted_prompts(&snapshot.prompts).await?;
        Ok(snapshot)
    }

    fn collect(state: &BlendState) -> PromptSnapshot {
        let mut prompts: Vec<WeightedPrompt> = state
            .weights
            .iter()
            .filter(|(_, weight)| **weight > 0.0)
            .map(|(text, weight)| WeightedPrompt {
                text: text.clone(),
                weight: *weight,
            })
            .collect();
        prompts.sort_by(|a, b| a.text.cmp(&b.text));

        PromptSnapshot {
            prompts,
            label: state.label,
            intensity: state.intensity,
        }
    }
}
