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

use crate::manager::{PromptManager, PromptSink};
use aura::EmotionReading;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Producer side of the blend queue. Submission never blocks: a full
/// queue drops the sample, which the next reading supersedes anyway.
#[derive(Clone)]
pub struct BlendHandle {
    tx: mpsc::Sender<EmotionReading>,
}

impl BlendHandle {
    pub fn submit(&self, reading: EmotionReading) -> bool {
        match self.tx.try_send(reading) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                debug!("blend queue full, dropping sample");
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!("blend worker stopped, dropping sample");
                false
            }
        }
    }
}

/// Single state-owning task between the classification pipeline and
/// the prompt manager. Readings arrive over a bounded channel; each
/// one is applied and published in turn. Dropping every `BlendHandle`
/// ends the loop after in-flight updates complete, so shutdown never
/// abandons a half-applied blend.
pub fn spawn_blend_worker(
    manager: Arc<PromptManager>,
    sink: Arc<dyn PromptSink>,
    capacity: usize,
) -> (BlendHandle, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<EmotionReading>(capacity.max(1));

    let handle = tokio::spawn(async move {
        while let Some(reading) = rx.recv().await {
            // Readings carry intensity on the [0, 100] scale; the
            // blend works in [0, 1].
            let intensity = reading.intensity / 100.0;
            match manager
                .apply_and_publish(reading.label, intensity, sink.as_ref())
                .await
            {
                Ok(snapshot) => {
                    info!(
                        label = %snapshot.label,
                        intensity = snapshot.intensity,
                        prompts = snapshot.prompts.len(),
                        "published prompt blend"
                    );
                }
                Err(e) => {
                    warn!(error = %e, "prompt publish failed, state retained for next attempt");
                }
            }
        }
        debug!("blend worker draining complete, stopping");
    });

    (BlendHandle { tx }, handle)
}
