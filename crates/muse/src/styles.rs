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

use aura::{ConfigError, ConfigResult, EmotionLabel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Free-text musical style description for one emotion. The fields
/// are concatenated into a composite prompt according to the active
/// intensity tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StyleRecord {
    pub base_style: String,
    pub instruments: String,
    pub tempo: String,
    pub dynamics: String,
    pub mood: String,
    pub texture: String,
}

/// One style record per emotion label. Static lookup data in spirit,
/// but loadable from TOML so deployments can re-voice the palette.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StylePalette {
    records: HashMap<EmotionLabel, StyleRecord>,
}

impl StylePalette {
    pub fn new(records: HashMap<EmotionLabel, StyleRecord>) -> ConfigResult<Self> {
        let palette = Self { records };
        palette.validate()?;
        Ok(palette)
    }

    /// Every label must carry a record; a hole here would only surface
    /// mid-session on an unlucky classification.
    pub fn validate(&self) -> ConfigResult<()> {
        for label in EmotionLabel::ALL {
            if !self.records.contains_key(&label) {
                return Err(ConfigError::MissingStyleRecord { label });
            }
        }
        Ok(())
    }

    pub fn get(&self, label: EmotionLabel) -> Option<&StyleRecord> {
        self.records.get(&label)
    }

    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileError {
            path: path.display().to_string(),
            source,
        })?;
        let palette: StylePalette = toml::from_str(&content)?;
        palette.validate()?;
        Ok(palette)
    }

    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config/styles.toml")
    }

    pub fn load_or_default() -> Self {
        Self::load_from_file(&Self::default_config_path()).unwrap_or_else(|e| {
            debug!(error = %e, "using built-in style palette");
            Self::default()
        })
    }
}

fn record(
    base_style: &str,
    instruments: &str,
    tempo: &str,
    dynamics: &str,
    mood: &str,
    texture: &str,
) -> StyleRecord {
    StyleRecord {
        base_style: base_style.to_string(),
        instruments: instruments.to_string(),
        tempo: tempo.to_string(),
        dynamics: dynamics.to_string(),
        mood: mood.to_string(),
        texture: texture.to_string(),
    }
}

impl Default for StylePalette {
    fn default() -> Self {
        let mut records = HashMap::new();
        records.insert(
            EmotionLabel::Happy,
            record(
                "bright major scales with uplifting melody and warm harmonies",
                "cheerful piano arpeggios, warm string sections, light acoustic guitar, gentle percussion with tambourine",
                "moderate to fast (120-140 BPM) with steady rhythmic pulse",
                "growing crescendo with joyful expression, dynamic contrast between verses",
                "euphoric and celebratory with infectious energy",
                "rich layered harmonies with clear melodic lines",
            ),
        );
        records.insert(
            EmotionLabel::Excited,
            record(
                "energetic rhythmic patterns with dynamic chord progressions and driving bass",
                "electric guitar with overdrive, powerful drum kit, synthesizer arpeggios, brass section stabs",
                "fast and rhythmic (140-160 BPM) with syncopated beats",
                "high energy with powerful crescendos and dramatic builds",
                "electrifying and intense with pulsating excitement",
                "dense layered arrangement with punchy rhythmic elements",
            ),
        );
        records.insert(
            EmotionLabel::Surprised,
            record(
                "unexpected harmonic changes with sudden melodic shifts and chromatic movement",
                "staccato strings with pizzicato, brass stabs, woodwind flourishes, percussion hits and cymbal crashes",
                "variable tempo with sudden changes and rhythmic surprises",
                "dramatic contrasts with surprise accents and sudden dynamic shifts",
                "whimsical and unpredictable with delightful twists",
                "sparse to dense with sudden textural changes",
            ),
        );
        records.insert(
            EmotionLabel::Fear,
            record(
                "dark minor chords with unsettling harmonies and chromatic voice leading",
                "tremolo strings in low register, muted brass, timpani rolls, prepared piano, glass harmonica",
                "variable with tension (70-120 BPM) building to climactic moments",
                "quiet to loud with sudden bursts and spine-chilling crescendos",
                "ominous and suspenseful with creeping dread",
                "thin and atmospheric building to dense climaxes",
            ),
        );
        records.insert(
            EmotionLabel::Angry,
            record(
                "aggressive chord progressions with harsh dissonant harmonies and driving rhythms",
                "distorted electric guitar with heavy palm muting, aggressive drum kit, bass guitar with overdrive, brass section fortissimo",
                "fast and intense (150-180 BPM) with powerful rhythmic drive",
                "loud and forceful with sharp attacks and aggressive accents",
                "intense and confrontational with raw emotional power",
                "thick and heavy with overlapping aggressive elements",
            ),
        );
        records.insert(
            EmotionLabel::Contempt,
            record(
                "sharp dissonant intervals with cold harmonies and angular melodic lines",
                "harsh brass with mutes, metallic percussion, processed electric guitar, industrial sounds",
                "moderate with sharp edges (100-130 BPM) with angular rhythms",
                "cutting and piercing with sharp dynamic contrasts",
                "cold and dismissive with sharp-edged superiority",
                "harsh and metallic with uncomfortable timbres",
            ),
        );
        records.insert(
            EmotionLabel::Disgust,
            record(
                "atonal clusters with unpleasant textures and harsh timbral combinations",
                "prepared piano with objects, processed vocals, noise generators, metal scraping sounds",
                "irregular and uncomfortable with unpredictable timing",
                "uncomfortable and jarring with sudden unpleasant bursts",
                "repulsive and uncomfortable with visceral rejection",
                "harsh and grating with unpleasant sonic combinations",
            ),
        );
        records.insert(
            EmotionLabel::Miserable,
            record(
                "deep emotional expression with sorrowful themes and heart-wrenching harmonies",
                "solo violin with intense vibrato, mournful cello, weeping brass, sparse piano",
                "slow with emotional rubato (50-80 BPM) following emotional peaks",
                "intense emotional peaks and valleys with dramatic expression",
                "deeply sorrowful with intense emotional catharsis",
                "exposed and vulnerable with raw emotional expression",
            ),
        );
        records.insert(
            EmotionLabel::Sad,
            record(
                "minor key melodies with melancholic phrases and descending progressions",
                "solo piano with sustain pedal, cello with vibrato, soft violin, gentle rain sounds",
                "slow and reflective (50-70 BPM) with rubato expression",
                "soft with emotional peaks and valleys, intimate expression",
                "deeply melancholic with cathartic emotional release",
                "minimal and intimate with focus on melodic expression",
            ),
        );
        records.insert(
            EmotionLabel::Depressed,
            record(
                "low register drones with minimal harmonic movement and static harmonies",
                "deep contrabass, muted strings in low positions, sparse piano, distant ambient drones",
                "very slow (40-60 BPM) with heavy, dragging feel",
                "consistently quiet with minimal variation and flat expression",
                "heavily weighted with crushing emotional burden",
                "dense and oppressive with little melodic movement",
            ),
        );
        records.insert(
            EmotionLabel::Bored,
            record(
                "repetitive patterns with monotonous rhythm and predictable progressions",
                "simple drum machine, basic synthesizer chords, repetitive bass line",
                "steady but uninspiring (90-110 BPM) with mechanical feel",
                "flat and unchanging with no dynamic interest",
                "monotonous and unstimulating with mechanical repetition",
                "thin and repetitive with minimal variation",
            ),
        );
        records.insert(
            EmotionLabel::Tired,
            record(
                "slow tempo with fading energy and drooping melodic phrases",
                "soft piano with damper pedal, muted strings, gentle acoustic guitar, soft ambient pads",
                "very slow (50-70 BPM) with gradually decreasing energy",
                "decreasing with fade-outs and diminishing returns",
                "weary and exhausted with depleted energy",
                "thin and sparse with gradually fading elements",
            ),
        );
        records.insert(
            EmotionLabel::Sleepy,
            record(
                "gentle lullaby-like melodies with soft, hypnotic textures",
                "music box melody, soft piano with sustain, warm synthesizer pads, gentle nature sounds",
                "very slow and hypnotic (40-60 BPM) with dreamlike quality",
                "extremely soft and soothing with minimal variation",
                "dreamy and hypnotic with sleep-inducing quality",
                "soft and enveloping with warm, comforting timbres",
            ),
        );
        records.insert(
            EmotionLabel::Relaxed,
            record(
                "smooth flowing harmonies with peaceful chord progressions in major keys",
                "soft acoustic piano, gentle classical guitar, warm pad synthesizers, subtle ambient textures",
                "slow and steady (60-80 BPM) with relaxed groove",
                "consistently calm with gentle swells and soft expression",
                "serene and tranquil with meditative quality",
                "sparse and airy with breathing space between notes",
            ),
        );
        records.insert(
            EmotionLabel::Pleased,
            record(
                "balanced major chord progressions with serene melodic phrases",
                "acoustic guitar fingerpicking, soft piano chords, light string ensemble, nature sounds",
                "moderate and stable (80-100 BPM) with even rhythm",
                "even and tranquil with subtle dynamic variation",
                "content and peaceful with gentle satisfaction",
                "balanced arrangement with clear separation of instruments",
            ),
        );
        records.insert(
            EmotionLabel::Neutral,
            record(
                "simple harmonic background with minimal melodic movement and stable progressions",
                "soft synthesizer pads, gentle ambient sounds, subtle field recordings",
                "moderate (80-100 BPM) with steady, unobtrusive rhythm",
                "stable and unobtrusive with minimal dynamic change",
                "calm and neutral without strong emotional direction",
                "simple and understated background atmosphere",
            ),
        );
        Self { records }
    }
}
