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

use crate::styles::StyleRecord;

/// Qualifier appended to every composite prompt, banded by intensity.
pub fn intensity_qualifier(intensity: f64) -> &'static str {
    let intensity = intensity.clamp(0.0, 1.0);
    if intensity >= 0.9 {
        "with overwhelming intensity and dominant presence"
    } else if intensity >= 0.7 {
        "with very strong character and clear influence"
    } else if intensity >= 0.5 {
        "with moderate presence and noticeable impact"
    } else if intensity >= 0.3 {
        "with subtle influence and gentle touch"
    } else if intensity >= 0.1 {
        "with minimal impact and barely noticeable presence"
    } else {
        "with almost imperceptible background influence"
    }
}

/// Synthesises the single composite description for one emotion at one
/// intensity. Prompt length tracks how dominant the emotion is: the
/// tiers at 0.8 / 0.6 / 0.3 include strictly more style fields as
/// intensity rises.
pub fn compose_prompt(record: &StyleRecord, intensity: f64) -> String {
    let intensity = intensity.clamp(0.0, 1.0);
    let qualifier = intensity_qualifier(intensity);

    if intensity > 0.8 {
        format!(
            "{}, featuring {}, {}, {}, creating a {}, with {}, {}",
            record.base_style,
            record.instruments,
            record.tempo,
            record.dynamics,
            record.mood,
            record.texture,
            qualifier
        )
    } else if intensity > 0.6 {
        format!(
            "{}, with {}, {}, {}, {}",
            record.base_style, record.instruments, record.tempo, record.dynamics, qualifier
        )
    } else if intensity > 0.3 {
        format!(
            "{}, featuring {}, {}",
            record.base_style, record.instruments, qualifier
        )
    } else {
        format!("{} {}", record.base_style, qualifier)
    }
}

/// Number of style-record fields included at a given intensity,
/// counting the qualifier. Exposed for the tiering invariant tests.
pub fn tier_field_count(intensity: f64) -> usize {
    let intensity = intensity.clamp(0.0, 1.0);
    if intensity > 0.8 {
        7
    } else if intensity > 0.6 {
        5
    } else if intensity > 0.3 {
        3
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::StylePalette;
    use aura::EmotionLabel;

    fn happy_record() -> StyleRecord {
        StylePalette::default()
            .get(EmotionLabel::Happy)
            .cloned()
            .unwrap()
    }

    #[test]
    fn field_count_never_decreases_with_intensity() {
        let mut previous = 0;
        let mut intensity = 0.0;
        while intensity <= 1.0 {
            let count = tier_field_count(intensity);
            assert!(
                count >= previous,
                "tier count dropped from {previous} to {count} at intensity {intensity}"
            );
            previous = count;
            intensity += 0.01;
        }
    }

    #[test]
    fn high_intensity_includes_the_full_record() {
        let record = happy_record();
        let prompt = compose_prompt(&record, 0.95);
        assert!(prompt.contains(&record.base_style));
        assert!(prompt.contains(&record.instruments));
        assert!(prompt.contains(&record.tempo));
        assert!(prompt.contains(&record.dynamics));
        assert!(prompt.contains(&record.mood));
        assert!(prompt.contains(&record.texture));
        assert!(prompt.contains("overwhelming intensity"));
    }

    #[test]
    fn low_intensity_keeps_only_the_base_style() {
        let record = happy_record();
        let prompt = compose_prompt(&record, 0.2);
        assert!(prompt.contains(&record.base_style));
        assert!(!prompt.contains(&record.instruments));
        assert!(!prompt.contains(&record.mood));
        assert!(prompt.contains("minimal impact"));
    }

    #[test]
    fn qualifier_bands_cover_the_unit_interval() {
        assert_eq!(
            intensity_qualifier(1.0),
            "with overwhelming intensity and dominant presence"
        );
        assert_eq!(
            intensity_qualifier(0.75),
            "with very strong character and clear influence"
        );
        assert_eq!(
            intensity_qualifier(0.5),
            "with moderate presence and noticeable impact"
        );
        assert_eq!(
            intensity_qualifier(0.4),
            "with subtle influence and gentle touch"
        );
        assert_eq!(
            intensity_qualifier(0.15),
            "with minimal impact and barely noticeable presence"
        );
        assert_eq!(
            intensity_qualifier(0.05),
            "with almost imperceptible background influence"
        );
    }

    #[test]
    fn out_of_range_intensity_is_clamped() {
        let record = happy_record();
        assert_eq!(compose_prompt(&record, 1.7), compose_prompt(&record, 1.0));
        assert_eq!(compose_prompt(&record, -0.3), compose_prompt(&record, 0.0));
    }

    #[test]
    fn prompt_text_grows_with_intensity() {
        let record = happy_record();
        let low = compose_prompt(&record, 0.2);
        let mid = compose_prompt(&record, 0.5);
        let high = compose_prompt(&record, 0.7);
        let full = compose_prompt(&record, 0.9);
        assert!(low.len() < mid.len());
        assert!(mid.len() < high.len());
        assert!(high.len() < full.len());
    }
}
