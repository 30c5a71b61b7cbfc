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

use crate::classifier::{AngularPartition, EmotionLabel, Sector};
use crate::error::ConfigError;
use proptest::prelude::*;

#[test]
fn built_in_table_passes_validation() {
    let sectors = AngularPartition::sixteen_sector().sectors().to_vec();
    assert!(AngularPartition::new(sectors).is_ok());
}

#[test]
fn partition_is_total_over_the_circle() {
    let partition = AngularPartition::sixteen_sector();
    let mut angle = 0.0;
    while angle < 360.0 {
        let hits = partition
            .sectors()
            .iter()
            .filter(|s| angle >= s.start_deg && angle < s.end_deg)
            .count();
        assert_eq!(hits, 1, "angle {angle} matched {hits} sectors");
        angle += 0.25;
    }
}

#[test]
fn boundary_angles_fall_into_exactly_one_sector() {
    let partition = AngularPartition::sixteen_sector();
    assert_eq!(partition.label_for(0.0), EmotionLabel::Happy);
    assert_eq!(partition.label_for(30.0), EmotionLabel::Excited);
    assert_eq!(partition.label_for(90.0), EmotionLabel::Fear);
    assert_eq!(partition.label_for(112.5), EmotionLabel::Angry);
    assert_eq!(partition.label_for(180.0), EmotionLabel::Miserable);
    assert_eq!(partition.label_for(270.0), EmotionLabel::Sleepy);
    assert_eq!(partition.label_for(359.999), EmotionLabel::Pleased);
}

#[test]
fn negative_and_wrapped_angles_are_normalised() {
    let partition = AngularPartition::sixteen_sector();
    assert_eq!(partition.label_for(-10.0), EmotionLabel::Pleased);
    assert_eq!(partition.label_for(360.0), EmotionLabel::Happy);
    assert_eq!(partition.label_for(390.0), EmotionLabel::Excited);
}

#[test]
fn gapped_partition_is_rejected() {
    let sectors = vec![
        Sector::new(EmotionLabel::Happy, 0.0, 120.0),
        Sector::new(EmotionLabel::Sad, 180.0, 360.0),
    ];
    match AngularPartition::new(sectors) {
        Err(ConfigError::PartitionNotContiguous { expected, found }) => {
            assert_eq!(expected, 120.0);
            assert_eq!(found, 180.0);
        }
        other => panic!("expected PartitionNotContiguous, got {other:?}"),
    }
}

#[test]
fn overlapping_partition_is_rejected() {
    let sectors = vec![
        Sector::new(EmotionLabel::Happy, 0.0, 200.0),
        Sector::new(EmotionLabel::Sad, 180.0, 360.0),
    ];
    assert!(matches!(
        AngularPartition::new(sectors),
        Err(ConfigError::PartitionNotContiguous { .. })
    ));
}

#[test]
fn partition_must_cover_the_full_circle() {
    let sectors = vec![Sector::new(EmotionLabel::Happy, 0.0, 350.0)];
    assert!(matches!(
        AngularPartition::new(sectors),
        Err(ConfigError::PartitionEnd { found }) if found == 350.0
    ));

    let sectors = vec![Sector::new(EmotionLabel::Happy, 10.0, 360.0)];
    assert!(matches!(
        AngularPartition::new(sectors),
        Err(ConfigError::PartitionOrigin { found }) if found == 10.0
    ));

    assert!(matches!(
        AngularPartition::new(Vec::new()),
        Err(ConfigError::EmptyPartition)
    ));
}

#[test]
fn neutral_cannot_own_a_sector() {
    let sectors = vec![
        Sector::new(EmotionLabel::Neutral, 0.0, 180.0),
        Sector::new(EmotionLabel::Sad, 180.0, 360.0),
    ];
    assert!(matches!(
        AngularPartition::new(sectors),
        Err(ConfigError::NeutralSector)
    ));
}

#[test]
fn inverted_sector_is_rejected() {
    let sectors = vec![Sector::new(EmotionLabel::Happy, 0.0, 0.0)];
    assert!(matches!(
        AngularPartition::new(sectors),
        Err(ConfigError::InvalidSector { .. })
    ));
}

proptest! {
    #[test]
    fn every_angle_selects_exactly_one_sector(angle in 0.0f64..360.0) {
        let partition = AngularPartition::sixteen_sector();
        let hits = partition
            .sectors()
            .iter()
            .filter(|s| angle >= s.start_deg && angle < s.end_deg)
            .count();
        prop_assert_eq!(hits, 1);
    }
}
