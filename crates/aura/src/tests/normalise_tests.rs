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

use crate::error::ConfigError;
use crate::metrics::{Metric, MetricSample};
use crate::normalise::{normalise, MetricRanges};
use crate::scorer::{AffectScorer, AxisWeights};
use std::collections::HashMap;

#[test]
fn range_edges_map_to_signed_unit_edges() {
    for (min, max) in [(0.0, 1.0), (0.0, 100.0), (-5.0, 5.0), (20.0, 80.0)] {
        assert_eq!(normalise(min, min, max), -1.0);
        assert_eq!(normalise(max, min, max), 1.0);
        assert_eq!(normalise((min + max) / 2.0, min, max), 0.0);
    }
}

#[test]
fn degenerate_range_maps_to_zero() {
    assert_eq!(normalise(0.7, 0.5, 0.5), 0.0);
    assert_eq!(normalise(42.0, 42.0, 42.0), 0.0);
}

#[test]
fn out_of_range_values_pass_through_unclamped() {
    assert_eq!(normalise(1.5, 0.0, 1.0), 2.0);
    assert_eq!(normalise(-0.5, 0.0, 1.0), -2.0);
}

#[test]
fn ranges_require_every_metric() {
    let mut ranges = HashMap::new();
    for metric in Metric::ALL {
        ranges.insert(metric, (0.0, 1.0));
    }
    ranges.remove(&Metric::Stress);

    match MetricRanges::from_map(&ranges) {
        Err(ConfigError::MissingMetricRange { metric }) => assert_eq!(metric, Metric::Stress),
        other => panic!("expected MissingMetricRange, got {other:?}"),
    }
}

#[test]
fn sample_normalisation_uses_per_metric_ranges() {
    let mut ranges = HashMap::new();
    for metric in Metric::ALL {
        ranges.insert(metric, (0.0, 1.0));
    }
    ranges.insert(Metric::Excitement, (0.0, 100.0));
    let ranges = MetricRanges::from_map(&ranges).unwrap();

    let sample = MetricSample::from_ordered(&[1.0, 50.0, 0.0, 0.5, 0.25, 0.75, 1.0]).unwrap();
    let normalised = ranges.normalise_sample(&sample);

    assert_eq!(normalised.get(Metric::Engagement), 1.0);
    assert_eq!(normalised.get(Metric::Excitement), 0.0);
    assert_eq!(normalised.get(Metric::LexicalExcitement), -1.0);
    assert_eq!(normalised.get(Metric::Stress), 0.0);
    assert!((normalised.get(Metric::Relaxation) - (-0.5)).abs() < 1e-12);
    assert!((normalised.get(Metric::Interest) - 0.5).abs() < 1e-12);
}

fn saturating_scorer(focus_gate: Option<f64>) -> AffectScorer {
    let mut weights = HashMap::new();
    for metric in Metric::ALL {
        weights.insert(metric, 1.0);
    }
    let valence = AxisWeights::from_map("valence", &weights).unwrap();
    let arousal = AxisWeights::from_map("arousal", &weights).unwrap();
    AffectScorer::new(MetricRanges::default(), valence, arousal, focus_gate)
}

#[test]
fn axis_outputs_are_clamped_to_signed_unit_interval() {
    let scorer = saturating_scorer(None);

    let high = MetricSample::from_ordered(&[1.0; 7]).unwrap();
    let coordinate = scorer.score(&high);
    assert_eq!(coordinate.valence, 1.0);
    assert_eq!(coordinate.arousal, 1.0);

    let low = MetricSample::from_ordered(&[0.0; 7]).unwrap();
    let coordinate = scorer.score(&low);
    assert_eq!(coordinate.valence, -1.0);
    assert_eq!(coordinate.arousal, -1.0);
}

#[test]
fn focus_gate_excludes_weak_focus_from_both_axes() {
    let gated = saturating_scorer(Some(0.1));
    let ungated = saturating_scorer(None);

    // Focus at 0.05 normalises to -0.9; the gate must zero it out.
    let sample = MetricSample::from_ordered(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.05]).unwrap();
    let with_gate = gated.score(&sample);
    let without_gate = ungated.score(&sample);

    assert_eq!(with_gate.valence, 0.0);
    assert!((without_gate.valence - (-0.9)).abs() < 1e-12);

    // Above the gate the channel participates normally.
    let sample = MetricSample::from_ordered(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.6]).unwrap();
    let with_gate = gated.score(&sample);
    assert!((with_gate.valence - 0.2).abs() < 1e-12);
}
