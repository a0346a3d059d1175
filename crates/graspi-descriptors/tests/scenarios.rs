//! End-to-end scenarios over the public descriptor API.
//!
//! Each test drives the full pipeline -- grid construction, labeling,
//! contraction, analyses, record assembly -- through `compute_descriptors`
//! and checks the literal reference values for small, hand-checkable
//! microstructures.

use ndarray::{array, Array2, Array3};

use graspi_core::{
    ContractedGraph, ContractionOptions, GraspiError, GridGraph, LabeledGraph, Phase,
};
use graspi_descriptors::{
    compute_descriptor_batch, compute_descriptors, connected_components, BatchError,
    DescriptorConfig, DescriptorRecord,
};

fn record_for(data: Array2<u8>) -> DescriptorRecord {
    let view = data.view().into_dyn();
    compute_descriptors(&view, &DescriptorConfig::default()).unwrap()
}

#[test]
fn a_three_by_three_grid_has_twenty_edges() {
    let grid = GridGraph::build(&[3, 3]).unwrap();
    assert_eq!(grid.vertex_count(), 9);
    assert_eq!(grid.edge_count(), 20);
}

#[test]
fn center_stripe_descriptors() {
    let record = record_for(array![[0, 0, 0], [1, 1, 1], [0, 0, 0]]);

    assert_eq!(record.phase_0_count, 6);
    assert_eq!(record.phase_1_count, 3);
    assert_eq!(record.phase_0_cc, 2);
    assert_eq!(record.phase_1_cc, 1);
    assert_eq!(record.interfacial_area, 9);
    assert_eq!(record.phase_0_interface, 6);
    assert_eq!(record.phase_1_interface, 3);

    // Every cell sits directly on the interface.
    assert_eq!(record.distance_to_interface, Some(1.0));
    assert_eq!(record.distance_to_interface_0, Some(1.0));
    assert_eq!(record.distance_to_interface_1, Some(1.0));
}

#[test]
fn checkerboard_columns_are_one_component_per_phase() {
    let record = record_for(array![[0, 1], [0, 1]]);
    assert_eq!(record.phase_0_cc, 1);
    assert_eq!(record.phase_1_cc, 1);
    assert_eq!(record.interfacial_area, 4);
}

#[test]
fn uniform_grid_is_degenerate_not_a_crash() {
    let record = record_for(Array2::zeros((4, 4)));
    assert_eq!(record.phase_1_count, 0);
    assert_eq!(record.phase_1_cc, 0);
    assert_eq!(record.interfacial_area, 0);
    assert_eq!(record.distance_to_interface, None);
    assert_eq!(record.distance_to_interface_0, None);
    assert_eq!(record.distance_to_interface_1, None);
}

#[test]
fn vertex_counts_always_partition_the_grid() {
    let record = record_for(array![[0, 1, 1], [1, 0, 0], [1, 1, 0], [0, 0, 1]]);
    assert_eq!(record.cell_count(), 12);
}

#[test]
fn direct_component_queries_match_the_record() {
    let data: Array2<u8> = array![[0, 0, 0], [1, 1, 1], [0, 0, 0]];
    let view = data.view().into_dyn();
    let labeled = LabeledGraph::from_array(&view).unwrap();
    let graph = ContractedGraph::contract(&labeled, &ContractionOptions::default());

    let record = record_for(data);
    assert_eq!(connected_components(&graph, Phase::Zero), record.phase_0_cc);
    assert_eq!(connected_components(&graph, Phase::One), record.phase_1_cc);
}

#[test]
fn invalid_phase_values_abort_with_the_offending_cell() {
    let data: Array2<u8> = array![[0, 1], [3, 0]];
    let view = data.view().into_dyn();
    match compute_descriptors(&view, &DescriptorConfig::default()) {
        Err(GraspiError::InvalidPhaseValue { coord, value }) => {
            assert_eq!(coord, vec![1, 0]);
            assert_eq!(value, 3);
        }
        other => panic!("expected InvalidPhaseValue, got {other:?}"),
    }
}

#[test]
fn batched_samples_match_their_individual_records() {
    let stripe = array![[0u8, 0, 0], [1, 1, 1], [0, 0, 0]];
    let board = array![[0u8, 1, 0], [1, 0, 1], [0, 1, 0]];

    let mut stacked = Array3::zeros((2, 3, 3));
    stacked.index_axis_mut(ndarray::Axis(0), 0).assign(&stripe);
    stacked.index_axis_mut(ndarray::Axis(0), 1).assign(&board);

    let view = stacked.view().into_dyn();
    let records = compute_descriptor_batch(&view, &DescriptorConfig::default()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], record_for(stripe));
    assert_eq!(records[1], record_for(board));
}

#[test]
fn batch_errors_carry_the_sample_index() {
    let mut stacked = Array3::<u8>::zeros((4, 2, 2));
    stacked[[2, 1, 1]] = 5;

    let view = stacked.view().into_dyn();
    match compute_descriptor_batch(&view, &DescriptorConfig::default()) {
        Err(BatchError::Sample { sample, .. }) => assert_eq!(sample, 2),
        other => panic!("expected a sample error, got {other:?}"),
    }
}

#[test]
fn records_serialize_with_the_full_schema() {
    let record = record_for(array![[0, 0, 0], [1, 1, 1], [0, 0, 0]]);
    let value = serde_json::to_value(&record).unwrap();

    for field in [
        "phase_0_count",
        "phase_1_count",
        "phase_0_cc",
        "phase_1_cc",
        "interfacial_area",
        "phase_0_interface",
        "phase_1_interface",
        "distance_to_interface",
        "distance_to_interface_0",
        "distance_to_interface_1",
        "top_boundary_count_0",
        "distance_to_bottom_1",
        "distance_to_right_0",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["interfacial_area"], 9);
    assert_eq!(value["distance_to_interface"], 1.0);
}
