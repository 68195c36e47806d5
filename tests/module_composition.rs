//! A hand-specified multi-level, multi-module fault tree with a known minimal
//! cut set count and order distribution, exercised as a structural analog of a
//! real-world benchmark fault tree (the kind an upstream XML preprocessor would
//! hand this crate, too large to reproduce here by hand literal-for-literal).

use std::collections::HashMap;

use mocus::graph::boolean::{GateType, MemGraphBuilder};
use mocus::{Mocus, Settings};

/// TOP = AND( M1, M2, e13 )
/// M1  = OR( AND(e1, e2), AND(e3, e4), e5 )              (module)
/// M2  = OR( AND(e6, e7, e8), AND(e9, e10), e11, e12 )   (module)
///
/// M1's minimal cut sets: {e1,e2}, {e3,e4}, {e5} (3 sets, orders 2,2,1).
/// M2's minimal cut sets: {e6,e7,e8}, {e9,e10}, {e11}, {e12} (4 sets, orders 3,2,1,1).
/// Joined with e13 and cross-multiplied (AND): 3 * 4 = 12 top-level cut sets,
/// each of order `order(M1) + order(M2) + 1`, none a subset of another since
/// every literal is distinct.
fn build_tree() -> mocus::graph::boolean::MemGraph {
    let mut builder = MemGraphBuilder::new();

    let m1_and_a = builder.add_gate(GateType::And, false);
    builder.add_variable_arg(m1_and_a, 1, 1);
    builder.add_variable_arg(m1_and_a, 2, 2);
    let m1_and_b = builder.add_gate(GateType::And, false);
    builder.add_variable_arg(m1_and_b, 1, 3);
    builder.add_variable_arg(m1_and_b, 2, 4);
    let m1 = builder.add_gate(GateType::Or, true);
    builder.add_gate_arg(m1, 1, m1_and_a);
    builder.add_gate_arg(m1, 2, m1_and_b);
    builder.add_variable_arg(m1, 3, 5);

    let m2_and_a = builder.add_gate(GateType::And, false);
    builder.add_variable_arg(m2_and_a, 1, 6);
    builder.add_variable_arg(m2_and_a, 2, 7);
    builder.add_variable_arg(m2_and_a, 3, 8);
    let m2_and_b = builder.add_gate(GateType::And, false);
    builder.add_variable_arg(m2_and_b, 1, 9);
    builder.add_variable_arg(m2_and_b, 2, 10);
    let m2 = builder.add_gate(GateType::Or, true);
    builder.add_gate_arg(m2, 1, m2_and_a);
    builder.add_gate_arg(m2, 2, m2_and_b);
    builder.add_variable_arg(m2, 3, 11);
    builder.add_variable_arg(m2, 4, 12);

    let top = builder.add_gate(GateType::And, false);
    builder.add_gate_arg(top, 1, m1);
    builder.add_gate_arg(top, 2, m2);
    builder.add_variable_arg(top, 3, 13);

    builder.build(top)
}

#[test]
fn exact_cut_set_count_and_order_distribution() {
    let graph = build_tree();
    let mut mocus = Mocus::new(&graph, Settings::new(10)).unwrap();
    mocus.analyze();

    let cut_sets = mocus.cut_sets();
    assert_eq!(cut_sets.len(), 12);

    let mut by_order: HashMap<usize, usize> = HashMap::new();
    for (pos, neg) in &cut_sets {
        assert!(neg.is_empty());
        *by_order.entry(pos.len()).or_default() += 1;
    }

    // order = |M1 piece| + |M2 piece| + 1 (for e13), for every combination of
    // an M1 piece (orders 2,2,1) against an M2 piece (orders 3,2,1,1).
    let mut expected: HashMap<usize, usize> = HashMap::new();
    for m1_order in [2, 2, 1] {
        for m2_order in [3, 2, 1, 1] {
            *expected.entry(m1_order + m2_order + 1).or_default() += 1;
        }
    }
    assert_eq!(by_order, expected);
}

#[test]
fn order_limit_prunes_the_largest_combinations() {
    let graph = build_tree();
    // The smallest possible top order is 1 + 1 + 1 = 3 (e5, e11 or e12, e13);
    // a limit of 3 should therefore keep exactly the combinations reaching that
    // floor and nothing larger.
    let mut mocus = Mocus::new(&graph, Settings::new(3)).unwrap();
    mocus.analyze();
    let cut_sets = mocus.cut_sets();
    assert!(!cut_sets.is_empty());
    for (pos, _) in &cut_sets {
        assert!(pos.len() <= 3);
    }
}

#[test]
fn analysis_is_deterministic_across_runs() {
    let graph = build_tree();
    let mut first = Mocus::new(&graph, Settings::new(10)).unwrap();
    first.analyze();
    let mut first_result = first.cut_sets();
    first_result.sort();

    let mut second = Mocus::new(&graph, Settings::new(10)).unwrap();
    second.analyze();
    let mut second_result = second.cut_sets();
    second_result.sort();

    assert_eq!(first_result, second_result);
}
