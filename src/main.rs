use mocus::graph::boolean::{ConstantState, GateType, MemGraphBuilder};
use mocus::{Mocus, Settings};

/// Builds a small two-module fault tree and prints its minimal cut sets:
///
/// TOP = OR( e1, M1, M2 )
/// M1  = AND( e2, e3 )            (module)
/// M2  = OR( AND(e4, e5), e6 )    (module)
fn build_demo_graph() -> mocus::graph::boolean::MemGraph {
    let mut builder = MemGraphBuilder::new();

    let m1 = builder.add_gate(GateType::And, true);
    builder.add_variable_arg(m1, 1, 2);
    builder.add_variable_arg(m1, 2, 3);

    let m2_and = builder.add_gate(GateType::And, false);
    builder.add_variable_arg(m2_and, 1, 4);
    builder.add_variable_arg(m2_and, 2, 5);
    let m2 = builder.add_gate(GateType::Or, true);
    builder.add_gate_arg(m2, 1, m2_and);
    builder.add_variable_arg(m2, 2, 6);

    let top = builder.add_gate(GateType::Or, false);
    builder.add_variable_arg(top, 1, 1);
    builder.add_gate_arg(top, 2, m1);
    builder.add_gate_arg(top, 3, m2);

    builder.build(top)
}

fn main() {
    tracing_subscriber::fmt::init();

    let graph = build_demo_graph();
    let mut mocus = Mocus::new(&graph, Settings::new(4)).expect("demo graph is well-formed");
    mocus.analyze();

    println!("minimal cut sets:");
    let mut cut_sets = mocus.cut_sets();
    cut_sets.sort();
    for (pos, neg) in cut_sets {
        println!("  {pos:?} / not {neg:?}");
    }

    // Also demonstrate the constant-root short circuit.
    let mut builder = MemGraphBuilder::new();
    let root = builder.add_constant(ConstantState::Unity);
    let graph = builder.build(root);
    let mut mocus = Mocus::new(&graph, Settings::default()).expect("constant graph is well-formed");
    mocus.analyze();
    println!("constant unity root: {:?}", mocus.cut_sets());
}
