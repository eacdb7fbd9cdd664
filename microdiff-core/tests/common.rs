use microdiff_core::{AutogradError, Graph, NodeId};

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    // Already initialized by another test: that's fine.
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `d = a*b + c`, `e = relu(d)` and returns `(a, b, c, d, e)`.
#[allow(dead_code)]
pub fn build_scenario(
    graph: &mut Graph,
    a: f64,
    b: f64,
    c: f64,
) -> Result<(NodeId, NodeId, NodeId, NodeId, NodeId), AutogradError> {
    let a = graph.leaf(a);
    let b = graph.leaf(b);
    let c = graph.leaf(c);
    let ab = graph.mul(a, b)?;
    let d = graph.add(ab, c)?;
    let e = graph.relu(d)?;
    Ok((a, b, c, d, e))
}
