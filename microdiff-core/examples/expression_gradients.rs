// Builds a few expressions, differentiates them and prints every node.
// Run with RUST_LOG=debug to see the backward pass logging.

use microdiff_core::{check_grad, AutogradError, GradCheckConfig, Graph};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::builder().try_init();

    // e = relu(a*b + c)
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.0);
    let c = graph.leaf(10.0);
    let ab = graph.mul(a, b)?;
    let d = graph.add(ab, c)?;
    let e = graph.relu(d)?;
    graph.backward(e)?;

    println!("e = relu(a*b + c)");
    for id in graph.ids() {
        let node = graph.node(id)?;
        println!("  {} [{}] {}", id, node.op().name(), node);
    }

    // A single neuron with randomly initialised weights.
    let mut rng = StdRng::seed_from_u64(0);
    let mut graph = Graph::new();
    let inputs = graph.leaves(&[1.0, -2.0]);
    let w1 = graph.rand_uniform(-1.0, 1.0, &mut rng)?;
    let w2 = graph.rand_uniform(-1.0, 1.0, &mut rng)?;
    let bias = graph.randn(0.0, 0.1, &mut rng)?;
    let wx1 = graph.mul(w1, inputs[0])?;
    let wx2 = graph.mul(w2, inputs[1])?;
    let sum = graph.add(wx1, wx2)?;
    let pre = graph.add(sum, bias)?;
    let neg = graph.neg(pre)?;
    let exp = graph.exp(neg)?;
    let den = graph.add(1.0, exp)?;
    let out = graph.div(1.0, den)?;
    graph.backward(out)?;

    println!("sigmoid(w1*x1 + w2*x2 + b) = {}", graph.value(out)?);
    for (name, id) in [("w1", w1), ("w2", w2), ("b", bias)] {
        println!("  d/d{} = {}", name, graph.grad(id)?);
    }

    let check = check_grad(
        |g, p| -> Result<_, AutogradError> {
            let x2 = g.pow(p[0], 2)?;
            let x3 = g.pow(p[0], 3)?;
            g.sub(x3, x2)
        },
        &[1.5],
        &GradCheckConfig::default(),
    );
    println!("gradient check of x^3 - x^2: {:?}", check);
    Ok(())
}
