use approx::assert_relative_eq;
use conduct_nn::{
    tune_deep, tune_loop, ConProperty, Network, NetworkSpec, NodeAddr, Params, Strategy, TuneConfig,
    TuningSample,
};

fn halving() -> Vec<TuningSample> {
    vec![TuningSample::new(vec![1.0], vec![0.5])]
}

#[test]
fn zero_input_on_fresh_demo_network_is_neutral() {
    let mut net = Network::uniform(&[4, 3, 3, 2], Params::new(0.0, 1.0, 0.0));
    net.reset();
    assert_eq!(net.run(&[0.0; 4]), vec![1.0, 1.0]);
}

#[test]
fn inversion_gives_exact_half_weight() {
    let mut net = Network::uniform(&[1, 1], Params::new(0.0, 1.0, 0.0));
    net.run(&[1.0]);
    let w = net.solve_parameter_for(NodeAddr::new(0, 0), 0, 0.5, ConProperty::W);
    assert_eq!(w, 0.5);
}

#[test]
fn deep_tuning_converges_within_a_few_epochs() {
    let mut net = Network::uniform(&[1, 1], Params::new(0.0, 1.0, 0.0));
    let samples = halving();
    for _ in 0..5 {
        tune_deep(&mut net, NodeAddr::new(0, 0), ConProperty::W, &samples, 0.9);
    }
    assert_relative_eq!(net.layer(0)[0].links[0].w, 0.5, epsilon = 1e-4);
    assert!(net.total_squared_error(&samples) < 1e-8);
}

#[test]
fn shallow_loop_reduces_error_on_hidden_network() {
    let spec = NetworkSpec {
        name: "and".to_string(),
        layers: vec![2, 2, 1],
        branching: None,
        params: Params::new(0.5, 0.5, 0.0),
    };
    let mut net = spec.build().unwrap();
    let samples = vec![
        TuningSample::new(vec![0.0, 0.0], vec![0.0]),
        TuningSample::new(vec![0.0, 1.0], vec![0.0]),
        TuningSample::new(vec![1.0, 0.0], vec![0.0]),
        TuningSample::new(vec![1.0, 1.0], vec![1.0]),
    ];
    let before = net.total_squared_error(&samples);
    let mut after = before;
    for prop in [ConProperty::K, ConProperty::W] {
        let config = TuneConfig::new(30, 0.05, Strategy::Shallow, prop);
        after = tune_loop(&mut net, &samples, &config);
    }
    assert!(after < before, "error went from {before} to {after}");
}

#[test]
fn expanding_then_inserting_keeps_addresses_consistent() {
    let mut net = Network::branching(&[3, 3, 1], &[1, 0], Params::default()).unwrap();
    net.expand_layer(1, 5, Params::default()).unwrap();
    net.insert_layer(1, 5, Params::new(0.25, 0.0, 0.0)).unwrap();
    assert_eq!(net.layer_count(), 4);
    for (l, layer) in net.layers.iter().enumerate() {
        for node in layer {
            for lnk in &node.links {
                assert!(lnk.target.layer > l);
                assert!(lnk.target.node < net.layer(lnk.target.layer).len());
            }
        }
    }
}
