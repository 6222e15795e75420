use approx::assert_relative_eq;
use conduct_nn::{tune_shallow, ConProperty, Network, NodeAddr, Params, TuningSample};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

/// Random fully connected network with conductivity-neutral links (`c = 0`)
/// plus one input vector matching its input layer.
fn neutral_network() -> impl Strategy<Value = (Network, Vec<f64>)> {
    (prop::collection::vec(1usize..4, 2..5), unit(), unit()).prop_flat_map(|(sizes, k, w)| {
        let inputs = sizes[0];
        let net = Network::uniform(&sizes, Params::new(k, w, 0.0));
        (Just(net), prop::collection::vec(unit(), inputs))
    })
}

fn any_network() -> impl Strategy<Value = (Network, Vec<f64>)> {
    (prop::collection::vec(1usize..4, 2..5), unit(), unit(), unit()).prop_flat_map(|(sizes, k, w, c)| {
        let inputs = sizes[0];
        let net = Network::uniform(&sizes, Params::new(k, w, c));
        (Just(net), prop::collection::vec(unit(), inputs))
    })
}

proptest! {
    #[test]
    fn run_is_deterministic((mut net, input) in any_network()) {
        let first = net.run(&input);
        for _ in 0..3 {
            prop_assert_eq!(&net.run(&input), &first);
        }
    }

    #[test]
    fn inserting_matching_layer_keeps_output(
        (mut net, input) in neutral_network(),
        at_seed in any::<usize>(),
        k0 in unit(),
    ) {
        let at = at_seed % net.layer_count();
        let size = net.layer(at).len();
        let before = net.run(&input);

        net.insert_layer(at, size, Params::new(k0, 0.0, 0.0)).unwrap();
        let after = net.run(&input);

        prop_assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(&after) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn squared_error_is_non_negative((mut net, input) in any_network(), expected in unit()) {
        let outputs = net.run(&input).len();
        let samples = vec![TuningSample::new(input, vec![expected; outputs])];
        prop_assert!(net.total_squared_error(&samples) >= 0.0);
    }

    #[test]
    fn shallow_tuning_stays_in_bounds(
        (mut net, input) in any_network(),
        expected in unit(),
        learn_rate in 0.01..0.9f64,
        prop_index in 0usize..3,
    ) {
        let prop = [ConProperty::K, ConProperty::W, ConProperty::C][prop_index];
        let outputs = net.layer(net.layer_count() - 1).len();
        let samples = vec![TuningSample::new(input, vec![expected; outputs])];
        let addr = NodeAddr::new(0, 0);

        let outcome = tune_shallow(&mut net, addr, prop, &samples, learn_rate);

        prop_assert!(outcome.fails <= outcome.total);
        prop_assert_eq!(outcome.total, net[addr].links.len());
        for lnk in &net[addr].links {
            prop_assert!((0.0..=1.0).contains(&lnk.get(prop)));
        }
    }
}
