use conduct_nn::{tune_loop, ConProperty, Network, Params, Strategy, TuneConfig, TuningSample};

fn main() {
    env_logger::init();

    let mut network = Network::uniform(&[2, 2, 1], Params::new(0.5, 0.5, 0.0));

    let samples = vec![
        TuningSample::new(vec![0.0, 0.0], vec![0.0]),
        TuningSample::new(vec![0.0, 1.0], vec![0.0]),
        TuningSample::new(vec![1.0, 0.0], vec![0.0]),
        TuningSample::new(vec![1.0, 1.0], vec![1.0]),
    ];

    for round in 0..10 {
        for property in [ConProperty::K, ConProperty::W] {
            let mut config = TuneConfig::new(20, 0.05, Strategy::Shallow, property);
            config.shuffle = true;
            let error = tune_loop(&mut network, &samples, &config);
            println!("Round {round} ({property:?}): error = {error:.6}");
        }
    }

    for sample in &samples {
        println!("Input: {:?} -> Output: {:.4}", sample.input, network.run(&sample.input)[0]);
    }
}
