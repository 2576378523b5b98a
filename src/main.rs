use flexgrid::pce::PCE;
use flexgrid::utils::config::{Arguments, Config};
use flexgrid::utils::yaml;

fn main() {
    let args: Arguments = argh::from_env();
    let mut config = match &args.config {
        Some(path) => yaml::load_config(path),
        None       => Config::default(),
    };
    config.override_from_args(&args);

    let network = yaml::load_network(&args.network);
    let node_count = network.node_count();
    let mut pce = PCE::new(network, config);
    pce.generate_demands();

    if args.demands.is_empty() {
        let time = run(&mut pce);
        println!("--- computing time: {} μs ---", time);
    }
    for (step, path) in args.demands.iter().enumerate() {
        let demands = yaml::load_demands(path, node_count);
        pce.add_demands(demands);
        let time = run(&mut pce);
        println!("--- #{} computing time: {} μs ---", step + 1, time);
    }

    let report = pce.report();
    println!("{:?}: routed {} and blocked {} of {} demands",
             report.status, report.routed, report.blocked, report.demands);
}

fn run(pce: &mut PCE) -> u128 {
    match pce.admit() {
        Ok(elapsed) => elapsed,
        Err(err)    => panic!("aborting the run: {}", err),
    }
}
