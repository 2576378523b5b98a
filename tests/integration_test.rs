use flexgrid::component::{Assignment, Demand};
use flexgrid::network::Network;
use flexgrid::pce::{SolveStatus, PCE};
use flexgrid::utils::config::Config;

fn ring() -> Network {
    let mut network = Network::default();
    network.add_nodes(4);
    network.add_links(vec![
        (0, 1, 10.0, 8), (1, 2, 10.0, 8), (2, 3, 10.0, 8), (3, 0, 10.0, 8),
    ]);
    network
}

fn overlaps(one: &Assignment, one_load: usize, other: &Assignment, other_load: usize) -> bool {
    one.slice < other.slice + other_load && other.slice < one.slice + one_load
}

#[test]
fn it_routes_a_ring_demand_at_the_lowest_slices() {
    let mut pce = PCE::new(ring(), Config::default());
    pce.add_demands(vec![Demand::new(0, 2, 2, None)]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!(report.status, SolveStatus::Feasible);
    let assignment = report.assignments[0].clone().unwrap();
    assert_eq!(assignment.slice, 0);
    assert_eq!(assignment.path.len(), 2);
    for &link in assignment.path.iter() {
        let grid = pce.instance.network.link(link).grid();
        assert_eq!(grid.owner(0), Some(0));
        assert_eq!(grid.owner(1), Some(0));
        assert_eq!(grid.owner(2), None);
    }
}

#[test]
fn it_keeps_the_second_ring_demand_clear_of_the_first() {
    let mut pce = PCE::new(ring(), Config::default());
    pce.add_demands(vec![
        Demand::new(0, 2, 2, None),
        Demand::new(0, 2, 2, None),
    ]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!(report.routed, 2);
    let first = report.assignments[0].clone().unwrap();
    let second = report.assignments[1].clone().unwrap();
    let shared = second.path.iter().any(|l| first.path.contains(l));
    if shared {
        assert!(!overlaps(&first, 2, &second, 2));
    }
    // with the opposite side of the ring free, first-fit keeps offset zero
    assert_eq!(second.slice, 0);
    assert!(second.path != first.path);
}

#[test]
fn it_blocks_when_the_spectrum_runs_out() {
    let mut network = Network::default();
    network.add_nodes(2);
    network.add_links(vec![(0, 1, 10.0, 4)]);
    let mut pce = PCE::new(network, Config::default());
    pce.add_demands(vec![
        Demand::new(0, 1, 3, None),
        Demand::new(0, 1, 3, None),
    ]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!((report.routed, report.blocked), (1, 1));
    let assignment = report.assignments[0].clone().unwrap();
    assert_eq!(assignment.slice, 0);
    assert!(report.assignments[1].is_none());
    assert_eq!(report.status, SolveStatus::Feasible);
}

#[test]
fn it_blocks_demands_beyond_their_reach() {
    let mut network = Network::default();
    network.add_nodes(3);
    network.add_links(vec![(0, 1, 100.0, 8), (1, 2, 100.0, 8)]);
    let mut pce = PCE::new(network, Config::default());
    pce.add_demands(vec![Demand::new(0, 2, 1, Some(150.0))]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!((report.routed, report.blocked), (0, 1));
    assert_eq!(report.status, SolveStatus::Infeasible);
    assert_eq!(report.max_used_slice, None);
}

#[test]
fn it_reproduces_identical_runs() {
    let demands = vec![
        Demand::new(0, 2, 2, None),
        Demand::new(1, 3, 3, None),
        Demand::new(0, 2, 2, None),
        Demand::new(2, 0, 1, None),
    ];
    let mut runs = vec![];
    for _ in 0..2 {
        let mut pce = PCE::new(ring(), Config::default());
        pce.add_demands(demands.clone());
        pce.admit().unwrap();
        runs.push(pce.report());
    }
    assert_eq!(runs[0].assignments, runs[1].assignments);
    assert_eq!(runs[0].max_used_slice, runs[1].max_used_slice);
    assert_eq!(runs[0].objective, runs[1].objective);
}

#[test]
fn it_upholds_spectrum_invariants_under_load() {
    let mut pce = PCE::new(ring(), Config::default());
    pce.add_demands(vec![
        Demand::new(0, 2, 2, None),
        Demand::new(1, 3, 3, None),
        Demand::new(2, 0, 2, None),
        Demand::new(3, 1, 1, None),
        Demand::new(0, 2, 3, None),
    ]);
    pce.admit().unwrap();

    let report = pce.report();
    let network = &pce.instance.network;
    for id in 0..report.demands {
        let assignment = match &report.assignments[id] {
            Some(assignment) => assignment,
            None => continue,
        };
        let load = pce.instance.demands.load(id);
        for link in 0..network.link_count() {
            let grid = network.link(link.into()).grid();
            let held: Vec<usize> = (0..grid.len())
                .filter(|&s| grid.owner(s) == Some(id))
                .collect();
            match assignment.path.contains(&link.into()) {
                // contiguity and continuity: the same unbroken block everywhere
                true  => {
                    let expected: Vec<usize> =
                        (assignment.slice..assignment.slice + load).collect();
                    assert_eq!(held, expected);
                }
                false => assert!(held.is_empty()),
            }
        }
    }
}

#[test]
fn it_admits_widest_demands_first_when_configured() {
    let mut network = Network::default();
    network.add_nodes(2);
    network.add_links(vec![(0, 1, 10.0, 4)]);
    let mut config = Config::default();
    config.admission = "widest-first".into();
    let mut pce = PCE::new(network, config);
    pce.add_demands(vec![
        Demand::new(0, 1, 1, None),
        Demand::new(0, 1, 3, None),
    ]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!(report.routed, 2);
    assert_eq!(report.assignments[1].clone().unwrap().slice, 0);
    assert_eq!(report.assignments[0].clone().unwrap().slice, 3);
}

#[test]
fn it_stops_admission_at_the_time_budget() {
    let mut config = Config::default();
    config.timeout = 0;
    let mut pce = PCE::new(ring(), config);
    pce.add_demands(vec![
        Demand::new(0, 2, 1, None),
        Demand::new(1, 3, 1, None),
    ]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!(report.status, SolveStatus::TimeLimit);
    assert_eq!((report.routed, report.blocked), (0, 2));
}

#[test]
fn it_consumes_successive_arrival_batches() {
    let mut pce = PCE::new(ring(), Config::default());
    pce.add_demands(vec![Demand::new(0, 2, 2, None)]);
    pce.admit().unwrap();
    let first = pce.report().assignments[0].clone();

    pce.add_demands(vec![Demand::new(1, 3, 2, None)]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!(report.routed, 2);
    // earlier outcomes are irrevocable across arrival batches
    assert_eq!(report.assignments[0], first);
}

#[test]
fn it_runs_the_relax_algorithm_end_to_end() {
    let mut config = Config::default();
    config.algorithm = "relax".into();
    config.max_iterations = 6;
    config.patience = 2;
    config.batch_size = 4;
    let mut pce = PCE::new(ring(), config);
    pce.add_demands(vec![
        Demand::new(0, 2, 3, None),
        Demand::new(1, 3, 3, None),
        Demand::new(2, 0, 2, None),
        Demand::new(3, 1, 2, None),
    ]);
    pce.admit().unwrap();

    let report = pce.report();
    assert_eq!(report.routed + report.blocked, 4);
    assert!(report.status != SolveStatus::TimeLimit);
}
