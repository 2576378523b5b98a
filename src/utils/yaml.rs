use std::fs;

use serde::Deserialize;

use super::config::Config;
use crate::component::Demand;
use crate::network::Network;

#[derive(Deserialize)]
struct NetworkYaml {
    scale: NetworkScaleYaml,
    links: Vec<NetworkLinkYaml>,
}

#[derive(Deserialize)]
struct NetworkScaleYaml {
    nodes: usize,
}

#[derive(Deserialize)]
struct NetworkLinkYaml {
    ends: [usize; 2],
    length: f64,
    slices: usize,
}

#[derive(Deserialize)]
struct DemandsYaml {
    scale: DemandsScaleYaml,
    demands: Vec<Demand>,
}

#[derive(Deserialize)]
struct DemandsScaleYaml {
    demands: usize,
}

pub fn load_network(path: &str) -> Network {
    let text = fs::read_to_string(path)
        .expect("Failed to read network yaml file");
    parse_network(&text)
}

pub fn parse_network(text: &str) -> Network {
    let yaml: NetworkYaml = serde_yaml::from_str(text)
        .expect("Failed to parse network yaml file");
    for link in yaml.links.iter() {
        assert!(link.ends[0] < yaml.scale.nodes && link.ends[1] < yaml.scale.nodes,
                "Link ({}, {}) references an unknown node",
                link.ends[0], link.ends[1]);
        assert!(link.ends[0] != link.ends[1],
                "Link ({0}, {0}) is a self-loop", link.ends[0]);
        assert!(link.slices > 0 && link.length > 0.0,
                "Link ({}, {}) carries no spectrum or no length",
                link.ends[0], link.ends[1]);
    }
    let mut network = Network::default();
    network.add_nodes(yaml.scale.nodes);
    network.add_links(flatten(yaml.links));
    network
}

pub fn load_demands(path: &str, node_count: usize) -> Vec<Demand> {
    let text = fs::read_to_string(path)
        .expect("Failed to read demands yaml file");
    parse_demands(&text, node_count)
}

pub fn parse_demands(text: &str, node_count: usize) -> Vec<Demand> {
    let yaml: DemandsYaml = serde_yaml::from_str(text)
        .expect("Failed to parse demands yaml file");
    debug_assert_eq!(yaml.scale.demands, yaml.demands.len());
    for demand in yaml.demands.iter() {
        assert!(demand.src < node_count && demand.dst < node_count,
                "Demand ({}, {}) references an unknown node",
                demand.src, demand.dst);
        assert!(demand.src != demand.dst,
                "Demand ({0}, {0}) loops on a single node", demand.src);
        assert!(demand.load > 0,
                "Demand ({}, {}) requests no slices", demand.src, demand.dst);
        assert!(demand.reach.map_or(true, |bound| bound > 0.0),
                "Demand ({}, {}) carries a non-positive reach",
                demand.src, demand.dst);
    }
    yaml.demands
}

pub fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path)
        .expect("Failed to read config yaml file");
    #[allow(clippy::let_and_return)]
    let yaml = serde_yaml::from_str(&text)
        .expect("Failed to parse config yaml file");
    yaml
}

fn flatten(links: Vec<NetworkLinkYaml>) -> Vec<(usize, usize, f64, usize)> {
    links.into_iter()
        .map(|l| (l.ends[0], l.ends[1], l.length, l.slices))
        .collect()
}
