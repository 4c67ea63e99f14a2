use std::path::PathBuf;

use u_delivery::config::PlannerConfig;
use u_delivery::io::{load_graph, load_packages};
use u_delivery::models::Location;
use u_delivery::planner::plan_deliveries;

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn sample_config(precompute: bool) -> PlannerConfig {
    PlannerConfig {
        map_path: data_file("map_data.txt"),
        packages_path: data_file("package_list.csv"),
        precompute_distances: precompute,
        ..PlannerConfig::default()
    }
}

#[test]
fn test_sample_data_loads() {
    let config = sample_config(false);
    let graph = load_graph(&config.map_path, config.delimiter).unwrap();
    assert_eq!(graph.size(), 8);
    assert_eq!(graph.num_edges(), 10);

    let packages = load_packages(&config.packages_path, config.delimiter).unwrap();
    assert_eq!(packages.len(), 7);
}

#[test]
fn test_sample_data_route() {
    for precompute in [false, true] {
        let config = sample_config(precompute);
        let mut graph = load_graph(&config.map_path, config.delimiter).unwrap();
        let packages = load_packages(&config.packages_path, config.delimiter).unwrap();
        let report = plan_deliveries(&mut graph, &packages, &config).unwrap();

        let codes: Vec<&str> = report.stops.iter().map(|s| s.location.code()).collect();
        assert_eq!(codes, vec!["A", "B", "D", "E", "F", "A"]);

        let legs: Vec<f64> = report.stops.iter().map(|s| s.leg_distance).collect();
        assert_eq!(legs, vec![0.0, 3.5, 5.0, 2.0, 2.5, 13.0]);
        assert!((report.total_distance - 26.0).abs() < 1e-10);

        assert_eq!(report.stops[0].packages, vec!["PKG006"]);
        assert_eq!(report.stops[1].packages, vec!["PKG001", "PKG005"]);
        assert_eq!(report.stops[1].via, vec![Location::new("C")]);
        assert_eq!(
            report.stops[5].via,
            ["E", "D", "B", "C"].map(Location::new).to_vec()
        );

        assert!(!report.complete);
        assert_eq!(report.unreached, vec![Location::new("G")]);
    }
}
