//! Unit tests for dvrp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, ScenarioId};

    #[test]
    fn index_roundtrip() {
        let id = ScenarioId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ScenarioId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn depot_is_last_node() {
        assert_eq!(NodeId::depot(3), NodeId(2));
        assert!(NodeId(2).is_depot(3));
        assert!(!NodeId(0).is_depot(3));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(0.3, 0.7);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{DvrpError, EnvConfig, NodeId};

    #[test]
    fn default_is_valid() {
        let cfg = EnvConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.depot(), NodeId(10));
        assert_eq!(cfg.customer_count(), 10);
    }

    fn rejects(cfg: EnvConfig) {
        assert!(matches!(cfg.validate(), Err(DvrpError::Config(_))), "{cfg:?}");
    }

    #[test]
    fn rejects_empty_batch() {
        rejects(EnvConfig { batch_size: 0, ..EnvConfig::default() });
    }

    #[test]
    fn rejects_depot_only() {
        rejects(EnvConfig { n_nodes: 1, initial_demand_count: 0, ..EnvConfig::default() });
    }

    #[test]
    fn rejects_tiny_capacity() {
        rejects(EnvConfig { max_load: 1, ..EnvConfig::default() });
    }

    #[test]
    fn rejects_non_positive_rates() {
        rejects(EnvConfig { speed: 0.0, ..EnvConfig::default() });
        rejects(EnvConfig { arrival_rate: -1.0, ..EnvConfig::default() });
        rejects(EnvConfig { arrival_rate: f64::NAN, ..EnvConfig::default() });
    }

    #[test]
    fn rejects_too_many_initial_demands() {
        rejects(EnvConfig { n_nodes: 4, initial_demand_count: 4, ..EnvConfig::default() });
    }

    #[test]
    fn rejects_zero_expiry() {
        rejects(EnvConfig { expiry_steps: 0, ..EnvConfig::default() });
    }
}

#[cfg(test)]
mod rng {
    use crate::{ScenarioId, ScenarioRng, SimRng};

    #[test]
    fn scenario_rng_deterministic() {
        let mut a = ScenarioRng::new(99, ScenarioId(5));
        let mut b = ScenarioRng::new(99, ScenarioId(5));
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_scenarios_different_streams() {
        let mut a = ScenarioRng::new(99, ScenarioId(0));
        let mut b = ScenarioRng::new(99, ScenarioId(1));
        let va: Vec<u64> = (0..10).map(|_| a.random()).collect();
        let vb: Vec<u64> = (0..10).map(|_| b.random()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn for_batch_matches_individual_seeding() {
        let mut batch = ScenarioRng::for_batch(7, 3);
        let mut third = ScenarioRng::new(7, ScenarioId(2));
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[2].random::<u64>(), third.random::<u64>());
    }

    #[test]
    fn unit_float_in_range() {
        let mut rng = ScenarioRng::new(1, ScenarioId(0));
        for _ in 0..1_000 {
            let p: f64 = rng.random();
            assert!((0.0..1.0).contains(&p));
        }
    }

    #[test]
    fn sim_rng_child_deterministic() {
        let mut root_a = SimRng::new(3);
        let mut root_b = SimRng::new(3);
        let mut ca = root_a.child(1);
        let mut cb = root_b.child(1);
        assert_eq!(ca.next_seed(), cb.next_seed());
        assert_eq!(root_a.next_seed(), root_b.next_seed());
    }
}
