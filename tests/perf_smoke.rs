use backdrop_engine::{ContentRect, SimConfig, SimulationCore, StaticGeometry, Viewport};

#[test]
fn perf_smoke_step() {
    let config = SimConfig { seed: 7, ..SimConfig::default() };
    let geometry = StaticGeometry::new(vec![
        ContentRect::new(100.0, 200.0, 400.0, 150.0),
        ContentRect::new(700.0, 400.0, 200.0, 300.0),
    ]);
    let mut core = SimulationCore::new(config, Viewport::new(1280.0, 800.0), &geometry);
    core.enable_perf_metrics(true);

    for _ in 0..60 {
        core.step();
    }

    let stats = core.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 500);
    assert_eq!(stats.rect_count(), 2);
}
