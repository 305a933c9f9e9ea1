use std::fs;

use backdrop_engine::{SimConfig, SimulationCore, StaticGeometry, Viewport};

#[test]
fn config_fixture_parses_and_drives_a_field() {
    let json = fs::read_to_string("tests/fixtures/backdrop.json")
        .expect("backdrop.json fixture should exist");

    let config = SimConfig::from_json(&json).expect("backdrop.json should parse");

    assert_eq!(config.particle_count, 120);
    assert_eq!(config.palette, vec![[10u8, 20, 30], [200, 210, 220]]);
    // Untouched fields fall back to defaults
    assert_eq!(config.friction, 0.99);
    assert_eq!(config.max_scroll_jump_force, 80.0);

    let core = SimulationCore::new(config.clone(), Viewport::new(640.0, 480.0), &StaticGeometry::empty());
    assert_eq!(core.particle_count(), 120);
    for p in core.particles() {
        assert!(config.palette.contains(&p.color()));
        assert!(p.size() >= 1.0 && p.size() < 3.0);
    }
}

#[test]
fn exported_config_reloads() {
    let json = SimConfig::default().to_json();
    let back = SimConfig::from_json(&json).expect("exported config should parse");
    assert_eq!(back, SimConfig::default());
}
