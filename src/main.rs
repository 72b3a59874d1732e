use log::info;
use tellurion::sim::world::World;

fn main() {
    pretty_env_logger::init_timed();
    info!("initialising tellurion");

    let mut world = World::generate(72);
    for tick in 0..6 {
        world.step();
        info!("tick {} complete", tick);
    }

    let elevation = &world.geography.elevation;
    info!(
        "elevation: min {:.1} mean {:.1} max {:.1}",
        elevation.min(),
        elevation.mean(),
        elevation.max()
    );
    let rainfall = &world.climate.rainfall;
    info!(
        "rainfall: mean {:.4} max {:.4}",
        rainfall.mean(),
        rainfall.max()
    );
    info!(
        "rivers: strongest volume {:.0}",
        world.geography.river_volume.max()
    );
    info!("live events: {}", world.events.count());
    info!("simulation completed")
}
