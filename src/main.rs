use std::f64::consts::TAU;

use color_eyre::eyre::Result;
use globe_geom::geo::arc::ArcConfig;
use globe_geom::scene::rotation::SpinState;
use globe_geom::scene::satellites::Constellation;
use globe_geom::scene::{cities, field, links, markers, palette};
use itertools::Itertools;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = ArcConfig::default();

    let cities = cities::default_cities()?;
    log::info!("loaded {} cities from the built-in table", cities.len());

    let markers = markers::place(&cities, config.radius);
    let links = links::build(&cities, &config)?;
    log::info!("built {} flight arcs", links.len());

    let constellation = Constellation {
        planes: 3,
        sats_per_plane: 4,
        radius: config.radius + 2.0,
        inclination_deg: 53.0,
    };
    let satellites = constellation.satellites();

    let arrows = field::generate(field::ARROW_COUNT, 7);
    let highlight = field::resultant(&arrows);

    let (lowest, highest) = links
        .iter()
        .flat_map(|link| link.points.iter().map(|point| point.length()))
        .minmax()
        .into_option()
        .unwrap_or((config.radius, config.radius));

    println!(
        concat!(
            "Globe radius: {}\n",
            "City markers: {}\n",
            "Flight arcs: {} ({} points each, shell {:.3}..{:.3})\n",
            "Satellites: {}\n",
            "Arrow field: {} arrows, resultant ({:.3}, {:.3}, {:.3}) * {} in {:?}\n"
        ),
        config.radius,
        markers.len(),
        links.len(),
        config.segment_count,
        lowest,
        highest,
        satellites.len(),
        arrows.len(),
        highlight.x,
        highlight.y,
        highlight.z,
        field::HIGHLIGHT_LENGTH,
        palette::HIGHLIGHT,
    );

    // One simulated tick of the driver's clock, one revolution per minute.
    let mut spin = SpinState::new(TAU / 60.0);
    spin.advance(1.0 / 60.0);
    let lead = satellites[0].position_at(spin.angle_rad.to_degrees());
    log::info!(
        "after one tick the lead satellite sits at ({:.3}, {:.3}, {:.3})",
        lead.x,
        lead.y,
        lead.z
    );

    Ok(())
}
