use anyhow::Context;
use mapmanager::prelude::*;

/// Runs a map session against the in-memory surface and prints what the
/// surface was asked to do.
///
/// Usage: `mapmanager-demo [config.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ManagerConfig::from_json_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => ManagerConfig::default(),
    };

    let surface = HeadlessSurface::with_builtin_styles(Point::new(1080.0, 1920.0));
    let mut maps = MapsManager::with_config(surface, config);

    maps.hide_location_button();

    let stops = [
        ("depot", LatLng::new(19.4326, -99.1332)),
        ("north", LatLng::new(19.5045, -99.1470)),
        ("south", LatLng::new(19.3570, -99.1500)),
        ("east", LatLng::new(19.4200, -99.0700)),
    ];

    println!("Placing markers:");
    for (id, position) in stops {
        maps.add_marker(id, &MarkerOptions::new(position).title(id));
        println!("   {} - {:.4}, {:.4}", id, position.lat, position.lng);
    }

    let center = maps.center_on_all_markers(12.0)?;
    println!("\nCentered on markers at {:.4}, {:.4}", center.lat, center.lng);

    let bounds = maps.fit_all_markers()?;
    let camera = maps.surface().camera();
    println!(
        "Fitted SW({:.4}, {:.4}) - NE({:.4}, {:.4}) at zoom {}",
        bounds.south_west.lat,
        bounds.south_west.lng,
        bounds.north_east.lat,
        bounds.north_east.lng,
        camera.zoom
    );

    match maps.set_daylight_style() {
        Ok(style) => println!("\nDaylight style: {}", style),
        Err(e) => println!("\nDaylight style not applied: {}", e),
    }

    if let Err(e) = maps.set_style(MapStyle::Custom(ResourceId(0xdead))) {
        println!("Custom style not applied: {}", e);
    }

    if let Some(depot) = maps.marker("depot").map(|m| m.position()) {
        let circle = maps.draw_circle(depot, 2_000.0);
        println!(
            "\nCircle around depot: radius {} m, stroke {}, fill {}",
            circle.options.radius, circle.options.stroke_color, circle.options.fill_color
        );
    }

    println!("\nSurface calls:");
    for call in maps.surface().calls() {
        println!("   {:?}", call);
    }

    maps.clear_markers();
    println!("\nMarkers after clear: {}", maps.all_markers().len());

    Ok(())
}
