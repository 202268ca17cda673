use anyhow::Result;
use quakemap::prelude::*;

/// Headless run of the full earthquake map session: fetch both feeds,
/// render one pass into a recording surface, and print what a real
/// renderer would have drawn.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut session = MapSession::builder()
        .with_standard_base_layers()
        .with_plate_overlay()
        .build()?;

    println!("🗺️ QuakeMap Headless Session");
    println!("============================");
    println!(
        "Center: {:.2}, {:.2} at zoom {}",
        session.config().center.lat,
        session.config().center.lng,
        session.config().zoom
    );

    let client = FeedClient::new();

    // each feed failure disables only its own layer
    match session.load_earthquakes(&client).await {
        Ok(count) => println!("✅ {count} earthquakes loaded"),
        Err(err) => eprintln!("⚠️ earthquake layer unavailable: {err}"),
    }
    match session.load_plate_boundaries(&client).await {
        Ok(count) => println!("✅ {count} plate boundaries loaded"),
        Err(err) => eprintln!("⚠️ plate layer unavailable: {err}"),
    }

    let mut surface = RecordingSurface::new();
    session.render(&mut surface)?;

    if let Some((template, attribution)) = surface.tile_layers.first() {
        println!("\nBase layer: {template} ({attribution})");
    }
    println!("Markers drawn: {}", surface.markers.len());
    println!("Polylines drawn: {}", surface.polylines.len());

    if let Some(legend) = &surface.legend {
        println!("\n{}", legend.title);
        for entry in &legend.entries {
            println!("  {}  {}", entry.color_hex, entry.label);
        }
    }

    if let Some(control) = &surface.layer_control {
        let bases: Vec<&str> = control.base_layers.iter().map(|l| l.name.as_str()).collect();
        let overlays: Vec<&str> = control.overlays.iter().map(|l| l.name.as_str()).collect();
        println!("\nBase maps: {}", bases.join(", "));
        println!("Overlays: {}", overlays.join(", "));
    }

    if let Some(marker) = surface.markers.first() {
        println!("\nFirst event:\n{}", marker.popup);
    }

    if let Some(bounds) = session.data_bounds() {
        println!(
            "\nData bounds: ({:.2}, {:.2}) – ({:.2}, {:.2})",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng
        );
    }

    Ok(())
}
