//! Test script to generate dashboard preview images

use car_dashboard::config::{GaugeKind, Theme};
use car_dashboard::utils::dashboard_image;
use car_dashboard::utils::indicators::IndicatorKind;
use car_dashboard::vehicle::VehicleState;

fn main() {
    println!("🎨 Generating dashboard preview images...\n");

    std::fs::create_dir_all("tmp").ok();

    // Cruising: 90 km/h, 3000 RPM
    let cruising = VehicleState {
        speed: 90.0,
        rpm: 3000.0,
        fuel: 75.0,
        temperature: 82.0,
        gear: 4,
        ..Default::default()
    };
    if let Some(img) = dashboard_image::generate_dashboard_image(
        &cruising,
        &[IndicatorKind::Seatbelt, IndicatorKind::Lights],
        0,
        Some("10:30:00 AM"),
        &Theme::CLASSIC,
        None,
    ) {
        let path = "tmp/dashboard_cruising.png";
        img.save(path).unwrap();
        println!("Generated {}", path);
    } else {
        eprintln!("Failed to generate image (font missing?)");
    }

    // Redline: both dials in the danger zone, warning dots lit
    let redline = VehicleState {
        speed: 185.0,
        rpm: 7200.0,
        fuel: 12.0,
        temperature: 97.0,
        gear: 6,
        ..Default::default()
    };
    if let Some(img) = dashboard_image::generate_dashboard_image(
        &redline,
        &IndicatorKind::ALL,
        0,
        Some("10:31:00 AM"),
        &Theme::CLASSIC,
        None,
    ) {
        let path = "tmp/dashboard_redline.png";
        img.save(path).unwrap();
        println!("Generated {}", path);
    }

    // Night theme at standstill
    if let Some(img) = dashboard_image::generate_dashboard_image(
        &VehicleState::default(),
        &[],
        0,
        Some("11:45:00 PM"),
        &Theme::NIGHT,
        None,
    ) {
        let path = "tmp/dashboard_night.png";
        img.save(path).unwrap();
        println!("Generated {}", path);
    }

    // Single dials
    println!("\n📊 Generating single dial previews...");
    if let Some(img) = dashboard_image::generate_gauge_image(GaugeKind::Speedometer, 120.0, &Theme::CLASSIC) {
        match img.save("tmp/speedometer_120.png") {
            Ok(_) => println!("✅ Generated: tmp/speedometer_120.png"),
            Err(e) => println!("❌ Failed to save: {}", e),
        }
    }
    if let Some(img) = dashboard_image::generate_gauge_image(GaugeKind::Tachometer, 6800.0, &Theme::CLASSIC) {
        match img.save("tmp/tachometer_6800.png") {
            Ok(_) => println!("✅ Generated: tmp/tachometer_6800.png"),
            Err(e) => println!("❌ Failed to save: {}", e),
        }
    }

    println!("\n✅ Preview generation complete!");
    println!("   Check the 'tmp/' folder for the generated images.");
}
