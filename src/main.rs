//! Car Dashboard CLI
//!
//! Command-line interface for rendering dashboard frames and running the
//! vehicle simulation.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use car_dashboard::config::Theme;
use car_dashboard::storage;
use car_dashboard::storage::StartupConfig;
use car_dashboard::utils::dashboard_image::{self, DashboardLayout};
use car_dashboard::utils::indicators::IndicatorKind;
use car_dashboard::utils::parsing::{parse_gauge_kind, parse_indicator_list};
use car_dashboard::vehicle::VehicleState;
use car_dashboard::DashboardError;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Car Dashboard Rendering Tool
#[derive(Parser, Debug)]
#[command(name = "car-dashboard-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single dashboard frame
    Render {
        /// Road speed in km/h (0-200)
        #[arg(short, long, default_value = "0")]
        speed: f32,

        /// Engine speed in RPM (0-8000)
        #[arg(short, long, default_value = "0")]
        rpm: f32,

        /// Fuel level percentage (0-100)
        #[arg(short, long, default_value = "100")]
        fuel: f32,

        /// Coolant temperature in Celsius (0-100)
        #[arg(short, long, default_value = "50")]
        temp: f32,

        /// Selected gear
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=9))]
        gear: u8,

        /// Comma-separated active indicators (seatbelt,engine,battery,lights,airbag)
        #[arg(short, long, default_value = "")]
        indicators: String,

        /// Theme id from themes.json
        #[arg(long)]
        theme: Option<String>,

        /// Output PNG path
        #[arg(short, long, default_value = "dashboard.png")]
        output: PathBuf,
    },

    /// Render a single dial
    Gauge {
        /// Dial to render: speed or rpm
        kind: String,

        /// Value to point the needle at
        value: f32,

        /// Theme id from themes.json
        #[arg(long)]
        theme: Option<String>,

        /// Output PNG path
        #[arg(short, long, default_value = "gauge.png")]
        output: PathBuf,
    },

    /// Run the vehicle simulation and write a frame sequence
    Simulate {
        /// Total number of frames
        #[arg(short, long)]
        frames: Option<u32>,

        /// Throttle held for the first N frames
        #[arg(short, long)]
        throttle_frames: Option<u32>,

        /// Sleep one simulation tick between frames (interval_ms from config)
        #[arg(long)]
        realtime: bool,

        /// Output directory for frame_NNNN.png files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Theme id from themes.json
        #[arg(long)]
        theme: Option<String>,
    },

    /// List stored themes
    Themes,

    /// Select the active theme
    SetTheme {
        /// Theme id (e.g. classic, night)
        name: String,
    },

    /// Create default config and themes on disk
    InitConfig,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Render {
            speed,
            rpm,
            fuel,
            temp,
            gear,
            indicators,
            theme,
            output,
        } => cmd_render(speed, rpm, fuel, temp, gear, &indicators, theme.as_deref(), &output),
        Command::Gauge {
            kind,
            value,
            theme,
            output,
        } => cmd_gauge(&kind, value, theme.as_deref(), &output),
        Command::Simulate {
            frames,
            throttle_frames,
            realtime,
            output_dir,
            theme,
        } => cmd_simulate(frames, throttle_frames, realtime, output_dir, theme.as_deref()),
        Command::Themes => cmd_themes(),
        Command::SetTheme { name } => cmd_set_theme(&name),
        Command::InitConfig => cmd_init_config(),
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Resolve the theme: explicit CLI id, then config.json, then themes.json,
/// then the compiled classic preset.
fn resolve_theme(cli_theme: Option<&str>) -> Result<Theme> {
    if let Some(id) = cli_theme {
        let entry = storage::get_theme(id).with_context(|| format!("Failed to load theme '{}'", id))?;
        return Ok(Theme::from_stored(&entry.colors));
    }

    let app_config = storage::load_config().unwrap_or_default();
    if let Some(ref id) = app_config.active_theme {
        if let Ok(entry) = storage::get_theme(id) {
            return Ok(Theme::from_stored(&entry.colors));
        }
    }

    if let Ok(book) = storage::defaults::load_themes() {
        if let Some(id) = book.active_theme_id {
            if let Some(entry) = book.themes.into_iter().find(|t| t.id == id) {
                return Ok(Theme::from_stored(&entry.colors));
            }
        }
    }

    Ok(Theme::CLASSIC)
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if value < min || value > max {
        return Err(DashboardError::InvalidValue {
            name: name.to_string(),
            value,
            min,
            max,
        }
        .into());
    }
    Ok(())
}

fn clock_text() -> String {
    Local::now().format("%I:%M:%S %p").to_string()
}

/// Realtime sleep between frames, taken from the stored startup config.
fn tick_duration(startup: &StartupConfig) -> Duration {
    Duration::from_millis(startup.interval_ms)
}

// =============================================================================
// Command Implementations
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    speed: f32,
    rpm: f32,
    fuel: f32,
    temp: f32,
    gear: u8,
    indicators: &str,
    theme_id: Option<&str>,
    output: &PathBuf,
) -> Result<()> {
    check_range("speed", speed, 0.0, 200.0)?;
    check_range("rpm", rpm, 0.0, 8000.0)?;
    check_range("fuel", fuel, 0.0, 100.0)?;
    check_range("temp", temp, 0.0, 100.0)?;

    let active = parse_indicator_list(indicators).context("Failed to parse indicators")?;
    let theme = resolve_theme(theme_id)?;

    let app_config = storage::load_config().unwrap_or_default();
    let layout = DashboardLayout::from_app_config(&app_config, &theme);

    let state = VehicleState {
        speed,
        rpm,
        temperature: temp,
        fuel,
        gear,
        accelerating: false,
    };

    let clock = clock_text();
    let img = dashboard_image::generate_dashboard_image(
        &state,
        &active,
        0,
        Some(&clock),
        &theme,
        Some(&layout),
    )
    .ok_or(DashboardError::FontNotFound)?;

    img.save(output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("✅ Dashboard saved to {}", output.display());
    println!("   Speed: {:.0} km/h | RPM: {:.0} | Fuel: {:.0}% | Temp: {:.0}°C", speed, rpm, fuel, temp);
    if state.warning_active() {
        println!("   ⚠️  Warning state active (danger zone)");
    }

    Ok(())
}

fn cmd_gauge(kind: &str, value: f32, theme_id: Option<&str>, output: &PathBuf) -> Result<()> {
    let kind = parse_gauge_kind(kind)?;
    let spec = kind.spec();
    check_range(spec.label, value, 0.0, spec.max_value)?;

    let theme = resolve_theme(theme_id)?;

    let img = dashboard_image::generate_gauge_image(kind, value, &theme)
        .ok_or(DashboardError::FontNotFound)?;

    img.save(output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("✅ {} saved to {} ({:.0} {})", kind, output.display(), value, spec.units);
    Ok(())
}

fn cmd_simulate(
    cli_frames: Option<u32>,
    cli_throttle: Option<u32>,
    realtime: bool,
    cli_output_dir: Option<PathBuf>,
    theme_id: Option<&str>,
) -> Result<()> {
    storage::ensure_config_exists()?;
    let app_config = storage::load_config().unwrap_or_default();
    let startup = &app_config.startup;

    // CLI overrides config
    let frames = cli_frames.unwrap_or(startup.frames);
    let throttle_frames = cli_throttle.unwrap_or(startup.throttle_frames);
    let output_dir = cli_output_dir.unwrap_or_else(|| PathBuf::from(&startup.output_dir));
    let tick = tick_duration(startup);

    let theme = resolve_theme(theme_id.or(Some(startup.theme.as_str())))?;
    let layout = DashboardLayout::from_app_config(&app_config, &theme);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    // Setup Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl+C handler")?;

    println!("🚗 Simulation started (Ctrl+C to stop)");
    println!("   Frames:   {} ({} under throttle)", frames, throttle_frames);
    println!("   Output:   {}", output_dir.display());
    println!("   Tick:     {} ms{}", tick.as_millis(), if realtime { " (realtime)" } else { "" });
    println!();

    let mut state = VehicleState::default();
    // All five badges lit during simulation, matching the interactive original
    let active: Vec<IndicatorKind> = IndicatorKind::ALL.to_vec();
    let mut written: u32 = 0;

    for frame in 0..frames {
        if !running.load(Ordering::SeqCst) {
            break;
        }

        state.accelerating = frame < throttle_frames;
        state.step();

        let clock = clock_text();
        let img = dashboard_image::generate_dashboard_image(
            &state,
            &active,
            frame as u64,
            Some(&clock),
            &theme,
            Some(&layout),
        )
        .ok_or(DashboardError::FontNotFound)?;

        let path = output_dir.join(format!("frame_{:04}.png", frame));
        img.save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        written += 1;

        if frame % 20 == 0 {
            println!(
                "[{:4}] 🏎  {:.0} km/h | {:.0} RPM | fuel {:.1}% | {:.1}°C{}",
                frame,
                state.speed,
                state.rpm,
                state.fuel,
                state.temperature,
                if state.warning_active() { " ⚠️" } else { "" }
            );
        }

        if realtime {
            std::thread::sleep(tick);
        }
    }

    println!("\n✅ Simulation finished: {} frames written to {}", written, output_dir.display());
    Ok(())
}

fn cmd_themes() -> Result<()> {
    storage::ensure_defaults_exist()?;
    let book = storage::defaults::load_themes().context("Failed to load themes")?;

    println!("🎨 Stored themes:");
    println!("{}", "─".repeat(40));
    for theme in &book.themes {
        let active = book
            .active_theme_id
            .as_deref()
            .map(|id| id == theme.id)
            .unwrap_or(false);
        let marker = if active { "👉" } else { "  " };
        let name = theme.name.as_deref().unwrap_or("-");
        println!("{} {:<12} {}", marker, theme.id, name);
    }
    println!("{}", "─".repeat(40));
    println!("👉 = active theme");

    Ok(())
}

fn cmd_set_theme(name: &str) -> Result<()> {
    storage::set_active_theme(name).with_context(|| format!("Failed to activate theme '{}'", name))?;

    // Keep config.json in sync
    let mut config = storage::load_config().unwrap_or_default();
    config.active_theme = Some(name.to_lowercase());
    storage::save_config(&config)?;

    println!("✅ Active theme set to '{}'", name);
    Ok(())
}

fn cmd_init_config() -> Result<()> {
    storage::ensure_config_exists().context("Failed to create config")?;
    storage::ensure_defaults_exist().context("Failed to create themes")?;

    println!("✅ Config ready at {}", storage::get_config_path()?.display());
    println!("✅ Themes ready at {}", storage::get_themes_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_dashboard::config::simulation::TICK_MS;

    #[test]
    fn test_tick_duration_uses_stored_interval() {
        let startup = StartupConfig {
            interval_ms: 120,
            ..Default::default()
        };
        assert_eq!(tick_duration(&startup), Duration::from_millis(120));
    }

    #[test]
    fn test_tick_duration_default_matches_simulation_tick() {
        assert_eq!(
            tick_duration(&StartupConfig::default()),
            Duration::from_millis(TICK_MS)
        );
    }
}
