//! CLI application for controlling Nanoleaf panels.
//!
//! Drives a single controller through the same light entity a host would use.
//!
//! Run with: cargo run --example nanoleaf_cli -- --help

use clap::{Parser, Subcommand};
use nanoleaf_lights_rs::{
    HttpConnector, MAX_KELVIN, MIN_KELVIN, NanoLight, NanoleafApi, NanoleafClient, TurnOn,
};

#[derive(Parser)]
#[command(name = "nanoleaf-cli")]
#[command(about = "Control Nanoleaf light panels from the command line", long_about = None)]
struct Cli {
    /// Address of the Nanoleaf controller
    #[arg(short, long)]
    addr: String,

    /// Auth token obtained by pairing with the controller
    #[arg(short, long)]
    token: String,

    /// OpenAPI port
    #[arg(short, long, default_value_t = NanoleafClient::PORT)]
    port: u16,

    /// Only read and report brightness
    #[arg(long)]
    brightness_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the current state of the panels
    Status,

    /// Turn the panels on, optionally with brightness and color
    On {
        /// Brightness level (0-255)
        #[arg(short, long)]
        brightness: Option<u8>,

        /// Hue in degrees (0-360), requires --saturation
        #[arg(long, requires = "saturation", conflicts_with = "kelvin")]
        hue: Option<f32>,

        /// Saturation in percent (0-100), requires --hue
        #[arg(long, requires = "hue")]
        saturation: Option<f32>,

        /// Color temperature in Kelvin (2500-6500)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_KELVIN)..=i64::from(MAX_KELVIN)))]
        kelvin: Option<u16>,
    },

    /// Turn the panels off
    Off,

    /// Show controller identity
    Info,

    /// Flash the panels
    Identify,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let connector = HttpConnector::new(&cli.addr, cli.port, &cli.token);
    let mut light = NanoLight::new(connector, None, cli.brightness_only);

    match cli.command {
        Commands::Status => {
            println!("Getting status for panels at {}...", cli.addr);
            light.update().await?;

            println!("\n{}:", light.name());
            println!("  Power: {}", if light.is_on() { "ON" } else { "OFF" });
            println!("  Brightness: {}/255", light.brightness());
            println!("  Color mode: {}", light.color_mode());
            if !light.brightness_only() {
                let (hue, saturation) = light.hs_color();
                println!("  Hue/Saturation: {}°, {}%", hue, saturation);
                println!("  Temperature: {}K", light.color_temp_kelvin());
            }
        }

        Commands::On {
            brightness,
            hue,
            saturation,
            kelvin,
        } => {
            let mut command = TurnOn::new();
            if let Some(level) = brightness {
                command.brightness(level);
            }
            if let (Some(hue), Some(saturation)) = (hue, saturation) {
                command.hs_color(hue, saturation);
            } else if let Some(kelvin) = kelvin {
                command.color_temp(kelvin);
            }

            println!("Turning panels ON at {}...", cli.addr);
            light.turn_on(&command).await?;
            println!("Panels turned ON");
        }

        Commands::Off => {
            println!("Turning panels OFF at {}...", cli.addr);
            light.turn_off().await?;
            println!("Panels turned OFF");
        }

        Commands::Info => {
            let info = light.device().await?.get_info().await?;
            println!("\n{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Identify => {
            light.device().await?.identify().await?;
            println!("Panels at {} should be flashing", cli.addr);
        }
    }

    Ok(())
}
