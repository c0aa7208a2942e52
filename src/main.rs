use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand, value_parser};
use log::{debug, error};
use mgrs_rs::{GridType, Mgrs, Point, Utm, is_mgrs};
use serde_json::json;
use std::error::Error;
use std::process;

fn cli() -> ClapCommand {
    ClapCommand::new("mgrs-rs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between MGRS references, UTM coordinates and WGS84 points")
        .subcommand_required(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("mgrs")
                .about("Encode a point as an MGRS reference")
                .arg(
                    Arg::new("lon")
                        .help("Longitude in degrees, or x in meters with --meters")
                        .value_name("LON")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .index(1),
                )
                .arg(
                    Arg::new("lat")
                        .help("Latitude in degrees, or y in meters with --meters")
                        .value_name("LAT")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .index(2),
                )
                .arg(
                    Arg::new("accuracy")
                        .short('a')
                        .long("accuracy")
                        .help("Digits per axis, 0 (100 km) to 5 (1 m)")
                        .value_name("N")
                        .default_value("5")
                        .value_parser(value_parser!(u8)),
                )
                .arg(
                    Arg::new("meters")
                        .short('m')
                        .long("meters")
                        .help("Read the input as Web Mercator (EPSG:3857) meters")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("point")
                .about("Decode MGRS or UTM text to longitude and latitude")
                .arg(
                    Arg::new("text")
                        .help("MGRS reference or UTM coordinate")
                        .value_name("TEXT")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("utm")
                .about("Convert MGRS text to UTM, or normalise UTM text")
                .arg(
                    Arg::new("text")
                        .help("MGRS reference or UTM coordinate")
                        .value_name("TEXT")
                        .required(true)
                        .index(1),
                ),
        )
}

fn encode(matches: &ArgMatches, as_json: bool) -> Result<String, Box<dyn Error>> {
    let x = *matches.get_one::<f64>("lon").ok_or("missing LON")?;
    let y = *matches.get_one::<f64>("lat").ok_or("missing LAT")?;
    let accuracy = *matches.get_one::<u8>("accuracy").unwrap_or(&5);
    let point = if matches.get_flag("meters") {
        Point::meters(x, y)
    } else {
        Point::degrees(x, y)
    };

    let grid_type = GridType::with_accuracy(accuracy)?;
    let mgrs = Mgrs::from_point(&point);
    let text = mgrs.coordinate_at(grid_type);
    debug!("Encoded {:?} as {}", point, text);

    if as_json {
        let value = json!({ "mgrs": text, "precision": grid_type, "point": point.to_degrees() });
        return Ok(serde_json::to_string_pretty(&value)?);
    }
    Ok(text)
}

// MGRS first; anything that is not MGRS must be UTM
fn decode(text: &str) -> Result<Utm, Box<dyn Error>> {
    if is_mgrs(text) {
        return Ok(Mgrs::parse(text)?.to_utm());
    }
    Utm::parse(text).map_err(|e| {
        debug!("{}", e);
        format!("{:?} is neither an MGRS reference nor a UTM coordinate", text).into()
    })
}

fn to_point(matches: &ArgMatches, as_json: bool) -> Result<String, Box<dyn Error>> {
    let text = matches.get_one::<String>("text").ok_or("missing TEXT")?;
    let point = decode(text)?.to_point();
    if as_json {
        return Ok(serde_json::to_string_pretty(&point)?);
    }
    Ok(format!("{:.7} {:.7}", point.longitude(), point.latitude()))
}

fn to_utm(matches: &ArgMatches, as_json: bool) -> Result<String, Box<dyn Error>> {
    let text = matches.get_one::<String>("text").ok_or("missing TEXT")?;
    let utm = decode(text)?;
    if as_json {
        return Ok(serde_json::to_string_pretty(&utm)?);
    }
    Ok(utm.to_string())
}

fn run(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
    let as_json = matches.get_flag("json");
    match matches.subcommand() {
        Some(("mgrs", sub)) => encode(sub, as_json),
        Some(("point", sub)) => to_point(sub, as_json),
        Some(("utm", sub)) => to_utm(sub, as_json),
        _ => Err("no command given".into()),
    }
}

fn main() {
    let matches = cli().get_matches();

    let level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
