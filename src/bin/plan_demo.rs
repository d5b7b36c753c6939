use blueprint_detector::config::{load_config, RuntimeConfig};
use blueprint_detector::image::io::{load_gray, write_json_file};
use blueprint_detector::plan::Plan;
use blueprint_detector::{PlanDetector, PlanParams};
use chrono::Utc;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = parse_cli()?;

    let buffer = load_gray(&config.input_path).map_err(|e| e.to_string())?;
    let reference = config
        .image_reference
        .clone()
        .unwrap_or_else(|| config.input_path.display().to_string());

    let detector = PlanDetector::new(config.plan_params);
    let plan = detector
        .process(buffer.as_view(), &reference, Utc::now())
        .map_err(|e| e.to_string())?;

    print_summary(&plan);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &plan)?;
        println!("\nPlan JSON written to {}", path.display());
    }

    Ok(())
}

fn parse_cli() -> Result<RuntimeConfig, String> {
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("plan_demo")
        .to_string();

    let mut config: Option<RuntimeConfig> = None;
    let mut input: Option<PathBuf> = None;
    let mut json_out: Option<PathBuf> = None;
    let mut reference: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&program);
                std::process::exit(0);
            }
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a path")?;
                config = Some(load_config(Path::new(path))?);
            }
            "--json-out" => {
                i += 1;
                json_out = Some(PathBuf::from(
                    args.get(i).ok_or("--json-out requires a path")?,
                ));
            }
            "--reference" => {
                i += 1;
                reference = Some(args.get(i).ok_or("--reference requires a value")?.clone());
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {other}"));
            }
            other => {
                input = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let mut config = match (config, input) {
        (Some(config), None) => config,
        (None, Some(input_path)) => RuntimeConfig {
            input_path,
            image_reference: None,
            output: Default::default(),
            plan_params: PlanParams::default(),
        },
        (Some(mut config), Some(input_path)) => {
            config.input_path = input_path;
            config
        }
        (None, None) => {
            print_usage(&program);
            return Err("an image path or --config is required".to_string());
        }
    };
    if json_out.is_some() {
        config.output.json_out = json_out;
    }
    if reference.is_some() {
        config.image_reference = reference;
    }
    Ok(config)
}

fn print_usage(program: &str) {
    println!("Usage: {program} <image-path> [options]");
    println!("       {program} --config <config.json>");
    println!();
    println!("Options:");
    println!("  --config <path>      JSON runtime config (input, output, parameters)");
    println!("  --json-out <path>    write the plan as pretty JSON");
    println!("  --reference <name>   image reference stored in the plan record");
}

fn print_summary(plan: &Plan) {
    println!("Plan summary");
    println!("  image: {}", plan.image_reference);
    println!("  created: {}", plan.created_at.to_rfc3339());

    println!("\nVertical axes ({})", plan.vertical_axes.len());
    for axis in &plan.vertical_axes {
        println!("  {:>3} @ x={:.1}", axis.label, axis.coordinate);
    }
    println!("\nHorizontal axes ({})", plan.horizontal_axes.len());
    for axis in &plan.horizontal_axes {
        println!("  {:>3} @ y={:.1}", axis.label, axis.coordinate);
    }

    println!("\nElements ({})", plan.elements.len());
    for (id, record) in &plan.elements {
        let c = &record.coordinates;
        println!(
            "  {:>6}  x={} y={} {}x{}",
            id, c.x, c.y, c.width, c.height
        );
    }
}
