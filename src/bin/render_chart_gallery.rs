#[cfg(feature = "cairo-backend")]
use plot_graph::api::{PlotEngine, PlotEngineConfig};
#[cfg(feature = "cairo-backend")]
use plot_graph::core::{ColorScheme, ViewMode};
#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_ROOT: &str = "target/chart_gallery";

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    output_root: PathBuf,
    scheme: ColorScheme,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use plot_graph::render::CairoRenderer;

    let _ = plot_graph::telemetry::init_default_tracing();

    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            PlotEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => PlotEngineConfig::default().with_color_seed(0),
    }
    .with_color_scheme(args.scheme);

    let width = i32::try_from(config.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(config.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    let mut engine = PlotEngine::new(renderer, config).map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_root.display()
        )
    })?;

    for mode in ViewMode::ALL {
        engine.set_view_mode(mode);
        if let Some(err) = engine.last_render_error() {
            return Err(format!("{} redraw failed: {err}", mode.label()));
        }
        let path = args
            .output_root
            .join(format!("{}.png", mode.label().to_lowercase()));
        let mut file = File::create(&path)
            .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
        engine
            .with_renderer(|renderer| renderer.write_png(&mut file))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        println!(
            "{} -> {} (drawn as {})",
            mode.label(),
            path.display(),
            engine.effective_view_mode().label()
        );
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);
    let mut scheme = ColorScheme::Red;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            "--scheme" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scheme".to_owned())?;
                scheme = value.parse().map_err(|err: plot_graph::ChartError| err.to_string())?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        config_path,
        output_root,
        scheme,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_chart_gallery [--config <engine_config.json>] \
         [--output-root <dir>] [--scheme Random|Red|Green|Blue]\n\
         default output root: {DEFAULT_OUTPUT_ROOT}"
    )
}
