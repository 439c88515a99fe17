use clap::Parser;
use std::process::ExitCode;
use tangent_plane_demo::{Demo, DemoError, Frame, Slider, Window, render};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

const TITLE: &str = "Effect of social media duration and frequency on Gen Z productivity";

#[derive(Parser)]
#[command(name = "tangent_plane_demo")]
#[command(about = "Partial derivatives and tangent plane of a productivity model", long_about = None)]
struct Cli {
    /// Social media duration (hours/day, 0 to 24)
    #[arg(short, long, default_value = "4.0")]
    duration: f64,

    /// App openings per day (0 to 50)
    #[arg(short, long, default_value = "20")]
    frequency: f64,

    /// Figure file
    #[arg(short, long, value_name = "OUTPUT", default_value = "tangent_plane.svg")]
    output: String,

    /// Skip drawing the figure
    #[arg(long)]
    no_plot: bool,

    /// Log debug messages (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, &directives))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(setup = e.is_setup(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

// RUST_LOG directives win over the level chosen by --verbose
fn log_filter(verbose: bool, directives: &str) -> EnvFilter {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    EnvFilter::builder().with_default_directive(level.into()).parse_lossy(directives)
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let x0 = read_slider(&Slider::duration(), cli.duration);
    let y0 = read_slider(&Slider::frequency(), cli.frequency);

    let demo = Demo::new(Window::default())?;
    let frame = demo.frame(x0, y0)?;
    print_frame(&frame);

    if !cli.no_plot {
        render::draw(&frame.scene, &cli.output)?;
        println!("\nFigure written to {}", cli.output);
    }
    Ok(())
}

fn read_slider(slider: &Slider, value: f64) -> f64 {
    let accepted = slider.accept(value);
    if accepted != value {
        tracing::warn!(requested = value, accepted, "{} adjusted to the slider range", slider.label);
    }
    accepted
}

fn print_frame(frame: &Frame) {
    println!("{}\n", TITLE);
    for formula in &frame.report.formulas {
        println!("  {}", formula);
    }
    for steps in &frame.report.steps {
        println!("\n### {}:", steps.title);
        for line in &steps.lines {
            println!("  {}", line);
        }
    }
    println!();
    for line in &frame.report.summary {
        println!("{}", line);
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
