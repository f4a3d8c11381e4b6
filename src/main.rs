use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use timing_calc::page::{Form, InputField};
use timing_calc::{FormattedResult, Sheet, TimingError};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

/// Beat, measure and song durations from tempo
#[derive(Debug, Parser)]
#[command(name = "timing-calc", version)]
struct Args {
    /// Tempo in beats per minute
    #[arg(short, long, allow_hyphen_values = true)]
    tempo: Option<String>,

    /// Beats per measure
    #[arg(short, long, allow_hyphen_values = true)]
    beats: Option<String>,

    /// Number of measures
    #[arg(short, long, allow_hyphen_values = true)]
    measures: Option<String>,

    /// Digits after the decimal point (0-20, otherwise unrounded)
    #[arg(short, long, allow_hyphen_values = true)]
    digits: Option<String>,

    /// YAML sheet with preset inputs; flags override its values
    #[arg(short, long)]
    sheet: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,

    /// Clear all inputs before computing
    #[arg(long)]
    reset: bool,
}

impl Args {
    fn input(&self, field: InputField) -> Option<&String> {
        match field {
            InputField::Tempo => self.tempo.as_ref(),
            InputField::Beats => self.beats.as_ref(),
            InputField::Measures => self.measures.as_ref(),
            InputField::NumDigits => self.digits.as_ref(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TimingError> {
    let sheet = args.sheet.as_deref().map(Sheet::from_path).transpose()?;
    let flags = InputField::ALL
        .into_iter()
        .filter_map(|field| args.input(field).map(|text| (field, text.as_str())));
    let mut form = Form::prefilled(sheet.as_ref(), flags);

    let formatted = if args.reset {
        log::info!("Resetting all inputs");
        form.reset()
    } else {
        form.update()
    };

    println!("{}", render(&formatted, args.format)?);
    Ok(())
}

fn render(formatted: &FormattedResult, format: OutputFormat) -> Result<String, TimingError> {
    match format {
        OutputFormat::Text => Ok(formatted.to_text()),
        OutputFormat::Yaml => {
            serde_yaml::to_string(formatted).map_err(|e| TimingError::Serialize(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(formatted)
            .map_err(|e| TimingError::Serialize(e.to_string())),
    }
}
