use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use modal_trainer::{render, Hand, Key, Mode, Settings, TrainerError, TrainerState, TrainerView};

/// Modal piano scale trainer: draws a key, mode and hand and shows the fingering
#[derive(Parser)]
#[command(name = "modal-trainer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML settings file (allowed keys, modes, hands, viewport width, seed)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fix the tonic instead of drawing it (e.g. C, "B♭", Bb)
    #[arg(short, long)]
    key: Option<Key>,

    /// Fix the mode instead of drawing it (e.g. Dorian, dor)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Fix the hand instead of drawing it (left or right)
    #[arg(long)]
    hand: Option<Hand>,

    /// Viewport width in pixels; below 768 the piano has two octaves
    #[arg(short, long)]
    width: Option<f64>,

    /// Seed for repeatable drills
    #[arg(long)]
    seed: Option<u64>,

    /// Number of drills to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Print the derived view as JSON
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only print errors on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn settings_for(cli: &Cli) -> Result<Settings, TrainerError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(key) = cli.key {
        settings.keys = vec![key];
    }
    if let Some(mode) = cli.mode {
        settings.modes = vec![mode];
    }
    if let Some(hand) = cli.hand {
        settings.hands = vec![hand];
    }
    if let Some(width) = cli.width {
        if !(width.is_finite() && width > 0.0) {
            return Err(TrainerError::SettingsError(format!(
                "--width must be a positive number, got {}",
                width
            )));
        }
        settings.viewport_width = width;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

/// Text drills are separated by a blank line; JSON ends with a newline like the text does.
fn format_output(json: bool, views: &[TrainerView]) -> Result<String, TrainerError> {
    let output = match (json, views) {
        (true, [view]) => render::to_json(view)? + "\n",
        (true, views) => render::to_json_list(views)? + "\n",
        (false, views) => views
            .iter()
            .map(render::to_text)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}

fn run(cli: &Cli) -> Result<(), TrainerError> {
    let settings = settings_for(cli)?;
    let mut rng: Box<dyn RngCore> = match settings.seed {
        Some(seed) => Box::new(Pcg32::seed_from_u64(seed)),
        None => Box::new(StdRng::from_entropy()),
    };

    let mut state = TrainerState::new(&settings);
    let mut views = Vec::with_capacity(cli.count);
    for _ in 0..cli.count {
        state.select_random(&mut rng);
        views.push(state.view().clone());
    }

    let output = format_output(cli.json, &views)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, &output).map_err(|e| TrainerError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            if !cli.quiet {
                eprintln!("Wrote {} drill(s) to {}", cli.count, path.display());
            }
        }
        None => print!("{}", output),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        if let Some(path) = &cli.config {
            eprintln!("Using settings from {}", path.display());
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parses_fixed_selection() {
        let cli = Cli::try_parse_from([
            "modal-trainer",
            "--key",
            "Bb",
            "--mode",
            "dor",
            "--hand",
            "left",
        ])
        .unwrap();
        assert_eq!(cli.key, Some(Key::BFlat));
        assert_eq!(cli.mode, Some(Mode::Dorian));
        assert_eq!(cli.hand, Some(Hand::Left));
        assert_eq!(cli.count, 1);
    }

    #[test]
    fn test_cli_rejects_unknown_key() {
        assert!(Cli::try_parse_from(["modal-trainer", "--key", "H"]).is_err());
    }

    #[test]
    fn test_flags_narrow_settings() {
        let cli = Cli::try_parse_from(["modal-trainer", "-k", "E", "-w", "500", "--seed", "3"])
            .unwrap();
        let settings = settings_for(&cli).unwrap();
        assert_eq!(settings.keys, vec![Key::E]);
        assert_eq!(settings.modes.len(), 7);
        assert_eq!(settings.viewport_width, 500.0);
        assert_eq!(settings.seed, Some(3));
    }

    #[test]
    fn test_output_ends_with_newline() {
        let mut state = TrainerState::new(&Settings::default());
        let mut rng = Pcg32::seed_from_u64(4);
        state.select_random(&mut rng);
        let views = vec![state.view().clone()];

        let json = format_output(true, &views).unwrap();
        assert!(json.ends_with("}\n"), "{:?}", json);
        let list = format_output(true, &[views[0].clone(), views[0].clone()]).unwrap();
        assert!(list.ends_with("]\n"));
        assert!(format_output(false, &views).unwrap().ends_with('\n'));
    }

    #[test]
    fn test_bad_width_is_error() {
        let cli = Cli::try_parse_from(["modal-trainer", "--width=-1"]).unwrap();
        assert!(matches!(
            settings_for(&cli),
            Err(TrainerError::SettingsError(_))
        ));
    }
}
