use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::fractals::mandelbulb::errors::MandelbulbError;
use crate::core::fractals::mandelbulb::params::GenerationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Binary little-endian PLY, readable by most point-cloud viewers
    Ply,
    /// Headerless native-endian f32 triples, identical to the wire payload
    Raw,
}

/// Sample the Mandelbulb boundary and write the point cloud to disk.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Lattice resolution per axis
    #[arg(short, long, env = "MANDELBULB_DIMENSION", default_value_t = 64)]
    pub dimension: u32,

    /// Exponent of the triplex power
    #[arg(short, long, env = "MANDELBULB_POWER", default_value_t = 8.0)]
    pub power: f64,

    /// Iteration cap before a sample counts as bounded
    #[arg(short = 'i', long, env = "MANDELBULB_MAX_ITERATIONS", default_value_t = 80)]
    pub max_iterations: u32,

    /// Where to write the point cloud
    #[arg(short, long, env = "MANDELBULB_OUTPUT", default_value = "output/mandelbulb.ply")]
    pub output: PathBuf,

    #[arg(short, long, value_enum, env = "MANDELBULB_FORMAT", default_value_t = OutputFormat::Ply)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn params(&self) -> Result<GenerationParams, MandelbulbError> {
        GenerationParams::new(self.dimension, self.power, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_of(id: &str) -> String {
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .unwrap();

        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults() {
        // Read from the command definition so MANDELBULB_* variables cannot leak in.
        assert_eq!(default_of("dimension"), "64");
        assert_eq!(default_of("power"), "8");
        assert_eq!(default_of("max_iterations"), "80");
        assert_eq!(default_of("output"), "output/mandelbulb.ply");
        assert_eq!(default_of("format"), "ply");
    }

    #[test]
    fn test_env_names() {
        let command = Cli::command();
        let envs: Vec<String> = command
            .get_arguments()
            .filter_map(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            envs,
            vec![
                "MANDELBULB_DIMENSION",
                "MANDELBULB_POWER",
                "MANDELBULB_MAX_ITERATIONS",
                "MANDELBULB_OUTPUT",
                "MANDELBULB_FORMAT",
            ]
        );
    }

    // Every flag is passed, and explicit flags take precedence over the environment.
    #[test]
    fn test_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "mandelbulb_explorer",
            "--dimension",
            "32",
            "--power",
            "4.5",
            "--max-iterations",
            "20",
            "--format",
            "raw",
            "-o",
            "cloud.bin",
        ])
        .unwrap();

        assert_eq!(cli.params().unwrap(), GenerationParams::new(32, 4.5, 20).unwrap());
        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.output, PathBuf::from("cloud.bin"));
    }

    #[test]
    fn test_params_are_validated() {
        let cli = Cli::try_parse_from(["mandelbulb_explorer", "--dimension", "0"]).unwrap();

        assert!(matches!(cli.params(), Err(MandelbulbError::InvalidDimension(0))));
    }

    #[test]
    fn test_negative_dimension_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["mandelbulb_explorer", "--dimension", "-4"]).is_err());
    }
}
