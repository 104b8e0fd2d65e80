use anyhow::Context;
use clap::Parser;

use mandelbulb_explorer::{
    Cli, CliController, FilePresenterPort, OutputFormat, PlyFilePresenter, RawF32FilePresenter,
    init_tracing,
};

fn run<P: FilePresenterPort>(cli: &Cli, presenter: P) -> anyhow::Result<()> {
    let params = cli.params().context("invalid generation parameters")?;
    let mut controller = CliController::new(presenter);

    controller.generate(params)?;
    controller
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.format {
        OutputFormat::Ply => run(&cli, PlyFilePresenter::new()),
        OutputFormat::Raw => run(&cli, RawF32FilePresenter::new()),
    }
}
