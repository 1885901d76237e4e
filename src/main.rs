//! cookcut entry point.
//! Parses the command line, configures logging and runs the processor.

use cookcut::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    renderer::CookiecutterRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads every CSV and YAML file of the input directory
/// 2. Writes cookiecutter.json into the template directory
/// 3. Runs the render engine into the output directory
fn run(args: Args) -> Result<()> {
    let renderer = CookiecutterRenderer::new(args.renderer.as_str());
    let processor = Processor::from_args(&renderer, &args);

    processor.process(&args.input_dir, &args.template_dir, &args.output_dir)?;

    if !args.skip_render {
        println!("Template generation completed successfully in {}.", args.output_dir.display());
    }
    Ok(())
}
