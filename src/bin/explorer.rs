use mandelbrot_explorer::{GuiError, MandelbrotConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), GuiError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Use scroll to zoom in/out at a position.");
    println!("Type 'r' to reset the view.");

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), MandelbrotConfig::default());

    command.execute()
}
