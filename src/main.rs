fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = mandelbrot_term::AnsiTerminalPresenter::default();
    let mut controller = mandelbrot_term::TerminalController::new(presenter);

    controller.render()?;

    Ok(())
}
