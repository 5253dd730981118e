fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = multibrot_renderer::PpmFilePresenter::new();
    let config = multibrot_renderer::RenderConfig::default();
    let mut controller = multibrot_renderer::MultibrotController::new(config, presenter);

    controller.generate()?;

    std::fs::create_dir_all("output")?;
    controller.write("output/multibrot.ppm")?;

    Ok(())
}
