use clap::Parser;
use iconfont_raster::cli::Cli;
use iconfont_raster::config::Config;
use iconfont_raster::export;
use iconfont_raster::font::{FileFont, FontRegistry};
use iconfont_raster::icon::{CodePoint, IconBuilder};
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("Render failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    let registry = FontRegistry::global();
    let family = cli.family();
    registry.register(FileFont::new(family.clone(), &cli.font));
    let preloaded = config.register_fonts(registry);
    if preloaded > 0 {
        info!("Registered {} fonts from config", preloaded);
    }

    let style = cli.style(&config);
    let builder = IconBuilder::global();
    let bottom = CodePoint::owned(family.clone(), cli.code);
    let image = match cli.stack {
        Some(top) => {
            let top = CodePoint::owned(family, top);
            builder.build_stacked_image_with(&bottom, &top, &style)?
        }
        None => builder.build_image_with(&bottom, &style)?,
    };

    export::save_pam(&image, &cli.output)?;
    info!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        cli.output.display()
    );
    Ok(())
}
