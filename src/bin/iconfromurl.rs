use std::path::Path;
use std::process;

use iconkit::logger::log_error;
use iconkit::models::Config;
use iconkit::{config, images, network};

#[tokio::main]
async fn main() {
    let cfg = config::read_config();
    match run(&cfg).await {
        Ok(()) => {
            let out_dir = Path::new(&cfg.out_dir);
            println!(
                "Wrote icons to {} (source saved at {})",
                out_dir.display(),
                out_dir.join("source.png").display()
            );
        }
        Err(e) => {
            log_error("iconfromurl failed", e.as_ref());
            eprintln!("iconfromurl: {}", e);
            process::exit(1);
        }
    }
}

async fn run(cfg: &Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let src = network::fetch_image(&cfg.source_url, cfg.timeout_secs).await?;
    let square = images::center_crop_square(&src);
    let out_dir = Path::new(&cfg.out_dir);
    images::write_source_copy(&square, out_dir)?;
    images::write_masked_icons(&square, out_dir)?;
    Ok(())
}
