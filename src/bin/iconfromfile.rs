use std::path::Path;
use std::process;

use iconkit::logger::log_error;
use iconkit::{config, images};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: iconfromfile /path/to/source.png");
        process::exit(2);
    }
    let src_path = Path::new(&args[1]);
    if !src_path.exists() {
        eprintln!("Source image not found: {}", src_path.display());
        process::exit(1);
    }

    let cfg = config::read_config();
    let out_dir = Path::new(&cfg.out_dir);
    if let Err(e) = run(src_path, out_dir) {
        log_error("iconfromfile failed", &e);
        eprintln!("iconfromfile: {}", e);
        process::exit(1);
    }
    println!(
        "Wrote icons to {} (source saved at {})",
        out_dir.display(),
        out_dir.join("source.png").display()
    );
}

fn run(src_path: &Path, out_dir: &Path) -> Result<(), image::ImageError> {
    let src = image::open(src_path)?.to_rgba8();
    let square = images::center_crop_square(&src);
    images::write_source_copy(&square, out_dir)?;
    images::write_masked_icons(&square, out_dir)?;
    Ok(())
}
