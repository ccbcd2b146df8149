use std::path::Path;
use std::process;

use iconkit::logger::log_error;
use iconkit::{config, icon, images};

fn main() {
    let cfg = config::read_config();
    let out_dir = Path::new(&cfg.out_dir);

    let base = icon::generate_icon(512);
    if let Err(e) = images::write_scaled_icons(&base, out_dir) {
        log_error("genicon failed", &e);
        eprintln!("genicon: {}", e);
        process::exit(1);
    }
    println!("Wrote icons to {}", out_dir.display());
}
