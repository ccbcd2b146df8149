use std::fs;
use std::path::PathBuf;

use crate::models::Config;

fn config_file_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(format!("{}/.iconkit/iconkit.txt", home))
}

/// Read the optional key=value config. A missing file means defaults;
/// a local `iconkit.txt` takes precedence for per-repo overrides.
pub fn read_config() -> Config {
    let content = fs::read_to_string("iconkit.txt")
        .or_else(|_| fs::read_to_string(config_file_path()))
        .unwrap_or_default();
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    for line in content.lines() {
        if let Some((k, v)) = line.split_once('=') {
            match k.trim() {
                "source_url" => cfg.source_url = v.trim().to_string(),
                "timeout_secs" => cfg.timeout_secs = v.trim().parse::<u64>().unwrap_or(30),
                "out_dir" => cfg.out_dir = v.trim().to_string(),
                _ => {}
            }
        }
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_SOURCE_URL;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let cfg = parse_config("");
        assert_eq!(cfg.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.out_dir, "icons");
    }

    #[test]
    fn test_parse_overrides() {
        let cfg = parse_config("source_url = https://example.com/a.png\ntimeout_secs=5\nout_dir=build/icons\n");
        assert_eq!(cfg.source_url, "https://example.com/a.png");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.out_dir, "build/icons");
    }

    #[test]
    fn test_parse_ignores_junk() {
        let cfg = parse_config("# comment\nnot a pair\ntimeout_secs=abc\n");
        assert_eq!(cfg.timeout_secs, 30);
    }
}
