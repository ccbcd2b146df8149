/// One required output image: a (pixel size, output filename) pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

/// The fixed icon set, largest first. Every generator emits exactly these.
pub const ICON_SPECS: [IconSpec; 4] = [
    IconSpec { size: 512, filename: "icon512.png" },
    IconSpec { size: 128, filename: "icon128.png" },
    IconSpec { size: 48, filename: "icon48.png" },
    IconSpec { size: 16, filename: "icon16.png" },
];

/// Source artwork used when no config file overrides it.
pub const DEFAULT_SOURCE_URL: &str = "https://lh3.googleusercontent.com/gg/AMW1TPoI3at3SyYSbbzqti8oSykqdQpI1rwR9mY3s3R1sIwdEKqQZ4p62dZc_ue_PSGonfRdZaWK0x6ijm1zcUd9Nw50iTWBljNmYiYnDDVGsG_mtx4Ol-d-7BsX6Zx_SJBdmea_KbYxyUCvhvImRfq0nWQgGzWWQ5QZIO84Pg3CnvgYI10b13A0=s1024-rj";

#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    pub timeout_secs: u64,
    pub out_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: 30,
            out_dir: "icons".to_string(),
        }
    }
}
