use std::time::Duration;

use image::RgbaImage;

use crate::logger::log_line;

/// Fetch the source artwork over HTTP and decode it to RGBA.
/// Any transport error or non-success status aborts the run.
pub async fn fetch_image(
    url: &str,
    timeout_secs: u64,
) -> Result<RgbaImage, Box<dyn std::error::Error + Send + Sync>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()).into());
    }

    let bytes = response.bytes().await?;
    log_line(&format!("Downloaded {} bytes from {}", bytes.len(), url));
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgba8())
}
