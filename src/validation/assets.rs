use std::path::Path;

/// Logo paths are optional; when set they must point at an existing
/// png/jpg/jpeg/svg file inside the chain's directory.
pub fn logo(logo: &str, chain_dir: &Path) -> Result<(), String> {
    if logo.is_empty() {
        return Ok(());
    }
    let path = chain_dir.join(logo);
    if !path.is_file() {
        return Err(format!("logo file not found: {}", path.display()));
    }
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" | "svg" => Ok(()),
        _ => Err(format!(
            "logo file must be PNG, JPG, JPEG, or SVG: {}",
            path.display()
        )),
    }
}
