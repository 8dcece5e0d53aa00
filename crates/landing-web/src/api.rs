//! API Client

use landing_content::LandingContent;

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Fetch page content from the backend
pub async fn fetch_content() -> Result<LandingContent, String> {
    let url = format!("{}/api/content", origin());

    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("Content request failed: {}", response.status()));
    }

    let content: LandingContent = response.json().await.map_err(|e| e.to_string())?;
    content.validate().map_err(|e| e.to_string())?;
    Ok(content)
}
