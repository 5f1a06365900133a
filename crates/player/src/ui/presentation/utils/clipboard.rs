//! Clipboard access through the page's `navigator.clipboard`
//!
//! Works the same in the browser and in the desktop webview.

use dioxus::document;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Failed to encode clipboard text: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

fn copy_script(text: &str) -> Result<String, ClipboardError> {
    let literal = serde_json::to_string(text)?;
    Ok(format!(
        r#"try {{
    await navigator.clipboard.writeText({literal});
    return true;
}} catch (e) {{
    return false;
}}"#
    ))
}

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let script = copy_script(text)?;
    let copied = document::eval(&script)
        .join::<bool>()
        .await
        .map_err(|e| ClipboardError::Unavailable(format!("{e:?}")))?;

    if copied {
        Ok(())
    } else {
        Err(ClipboardError::Unavailable("permission denied".into()))
    }
}
