use std::fmt::Debug;

use dioxus::document;
use serde_json::Value;

/// Copies `text` through the webview clipboard and reports whether the
/// webview confirmed the write. Blank input is never copied.
pub async fn copy_text_to_clipboard(text: String) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let payload = serde_json::to_string(&text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            try {{
                await navigator.clipboard.writeText(data);
                return true;
            }} catch (_err) {{
                const area = document.createElement('textarea');
                area.value = data;
                document.body.appendChild(area);
                area.select();
                const ok = document.execCommand('copy');
                document.body.removeChild(area);
                return ok;
            }}
        }})()"#
    );
    copy_succeeded(document::eval(&script).await)
}

fn copy_succeeded<E: Debug>(result: Result<Value, E>) -> bool {
    match result {
        Ok(Value::Bool(true)) => true,
        Ok(other) => {
            tracing::warn!("clipboard write rejected: {other}");
            false
        }
        Err(err) => {
            tracing::warn!("clipboard write failed: {err:?}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_confirmed_write_counts() {
        assert!(copy_succeeded::<()>(Ok(Value::Bool(true))));
        assert!(!copy_succeeded::<()>(Ok(Value::Bool(false))));
        assert!(!copy_succeeded::<()>(Ok(Value::Null)));
        assert!(!copy_succeeded(Err("eval channel closed")));
    }
}
