//! CLI output formatting utilities.

use colored::Colorize;

/// Prints JSON with syntax highlighting.
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json));
}

/// Colors a pretty-printed JSON string.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta.
/// Punctuation is white, with brackets in bold.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut token = String::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut is_key = false;
    let mut after_colon = false;

    for ch in json.chars() {
        if in_string {
            token.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                let colored = if is_key { token.cyan() } else { token.green() };
                out.push_str(&colored.to_string());
                token.clear();
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                flush_scalar(&mut out, &mut token);
                token.push(ch);
                in_string = true;
                is_key = !after_colon;
                after_colon = false;
            }
            ':' => {
                flush_scalar(&mut out, &mut token);
                out.push_str(&":".white().to_string());
                after_colon = true;
            }
            ',' => {
                flush_scalar(&mut out, &mut token);
                out.push_str(&",".white().to_string());
                after_colon = false;
            }
            '{' | '}' | '[' | ']' => {
                flush_scalar(&mut out, &mut token);
                out.push_str(&ch.to_string().white().bold().to_string());
                after_colon = false;
            }
            _ => token.push(ch),
        }
    }

    flush_scalar(&mut out, &mut token);
    out
}

/// Writes a pending unquoted token, coloring it if it is a scalar value.
fn flush_scalar(out: &mut String, token: &mut String) {
    let value = token.trim();
    if value.is_empty() {
        out.push_str(token);
    } else {
        let start = token.len() - token.trim_start().len();
        let end = start + value.len();
        let colored = match value {
            "true" | "false" | "null" => value.magenta().to_string(),
            _ if value.parse::<f64>().is_ok() => value.yellow().to_string(),
            _ => value.to_string(),
        };
        out.push_str(&token[..start]);
        out.push_str(&colored);
        out.push_str(&token[end..]);
    }
    token.clear();
}

/// Formats a boolean as a colored check or cross.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(json: &str) -> String {
        colored::control::set_override(false);
        highlight_json(json)
    }

    #[test]
    fn test_highlight_json_preserves_text() {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "progress": 0.5,
            "phase": "opening",
            "transform": null,
            "isAnimating": true,
            "quote": "a \"b\": c",
        }))
        .unwrap();
        assert_eq!(plain(&json), json);
    }

    #[test]
    fn test_format_bool() {
        assert!(format_bool(true).contains('✓'));
        assert!(format_bool(false).contains('✗'));
    }
}
