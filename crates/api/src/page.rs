//! HTML rendering for the dashboard page.
//!
//! [`render_page`] is a pure function of the catalog, the active tab, and an
//! optional result message. Every interpolated value is HTML-escaped; the
//! message keeps its whitespace through `white-space: pre-wrap`.

use console_core::catalog::{display_name, Catalog, ScriptEntry};

const STYLE: &str = r#"
        body {
            background-color: #0a0a0a;
            color: #c0c0c0;
            font-family: 'Consolas', 'Courier New', monospace;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            margin: 0;
        }
        .container {
            width: 600px;
            background-color: #111;
            border: 1px solid #222;
            border-radius: 10px;
            box-shadow: 0 0 20px rgba(0,0,0,0.4);
            padding: 30px 40px;
        }
        .title {
            font-size: 1.2rem;
            color: #888;
            letter-spacing: 1px;
            border-bottom: 1px solid #222;
            padding-bottom: 10px;
            margin-bottom: 15px;
        }
        .tabs { display: flex; gap: 10px; margin-bottom: 20px; }
        .tab {
            padding: 8px 14px;
            border: 1px solid #333;
            border-radius: 6px;
            color: #ddd;
            text-decoration: none;
            background-color: #121212;
            font-weight: 700;
        }
        .tab:hover { background-color: #1c1c1c; color: #fff; border-color: #666; }
        .tab.active { background-color: #1a1a1a; color: #fff; border-color: #777; }
        .scripts { display: flex; flex-wrap: wrap; gap: 12px; }
        form { margin: 0; }
        button {
            background-color: #0f0f0f;
            color: #aaa;
            border: 1px solid #444;
            padding: 12px 20px;
            font-size: 14px;
            cursor: pointer;
            border-radius: 6px;
            font-family: 'Consolas', monospace;
        }
        button:hover { background-color: #222; color: #ddd; border-color: #666; }
        .message {
            margin-top: 25px;
            font-size: 14px;
            color: #bbb;
            background-color: #0d0d0d;
            border: 1px solid #222;
            border-radius: 6px;
            padding: 10px;
            white-space: pre-wrap;
        }
        .message::before { content: "\203A  "; color: #888; }
"#;

/// Render the full dashboard page.
///
/// Shows one tab per configured group (in order, `active_tab` highlighted),
/// one button form per script in `active_tab` (in catalog order), and
/// `message` verbatim when present.
pub fn render_page(catalog: &Catalog, active_tab: &str, message: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n    <title>command_console</title>\n");
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str("    <div class=\"title\">command_console</div>\n");

    html.push_str("    <div class=\"tabs\">\n");
    for group in &catalog.groups {
        html.push_str(&render_tab(group, group == active_tab));
    }
    html.push_str("    </div>\n");

    html.push_str("    <div class=\"scripts\">\n");
    for script in catalog.scripts_in(active_tab) {
        html.push_str(&render_script_form(script, active_tab));
    }
    html.push_str("    </div>\n");

    if let Some(message) = message {
        html.push_str(&format!(
            "    <div class=\"message\">{}</div>\n",
            html_escape(message)
        ));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_tab(group: &str, active: bool) -> String {
    let class = if active { "tab active" } else { "tab" };
    format!(
        "        <a href=\"/?tab={}\" class=\"{class}\">{}</a>\n",
        html_escape(&urlencoding::encode(group)),
        html_escape(&display_name(group)),
    )
}

/// One form per button. Submits exactly `path`, `type`, and `tab`.
fn render_script_form(script: &ScriptEntry, active_tab: &str) -> String {
    format!(
        concat!(
            "        <form action=\"/run\" method=\"post\">\n",
            "            <input type=\"hidden\" name=\"path\" value=\"{path}\">\n",
            "            <input type=\"hidden\" name=\"type\" value=\"{kind}\">\n",
            "            <input type=\"hidden\" name=\"tab\" value=\"{tab}\">\n",
            "            <button type=\"submit\">{label}</button>\n",
            "        </form>\n",
        ),
        path = html_escape(&script.path),
        kind = html_escape(&script.kind),
        tab = html_escape(active_tab),
        label = html_escape(&script.label),
    )
}

/// Escape HTML special characters.
fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
