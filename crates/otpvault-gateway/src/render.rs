//! Minimal server-side HTML rendering.
//!
//! Two pages only: the unlock form and the codes table. The codes page
//! embeds the session token and a small script that polls `/api/codes`
//! with the token header; a 401 sends the browser back to the landing
//! page, which re-locks.

use otpvault_core::CodeDisplay;

/// Escape text for safe interpolation into HTML.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the unlock form, optionally with an error line.
pub fn unlock_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, escape_html(message)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>otpvault</title>
<style>
body {{ font-family: sans-serif; max-width: 24rem; margin: 4rem auto; }}
.error {{ color: #b00020; }}
input {{ font-size: 1rem; padding: 0.3rem; }}
</style>
</head>
<body>
<h1>Unlock vault</h1>
{error_html}
<form method="post" action="/unlock">
<input type="password" name="password" autofocus autocomplete="current-password">
<input type="submit" value="Unlock">
</form>
</body>
</html>
"#
    )
}

/// Render the codes table with the session token embedded.
pub fn codes_page(codes: &[CodeDisplay], token: &str) -> String {
    let rows: String = codes
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td class=\"code\">{}</td></tr>\n",
                escape_html(&c.name),
                escape_html(&c.code)
            )
        })
        .collect();
    let token = escape_html(token);

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>otpvault</title>
<style>
body {{ font-family: sans-serif; max-width: 24rem; margin: 4rem auto; }}
table {{ width: 100%; border-collapse: collapse; }}
td {{ padding: 0.4rem; border-bottom: 1px solid #ddd; }}
.code {{ font-family: monospace; font-size: 1.4rem; text-align: right; }}
</style>
</head>
<body>
<h1>Current codes</h1>
<table id="codes">
{rows}</table>
<script>
const token = "{token}";
async function refresh() {{
  const resp = await fetch("/api/codes", {{ headers: {{ "X-Session-Token": token }} }});
  if (!resp.ok) {{ window.location = "/"; return; }}
  const codes = await resp.json();
  const rows = codes.map(c => {{
    const tr = document.createElement("tr");
    for (const [text, cls] of [[c.name, ""], [c.code, "code"]]) {{
      const td = document.createElement("td");
      td.textContent = text;
      if (cls) td.className = cls;
      tr.appendChild(td);
    }}
    return tr;
  }});
  document.getElementById("codes").replaceChildren(...rows);
}}
setInterval(refresh, 5000);
</script>
</body>
</html>
"#
    )
}
