//! Emit stage: render the name set as a JavaScript module and write it out.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::extract::CitySet;

/// Quote `name` as a JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript's, so quotes, backslashes
/// and control characters come out escaped.
///
/// ```
/// use citylist::pipeline::quote;
///
/// assert_eq!(quote("Boston").unwrap(), r#""Boston""#);
/// assert_eq!(quote(r#"The "Big" Apple"#).unwrap(), r#""The \"Big\" Apple""#);
/// ```
pub fn quote(name: &str) -> Result<String> {
    serde_json::to_string(name).with_context(|| format!("Failed to quote value: {:?}", name))
}

/// Render `export const <export_name> = [ ... ];` with one entry per line.
///
/// No trailing comma and no trailing newline. An empty set renders a blank
/// line between the brackets.
pub fn render(cities: &CitySet, export_name: &str) -> Result<String> {
    let entries = cities.iter().map(quote).collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "export const {} = [\n{}\n];",
        export_name,
        entries.join(",\n")
    ))
}

/// Write the rendered document, replacing any existing file.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
