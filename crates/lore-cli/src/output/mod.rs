use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Item columns shown first in tables, in this order. Other fields follow
/// alphabetically.
const LEADING_COLUMNS: [&str; 8] = [
    "id", "title", "status", "queued", "source", "category", "tags", "due_at",
];

/// Fields that hold the rows of a list response.
const LIST_FIELDS: [&str; 2] = ["items", "suggestions"];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => Ok(match single_list(&map) {
            Some(items) => render_array_table(items),
            None => render_key_value_table(map),
        }),
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

/// List responses render as their rows; the other fields stay in the JSON
/// output.
fn single_list(map: &Map<String, Value>) -> Option<&[Value]> {
    LIST_FIELDS
        .iter()
        .find_map(|field| map.get(*field))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

fn render_key_value_table(map: Map<String, Value>) -> String {
    let headers = ["key", "value"];
    let mut entries = map.into_iter().collect::<Vec<_>>();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let rows = entries
        .into_iter()
        .map(|(key, value)| vec![key, value_to_cell(&value)])
        .collect::<Vec<_>>();
    table::render_entity_table(&headers, &rows, table_options())
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let headers = column_order(items);
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn column_order(items: &[Value]) -> Vec<String> {
    let mut keys = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys.sort_by_key(|key| {
        let rank = LEADING_COLUMNS
            .iter()
            .position(|leading| leading == key)
            .unwrap_or(LEADING_COLUMNS.len());
        (rank, key.clone())
    });
    keys
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(values) if values.iter().all(Value::is_string) => values
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(values) if values.iter().all(has_title) => values
            .iter()
            .filter_map(title_of)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Object(_) if has_title(value) => title_of(value).unwrap_or_default().to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

fn title_of(value: &Value) -> Option<&str> {
    value.get("title").and_then(Value::as_str)
}

fn has_title(value: &Value) -> bool {
    title_of(value).is_some()
}
