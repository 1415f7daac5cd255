use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables: scalar figures as field/value pairs, with
/// amortization and factor-rate schedules rendered as their own row tables
/// beneath the scheme they belong to.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_section(None, result);
                print_envelope_footer(map);
            } else {
                print_section(None, value);
            }
        }
        Value::Null => println!("insufficient input"),
        _ => println!("{}", value),
    }
}

/// A section is either one scheme's figures or the whole breakdown (whose
/// values are themselves scheme objects).
fn print_section(heading: Option<&str>, value: &Value) {
    let map = match value {
        Value::Object(map) => map,
        Value::Null => {
            if let Some(name) = heading {
                println!("\n{}: insufficient input", name);
            } else {
                println!("insufficient input");
            }
            return;
        }
        other => {
            println!("{}", other);
            return;
        }
    };

    if let Some(name) = heading {
        println!("\n== {} ==", name);
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut nested: Vec<(&str, &Value)> = Vec::new();
    let mut has_scalars = false;

    for (key, val) in map {
        match val {
            Value::Array(_) | Value::Object(_) => nested.push((key.as_str(), val)),
            Value::Null => {
                builder.push_record([key.as_str(), "—"]);
                has_scalars = true;
            }
            _ => {
                builder.push_record([key.as_str(), &scalar_to_string(val)]);
                has_scalars = true;
            }
        }
    }

    if has_scalars {
        println!("{}", Table::from(builder));
    }

    for (key, val) in nested {
        match val {
            Value::Array(rows) => print_rows(key, rows),
            // Scheme objects inside the full-quote breakdown.
            other => print_section(Some(key), other),
        }
    }
}

/// Render an array of uniform row objects (amortization or financing) with
/// one column per field.
fn print_rows(name: &str, rows: &[Value]) {
    if rows.is_empty() {
        println!("\n{}: insufficient input", name);
        return;
    }

    let headers: Vec<String> = match rows[0].as_object() {
        Some(first) => first.keys().cloned().collect(),
        None => return,
    };

    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        if let Some(obj) = row.as_object() {
            let record: Vec<String> = headers
                .iter()
                .map(|h| obj.get(h).map(scalar_to_string).unwrap_or_default())
                .collect();
            builder.push_record(record);
        }
    }

    println!("\n{}:", name);
    println!("{}", Table::from(builder));
}

fn print_envelope_footer(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "—".to_string(),
        other => other.to_string(),
    }
}
