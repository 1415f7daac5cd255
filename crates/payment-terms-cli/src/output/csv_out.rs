use serde_json::Value;
use std::io;

/// Write output as CSV to stdout. Scalar figures flatten to
/// section,field,value records; schedule rows keep their own columns in a
/// trailing block per schedule.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let _ = wtr.write_record(["section", "field", "value"]);
    write_scalars(&mut wtr, "", result);
    let _ = wtr.flush();

    // Schedules after the scalar block, each with its own header row.
    write_schedules(result, "");
}

fn write_scalars(wtr: &mut csv::Writer<io::StdoutLock<'_>>, section: &str, value: &Value) {
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Object(_) => write_scalars(wtr, key, val),
                Value::Array(_) => {}
                Value::Null => {
                    let _ = wtr.write_record([section, key, "insufficient input"]);
                }
                other => {
                    let _ = wtr.write_record([section, key, &scalar_to_string(other)]);
                }
            }
        }
    }
}

fn write_schedules(value: &Value, section: &str) {
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Object(_) => write_schedules(val, key),
                Value::Array(rows) if !rows.is_empty() => {
                    let label = if section.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", section, key)
                    };
                    write_row_block(&label, rows);
                }
                _ => {}
            }
        }
    }
}

fn write_row_block(label: &str, rows: &[Value]) {
    let headers: Vec<String> = match rows[0].as_object() {
        Some(first) => first.keys().cloned().collect(),
        None => return,
    };

    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let mut header_record = vec![label.to_string()];
    header_record.extend(headers.clone());
    let _ = wtr.write_record(&header_record);

    for row in rows {
        if let Some(obj) = row.as_object() {
            let mut record = vec![String::new()];
            record.extend(
                headers
                    .iter()
                    .map(|h| obj.get(h).map(scalar_to_string).unwrap_or_default()),
            );
            let _ = wtr.write_record(&record);
        }
    }

    let _ = wtr.flush();
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
