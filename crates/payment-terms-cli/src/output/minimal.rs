use serde_json::Value;

/// Print just the headline figure from the output.
///
/// Heuristic: look for the figure a sales agent quotes first for each
/// scheme, then fall back to the first scalar field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Per-scheme headline figures, in quoting priority.
    let priority_keys = [
        "total_payment",
        "net_amount",
        "net_down_payment",
        "balance_80",
        "reservation_fee",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Full-quote breakdown: one headline line per scheme.
        let mut printed = false;
        for (scheme, val) in map {
            if let Value::Object(scheme_map) = val {
                for key in &priority_keys {
                    if let Some(v) = scheme_map.get(*key) {
                        if !v.is_null() {
                            println!("{}: {}", scheme, format_minimal(v));
                            printed = true;
                            break;
                        }
                    }
                }
            }
        }
        if printed {
            return;
        }

        // Fall back to first scalar field.
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    if result_obj.is_null() {
        println!("insufficient input");
        return;
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
