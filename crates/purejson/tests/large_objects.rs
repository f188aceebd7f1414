use purejson::{Value, decode};

fn object_text(keys: impl Iterator<Item = String>) -> Vec<u8> {
    let body: Vec<String> = keys
        .enumerate()
        .map(|(i, k)| format!("\"{}\": {}", k, i))
        .collect();
    format!("{{{}}}", body.join(", ")).into_bytes()
}

#[test]
fn many_distinct_keys_keep_their_order() -> Result<(), Box<dyn std::error::Error>> {
    let n = 200_000;
    let text = object_text((0..n).map(|i| format!("k{}", i)));
    let v = decode(&text)?;
    let pairs = v.as_object().ok_or("not an object")?;
    assert_eq!(pairs.len(), n);
    assert_eq!(pairs[0], (Value::from("k0"), Value::from(0)));
    assert_eq!(pairs[n - 1].0.as_str(), Some(format!("k{}", n - 1).as_str()));
    assert_eq!(v.get("k123456").and_then(Value::as_i64), Some(123456));
    Ok(())
}

#[test]
fn repeated_keys_in_large_object_overwrite_in_place() -> Result<(), Box<dyn std::error::Error>> {
    // 50k slots, each key written four times.
    let slots = 50_000;
    let text = object_text((0..slots * 4).map(|i| format!("k{}", i % slots)));
    let v = decode(&text)?;
    let pairs = v.as_object().ok_or("not an object")?;
    assert_eq!(pairs.len(), slots);
    assert_eq!(pairs[0].0.as_str(), Some("k0"));
    assert_eq!(pairs[0].1.as_i64(), Some((slots * 3) as i64));
    assert_eq!(v.get("k7").and_then(Value::as_i64), Some((slots * 3 + 7) as i64));
    Ok(())
}

#[test]
fn duplicate_keys_overwrite_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let v = decode(br#"{"a": 1, "b": 2, "a": 3, [1]: 4, [1]: 5}"#)?;
    assert_eq!(
        v,
        Value::Object(vec![
            (Value::from("a"), Value::from(3)),
            (Value::from("b"), Value::from(2)),
            (Value::from(vec![Value::from(1)]), Value::from(5)),
        ])
    );
    Ok(())
}
