use typed_ini::{Options, Value};

#[test]
fn reassigned_key_keeps_its_position() -> Result<(), Box<dyn std::error::Error>> {
    let s = "[A]\nx=1\ny=2\nx=3.5\n";
    let doc = typed_ini::from_str(s, &Options::default())?;

    assert_eq!(doc.get::<f64>("A.x")?, 3.5);
    assert_eq!(
        doc.dump(),
        vec![(
            "A",
            vec![("x", "3.5".to_string()), ("y", "2".to_string())]
        )]
    );
    Ok(())
}

#[test]
fn reopened_section_is_not_duplicated() -> Result<(), Box<dyn std::error::Error>> {
    let s = "[A]\na1=1\n[B]\nb1=2\n[A]\na2=3\na1=one\n";
    let doc = typed_ini::from_str(s, &Options::default())?;

    let names: Vec<&str> = doc.sections().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let a = doc.section("A").expect("section A");
    let keys: Vec<&str> = a.entries().iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["a1", "a2"]);
    assert_eq!(a.get("a1"), Some(&Value::Text("one".into())));
    assert_eq!(a.get("a2"), Some(&Value::Integer(3)));
    Ok(())
}

#[test]
fn names_are_case_sensitive() -> Result<(), Box<dyn std::error::Error>> {
    let s = "[Sec]\nKey=1\n[sec]\nkey=2\n";
    let doc = typed_ini::from_str(s, &Options::default())?;

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get::<i64>("Sec.Key")?, 1);
    assert_eq!(doc.get::<i64>("sec.key")?, 2);
    assert!(doc.get::<i64>("Sec.key").is_err());
    Ok(())
}

#[test]
fn same_key_in_different_sections_is_independent() -> Result<(), Box<dyn std::error::Error>> {
    let s = "[A]\nk=1\n[B]\nk=2\n";
    let doc = typed_ini::from_str(s, &Options::default())?;
    assert_eq!(doc.get::<i64>("A.k")?, 1);
    assert_eq!(doc.get::<i64>("B.k")?, 2);
    Ok(())
}

#[test]
fn header_without_keys_still_appears() -> Result<(), Box<dyn std::error::Error>> {
    let doc = typed_ini::from_str("[Empty]\n[Full]\nk=v\n", &Options::default())?;
    let dump = doc.dump();
    assert_eq!(dump.len(), 2);
    assert_eq!(dump[0], ("Empty", vec![]));
    Ok(())
}
