use super::*;

#[test]
fn registry_insert_moves_existing_elements() {
    let mut reg = ElementRegistry::new();
    let id = ElementId::new("hero.title");
    assert!(reg.is_empty());
    assert_eq!(
        reg.insert(
            id.clone(),
            ElementLayout {
                top: 10.0,
                height: 5.0
            }
        ),
        None
    );
    let prev = reg.insert(
        id.clone(),
        ElementLayout {
            top: 20.0,
            height: 5.0,
        },
    );
    assert_eq!(prev.map(|l| l.top), Some(10.0));
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get(&id).map(|l| l.top), Some(20.0));
}

#[test]
fn removed_elements_are_absent() {
    let mut reg = ElementRegistry::new();
    reg.insert(
        "a".into(),
        ElementLayout {
            top: 0.0,
            height: 1.0,
        },
    );
    assert!(reg.contains(&"a".into()));
    assert!(reg.remove(&"a".into()).is_some());
    assert!(!reg.contains(&"a".into()));
}

#[test]
fn ids_serialize_as_plain_strings() {
    let id = ElementId::from("services.card.0");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"services.card.0\"");
    assert_eq!(id.to_string(), "services.card.0");
}
