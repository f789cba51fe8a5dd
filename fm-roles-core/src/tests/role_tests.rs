use super::*;

#[test]
fn test_generate_id_example() {
    assert_eq!(
        generate_id("InPossession", "Center Back", "Ball-Playing Center-Back"),
        "inpossession-center-back-ball-playing-center-back"
    );
}

#[test]
fn test_generate_id_empty_category() {
    assert_eq!(generate_id("OutPossession", "", "Sweeper Keeper"), "outpossession--sweeper-keeper");
}

#[test]
fn test_generate_id_keeps_punctuation() {
    assert_eq!(
        generate_id("InPossession", "Wing", "Inside Forward (R)"),
        "inpossession-wing-inside-forward-(r)"
    );
}

#[test]
fn test_generate_id_only_replaces_spaces() {
    // Tabs are not spaces and survive the slug untouched
    assert_eq!(generate_id("InPossession", "A\tB", "C"), "inpossession-a\tb-c");
}

#[test]
fn test_new_role_has_no_weights() {
    let role = RoleRecord::new(Phase::InPossession, "Striker", "Deep-Lying Forward");
    assert_eq!(role.id, "inpossession-striker-deep-lying-forward");
    assert_eq!(role.name, "Deep-Lying Forward");
    assert_eq!(role.category, "Striker");
    assert_eq!(role.phase, Phase::InPossession);
    assert!(role.weights.is_empty());
}

#[test]
fn test_set_weight_ignores_zero() {
    let mut role = RoleRecord::new(Phase::InPossession, "Wing", "Winger");
    role.set_weight("Pace", 0);
    assert!(role.weights.is_empty());

    role.set_weight("Pace", PRIMARY_WEIGHT);
    role.set_weight("Pace", 0);
    assert_eq!(role.weight("Pace"), 3);
}

#[test]
fn test_set_weight_last_write_wins() {
    let mut role = RoleRecord::new(Phase::InPossession, "Wing", "Winger");
    role.set_weight("Crossing", PRIMARY_WEIGHT);
    role.set_weight("Crossing", SECONDARY_WEIGHT);
    assert_eq!(role.weight("Crossing"), 2);
    assert_eq!(role.weight("Finishing"), 0);
}

#[test]
fn test_weights_keep_insertion_order() {
    let mut role = RoleRecord::new(Phase::OutPossession, "Striker", "Pressing Forward");
    role.set_weight("WorkRate", 3);
    role.set_weight("Aggression", 2);
    role.set_weight("Stamina", 3);
    let keys: Vec<&str> = role.weights.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["WorkRate", "Aggression", "Stamina"]);
}

#[test]
fn test_serialized_field_order() {
    let mut role = RoleRecord::new(Phase::InPossession, "Striker", "Poacher");
    role.set_weight("OffTheBall", 3);
    let json = serde_json::to_string(&role).unwrap();
    assert_eq!(
        json,
        r#"{"Id":"inpossession-striker-poacher","Name":"Poacher","Category":"Striker","Phase":"InPossession","Weights":{"OffTheBall":3}}"#
    );
}

#[test]
fn test_deserialize_without_weights() {
    let json = r#"{"Id":"x","Name":"N","Category":"C","Phase":"OutPossession"}"#;
    let role: RoleRecord = serde_json::from_str(json).unwrap();
    assert_eq!(role.phase, Phase::OutPossession);
    assert!(role.weights.is_empty());
}
