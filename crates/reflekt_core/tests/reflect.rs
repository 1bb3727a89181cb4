//! Integration tests for derived and hand-written `Reflect` implementations.

use reflekt_core::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Reflect)]
struct Player {
    #[property(rename = "Health", meta = "VisibleAnywhere")]
    health: i32,
    #[property(rename = "Name", meta = "EditAnywhere")]
    name: String,
    #[property(rename = "Speed", meta = "VisibleAnywhere")]
    speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            health: 100,
            name: "Zoran".to_string(),
            speed: 2.0,
        }
    }
}

/// Same shape as `Player`, registered by hand.
struct ManualPlayer {
    health: i32,
    name: String,
    speed: f32,
}

impl Reflect for ManualPlayer {
    fn register(registry: &mut PropertyRegistry<Self>) {
        registry
            .add("Health", "VisibleAnywhere", |p: &ManualPlayer| &p.health)
            .add("Name", "EditAnywhere", |p: &ManualPlayer| &p.name)
            .add("Speed", "VisibleAnywhere", |p: &ManualPlayer| &p.speed);
    }
}

#[derive(Reflect)]
struct Chest {
    #[property(rename = "Contents", meta = "Hidden", opaque)]
    contents: Vec<String>,
    #[property(rename = "Locked", opaque)]
    locked: bool,
    #[property(rename = "Gold", meta = "VisibleAnywhere")]
    gold: i32,
}

/// Holds fields that are neither `Send` nor `Sync`.
#[derive(Reflect)]
struct Widget {
    #[property(rename = "Count")]
    count: i32,
    hits: Cell<u32>,
    #[property(rename = "Owner", opaque)]
    owner: Rc<str>,
}

#[derive(Reflect)]
struct Token {
    #[property]
    r#type: String,
    #[property(meta = "VisibleAnywhere")]
    r#loop: f32,
}

const INITIAL: &str = "\
Property: Health | Type: i32 | Meta: VisibleAnywhere | Value: 100
Property: Name | Type: String | Meta: EditAnywhere | Value: Zoran
Property: Speed | Type: f32 | Meta: VisibleAnywhere | Value: 2
";

const CHANGED: &str = "\
Property: Health | Type: i32 | Meta: VisibleAnywhere | Value: 250
Property: Name | Type: String | Meta: EditAnywhere | Value: Neo
Property: Speed | Type: f32 | Meta: VisibleAnywhere | Value: 5
";

fn print<T: Reflect>(registries: &Registries, instance: &T) -> String {
    let mut out = Vec::new();
    instance
        .get_registry(registries)
        .print_all(instance, &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn derived_player_prints_initial_values() {
    let registries = Registries::new();
    assert_eq!(print(&registries, &Player::default()), INITIAL);
}

#[test]
fn derived_player_prints_live_values() {
    let registries = Registries::new();
    let mut player = Player::default();
    assert_eq!(print(&registries, &player), INITIAL);

    player.health = 250;
    player.name = "Neo".to_string();
    player.speed = 5.0;

    assert_eq!(print(&registries, &player), CHANGED);
    assert_eq!(registries.registry::<Player>().len(), 3);
}

#[test]
fn manual_registration_matches_derive() {
    let registries = Registries::new();
    let manual = ManualPlayer {
        health: 250,
        name: "Neo".to_string(),
        speed: 5.0,
    };
    assert_eq!(print(&registries, &manual), CHANGED);
}

#[test]
fn printing_twice_is_identical() {
    let registries = Registries::new();
    let player = Player::default();
    assert_eq!(print(&registries, &player), print(&registries, &player));
}

// ─────────────────────────────────────────────────────────────────────────────
// Registry sharing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn instances_share_one_registry() {
    let registries = Registries::new();
    let first = Player::default();
    let second = Player {
        health: 1,
        ..Player::default()
    };

    let a = first.get_registry(&registries);
    let b = second.get_registry(&registries);
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(a.len(), 3);

    assert_eq!(
        a.value(&second, "Health").unwrap(),
        Some(PropertyValue::Integer(1))
    );
    assert_eq!(
        a.value(&first, "Health").unwrap(),
        Some(PropertyValue::Integer(100))
    );
}

#[test]
fn registry_outlives_instances() {
    let registries = Registries::new();
    let registry = {
        let player = Player::default();
        player.get_registry(&registries)
    };
    assert_eq!(registry.names(), vec!["Health", "Name", "Speed"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Unrecognized kinds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn opaque_fields_are_listed_without_values() {
    let registries = Registries::new();
    let chest = Chest {
        contents: vec!["gem".to_string()],
        locked: true,
        gold: 7,
    };

    let output = print(&registries, &chest);
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Property: Contents | Type: "));
    assert!(lines[0].ends_with(" | Meta: Hidden"));
    assert_eq!(lines[1], "Property: Locked | Type: bool | Meta: ");
    assert_eq!(
        lines[2],
        "Property: Gold | Type: i32 | Meta: VisibleAnywhere | Value: 7"
    );
}

#[test]
fn opaque_fields_are_reachable_by_downcast() {
    let registries = Registries::new();
    let chest = Chest {
        contents: Vec::new(),
        locked: false,
        gold: 0,
    };

    let registry = registries.registry::<Chest>();
    let locked = registry.get("Locked").unwrap();

    assert_eq!(locked.type_tag().kind(), PropertyKind::Unrecognized);
    assert_eq!(locked.downcast_ref::<bool>(&chest), Some(&false));
    assert_eq!(registry.value(&chest, "Locked").unwrap(), None);
    assert!(chest.contents.is_empty());
}

#[test]
fn unknown_property_is_an_error() {
    let registries = Registries::new();
    let player = Player::default();
    let err = player
        .get_registry(&registries)
        .value(&player, "Mana")
        .unwrap_err();

    assert!(matches!(err, ReflectError::UnknownProperty { .. }));
    assert!(err.to_string().contains("Mana"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Field shapes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn non_thread_safe_fields_can_reflect() {
    let registries = Registries::new();
    let widget = Widget {
        count: 4,
        hits: Cell::new(0),
        owner: Rc::from("panel"),
    };
    widget.hits.set(widget.hits.get() + 2);

    let registry = widget.get_registry(&registries);
    assert_eq!(registry.names(), vec!["Count", "Owner"]);
    assert_eq!(
        registry.value(&widget, "Count").unwrap(),
        Some(PropertyValue::Integer(4))
    );

    let owner = registry.get("Owner").unwrap();
    assert_eq!(
        owner.downcast_ref::<Rc<str>>(&widget).map(|rc| &**rc),
        Some("panel")
    );
    assert_eq!(widget.hits.get(), 2);
}

#[test]
fn raw_identifiers_register_without_prefix() {
    let registries = Registries::new();
    let token = Token {
        r#type: "keyword".to_string(),
        r#loop: 0.5,
    };

    assert_eq!(
        print(&registries, &token),
        "Property: type | Type: String | Meta:  | Value: keyword\n\
         Property: loop | Type: f32 | Meta: VisibleAnywhere | Value: 0.5\n"
    );
}

#[test]
fn long_floats_print_six_significant_digits() {
    let registries = Registries::new();
    let player = Player {
        speed: 1.0 / 3.0,
        ..Player::default()
    };
    let fast = Player {
        speed: 1_234_567.0,
        ..Player::default()
    };

    let registry = registries.registry::<Player>();
    assert!(
        registry
            .render_all(&player)
            .ends_with("Property: Speed | Type: f32 | Meta: VisibleAnywhere | Value: 0.333333\n")
    );
    assert!(
        registry
            .render_all(&fast)
            .ends_with("| Value: 1.23457e+06\n")
    );
}
