use reflekt_core::reflect::{Reflect, Registries};

#[derive(Reflect)]
struct Player {
    #[property(rename = "Health", meta = "VisibleAnywhere")]
    health: i32,
    #[property]
    name: String,
    speed: f32,
}

fn main() {
    let registries = Registries::new();
    let player = Player {
        health: 100,
        name: "Zoran".to_string(),
        speed: 2.0,
    };
    let registry = player.get_registry(&registries);
    assert_eq!(registry.names(), vec!["Health", "name"]);
    let _ = player.speed;
}
