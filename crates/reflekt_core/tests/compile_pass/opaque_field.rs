use reflekt_core::reflect::{Reflect, Registries};

#[derive(Reflect)]
struct Inventory {
    #[property(rename = "Items", meta = "EditAnywhere", opaque)]
    items: Vec<String>,
    #[property(rename = "Gold")]
    gold: i32,
}

fn main() {
    let registries = Registries::new();
    let inventory = Inventory {
        items: vec!["sword".to_string()],
        gold: 12,
    };
    let rendered = registries.registry::<Inventory>().render_all(&inventory);
    assert!(rendered.contains("Property: Gold | Type: i32 | Meta:  | Value: 12"));
}
