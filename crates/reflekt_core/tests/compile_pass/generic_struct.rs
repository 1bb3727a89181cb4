use reflekt_core::reflect::{Reflect, Registries};

#[derive(Reflect)]
struct Tagged<T: 'static> {
    #[property(rename = "Label")]
    label: String,
    #[property(opaque)]
    payload: T,
}

fn main() {
    let registries = Registries::new();
    let tagged = Tagged {
        label: "crate".to_string(),
        payload: [1_u8, 2, 3],
    };
    assert_eq!(tagged.get_registry(&registries).len(), 2);
}
