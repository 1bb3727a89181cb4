use reflekt_core::reflect::Reflect;

#[derive(Reflect)]
struct Lamp {
    #[property(metadata = "EditAnywhere")]
    brightness: f32,
}

fn main() {}
