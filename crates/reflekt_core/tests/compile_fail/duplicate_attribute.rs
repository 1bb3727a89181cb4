use reflekt_core::reflect::Reflect;

#[derive(Reflect)]
struct Lamp {
    #[property(rename = "Brightness")]
    #[property(meta = "EditAnywhere")]
    brightness: f32,
}

fn main() {}
