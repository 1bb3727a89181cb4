use reflekt_core::reflect::Reflect;

#[derive(Reflect)]
struct Lamp {
    #[property(rename = "Colors")]
    colors: Vec<u8>,
}

fn main() {}
