use reflekt_core::reflect::Reflect;

#[derive(Reflect)]
enum Shape {
    Circle,
    Square,
}

fn main() {}
