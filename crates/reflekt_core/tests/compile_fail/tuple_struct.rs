use reflekt_core::reflect::Reflect;

#[derive(Reflect)]
struct Pair(i32, f32);

fn main() {}
