use reflekt_core::reflect::{Reflect, Registries};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Reflect)]
struct Widget {
    #[property]
    count: i32,
    hits: Cell<u32>,
    #[property(opaque)]
    owner: Rc<str>,
}

fn main() {
    let registries = Registries::new();
    let widget = Widget {
        count: 3,
        hits: Cell::new(0),
        owner: Rc::from("panel"),
    };
    widget.hits.set(widget.hits.get() + 1);

    let registry = widget.get_registry(&registries);
    assert_eq!(registry.names(), vec!["count", "owner"]);
    assert_eq!(widget.owner.len(), 5);
}
