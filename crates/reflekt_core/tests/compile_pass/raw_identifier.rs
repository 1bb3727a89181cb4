use reflekt_core::reflect::{Reflect, Registries};

#[derive(Reflect)]
struct Token {
    #[property(meta = "VisibleAnywhere")]
    r#type: String,
    #[property(rename = "r#match")]
    r#match: i32,
}

fn main() {
    let registries = Registries::new();
    let token = Token {
        r#type: "keyword".to_string(),
        r#match: 1,
    };
    assert_eq!(
        token.get_registry(&registries).render_all(&token),
        "Property: type | Type: String | Meta: VisibleAnywhere | Value: keyword\n\
         Property: r#match | Type: i32 | Meta:  | Value: 1\n"
    );
}
