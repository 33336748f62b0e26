use maskable::{Maskable, Masker};

#[derive(Clone, Maskable)]
pub struct Address {
    #[mask("zero")]
    pub post_code: String,
}

#[derive(Clone, Maskable)]
pub struct User {
    pub id: String,
    #[mask("filled", audit = "hash")]
    pub name: String,
    #[mask("random100")]
    pub age: i64,
    pub address: Address,
    secret: String,
}

fn main() {
    let user = User {
        id: "123456".into(),
        name: "Usagi".into(),
        age: 3,
        address: Address {
            post_code: "123-4567".into(),
        },
        secret: "hidden".into(),
    };
    let masked = Masker::new().mask(&user).unwrap();
    let _ = (masked.id, masked.name, masked.age, masked.address.post_code, masked.secret);
}
