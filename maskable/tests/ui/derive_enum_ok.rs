use maskable::{Maskable, Masker};

#[derive(Clone, Maskable)]
pub enum Contact {
    Email {
        #[mask("fixed")]
        address: String,
    },
    Phone(#[mask("filled3")] String, u8),
    Unknown,
}

#[derive(Clone, Maskable)]
pub enum Never {}

fn main() {
    let masker = Masker::new();
    let _ = masker.mask(&Contact::Email {
        address: "a@b.c".into(),
    });
    let _ = masker.mask(&Contact::Phone("090".into(), 1));
    let _ = masker.mask(&Contact::Unknown);
}
