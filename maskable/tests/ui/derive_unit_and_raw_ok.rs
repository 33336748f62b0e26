use maskable::{Maskable, Masker};

#[derive(Clone, Maskable)]
pub struct Unit;

#[derive(Clone, Maskable)]
pub struct Keywords {
    #[mask(r#type = "hash")]
    pub r#type: String,
    #[mask(opaque)]
    pub raw: std::path::PathBuf,
}

fn main() {
    let masker = Masker::new();
    let _ = masker.mask(&Unit);
    masker.set_tag_name("type");
    let _ = masker.mask(&Keywords {
        r#type: "secret".into(),
        raw: std::path::PathBuf::from("/tmp"),
    });
}
