use std::marker::PhantomData;

use maskable::{Maskable, Masker};

// Not Maskable: only usable behind `opaque` or `PhantomData`.
#[derive(Clone, Default)]
pub struct Foreign;

#[derive(Clone, Maskable)]
pub struct TypedId<T> {
    pub id: String,
    pub _marker: PhantomData<T>,
}

#[derive(Clone, Maskable)]
pub struct Envelope<T, U> {
    #[mask("zero")]
    pub body: Vec<T>,
    #[mask(opaque)]
    pub meta: U,
}

#[derive(Clone, Maskable)]
pub struct Pair<A>(pub A, pub Option<A>);

fn main() {
    let masker = Masker::new();
    let id: TypedId<Foreign> = TypedId {
        id: "1".into(),
        _marker: PhantomData,
    };
    let _ = masker.mask(&id);
    let envelope = Envelope {
        body: vec![String::from("x")],
        meta: Foreign,
    };
    let _ = masker.mask(&envelope);
    let _ = masker.mask(&Pair(1_u32, None));
}
