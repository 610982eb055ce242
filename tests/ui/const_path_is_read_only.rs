use indirect::{ConstPropagating, Retained};

struct Holder<'a> {
    value: ConstPropagating<Retained<'a, i32>>,
}

impl Holder<'_> {
    fn poke(&self) {
        *self.value.get() = 2; //~ ERROR cannot assign to data in dereference
    }
}

fn main() {
    let mut a = 1;
    let holder = Holder {
        value: ConstPropagating::new(Retained::new_mut(&mut a)),
    };
    holder.poke();
}
