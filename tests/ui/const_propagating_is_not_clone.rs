use indirect::{ConstPropagating, Retained};

fn main() {
    let mut a = 1;
    let p = ConstPropagating::new(Retained::new_mut(&mut a));
    let q = ConstPropagating::clone(&p); //~ ERROR no function or associated item named `clone`
    drop((p, q));
}
