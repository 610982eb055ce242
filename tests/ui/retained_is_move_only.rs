use indirect::Retained;

fn main() {
    let mut a = 1;
    let r = Retained::new_mut(&mut a);
    let s = r;
    *r += 1; //~ ERROR borrow of moved value
    drop(s);
}
