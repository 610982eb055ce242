use indirect::Required;

fn main() {
    let r: Required<'_, i32> = Default::default(); //~ ERROR the trait bound
    println!("{}", *r);
}
