use indirect::Required;

fn main() {
    let r = {
        let a = 1;
        Required::new(&a) //~ ERROR `a` does not live long enough
    };
    println!("{}", *r);
}
