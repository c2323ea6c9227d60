// Pattern 2: Closures as Values
use std::cmp::Ordering;

fn sort_with_closure() {
    let mut v = vec![50, -10, 20, -30];

    // The comparator is a closure, written inline at the call site
    v.sort_by(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
    println!("Sorted by absolute value: {:?}", v);
}

// A named comparator works just as well where the closure would be reused
fn abs_order(a: &i32, b: &i32) -> Ordering {
    a.abs().cmp(&b.abs())
}

fn sort_with_named_comparator() {
    let mut v = vec![50, -10, 20, -30];
    v.sort_by(abs_order);
    println!("Sorted with named comparator: {:?}", v);
}

fn closure_returning_closure() {
    // A closure that builds and returns another closure
    let make_adder = |n: i32| move |x: i32| x + n;
    let add_five = make_adder(5);
    println!("add_five(2) = {}", add_five(2));
}

fn stored_closures() {
    // Boxed: a single static type, so it can live in a struct or container
    let boxed: Box<dyn Fn() -> i32> = Box::new(|| 7);
    println!("boxed() = {}", boxed());

    // Unboxed: each closure has its own anonymous type; `let` infers it
    let plain = || 8;
    println!("plain() = {}", plain());
}

fn main() {
    sort_with_closure();
    sort_with_named_comparator();
    closure_returning_closure();
    stored_closures();
    println!("Closures example completed");
}
