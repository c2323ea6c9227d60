// Pattern 5: Exclusive Ownership Basics
// One owner per resource. Transfer moves the resource; the donor binding is
// dead afterwards, and the compiler enforces it.
use colored::Colorize;
use ownership_tour::ExclusiveOwner;

fn create_and_read() {
    let owner = ExclusiveOwner::new(123);
    println!("owner.read(): {}", owner.read());
}

fn transfer_kills_the_donor() {
    let a = ExclusiveOwner::new(123);
    println!("a.read(): {}", a.read());

    let b = ExclusiveOwner::transfer(a);
    println!("b.read(): {}", b.read());

    // println!("{}", a.read());  // Error! `a` was moved into `b`
    println!("{}", "read-after-transfer rejected at compile time".green());
}

fn duplication_is_rejected() {
    let _a = ExclusiveOwner::new(1);
    let _b = ExclusiveOwner::new(2);

    // let _c = _a;                          // would move `_a`, not copy it; there is no copy
    // let _c = ExclusiveOwner::clone(&_a);  // Error! no `Clone` impl exists
    println!("{}", "duplication rejected at compile time".green());
}

fn main() {
    create_and_read();
    transfer_kills_the_donor();
    duplication_is_rejected();
    println!("Exclusive ownership example completed");
}
