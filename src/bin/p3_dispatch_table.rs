// Pattern 3: Closure Dispatch Tables
// A hash map from names to boxed closures. The closures share one piece of
// captured state through a Cell, so updates are visible at call time.
use std::cell::Cell;
use std::collections::HashMap;

fn main() {
    let version = Cell::new(0);

    let mut directory: HashMap<&str, Box<dyn Fn() + '_>> = HashMap::new();
    directory.insert("hello", Box::new(|| println!("Hello, Rust {}", version.get())));
    directory.insert("goodbye", Box::new(|| println!("Goodbye, Rust {}", version.get())));

    // The closures read `version` when invoked, not when created
    version.set(2021);
    directory["hello"]();
    version.set(2015);

    // Walking the container; iteration order is unspecified for a hash map
    for (name, action) in &directory {
        println!("Now executing {}", name);
        action();
    }

    println!("Dispatch table example completed");
}
