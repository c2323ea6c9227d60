// Pattern 4: Iterator Predicates

fn all_lowercase(s: &str) -> bool {
    s.chars().all(|c| !c.is_alphabetic() || c.is_lowercase())
}

fn character_predicates() {
    let lc = "hello brave new world";
    println!("Is '{}' all lower case: {}", lc, all_lowercase(lc));
    println!("Contains a digit: {}", lc.chars().any(|c| c.is_ascii_digit()));
    println!("No uppercase at all: {}", !lc.chars().any(|c| c.is_uppercase()));
}

// A slice parameter accepts array literals, vectors, anything contiguous
fn print_all(args: &[i32]) {
    println!("print_all:");
    for p in args {
        println!("{}", p);
    }
}

fn main() {
    character_predicates();
    print_all(&[1, 2, 3, 4]);
    println!("Predicates example completed");
}
