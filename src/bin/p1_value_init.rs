// Pattern 1: Literals and Initialization

// Checked at compile time; a nice error message, no runtime cost.
const _: () = assert!(std::mem::size_of::<i64>() == 8, "this demo assumes 64-bit integers");

fn collection_literals() {
    // One expression initializes the whole vector
    let v = vec![50, -10, 20, -30];
    println!("{:?}", v);

    // max over a literal list
    let biggest = [11, 12, 32, 2345].into_iter().max().unwrap();
    println!("Biggest: {}", biggest);
}

fn narrowing_is_rejected() {
    // let c: i8 = 129;  // Error! 129 does not fit in an i8
    let c: i8 = 127;
    println!("Largest i8: {}", c);
}

fn raw_strings() {
    // Prints \n\\\n literally; nothing is escaped inside r"..."
    println!("{}", r"\n\\\n");
}

fn main() {
    collection_literals();
    narrowing_is_rejected();
    raw_strings();
    println!("Value initialization example completed");
}
