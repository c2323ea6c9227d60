// Pattern 7: Nullable Owner Handles
// Boxed owners move like any other owner. Slots go further: they keep an
// observable empty state behind, and reading a dead handle is an error
// value, not a crash.
use colored::Colorize;
use ownership_tour::{ExclusiveOwner, OwnerSlot};

fn boxed_owner() {
    let up = Box::new(ExclusiveOwner::new(1));
    let down = up; // moves the box; the owner inside never moves in memory

    // up.read();  // Error! `up` was moved into `down`
    println!("down.read(): {}", down.read());
}

fn slots_in_a_vector() {
    let mut slots: Vec<OwnerSlot> = (0..4)
        .map(|n| OwnerSlot::new(ExclusiveOwner::new(n)))
        .collect();

    // Reading through an occupied handle is fine
    println!("slots[3].read(): {:?}", slots[3].read());

    // Transfer the owner out; the slot stays behind, empty
    match slots[3].transfer_out() {
        Ok(loose) => println!("Transferred out: {}", loose.read()),
        Err(e) => println!("{} {}", "unexpected:".red(), e),
    }

    // The dead handle reports the access instead of crashing
    match slots[3].read() {
        Ok(v) => println!("{} {}", "unexpected value:".red(), v),
        Err(e) => println!("{} {}", "dead handle:".yellow(), e),
    }

    // A second transfer out of the same slot is the same logic error
    assert!(slots[3].transfer_out().is_err());
    println!("{}", "empty slot access reported, not crashed".green());
}

fn refilling_a_slot() {
    let mut slot = OwnerSlot::vacant();
    println!("vacant slot is_empty: {}", slot.is_empty());

    slot.put(ExclusiveOwner::new(9));
    println!("after put, read(): {:?}", slot.read());
}

fn main() {
    boxed_owner();
    slots_in_a_vector();
    refilling_a_slot();
    println!("Owner slots example completed");
}
