// Pattern 6: Collections of Move-Only Values
// A vector of owners is built by moving each owner in. Four owners means
// four allocations and four releases, never more.
use ownership_tour::ExclusiveOwner;

fn main() {
    println!("Vector of 4 owners - 4 allocations, 4 releases, no copies");
    {
        let mut owners = Vec::new();
        for n in [1, 2, 3, 4] {
            // push moves the owner into the vector
            owners.push(ExclusiveOwner::new(n));
        }

        for owner in &owners {
            println!("{}", owner.read());
        }

        let total: i32 = owners.iter().map(|owner| owner.read()).sum();
        println!("Total: {}", total);

        // pop moves the owner back out; the vector forgets it
        if let Some(last) = owners.pop() {
            println!("Popped: {}", last.read());
        }
    }
    // scope end released the three remaining owners and the popped one
    println!("Done with vector");

    println!("Owner collections example completed");
}
