//! Basic usage example for dense-int-set.
//!
//! This example demonstrates membership, iteration and set algebra.

use dense_int_set::{DenseSet, Error};

fn main() -> Result<(), Error> {
    println!("=== Dense Int Set - Basic Usage Example ===\n");

    let mut set = DenseSet::new();
    println!("Created empty set");

    // Insert some elements, negative ones included
    println!("\nInserting elements: 100, 200, -150, 300");
    set.insert(100)?;
    set.insert(200)?;
    set.insert(-150)?;
    set.insert(300)?;
    println!("Set now contains {} elements in {} words", set.len(), set.word_count());

    // Any integer type converts, as long as it fits in i64
    println!("\nConversions:");
    println!("  insert(7u8): {:?}", set.insert(7u8));
    println!("  insert(u64::MAX): {:?}", set.insert(u64::MAX));

    println!("\nMembership checks:");
    println!("  contains(-150): {}", set.contains(-150));
    println!("  contains(999): {}", set.contains(999));

    println!("\nExtremes:");
    println!("  first: {:?}", set.first());
    println!("  last: {:?}", set.last());

    println!("\nNavigation:");
    println!("  find_next(101): {:?}", set.find_next(101));
    println!("  find_prev(99): {:?}", set.find_prev(99));

    println!("\nIteration (ascending): {:?}", set);
    let down: Vec<i64> = set.iter().rev().collect();
    println!("Iteration (descending): {:?}", down);

    let range: Vec<i64> = set.range(0..=200).collect();
    println!("\nrange(0..=200): {:?}", range);

    println!("\nTaking 7: {:?}", set.take(7));
    println!("Taking 7 again: {:?}", set.take(7));
    println!("Popping last: {:?}", set.pop_last());

    println!("\n=== Set Algebra ===\n");
    let evens: DenseSet = (0..40).step_by(2).collect();
    let threes: DenseSet = (0..40).step_by(3).collect();

    println!("evens: {:?}", evens);
    println!("threes: {:?}", threes);
    println!("  evens | threes: {:?}", &evens | &threes);
    println!("  evens & threes: {:?}", &evens & &threes);
    println!("  evens - threes: {:?}", &evens - &threes);
    println!("  evens ^ threes: {:?}", &evens ^ &threes);

    let sixes = &evens & &threes;
    println!("\nsixes is subset of evens: {}", sixes.is_subset(&evens));
    println!("sixes is disjoint from odds: {}", {
        let odds: DenseSet = (1..40).step_by(2).collect();
        sixes.is_disjoint(&odds)
    });

    // Equality ignores how each window was built
    println!("\n=== Equality ===\n");
    let mut grown = DenseSet::from([10, 20]);
    grown.insert(1_000_000)?;
    grown.remove(1_000_000);
    let fresh = DenseSet::from([10, 20]);
    println!("grown uses {} words, fresh uses {}", grown.word_count(), fresh.word_count());
    println!("grown == fresh: {}", grown == fresh);

    println!("\n=== Example Complete ===");
    Ok(())
}
