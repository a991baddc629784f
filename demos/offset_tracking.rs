//! Message offset tracking example.
//!
//! A consumer records which offsets of a partition it has processed and
//! compares that against the offsets the broker reports as committed.
//! Offsets are dense and mostly sequential, which keeps the window small.

use dense_int_set::{DenseSet, Error};

fn main() -> Result<(), Error> {
    println!("=== Offset Tracking Example ===\n");

    let mut processed = DenseSet::new();

    println!("Processing messages 1000-1099...");
    processed.union_with_elements(1000..1100)?;

    // A failed message leaves a gap at 1100
    println!("Processing messages 1101-1150 (gap at 1100)...");
    processed.union_with_elements(1101..=1150)?;

    println!("\nOffset tracking stats:");
    println!("  Total processed: {}", processed.len());
    println!("  Earliest offset: {:?}", processed.first());
    println!("  Latest offset: {:?}", processed.last());

    println!("\nDetecting gaps:");
    detect_gaps(&processed, 1000, 1150);

    // Compare against what the broker expects
    let expected: DenseSet = (1000..=1150).collect();
    let missing = &expected - &processed;
    println!("\nOffsets expected but not processed: {:?}", missing);

    let committed: DenseSet = (990..1120).collect();
    let unknown = &processed - &committed;
    println!(
        "Processed offsets not yet committed: {} (from {:?} to {:?})",
        unknown.len(),
        unknown.first(),
        unknown.last()
    );

    println!("\nProcessing missing offset 1100...");
    processed.insert(1100)?;
    detect_gaps(&processed, 1000, 1150);

    // Re-processing is idempotent
    println!("\nIdempotent processing:");
    println!("  Re-inserting offset 1050: was_new={}", processed.insert(1050)?);
    println!("  Total count unchanged: {}", processed.len());

    // Cleanup drops old offsets by intersecting with the retention window
    println!("\nCleanup old offsets:");
    let retained: DenseSet = (1050..=1150).collect();
    let before = processed.len();
    processed &= &retained;
    println!("  Removed {} old offsets (< 1050)", before - processed.len());
    println!("  Remaining offsets: {}", processed.len());
    println!("  New earliest offset: {:?}", processed.first());

    println!("\n=== Example Complete ===");
    Ok(())
}

/// Report every run of missing offsets in `[start, end]`.
fn detect_gaps(set: &DenseSet, start: i64, end: i64) {
    let mut gaps = Vec::new();
    let mut current = start;

    while current <= end {
        if set.contains(current) {
            current += 1;
            continue;
        }
        let gap_end = match set.find_next(current) {
            Some(next) if next <= end => next - 1,
            _ => end,
        };
        gaps.push((current, gap_end));
        current = gap_end + 1;
    }

    if gaps.is_empty() {
        println!("  No gaps found in range {}-{}", start, end);
    } else {
        println!("  Found {} gap(s):", gaps.len());
        for (gap_start, gap_end) in gaps {
            if gap_start == gap_end {
                println!("    Missing offset: {}", gap_start);
            } else {
                println!("    Missing offset range: {}-{}", gap_start, gap_end);
            }
        }
    }
}
