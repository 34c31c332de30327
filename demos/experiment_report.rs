//! Experiment Report Example
//!
//! Walks through the store operations end to end and writes a report.
//!
//! Run with: cargo run --example experiment_report

use lab_ledger::experiment::{Category, ExperimentStore};

fn main() -> lab_ledger::Result<()> {
    println!("=== lab-ledger Experiment Report ===\n");

    let mut store = ExperimentStore::new();

    // -------------------------------------------------------------------------
    // 1. Add experiments (one of them invalid)
    // -------------------------------------------------------------------------
    println!("1. Adding experiments...");

    store.add("Titration", "14/03/2024", "Chemistry", vec![7.1, 6.9, 7.0, 7.2])?;
    store.add("Yeast growth", "02/04/2024", "Biology", vec![1.2, 2.5, 4.9])?;
    store.add("Free fall", "19/04/2024", "Physics", vec![9.78, 9.82, 9.81])?;

    if let Err(e) = store.add("Bad date", "31/02/2024", "Physics", vec![1.0, 2.0, 3.0]) {
        println!("   Rejected: {e}");
    }
    println!(
        "   Categories: {}",
        Category::ALL.map(Category::as_str).join(", ")
    );

    // -------------------------------------------------------------------------
    // 2. List
    // -------------------------------------------------------------------------
    println!("\n2. Stored experiments:");
    for (i, exp) in store.list().enumerate() {
        println!(
            "   #{} {} [{}] {} {:?}",
            i + 1,
            exp.name(),
            exp.category(),
            exp.date_text(),
            exp.results()
        );
    }

    // -------------------------------------------------------------------------
    // 3. Analyze and compare
    // -------------------------------------------------------------------------
    println!("\n3. Analysis:");
    for i in 0..store.len() {
        if let Some(a) = store.analyze(i) {
            println!(
                "   #{}: average={:.2} max={} min={}",
                i + 1,
                a.average,
                a.maximum,
                a.minimum
            );
        }
    }

    let comparison = store.compare(&[0, 1, 2])?;
    if let (Some(best), Some(worst)) = (&comparison.best, &comparison.worst) {
        println!("   Best: {} ({:.2})", best.name, best.average);
        println!("   Worst: {} ({:.2})", worst.name, worst.average);
    }

    // -------------------------------------------------------------------------
    // 4. Remove and report
    // -------------------------------------------------------------------------
    println!("\n4. Removing #2 and writing report...");
    let removed = store.remove(1)?;
    println!("   Removed: {}", removed.name());

    let path = std::env::temp_dir().join("lab-ledger-demo");
    let written = store.write_report(&path)?;
    println!("   Report: {}\n", written.display());
    print!("{}", store.generate_report());

    println!("=== Done ===");
    Ok(())
}
