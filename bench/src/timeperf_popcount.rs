//! Provides the benchmark of chunked lookup-table popcount against Kernighan's algorithm.
use bitsy::Calculation;
use rand::thread_rng;
use std::time;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const BITS: usize = 32;
const LOOKUPS: [usize; 5] = [1, 2, 4, 8, 16];

fn main() {
    #[cfg(debug_assertions)]
    println!("Debugging enabled");

    let mut rng = thread_rng();
    let samples = Calculation::new(BITS, BITS / 2)
        .and_then(|calc| calc.sample(&mut rng, SIZES[SIZES.len() - 1]))
        .unwrap();

    for &size in &SIZES {
        println!("-- N={} --", size);
        perf_test(&samples[0..size]);
    }
}

fn perf_test(samples: &[String]) {
    let mut expected = None;

    for &lookup in &LOOKUPS {
        let ins = time::Instant::now();
        let calc = Calculation::new(BITS, lookup).unwrap();
        let constr_sec = ins.elapsed().as_secs_f64();

        let report = calc.run(samples).unwrap();
        assert!(report.agree());
        assert_eq!(*expected.get_or_insert(report.by_lookup), report.by_lookup);

        println!(
            "Lookup (W={}):\t{} ns/sample\t(table constr {} sec)",
            lookup,
            report.lookup_elapsed.as_nanos() as f64 / samples.len() as f64,
            constr_sec
        );
        if lookup == LOOKUPS[LOOKUPS.len() - 1] {
            println!(
                "Kernighan:\t{} ns/sample",
                report.kernighan_elapsed.as_nanos() as f64 / samples.len() as f64
            );
        }
    }
}
