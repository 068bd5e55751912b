use bitsy::bits::{from_binary, to_binary};
use bitsy::{chunk, hamming_weight, pad, setbits, Calculation, Error, LookupTable};
use proptest::prelude::*;

fn bit_string(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), 1..=max_len)
        .prop_map(|v| v.into_iter().map(|b| if b { '1' } else { '0' }).collect())
}

proptest! {
    #[test]
    fn test_pad_property(s in bit_string(64), extra in 0..16usize) {
        let width = s.len() + extra;
        let padded = pad(&s, width).unwrap();
        prop_assert_eq!(padded.len(), width);
        prop_assert!(padded.ends_with(&s));
        prop_assert!(padded[..extra].chars().all(|c| c == '0'));
        prop_assert_eq!(pad(&padded, width).unwrap(), padded);
    }

    #[test]
    fn test_binary_conversion_property(x in any::<u64>(), extra in 0..64usize) {
        let width = 64 + extra;
        let s = to_binary(x as u128, width).unwrap();
        prop_assert_eq!(s.len(), width);
        prop_assert_eq!(from_binary::<u128>(&s).unwrap(), x as u128);
    }

    #[test]
    fn test_chunk_property(s in bit_string(96), size in 1..12usize) {
        match chunk(&s, size) {
            Ok(chunks) => {
                prop_assert_eq!(s.len() % size, 0);
                prop_assert_eq!(chunks.len(), s.len() / size);
                prop_assert!(chunks.iter().all(|c| c.len() == size));
                prop_assert_eq!(chunks.concat(), s);
            }
            Err(e) => {
                prop_assert_ne!(s.len() % size, 0);
                prop_assert_eq!(e, Error::Misaligned { width: s.len(), chunk: size });
            }
        }
    }

    #[test]
    fn test_setbits_matches_kernighan(x in any::<u64>(), lookup in prop::sample::select(vec![1usize, 2, 4, 8])) {
        let table = LookupTable::new(lookup).unwrap();
        let s = to_binary(x, 64).unwrap();
        prop_assert_eq!(setbits(&s, &table).unwrap(), hamming_weight(x));
        prop_assert_eq!(hamming_weight(x), x.count_ones());
    }

    #[test]
    fn test_calculation_property(
        words in prop::collection::vec(any::<u32>(), 1..50),
        lookup in prop::sample::select(vec![1usize, 2, 4, 8]),
    ) {
        let calc = Calculation::new(32, lookup).unwrap();
        let samples: Vec<String> = words.iter().map(|&w| to_binary(w, 32).unwrap()).collect();
        let report = calc.run(&samples).unwrap();
        let expected: u64 = words.iter().map(|w| w.count_ones() as u64).sum();
        prop_assert_eq!(report.by_lookup, expected);
        prop_assert_eq!(report.by_kernighan, expected);
    }

    #[test]
    fn test_misaligned_calculation_property(bits in 1..=128usize, lookup in 1..=12usize) {
        let result = Calculation::new(bits, lookup);
        if bits % lookup == 0 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), Error::Misaligned { width: bits, chunk: lookup });
        }
    }
}

#[test]
fn test_single_sample_end_to_end() {
    let calc = Calculation::new(16, 16).unwrap();
    let report = calc.run(&["1011010110100110"]).unwrap();
    assert_eq!(report.samples, 1);
    assert_eq!(report.by_lookup, 9);
    assert_eq!(report.by_kernighan, 9);
}

#[test]
fn test_sixteen_by_five_is_a_configuration_error() {
    assert_eq!(
        Calculation::new(16, 5).unwrap_err(),
        Error::Misaligned { width: 16, chunk: 5 }
    );
}
