// Licensed under the Apache-2.0 license

use proptest::prelude::*;
use sha256_hw_model::prelude::*;
use sha256_stream_test::{init_tracing, reference_digest};

fn fast_model() -> DefaultHwModel {
    init_tracing();
    sha256_hw_model::new(InitParams {
        config: Sha256StreamConfig { block_ticks: 2 },
        run_kat: false,
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every message hashes to the reference digest.
    #[test]
    fn digest_matches_reference(msg in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut model = fast_model();
        let digest = model.digest(&msg).unwrap();
        prop_assert_eq!(digest, reference_digest(&msg));
    }

    /// Stalling between bytes does not change the message.
    #[test]
    fn stalls_are_transparent(
        msg in proptest::collection::vec(any::<u8>(), 1..150),
        stalls in proptest::collection::vec(0usize..4, 150),
    ) {
        let mut model = fast_model();
        for (byte, stall) in msg.iter().zip(&stalls) {
            model.push_byte(*byte).unwrap();
            for _ in 0..*stall {
                model.wait_for_one_cycle();
            }
        }
        model.finish().unwrap();
        prop_assert_eq!(model.read_digest().unwrap(), reference_digest(&msg));
    }

    /// A model reused for several messages matches a fresh one each time.
    #[test]
    fn sequential_messages_are_independent(
        msgs in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..130), 1..5),
    ) {
        let mut model = fast_model();
        for msg in &msgs {
            prop_assert_eq!(model.digest(msg).unwrap(), reference_digest(msg));
        }
        prop_assert_eq!(model.engine().messages_completed(), msgs.len() as u64);
    }
}
