// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(feature = "serde1")]

use rand_core::{RngCore, SeedableRng};
use rand_randen::{RandenRng, RandenSeed};

#[test]
fn test_randen_serde() {
    let mut rng = RandenRng::from_seed(RandenSeed::default());
    // Leave the generator mid-buffer, with half a word consumed.
    for _ in 0..17 {
        rng.next_u64();
    }
    rng.next_u32();

    let buf = bincode::serialize(&rng).expect("serializing failed");
    let mut restored: RandenRng = bincode::deserialize(&buf).expect("deserializing failed");

    assert_eq!(rng, restored);
    for _ in 0..128 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}
