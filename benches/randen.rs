// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate bencher;

use std::mem::size_of;

use bencher::{black_box, Bencher};
use rand_core::{RngCore, SeedableRng};
use rand_randen::{RandenRng, RandenSeed};

fn rand_u32_randen(b: &mut Bencher) {
    let mut rng = RandenRng::from_seed(RandenSeed::default());
    b.iter(|| {
        for _ in 0..10 {
            black_box(rng.next_u32());
        }
    });
    b.bytes = size_of::<u32>() as u64;
}

fn rand_u64_randen(b: &mut Bencher) {
    let mut rng = RandenRng::from_seed(RandenSeed::default());
    b.iter(|| {
        for _ in 0..10 {
            black_box(rng.next_u64());
        }
    });
    b.bytes = size_of::<u64>() as u64;
}

fn fill_bytes_randen(b: &mut Bencher) {
    let mut rng = RandenRng::from_seed(RandenSeed::default());
    let mut buf = [0u8; 1024];
    b.iter(|| {
        rng.fill_bytes(&mut buf);
        black_box(&buf);
    });
    b.bytes = buf.len() as u64;
}

benchmark_group!(benches, rand_u32_randen, rand_u64_randen, fill_bytes_randen);
benchmark_main!(benches);
