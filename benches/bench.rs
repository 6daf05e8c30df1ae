// Copyright 2022 houseme
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snowflake_codec::Snowflake;

const DISCORD_EPOCH: u64 = 1_420_070_400_000;

fn bench_encode(c: &mut Criterion) {
    let sf = Snowflake::builder()
        .epoch(DISCORD_EPOCH)
        .worker_id(1)
        .sequence(7)
        .finalize();
    c.bench_function("bench_encode", |b| {
        b.iter(|| black_box(&sf).as_u64());
    });
}

fn bench_unmarshal_u64(c: &mut Criterion) {
    let mut sf = Snowflake::builder().epoch(DISCORD_EPOCH).finalize();
    c.bench_function("bench_unmarshal_u64", |b| {
        b.iter(|| sf.unmarshal(black_box(175928847299117063u64)));
    });
}

fn bench_unmarshal_str(c: &mut Criterion) {
    let mut sf = Snowflake::builder().epoch(DISCORD_EPOCH).finalize();
    c.bench_function("bench_unmarshal_str", |b| {
        b.iter(|| sf.unmarshal(black_box("175928847299117063")));
    });
}

criterion_group!(
    snowflake_perf,
    bench_encode,
    bench_unmarshal_u64,
    bench_unmarshal_str
);
criterion_main!(snowflake_perf);
