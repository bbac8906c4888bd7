// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iris::query::{find_matches, scan_static_tokens};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable): group names `query.find_matches` and
// `query.scan_static_tokens`.
fn benches_search(c: &mut Criterion) {
    let raw = fixtures::export_json(120, 16, 30);

    {
        let mut group = c.benchmark_group("query.find_matches");
        group.throughput(Throughput::Bytes(raw.len() as u64));

        for (case_id, query) in
            [("rare", "ORD-77"), ("common", "scalar"), ("single_char", "e")]
        {
            group.bench_function(case_id, |b| {
                b.iter(|| black_box(find_matches(black_box(&raw), black_box(query))).len())
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("query.scan_static_tokens");
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_function("export", |b| {
            b.iter(|| black_box(scan_static_tokens(black_box(&raw))).len())
        });
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_search
}
criterion_main!(benches);
