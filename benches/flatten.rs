// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use iris::format::{flatten, load_dataset};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable): group names `format.flatten` and
// `format.load_dataset`; case IDs must not change across refactors.
fn benches_flatten(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("format.flatten");

        for (case_id, scalars, rows) in
            [("small", 4usize, 2usize), ("medium", 24, 40), ("large_rows", 12, 400)]
        {
            let xml = fixtures::message_xml(scalars, rows);
            group.throughput(Throughput::Bytes(xml.len() as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let message = flatten(black_box(&xml));
                    black_box(message.fields().len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("format.load_dataset");

        for (case_id, records) in [("few_records", 5usize), ("many_records", 200)] {
            let raw = fixtures::export_json(records, 12, 20);
            group.throughput(Throughput::Elements(records as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let dataset = load_dataset(black_box(&raw)).expect("load_dataset");
                    black_box(dataset.len())
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_flatten
}
criterion_main!(benches);
