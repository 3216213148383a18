// Upcase
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use upcase_core::uppercase_batch;

fn benchmark_uppercase_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("uppercase_batch");

    for size in [1usize, 64, 4096] {
        let items: Vec<String> = (0..size).map(|i| format!("item-{i}-straße")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| uppercase_batch(black_box(items)));
        });
    }

    group.finish();
}

criterion_group!(batch_benches, benchmark_uppercase_batch);
criterion_main!(batch_benches);
