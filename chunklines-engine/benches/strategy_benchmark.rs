//! Benchmarks comparing streaming and whole-file line processing

use chunklines_engine::{ExecutionMode, Input, LineProcessor, LineSink, Result};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_test_text(size_mb: usize) -> String {
    let base_text = "This is a test line. It has a few words and then a newline.\n";
    let repetitions = size_mb * 1024 * 1024 / base_text.len();
    base_text.repeat(repetitions)
}

/// Sink that only counts, so the benchmark measures splitting and reading
#[derive(Default)]
struct CountingSink {
    lines: usize,
    bytes: usize,
}

impl LineSink for CountingSink {
    fn accept(&mut self, line: &str) -> Result<()> {
        self.lines += 1;
        self.bytes += line.len();
        Ok(())
    }
}

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let text = generate_test_text(8);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for mode in [ExecutionMode::Streaming, ExecutionMode::WholeFile] {
        let processor = LineProcessor::builder().mode(mode).build().unwrap();
        group.bench_function(BenchmarkId::from_parameter(mode), |b| {
            b.iter(|| {
                let mut sink = CountingSink::default();
                processor
                    .process(Input::from_text(black_box(text.as_str())), &mut sink)
                    .unwrap();
                black_box(sink.lines + sink.bytes)
            });
        });
    }

    group.finish();
}

fn benchmark_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size");
    group.sample_size(20);
    let text = generate_test_text(4);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for kb in [1usize, 16, 64, 256] {
        let processor = LineProcessor::builder()
            .chunk_size(kb * 1024)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("kb", kb), &kb, |b, _| {
            b.iter(|| {
                let mut sink = CountingSink::default();
                processor
                    .process(Input::from_text(black_box(text.as_str())), &mut sink)
                    .unwrap();
                black_box(sink.lines)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies, benchmark_chunk_sizes);
criterion_main!(benches);
