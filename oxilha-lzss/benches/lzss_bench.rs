//! Performance benchmarks for oxilha-lzss
//!
//! This benchmark suite evaluates:
//! - Decoding speed of the two LZSS engines against store passthrough
//! - Literal-heavy versus reference-heavy token streams
//! - Throughput measurements (MB/s)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilha_lzss::{LhaMethod, decode_lha};
use std::hint::black_box;

/// Generate token streams for benchmarking
mod streams {
    /// Flag-byte stream carrying only literals.
    pub fn flag_byte_literals(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        let mut out = Vec::with_capacity(size + size / 8 + 1);
        let mut remaining = size;
        while remaining > 0 {
            let n = remaining.min(8);
            out.push(0xFF >> (8 - n));
            for _ in 0..n {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                out.push((seed >> 32) as u8);
            }
            remaining -= n;
        }
        out
    }

    /// Flag-byte stream of 16 literals followed by maximum-length references.
    pub fn flag_byte_references(size: usize) -> Vec<u8> {
        let mut out = vec![0xFF];
        out.extend_from_slice(b"TOBEORNO");
        out.push(0xFF);
        out.extend_from_slice(b"TTOBEORT");
        let tokens = size.saturating_sub(16).div_ceil(18);
        for chunk in 0..tokens.div_ceil(8) {
            let n = (tokens - chunk * 8).min(8);
            out.push(0x00);
            for _ in 0..n {
                // offset 16, length 18
                out.extend_from_slice(&[0x10, 0x0F]);
            }
        }
        out
    }

    /// Bit-flag stream carrying only literals.
    pub fn bit_flag_literals(size: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(size * 9 / 8 + 1);
        let mut acc: u32 = 0;
        let mut bits = 0;
        for i in 0..size {
            acc |= (1 | (((i % 251) as u32) << 1)) << bits;
            bits += 9;
            while bits >= 8 {
                out.push(acc as u8);
                acc >>= 8;
                bits -= 8;
            }
        }
        if bits > 0 {
            out.push(acc as u8);
        }
        out
    }
}

mod data_sizes {
    pub const SMALL: usize = 4 * 1024;
    pub const MEDIUM: usize = 64 * 1024;
    pub const LARGE: usize = 1024 * 1024;
}

fn bench_decode_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_methods");
    let size = data_sizes::MEDIUM;
    group.throughput(Throughput::Bytes(size as u64));

    let stored = streams::flag_byte_literals(size);
    let inputs = [
        ("lh0", LhaMethod::Lh0, stored.clone()),
        ("lh1", LhaMethod::Lh1, streams::bit_flag_literals(size)),
        ("lh5", LhaMethod::Lh5, stored),
    ];

    for (name, method, input) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| black_box(decode_lha(black_box(input), method, size)));
        });
    }

    group.finish();
}

fn bench_flag_byte_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("flag_byte_patterns");

    for (size_name, size) in [
        ("4KB", data_sizes::SMALL),
        ("64KB", data_sizes::MEDIUM),
        ("1MB", data_sizes::LARGE),
    ] {
        group.throughput(Throughput::Bytes(size as u64));

        let literals = streams::flag_byte_literals(size);
        group.bench_with_input(
            BenchmarkId::new("literals", size_name),
            &literals,
            |b, input| b.iter(|| black_box(decode_lha(black_box(input), LhaMethod::Lh5, size))),
        );

        let references = streams::flag_byte_references(size);
        group.bench_with_input(
            BenchmarkId::new("references", size_name),
            &references,
            |b, input| b.iter(|| black_box(decode_lha(black_box(input), LhaMethod::Lh5, size))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode_methods, bench_flag_byte_patterns);
criterion_main!(benches);
