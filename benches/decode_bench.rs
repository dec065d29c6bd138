// In plait-core/benches/decode_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use plait_core::config::DecodeOptions;
use plait_core::kernels::{checksum, lfsr};
use plait_core::pipeline::decode_container;
use plait_core::utils::align_up;

// --- Mock Container Generation ---

const MAGIC: [u8; 3] = [0x02, 0x13, 0x03];
const BENCH_PAYLOAD_SIZE: usize = 65536; // 64 KB

/// Generates a vector of repetitive but non-constant payload bytes.
fn generate_payload(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Lays out a single-frame container: header, checksum, aligned payload.
fn build_single_stream_container(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&MAGIC);
    buf.push(0x20); // checksummed
    buf.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    buf.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    buf.extend_from_slice(&checksum::checksum(payload).to_be_bytes());
    buf.resize(align_up(buf.len(), 4096), 0);
    buf.extend_from_slice(payload);
    buf
}

// --- Benchmark Suite ---

fn bench_decode_pipeline(c: &mut Criterion) {
    let payload = generate_payload(BENCH_PAYLOAD_SIZE);
    let container = build_single_stream_container(&payload);
    let options = DecodeOptions::new();

    let mut group = c.benchmark_group("Decode Pipeline");
    group.throughput(criterion::Throughput::Bytes(BENCH_PAYLOAD_SIZE as u64));

    group.bench_function("Decode Checksummed Single Stream", |b| {
        b.iter(|| black_box(decode_container(black_box(&container), &options)))
    });

    group.bench_function("Checksum 64KB", |b| {
        b.iter(|| black_box(checksum::checksum(black_box(&payload))))
    });

    group.finish();
}

fn bench_keystream(c: &mut Criterion) {
    let mut group = c.benchmark_group("Keystream");

    group.bench_function("LFSR Full Period", |b| {
        b.iter(|| {
            let mut state: u16 = 0x1337;
            for _ in 0..65535 {
                state = lfsr::step(state);
            }
            black_box(state)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_decode_pipeline, bench_keystream);
criterion_main!(benches);
