use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ltv_decoder::{StreamDecoder, parse_bytes, parse_str};
use ltv_encoder::LtvEncoder;
use ltv_tests::TERMINAL_STREAM;

fn bench_parse_terminal_stream(c: &mut Criterion) {
    c.bench_function("parse_terminal_stream", |b| {
        b.iter(|| parse_str(TERMINAL_STREAM));
    });
}

fn bench_decode_by_record_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_records");

    for &count in &[10usize, 100, 1_000] {
        let mut enc = LtvEncoder::new();
        for i in 0..count {
            enc.add_text("RC", &format!("record value number {i}"));
        }
        let payload = bytes::Bytes::from(enc.encode().unwrap());

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &payload, |b, payload| {
            b.iter(|| {
                let (records, err) = parse_bytes(payload.clone());
                assert!(err.is_none());
                records
            });
        });
    }

    group.finish();
}

fn bench_decode_next_max_values(c: &mut Criterion) {
    let mut enc = LtvEncoder::new();
    for _ in 0..64 {
        enc.add_record("MX", vec![0xAB; ltv_wire::MAX_VALUE_LEN]);
    }
    let payload = enc.encode().unwrap();
    let decoder = StreamDecoder::new(payload);

    c.bench_function("decode_next_max_values", |b| {
        b.iter(|| {
            let mut d = decoder.clone();
            let mut n = 0;
            while d.decode_next().is_ok() {
                n += 1;
            }
            n
        });
    });
}

criterion_group!(
    benches,
    bench_parse_terminal_stream,
    bench_decode_by_record_count,
    bench_decode_next_max_values
);
criterion_main!(benches);
