use criterion::{black_box, criterion_group, criterion_main, Criterion};
mod common;
use common::bench_config;
use shortuuid::{converter, Alphabet, PredefinedAlphabet};

fn bench_encode_int_max(c: &mut Criterion) {
    let a = PredefinedAlphabet::Base57.alphabet();
    c.bench_function("encode_int_max", |b| {
        b.iter(|| {
            let s = converter::encode_int(black_box(u128::MAX), &a).unwrap();
            black_box(s);
        })
    });
}

fn bench_decode_string_max(c: &mut Criterion) {
    let a = PredefinedAlphabet::Base57.alphabet();
    let s = converter::encode_int(u128::MAX, &a).unwrap();
    c.bench_function("decode_string_max", |b| {
        b.iter(|| {
            let v = converter::decode_string(black_box(&s), &a).unwrap();
            black_box(v);
        })
    });
}

fn bench_round_trip_emoji(c: &mut Criterion) {
    let symbols: Vec<String> = (0x1F600u32..0x1F640)
        .filter_map(char::from_u32)
        .map(String::from)
        .collect();
    let a = Alphabet::from_symbols(&symbols).unwrap();
    c.bench_function("round_trip_emoji_64", |b| {
        b.iter(|| {
            let s = converter::encode_int(black_box(0x0123_4567_89ab_cdefu128 << 64), &a).unwrap();
            let v = converter::decode_string(&s, &a).unwrap();
            black_box(v);
        })
    });
}

criterion_group! {
    name = converter_benches;
    config = bench_config();
    targets =
        bench_encode_int_max,
        bench_decode_string_max,
        bench_round_trip_emoji,
}
criterion_main!(converter_benches);
