use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use subseq::dynamic::{lcs_length, lcs_sequence, longest_increasing_subsequence};

fn random_dna(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    for &len in &[100usize, 500, 1_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_dna(&mut rng, len);
        let b = random_dna(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("length", len), &len, |bench, _| {
            bench.iter(|| lcs_length(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("sequence", len), &len, |bench, _| {
            bench.iter(|| lcs_sequence(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");
    for &len in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let data: Vec<i64> = (0..len).map(|_| rng.gen_range(0..1_000_000)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |bench, data| {
            bench.iter(|| longest_increasing_subsequence(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lcs, bench_lis);
criterion_main!(benches);
