use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use slipset_core::classify::check_bounds;
use slipset_core::config::BoundsCfg;
use slipset_core::grammar::is_partial_decimal;

// Generate a synthetic keystroke stream: mostly grammatical prefixes with a
// sprinkling of junk, the way a fast typist plus the occasional paste looks.
fn synth_keystrokes(n: usize, seed: u32) -> Vec<String> {
    // tiny PRNG
    let mut state = seed.max(1);
    let mut next_u32 = || {
        let mut x = state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state = x;
        x
    };
    let mut v = Vec::with_capacity(n);
    for _ in 0..n {
        let r = next_u32();
        let s = match r % 8 {
            0 => String::new(),
            1 => format!("{}", r % 10),
            2 => format!("{}{}", r % 10, (r >> 8) % 10),
            3 => format!("{}.", r % 10),
            4 => format!("{}.{}", r % 10, (r >> 8) % 10),
            5 => format!("{}.{}{}", r % 10, (r >> 8) % 10, (r >> 16) % 10),
            6 => format!(".{}", r % 10),
            _ => "abc1.2.3".to_string(),
        };
        v.push(s);
    }
    v
}

pub fn bench_input_pipeline(c: &mut Criterion) {
    let mut g = c.benchmark_group("input_pipeline");
    // Allow quick tweaking without CLI flags (Criterion 0.5):
    //   BENCH_SAMPLE_SIZE=10 BENCH_MEAS_MS=50 cargo bench -p slipset_core --bench classify
    if let Ok(ss) = std::env::var("BENCH_SAMPLE_SIZE") {
        if let Ok(n) = ss.parse::<usize>() {
            g.sample_size(n.max(1));
        }
    } else {
        g.sample_size(50);
    }
    if let Ok(ms) = std::env::var("BENCH_MEAS_MS")
        && let Ok(ms_u64) = ms.parse::<u64>()
    {
        g.measurement_time(std::time::Duration::from_millis(ms_u64));
    }

    let keystrokes = synth_keystrokes(10_000, 0xC0FFEE);
    let bounds = BoundsCfg::default();

    g.bench_function("grammar", |b| {
        b.iter_batched(
            || keystrokes.clone(),
            |ks| {
                let mut accepted = 0usize;
                for s in &ks {
                    if is_partial_decimal(black_box(s)) {
                        accepted += 1;
                    }
                }
                black_box(accepted);
            },
            BatchSize::SmallInput,
        )
    });

    g.bench_function("grammar_plus_classify", |b| {
        b.iter_batched(
            || keystrokes.clone(),
            |ks| {
                let mut committed = 0i64;
                for s in &ks {
                    if is_partial_decimal(s) {
                        let c = check_bounds(black_box(s), black_box(&bounds));
                        if let Some(cp) = c.value_cp {
                            committed += i64::from(cp);
                        }
                    }
                }
                black_box(committed);
            },
            BatchSize::SmallInput,
        )
    });

    g.finish();
}

criterion_group!(classify, bench_input_pipeline);
criterion_main!(classify);
