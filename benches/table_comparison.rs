use core::hash::BuildHasherDefault;
use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use fib_chain::HashTable as FibTable;
use hashbrown::HashMap as HashbrownMap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

type SipMap = std::collections::HashMap<u64, u64, BuildHasherDefault<SipHasher>>;

/// The operations every benchmarked table supports, keyed on `u64`.
trait Contender {
    const NAME: &'static str;

    fn empty() -> Self;
    fn put(&mut self, key: u64, value: u64);
    fn lookup(&self, key: u64) -> Option<u64>;
    fn take(&mut self, key: u64) -> Option<u64>;
}

impl Contender for FibTable<u64, u64> {
    const NAME: &'static str = "fib_chain";

    fn empty() -> Self {
        FibTable::new()
    }

    fn put(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: u64) -> Option<u64> {
        self.get(&key).ok().copied()
    }

    fn take(&mut self, key: u64) -> Option<u64> {
        self.remove(&key).ok()
    }
}

impl Contender for HashbrownMap<u64, u64> {
    const NAME: &'static str = "hashbrown";

    fn empty() -> Self {
        HashbrownMap::new()
    }

    fn put(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: u64) -> Option<u64> {
        self.get(&key).copied()
    }

    fn take(&mut self, key: u64) -> Option<u64> {
        self.remove(&key)
    }
}

impl Contender for SipMap {
    const NAME: &'static str = "std_siphash";

    fn empty() -> Self {
        SipMap::default()
    }

    fn put(&mut self, key: u64, value: u64) {
        self.insert(key, value);
    }

    fn lookup(&self, key: u64) -> Option<u64> {
        self.get(&key).copied()
    }

    fn take(&mut self, key: u64) -> Option<u64> {
        self.remove(&key)
    }
}

#[derive(Clone, Copy)]
enum Operation {
    Insert,
    Find,
    Remove,
}

const SIZES: &[usize] = &[(1 << 10), (1 << 12), (1 << 14), (1 << 16)];

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = SmallRng::from_os_rng();
    (0..count).map(|_| rng.random()).collect()
}

fn insert_random<T: Contender>(c: &mut Criterion, group_name: &str, sequential: bool) {
    let mut group = c.benchmark_group(format!("{group_name}_{}", T::NAME));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys: Vec<u64> = if sequential {
            (0..size as u64).collect()
        } else {
            random_keys(size)
        };

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    if !sequential {
                        keys.shuffle(&mut SmallRng::from_os_rng());
                    }
                    keys
                },
                |keys| {
                    let mut table = T::empty();
                    for key in keys {
                        table.put(key, key);
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_insert_random<T: Contender>(c: &mut Criterion) {
    insert_random::<T>(c, "insert_random", false);
}

fn bench_insert_sequential<T: Contender>(c: &mut Criterion) {
    insert_random::<T>(c, "insert_sequential", true);
}

fn bench_find_hit_miss<T: Contender>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_miss_{}", T::NAME));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size * 2);
        let mut table = T::empty();
        for &key in &keys[..size] {
            table.put(key, key);
        }

        let mut probes = keys.clone();
        probes.shuffle(&mut SmallRng::from_os_rng());

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("{size}"), |b| {
            b.iter(|| {
                for &key in &probes {
                    black_box(table.lookup(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<T: Contender>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", T::NAME));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let keys = random_keys(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("{size}"), |b| {
            b.iter_batched(
                || {
                    let mut table = T::empty();
                    for &key in &keys {
                        table.put(key, key);
                    }
                    let mut order = keys.clone();
                    order.shuffle(&mut SmallRng::from_os_rng());
                    (table, order)
                },
                |(mut table, order)| {
                    for key in order {
                        black_box(table.take(key));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_mixed_zipf<T: Contender>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!("mixed_zipf_{exponent:.01}_{}", T::NAME));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();
            let key_distr = Zipf::new(size as f64 * 2.0 - 1.0, 1.0).unwrap();

            let operations = (0..size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    let key = rng.sample(key_distr) as u64;
                    let operation = if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    };
                    (operation, key)
                })
                .collect::<Vec<_>>();

            group.throughput(Throughput::Elements(operations.len() as u64));
            group.bench_function(format!("{size}"), |b| {
                b.iter(|| {
                    let mut table = T::empty();
                    for &(operation, key) in &operations {
                        match operation {
                            Operation::Insert => table.put(key, key),
                            Operation::Find => {
                                black_box(table.lookup(key));
                            }
                            Operation::Remove => {
                                black_box(table.take(key));
                            }
                        }
                    }
                    black_box(table)
                })
            });
        }

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_insert_random::<FibTable<u64, u64>>,
    bench_insert_random::<HashbrownMap<u64, u64>>,
    bench_insert_random::<SipMap>,
    bench_insert_sequential::<FibTable<u64, u64>>,
    bench_insert_sequential::<HashbrownMap<u64, u64>>,
    bench_insert_sequential::<SipMap>,
    bench_find_hit_miss::<FibTable<u64, u64>>,
    bench_find_hit_miss::<HashbrownMap<u64, u64>>,
    bench_find_hit_miss::<SipMap>,
    bench_remove::<FibTable<u64, u64>>,
    bench_remove::<HashbrownMap<u64, u64>>,
    bench_remove::<SipMap>,
    bench_mixed_zipf::<FibTable<u64, u64>>,
    bench_mixed_zipf::<HashbrownMap<u64, u64>>,
    bench_mixed_zipf::<SipMap>,
);

criterion_main!(benches);
