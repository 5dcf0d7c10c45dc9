// Load measurement for RbTree instances. Measure:
// * Initial load of 1M entries, in sequential, reverse and random order.
// * Get operation over all loaded keys.
//
// For each data set validate the tree and log the elapsed time along
// with black-height and leaf-depth statistics.

use std::time::Instant;

use log::{error, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use rb_index::RbTree;

const LOAD_SIZE: i64 = 1_000_000;

fn main() {
    let res = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    if let Err(err) = res {
        eprintln!("logger: {}", err);
    }

    measure("sequential", 0..LOAD_SIZE);
    measure("reverse", (0..LOAD_SIZE).rev());

    let mut rng = SmallRng::from_seed([0x5a; 16]);
    let keys: Vec<i64> = (0..LOAD_SIZE).map(|_| rng.gen_range(0, LOAD_SIZE)).collect();
    measure("random", keys.into_iter());
}

fn measure<I>(name: &str, keys: I)
where
    I: Iterator<Item = i64>,
{
    let start = Instant::now();
    let index: RbTree<i64, i64> = RbTree::load_from(name, keys.map(|k| (k, k * 10)));
    info!("{} load {} entries in {:?}", name, index.len(), start.elapsed());

    let start = Instant::now();
    let hits = (0..LOAD_SIZE).filter(|k| index.contains_key(k)).count();
    info!("{} get {} hits in {:?}", name, hits, start.elapsed());

    match index.validate() {
        Ok(stats) => {
            info!("{} height {:?} blacks {:?}", name, index.height(), stats.blacks());
            if let Some(depths) = stats.depths() {
                depths.pretty_print(&format!("{} ", name));
                info!("{} {}", name, depths.json());
            }
        }
        Err(err) => error!("{} validate failed: {:?}", name, err),
    }
}
