use clap::Parser;
use pairs_core::{DEFAULT_RESOLVE_DELAY_MS, GameConfig};
use wasm_bindgen::prelude::*;

mod game;
mod source;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of card rows
    #[arg(long, default_value_t = 4)]
    rows: u8,

    /// Number of cards per row
    #[arg(long, default_value_t = 5)]
    cols: u8,

    /// How long a revealed pair stays up before it is resolved
    #[arg(long, default_value_t = DEFAULT_RESOLVE_DELAY_MS)]
    delay_ms: u32,
}

impl Args {
    /// Parses `#-v&--seed=42&--rows=4` style location hashes.
    fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn config(&self) -> GameConfig {
        GameConfig::new((self.rows, self.cols), self.delay_ms).unwrap_or_else(|err| {
            log::warn!(
                "{}x{} board rejected ({}), using the default",
                self.rows,
                self.cols,
                err
            );
            GameConfig {
                resolve_delay_ms: self.delay_ms,
                ..GameConfig::default()
            }
        })
    }

    fn seed(&self) -> Option<u64> {
        self.seed.as_deref().map(source::seed_from_text)
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("seed: {:?}", args.seed);

    let props = game::GameProps {
        config: args.config(),
        seed: args.seed(),
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}
