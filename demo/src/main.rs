use std::error::Error;

use tracing::{debug, info, warn};

use perhaps_core::{Absent, Maybe, Present};
use perhaps_core::app::env;
use perhaps_core::app::storage::Storage;
use perhaps_core::app::tracing::AppTracingBuilder;

use crate::config::Config;
use crate::linked_list::LinkedList;
use crate::peekable::Peekable;

mod config;
mod linked_list;
mod peekable;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let storage = Storage::new("demo");
  let _tracing = AppTracingBuilder::default()
    .with_log_file_path_maybe(storage.local_data_file("log.txt"))
    .build();

  let config = Config::from_env()?;
  debug!(?config, "loaded configuration");

  walk_list(&config);
  sum_numbers(&config);

  Ok(())
}

fn walk_list(config: &Config) {
  let list: LinkedList<String> = config.nodes.iter().cloned().collect();
  if list.is_empty() {
    warn!("linked list is empty; set PERHAPS_NODES to a comma-separated list of labels");
    return;
  }
  info!(%list, "walking linked list");
  for node in list.iter() {
    println!("{}", node.value());
  }
}

fn sum_numbers(config: &Config) {
  let add = Maybe::lift2(|sum: i64, number: i64| sum + number);
  let mut numbers = Peekable::new(config.numbers.iter().copied());
  let mut sum = Present(0);
  while let Some(number) = numbers.next() {
    match numbers.peek() {
      Present(next) => debug!(%number, %next, "visiting number"),
      Absent => debug!(%number, "visiting last number"),
    }
    println!("{}", number);
    sum = add(sum, number);
  }
  match sum {
    Present(sum) => info!(sum, "summed all numbers"),
    Absent => warn!("cannot sum numbers; at least one number is absent"),
  }
}
