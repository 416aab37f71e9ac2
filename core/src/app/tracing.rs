use std::io;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::maybe::{Absent, Maybe, Present};

/// Builds the global tracing subscriber of an application: a console layer writing to stderr, and optionally a
/// layer writing to a log file.
///
/// Filters that are not set are read from the `CONSOLE_LOG` and `FILE_LOG` environment variables.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Maybe<EnvFilter>,
  log_file_path: Maybe<PathBuf>,
  file_filter: Maybe<EnvFilter>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Present(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Present(log_file_path.into());
    self
  }
  pub fn with_log_file_path_maybe(mut self, log_file_path: Maybe<impl Into<PathBuf>>) -> Self {
    self.log_file_path = log_file_path.map(Into::into);
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Present(file_filter);
    self
  }

  /// Initializes the global tracing subscriber.
  ///
  /// # Panics
  ///
  /// Panics if a global subscriber was already set.
  pub fn build(self) -> AppTracing {
    let console_filter = self.console_filter.unwrap_or_else(|| env_filter("CONSOLE_LOG"));
    let file_filter = self.file_filter;
    let file = self.log_file_path
      .map(|path| (path, file_filter.unwrap_or_else(|| env_filter("FILE_LOG"))));
    AppTracing::new(console_filter, file)
  }
}

fn env_filter(env: &str) -> EnvFilter {
  EnvFilter::try_from_env(env).unwrap_or_default()
}

/// Keeps file logging alive; drop this only when the application exits.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing {
  _guard: Maybe<tracing_appender::non_blocking::WorkerGuard>,
}
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  fn new(
    console_filter: EnvFilter,
    file: Maybe<(PathBuf, EnvFilter)>,
  ) -> Self {
    let layered = tracing_subscriber::registry();
    let layered = layered.with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(console_filter)
    );

    let _file_tracing = match file {
      #[cfg(feature = "app_tracing_file")]
      Present((file_path, filter)) => match Self::create_log_file(&file_path) {
        Err(e) => {
          layered.init();
          tracing::warn!("Cannot log to file; could not truncate/create and open log file '{}' for writing: {}", file_path.display(), e);
          FileTracing::default()
        }
        Ok(log_file) => {
          let writer = io::BufWriter::new(log_file);
          let (non_blocking, guard) = tracing_appender::non_blocking(writer);
          let layered = layered.with(
            tracing_subscriber::fmt::layer()
              .with_writer(non_blocking)
              .with_ansi(false)
              .with_filter(filter)
          );
          layered.init();
          FileTracing { _guard: Present(guard) }
        }
      },
      #[cfg(not(feature = "app_tracing_file"))]
      Present((file_path, _)) => {
        layered.init();
        tracing::warn!("Cannot log to file '{}'; file logging is not enabled", file_path.display());
        FileTracing::default()
      }
      Absent => {
        layered.init();
        FileTracing::default()
      }
    };

    Self { _file_tracing }
  }

  #[cfg(feature = "app_tracing_file")]
  fn create_log_file(file_path: &std::path::Path) -> io::Result<std::fs::File> {
    if let Some(parent) = file_path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::File::create(file_path)
  }
}
