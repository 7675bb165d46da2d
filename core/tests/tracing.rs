#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use maybe_core::{Maybe, MaybeError};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Default, Clone)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);
impl CapturedOutput {
  fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}
impl io::Write for CapturedOutput {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }
  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[test]
fn get_on_absent_emits_trace_event() {
  let output = CapturedOutput::default();
  let writer = output.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(LevelFilter::TRACE)
    .with_ansi(false)
    .with_writer(move || writer.clone())
    .finish();
  let _guard = subscriber.set_default();

  assert_eq!(Maybe::<u8>::absent().get(), Err(MaybeError::EmptyValueAccess));
  assert_eq!(Maybe::present(1u8).get(), Ok(1));

  let contents = output.contents();
  assert_eq!(contents.matches("attempted to get value from absent container").count(), 1);
  assert!(contents.contains("TRACE"));
}
