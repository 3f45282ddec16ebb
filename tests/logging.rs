use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn writes_log_file_and_ignores_second_init() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");

    fib_overlay::logging::init(true, Some(path.clone()));
    tracing::info!("overlay log line");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("overlay log line"));

    // second init must leave the first subscriber in place
    fib_overlay::logging::init(false, None);
    tracing::info!("after reinit");
    sleep(Duration::from_millis(100));
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("after reinit"));
}
