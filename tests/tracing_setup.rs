//! Global subscriber setup, kept in its own test binary.

use animtrack::util::diagnostic::LOG_ENV;
use animtrack::util::init_tracing;

#[test]
fn test_init_tracing_once() {
    assert_eq!(LOG_ENV, "ANIMTRACK_LOG");
    assert!(init_tracing());
    // A global subscriber is now set
    assert!(!init_tracing());
}
