use crate::errors::TableError;
use crate::learn_source::{LearnSource, MoveLearner};
use crate::tables::{initialize_tables, learn_source, learn_tables};
use crate::test_support::TableFixture;
use pretty_assertions::assert_eq;
use schema::{LearnEnvironment, ResourceBundle};
use tracing_subscriber::EnvFilter;

// The store is process-wide, so this is the only test that installs it.
#[test]
fn test_tables_install_once() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let bundle = ResourceBundle {
        tables: vec![
            TableFixture::new(LearnEnvironment::YW).blob(),
            TableFixture::new(LearnEnvironment::FRLG).blob(),
        ],
    };
    let bytes = bundle.to_bytes().unwrap();

    // A malformed bundle is rejected without touching the store.
    assert!(matches!(initialize_tables(&bytes[..3]), Err(TableError::Bundle(_))));
    assert!(learn_tables().is_none());

    let installed = initialize_tables(&bytes).unwrap();
    assert_eq!(installed.len(), 2);

    let yellow = learn_source(LearnEnvironment::YW).unwrap();
    assert!(matches!(yellow, LearnSource::Gen1(_)));
    assert_eq!(yellow.environment(), LearnEnvironment::YW);
    assert_eq!(learn_source(LearnEnvironment::FRLG).map(|source| source.max_move()), Some(354));
    assert!(learn_source(LearnEnvironment::C).is_none());

    assert!(matches!(initialize_tables(&bytes), Err(TableError::AlreadyInitialized)));
    assert_eq!(learn_tables().map(|set| set.len()), Some(2));
}
