use proptest::prelude::*;
use tempfile::TempDir;

use ovrboot::{AppError, SearchDepth};

use crate::harness::SdkTree;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// A root `levels` above the start is found iff it lies within the depth bound.
    #[test]
    fn root_is_found_exactly_within_bound(levels in 1usize..14, depth in 1usize..14) {
        let dir = TempDir::new().unwrap();
        let base = dir.path().canonicalize().unwrap();
        let sdk = SdkTree::create(&base, "sdk");
        let start = sdk.nested(levels);

        let result = ovrboot::locate_root_from(&start, SearchDepth::new(depth).unwrap());

        if levels <= depth {
            let root = result.unwrap();
            prop_assert_eq!(root.path(), sdk.root());
        } else {
            let is_not_found = matches!(result, Err(AppError::RootNotFound { .. }));
            prop_assert!(is_not_found);
        }
    }
}
