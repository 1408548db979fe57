use booklet_impose::*;

#[test]
fn test_plan_concrete_cases() {
    assert_eq!(plan_signatures(7, None, 20).unwrap(), vec![8]);
    assert_eq!(plan_signatures(45, None, 20).unwrap(), vec![20, 20, 8]);
    assert_eq!(plan_signatures(16, Some(4), 20).unwrap(), vec![4, 4, 4, 4]);
}

#[test]
fn test_plan_boundary_cases() {
    assert!(plan_signatures(0, None, 20).unwrap().is_empty());
    assert_eq!(plan_signatures(20, None, 20).unwrap(), vec![20]);
    assert_eq!(plan_signatures(21, None, 20).unwrap(), vec![20, 4]);
    assert_eq!(plan_signatures(4, None, 20).unwrap(), vec![4]);
}

#[test]
fn test_plan_respects_custom_cap() {
    assert_eq!(plan_signatures(30, None, 12).unwrap(), vec![12, 12, 8]);
    assert_eq!(plan_signatures(10, None, 12).unwrap(), vec![12]);
}

#[test]
fn test_plan_rejects_cap_not_multiple_of_4() {
    for bad in [0, 1, 6, 10, 18] {
        match plan_signatures(30, None, bad) {
            Err(ImposeError::InvalidArgument(msg)) => {
                assert!(msg.contains("multiple of 4"));
            }
            other => panic!("expected InvalidArgument for cap {bad}, got {other:?}"),
        }
    }
}

#[test]
fn test_plan_invalid_user_size() {
    for bad in [1, 2, 3, 5, 6, 7, 0] {
        let result = plan_signatures(10, Some(bad), 20);
        match result {
            Err(ImposeError::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument for size {bad}, got {other:?}"),
        }
    }
}

#[test]
fn test_plan_invariants_exhaustive() {
    for total in 0..=1000 {
        for cap in [4, 8, 12, 16, 20, 24] {
            let plan = plan_signatures(total, None, cap).unwrap();
            let sum: usize = plan.iter().sum();
            assert!(sum >= total);
            // Rounding the tail up never pads by more than 3 pages
            assert!(sum - total <= 3);
            assert!(plan.iter().all(|&s| s > 0 && s % 4 == 0));
        }
    }
}
